//! Core-Domäne: Geometrie, Session-Zustand und Kollaborateur-Schnittstellen.

/// Näherungstest und Flächenberechnung
pub mod geometry;
pub mod session;
pub mod surface;

pub use geometry::{is_near, polygon_area, AreaReportFormat, CLOSE_THRESHOLD};
pub use session::{IgnoreReason, SessionAction, SessionState};
pub use surface::{DrawingSurface, ResultSink, SessionTrigger};
