//! Polygon Area Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, AreaReport, CanvasSession, PolygonTool,
    StartTrigger, ViewState,
};
pub use core::{
    is_near, polygon_area, AreaReportFormat, DrawingSurface, IgnoreReason, ResultSink,
    SessionAction, SessionState, SessionTrigger, CLOSE_THRESHOLD,
};
pub use shared::{EditorOptions, RenderScene, ScenePrimitive};
