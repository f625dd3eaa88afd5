//! Application State — zentrale Datenhaltung.

mod app_state;
mod session;
mod view;

pub use app_state::AppState;
pub use session::{AreaReport, CanvasSession, StartTrigger};
pub use view::ViewState;
