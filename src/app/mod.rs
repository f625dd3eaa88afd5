//! Application-Layer: Controller, State, Events und Polygon-Tool.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod polygon_tool;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Session, View, Optionen).
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use polygon_tool::PolygonTool;
pub use state::{AppState, AreaReport, CanvasSession, StartTrigger, ViewState};
