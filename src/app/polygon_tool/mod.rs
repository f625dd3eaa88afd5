//! Polygon-Tool: Punkte per Klick setzen, am ersten Punkt schließen,
//! Fläche ausgeben.
//!
//! Ablauf: `start` → `pointer_down`/`pointer_move`/`pointer_up` → `close`.
//! Jede Operation liefert eine `SessionAction`; ungültige Eingaben werden
//! als `SessionAction::Ignored` verworfen, nie als Fehler.

mod lifecycle;
mod redraw;
mod state;

pub use state::PolygonTool;
