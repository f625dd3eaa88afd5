//! Handler für die Zeichen-Session (Start, Pointer-Events, Schließen, Abbruch).

use crate::app::AppState;
use glam::Vec2;

/// Beginnt eine neue Zeichen-Session.
pub fn start(state: &mut AppState) {
    state.session.start();
    state.status_message = None;
}

/// Bricht die laufende Session ab.
pub fn reset(state: &mut AppState) {
    state.session.reset();
}

/// Schließt das Polygon, sofern genug Punkte gesetzt sind.
pub fn close(state: &mut AppState) {
    state.session.close();
}

/// Leitet einen Pointer-Down an das Polygon-Tool weiter.
pub fn pointer_down(state: &mut AppState, pos: Vec2) {
    state.session.pointer_down(pos);
}

/// Leitet eine Zeigerbewegung an das Polygon-Tool weiter.
pub fn pointer_move(state: &mut AppState, pos: Vec2) {
    state.session.pointer_move(pos);
}

/// Leitet einen Pointer-Up an das Polygon-Tool weiter.
pub fn pointer_up(state: &mut AppState) {
    state.session.pointer_up();
}
