//! Handler für View-Zustand.

use crate::app::AppState;

/// Übernimmt die aktuelle Canvas-Größe.
pub fn set_canvas_size(state: &mut AppState, size: [f32; 2]) {
    if state.view.canvas_size != size {
        log::debug!("Canvas-Größe: {:.0} x {:.0}", size[0], size[1]);
        state.view.canvas_size = size;
    }
}
