//! Neuaufbau der Zeichenfläche aus den gespeicherten Eckpunkten.

use crate::core::DrawingSurface;
use glam::Vec2;

/// Leert die Fläche und zeichnet alle gesetzten Punkte samt Kanten neu.
///
/// Idempotent: mehrfacher Aufruf mit denselben Punkten ergibt denselben Inhalt.
pub(crate) fn redraw_committed<S: DrawingSurface>(surface: &mut S, vertices: &[Vec2]) {
    surface.clear();
    for (i, &p) in vertices.iter().enumerate() {
        surface.draw_vertex_marker(p);
        if i > 0 {
            surface.draw_edge(vertices[i - 1], p);
        }
    }
}
