//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie (über das Polygon-Tool) befüllt und
//! `render` sie konsumiert. Die Szene ist eine gehaltene Zeichenliste:
//! was gezeichnet wurde, bleibt bis zum nächsten `clear()` sichtbar.

use crate::core::DrawingSurface;
use glam::Vec2;

/// Einzelnes Zeichenelement in Canvas-Koordinaten.
#[derive(Debug, Clone, PartialEq)]
pub enum ScenePrimitive {
    /// Eckpunkt-Marker (gefüllter Kreis)
    VertexMarker(Vec2),
    /// Kante zwischen zwei Punkten
    Edge(Vec2, Vec2),
    /// Geschlossenes, halbtransparent gefülltes Polygon mit Umriss
    ClosedPolygon(Vec<Vec2>),
}

/// Gehaltene Zeichenliste für einen Canvas.
#[derive(Debug, Clone, Default)]
pub struct RenderScene {
    primitives: Vec<ScenePrimitive>,
    /// Wird bei jeder Änderung erhöht (Repaint-Erkennung im Host)
    revision: u64,
}

impl RenderScene {
    /// Erstellt eine leere Szene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Alle Elemente in Zeichenreihenfolge.
    pub fn primitives(&self) -> &[ScenePrimitive] {
        &self.primitives
    }

    /// Gibt zurück, ob die Szene leer ist.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Änderungszähler.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Anzahl der Eckpunkt-Marker.
    pub fn vertex_marker_count(&self) -> usize {
        self.count(|p| matches!(p, ScenePrimitive::VertexMarker(_)))
    }

    /// Anzahl der Kanten.
    pub fn edge_count(&self) -> usize {
        self.count(|p| matches!(p, ScenePrimitive::Edge(..)))
    }

    /// Anzahl geschlossener Polygone.
    pub fn polygon_count(&self) -> usize {
        self.count(|p| matches!(p, ScenePrimitive::ClosedPolygon(_)))
    }

    fn count(&self, pred: impl Fn(&ScenePrimitive) -> bool) -> usize {
        self.primitives.iter().filter(|p| pred(p)).count()
    }

    fn push(&mut self, primitive: ScenePrimitive) {
        self.primitives.push(primitive);
        self.revision += 1;
    }
}

impl DrawingSurface for RenderScene {
    fn clear(&mut self) {
        self.primitives.clear();
        self.revision += 1;
    }

    fn draw_vertex_marker(&mut self, p: Vec2) {
        self.push(ScenePrimitive::VertexMarker(p));
    }

    fn draw_edge(&mut self, a: Vec2, b: Vec2) {
        self.push(ScenePrimitive::Edge(a, b));
    }

    fn draw_closed_filled_polygon(&mut self, vertices: &[Vec2]) {
        self.push(ScenePrimitive::ClosedPolygon(vertices.to_vec()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_calls_are_kept_in_order() {
        let mut scene = RenderScene::new();
        scene.draw_vertex_marker(Vec2::ZERO);
        scene.draw_vertex_marker(Vec2::X);
        scene.draw_edge(Vec2::ZERO, Vec2::X);

        assert_eq!(
            scene.primitives(),
            &[
                ScenePrimitive::VertexMarker(Vec2::ZERO),
                ScenePrimitive::VertexMarker(Vec2::X),
                ScenePrimitive::Edge(Vec2::ZERO, Vec2::X),
            ]
        );
        assert_eq!(scene.vertex_marker_count(), 2);
        assert_eq!(scene.edge_count(), 1);
    }

    #[test]
    fn clear_empties_scene_and_bumps_revision() {
        let mut scene = RenderScene::new();
        scene.draw_closed_filled_polygon(&[Vec2::ZERO, Vec2::X, Vec2::Y]);
        let before = scene.revision();

        scene.clear();

        assert!(scene.is_empty());
        assert!(scene.revision() > before);
    }
}
