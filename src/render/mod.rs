//! Render-Layer: zeichnet eine `RenderScene` mit dem egui-Painter.
//!
//! Die Szene liegt in Canvas-Koordinaten vor; `rect.min` ist der Ursprung.

use crate::shared::{EditorOptions, RenderScene, ScenePrimitive};
use eframe::egui;
use glam::Vec2;

/// Zeichnet Hintergrund und alle Elemente der Szene in das Canvas-Rechteck.
pub fn paint_scene(
    painter: &egui::Painter,
    rect: egui::Rect,
    scene: &RenderScene,
    options: &EditorOptions,
) {
    painter.rect_filled(rect, 0.0, to_color32(options.canvas_background));

    let painter = painter.with_clip_rect(rect);
    let edge_stroke = egui::Stroke::new(options.edge_width, to_color32(options.edge_color));
    let vertex_color = to_color32(options.vertex_color);

    for primitive in scene.primitives() {
        match primitive {
            ScenePrimitive::VertexMarker(p) => {
                painter.circle_filled(to_screen(rect, *p), options.vertex_radius, vertex_color);
            }
            ScenePrimitive::Edge(a, b) => {
                painter.line_segment([to_screen(rect, *a), to_screen(rect, *b)], edge_stroke);
            }
            ScenePrimitive::ClosedPolygon(vertices) => {
                paint_closed_polygon(&painter, rect, vertices, options, edge_stroke);
            }
        }
    }
}

/// Zeichnet die halbtransparente Füllung und den geschlossenen Umriss.
fn paint_closed_polygon(
    painter: &egui::Painter,
    rect: egui::Rect,
    vertices: &[Vec2],
    options: &EditorOptions,
    stroke: egui::Stroke,
) {
    if vertices.len() < 3 {
        return;
    }

    let points: Vec<egui::Pos2> = vertices.iter().map(|&v| to_screen(rect, v)).collect();
    let [r, g, b, _] = options.polygon_fill_color;
    let fill = to_color32([r, g, b, options.polygon_fill_alpha.clamp(0.0, 1.0)]);

    // egui füllt nur konvexe Pfade korrekt → Füllung über trianguliertes Mesh
    painter.add(egui::Shape::mesh(fill_mesh(&points, fill)));
    painter.add(egui::Shape::closed_line(points, stroke));
}

/// Trianguliert das Polygon (Ear-Clipping) und baut daraus ein Mesh.
///
/// Schlägt die Triangulierung fehl (z.B. bei Selbstüberschneidung),
/// wird ein Dreiecksfächer über alle Eckpunkte verwendet.
fn fill_mesh(points: &[egui::Pos2], color: egui::Color32) -> egui::Mesh {
    let mut mesh = egui::Mesh::default();
    for &p in points {
        mesh.colored_vertex(p, color);
    }

    let coords: Vec<f64> = points
        .iter()
        .flat_map(|p| [f64::from(p.x), f64::from(p.y)])
        .collect();

    match earcutr::earcut(&coords, &[], 2) {
        Ok(indices) if !indices.is_empty() && indices.len() % 3 == 0 => {
            for tri in indices.chunks_exact(3) {
                mesh.add_triangle(tri[0] as u32, tri[1] as u32, tri[2] as u32);
            }
        }
        _ => {
            log::debug!("Triangulierung fehlgeschlagen, verwende Dreiecksfächer");
            for i in 1..points.len().saturating_sub(1) {
                mesh.add_triangle(0, i as u32, (i + 1) as u32);
            }
        }
    }
    mesh
}

/// Rechnet eine Canvas-Position in eine Bildschirmposition um.
pub fn to_screen(rect: egui::Rect, p: Vec2) -> egui::Pos2 {
    egui::pos2(rect.min.x + p.x, rect.min.y + p.y)
}

/// Wandelt eine RGBA-Farbe (0.0 – 1.0) in `Color32` um.
pub fn to_color32(color: [f32; 4]) -> egui::Color32 {
    let [r, g, b, a] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_screen_offsets_by_rect_origin() {
        let rect = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(100.0, 100.0));
        assert_eq!(to_screen(rect, Vec2::new(5.0, 5.0)), egui::pos2(15.0, 25.0));
    }

    #[test]
    fn to_color32_scales_and_clamps() {
        let c = to_color32([0.0, 0.5, 2.0, 1.0]);
        assert_eq!(c, egui::Color32::from_rgba_unmultiplied(0, 128, 255, 255));
    }

    #[test]
    fn fill_mesh_triangulates_square() {
        let points = [
            egui::pos2(0.0, 0.0),
            egui::pos2(10.0, 0.0),
            egui::pos2(10.0, 10.0),
            egui::pos2(0.0, 10.0),
        ];
        let mesh = fill_mesh(&points, egui::Color32::BLUE);
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices.len(), 6);
    }

    #[test]
    fn fill_mesh_covers_concave_polygon() {
        // L-Form: 6 Eckpunkte → 4 Dreiecke
        let points = [
            egui::pos2(0.0, 0.0),
            egui::pos2(20.0, 0.0),
            egui::pos2(20.0, 10.0),
            egui::pos2(10.0, 10.0),
            egui::pos2(10.0, 20.0),
            egui::pos2(0.0, 20.0),
        ];
        let mesh = fill_mesh(&points, egui::Color32::BLUE);
        assert_eq!(mesh.indices.len(), 12);
    }
}
