//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::core::ResultSink;

/// Rendert die Status-Bar
pub fn render_status_bar(
    ctx: &egui::Context,
    state: &AppState,
    pointer_pos: Option<glam::Vec2>,
) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let mode = if state.session.is_drawing() {
                "Zeichnen"
            } else {
                "Leerlauf"
            };
            ui.label(format!("Modus: {} | Punkte: {}", mode, state.vertex_count()));

            ui.separator();

            let [w, h] = state.view.canvas_size;
            ui.label(format!("Canvas: {:.0} × {:.0}", w, h));

            ui.separator();

            if let Some(pos) = pointer_pos {
                ui.label(format!("Position: ({:.0}, {:.0})", pos.x, pos.y));
            } else {
                ui.label("Position: –");
            }

            // Flächenausgabe (leer solange kein Polygon geschlossen wurde)
            let report = state.session.sink();
            if report.has_result() {
                ui.separator();
                ui.label(egui::RichText::new(report.text()).strong());
            }

            // Statusnachricht (z.B. Optionen nicht gespeichert)
            if let Some(ref msg) = state.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }
        });
    });
}
