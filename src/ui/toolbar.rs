//! Toolbar mit Start-Button und Session-Steuerung.

use crate::app::{AppIntent, AppState};
use crate::core::SessionTrigger;

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let session = &state.session;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            // Start-Button ist während einer Session deaktiviert
            if ui
                .add_enabled(
                    session.trigger().is_enabled(),
                    egui::Button::new("▶ Start"),
                )
                .clicked()
            {
                events.push(AppIntent::StartDrawingRequested);
            }

            let can_close = session.vertices().len() >= 3;
            if ui
                .add_enabled(can_close, egui::Button::new("⬟ Schließen (Enter)"))
                .clicked()
            {
                events.push(AppIntent::ClosePolygonRequested);
            }

            if ui
                .add_enabled(session.is_drawing(), egui::Button::new("✖ Abbrechen (Esc)"))
                .clicked()
            {
                events.push(AppIntent::ResetDrawingRequested);
            }

            ui.separator();
            ui.label(session.status_text());
        });
    });

    events
}
