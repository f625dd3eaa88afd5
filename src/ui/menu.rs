//! Top-Menü (File, Edit, Help).

use crate::app::{AppIntent, AppState};
use crate::core::SessionTrigger;

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let start_enabled = state.session.trigger().is_enabled();
                if ui
                    .add_enabled(start_enabled, egui::Button::new("Neues Polygon (Ctrl+N)"))
                    .clicked()
                {
                    events.push(AppIntent::StartDrawingRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Edit", |ui| {
                let is_drawing = state.session.is_drawing();

                if ui
                    .add_enabled(is_drawing, egui::Button::new("Polygon schließen (Enter)"))
                    .clicked()
                {
                    events.push(AppIntent::ClosePolygonRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(is_drawing, egui::Button::new("Abbrechen (Esc)"))
                    .clicked()
                {
                    events.push(AppIntent::ResetDrawingRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Optionen...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    log::info!("Polygon Area Editor v{}", env!("CARGO_PKG_VERSION"));
                    ui.close();
                }
            });
        });
    });

    events
}
