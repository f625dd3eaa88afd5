//! Optionen-Dialog für Farben, Größen, Schließ-Schwelle und Beschriftung.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    // ── Canvas ──────────────────────────────────────
                    ui.collapsing("Canvas", |ui| {
                        changed |= drag_value(
                            ui,
                            "Breite (px):",
                            &mut opts.canvas_width,
                            100.0..=4000.0,
                            1.0,
                        );
                        changed |= drag_value(
                            ui,
                            "Höhe (px):",
                            &mut opts.canvas_height,
                            100.0..=4000.0,
                            1.0,
                        );
                        changed |= color_edit(ui, "Hintergrund:", &mut opts.canvas_background);
                    });

                    // ── Schließen ───────────────────────────────────
                    ui.collapsing("Schließen", |ui| {
                        changed |= drag_value(
                            ui,
                            "Schwelle (px):",
                            &mut opts.close_threshold,
                            1.0..=50.0,
                            0.5,
                        );
                        ui.label(
                            "Klick innerhalb der Schwelle (je Achse) um den ersten Punkt \
                             schließt das Polygon.",
                        );
                    });

                    // ── Punkte & Kanten ─────────────────────────────
                    ui.collapsing("Punkte & Kanten", |ui| {
                        changed |= drag_value(
                            ui,
                            "Punkt-Radius:",
                            &mut opts.vertex_radius,
                            1.0..=20.0,
                            0.1,
                        );
                        changed |= color_edit(ui, "Punkt-Farbe:", &mut opts.vertex_color);
                        changed |= drag_value(
                            ui,
                            "Kantenbreite:",
                            &mut opts.edge_width,
                            0.5..=10.0,
                            0.1,
                        );
                        changed |= color_edit(ui, "Kanten-Farbe:", &mut opts.edge_color);
                    });

                    // ── Polygon ─────────────────────────────────────
                    ui.collapsing("Polygon", |ui| {
                        changed |= color_edit(ui, "Füllfarbe:", &mut opts.polygon_fill_color);
                        ui.horizontal(|ui| {
                            ui.label("Deckkraft:");
                            changed |= ui
                                .add(egui::Slider::new(&mut opts.polygon_fill_alpha, 0.0..=1.0))
                                .changed();
                        });
                    });

                    // ── Flächenausgabe ──────────────────────────────
                    ui.collapsing("Flächenausgabe", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Beschriftung:");
                            changed |= ui.text_edit_singleline(&mut opts.report_label).changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Einheit:");
                            changed |= ui.text_edit_singleline(&mut opts.report_unit).changed();
                        });
                        ui.label(format!("Vorschau: {}", opts.report_format().render(6.0)));
                    });
                });

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Zeigt ein beschriftetes `DragValue` und meldet Änderungen.
fn drag_value(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f32,
    range: std::ops::RangeInclusive<f32>,
    speed: f64,
) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::DragValue::new(value).range(range).speed(speed))
            .changed()
    })
    .inner
}

/// Hilfsfunktion: RGBA-Farbeditor für `[f32; 4]`.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = egui::Color32::from_rgba_unmultiplied(
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
            (color[3] * 255.0) as u8,
        );
        if ui.color_edit_button_srgba(&mut c).changed() {
            color[0] = c.r() as f32 / 255.0;
            color[1] = c.g() as f32 / 255.0;
            color[2] = c.b() as f32 / 255.0;
            color[3] = c.a() as f32 / 255.0;
            changed = true;
        }
    });
    changed
}
