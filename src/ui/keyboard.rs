//! Keyboard-Shortcuts für den Canvas.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(
    ui: &egui::Ui,
    is_drawing: bool,
    start_enabled: bool,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, key_n_pressed, key_enter_pressed, key_escape_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::N),
            i.key_pressed(egui::Key::Enter),
            i.key_pressed(egui::Key::Escape),
        )
    });

    // Ctrl+N = neue Session (nur wenn der Start-Button aktiv ist)
    if modifiers.command && key_n_pressed && start_enabled {
        events.push(AppIntent::StartDrawingRequested);
    }

    if is_drawing {
        if key_enter_pressed {
            events.push(AppIntent::ClosePolygonRequested);
        }
        if key_escape_pressed {
            events.push(AppIntent::ResetDrawingRequested);
        }
    }

    events
}
