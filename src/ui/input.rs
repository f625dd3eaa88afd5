//! Canvas-Input-Handling: Maus-Events und Shortcuts → AppIntent.
//!
//! Positionen werden relativ zur linken oberen Canvas-Ecke geliefert,
//! die Zustandsmaschine sieht nie Bildschirmkoordinaten.

use super::keyboard;
use crate::app::{AppIntent, CanvasSession};
use crate::core::SessionTrigger;
use glam::Vec2;

/// Verwaltet den Input-Zustand für den Canvas.
#[derive(Debug, Default)]
pub struct InputState {
    /// Primäre Taste wurde im Canvas gedrückt und ist noch unten
    pressed_in_canvas: bool,
    /// Letzte gemeldete Zeigerposition (Canvas-Koordinaten)
    last_pointer: Option<Vec2>,
    /// Zuletzt gemeldete Canvas-Größe
    last_canvas_size: Option<[f32; 2]>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            pressed_in_canvas: false,
            last_pointer: None,
            last_canvas_size: None,
        }
    }

    /// Letzte Zeigerposition im Canvas (für die Status-Bar).
    pub fn pointer_pos(&self) -> Option<Vec2> {
        self.last_pointer
    }

    /// Sammelt Canvas-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Reihenfolge pro Frame: Größe, Shortcuts, Down, Move, Up.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        session: &CanvasSession,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        let size = [response.rect.width(), response.rect.height()];
        if self.last_canvas_size != Some(size) {
            self.last_canvas_size = Some(size);
            events.push(AppIntent::CanvasResized { size });
        }

        events.extend(keyboard::collect_keyboard_intents(
            ui,
            session.is_drawing(),
            session.trigger().is_enabled(),
        ));

        let (pressed, released, latest_pos) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.latest_pos(),
            )
        });

        // Nur Klicks, die egui dem Canvas zuordnet (keine Fenster oder Popups darüber)
        if pressed && response.hovered() {
            if let Some(pos) = response.interact_pointer_pos().or(latest_pos) {
                let local = to_canvas(pos, response);
                self.pressed_in_canvas = true;
                events.push(AppIntent::PointerPressed { pos: local });
            }
        }

        self.handle_pointer_move(latest_pos, response, &mut events);

        if released && self.pressed_in_canvas {
            self.pressed_in_canvas = false;
            events.push(AppIntent::PointerReleased);
        }

        events
    }

    /// Meldet Zeigerbewegungen über dem Canvas oder während eines Canvas-Drags.
    fn handle_pointer_move(
        &mut self,
        latest_pos: Option<egui::Pos2>,
        response: &egui::Response,
        events: &mut Vec<AppIntent>,
    ) {
        let on_canvas = response.hovered() || response.dragged() || self.pressed_in_canvas;
        let Some(pos) = latest_pos.filter(|_| on_canvas) else {
            self.last_pointer = None;
            return;
        };

        let local = to_canvas(pos, response);
        if self.last_pointer != Some(local) {
            self.last_pointer = Some(local);
            events.push(AppIntent::PointerMoved { pos: local });
        }
    }
}

/// Rechnet eine Bildschirmposition in Canvas-Koordinaten um.
pub(crate) fn to_canvas(pointer_pos: egui::Pos2, response: &egui::Response) -> Vec2 {
    let local = pointer_pos - response.rect.min;
    Vec2::new(local.x, local.y)
}

#[cfg(test)]
mod tests;
