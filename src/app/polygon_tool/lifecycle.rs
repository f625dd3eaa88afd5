//! Lifecycle-Methoden des PolygonTool: Start, Pointer-Events, Schließen, Abbruch.

use super::redraw::redraw_committed;
use super::state::PolygonTool;
use crate::core::geometry::{is_near, polygon_area, round_area};
use crate::core::{
    DrawingSurface, IgnoreReason, ResultSink, SessionAction, SessionState, SessionTrigger,
};
use glam::Vec2;

impl<S, R, T> PolygonTool<S, R, T>
where
    S: DrawingSurface,
    R: ResultSink,
    T: SessionTrigger,
{
    /// Beginnt eine neue Session (aus jedem Zustand).
    ///
    /// Leert Zeichenfläche und Flächenausgabe und deaktiviert den Start-Trigger.
    /// Mehrfaches Starten verhindert der Aufrufer über den Trigger.
    pub fn start(&mut self) -> SessionAction {
        self.surface.clear();
        self.sink.publish("");
        self.state = SessionState::drawing();
        self.trigger.set_enabled(false);
        log::info!("Zeichen-Session gestartet");
        SessionAction::Started
    }

    /// Maustaste gedrückt: Punkt anhängen oder am ersten Punkt schließen.
    pub fn pointer_down(&mut self, p: Vec2) -> SessionAction {
        let threshold = self.close_threshold;
        let SessionState::Drawing { vertices, dragging } = &mut self.state else {
            return ignored(IgnoreReason::NotDrawing);
        };

        if vertices
            .first()
            .is_some_and(|&first| is_near(p, first, threshold))
        {
            return self.close();
        }

        vertices.push(p);
        self.surface.draw_vertex_marker(p);
        if let [.., prev, _] = vertices.as_slice() {
            self.surface.draw_edge(*prev, p);
        }
        *dragging = true;

        let index = vertices.len() - 1;
        log::debug!("Punkt {} gesetzt: ({:.1}, {:.1})", index, p.x, p.y);
        SessionAction::VertexAdded { index }
    }

    /// Mausbewegung während eines Drags: Gummiband-Vorschau zum Cursor.
    ///
    /// Zeichnet alles aus den gespeicherten Punkten neu, damit die Vorschau-Kante
    /// nie als dauerhafter Zustand übrig bleibt.
    pub fn pointer_move(&mut self, p: Vec2) -> SessionAction {
        let SessionState::Drawing { vertices, dragging } = &self.state else {
            return ignored(IgnoreReason::NotDrawing);
        };
        if !*dragging {
            return ignored(IgnoreReason::NotDragging);
        }

        redraw_committed(&mut self.surface, vertices);
        if let Some(&last) = vertices.last() {
            self.surface.draw_edge(last, p);
        }
        SessionAction::PreviewUpdated
    }

    /// Maustaste losgelassen: Drag beenden.
    pub fn pointer_up(&mut self) -> SessionAction {
        match &mut self.state {
            SessionState::Drawing { dragging, .. } if *dragging => {
                *dragging = false;
                SessionAction::DragReleased
            }
            SessionState::Drawing { .. } => ignored(IgnoreReason::NotDragging),
            SessionState::Idle => ignored(IgnoreReason::NotDrawing),
        }
    }

    /// Schließt das Polygon und veröffentlicht die Fläche.
    ///
    /// Mit weniger als 3 Punkten passiert nichts: Zustand und Ausgabe bleiben unverändert.
    pub fn close(&mut self) -> SessionAction {
        let vertices = match &self.state {
            SessionState::Idle => return ignored(IgnoreReason::NotDrawing),
            SessionState::Drawing { vertices, .. } if vertices.len() < 3 => {
                return ignored(IgnoreReason::TooFewVertices {
                    count: vertices.len(),
                });
            }
            SessionState::Drawing { vertices, .. } => vertices,
        };

        self.surface.draw_closed_filled_polygon(vertices);
        let area = polygon_area(vertices);
        let report = self.report_format.render(round_area(area));
        self.sink.publish(&report);
        log::info!("Polygon mit {} Punkten geschlossen: {}", vertices.len(), report);

        self.state = SessionState::Idle;
        self.last_area = Some(area);
        self.trigger.set_enabled(true);
        SessionAction::Closed { area }
    }

    /// Bricht die Session ab und setzt Zeichenfläche und Ausgabe zurück.
    pub fn reset(&mut self) -> SessionAction {
        self.surface.clear();
        self.sink.publish("");
        self.state = SessionState::Idle;
        self.trigger.set_enabled(true);
        log::info!("Zeichen-Session zurückgesetzt");
        SessionAction::Reset
    }
}

/// Verwirft eine Eingabe und protokolliert den Grund.
fn ignored(reason: IgnoreReason) -> SessionAction {
    log::debug!("Eingabe ignoriert: {}", reason);
    SessionAction::Ignored(reason)
}
