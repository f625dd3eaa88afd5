//! State-Definitionen und Konstruktor für das Polygon-Tool.

use crate::core::geometry::{AreaReportFormat, CLOSE_THRESHOLD};
use crate::core::{DrawingSurface, ResultSink, SessionState, SessionTrigger};
use glam::Vec2;

/// Polygon-Tool: Zustandsmaschine für Klick-Polygone mit Flächenausgabe.
///
/// Zeichenfläche, Ergebnis-Ausgabe und Start-Trigger werden im Konstruktor
/// übergeben und ausschließlich von diesem Tool verändert.
pub struct PolygonTool<S, R, T> {
    pub(crate) state: SessionState,
    pub(crate) surface: S,
    pub(crate) sink: R,
    pub(crate) trigger: T,
    /// Schwelle für das Schließen am ersten Punkt (aus EditorOptions)
    pub(crate) close_threshold: f32,
    /// Beschriftung der Flächenausgabe (aus EditorOptions)
    pub(crate) report_format: AreaReportFormat,
    /// Fläche des zuletzt geschlossenen Polygons
    pub(crate) last_area: Option<f64>,
}

impl<S, R, T> PolygonTool<S, R, T>
where
    S: DrawingSurface,
    R: ResultSink,
    T: SessionTrigger,
{
    /// Erstellt ein Tool im Leerlauf; der Start-Trigger wird aktiviert.
    pub fn new(surface: S, sink: R, mut trigger: T, report_format: AreaReportFormat) -> Self {
        trigger.set_enabled(true);
        Self {
            state: SessionState::Idle,
            surface,
            sink,
            trigger,
            close_threshold: CLOSE_THRESHOLD,
            report_format,
            last_area: None,
        }
    }
}

impl<S, R, T> PolygonTool<S, R, T> {
    /// Aktueller Session-Zustand.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Bisher gesetzte Eckpunkte (leer im Leerlauf).
    pub fn vertices(&self) -> &[Vec2] {
        self.state.vertices()
    }

    /// Gibt zurück, ob gerade gezeichnet wird.
    pub fn is_drawing(&self) -> bool {
        self.state.is_drawing()
    }

    /// Gibt zurück, ob ein Drag aktiv ist.
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Fläche des zuletzt geschlossenen Polygons (ungerundet).
    pub fn last_area(&self) -> Option<f64> {
        self.last_area
    }

    /// Read-only Zugriff auf die Zeichenfläche.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Read-only Zugriff auf die Ergebnis-Ausgabe.
    pub fn sink(&self) -> &R {
        &self.sink
    }

    /// Read-only Zugriff auf den Start-Trigger.
    pub fn trigger(&self) -> &T {
        &self.trigger
    }

    /// Aktuelle Schließ-Schwelle.
    pub fn close_threshold(&self) -> f32 {
        self.close_threshold
    }

    /// Setzt die Schließ-Schwelle (nicht-positive Werte werden ignoriert).
    pub fn set_close_threshold(&mut self, threshold: f32) {
        if threshold > 0.0 {
            self.close_threshold = threshold;
        } else {
            log::warn!("Ungültige Schließ-Schwelle {} ignoriert", threshold);
        }
    }

    /// Setzt die Beschriftung für künftige Flächenausgaben.
    pub fn set_report_format(&mut self, format: AreaReportFormat) {
        self.report_format = format;
    }

    /// Status-Text für die Status-Bar.
    pub fn status_text(&self) -> &str {
        match self.vertices().len() {
            _ if !self.is_drawing() => "Start klicken, um ein Polygon zu zeichnen",
            0 => "Ersten Punkt klicken",
            1 | 2 => "Weitere Punkte klicken",
            _ => "Ersten Punkt klicken (oder Enter), um zu schließen",
        }
    }
}
