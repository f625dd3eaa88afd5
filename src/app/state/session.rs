//! Host-seitige Kollaborateure des Polygon-Tools: Flächenausgabe und Start-Trigger.

use crate::app::polygon_tool::PolygonTool;
use crate::core::{ResultSink, SessionTrigger};
use crate::shared::RenderScene;

/// Polygon-Tool mit den Kollaborateuren der Desktop-Oberfläche.
pub type CanvasSession = PolygonTool<RenderScene, AreaReport, StartTrigger>;

/// Flächenausgabe für die Status-Bar (leer = kein Ergebnis).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AreaReport {
    text: String,
}

impl AreaReport {
    /// Erstellt eine leere Ausgabe.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt zurück, ob ein Ergebnis angezeigt wird.
    pub fn has_result(&self) -> bool {
        !self.text.is_empty()
    }
}

impl ResultSink for AreaReport {
    fn publish(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }

    fn text(&self) -> &str {
        &self.text
    }
}

/// Zustand des Start-Buttons in der Toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartTrigger {
    enabled: bool,
}

impl StartTrigger {
    /// Erstellt einen aktiven Trigger.
    pub fn new() -> Self {
        Self { enabled: true }
    }
}

impl Default for StartTrigger {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionTrigger for StartTrigger {
    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}
