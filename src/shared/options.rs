//! Zentrale Konfiguration für den Polygon Area Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::geometry::{AreaReportFormat, CLOSE_THRESHOLD};
use serde::{Deserialize, Serialize};

// ── Canvas ──────────────────────────────────────────────────────────

/// Standard-Breite des Canvas in Pixeln.
pub const CANVAS_WIDTH: f32 = 800.0;
/// Standard-Höhe des Canvas in Pixeln.
pub const CANVAS_HEIGHT: f32 = 600.0;
/// Hintergrundfarbe des Canvas (RGBA: Weiß).
pub const CANVAS_BACKGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── Punkte & Kanten ─────────────────────────────────────────────────

/// Radius der Eckpunkt-Marker in Pixeln.
pub const VERTEX_RADIUS: f32 = 5.0;
/// Farbe der Eckpunkt-Marker (RGBA: Blau).
pub const VERTEX_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
/// Linienstärke der Kanten in Pixeln.
pub const EDGE_WIDTH: f32 = 2.0;
/// Farbe der Kanten (RGBA: Blau).
pub const EDGE_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

// ── Polygon ─────────────────────────────────────────────────────────

/// Füllfarbe des geschlossenen Polygons (RGB, Alpha über `POLYGON_FILL_ALPHA`).
pub const POLYGON_FILL_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
/// Deckkraft der Polygon-Füllung.
pub const POLYGON_FILL_ALPHA: f32 = 0.2;

// ── Flächenausgabe ──────────────────────────────────────────────────

/// Text vor dem Flächenwert.
pub const REPORT_LABEL: &str = "Площадь многоугольника";
/// Einheit nach dem Flächenwert.
pub const REPORT_UNIT: &str = "кв. ед.";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `polygon_area_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Canvas ──────────────────────────────────────────────────
    /// Canvas-Breite in Pixeln
    pub canvas_width: f32,
    /// Canvas-Höhe in Pixeln
    pub canvas_height: f32,
    /// Hintergrundfarbe des Canvas
    pub canvas_background: [f32; 4],

    // ── Schließen ───────────────────────────────────────────────
    /// Achsenweise Schwelle (Pixel) für das Schließen am ersten Punkt
    pub close_threshold: f32,

    // ── Punkte & Kanten ─────────────────────────────────────────
    /// Radius der Eckpunkt-Marker
    pub vertex_radius: f32,
    /// Farbe der Eckpunkt-Marker
    pub vertex_color: [f32; 4],
    /// Linienstärke der Kanten
    pub edge_width: f32,
    /// Farbe der Kanten und des Polygon-Umrisses
    pub edge_color: [f32; 4],

    // ── Polygon ─────────────────────────────────────────────────
    /// Füllfarbe des geschlossenen Polygons
    pub polygon_fill_color: [f32; 4],
    /// Deckkraft der Polygon-Füllung (0.0 – 1.0)
    pub polygon_fill_alpha: f32,

    // ── Flächenausgabe ──────────────────────────────────────────
    /// Text vor dem Flächenwert
    pub report_label: String,
    /// Einheit nach dem Flächenwert
    pub report_unit: String,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            canvas_background: CANVAS_BACKGROUND,

            close_threshold: CLOSE_THRESHOLD,

            vertex_radius: VERTEX_RADIUS,
            vertex_color: VERTEX_COLOR,
            edge_width: EDGE_WIDTH,
            edge_color: EDGE_COLOR,

            polygon_fill_color: POLYGON_FILL_COLOR,
            polygon_fill_alpha: POLYGON_FILL_ALPHA,

            report_label: REPORT_LABEL.to_string(),
            report_unit: REPORT_UNIT.to_string(),
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("polygon_area_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("polygon_area_editor.toml")
    }

    /// Beschriftung der Flächenausgabe aus Label und Einheit.
    pub fn report_format(&self) -> AreaReportFormat {
        AreaReportFormat::new(self.report_label.clone(), self.report_unit.clone())
    }
}
