//! Geometrie-Engine: Näherungstest und Flächenberechnung (Gaußsche Trapezformel).
//!
//! Alle Funktionen sind rein und zustandslos.

use glam::Vec2;

/// Standard-Schwelle (Pixel) für das Schließen des Polygons am ersten Punkt.
pub const CLOSE_THRESHOLD: f32 = 8.0;

/// Prüft, ob zwei Punkte auf beiden Achsen jeweils näher als `threshold` liegen.
///
/// Achsenweise Prüfung (Chebyshev-artig), kein Kreisradius: auch die Ecken
/// des Quadrats bis `threshold * √2` gelten als "nah". Die Grenze ist exklusiv.
pub fn is_near(a: Vec2, b: Vec2, threshold: f32) -> bool {
    (a.x - b.x).abs() < threshold && (a.y - b.y).abs() < threshold
}

/// Berechnet die Fläche eines einfachen Polygons (Shoelace-Formel).
///
/// Die Punktfolge wird zyklisch behandelt (letzter Punkt → erster Punkt),
/// die Orientierung spielt keine Rolle. Summiert wird in `f64`.
/// Für weniger als 3 Punkte ist das Ergebnis 0.
pub fn polygon_area(vertices: &[Vec2]) -> f64 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }

    let twice_signed: f64 = (0..n)
        .map(|i| {
            let a = vertices[i];
            let b = vertices[(i + 1) % n];
            f64::from(a.x) * f64::from(b.y) - f64::from(b.x) * f64::from(a.y)
        })
        .sum();

    twice_signed.abs() / 2.0
}

/// Rundet eine Fläche auf 2 Nachkommastellen.
pub fn round_area(area: f64) -> f64 {
    (area * 100.0).round() / 100.0
}

/// Formatiert eine Fläche mit genau 2 Nachkommastellen.
pub fn format_area(area: f64) -> String {
    format!("{:.2}", area)
}

/// Beschriftung der Flächenausgabe (Text vor der Zahl und Einheit dahinter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaReportFormat {
    /// Text vor dem Flächenwert
    pub label: String,
    /// Einheit nach dem Flächenwert
    pub unit: String,
}

impl AreaReportFormat {
    /// Erstellt ein Format aus Beschriftung und Einheit.
    pub fn new(label: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            unit: unit.into(),
        }
    }

    /// Baut den Ausgabetext, z.B. `"Площадь многоугольника: 6.00 кв. ед."`.
    pub fn render(&self, area: f64) -> String {
        let value = format_area(area);
        match (self.label.is_empty(), self.unit.is_empty()) {
            (true, true) => value,
            (true, false) => format!("{} {}", value, self.unit),
            (false, true) => format!("{}: {}", self.label, value),
            (false, false) => format!("{}: {} {}", self.label, value, self.unit),
        }
    }
}
