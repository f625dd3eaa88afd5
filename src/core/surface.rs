//! Schnittstellen zu den Kollaborateuren der Zustandsmaschine.
//!
//! Zeichenfläche, Ergebnis-Ausgabe und Start-Trigger werden als Traits
//! injiziert, damit die Logik ohne Rendering-Umgebung testbar bleibt.

use glam::Vec2;

/// Zeichenfläche, auf der Punkte, Kanten und das fertige Polygon landen.
pub trait DrawingSurface {
    /// Löscht alle gezeichneten Elemente.
    fn clear(&mut self);
    /// Zeichnet einen Eckpunkt-Marker.
    fn draw_vertex_marker(&mut self, p: Vec2);
    /// Zeichnet eine Kante von `a` nach `b`.
    fn draw_edge(&mut self, a: Vec2, b: Vec2);
    /// Zeichnet das geschlossene, halbtransparent gefüllte Polygon mit Umriss.
    fn draw_closed_filled_polygon(&mut self, vertices: &[Vec2]);
}

/// Empfänger des Flächen-Textes (leer = kein Ergebnis).
pub trait ResultSink {
    /// Ersetzt den angezeigten Text.
    fn publish(&mut self, text: &str);
    /// Aktuell angezeigter Text.
    fn text(&self) -> &str;
}

/// Start-Auslöser, der nur außerhalb einer Session aktiv sein darf.
pub trait SessionTrigger {
    /// Aktiviert oder deaktiviert den Auslöser.
    fn set_enabled(&mut self, enabled: bool);
    /// Gibt zurück, ob eine neue Session gestartet werden darf.
    fn is_enabled(&self) -> bool;
}
