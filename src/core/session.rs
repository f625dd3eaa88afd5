//! Zustandsmodell einer Zeichen-Session (Leerlauf vs. Zeichnen).

use glam::Vec2;
use std::fmt;

/// Zustand der Zeichen-Session.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// Keine aktive Session, keine Punkte
    #[default]
    Idle,
    /// Session läuft: gesetzte Eckpunkte und Drag-Flag
    Drawing {
        /// Eckpunkte in Klick-Reihenfolge
        vertices: Vec<Vec2>,
        /// `true` zwischen Pointer-Down und Pointer-Up
        dragging: bool,
    },
}

impl SessionState {
    /// Frischer Zeichenzustand ohne Punkte.
    pub fn drawing() -> Self {
        SessionState::Drawing {
            vertices: Vec::new(),
            dragging: false,
        }
    }

    /// Gibt zurück, ob gerade gezeichnet wird.
    pub fn is_drawing(&self) -> bool {
        matches!(self, SessionState::Drawing { .. })
    }

    /// Gibt zurück, ob ein Drag aktiv ist (nur im Zeichenzustand möglich).
    pub fn is_dragging(&self) -> bool {
        matches!(self, SessionState::Drawing { dragging: true, .. })
    }

    /// Eckpunkte der Session (leer im Leerlauf).
    pub fn vertices(&self) -> &[Vec2] {
        match self {
            SessionState::Idle => &[],
            SessionState::Drawing { vertices, .. } => vertices,
        }
    }
}

/// Ergebnis einer Operation der Zustandsmaschine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionAction {
    /// Neue Session begonnen
    Started,
    /// Eckpunkt angehängt (Index in der Punktfolge)
    VertexAdded { index: usize },
    /// Gummiband-Vorschau neu gezeichnet
    PreviewUpdated,
    /// Drag beendet
    DragReleased,
    /// Polygon geschlossen, Fläche veröffentlicht
    Closed { area: f64 },
    /// Session abgebrochen
    Reset,
    /// Eingabe verworfen (kein Fehler, nur Diagnose)
    Ignored(IgnoreReason),
}

impl SessionAction {
    /// Gibt zurück, ob die Eingabe verworfen wurde.
    pub fn is_ignored(&self) -> bool {
        matches!(self, SessionAction::Ignored(_))
    }
}

/// Grund, warum eine Eingabe keine Wirkung hatte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Keine Session aktiv
    NotDrawing,
    /// Bewegung ohne gedrückte Maustaste
    NotDragging,
    /// Schließen mit weniger als 3 Punkten
    TooFewVertices { count: usize },
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgnoreReason::NotDrawing => write!(f, "keine aktive Session"),
            IgnoreReason::NotDragging => write!(f, "kein aktiver Drag"),
            IgnoreReason::TooFewVertices { count } => {
                write!(f, "zu wenige Punkte zum Schließen ({count} < 3)")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_has_no_vertices() {
        let state = SessionState::default();
        assert!(!state.is_drawing());
        assert!(!state.is_dragging());
        assert!(state.vertices().is_empty());
    }

    #[test]
    fn test_drawing_exposes_vertices_and_drag_flag() {
        let state = SessionState::Drawing {
            vertices: vec![Vec2::ZERO, Vec2::new(10.0, 0.0)],
            dragging: true,
        };
        assert!(state.is_drawing());
        assert!(state.is_dragging());
        assert_eq!(state.vertices().len(), 2);
    }

    #[test]
    fn test_ignore_reason_display() {
        let text = IgnoreReason::TooFewVertices { count: 2 }.to_string();
        assert!(text.contains("2 < 3"));
    }
}
