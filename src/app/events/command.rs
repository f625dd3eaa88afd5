use crate::shared::EditorOptions;
use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Neue Zeichen-Session beginnen
    StartSession,
    /// Session abbrechen und Canvas leeren
    ResetSession,
    /// Polygon schließen (falls mindestens 3 Punkte)
    ClosePolygon,
    /// Pointer-Down an Canvas-Position
    PointerDown { pos: Vec2 },
    /// Pointer-Move an Canvas-Position
    PointerMove { pos: Vec2 },
    /// Pointer-Up
    PointerUp,
    /// Canvas-Größe setzen
    SetCanvasSize { size: [f32; 2] },
    /// Anwendung beenden
    RequestExit,
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schließen
    CloseOptionsDialog,
    /// Optionen anwenden und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen und speichern
    ResetOptions,
}
