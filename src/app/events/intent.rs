use crate::shared::EditorOptions;
use glam::Vec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Start-Button geklickt: neue Zeichen-Session
    StartDrawingRequested,
    /// Session abbrechen (Escape / Toolbar)
    ResetDrawingRequested,
    /// Polygon über Tastatur schließen (Enter)
    ClosePolygonRequested,
    /// Primäre Maustaste im Canvas gedrückt (Canvas-Koordinaten)
    PointerPressed { pos: Vec2 },
    /// Zeiger im Canvas bewegt (Canvas-Koordinaten)
    PointerMoved { pos: Vec2 },
    /// Primäre Maustaste losgelassen
    PointerReleased,
    /// Canvas-Größe hat sich geändert
    CanvasResized { size: [f32; 2] },
    /// Anwendung beenden
    ExitRequested,
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden im Dialog geändert
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
