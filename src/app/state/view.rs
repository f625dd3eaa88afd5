/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Aktuelle Canvas-Größe in Pixel
    pub canvas_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            canvas_size: [0.0, 0.0],
        }
    }
}
