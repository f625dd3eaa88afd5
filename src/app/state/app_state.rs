use std::path::PathBuf;

use crate::app::CommandLog;
use crate::shared::{EditorOptions, RenderScene};

use super::{AreaReport, CanvasSession, StartTrigger, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Zeichen-Session inkl. Canvas, Flächenausgabe und Start-Trigger
    pub session: CanvasSession,
    /// View-State
    pub view: ViewState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen, Schwelle, Beschriftung)
    pub options: EditorOptions,
    /// Zieldatei für gespeicherte Optionen
    pub options_path: PathBuf,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Statusnachricht (z.B. fehlgeschlagenes Speichern der Optionen)
    pub status_message: Option<String>,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State mit den übergebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        let mut session = CanvasSession::new(
            RenderScene::new(),
            AreaReport::new(),
            StartTrigger::new(),
            options.report_format(),
        );
        session.set_close_threshold(options.close_threshold);

        Self {
            session,
            view: ViewState::new(),
            command_log: CommandLog::new(),
            options,
            options_path: EditorOptions::config_path(),
            show_options_dialog: false,
            status_message: None,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der gesetzten Punkte zurück (für UI-Anzeige)
    pub fn vertex_count(&self) -> usize {
        self.session.vertices().len()
    }

    /// Überträgt die Optionen auf das Polygon-Tool.
    pub fn sync_session_options(&mut self) {
        self.session.set_close_threshold(self.options.close_threshold);
        self.session.set_report_format(self.options.report_format());
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
