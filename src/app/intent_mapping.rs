//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::SessionTrigger;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::StartDrawingRequested => {
            // Der Start-Trigger ist während einer Session deaktiviert
            if state.session.trigger().is_enabled() {
                vec![AppCommand::StartSession]
            } else {
                log::debug!("Start ignoriert: Session läuft bereits");
                vec![]
            }
        }
        AppIntent::ResetDrawingRequested => vec![AppCommand::ResetSession],
        AppIntent::ClosePolygonRequested => {
            if state.session.is_drawing() {
                vec![AppCommand::ClosePolygon]
            } else {
                vec![]
            }
        }
        AppIntent::PointerPressed { pos } => vec![AppCommand::PointerDown { pos }],
        AppIntent::PointerMoved { pos } => {
            // Hover-Bewegungen ohne Drag erreichen die Zustandsmaschine nicht
            if state.session.is_dragging() {
                vec![AppCommand::PointerMove { pos }]
            } else {
                vec![]
            }
        }
        AppIntent::PointerReleased => vec![AppCommand::PointerUp],
        AppIntent::CanvasResized { size } => vec![AppCommand::SetCanvasSize { size }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}
