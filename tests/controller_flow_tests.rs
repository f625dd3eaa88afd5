use glam::Vec2;
use polygon_area_editor::{
    AppCommand, AppController, AppIntent, AppState, EditorOptions, ResultSink, SessionState,
    SessionTrigger,
};

fn press_and_release(controller: &mut AppController, state: &mut AppState, pos: Vec2) {
    controller
        .handle_intent(state, AppIntent::PointerPressed { pos })
        .expect("PointerPressed sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(state, AppIntent::PointerReleased)
        .expect("PointerReleased sollte ohne Fehler durchlaufen");
}

/// App-State, dessen Optionen in eine eigene Temp-Datei geschrieben werden.
fn state_with_temp_options(name: &str) -> AppState {
    let mut state = AppState::new();
    state.options_path = std::env::temp_dir().join(format!(
        "polygon_area_editor_{}_{}.toml",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_file(&state.options_path);
    state
}

fn start_session(controller: &mut AppController, state: &mut AppState) {
    controller
        .handle_intent(state, AppIntent::StartDrawingRequested)
        .expect("StartDrawingRequested sollte ohne Fehler durchlaufen");
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_start_requested_logs_start_command_and_disables_trigger() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    start_session(&mut controller, &mut state);

    assert!(state.session.is_drawing());
    assert!(!state.session.trigger().is_enabled());
    match state.command_log.entries().last() {
        Some(AppCommand::StartSession) => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_start_requested_while_drawing_is_dropped() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    start_session(&mut controller, &mut state);
    press_and_release(&mut controller, &mut state, Vec2::new(10.0, 10.0));
    let logged_before = state.command_log.len();

    start_session(&mut controller, &mut state);

    assert_eq!(state.command_log.len(), logged_before);
    assert_eq!(state.vertex_count(), 1);
}

#[test]
fn test_hover_without_drag_is_not_logged() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    start_session(&mut controller, &mut state);
    let logged_before = state.command_log.len();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                pos: Vec2::new(50.0, 50.0),
            },
        )
        .expect("PointerMoved sollte ohne Fehler durchlaufen");

    assert_eq!(state.command_log.len(), logged_before);
}

#[test]
fn test_full_drawing_flow_publishes_area() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    start_session(&mut controller, &mut state);
    for pos in [
        Vec2::new(100.0, 100.0),
        Vec2::new(300.0, 100.0),
        Vec2::new(300.0, 200.0),
        Vec2::new(100.0, 200.0),
    ] {
        press_and_release(&mut controller, &mut state, pos);
    }
    assert_eq!(state.vertex_count(), 4);

    // Klick 5 px neben dem ersten Punkt schließt
    press_and_release(&mut controller, &mut state, Vec2::new(105.0, 96.0));

    assert_eq!(state.session.state(), &SessionState::Idle);
    assert!(state.session.trigger().is_enabled());
    assert_eq!(
        state.session.sink().text(),
        "Площадь многоугольника: 20000.00 кв. ед."
    );
    assert_eq!(state.session.surface().polygon_count(), 1);
}

#[test]
fn test_drag_preview_flow_logs_move_commands() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    start_session(&mut controller, &mut state);

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                pos: Vec2::new(10.0, 10.0),
            },
        )
        .expect("PointerPressed sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerMoved {
                pos: Vec2::new(80.0, 40.0),
            },
        )
        .expect("PointerMoved sollte ohne Fehler durchlaufen");

    match state.command_log.entries().last() {
        Some(AppCommand::PointerMove { pos }) => assert_eq!(*pos, Vec2::new(80.0, 40.0)),
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
    assert_eq!(state.session.surface().edge_count(), 1);
}

#[test]
fn test_close_requested_with_too_few_vertices_keeps_drawing() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    start_session(&mut controller, &mut state);
    press_and_release(&mut controller, &mut state, Vec2::new(10.0, 10.0));
    press_and_release(&mut controller, &mut state, Vec2::new(90.0, 10.0));

    controller
        .handle_intent(&mut state, AppIntent::ClosePolygonRequested)
        .expect("ClosePolygonRequested sollte ohne Fehler durchlaufen");

    assert!(state.session.is_drawing());
    assert_eq!(state.vertex_count(), 2);
    assert_eq!(state.session.sink().text(), "");
}

#[test]
fn test_reset_requested_clears_canvas() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    start_session(&mut controller, &mut state);
    press_and_release(&mut controller, &mut state, Vec2::new(10.0, 10.0));

    controller
        .handle_intent(&mut state, AppIntent::ResetDrawingRequested)
        .expect("ResetDrawingRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.session.state(), &SessionState::Idle);
    assert!(state.session.surface().is_empty());
    assert!(state.session.trigger().is_enabled());
}

#[test]
fn test_canvas_resized_updates_view() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::CanvasResized { size: [640.0, 480.0] })
        .expect("CanvasResized sollte ohne Fehler durchlaufen");

    assert_eq!(state.view.canvas_size, [640.0, 480.0]);
}

#[test]
fn test_options_dialog_open_and_close() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::OpenOptionsDialogRequested)
        .expect("OpenOptionsDialogRequested sollte ohne Fehler durchlaufen");
    assert!(state.show_options_dialog);

    controller
        .handle_intent(&mut state, AppIntent::CloseOptionsDialogRequested)
        .expect("CloseOptionsDialogRequested sollte ohne Fehler durchlaufen");
    assert!(!state.show_options_dialog);
}

#[test]
fn test_options_changed_updates_threshold_and_report_format() {
    let mut controller = AppController::new();
    let mut state = state_with_temp_options("options_changed");

    let mut options = EditorOptions::default();
    options.close_threshold = 20.0;
    options.report_label = "Area".to_string();
    options.report_unit = "px²".to_string();

    controller
        .handle_intent(&mut state, AppIntent::OptionsChanged { options })
        .expect("OptionsChanged sollte ohne Fehler durchlaufen");

    assert_eq!(state.session.close_threshold(), 20.0);
    let saved = EditorOptions::load_from_file(&state.options_path);
    let _ = std::fs::remove_file(&state.options_path);
    assert_eq!(saved.close_threshold, 20.0);
    assert_eq!(saved.report_label, "Area");

    start_session(&mut controller, &mut state);
    for pos in [
        Vec2::new(0.0, 0.0),
        Vec2::new(100.0, 0.0),
        Vec2::new(100.0, 100.0),
    ] {
        press_and_release(&mut controller, &mut state, pos);
    }
    press_and_release(&mut controller, &mut state, Vec2::new(15.0, 15.0));

    assert_eq!(state.session.sink().text(), "Area: 5000.00 px²");
}

#[test]
fn test_reset_options_restores_defaults_in_temp_file() {
    let mut controller = AppController::new();
    let mut state = state_with_temp_options("reset_options");
    state.options.close_threshold = 30.0;
    state.sync_session_options();

    controller
        .handle_intent(&mut state, AppIntent::ResetOptionsRequested)
        .expect("ResetOptionsRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.options, EditorOptions::default());
    assert_eq!(state.session.close_threshold(), 8.0);
    assert!(state.options_path.exists());
    assert_ne!(state.options_path, EditorOptions::config_path());

    let saved = EditorOptions::load_from_file(&state.options_path);
    let _ = std::fs::remove_file(&state.options_path);
    assert_eq!(saved, EditorOptions::default());
}
