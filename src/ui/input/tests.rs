use super::*;
use crate::app::AppState;

/// Position innerhalb des Canvas, aber auf dem überlagernden Fenster.
const CLICK_POS: egui::Pos2 = egui::pos2(400.0, 380.0);

/// Ein Frame mit Canvas (800 x 600) und optional einem Fenster darüber.
///
/// Liefert die Intents des Canvas und dessen linke obere Ecke.
fn run_frame(
    ctx: &egui::Context,
    input: &mut InputState,
    state: &AppState,
    events: Vec<egui::Event>,
    with_window: bool,
) -> (Vec<AppIntent>, egui::Pos2) {
    let raw_input = egui::RawInput {
        screen_rect: Some(egui::Rect::from_min_size(
            egui::Pos2::ZERO,
            egui::vec2(1000.0, 800.0),
        )),
        events,
        ..Default::default()
    };

    let mut intents = Vec::new();
    let mut canvas_min = egui::Pos2::ZERO;
    let _ = ctx.run(raw_input, |ctx| {
        if with_window {
            egui::Window::new("Optionen")
                .fixed_pos(egui::pos2(300.0, 300.0))
                .fixed_size(egui::vec2(200.0, 150.0))
                .show(ctx, |ui| {
                    ui.label("Fenster über dem Canvas");
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let (rect, response) =
                ui.allocate_exact_size(egui::vec2(800.0, 600.0), egui::Sense::click_and_drag());
            canvas_min = rect.min;
            intents = input.collect_canvas_events(ui, &response, &state.session);
        });
    });

    (intents, canvas_min)
}

fn pointer_button(pressed: bool) -> egui::Event {
    egui::Event::PointerButton {
        pos: CLICK_POS,
        button: egui::PointerButton::Primary,
        pressed,
        modifiers: egui::Modifiers::default(),
    }
}

/// Bewegt den Zeiger auf `CLICK_POS`, drückt und lässt los.
fn click_sequence(with_window: bool) -> (Vec<AppIntent>, egui::Pos2) {
    let ctx = egui::Context::default();
    let mut input = InputState::new();
    let mut state = AppState::new();
    state.session.start();

    let mut intents = Vec::new();
    let mut canvas_min = egui::Pos2::ZERO;

    // Mehrere Frames, damit Layout und Fenster-Layer stehen
    for _ in 0..3 {
        let (frame_intents, min) = run_frame(
            &ctx,
            &mut input,
            &state,
            vec![egui::Event::PointerMoved(CLICK_POS)],
            with_window,
        );
        intents.extend(frame_intents);
        canvas_min = min;
    }
    for pressed in [true, false] {
        let (frame_intents, _) = run_frame(
            &ctx,
            &mut input,
            &state,
            vec![pointer_button(pressed)],
            with_window,
        );
        intents.extend(frame_intents);
    }

    (intents, canvas_min)
}

#[test]
fn test_click_on_canvas_emits_press_and_release_in_canvas_coordinates() {
    let (intents, canvas_min) = click_sequence(false);

    let expected = to_canvas_pos(CLICK_POS, canvas_min);
    assert!(intents
        .iter()
        .any(|i| matches!(i, AppIntent::PointerPressed { pos } if *pos == expected)));
    assert!(intents
        .iter()
        .any(|i| matches!(i, AppIntent::PointerReleased)));
}

#[test]
fn test_click_on_window_above_canvas_is_not_a_canvas_press() {
    let (intents, _) = click_sequence(true);

    assert!(!intents
        .iter()
        .any(|i| matches!(i, AppIntent::PointerPressed { .. })));
    assert!(!intents
        .iter()
        .any(|i| matches!(i, AppIntent::PointerReleased)));
}

#[test]
fn test_hover_over_window_does_not_emit_pointer_moves() {
    let (intents, _) = click_sequence(true);

    assert!(!intents
        .iter()
        .any(|i| matches!(i, AppIntent::PointerMoved { .. })));
}

#[test]
fn test_first_frame_reports_canvas_size_once() {
    let (intents, _) = click_sequence(false);

    let resizes: Vec<_> = intents
        .iter()
        .filter_map(|i| match i {
            AppIntent::CanvasResized { size } => Some(*size),
            _ => None,
        })
        .collect();
    assert_eq!(resizes, vec![[800.0, 600.0]]);
}

fn to_canvas_pos(pos: egui::Pos2, canvas_min: egui::Pos2) -> Vec2 {
    Vec2::new(pos.x - canvas_min.x, pos.y - canvas_min.y)
}
