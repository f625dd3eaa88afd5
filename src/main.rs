//! Polygon Area Editor.
//!
//! Polygon per Mausklick zeichnen, am ersten Punkt schließen,
//! Fläche nach der Gaußschen Trapezformel ausgeben.

use eframe::egui;
use polygon_area_editor::{render, ui, AppController, AppIntent, AppState, EditorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Polygon Area Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([
                    editor_options.canvas_width + 40.0,
                    editor_options.canvas_height + 120.0,
                ])
                .with_title("Polygon Area Editor"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Polygon Area Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new(editor_options)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
    last_scene_revision: u64,
}

impl EditorApp {
    fn new(editor_options: EditorOptions) -> Self {
        let state = AppState::with_options(editor_options);
        let last_scene_revision = state.session.surface().revision();

        Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
            last_scene_revision,
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::CanvasResized { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_toolbar(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state, self.input.pointer_pos());
        events.extend(ui::show_options_dialog(ctx, &self.state));

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let canvas_size = egui::vec2(
                self.state.options.canvas_width.min(available.x),
                self.state.options.canvas_height.min(available.y),
            );
            let (rect, response) =
                ui.allocate_exact_size(canvas_size, egui::Sense::click_and_drag());

            events.extend(
                self.input
                    .collect_canvas_events(ui, &response, &self.state.session),
            );

            render::paint_scene(
                ui.painter(),
                rect,
                self.state.session.surface(),
                &self.state.options,
            );
        });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
                self.state.status_message = Some(format!("{:#}", e));
            }
        }
    }

    fn maybe_request_repaint(&mut self, ctx: &egui::Context, has_meaningful_events: bool) {
        let revision = self.state.session.surface().revision();
        let scene_changed = revision != self.last_scene_revision;
        self.last_scene_revision = revision;

        if has_meaningful_events
            || scene_changed
            || self.state.session.is_dragging()
            || self.state.show_options_dialog
        {
            ctx.request_repaint();
        }
    }
}
