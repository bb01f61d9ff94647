// src/main.rs
use eframe::{App, Frame, NativeOptions, egui};
use tracing::{error, info, warn};

use engine_editor::{
    AssetsPanel, EditorConfig, EditorSession, MainMenu, PropertyEditor, RfdFileDialog,
    ViewportEditor,
};
use engine_render::renderer::{RenderConfig, Renderer};
use engine_render::texture::ImageTextureLoader;

struct EditorApp {
    session: EditorSession,
    renderer: Renderer,
    viewport: ViewportEditor,
    inspector: PropertyEditor,
    assets_panel: AssetsPanel,
    dialog: RfdFileDialog,
    loader: ImageTextureLoader,
}

impl EditorApp {
    fn new(config: EditorConfig) -> Self {
        let renderer = Renderer::new(RenderConfig {
            width: config.window_size[0] as u32,
            height: config.window_size[1] as u32,
        });
        Self {
            inspector: PropertyEditor::new(config.clone()),
            session: EditorSession::new(config),
            renderer,
            viewport: ViewportEditor::new(),
            assets_panel: AssetsPanel::new(),
            dialog: RfdFileDialog,
            loader: ImageTextureLoader,
        }
    }
}

impl App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("main_menu").show(ctx, |ui| {
            if let Some(action) = MainMenu::show(ui) {
                if let Err(err) = self.session.apply(action) {
                    warn!(action = ?action, error = %err, "Menu command failed");
                }
            }
        });

        let session = &mut self.session;

        egui::SidePanel::left("object_list")
            .resizable(true)
            .default_width(200.0)
            .show(ctx, |ui| {
                session.objects.show(ui, &mut session.world);
            });

        egui::SidePanel::right("object_components")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                let active = session.objects.active();
                self.inspector
                    .show(ui, active, &mut session.world, &session.assets);
            });

        egui::TopBottomPanel::bottom("assets")
            .resizable(true)
            .default_height(110.0)
            .show(ctx, |ui| {
                self.assets_panel.show(ui, &session.assets);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.viewport.show(
                ui,
                &mut self.renderer,
                &session.world,
                session.objects.active(),
            );
        });

        session
            .import
            .show(ctx, &mut session.assets, &self.loader, &mut self.dialog);

        if session.should_close() {
            session.shutdown();
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

fn main() {
    nova::init_logging();

    let config = EditorConfig::default();
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size(config.window_size),
        ..Default::default()
    };

    info!("Launching editor");
    let title = config.window_title.clone();
    if let Err(err) = eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(EditorApp::new(config)))),
    ) {
        error!(error = %err, "Editor exited with an error");
        std::process::exit(1);
    }
}
