//! Main menu bar

use egui::Ui;

use engine_core::objects::SceneObjectKind;

/// Command chosen from the menu this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Quit,
    ImportTexture,
    NewObject(SceneObjectKind),
}

pub struct MainMenu;

impl MainMenu {
    /// Render the menu bar and return the command picked, if any
    pub fn show(ui: &mut Ui) -> Option<MenuAction> {
        let mut action = None;

        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                // Scene persistence is not available yet.
                ui.add_enabled(false, egui::Button::new("Save").shortcut_text("Ctrl-S"));
                ui.add_enabled(
                    false,
                    egui::Button::new("Save as...").shortcut_text("Ctrl-Shift-S"),
                );
                ui.separator();
                if ui
                    .add(egui::Button::new("Quit").shortcut_text("Alt-F4"))
                    .clicked()
                {
                    action = Some(MenuAction::Quit);
                    ui.close();
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui.button("Import Texture...").clicked() {
                    action = Some(MenuAction::ImportTexture);
                    ui.close();
                }
            });

            ui.menu_button("Object", |ui| {
                ui.menu_button("New Object", |ui| {
                    for kind in SceneObjectKind::ALL {
                        if ui.button(kind.default_label()).clicked() {
                            action = Some(MenuAction::NewObject(kind));
                            ui.close();
                        }
                    }
                });
            });
        });

        action
    }
}
