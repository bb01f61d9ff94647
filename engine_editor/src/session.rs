//! Editor session - the state one editor window works on
//!
//! Owns the world, the tracked object list, the asset table and the import
//! panel, and applies menu commands to them.

use tracing::info;

use engine_core::Entity;
use engine_core::ecs::EngineWorld;
use engine_core::objects::SceneObjectKind;
use engine_render::asset_table::AssetTable;

use crate::config::EditorConfig;
use crate::error::EditorResult;
use crate::hierarchy::ObjectList;
use crate::import::ImportPanel;
use crate::menu::MenuAction;

pub struct EditorSession {
    pub world: EngineWorld,
    pub objects: ObjectList,
    pub assets: AssetTable,
    pub import: ImportPanel,
    should_close: bool,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditorSession {
    pub fn new(config: EditorConfig) -> Self {
        info!(title = %config.window_title, "Starting editor session");
        Self {
            world: EngineWorld::new(),
            objects: ObjectList::new(),
            assets: AssetTable::new(),
            import: ImportPanel::new(config.texture_filters),
            should_close: false,
        }
    }

    /// Create, label, track and select a new object
    pub fn create_object(&mut self, kind: SceneObjectKind) -> EditorResult<Entity> {
        let entity = kind.spawn(&mut self.world);
        self.world.set_label(entity, kind.default_label())?;
        self.objects.track(entity)?;
        self.objects.select(entity)?;
        Ok(entity)
    }

    pub fn apply(&mut self, action: MenuAction) -> EditorResult<()> {
        match action {
            MenuAction::Quit => {
                info!("Quit requested");
                self.should_close = true;
            }
            MenuAction::ImportTexture => self.import.open(),
            MenuAction::NewObject(kind) => {
                self.create_object(kind)?;
            }
        }
        Ok(())
    }

    /// Host window should close at the end of this frame
    pub fn should_close(&self) -> bool {
        self.should_close
    }

    /// Release session resources
    pub fn shutdown(&mut self) {
        self.import.close();
        self.assets.clear();
        info!(objects = self.objects.len(), "Editor session ended");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_object_is_labelled_tracked_and_selected() {
        let mut session = EditorSession::default();
        session
            .apply(MenuAction::NewObject(SceneObjectKind::Cube))
            .unwrap();

        let cube = session.objects.active().unwrap();
        assert!(session.objects.contains(cube));
        assert_eq!(session.world.label(cube).unwrap(), "Cube");
    }

    #[test]
    fn quit_sets_close_flag() {
        let mut session = EditorSession::default();
        assert!(!session.should_close());
        session.apply(MenuAction::Quit).unwrap();
        assert!(session.should_close());
    }

    #[test]
    fn import_command_opens_panel() {
        let mut session = EditorSession::default();
        session.apply(MenuAction::ImportTexture).unwrap();
        assert!(session.import.is_open());

        session.shutdown();
        assert!(!session.import.is_open());
    }
}
