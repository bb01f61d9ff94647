//! Hierarchy - the tracked object list and the active selection
//!
//! Objects appear in creation order. Exactly one object (or none) is active;
//! the active object is always a member of the list.

use std::collections::HashMap;

use egui::{Color32, Ui};
use tracing::{debug, info, warn};

use engine_core::Entity;
use engine_core::ecs::EngineWorld;
use engine_core::text::{BoundedString, OBJECT_NAME_CHARACTER_LIMIT, Truncation};

use crate::error::{EditorError, EditorResult};

/// State of the right-click rename popup
#[derive(Debug, Clone)]
pub struct RenamePopup {
    pub buffer: BoundedString,
}

impl Default for RenamePopup {
    fn default() -> Self {
        Self {
            buffer: BoundedString::new(OBJECT_NAME_CHARACTER_LIMIT),
        }
    }
}

#[derive(Debug, Default)]
pub struct ObjectList {
    objects: Vec<Entity>,
    active: Option<Entity>,
    rename: RenamePopup,
}

impl ObjectList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a newly created object
    pub fn track(&mut self, entity: Entity) -> EditorResult<()> {
        if self.contains(entity) {
            return Err(EditorError::AlreadyTracked(entity));
        }
        self.objects.push(entity);
        debug!(entity = ?entity, count = self.objects.len(), "Tracking object");
        Ok(())
    }

    /// Make `entity` the active object. It must already be tracked.
    pub fn select(&mut self, entity: Entity) -> EditorResult<()> {
        if !self.contains(entity) {
            warn!(entity = ?entity, "Rejected selection of untracked entity");
            return Err(EditorError::NotTracked(entity));
        }
        if self.active != Some(entity) {
            debug!(entity = ?entity, "Selected object");
        }
        self.active = Some(entity);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<Entity> {
        self.active
    }

    /// Identity comparison, never label comparison
    pub fn is_active(&self, entity: Entity) -> bool {
        self.active == Some(entity)
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.objects.contains(&entity)
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.objects.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Overwrite an object's label.
    ///
    /// An empty label is ignored and yields `Ok(None)`. Duplicate labels are allowed.
    pub fn rename(
        &self,
        world: &mut EngineWorld,
        entity: Entity,
        new_label: &str,
    ) -> EditorResult<Option<Truncation>> {
        if new_label.is_empty() {
            return Ok(None);
        }
        let truncation = world.set_label(entity, new_label)?;
        info!(entity = ?entity, label = %world.label(entity)?, "Renamed object");
        Ok(Some(truncation))
    }

    /// Row text for every tracked object, in list order.
    ///
    /// Labels shared by more than one tracked object get an id suffix.
    pub fn display_names(&self, world: &EngineWorld) -> Vec<(Entity, String)> {
        let labels: Vec<(Entity, String)> = self
            .objects
            .iter()
            .map(|entity| (*entity, world.label(*entity).unwrap_or_default()))
            .collect();

        let mut counts: HashMap<&str, usize> = HashMap::with_capacity(labels.len());
        for (_, label) in &labels {
            *counts.entry(label.as_str()).or_default() += 1;
        }

        labels
            .iter()
            .map(|(entity, label)| {
                let name = if label.is_empty() {
                    format!("<unnamed> #{}", entity.id())
                } else if counts.get(label.as_str()).copied().unwrap_or(0) > 1 {
                    format!("{label} #{}", entity.id())
                } else {
                    label.clone()
                };
                (*entity, name)
            })
            .collect()
    }

    /// Render the object list UI
    pub fn show(&mut self, ui: &mut Ui, world: &mut EngineWorld) {
        ui.heading("Objects");
        ui.separator();

        if self.objects.is_empty() {
            ui.colored_label(Color32::from_gray(140), "No objects in scene");
            ui.label("Object > New Object to add one");
            return;
        }

        let rows = self.display_names(world);

        let mut clicked = None;
        let mut renamed = None;
        let rename = &mut self.rename;
        let active = self.active;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (entity, name) in &rows {
                    ui.push_id(entity.to_bits(), |ui| {
                        let response = ui.selectable_label(active == Some(*entity), name.as_str());
                        if response.clicked() {
                            clicked = Some(*entity);
                        }

                        response.context_menu(|ui| {
                            ui.label("Rename:");
                            let mut text = rename.buffer.as_str().to_owned();
                            if ui
                                .add(
                                    egui::TextEdit::singleline(&mut text)
                                        .char_limit(rename.buffer.limit()),
                                )
                                .changed()
                            {
                                rename.buffer.set(&text);
                            }

                            if ui.button("Close").clicked() {
                                renamed = Some((*entity, rename.buffer.as_str().to_owned()));
                                rename.buffer.clear();
                                ui.close();
                            }
                        });
                    });
                }
            });

        if let Some(entity) = clicked {
            // Rows come from the list itself, so this cannot miss.
            let _ = self.select(entity);
        }
        if let Some((entity, label)) = renamed {
            if let Err(err) = self.rename(world, entity, &label) {
                warn!(entity = ?entity, error = %err, "Rename failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_core::objects::{create_camera, create_cube};

    fn populated() -> (EngineWorld, ObjectList, Entity, Entity) {
        let mut world = EngineWorld::new();
        let mut list = ObjectList::new();
        let cube = create_cube(&mut world);
        let camera = create_camera(&mut world);
        world.set_label(cube, "Cube").unwrap();
        world.set_label(camera, "Camera").unwrap();
        list.track(cube).unwrap();
        list.track(camera).unwrap();
        (world, list, cube, camera)
    }

    #[test]
    fn track_preserves_creation_order_and_rejects_duplicates() {
        let (_, mut list, cube, camera) = populated();
        assert_eq!(list.iter().collect::<Vec<_>>(), [cube, camera]);
        assert!(matches!(list.track(cube), Err(EditorError::AlreadyTracked(_))));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn selection_stays_within_list() {
        let (mut world, mut list, cube, camera) = populated();
        assert_eq!(list.active(), None);

        list.select(camera).unwrap();
        assert!(list.is_active(camera));
        assert!(!list.is_active(cube));

        let stranger = create_cube(&mut world);
        assert!(matches!(list.select(stranger), Err(EditorError::NotTracked(_))));
        assert_eq!(list.active(), Some(camera));
    }

    #[test]
    fn active_is_identity_not_label() {
        let (mut world, mut list, cube, camera) = populated();
        list.rename(&mut world, camera, "Cube").unwrap();
        list.select(cube).unwrap();
        assert!(!list.is_active(camera));
    }

    #[test]
    fn empty_rename_is_a_no_op() {
        let (mut world, list, cube, _) = populated();
        assert_eq!(list.rename(&mut world, cube, "").unwrap(), None);
        assert_eq!(world.label(cube).unwrap(), "Cube");
    }

    #[test]
    fn rename_keeps_identity_and_position() {
        let (mut world, mut list, cube, camera) = populated();
        list.select(cube).unwrap();

        let result = list.rename(&mut world, cube, "Crate").unwrap();
        assert_eq!(result, Some(Truncation::None));
        assert_eq!(world.label(cube).unwrap(), "Crate");
        assert_eq!(list.iter().collect::<Vec<_>>(), [cube, camera]);
        assert!(list.is_active(cube));
    }

    #[test]
    fn long_rename_is_truncated_not_rejected() {
        let (mut world, list, cube, camera) = populated();
        let long = "x".repeat(OBJECT_NAME_CHARACTER_LIMIT + 10);

        let result = list.rename(&mut world, cube, &long).unwrap();
        assert_eq!(result, Some(Truncation::Truncated { dropped: 10 }));
        assert_eq!(
            world.label(cube).unwrap().chars().count(),
            OBJECT_NAME_CHARACTER_LIMIT
        );
        assert_eq!(world.label(camera).unwrap(), "Camera");
    }

    #[test]
    fn duplicate_labels_get_identity_suffix() {
        let (mut world, list, cube, camera) = populated();
        assert_eq!(
            list.display_names(&world),
            [(cube, "Cube".to_owned()), (camera, "Camera".to_owned())]
        );

        list.rename(&mut world, camera, "Cube").unwrap();
        assert_eq!(
            list.display_names(&world),
            [
                (cube, format!("Cube #{}", cube.id())),
                (camera, format!("Cube #{}", camera.id())),
            ]
        );
    }

    #[test]
    fn untracked_duplicates_do_not_add_suffix() {
        let (mut world, list, cube, _) = populated();
        let stray = create_cube(&mut world);
        world.set_label(stray, "Cube").unwrap();

        let names = list.display_names(&world);
        assert_eq!(names[0], (cube, "Cube".to_owned()));
        assert_eq!(names.len(), 2);
    }
}
