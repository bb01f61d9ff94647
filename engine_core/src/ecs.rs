//! ECS World wrapper for the game engine

use hecs::{ComponentError, Entity, World as HecsWorld};
use tracing::{debug, warn};

use crate::components::Label;
use crate::error::{WorldError, WorldResult};
use crate::text::Truncation;

fn component_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

fn map_component_error<T>(entity: Entity, err: ComponentError) -> WorldError {
    match err {
        ComponentError::NoSuchEntity => WorldError::NoSuchEntity(entity),
        ComponentError::MissingComponent(_) => WorldError::MissingComponent {
            entity,
            component: component_name::<T>(),
        },
    }
}

/// Entity registry: entities, their components, and a label per entity.
///
/// Component references handed out borrow the world, so they cannot outlive
/// a structural change such as [`EngineWorld::attach`].
#[derive(Default)]
pub struct EngineWorld {
    world: HecsWorld,
}

impl EngineWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty entity carrying only an empty label
    pub fn create_entity(&mut self) -> Entity {
        self.spawn((Label::default(),))
    }

    /// Spawn an entity with components (tuple). A missing label is added.
    pub fn spawn(&mut self, components: impl hecs::DynamicBundle) -> Entity {
        let entity = self.world.spawn(components);
        if !self.has::<Label>(entity) {
            // Entity was just spawned, insertion cannot fail.
            let _ = self.world.insert_one(entity, Label::default());
        }
        debug!(entity = ?entity, "Spawned entity");
        entity
    }

    /// Attach (or replace) a component
    pub fn attach<T: hecs::Component>(&mut self, entity: Entity, component: T) -> WorldResult<()> {
        self.world
            .insert_one(entity, component)
            .map_err(|_| WorldError::NoSuchEntity(entity))?;
        debug!(entity = ?entity, component = component_name::<T>(), "Attached component");
        Ok(())
    }

    /// Detach a component, returning it
    pub fn detach<T: hecs::Component>(&mut self, entity: Entity) -> WorldResult<T> {
        let component = self
            .world
            .remove_one::<T>(entity)
            .map_err(|err| map_component_error::<T>(entity, err))?;
        debug!(entity = ?entity, component = component_name::<T>(), "Detached component");
        Ok(component)
    }

    /// Mutable view into live component storage
    pub fn component_mut<T: hecs::Component>(
        &mut self,
        entity: Entity,
    ) -> WorldResult<hecs::RefMut<'_, T>> {
        self.world
            .get::<&mut T>(entity)
            .map_err(|err| map_component_error::<T>(entity, err))
    }

    /// Shared view into live component storage
    pub fn component<T: hecs::Component>(&self, entity: Entity) -> WorldResult<hecs::Ref<'_, T>> {
        self.world
            .get::<&T>(entity)
            .map_err(|err| map_component_error::<T>(entity, err))
    }

    pub fn has<T: hecs::Component>(&self, entity: Entity) -> bool {
        self.world
            .entity(entity)
            .map(|e| e.has::<T>())
            .unwrap_or(false)
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.world.contains(entity)
    }

    /// Overwrite the label, truncating to the label limit
    pub fn set_label(&mut self, entity: Entity, text: &str) -> WorldResult<Truncation> {
        let mut label = self.component_mut::<Label>(entity)?;
        let truncation = label.0.set(text);
        if let Truncation::Truncated { dropped } = truncation {
            warn!(entity = ?entity, dropped, "Label truncated");
        }
        Ok(truncation)
    }

    pub fn label(&self, entity: Entity) -> WorldResult<String> {
        Ok(self.component::<Label>(entity)?.as_str().to_owned())
    }

    /// Despawn an entity and all its components
    pub fn despawn(&mut self, entity: Entity) -> WorldResult<()> {
        self.world
            .despawn(entity)
            .map_err(|_| WorldError::NoSuchEntity(entity))?;
        debug!(entity = ?entity, "Despawned entity");
        Ok(())
    }

    /// Get entity count
    pub fn entity_count(&self) -> usize {
        self.world.len() as usize
    }

    /// Get underlying hecs world reference
    pub fn world(&self) -> &HecsWorld {
        &self.world
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Camera, Transform};
    use glam::Vec3;

    #[test]
    fn created_entities_are_distinct() {
        let mut world = EngineWorld::new();
        let a = world.create_entity();
        let b = world.create_entity();
        assert_ne!(a, b);
        assert_eq!(world.entity_count(), 2);
    }

    #[test]
    fn writes_through_component_ref_are_visible_on_refetch() {
        let mut world = EngineWorld::new();
        let entity = world.spawn((Transform::default(),));

        world
            .component_mut::<Transform>(entity)
            .unwrap()
            .position = Vec3::new(1.0, 2.0, 3.0);

        let transform = world.component::<Transform>(entity).unwrap();
        assert_eq!(transform.position, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn missing_component_is_an_error() {
        let mut world = EngineWorld::new();
        let entity = world.create_entity();

        let err = world.component_mut::<Camera>(entity).unwrap_err();
        assert!(matches!(
            err,
            WorldError::MissingComponent {
                component: "Camera",
                ..
            }
        ));
        assert!(!world.has::<Camera>(entity));
    }

    #[test]
    fn attach_and_detach_round_trip() {
        let mut world = EngineWorld::new();
        let entity = world.create_entity();

        world.attach(entity, Camera::default()).unwrap();
        assert!(world.has::<Camera>(entity));

        let camera = world.detach::<Camera>(entity).unwrap();
        assert_eq!(camera, Camera::default());
        assert!(!world.has::<Camera>(entity));
    }

    #[test]
    fn labels_are_not_unique_and_may_change() {
        let mut world = EngineWorld::new();
        let a = world.create_entity();
        let b = world.create_entity();

        world.set_label(a, "Cube").unwrap();
        world.set_label(b, "Cube").unwrap();
        assert_eq!(world.label(a).unwrap(), world.label(b).unwrap());

        world.set_label(a, "Renamed").unwrap();
        assert_eq!(world.label(a).unwrap(), "Renamed");
    }

    #[test]
    fn despawned_entity_is_gone() {
        let mut world = EngineWorld::new();
        let entity = world.create_entity();
        world.despawn(entity).unwrap();

        assert!(!world.contains(entity));
        assert!(matches!(
            world.label(entity),
            Err(WorldError::NoSuchEntity(_))
        ));
        assert!(world.attach(entity, Transform::default()).is_err());
    }
}
