//! Scene object factories
//!
//! Each factory spawns exactly one entity with the archetype's component set.
//! Labelling and tracking the new entity is left to the caller.

use hecs::Entity;
use tracing::info;

use crate::components::{Camera, MeshRenderer, PrimitiveMesh, Transform};
use crate::ecs::EngineWorld;

/// Kinds of object the editor can create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneObjectKind {
    Cube,
    Camera,
}

impl SceneObjectKind {
    pub const ALL: [SceneObjectKind; 2] = [SceneObjectKind::Cube, SceneObjectKind::Camera];

    pub fn default_label(&self) -> &'static str {
        match self {
            SceneObjectKind::Cube => "Cube",
            SceneObjectKind::Camera => "Camera",
        }
    }

    pub fn spawn(&self, world: &mut EngineWorld) -> Entity {
        match self {
            SceneObjectKind::Cube => create_cube(world),
            SceneObjectKind::Camera => create_camera(world),
        }
    }
}

/// Cube: unit transform plus a cube mesh renderer
pub fn create_cube(world: &mut EngineWorld) -> Entity {
    let entity = world.spawn((Transform::default(), MeshRenderer::new(PrimitiveMesh::Cube)));
    info!(entity = ?entity, "Created cube");
    entity
}

/// Camera: unit transform plus default perspective parameters
pub fn create_camera(world: &mut EngineWorld) -> Entity {
    let entity = world.spawn((Transform::default(), Camera::default()));
    info!(entity = ?entity, "Created camera");
    entity
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_factory_call_yields_a_new_entity() {
        let mut world = EngineWorld::new();
        let mut seen = HashSet::new();

        for i in 0..20 {
            let entity = if i % 3 == 0 {
                create_camera(&mut world)
            } else {
                create_cube(&mut world)
            };
            assert!(seen.insert(entity));
        }
        assert_eq!(world.entity_count(), 20);
    }

    #[test]
    fn cube_archetype() {
        let mut world = EngineWorld::new();
        let cube = create_cube(&mut world);

        assert_eq!(*world.component::<Transform>(cube).unwrap(), Transform::default());
        assert_eq!(
            world.component::<MeshRenderer>(cube).unwrap().mesh,
            PrimitiveMesh::Cube
        );
        assert!(!world.has::<Camera>(cube));
        assert_eq!(world.label(cube).unwrap(), "");
    }

    #[test]
    fn camera_archetype_has_sane_defaults() {
        let mut world = EngineWorld::new();
        let camera = SceneObjectKind::Camera.spawn(&mut world);

        let params = *world.component::<Camera>(camera).unwrap();
        assert_eq!(params.fov, 45.0);
        assert!(params.z_near < params.z_far);
        assert!(world.has::<Transform>(camera));
        assert!(!world.has::<MeshRenderer>(camera));
    }
}
