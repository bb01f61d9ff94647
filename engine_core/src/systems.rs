//! Core systems for the ECS-based engine

use glam::{Mat4, Vec3};
use hecs::Entity;

use crate::components::*;
use crate::ecs::*;

/// Render system - collects renderable entities
pub struct RenderSystem;

impl RenderSystem {
    pub fn update(&mut self, world: &EngineWorld) -> Vec<Renderable> {
        let mut renderables = Vec::new();

        for (entity, transform, mesh_renderer) in
            &mut world.world().query::<(Entity, &Transform, &MeshRenderer)>()
        {
            if !transform.is_finite() {
                continue;
            }
            renderables.push(Renderable {
                entity,
                transform: *transform,
                mesh: mesh_renderer.mesh,
                diffuse: mesh_renderer.diffuse,
            });
        }

        renderables.sort_by_key(|r| r.entity.to_bits());
        renderables
    }
}

/// Renderable data for the renderer
#[derive(Debug, Clone, Copy)]
pub struct Renderable {
    pub entity: Entity,
    pub transform: Transform,
    pub mesh: PrimitiveMesh,
    pub diffuse: Option<AssetId>,
}

/// Find the scene camera: the lowest-id entity with both Transform and Camera
pub fn active_camera(world: &EngineWorld) -> Option<(Entity, Transform, Camera)> {
    world
        .world()
        .query::<(Entity, &Transform, &Camera)>()
        .iter()
        .map(|(entity, transform, camera)| (entity, *transform, *camera))
        .min_by_key(|(entity, _, _)| entity.to_bits())
}

/// Camera system - editor fallback camera used when the scene has none
pub struct CameraSystem {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub camera: Camera,
    pub aspect_ratio: f32,
}

impl Default for CameraSystem {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 5.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            camera: Camera::default(),
            aspect_ratio: 16.0 / 9.0,
        }
    }
}

impl CameraSystem {
    /// Get view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Get view-projection matrix
    pub fn view_projection(&self) -> Mat4 {
        self.camera.projection_matrix(self.aspect_ratio) * self.view_matrix()
    }

    /// View-projection from a scene camera entity's transform
    pub fn scene_view_projection(transform: &Transform, camera: &Camera, aspect_ratio: f32) -> Mat4 {
        let view = Mat4::from_rotation_translation(transform.rotation_quat(), transform.position)
            .inverse();
        camera.projection_matrix(aspect_ratio) * view
    }

    /// Orbit camera around target
    pub fn orbit(&mut self, yaw: f32, pitch: f32, distance: f32) {
        let x = yaw.cos() * pitch.cos() * distance;
        let y = pitch.sin() * distance;
        let z = yaw.sin() * pitch.cos() * distance;
        self.position = self.target + Vec3::new(x, y, z);
    }

    /// Update aspect ratio (e.g., on window resize)
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }
}
