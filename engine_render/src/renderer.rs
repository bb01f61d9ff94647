//! Renderer - turns the ECS world into projected wireframe segments
//!
//! The editor viewport paints the segments; nothing here touches a GPU.

use glam::{Mat4, Vec2, Vec3, Vec4};

use engine_core::Entity;
use engine_core::components::PrimitiveMesh;
use engine_core::ecs::EngineWorld;
use engine_core::systems::{CameraSystem, RenderSystem, Renderable, active_camera};

use crate::mesh::WireMesh;

/// Render pass configuration
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

/// Which camera produced a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraSource {
    Scene(Entity),
    Editor,
}

pub struct Renderer {
    config: RenderConfig,
    camera: CameraSystem,
    cube: WireMesh,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        let mut camera = CameraSystem::default();
        if config.height > 0 {
            camera.set_aspect_ratio(config.width as f32 / config.height as f32);
        }
        Self {
            config,
            camera,
            cube: WireMesh::cube(),
        }
    }

    /// Get the editor fallback camera
    pub fn camera(&mut self) -> &mut CameraSystem {
        &mut self.camera
    }

    /// Update camera aspect ratio (call on resize)
    pub fn set_viewport_size(&mut self, width: u32, height: u32) {
        self.config.width = width;
        self.config.height = height;
        if height > 0 {
            self.camera.set_aspect_ratio(width as f32 / height as f32);
        }
    }

    /// Render the world through the scene camera, or the editor camera if there is none
    pub fn render(&mut self, world: &EngineWorld) -> RenderOutput {
        let renderables = RenderSystem.update(world);

        let (view_projection, camera) = match active_camera(world) {
            Some((entity, transform, camera)) => (
                CameraSystem::scene_view_projection(&transform, &camera, self.camera.aspect_ratio),
                CameraSource::Scene(entity),
            ),
            None => (self.camera.view_projection(), CameraSource::Editor),
        };

        let segments = renderables
            .iter()
            .flat_map(|renderable| self.project_wireframe(renderable, view_projection))
            .collect();

        RenderOutput {
            renderables,
            view_projection,
            camera,
            segments,
        }
    }

    fn project_wireframe(&self, renderable: &Renderable, view_projection: Mat4) -> Vec<WireSegment> {
        let mesh = match renderable.mesh {
            PrimitiveMesh::Cube => &self.cube,
        };
        let corners = mesh.transformed(renderable.transform.to_mat4());

        mesh.edges
            .iter()
            .filter_map(|[a, b]| {
                let start = project(view_projection, corners[*a as usize])?;
                let end = project(view_projection, corners[*b as usize])?;
                Some(WireSegment {
                    entity: renderable.entity,
                    start,
                    end,
                })
            })
            .collect()
    }
}

/// Project into normalized device coordinates; None for points behind the camera
pub fn project(view_projection: Mat4, point: Vec3) -> Option<Vec2> {
    let clip = view_projection * Vec4::new(point.x, point.y, point.z, 1.0);
    if clip.w <= f32::EPSILON {
        return None;
    }
    Some(Vec2::new(clip.x / clip.w, clip.y / clip.w))
}

/// One projected edge, in NDC
#[derive(Debug, Clone, Copy)]
pub struct WireSegment {
    pub entity: Entity,
    pub start: Vec2,
    pub end: Vec2,
}

/// Output from render call
#[derive(Debug)]
pub struct RenderOutput {
    pub renderables: Vec<Renderable>,
    pub view_projection: Mat4,
    pub camera: CameraSource,
    pub segments: Vec<WireSegment>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_core::components::Transform;
    use engine_core::objects::{create_camera, create_cube};

    #[test]
    fn empty_world_uses_editor_camera() {
        let mut renderer = Renderer::default();
        let output = renderer.render(&EngineWorld::new());
        assert_eq!(output.camera, CameraSource::Editor);
        assert!(output.segments.is_empty());
    }

    #[test]
    fn cube_in_front_of_scene_camera_is_drawn() {
        let mut world = EngineWorld::new();
        create_cube(&mut world);
        let camera = create_camera(&mut world);
        world
            .component_mut::<Transform>(camera)
            .unwrap()
            .position = Vec3::new(0.0, 0.0, 5.0);

        let mut renderer = Renderer::default();
        let output = renderer.render(&world);

        assert_eq!(output.camera, CameraSource::Scene(camera));
        assert_eq!(output.segments.len(), 12);
        assert!(
            output
                .segments
                .iter()
                .all(|s| s.start.abs().max_element() <= 1.0 && s.end.abs().max_element() <= 1.0)
        );
    }

    #[test]
    fn points_behind_camera_are_not_projected() {
        let view_projection = CameraSystem::scene_view_projection(
            &Transform::default(),
            &engine_core::components::Camera::default(),
            1.0,
        );
        assert!(project(view_projection, Vec3::new(0.0, 0.0, 5.0)).is_none());
        assert!(project(view_projection, Vec3::new(0.0, 0.0, -5.0)).is_some());
    }
}
