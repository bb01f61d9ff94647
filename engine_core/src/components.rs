//! Core components for the ECS-based engine

use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::text::{BoundedString, OBJECT_NAME_CHARACTER_LIMIT};

/// Smallest distance kept between a camera's near and far planes
pub const MIN_DEPTH_SPAN: f32 = 0.01;

/// Farthest a near plane may sit. Below this `z_near + MIN_DEPTH_SPAN` is still
/// representable as a distinct f32.
pub const MAX_NEAR_PLANE: f32 = 100_000.0;

/// Field-of-view bounds in degrees
pub const FOV_MIN: f32 = 1.0;
pub const FOV_MAX: f32 = 45.0;

/// Transform component - position, rotation, and scale of an entity
///
/// Rotation is stored as Euler angles in degrees, applied in Y-X-Z order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn new(position: Vec3, rotation: Vec3, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn from_translation(x: f32, y: f32, z: f32) -> Self {
        Self::from_position(Vec3::new(x, y, z))
    }

    /// Rotation as a quaternion
    pub fn rotation_quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.rotation.y.to_radians(),
            self.rotation.x.to_radians(),
            self.rotation.z.to_radians(),
        )
    }

    /// Get the model matrix (local transform)
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation_quat(), self.position)
    }

    /// Get forward direction (negative Z in local space)
    pub fn forward(&self) -> Vec3 {
        self.rotation_quat() * -Vec3::Z
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.rotation.is_finite() && self.scale.is_finite()
    }
}

/// Perspective camera parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Vertical field of view in degrees
    pub fov: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov: 45.0,
            z_near: 0.1,
            z_far: 1000.0,
        }
    }
}

impl Camera {
    pub fn new(fov: f32, z_near: f32, z_far: f32) -> Self {
        let mut camera = Self { fov, z_near, z_far };
        camera.sanitize();
        camera
    }

    /// Clamp the parameters into a valid projection.
    ///
    /// Returns true if any field was changed.
    pub fn sanitize(&mut self) -> bool {
        let before = *self;

        self.fov = if self.fov.is_finite() {
            self.fov.clamp(FOV_MIN, FOV_MAX)
        } else {
            Self::default().fov
        };
        self.z_near = if self.z_near.is_finite() {
            self.z_near.clamp(0.0, MAX_NEAR_PLANE)
        } else {
            0.0
        };
        if !self.z_far.is_finite() || self.z_far < self.z_near + MIN_DEPTH_SPAN {
            self.z_far = self.z_near + MIN_DEPTH_SPAN;
        }

        *self != before
    }

    pub fn is_valid(&self) -> bool {
        (FOV_MIN..=FOV_MAX).contains(&self.fov)
            && (0.0..=MAX_NEAR_PLANE).contains(&self.z_near)
            && self.z_near < self.z_far
    }

    /// Get projection matrix (perspective)
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        // A zero near plane collapses the depth range, so project with a tiny epsilon instead.
        let z_near = self.z_near.clamp(MIN_DEPTH_SPAN * 0.1, MAX_NEAR_PLANE);
        let z_far = self.z_far.max(z_near + MIN_DEPTH_SPAN);
        Mat4::perspective_rh_gl(self.fov.to_radians(), aspect_ratio, z_near, z_far)
    }
}

/// Handle to a texture in the asset table. Zero is never handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetId {
    pub id: u64,
}

impl AssetId {
    pub fn invalid() -> Self {
        Self { id: 0 }
    }

    pub fn is_valid(&self) -> bool {
        self.id != 0
    }
}

impl Default for AssetId {
    fn default() -> Self {
        Self::invalid()
    }
}

/// Built-in geometry an entity can be drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrimitiveMesh {
    #[default]
    Cube,
}

/// Mesh renderer component - geometry plus an optional diffuse texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeshRenderer {
    pub mesh: PrimitiveMesh,
    pub diffuse: Option<AssetId>,
}

impl MeshRenderer {
    pub fn new(mesh: PrimitiveMesh) -> Self {
        Self {
            mesh,
            diffuse: None,
        }
    }

    pub fn with_diffuse(mesh: PrimitiveMesh, diffuse: AssetId) -> Self {
        Self {
            mesh,
            diffuse: Some(diffuse).filter(AssetId::is_valid),
        }
    }
}

/// Human-readable entity label. Not unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label(pub BoundedString);

impl Default for Label {
    fn default() -> Self {
        Self(BoundedString::new(OBJECT_NAME_CHARACTER_LIMIT))
    }
}

impl Label {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}
