//! Inspector - shows and edits entity properties
//!
//! Every edit writes straight into live component storage. References are
//! fetched fresh on each call and never kept between frames.

use egui::{CollapsingHeader, Color32, DragValue, Slider, Ui};
use glam::Vec3;
use tracing::{debug, warn};

use engine_core::Entity;
use engine_core::components::{
    AssetId, Camera, FOV_MAX, FOV_MIN, MAX_NEAR_PLANE, MeshRenderer, Transform,
};
use engine_core::ecs::EngineWorld;
use engine_render::asset_table::AssetTable;
use engine_render::texture::TextureKind;

use crate::config::EditorConfig;
use crate::error::{EditorError, EditorResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    fn of(self, v: &mut Vec3) -> &mut f32 {
        match self {
            Axis::X => &mut v.x,
            Axis::Y => &mut v.y,
            Axis::Z => &mut v.z,
        }
    }
}

/// A single numeric write, as produced by one widget interaction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyEdit {
    Position(Axis, f32),
    Rotation(Axis, f32),
    Scale(Axis, f32),
    Fov(f32),
    Near(f32),
    Far(f32),
    Diffuse(Option<AssetId>),
}

/// Component editor for the active entity
pub struct PropertyEditor {
    config: EditorConfig,
}

impl Default for PropertyEditor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl PropertyEditor {
    pub fn new(config: EditorConfig) -> Self {
        Self { config }
    }

    /// Live Transform of `entity`. Every editable object carries one.
    pub fn transform_mut(
        world: &mut EngineWorld,
        entity: Entity,
    ) -> EditorResult<hecs::RefMut<'_, Transform>> {
        Ok(world.component_mut::<Transform>(entity)?)
    }

    /// Live Camera of `entity`, or None if it has no camera
    pub fn camera_mut(
        world: &mut EngineWorld,
        entity: Entity,
    ) -> EditorResult<Option<hecs::RefMut<'_, Camera>>> {
        if !world.has::<Camera>(entity) {
            return Ok(None);
        }
        Ok(Some(world.component_mut::<Camera>(entity)?))
    }

    /// Apply one edit in place. Camera values are sanitized afterwards.
    pub fn apply(
        world: &mut EngineWorld,
        assets: &AssetTable,
        entity: Entity,
        edit: PropertyEdit,
    ) -> EditorResult<()> {
        debug!(entity = ?entity, edit = ?edit, "Applying property edit");
        match edit {
            PropertyEdit::Position(axis, value) => {
                *axis.of(&mut Self::transform_mut(world, entity)?.position) = value;
            }
            PropertyEdit::Rotation(axis, value) => {
                *axis.of(&mut Self::transform_mut(world, entity)?.rotation) = value;
            }
            PropertyEdit::Scale(axis, value) => {
                *axis.of(&mut Self::transform_mut(world, entity)?.scale) = value;
            }
            PropertyEdit::Fov(value) => {
                let mut camera = world.component_mut::<Camera>(entity)?;
                camera.fov = value;
                camera.sanitize();
            }
            PropertyEdit::Near(value) => {
                let mut camera = world.component_mut::<Camera>(entity)?;
                camera.z_near = value;
                camera.sanitize();
            }
            PropertyEdit::Far(value) => {
                let mut camera = world.component_mut::<Camera>(entity)?;
                camera.z_far = value;
                camera.sanitize();
            }
            PropertyEdit::Diffuse(id) => {
                if let Some(id) = id {
                    if !assets.contains(id) {
                        return Err(EditorError::UnknownAsset(id));
                    }
                }
                world.component_mut::<MeshRenderer>(entity)?.diffuse = id;
            }
        }
        Ok(())
    }

    /// Render the inspector UI
    pub fn show(
        &mut self,
        ui: &mut Ui,
        selected_entity: Option<Entity>,
        world: &mut EngineWorld,
        assets: &AssetTable,
    ) {
        ui.heading("Object Components");
        ui.separator();

        match selected_entity {
            Some(entity) => self.show_entity_properties(ui, entity, world, assets),
            None => {
                ui.label("No object selected");
            }
        }
    }

    fn show_entity_properties(
        &mut self,
        ui: &mut Ui,
        entity: Entity,
        world: &mut EngineWorld,
        assets: &AssetTable,
    ) {
        match Self::transform_mut(world, entity) {
            Ok(mut transform) => {
                CollapsingHeader::new("Transform")
                    .default_open(true)
                    .show(ui, |ui| {
                        vec3_row(ui, "Position", &mut transform.position, self.config.position_speed);
                        vec3_row(ui, "Rotation", &mut transform.rotation, self.config.rotation_speed);
                        vec3_row(ui, "Scale", &mut transform.scale, self.config.scale_speed);
                    });
            }
            Err(err) => {
                warn!(entity = ?entity, error = %err, "Selected object has no transform");
                ui.colored_label(Color32::from_rgb(220, 90, 90), err.to_string());
                return;
            }
        }

        if let Ok(Some(mut camera)) = Self::camera_mut(world, entity) {
            CollapsingHeader::new("Camera")
                .default_open(true)
                .show(ui, |ui| {
                    ui.add(
                        Slider::new(&mut camera.fov, FOV_MIN..=FOV_MAX)
                            .text("FOV")
                            .fixed_decimals(1),
                    );
                    ui.horizontal(|ui| {
                        ui.label("Near");
                        ui.add(
                            DragValue::new(&mut camera.z_near)
                                .speed(self.config.clip_plane_speed)
                                .range(0.0..=MAX_NEAR_PLANE)
                                .fixed_decimals(1),
                        );
                    });
                    ui.horizontal(|ui| {
                        ui.label("Far");
                        ui.add(
                            DragValue::new(&mut camera.z_far)
                                .speed(self.config.clip_plane_speed)
                                .range(0.0..=f32::MAX)
                                .fixed_decimals(1),
                        );
                    });
                });
            camera.sanitize();
        }

        if let Ok(mut renderer) = world.component_mut::<MeshRenderer>(entity) {
            CollapsingHeader::new("Mesh Renderer")
                .default_open(true)
                .show(ui, |ui| {
                    ui.label(format!("Mesh: {:?}", renderer.mesh));
                    let selected_text = renderer
                        .diffuse
                        .and_then(|id| assets.get(id))
                        .map(|asset| asset.name().to_owned())
                        .unwrap_or_else(|| "None".to_owned());

                    egui::ComboBox::from_label("Diffuse")
                        .selected_text(selected_text)
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut renderer.diffuse, None, "None");
                            for asset in assets.of_kind(TextureKind::Diffuse) {
                                ui.selectable_value(
                                    &mut renderer.diffuse,
                                    Some(asset.id),
                                    asset.name(),
                                );
                            }
                        });
                });
        }
    }
}

fn vec3_row(ui: &mut Ui, label: &str, value: &mut Vec3, speed: f64) {
    ui.label(label);
    ui.columns(3, |cols| {
        cols[0].add(DragValue::new(&mut value.x).speed(speed).prefix("X "));
        cols[1].add(DragValue::new(&mut value.y).speed(speed).prefix("Y "));
        cols[2].add(DragValue::new(&mut value.z).speed(speed).prefix("Z "));
    });
}
