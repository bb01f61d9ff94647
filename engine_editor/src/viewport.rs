//! Viewport - displays the rendered scene
//!
//! Paints the renderer's projected wireframes and orbits the editor camera on drag.

use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Ui};
use glam::Vec2;

use engine_core::Entity;
use engine_core::ecs::EngineWorld;
use engine_render::renderer::{CameraSource, Renderer};

/// Viewport state for the editor
pub struct ViewportEditor {
    yaw: f32,
    pitch: f32,
    distance: f32,
}

impl Default for ViewportEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportEditor {
    pub fn new() -> Self {
        Self {
            yaw: std::f32::consts::FRAC_PI_2,
            pitch: 0.45,
            distance: 11.0,
        }
    }

    /// Render the viewport UI
    pub fn show(
        &mut self,
        ui: &mut Ui,
        renderer: &mut Renderer,
        world: &EngineWorld,
        active: Option<Entity>,
    ) {
        let (viewport_rect, response) =
            ui.allocate_exact_size(ui.available_size(), Sense::drag());

        if viewport_rect.width() < 50.0 || viewport_rect.height() < 50.0 {
            return;
        }

        if response.dragged() {
            let delta = response.drag_delta();
            self.yaw += delta.x * 0.01;
            self.pitch = (self.pitch + delta.y * 0.01).clamp(-1.5, 1.5);
        }
        renderer.camera().orbit(self.yaw, self.pitch, self.distance);
        renderer.set_viewport_size(viewport_rect.width() as u32, viewport_rect.height() as u32);

        let painter = ui.painter_at(viewport_rect);
        painter.rect_filled(viewport_rect, 0.0, Color32::from_rgb(22, 22, 24));
        self.draw_grid(&painter, &viewport_rect);

        let output = renderer.render(world);
        for segment in &output.segments {
            let stroke = if Some(segment.entity) == active {
                Stroke::new(2.0, Color32::from_rgb(255, 170, 40))
            } else {
                Stroke::new(1.0, Color32::from_gray(200))
            };
            painter.line_segment(
                [
                    to_screen(&viewport_rect, segment.start),
                    to_screen(&viewport_rect, segment.end),
                ],
                stroke,
            );
        }

        let caption = match output.camera {
            CameraSource::Scene(_) => "Scene camera",
            CameraSource::Editor => "Editor camera (drag to orbit)",
        };
        painter.text(
            Pos2::new(viewport_rect.left() + 12.0, viewport_rect.top() + 10.0),
            Align2::LEFT_TOP,
            caption,
            FontId::proportional(13.0),
            Color32::from_gray(210),
        );
    }

    fn draw_grid(&self, painter: &egui::Painter, rect: &Rect) {
        let grid_step = 24.0;
        let stroke = Stroke::new(1.0, Color32::from_rgba_unmultiplied(86, 86, 92, 24));

        let mut x = rect.left();
        while x <= rect.right() {
            painter.line_segment([Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())], stroke);
            x += grid_step;
        }

        let mut y = rect.top();
        while y <= rect.bottom() {
            painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], stroke);
            y += grid_step;
        }
    }
}

/// NDC (y up) to screen space (y down)
fn to_screen(rect: &Rect, ndc: Vec2) -> Pos2 {
    Pos2::new(
        rect.center().x + ndc.x * rect.width() * 0.5,
        rect.center().y - ndc.y * rect.height() * 0.5,
    )
}
