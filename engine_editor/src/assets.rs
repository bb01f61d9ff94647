//! Asset browser - lists the textures loaded this session

use std::collections::HashMap;

use egui::{Color32, ColorImage, TextureHandle, TextureOptions, Ui};

use engine_core::components::AssetId;
use engine_render::asset_table::{AssetTable, TextureAsset};

const THUMBNAIL_SIZE: f32 = 32.0;

/// Asset panel state: GPU-side thumbnails keyed by asset id
#[derive(Default)]
pub struct AssetsPanel {
    thumbnails: HashMap<AssetId, TextureHandle>,
}

impl AssetsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the asset list
    pub fn show(&mut self, ui: &mut Ui, assets: &AssetTable) {
        ui.heading("Textures");
        ui.separator();

        // Drop thumbnails whose asset is gone (table cleared).
        self.thumbnails.retain(|id, _| assets.contains(*id));

        if assets.is_empty() {
            ui.colored_label(Color32::from_gray(140), "No textures loaded");
            ui.label("Edit > Import Texture... to add one");
            return;
        }

        egui::ScrollArea::horizontal().show(ui, |ui| {
            ui.horizontal(|ui| {
                for asset in assets.iter() {
                    let thumbnail = self.thumbnail(ui.ctx(), asset);
                    ui.vertical(|ui| {
                        ui.image(egui::load::SizedTexture::new(
                            thumbnail.id(),
                            egui::vec2(THUMBNAIL_SIZE, THUMBNAIL_SIZE),
                        ))
                        .on_hover_text(asset.texture.path.display().to_string());
                        ui.label(asset.name());
                        ui.small(format!(
                            "{} {}x{}",
                            asset.kind(),
                            asset.texture.width,
                            asset.texture.height
                        ));
                    });
                }
            });
        });
    }

    fn thumbnail(&mut self, ctx: &egui::Context, asset: &TextureAsset) -> TextureHandle {
        self.thumbnails
            .entry(asset.id)
            .or_insert_with(|| {
                let image = ColorImage::from_rgba_unmultiplied(asset.texture.size(), &asset.texture.rgba);
                ctx.load_texture(
                    format!("asset-{}", asset.id.id),
                    image,
                    TextureOptions::LINEAR,
                )
            })
            .clone()
    }
}
