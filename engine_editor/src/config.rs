//! Editor configuration

use crate::import::FileFilter;

/// Window and widget settings for an editor session
#[derive(Debug, Clone)]
pub struct EditorConfig {
    pub window_title: String,
    pub window_size: [f32; 2],
    pub position_speed: f64,
    pub rotation_speed: f64,
    pub scale_speed: f64,
    pub clip_plane_speed: f64,
    /// Filters offered by the texture picker
    pub texture_filters: Vec<FileFilter>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            window_title: "Nova".to_string(),
            window_size: [800.0, 600.0],
            position_speed: 0.05,
            rotation_speed: 1.0,
            scale_speed: 0.1,
            clip_plane_speed: 0.1,
            texture_filters: vec![FileFilter::new(
                "Images",
                &["png", "jpg", "jpeg", "webp"],
            )],
        }
    }
}
