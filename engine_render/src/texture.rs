//! Texture data and the loader used by the import panel

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::AssetError;

/// How a renderer consumes a texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextureKind {
    #[default]
    Diffuse,
    Specular,
}

impl TextureKind {
    pub const ALL: [TextureKind; 2] = [TextureKind::Diffuse, TextureKind::Specular];

    pub fn label(&self) -> &'static str {
        match self {
            TextureKind::Diffuse => "Diffuse",
            TextureKind::Specular => "Specular",
        }
    }
}

impl fmt::Display for TextureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Decoded RGBA8 image
#[derive(Debug, Clone)]
pub struct Texture {
    pub name: String,
    pub path: PathBuf,
    pub kind: TextureKind,
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl Texture {
    pub fn size(&self) -> [usize; 2] {
        [self.width as usize, self.height as usize]
    }
}

/// Loads a texture from disk. Shared ownership of the result goes to the asset table.
pub trait TextureLoader {
    fn load(&self, path: &Path, kind: TextureKind) -> Result<Arc<Texture>, AssetError>;
}

/// Loader backed by the `image` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageTextureLoader;

impl TextureLoader for ImageTextureLoader {
    fn load(&self, path: &Path, kind: TextureKind) -> Result<Arc<Texture>, AssetError> {
        if path.as_os_str().is_empty() {
            return Err(AssetError::EmptyPath);
        }
        if !path.exists() {
            warn!(path = %path.display(), "Texture file not found");
            return Err(AssetError::NotFound(path.to_path_buf()));
        }

        let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let rgba = image::load_from_memory(&bytes)
            .map_err(|source| AssetError::Decode {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgba8();

        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let (width, height) = rgba.dimensions();
        debug!(path = %path.display(), width, height, kind = %kind, "Decoded texture");

        Ok(Arc::new(Texture {
            name,
            path: path.to_path_buf(),
            kind,
            width,
            height,
            rgba: rgba.into_raw(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_png_as_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brick.png");
        image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();

        let texture = ImageTextureLoader.load(&path, TextureKind::Specular).unwrap();
        assert_eq!(texture.name, "brick");
        assert_eq!(texture.kind, TextureKind::Specular);
        assert_eq!(texture.size(), [3, 2]);
        assert_eq!(texture.rgba.len(), 3 * 2 * 4);
        assert_eq!(&texture.rgba[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.png");
        assert!(matches!(
            ImageTextureLoader.load(&path, TextureKind::Diffuse),
            Err(AssetError::NotFound(_))
        ));
    }

    #[test]
    fn garbage_fails_to_decode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not an image").unwrap();
        assert!(matches!(
            ImageTextureLoader.load(&path, TextureKind::Diffuse),
            Err(AssetError::Decode { .. })
        ));
    }

    #[test]
    fn empty_path_is_rejected() {
        assert!(matches!(
            ImageTextureLoader.load(Path::new(""), TextureKind::Diffuse),
            Err(AssetError::EmptyPath)
        ));
    }
}
