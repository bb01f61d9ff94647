//! Asset table - append-only list of loaded textures
//!
//! Owned by the editor session and passed by reference to whoever loads or
//! draws textures. Entries are released only by [`AssetTable::clear`] or drop.

use std::sync::Arc;

use engine_core::components::AssetId;
use tracing::{debug, info};

use crate::texture::{Texture, TextureKind};

/// Asset table entry
#[derive(Debug, Clone)]
pub struct TextureAsset {
    pub id: AssetId,
    pub texture: Arc<Texture>,
}

impl TextureAsset {
    pub fn kind(&self) -> TextureKind {
        self.texture.kind
    }

    pub fn name(&self) -> &str {
        &self.texture.name
    }
}

#[derive(Debug)]
pub struct AssetTable {
    textures: Vec<TextureAsset>,
    next_id: u64,
}

impl Default for AssetTable {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetTable {
    pub fn new() -> Self {
        Self {
            textures: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a texture. Ids start at 1 and are never reused within a session.
    pub fn push(&mut self, texture: Arc<Texture>) -> AssetId {
        let id = AssetId { id: self.next_id };
        self.next_id += 1;
        info!(
            id = id.id,
            name = %texture.name,
            kind = %texture.kind,
            "Texture added to asset table"
        );
        self.textures.push(TextureAsset { id, texture });
        id
    }

    pub fn get(&self, id: AssetId) -> Option<&TextureAsset> {
        if !id.is_valid() {
            return None;
        }
        self.textures
            .binary_search_by_key(&id, |asset| asset.id)
            .ok()
            .map(|index| &self.textures[index])
    }

    pub fn contains(&self, id: AssetId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TextureAsset> {
        self.textures.iter()
    }

    pub fn of_kind(&self, kind: TextureKind) -> impl Iterator<Item = &TextureAsset> {
        self.textures.iter().filter(move |asset| asset.kind() == kind)
    }

    /// Release every texture (session teardown)
    pub fn clear(&mut self) {
        if !self.textures.is_empty() {
            info!(count = self.textures.len(), "Releasing asset table");
        }
        self.textures.clear();
    }
}

impl Drop for AssetTable {
    fn drop(&mut self) {
        debug!(count = self.textures.len(), "Asset table dropped");
    }
}
