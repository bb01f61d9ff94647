//! Editor errors

use engine_core::Entity;
use engine_core::components::AssetId;
use engine_core::error::WorldError;
use engine_render::error::AssetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("entity {0:?} is not in the object list")]
    NotTracked(Entity),

    #[error("entity {0:?} is already in the object list")]
    AlreadyTracked(Entity),

    #[error("texture {0:?} is not in the asset table")]
    UnknownAsset(AssetId),

    #[error(transparent)]
    World(#[from] WorldError),

    #[error(transparent)]
    Asset(#[from] AssetError),
}

pub type EditorResult<T> = Result<T, EditorError>;
