//! Engine Render - textures, the asset table and wireframe extraction
//!
//! This module owns loaded assets and turns the ECS world into something the
//! editor viewport can paint.

pub mod asset_table;
pub mod error;
pub mod mesh;
pub mod renderer;
pub mod texture;

pub use asset_table::*;
pub use error::*;
pub use mesh::*;
pub use renderer::*;
pub use texture::*;
