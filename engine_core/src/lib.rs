//! Engine Core - ECS-based game engine core
//!
//! This module provides the core ECS functionality without any GUI dependencies.

pub mod components;
pub mod ecs;
pub mod error;
pub mod objects;
pub mod systems;
pub mod text;

pub use components::*;
pub use ecs::*;
pub use error::*;
pub use objects::*;
pub use systems::*;
pub use text::*;

pub use hecs::Entity;
