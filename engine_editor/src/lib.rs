//! Engine Editor - Egui-based editor interface
//!
//! This module provides the editor UI using egui.
//! It does NOT contain rendering logic - it only paints what the renderer extracts.

pub mod assets;
pub mod config;
pub mod error;
pub mod hierarchy;
pub mod import;
pub mod inspector;
pub mod menu;
pub mod session;
pub mod viewport;

pub use assets::*;
pub use config::*;
pub use error::*;
pub use hierarchy::*;
pub use import::*;
pub use inspector::*;
pub use menu::*;
pub use session::*;
pub use viewport::*;
