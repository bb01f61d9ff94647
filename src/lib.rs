//! Nova - scene editor over a live ECS world
//!
//! - ECS (hecs) for entities and components
//! - An append-only asset table for imported textures
//! - Separation between engine core, renderer, and editor

pub use engine_core;
pub use engine_editor;
pub use engine_render;

/// Initialize logging. `RUST_LOG` overrides the default filter.
pub fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,eframe=warn,egui_glow=warn,winit=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
