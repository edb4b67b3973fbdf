//! UI rendering modules for the dialog host.
//!
//! This module contains all egui-based rendering code, organized by component:
//! - `surface`: The modal dialog surface itself
//! - `actions`: Interactions the surface reports back to the provider
//! - `status_toasts`: Floating status messages used by the demo app
//! - `theme`: Color schemes and tone resolution

mod actions;
mod status_toasts;
mod surface;
mod theme;

pub use actions::SurfaceAction;
pub use status_toasts::render_status_toasts;
pub use surface::{render_surface, SurfaceConfig};
pub use theme::{apply_app_style, DialogTheme};
