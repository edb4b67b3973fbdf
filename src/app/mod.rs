//! Demo application structure for the dialog host
//!
//! This module organizes the gallery app into focused submodules:
//! - `core`: DemoApp struct and initialization
//! - `events`: Results reported by confirm actions
//! - `update`: Main update loop and global shortcuts
//! - `dialogs`: Dialog surface orchestration
//! - `ui::panels`: Menu bar and central panel rendering
//! - `ui::gallery`: Nested sections that trigger dialogs through the accessor

pub mod core;
pub mod dialogs;
pub mod events;
pub mod update;
pub mod ui;

// Re-export DemoApp for public API
pub use core::DemoApp;
pub use events::DemoEvent;
