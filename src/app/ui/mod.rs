//! Panels of the demo app.

pub mod gallery;
pub mod panels;
