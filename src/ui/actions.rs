//! Surface action types - the surface returns actions instead of mutating
//! the registry directly.
//!
//! This follows the immediate-mode GUI pattern: the surface renders from a
//! snapshot, and the provider applies the returned action after the frame's
//! rendering is done, so no lock is held while caller content draws.

/// User interaction with the dialog surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceAction {
    /// The confirm control was activated.
    Confirm,
    /// The cancel control was activated.
    Cancel,
    /// Close button, Escape, or backdrop click.
    Dismiss,
}
