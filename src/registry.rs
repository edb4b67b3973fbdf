//! Dialog registry: the single owner of dialog visibility, options and
//! confirm processing state.
//!
//! `DialogRegistry` is plain data with no locking. [`crate::DialogApi`] wraps it
//! for sharing across the UI tree; confirm-specific transitions live in
//! `confirm.rs`.

use tracing::debug;

use crate::confirm::ConfirmProtocol;
use crate::error::ActionError;
use crate::options::{DialogOptions, DialogVariant};

/// Visibility plus the options the dialog was last opened with.
///
/// `current` survives `close()` so the exit fade can keep drawing the
/// previous content.
#[derive(Debug, Clone, Default)]
pub struct DialogState {
    pub is_visible: bool,
    pub current: Option<DialogOptions>,
}

/// Point-in-time copy of the registry, used for rendering and inspection.
#[derive(Debug, Clone, Default)]
pub struct DialogSnapshot {
    pub is_visible: bool,
    pub options: Option<DialogOptions>,
    pub is_processing: bool,
    /// Failure of the last deferred confirm action of this dialog.
    pub failure: Option<ActionError>,
    pub generation: u64,
}

impl DialogSnapshot {
    pub fn variant(&self) -> Option<DialogVariant> {
        self.options.as_ref().map(DialogOptions::variant)
    }
}

#[derive(Default)]
pub(crate) struct DialogRegistry {
    pub(crate) state: DialogState,
    /// Bumped by every `open`; deferred results carry the value they started under.
    pub(crate) generation: u64,
    pub(crate) confirm: ConfirmProtocol,
    pub(crate) last_failure: Option<ActionError>,
}

impl DialogRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Replace whatever dialog is current and show the new one.
    pub(crate) fn open(&mut self, options: DialogOptions) {
        self.generation = self.generation.wrapping_add(1);
        if self.confirm.processing {
            debug!(
                generation = self.generation,
                "dialog replaced while a confirm action was in flight"
            );
        }
        // The new dialog has no action of its own in flight
        self.confirm.reset();
        self.last_failure = None;
        debug!(
            variant = ?options.variant(),
            generation = self.generation,
            "dialog opened"
        );
        self.state.current = Some(options);
        self.state.is_visible = true;
    }

    pub(crate) fn close(&mut self) {
        if self.state.is_visible {
            debug!(generation = self.generation, "dialog closed");
        }
        self.state.is_visible = false;
    }

    /// Hide the dialog and hand back everything holding caller closures.
    pub(crate) fn release(&mut self) -> (Option<DialogOptions>, ConfirmProtocol) {
        self.state.is_visible = false;
        (self.state.current.take(), std::mem::take(&mut self.confirm))
    }

    pub(crate) fn is_visible(&self) -> bool {
        self.state.is_visible
    }

    pub(crate) fn is_processing(&self) -> bool {
        self.confirm.processing
    }

    pub(crate) fn current_variant(&self) -> Option<DialogVariant> {
        self.state.current.as_ref().map(DialogOptions::variant)
    }

    pub(crate) fn snapshot(&self) -> DialogSnapshot {
        DialogSnapshot {
            is_visible: self.state.is_visible,
            options: self.state.current.clone(),
            is_processing: self.confirm.processing,
            failure: self.last_failure.clone(),
            generation: self.generation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{DialogContent, DialogKind};

    fn info(title: &str) -> DialogOptions {
        DialogOptions::new(DialogKind::Info, DialogContent::new("body").title(title))
    }

    #[test]
    fn test_registry_starts_hidden() {
        let registry = DialogRegistry::new();
        assert!(!registry.is_visible());
        assert!(!registry.is_processing());
        assert!(registry.current_variant().is_none());
        assert_eq!(registry.generation, 0);
    }

    #[test]
    fn test_open_replaces_current() {
        let mut registry = DialogRegistry::new();
        registry.open(info("first"));
        registry.open(DialogOptions::new(DialogKind::Error, DialogContent::new("x").title("second")));

        let snapshot = registry.snapshot();
        assert!(snapshot.is_visible);
        assert_eq!(snapshot.variant(), Some(DialogVariant::Error));
        assert_eq!(snapshot.options.as_ref().and_then(|o| o.title()), Some("second"));
        assert_eq!(snapshot.generation, 2);
    }

    #[test]
    fn test_close_keeps_options() {
        let mut registry = DialogRegistry::new();
        registry.open(info("kept"));
        registry.close();

        assert!(!registry.is_visible());
        let snapshot = registry.snapshot();
        assert_eq!(snapshot.options.as_ref().and_then(|o| o.title()), Some("kept"));
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut registry = DialogRegistry::new();
        registry.close();
        registry.open(info("a"));
        registry.close();
        registry.close();
        assert!(!registry.is_visible());
        assert_eq!(registry.generation, 1);
    }

    #[test]
    fn test_release_empties_registry() {
        let mut registry = DialogRegistry::new();
        registry.open(info("a"));
        let (options, _confirm) = registry.release();

        assert_eq!(options.as_ref().and_then(|o| o.title()), Some("a"));
        assert!(!registry.is_visible());
        assert!(registry.current_variant().is_none());
    }

    #[test]
    fn test_open_clears_failure() {
        let mut registry = DialogRegistry::new();
        registry.open(info("a"));
        registry.last_failure = Some(ActionError::new("boom"));
        registry.open(info("b"));
        assert!(registry.snapshot().failure.is_none());
    }
}
