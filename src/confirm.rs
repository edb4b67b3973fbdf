//! Confirmation protocol.
//!
//! ```text
//!   Idle --activate(immediate)--> close --> Idle
//!   Idle --activate(deferred)---> Processing --resolved--> close --> Idle
//!                                 Processing --rejected--> Idle (dialog stays open)
//! ```
//!
//! Actions run outside the registry lock, so activation is split into a
//! `begin_*` step that reads what to invoke and a `finish_*` step that applies
//! the outcome. Every deferred result is tagged with the generation it started
//! under; results for a superseded dialog are dropped without touching state.

use tracing::{debug, error, warn};

use crate::action::{ActionOutcome, CancelAction, ConfirmAction, Deferred, ErrorHook};
use crate::error::{ActionError, DialogError};
use crate::options::ConfirmControls;
use crate::registry::{DialogRegistry, DialogSnapshot};

/// What an activation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// The dialog was closed.
    Closed,
    /// A deferred action is in flight.
    Processing,
    /// A caller-supplied cancel handler ran instead of the default close.
    Delegated,
    /// The action opened another dialog, which stays up.
    Superseded,
    /// Nothing to activate: hidden, not a confirm dialog, disabled or busy.
    Ignored,
}

#[derive(Default)]
pub(crate) struct ConfirmProtocol {
    pub(crate) processing: bool,
    pub(crate) pending: Vec<PendingAction>,
}

impl ConfirmProtocol {
    /// Forget everything in flight. Results still owed to an earlier dialog
    /// can never apply, so their receivers are dropped here.
    pub(crate) fn reset(&mut self) {
        if !self.pending.is_empty() {
            debug!(dropped = self.pending.len(), "dropping superseded confirm results");
        }
        self.processing = false;
        self.pending.clear();
    }
}

pub(crate) struct PendingAction {
    generation: u64,
    deferred: Deferred,
    on_error: Option<ErrorHook>,
}

pub(crate) enum ConfirmStart {
    Ignored,
    Invoke {
        action: ConfirmAction,
        on_error: Option<ErrorHook>,
        generation: u64,
    },
}

pub(crate) enum CancelStart {
    Ignored,
    Close,
    Invoke(CancelAction),
}

/// Error hooks to run once the registry is unlocked.
pub(crate) type SettledFailures = Vec<(ErrorHook, ActionError)>;

impl DialogRegistry {
    fn visible_controls(&self) -> Option<&ConfirmControls> {
        if !self.state.is_visible {
            return None;
        }
        self.state.current.as_ref()?.kind.confirm_controls()
    }

    pub(crate) fn begin_confirm(&self) -> Result<ConfirmStart, DialogError> {
        let Some(controls) = self.visible_controls() else {
            return Ok(ConfirmStart::Ignored);
        };
        let Some((button, action)) = controls
            .confirm
            .as_ref()
            .and_then(|button| button.on_activate.clone().map(|action| (button, action)))
        else {
            error!(generation = self.generation, "confirm dialog has no confirm action");
            return Err(DialogError::MissingConfirmAction);
        };
        if self.confirm.processing || button.spec.disabled {
            return Ok(ConfirmStart::Ignored);
        }
        Ok(ConfirmStart::Invoke {
            action,
            on_error: button.on_error.clone(),
            generation: self.generation,
        })
    }

    pub(crate) fn finish_confirm(
        &mut self,
        generation: u64,
        outcome: ActionOutcome,
        on_error: Option<ErrorHook>,
    ) -> Activation {
        if generation != self.generation {
            debug!(
                started = generation,
                current = self.generation,
                "confirm action opened another dialog"
            );
            return Activation::Superseded;
        }
        match outcome {
            ActionOutcome::Immediate => {
                self.close();
                Activation::Closed
            }
            ActionOutcome::Deferred(deferred) => {
                debug!(generation, "confirm action deferred");
                self.confirm.processing = true;
                self.last_failure = None;
                self.confirm.pending.push(PendingAction {
                    generation,
                    deferred,
                    on_error,
                });
                Activation::Processing
            }
        }
    }

    pub(crate) fn begin_cancel(&self) -> CancelStart {
        let Some(cancel) = self.visible_controls().and_then(|c| c.cancel.as_ref()) else {
            return CancelStart::Ignored;
        };
        if self.confirm.processing || cancel.spec.disabled {
            return CancelStart::Ignored;
        }
        match &cancel.on_activate {
            Some(action) => CancelStart::Invoke(action.clone()),
            None => CancelStart::Close,
        }
    }

    /// Close requested by the dialog chrome (close button, Escape, backdrop).
    pub(crate) fn dismiss(&mut self) -> Activation {
        if !self.state.is_visible || self.confirm.processing {
            return Activation::Ignored;
        }
        self.close();
        Activation::Closed
    }

    pub(crate) fn has_pending(&self) -> bool {
        !self.confirm.pending.is_empty()
    }

    /// Apply every deferred result that has settled since the last poll.
    pub(crate) fn poll(&mut self) -> SettledFailures {
        let mut failures = SettledFailures::new();
        for pending in std::mem::take(&mut self.confirm.pending) {
            let Some(result) = pending.deferred.try_settle() else {
                self.confirm.pending.push(pending);
                continue;
            };
            if pending.generation != self.generation {
                debug!(
                    started = pending.generation,
                    current = self.generation,
                    "discarding stale confirm result"
                );
                continue;
            }
            self.confirm.processing = false;
            match result {
                Ok(()) => {
                    debug!(generation = pending.generation, "confirm action resolved");
                    self.close();
                }
                Err(err) => {
                    // The dialog stays open so the user can retry
                    warn!(generation = pending.generation, error = %err, "confirm action failed");
                    self.last_failure = Some(err.clone());
                    if let Some(hook) = pending.on_error {
                        failures.push((hook, err));
                    }
                }
            }
        }
        failures
    }
}

impl DialogSnapshot {
    fn controls(&self) -> Option<&ConfirmControls> {
        self.options.as_ref()?.kind.confirm_controls()
    }

    /// Whether the action row renders at all.
    pub fn has_action_row(&self) -> bool {
        self.controls().is_some()
    }

    pub fn confirm_enabled(&self) -> bool {
        let disabled = self
            .controls()
            .and_then(|c| c.confirm.as_ref())
            .is_some_and(|b| b.spec.disabled);
        self.has_action_row() && !disabled && !self.is_processing
    }

    pub fn confirm_loading(&self) -> bool {
        let loading = self
            .controls()
            .and_then(|c| c.confirm.as_ref())
            .is_some_and(|b| b.spec.loading);
        loading || self.is_processing
    }

    /// `None` when the dialog has no cancel control.
    pub fn cancel_enabled(&self) -> Option<bool> {
        let cancel = self.controls()?.cancel.as_ref()?;
        Some(!cancel.spec.disabled && !self.is_processing)
    }
}
