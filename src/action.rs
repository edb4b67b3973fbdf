//! Confirm action results.
//!
//! Actions declare how they complete: [`ActionOutcome::Immediate`] for work
//! that is already done, [`ActionOutcome::Deferred`] for work that reports back
//! later over a channel. The UI thread polls deferred results once per frame.

use std::sync::Arc;

use crossbeam_channel::{bounded, Receiver, Sender, TryRecvError};

use crate::error::ActionError;

pub type ActionResult = Result<(), ActionError>;

/// Invoked when the confirm control is activated.
pub type ConfirmAction = Arc<dyn Fn() -> ActionOutcome + Send + Sync>;

/// Invoked when the cancel control is activated.
pub type CancelAction = Arc<dyn Fn() + Send + Sync>;

/// Receives the failure of a deferred confirm action.
pub type ErrorHook = Arc<dyn Fn(&ActionError) + Send + Sync>;

/// How a confirm action completes.
#[derive(Debug)]
pub enum ActionOutcome {
    Immediate,
    Deferred(Deferred),
}

impl From<()> for ActionOutcome {
    fn from(_: ()) -> Self {
        Self::Immediate
    }
}

impl From<Deferred> for ActionOutcome {
    fn from(deferred: Deferred) -> Self {
        Self::Deferred(deferred)
    }
}

/// A confirm result that is not available yet.
#[derive(Debug)]
pub struct Deferred {
    rx: Receiver<ActionResult>,
}

impl Deferred {
    /// Create a deferred result and the sender that settles it.
    pub fn channel() -> (Deferred, DeferredSender) {
        let (tx, rx) = bounded(1);
        (Deferred { rx }, DeferredSender { tx })
    }

    pub fn from_receiver(rx: Receiver<ActionResult>) -> Self {
        Self { rx }
    }

    /// Non-blocking check. A sender dropped without settling counts as a failure.
    pub(crate) fn try_settle(&self) -> Option<ActionResult> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                Some(Err(ActionError::new("action dropped before completing")))
            }
        }
    }
}

/// Settles a [`Deferred`] from any thread.
#[derive(Debug)]
pub struct DeferredSender {
    tx: Sender<ActionResult>,
}

impl DeferredSender {
    pub fn settle(self, result: ActionResult) {
        // The receiver is gone once its dialog was superseded
        let _ = self.tx.send(result);
    }

    pub fn resolve(self) {
        self.settle(Ok(()));
    }

    pub fn reject(self, error: impl Into<ActionError>) {
        self.settle(Err(error.into()));
    }
}
