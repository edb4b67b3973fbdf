//! Tokio runtime for deferred confirm actions.
//!
//! Architecture:
//! - UI thread: owns the dialog registry and polls deferred results each frame
//! - Action runtime: a small multi-threaded Tokio runtime running the futures
//! - Results travel back over crossbeam channels (lock-free, sync-safe)

use std::future::Future;
use std::sync::Arc;

use eframe::egui;
use tokio::runtime::{Builder, Runtime};

use crate::action::Deferred;
use crate::error::{ActionError, DialogError};

/// Runs confirm actions off the UI thread.
///
/// Cheap to clone; clones share one runtime.
#[derive(Clone)]
pub struct ActionRunner {
    runtime: Arc<Runtime>,
    /// Woken when a result lands so the UI polls without waiting for input
    repaint: Option<egui::Context>,
}

impl ActionRunner {
    pub fn new() -> Result<Self, DialogError> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("dialog-actions")
            .enable_time()
            .build()?;
        Ok(Self {
            runtime: Arc::new(runtime),
            repaint: None,
        })
    }

    /// Request a repaint of `ctx` whenever an action settles.
    pub fn with_repaint(mut self, ctx: egui::Context) -> Self {
        self.repaint = Some(ctx);
        self
    }

    /// Run `future` on the action runtime and return its pending result.
    pub fn spawn<F, E>(&self, future: F) -> Deferred
    where
        F: Future<Output = Result<(), E>> + Send + 'static,
        E: Into<ActionError> + Send + 'static,
    {
        let (deferred, sender) = Deferred::channel();
        let repaint = self.repaint.clone();
        self.runtime.spawn(async move {
            let result = future.await.map_err(Into::into);
            sender.settle(result);
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
        deferred
    }
}
