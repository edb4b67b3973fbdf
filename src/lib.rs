//! Dialog Host library.
//!
//! A single modal-dialog registry per egui context. Any widget that can reach
//! the `egui::Context` opens dialogs through [`use_dialog_api`]; the
//! [`DialogProvider`] renders them and runs the confirmation protocol.

pub mod action;
pub mod app;
pub mod config;
pub mod confirm;
pub mod error;
pub mod options;
pub mod provider;
pub mod registry;
pub mod runtime;
pub mod style;
pub mod ui;

mod integration_tests;

pub use action::{ActionOutcome, Deferred, DeferredSender};
pub use confirm::Activation;
pub use config::DialogSettings;
pub use error::{ActionError, DialogError};
pub use options::{
    ButtonSpec, ButtonStyle, CancelButton, ConfirmButton, ConfirmControls, DialogContent,
    DialogKind, DialogMessage, DialogOptions, DialogSize, DialogVariant, Icon,
};
pub use provider::{use_dialog_api, DialogApi, DialogProvider};
pub use registry::{DialogSnapshot, DialogState};
pub use runtime::ActionRunner;
