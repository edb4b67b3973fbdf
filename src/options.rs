//! Dialog option model.
//!
//! A dialog is split into its variant-independent [`DialogContent`] and a
//! [`DialogKind`] tag. Only the confirm kind carries button controls, so the
//! confirm/cancel fields cannot be attached to an info or error dialog.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use eframe::egui;
use serde::{Deserialize, Serialize};

use crate::action::{ActionOutcome, CancelAction, ConfirmAction, ErrorHook};
use crate::error::ActionError;

/// Semantic category of a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogVariant {
    Info,
    Success,
    Error,
    Warning,
    Confirm,
    Custom,
}

/// Maximum-width class of the dialog surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogSize {
    Sm,
    Md,
    Lg,
    Xl,
}

/// Glyph shown in the dialog header.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Icon(Cow<'static, str>);

impl Icon {
    pub const fn from_static(glyph: &'static str) -> Self {
        Self(Cow::Borrowed(glyph))
    }

    pub fn new(glyph: impl Into<String>) -> Self {
        Self(Cow::Owned(glyph.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Renders custom body content inside the dialog.
pub type WidgetFn = Arc<dyn Fn(&mut egui::Ui) + Send + Sync>;

/// Body of a dialog: plain text or arbitrary egui content.
#[derive(Clone)]
pub enum DialogMessage {
    Text(String),
    Widget(WidgetFn),
}

impl DialogMessage {
    pub fn widget(render: impl Fn(&mut egui::Ui) + Send + Sync + 'static) -> Self {
        Self::Widget(Arc::new(render))
    }

    /// Returns the text body, or `None` for widget bodies.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Widget(_) => None,
        }
    }
}

impl fmt::Debug for DialogMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Widget(_) => f.write_str("Widget(..)"),
        }
    }
}

impl From<&str> for DialogMessage {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for DialogMessage {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Color overrides for an action button.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ButtonStyle {
    pub fill: Option<egui::Color32>,
    pub text: Option<egui::Color32>,
}

/// Presentation of an action button.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonSpec {
    pub label: String,
    pub disabled: bool,
    pub loading: bool,
    pub style: Option<ButtonStyle>,
}

impl ButtonSpec {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
            loading: false,
            style: None,
        }
    }
}

/// The confirm control of a confirm dialog.
#[derive(Clone)]
pub struct ConfirmButton {
    pub spec: ButtonSpec,
    pub on_activate: Option<ConfirmAction>,
    /// Receives the failure of a deferred action.
    pub on_error: Option<ErrorHook>,
}

impl ConfirmButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            spec: ButtonSpec::new(label),
            on_activate: None,
            on_error: None,
        }
    }

    /// Sets the confirm action. Returning `()` completes immediately;
    /// returning a [`crate::Deferred`] keeps the dialog processing until it settles.
    pub fn on_activate<F, R>(mut self, action: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
        R: Into<ActionOutcome>,
    {
        self.on_activate = Some(Arc::new(move || action().into()));
        self
    }

    pub fn on_error(mut self, hook: impl Fn(&ActionError) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Arc::new(hook));
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.spec.disabled = disabled;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.spec.loading = loading;
        self
    }

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.spec.style = Some(style);
        self
    }
}

impl Default for ConfirmButton {
    fn default() -> Self {
        Self::new("Confirm")
    }
}

impl fmt::Debug for ConfirmButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfirmButton")
            .field("spec", &self.spec)
            .field("has_action", &self.on_activate.is_some())
            .field("has_error_hook", &self.on_error.is_some())
            .finish()
    }
}

/// The cancel control of a confirm dialog.
#[derive(Clone)]
pub struct CancelButton {
    pub spec: ButtonSpec,
    /// Replaces the default close behavior when set.
    pub on_activate: Option<CancelAction>,
}

impl CancelButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            spec: ButtonSpec::new(label),
            on_activate: None,
        }
    }

    pub fn on_activate(mut self, action: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_activate = Some(Arc::new(action));
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.spec.disabled = disabled;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.spec.loading = loading;
        self
    }

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.spec.style = Some(style);
        self
    }
}

impl Default for CancelButton {
    fn default() -> Self {
        Self::new("Cancel")
    }
}

impl fmt::Debug for CancelButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancelButton")
            .field("spec", &self.spec)
            .field("has_action", &self.on_activate.is_some())
            .finish()
    }
}

/// Action row of a confirm dialog. A cancel control renders only when present.
#[derive(Debug, Clone, Default)]
pub struct ConfirmControls {
    pub confirm: Option<ConfirmButton>,
    pub cancel: Option<CancelButton>,
}

impl ConfirmControls {
    pub fn new(confirm: ConfirmButton) -> Self {
        Self {
            confirm: Some(confirm),
            cancel: None,
        }
    }

    pub fn with_cancel(mut self, cancel: CancelButton) -> Self {
        self.cancel = Some(cancel);
        self
    }
}

/// Variant tag plus the data only that variant uses.
#[derive(Debug, Clone)]
pub enum DialogKind {
    Info,
    Success,
    Error,
    Warning,
    Custom,
    Confirm(ConfirmControls),
}

impl DialogKind {
    pub fn variant(&self) -> DialogVariant {
        match self {
            Self::Info => DialogVariant::Info,
            Self::Success => DialogVariant::Success,
            Self::Error => DialogVariant::Error,
            Self::Warning => DialogVariant::Warning,
            Self::Custom => DialogVariant::Custom,
            Self::Confirm(_) => DialogVariant::Confirm,
        }
    }

    pub fn confirm_controls(&self) -> Option<&ConfirmControls> {
        match self {
            Self::Confirm(controls) => Some(controls),
            _ => None,
        }
    }
}

/// Variant-independent part of a dialog.
#[derive(Debug, Clone)]
pub struct DialogContent {
    pub title: Option<String>,
    pub message: DialogMessage,
    /// Replaces the variant's default icon.
    pub icon: Option<Icon>,
    /// `None` resolves to [`DialogSize::Sm`].
    pub size: Option<DialogSize>,
}

impl DialogContent {
    pub fn new(message: impl Into<DialogMessage>) -> Self {
        Self {
            title: None,
            message: message.into(),
            icon: None,
            size: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn size(mut self, size: DialogSize) -> Self {
        self.size = Some(size);
        self
    }
}

impl From<&str> for DialogContent {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for DialogContent {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

/// Drops the kind, so variant helpers always apply their own.
impl From<DialogOptions> for DialogContent {
    fn from(options: DialogOptions) -> Self {
        options.content
    }
}

/// Everything needed to materialize one dialog.
#[derive(Debug, Clone)]
pub struct DialogOptions {
    pub content: DialogContent,
    pub kind: DialogKind,
}

impl DialogOptions {
    pub fn new(kind: DialogKind, content: impl Into<DialogContent>) -> Self {
        Self {
            content: content.into(),
            kind,
        }
    }

    pub fn variant(&self) -> DialogVariant {
        self.kind.variant()
    }

    pub fn title(&self) -> Option<&str> {
        self.content.title.as_deref()
    }
}
