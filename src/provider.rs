//! Dialog provider and accessor.
//!
//! A [`DialogProvider`] owns one registry per UI tree. Installing it stores a
//! weak handle in the egui `Context`'s data map, so any descendant
//! holding the context (or a `Ui`) can reach it through [`use_dialog_api`]
//! without the handle being threaded through every call.
//!
//! ```ignore
//! fn save_button(ui: &mut egui::Ui) {
//!     if ui.button("Save").clicked() {
//!         use_dialog_api(ui.ctx()).success(DialogContent::new("Done").title("Saved"));
//!     }
//! }
//! ```

use std::sync::{Arc, Weak};

use eframe::egui::{self, mutex::Mutex};
use tracing::error;

use crate::confirm::{Activation, CancelStart, ConfirmStart};
use crate::config::DialogSettings;
use crate::error::DialogError;
use crate::options::{ConfirmControls, DialogContent, DialogKind, DialogOptions, DialogVariant};
use crate::registry::{DialogRegistry, DialogSnapshot};
use crate::ui::{render_surface, DialogTheme, SurfaceAction, SurfaceConfig};

const API_ID: &str = "dialog_host::api";

/// Look up the dialog API installed on `ctx`.
///
/// # Panics
///
/// Panics if no [`DialogProvider`] was installed on this context. That is a
/// wiring bug in the host app, not a condition to recover from.
pub fn use_dialog_api(ctx: &egui::Context) -> DialogApi {
    match DialogApi::try_from_ctx(ctx) {
        Ok(api) => api,
        Err(err) => {
            error!("{}", err);
            panic!("{}", err);
        }
    }
}

/// Handle to a dialog registry. Clones share the same registry.
#[derive(Clone)]
pub struct DialogApi {
    registry: Arc<Mutex<DialogRegistry>>,
}

impl DialogApi {
    fn new() -> Self {
        Self {
            registry: Arc::new(Mutex::new(DialogRegistry::new())),
        }
    }

    /// Fallible form of [`use_dialog_api`]. Fails once the provider is dropped.
    pub fn try_from_ctx(ctx: &egui::Context) -> Result<Self, DialogError> {
        ctx.data(|data| data.get_temp::<InstalledApi>(api_id()))
            .and_then(|installed| installed.0.upgrade())
            .map(|registry| Self { registry })
            .ok_or(DialogError::NoProvider)
    }

    // ------------------------------------------------------------------
    // Open / close
    // ------------------------------------------------------------------

    /// Show `options`, replacing any dialog that is currently up.
    pub fn open(&self, options: DialogOptions) {
        self.registry.lock().open(options);
    }

    /// Hide the dialog. The last options are kept for the exit fade.
    pub fn close(&self) {
        self.registry.lock().close();
    }

    pub fn info(&self, content: impl Into<DialogContent>) {
        self.open(DialogOptions::new(DialogKind::Info, content));
    }

    pub fn success(&self, content: impl Into<DialogContent>) {
        self.open(DialogOptions::new(DialogKind::Success, content));
    }

    pub fn error(&self, content: impl Into<DialogContent>) {
        self.open(DialogOptions::new(DialogKind::Error, content));
    }

    pub fn warning(&self, content: impl Into<DialogContent>) {
        self.open(DialogOptions::new(DialogKind::Warning, content));
    }

    /// Custom dialogs default to a neutral placeholder icon.
    pub fn custom(&self, content: impl Into<DialogContent>) {
        self.open(DialogOptions::new(DialogKind::Custom, content));
    }

    pub fn confirm(&self, content: impl Into<DialogContent>, controls: ConfirmControls) {
        self.open(DialogOptions::new(DialogKind::Confirm(controls), content));
    }

    // ------------------------------------------------------------------
    // Confirmation protocol
    // ------------------------------------------------------------------

    /// Activate the confirm control.
    ///
    /// Fails with [`DialogError::MissingConfirmAction`] before touching any
    /// state when the confirm dialog has no action wired.
    pub fn activate_confirm(&self) -> Result<Activation, DialogError> {
        let start = self.registry.lock().begin_confirm()?;
        let ConfirmStart::Invoke {
            action,
            on_error,
            generation,
        } = start
        else {
            return Ok(Activation::Ignored);
        };
        // Unlocked: the action may open a follow-up dialog
        let outcome = action();
        Ok(self.registry.lock().finish_confirm(generation, outcome, on_error))
    }

    /// Activate the cancel control. Ignored while a confirm action is in flight.
    pub fn activate_cancel(&self) -> Activation {
        let start = self.registry.lock().begin_cancel();
        match start {
            CancelStart::Ignored => Activation::Ignored,
            CancelStart::Close => {
                self.close();
                Activation::Closed
            }
            CancelStart::Invoke(action) => {
                action();
                Activation::Delegated
            }
        }
    }

    /// Close requested by the dialog chrome. Ignored while processing.
    pub fn dismiss(&self) -> Activation {
        self.registry.lock().dismiss()
    }

    /// Apply settled deferred results. Called once per frame by the provider.
    pub fn poll(&self) {
        let failures = self.registry.lock().poll();
        for (hook, err) in failures {
            hook(&err);
        }
    }

    // ------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------

    pub fn is_visible(&self) -> bool {
        self.registry.lock().is_visible()
    }

    pub fn is_processing(&self) -> bool {
        self.registry.lock().is_processing()
    }

    pub fn current_variant(&self) -> Option<DialogVariant> {
        self.registry.lock().current_variant()
    }

    pub fn snapshot(&self) -> DialogSnapshot {
        self.registry.lock().snapshot()
    }

    fn has_pending(&self) -> bool {
        self.registry.lock().has_pending()
    }
}

fn api_id() -> egui::Id {
    egui::Id::new(API_ID)
}

/// Stored in the context. Weak, since dialog options hold caller closures
/// that may themselves hold the context.
#[derive(Clone)]
struct InstalledApi(Weak<Mutex<DialogRegistry>>);

/// Root of the dialog system for one egui context.
pub struct DialogProvider {
    api: DialogApi,
    theme: DialogTheme,
    surface: SurfaceConfig,
}

impl DialogProvider {
    pub fn new(settings: &DialogSettings) -> Self {
        Self {
            api: DialogApi::new(),
            theme: DialogTheme::from_name(&settings.theme),
            surface: settings.surface_config(),
        }
    }

    pub fn api(&self) -> DialogApi {
        self.api.clone()
    }

    pub fn set_theme(&mut self, theme: DialogTheme) {
        self.theme = theme;
    }

    /// Make this provider's API reachable through [`use_dialog_api`] on `ctx`.
    pub fn install(&self, ctx: &egui::Context) {
        let installed = InstalledApi(Arc::downgrade(&self.api.registry));
        ctx.data_mut(|data| data.insert_temp(api_id(), installed));
    }

    /// Remove the API from `ctx`; later accessor calls fail.
    pub fn uninstall(&self, ctx: &egui::Context) {
        ctx.data_mut(|data| data.remove::<InstalledApi>(api_id()));
    }

    /// Poll deferred results, render the surface and apply the user's action.
    ///
    /// Call once per frame after the rest of the UI. Returns
    /// [`DialogError::MissingConfirmAction`] when the user confirms a dialog
    /// that has no action wired.
    pub fn show(&self, ctx: &egui::Context) -> Result<(), DialogError> {
        self.api.poll();

        let snapshot = self.api.snapshot();
        if let Some(action) = render_surface(ctx, &snapshot, &self.theme, &self.surface) {
            self.apply(action)?;
        }

        // Keep polling while results are outstanding, even without input
        if self.api.has_pending() {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }
        Ok(())
    }

    /// Apply an action reported by the surface.
    pub fn apply(&self, action: SurfaceAction) -> Result<Activation, DialogError> {
        match action {
            SurfaceAction::Confirm => self.api.activate_confirm(),
            SurfaceAction::Cancel => Ok(self.api.activate_cancel()),
            SurfaceAction::Dismiss => Ok(self.api.dismiss()),
        }
    }
}

impl Drop for DialogProvider {
    fn drop(&mut self) {
        // Caller closures may hold handles back to this registry or the context
        let released = self.api.registry.lock().release();
        drop(released);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{CancelButton, ConfirmButton};

    #[test]
    fn test_accessor_without_provider_fails() {
        let ctx = egui::Context::default();
        assert!(matches!(
            DialogApi::try_from_ctx(&ctx),
            Err(DialogError::NoProvider)
        ));
    }

    #[test]
    #[should_panic(expected = "must be used within a DialogProvider")]
    fn test_use_dialog_api_panics_without_provider() {
        let ctx = egui::Context::default();
        let _ = use_dialog_api(&ctx);
    }

    #[test]
    fn test_install_makes_api_reachable() {
        let ctx = egui::Context::default();
        let provider = DialogProvider::new(&DialogSettings::default());
        provider.install(&ctx);

        use_dialog_api(&ctx).info("hello");
        assert!(provider.api().is_visible());
        assert_eq!(provider.api().current_variant(), Some(DialogVariant::Info));
    }

    #[test]
    fn test_uninstall() {
        let ctx = egui::Context::default();
        let provider = DialogProvider::new(&DialogSettings::default());
        provider.install(&ctx);
        provider.uninstall(&ctx);
        assert!(DialogApi::try_from_ctx(&ctx).is_err());
    }

    #[test]
    fn test_dropped_provider_is_unreachable() {
        let ctx = egui::Context::default();
        let provider = DialogProvider::new(&DialogSettings::default());
        provider.install(&ctx);
        drop(provider);
        assert!(matches!(
            DialogApi::try_from_ctx(&ctx),
            Err(DialogError::NoProvider)
        ));
    }

    #[test]
    fn test_apply_confirm_without_action_propagates() {
        let ctx = egui::Context::default();
        let provider = DialogProvider::new(&DialogSettings::default());
        provider.install(&ctx);
        let api = provider.api();
        api.confirm(
            DialogContent::new("Really?").title("Delete?"),
            ConfirmControls::new(ConfirmButton::new("Delete")),
        );

        assert!(matches!(
            provider.apply(SurfaceAction::Confirm),
            Err(DialogError::MissingConfirmAction)
        ));
        assert!(api.is_visible());
        assert!(!api.is_processing());
    }

    #[test]
    fn test_apply_routes_cancel_and_dismiss() {
        let provider = DialogProvider::new(&DialogSettings::default());
        let api = provider.api();

        api.confirm(
            "Leave?",
            ConfirmControls::new(ConfirmButton::new("Leave").on_activate(|| ()))
                .with_cancel(CancelButton::default()),
        );
        assert_eq!(provider.apply(SurfaceAction::Cancel).unwrap(), Activation::Closed);
        assert!(!api.is_visible());

        api.info("hello");
        assert_eq!(provider.apply(SurfaceAction::Dismiss).unwrap(), Activation::Closed);
        assert!(!api.is_visible());

        api.confirm("Go?", ConfirmControls::new(ConfirmButton::new("Go").on_activate(|| ())));
        assert_eq!(provider.apply(SurfaceAction::Confirm).unwrap(), Activation::Closed);
        assert!(!api.is_visible());
    }

    #[test]
    fn test_separate_contexts_are_isolated() {
        let first = egui::Context::default();
        let second = egui::Context::default();
        let a = DialogProvider::new(&DialogSettings::default());
        let b = DialogProvider::new(&DialogSettings::default());
        a.install(&first);
        b.install(&second);

        use_dialog_api(&first).error("only here");
        assert!(a.api().is_visible());
        assert!(!b.api().is_visible());
    }
}
