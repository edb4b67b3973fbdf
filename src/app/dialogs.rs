//! Dialog rendering orchestration

use eframe::egui;
use tracing::error;

use super::DemoApp;
use crate::ui;

impl DemoApp {
    /// Render toasts and the dialog surface
    pub(super) fn render_dialogs(&mut self, ctx: &egui::Context) {
        // Floating status toasts (top-right corner)
        ui::render_status_toasts(ctx, &self.status_messages, &self.get_theme());

        // A confirm dialog without an action is a bug in the calling code
        if let Err(err) = self.dialogs.show(ctx) {
            error!(error = %err, "dialog misconfigured");
            panic!("{}", err);
        }
    }
}
