//! Status toast notifications - floating messages in top-right corner.

use eframe::egui;

use super::theme::DialogTheme;

/// Render floating status toasts (top-right corner).
///
/// # Arguments
/// * `ctx` - The egui context
/// * `status_messages` - List of (message, timestamp) pairs
/// * `theme` - Supplies the toast colors
pub fn render_status_toasts(
    ctx: &egui::Context,
    status_messages: &[(String, std::time::Instant)],
    theme: &DialogTheme,
) {
    if status_messages.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("status_toast_area"))
        .anchor(egui::Align2::RIGHT_TOP, [-10.0, 50.0]) // Below menu bar
        .order(egui::Order::Tooltip)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(theme.surface_raised)
                .corner_radius(6.0)
                .inner_margin(egui::Margin::symmetric(12, 8))
                .show(ui, |ui| {
                    for (msg, _) in status_messages {
                        ui.label(egui::RichText::new(msg).color(theme.text_primary));
                    }
                });
        });
}
