//! Dialog surface - draws the current dialog into an egui `Modal`.
//!
//! The surface is stateless: it renders a [`DialogSnapshot`] and reports at
//! most one [`SurfaceAction`] per frame. While the dialog fades out, the
//! preserved options keep rendering in a plain area with interaction
//! disabled and no backdrop.

use eframe::egui::{self, Align, Color32, Key, Layout, Margin, RichText, Stroke};

use super::actions::SurfaceAction;
use super::theme::DialogTheme;
use crate::options::{ButtonSpec, CancelButton, ConfirmButton, ConfirmControls, DialogMessage, DialogOptions};
use crate::registry::DialogSnapshot;
use crate::style::{resolve_style, resolve_width, VariantStyle};

const SURFACE_ID: &str = "dialog_host::surface";

/// Chrome behavior of the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceConfig {
    /// Fade in/out duration; zero disables the animation.
    pub fade_secs: f32,
    pub dismiss_on_escape: bool,
    pub dismiss_on_backdrop: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            fade_secs: 0.15,
            dismiss_on_escape: true,
            dismiss_on_backdrop: true,
        }
    }
}

/// Render the dialog described by `snapshot`.
/// Returns the action the user took this frame, if any.
pub fn render_surface(
    ctx: &egui::Context,
    snapshot: &DialogSnapshot,
    theme: &DialogTheme,
    config: &SurfaceConfig,
) -> Option<SurfaceAction> {
    let opacity = ctx.animate_bool_with_time(
        egui::Id::new(SURFACE_ID).with("fade"),
        snapshot.is_visible,
        config.fade_secs,
    );
    if opacity <= 0.0 {
        return None;
    }
    let options = snapshot.options.as_ref()?;
    let interactive = snapshot.is_visible;
    let style = resolve_style(options.variant(), &options.content);

    let mut action: Option<SurfaceAction> = None;
    let frame = egui::Frame::new()
        .fill(theme.surface.gamma_multiply(opacity))
        .stroke(Stroke::new(1.0, theme.border.gamma_multiply(opacity)))
        .corner_radius(12.0)
        .inner_margin(Margin::same(20));

    let mut body = |ui: &mut egui::Ui| {
        ui.set_opacity(opacity);
        ui.set_max_width(resolve_width(options.content.size));
        if !interactive {
            ui.disable();
        }

        if render_header(ui, options, &style, theme) {
            action = Some(SurfaceAction::Dismiss);
        }

        ui.add_space(8.0);
        match &options.content.message {
            DialogMessage::Text(text) => {
                ui.label(RichText::new(text).color(theme.text_secondary));
            }
            DialogMessage::Widget(render) => render(ui),
        }

        if let Some(failure) = &snapshot.failure {
            ui.add_space(8.0);
            render_failure(ui, &failure.to_string(), theme);
        }

        if let Some(controls) = options.kind.confirm_controls() {
            ui.add_space(16.0);
            if let Some(row_action) = render_action_row(ui, controls, snapshot, &style, theme) {
                action = Some(row_action);
            }
        }
    };

    if !interactive {
        // Fading out: no backdrop, so the UI underneath takes input again
        egui::Area::new(egui::Id::new(SURFACE_ID).with("closing"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .interactable(false)
            .show(ctx, |ui| {
                frame.show(ui, |ui| body(ui));
            });
        return None;
    }

    let modal = egui::Modal::new(egui::Id::new(SURFACE_ID))
        .backdrop_color(theme.backdrop.gamma_multiply(opacity))
        .frame(frame)
        .show(ctx, |ui| body(ui));

    if action.is_none() && modal.is_top_modal {
        let escape = config.dismiss_on_escape && ctx.input(|i| i.key_pressed(Key::Escape));
        let backdrop = config.dismiss_on_backdrop && modal.backdrop_response.clicked();
        if escape || backdrop {
            action = Some(SurfaceAction::Dismiss);
        }
    }

    action
}

/// Icon, title and (for non-confirm dialogs) a close button.
/// Returns true if the close button was clicked.
fn render_header(
    ui: &mut egui::Ui,
    options: &DialogOptions,
    style: &VariantStyle,
    theme: &DialogTheme,
) -> bool {
    let tone = theme.tone_color(style.tone);
    let closable = options.kind.confirm_controls().is_none();
    let mut close_clicked = false;

    ui.horizontal(|ui| {
        ui.label(RichText::new(style.icon.as_str()).size(22.0).color(tone));
        if let Some(title) = options.title() {
            ui.label(
                RichText::new(title)
                    .heading()
                    .strong()
                    .color(theme.text_primary),
            );
        }
        if closable {
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.small_button("🗙").on_hover_text("Close").clicked() {
                    close_clicked = true;
                }
            });
        }
    });

    close_clicked
}

fn render_failure(ui: &mut egui::Ui, message: &str, theme: &DialogTheme) {
    egui::Frame::new()
        .fill(theme.surface_raised)
        .stroke(Stroke::new(1.0, theme.danger))
        .corner_radius(6.0)
        .inner_margin(Margin::symmetric(10, 6))
        .show(ui, |ui| {
            ui.label(RichText::new(format!("⚠ {}", message)).color(theme.danger));
        });
}

/// Confirm and optional cancel buttons, right-aligned.
fn render_action_row(
    ui: &mut egui::Ui,
    controls: &ConfirmControls,
    snapshot: &DialogSnapshot,
    style: &VariantStyle,
    theme: &DialogTheme,
) -> Option<SurfaceAction> {
    let mut action = None;
    let default_confirm = ConfirmButton::default();
    let confirm = controls.confirm.as_ref().unwrap_or(&default_confirm);

    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
        let clicked = action_button(
            ui,
            &confirm.spec,
            theme.tone_color(style.tone),
            theme.text_on_accent,
            snapshot.confirm_enabled(),
            snapshot.confirm_loading(),
        );
        if clicked {
            action = Some(SurfaceAction::Confirm);
        }

        if let Some(cancel) = &controls.cancel {
            if render_cancel(ui, cancel, snapshot, theme) {
                action = Some(SurfaceAction::Cancel);
            }
        }
    });

    action
}

fn render_cancel(
    ui: &mut egui::Ui,
    cancel: &CancelButton,
    snapshot: &DialogSnapshot,
    theme: &DialogTheme,
) -> bool {
    action_button(
        ui,
        &cancel.spec,
        theme.surface_raised,
        theme.text_primary,
        snapshot.cancel_enabled().unwrap_or(false),
        cancel.spec.loading,
    )
}

/// A filled button with optional spinner. Returns true when clicked.
fn action_button(
    ui: &mut egui::Ui,
    spec: &ButtonSpec,
    default_fill: Color32,
    default_text: Color32,
    enabled: bool,
    loading: bool,
) -> bool {
    let style = spec.style.unwrap_or_default();
    let button = egui::Button::new(
        RichText::new(&spec.label).color(style.text.unwrap_or(default_text)),
    )
    .fill(style.fill.unwrap_or(default_fill))
    .min_size(egui::vec2(88.0, 32.0));

    let clicked = ui.add_enabled(enabled, button).clicked();
    if loading {
        ui.add(egui::Spinner::new().size(16.0));
    }
    clicked
}
