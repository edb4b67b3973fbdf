//! Color themes for the dialog surface.
//!
//! # Tones
//!
//! Variants never name colors directly. The lookup table in `style.rs` maps
//! each variant to a [`Tone`], and the theme resolves tones to colors:
//!
//! - **Info**: Blue for informational dialogs
//! - **Success**: Green for completed actions
//! - **Danger**: Red for failures
//! - **Warning**: Yellow for caution states
//! - **Accent**: Primary blue (confirm dialogs, confirm buttons)
//! - **Neutral**: Gray placeholder for custom dialogs
//!
//! # Surfaces
//!
//! - `surface`: Dialog body fill
//! - `surface_raised`: Inline panels inside the dialog (failure banner)
//! - `backdrop`: Translucent overlay behind the modal

use eframe::egui::{self, Color32};

use crate::style::Tone;

#[derive(Clone, Debug)]
pub struct DialogTheme {
    pub name: String,
    pub surface: Color32,
    pub surface_raised: Color32,
    pub backdrop: Color32,
    pub accent: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub danger: Color32,
    pub info: Color32,
    pub neutral: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_on_accent: Color32,
    pub border: Color32,
}

impl DialogTheme {
    pub fn dark() -> Self {
        Self {
            name: "Dark".to_string(),
            surface: Color32::from_rgb(46, 46, 62),
            surface_raised: Color32::from_rgb(66, 66, 86),
            backdrop: Color32::from_black_alpha(160),
            accent: Color32::from_rgb(88, 101, 242),
            success: Color32::from_rgb(67, 181, 129),
            warning: Color32::from_rgb(250, 204, 21),
            danger: Color32::from_rgb(240, 71, 71),
            info: Color32::from_rgb(0, 175, 244),
            neutral: Color32::from_rgb(142, 146, 151),
            text_primary: Color32::WHITE,
            text_secondary: Color32::from_rgb(185, 187, 190),
            text_on_accent: Color32::WHITE,
            border: Color32::from_rgb(64, 68, 75),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            surface: Color32::from_rgb(255, 255, 255),
            surface_raised: Color32::from_rgb(242, 243, 245),
            backdrop: Color32::from_black_alpha(90),
            accent: Color32::from_rgb(37, 99, 235),
            success: Color32::from_rgb(22, 163, 74),
            warning: Color32::from_rgb(202, 138, 4),
            danger: Color32::from_rgb(220, 38, 38),
            info: Color32::from_rgb(59, 130, 246),
            neutral: Color32::from_rgb(107, 114, 128),
            text_primary: Color32::from_rgb(17, 24, 39),
            text_secondary: Color32::from_rgb(75, 85, 99),
            text_on_accent: Color32::WHITE,
            border: Color32::from_rgb(209, 213, 219),
        }
    }

    /// Theme for a settings name ("dark" or "light"); anything else is dark.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn tone_color(&self, tone: Tone) -> Color32 {
        match tone {
            Tone::Info => self.info,
            Tone::Success => self.success,
            Tone::Danger => self.danger,
            Tone::Warning => self.warning,
            Tone::Accent => self.accent,
            Tone::Neutral => self.neutral,
        }
    }

    pub fn visuals(&self) -> egui::Visuals {
        if self.name == "Light" {
            egui::Visuals::light()
        } else {
            egui::Visuals::dark()
        }
    }
}

impl Default for DialogTheme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Apply the base style for the host app: visuals plus spacing on an 8px grid.
pub fn apply_app_style(ctx: &egui::Context, theme: &DialogTheme) {
    ctx.set_visuals(theme.visuals());

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.window_margin = egui::Margin::same(12);
    style.spacing.button_padding = egui::vec2(10.0, 5.0);
    style.visuals.widgets.inactive.corner_radius = egui::CornerRadius::same(6);
    style.visuals.widgets.hovered.corner_radius = egui::CornerRadius::same(6);
    style.visuals.widgets.active.corner_radius = egui::CornerRadius::same(6);
    style.visuals.selection.bg_fill = theme.accent.gamma_multiply(0.4);
    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(DialogTheme::from_name("light").name, "Light");
        assert_eq!(DialogTheme::from_name("dark").name, "Dark");
        assert_eq!(DialogTheme::from_name("solarized").name, "Dark");
    }

    #[test]
    fn test_tones_resolve_to_theme_colors() {
        let theme = DialogTheme::dark();
        assert_eq!(theme.tone_color(Tone::Danger), theme.danger);
        assert_eq!(theme.tone_color(Tone::Accent), theme.accent);
        assert_ne!(theme.tone_color(Tone::Success), theme.tone_color(Tone::Warning));
    }
}
