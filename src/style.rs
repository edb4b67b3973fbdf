//! Variant and size lookup tables.
//!
//! Both tables are exhaustive matches: adding a [`DialogVariant`] or
//! [`DialogSize`] without an entry here is a compile error.

use crate::options::{DialogContent, DialogSize, DialogVariant, Icon};

/// Semantic color token, resolved to a concrete color by the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Info,
    Success,
    Danger,
    Warning,
    Accent,
    Neutral,
}

/// Icon and color token for one dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantStyle {
    pub icon: Icon,
    pub tone: Tone,
}

/// Default icon and tone for a variant.
pub const fn variant_style(variant: DialogVariant) -> VariantStyle {
    let (glyph, tone) = match variant {
        DialogVariant::Info => ("ℹ", Tone::Info),
        DialogVariant::Success => ("✔", Tone::Success),
        DialogVariant::Error => ("✖", Tone::Danger),
        DialogVariant::Warning => ("⚠", Tone::Warning),
        DialogVariant::Confirm => ("❓", Tone::Accent),
        DialogVariant::Custom => ("💬", Tone::Neutral),
    };
    VariantStyle {
        icon: Icon::from_static(glyph),
        tone,
    }
}

/// Style for a dialog: an explicit icon wins, the tone always follows the variant.
pub fn resolve_style(variant: DialogVariant, content: &DialogContent) -> VariantStyle {
    let mut style = variant_style(variant);
    if let Some(icon) = &content.icon {
        style.icon = icon.clone();
    }
    style
}

/// Maximum surface width in points.
pub const fn max_width(size: DialogSize) -> f32 {
    match size {
        DialogSize::Sm => 384.0,
        DialogSize::Md => 448.0,
        DialogSize::Lg => 512.0,
        DialogSize::Xl => 576.0,
    }
}

/// Width for an optional size; absence means [`DialogSize::Sm`].
pub fn resolve_width(size: Option<DialogSize>) -> f32 {
    max_width(size.unwrap_or(DialogSize::Sm))
}
