//! Color schemes and styling.

use gpui::{rgb, Hsla};

/// Color palette for the UI.
///
/// Only a dark palette ships for now; the struct exists so views never
/// hard-code hex values inline.
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    /// Window background.
    pub background: Hsla,
    /// Card and input background.
    pub surface: Hsla,
    /// Hovered/raised surface.
    pub surface_elevated: Hsla,
    /// Borders and dividers.
    pub border: Hsla,
    /// Primary text.
    pub text_primary: Hsla,
    /// Secondary text (regions, counts).
    pub text_secondary: Hsla,
    /// Muted text (placeholders, hints).
    pub text_muted: Hsla,
    /// Accent for focus and highlights.
    pub accent: Hsla,
}

impl ThemeColors {
    /// The dark palette.
    pub fn dark() -> Self {
        Self {
            background: rgb(0x111113).into(),
            surface: rgb(0x18181b).into(),
            surface_elevated: rgb(0x27272a).into(),
            border: rgb(0x27272a).into(),
            text_primary: rgb(0xe4e4e7).into(),
            text_secondary: rgb(0xa1a1aa).into(),
            text_muted: rgb(0x71717a).into(),
            accent: rgb(0x3b82f6).into(),
        }
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self::dark()
    }
}
