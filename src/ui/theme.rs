//! Color palettes and text styles for the message panel.

use eframe::egui::{self, Color32, FontFamily, FontId, TextStyle};
use std::collections::BTreeMap;

/// Palette used by the panel widgets. Two variants, dark and light,
/// selected by the settings' theme name.
#[derive(Clone, Debug)]
pub struct PaneTheme {
    pub panel_background: Color32,
    pub bubble_fill: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
}

impl PaneTheme {
    pub fn dark() -> Self {
        Self {
            panel_background: Color32::from_rgb(24, 26, 32),
            bubble_fill: Color32::from_rgb(38, 42, 52),
            text_primary: Color32::from_rgb(225, 228, 235),
            text_muted: Color32::from_rgb(130, 136, 150),
            accent: Color32::from_rgb(92, 148, 250),
        }
    }

    pub fn light() -> Self {
        Self {
            panel_background: Color32::from_rgb(245, 246, 248),
            bubble_fill: Color32::from_rgb(228, 231, 237),
            text_primary: Color32::from_rgb(32, 36, 44),
            text_muted: Color32::from_rgb(120, 126, 140),
            accent: Color32::from_rgb(45, 100, 210),
        }
    }

    /// Resolve a theme by its settings name. Anything that is not "light"
    /// is treated as dark, matching the settings default.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }
}

/// Text styles for the panel: standard hierarchy plus the two custom
/// styles the bubble renderer uses.
///
/// - **bubble_text**: 14px proportional, message bodies
/// - **bubble_time**: 11px monospace, timestamps
pub fn configure_text_styles() -> BTreeMap<TextStyle, FontId> {
    use FontFamily::{Monospace, Proportional};

    [
        (TextStyle::Small, FontId::new(10.0, Proportional)),
        (TextStyle::Body, FontId::new(14.0, Proportional)),
        (TextStyle::Button, FontId::new(13.0, Proportional)),
        (TextStyle::Heading, FontId::new(16.0, Proportional)),
        (TextStyle::Monospace, FontId::new(13.0, Monospace)),
        (TextStyle::Name("bubble_text".into()), FontId::new(14.0, Proportional)),
        (TextStyle::Name("bubble_time".into()), FontId::new(11.0, Monospace)),
    ]
    .into()
}

/// Apply text styles and spacing to the egui context. Called once from the
/// app's creation context.
pub fn apply_app_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.text_styles = configure_text_styles();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_falls_back_to_dark() {
        assert_eq!(
            PaneTheme::from_name("light").panel_background,
            PaneTheme::light().panel_background
        );
        assert_eq!(
            PaneTheme::from_name("dark").panel_background,
            PaneTheme::dark().panel_background
        );
        assert_eq!(
            PaneTheme::from_name("").panel_background,
            PaneTheme::dark().panel_background
        );
    }

    #[test]
    fn test_text_styles_cover_bubble_styles() {
        let styles = configure_text_styles();
        assert!(styles.contains_key(&TextStyle::Name("bubble_text".into())));
        assert!(styles.contains_key(&TextStyle::Name("bubble_time".into())));
        assert!(styles.contains_key(&TextStyle::Body));
    }
}
