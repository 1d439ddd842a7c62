//! Avatar rendering: a configured image asset with a painted fallback.

use std::path::Path;

use eframe::egui::{self, Color32, CornerRadius};

use super::theme::PaneTheme;

/// Fixed on-screen avatar size in pixels.
pub const AVATAR_SIZE: egui::Vec2 = egui::Vec2::new(100.0, 64.0);

const AVATAR_ROUNDING: CornerRadius = CornerRadius::same(6);

/// Where a bubble's avatar pixels come from. Resolved once when the panel
/// is constructed, not per bubble.
#[derive(Clone, Debug, PartialEq)]
pub enum AvatarSource {
    /// `file://` URI handed to the egui image loader, which caches the
    /// decoded texture across bubbles.
    Asset(String),
    /// Painted placeholder pattern, seeded by the configured path.
    Placeholder(u16),
}

impl AvatarSource {
    /// Resolve the configured asset path. A missing file downgrades to the
    /// placeholder with a warning so bubble construction never fails on it.
    pub fn resolve(path: &Path) -> Self {
        if path.is_file() {
            AvatarSource::Asset(format!("file://{}", path.display()))
        } else {
            log::warn!(
                "avatar asset {} not found, using placeholder",
                path.display()
            );
            AvatarSource::Placeholder(placeholder_pattern(&path.to_string_lossy()))
        }
    }
}

/// Draw the avatar at its fixed size and return the widget response.
pub fn show(ui: &mut egui::Ui, source: &AvatarSource, theme: &PaneTheme) -> egui::Response {
    match source {
        AvatarSource::Asset(uri) => ui.add(
            egui::Image::from_uri(uri.clone())
                .fit_to_exact_size(AVATAR_SIZE)
                .corner_radius(AVATAR_ROUNDING),
        ),
        AvatarSource::Placeholder(pattern) => paint_placeholder(ui, *pattern, theme),
    }
}

/// Paint a rounded tile with a 5x5 vertically-symmetric pattern centered
/// in it. Keeps the layout identical to the asset case.
fn paint_placeholder(ui: &mut egui::Ui, pattern: u16, theme: &PaneTheme) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(AVATAR_SIZE, egui::Sense::hover());
    let painter = ui.painter();

    painter.rect_filled(rect, AVATAR_ROUNDING, theme.accent);

    // 5 cells plus half-cell padding top and bottom
    let cell = rect.height() / 6.0;
    let grid = cell * 5.0;
    let origin = egui::pos2(rect.center().x - grid / 2.0, rect.top() + cell * 0.5);
    let fg = Color32::from_white_alpha(200);

    for row in 0..5u16 {
        for col in 0..5u16 {
            // Mirror the right two columns onto the left three
            let pattern_col = if col < 3 { col } else { 4 - col };
            if pattern & (1 << (row * 3 + pattern_col)) != 0 {
                let min = egui::pos2(
                    origin.x + col as f32 * cell,
                    origin.y + row as f32 * cell,
                );
                painter.rect_filled(
                    egui::Rect::from_min_size(min, egui::vec2(cell * 0.85, cell * 0.85)),
                    cell * 0.2,
                    fg,
                );
            }
        }
    }

    response
}

/// Derive a 15-bit symmetric pattern from a seed string via FNV-1a.
/// The forced bits keep the middle column populated so the tile never
/// renders blank.
pub fn placeholder_pattern(seed: &str) -> u16 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in seed.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    (hash as u16 & 0x7fff) | 0x0084
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_placeholder_pattern_deterministic() {
        assert_eq!(
            placeholder_pattern("assets/avatar.png"),
            placeholder_pattern("assets/avatar.png")
        );
        assert_ne!(
            placeholder_pattern("assets/avatar.png"),
            placeholder_pattern("assets/other.png")
        );
    }

    #[test]
    fn test_placeholder_pattern_never_blank() {
        let pattern = placeholder_pattern("");
        assert_ne!(pattern, 0);
        assert_ne!(pattern & 0x0084, 0);
    }

    #[test]
    fn test_resolve_missing_asset_degrades() {
        let source = AvatarSource::resolve(&PathBuf::from("definitely/not/here.png"));
        assert!(matches!(source, AvatarSource::Placeholder(_)));
    }
}
