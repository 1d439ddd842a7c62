//! Single message bubble: avatar column, timestamp, wrapped text.

use eframe::egui::{self, CornerRadius, Margin, RichText, TextStyle};

use crate::message::RenderedBubble;

use super::avatar::{self, AvatarSource};
use super::theme::PaneTheme;

/// Horizontal space reserved for the avatar column and margins; the text
/// column gets whatever is left.
pub(crate) const TEXT_COLUMN_MARGIN: f32 = 130.0;

/// Cap on the message text width, so lines stay readable in wide windows.
pub(crate) const MAX_WRAP_WIDTH: f32 = 800.0;

/// Wrap length for the message label given the container width.
///
/// The resize hook of the panel: evaluated every frame from the live
/// container width. Applies to the message label only; the time label is
/// never wrapped.
pub fn wrap_width(container_width: f32) -> f32 {
    (container_width - TEXT_COLUMN_MARGIN)
        .min(MAX_WRAP_WIDTH)
        .max(0.0)
}

/// Render one bubble: avatar on the left, timestamp over the message text
/// on the right.
pub fn show(ui: &mut egui::Ui, source: &AvatarSource, bubble: &RenderedBubble, theme: &PaneTheme) {
    let wrap = wrap_width(ui.available_width());

    ui.horizontal(|ui| {
        ui.add_space(10.0);
        avatar::show(ui, source, theme);
        ui.add_space(10.0);

        ui.vertical(|ui| {
            ui.set_max_width(wrap);

            ui.add(
                egui::Label::new(
                    RichText::new(&bubble.time)
                        .text_style(TextStyle::Name("bubble_time".into()))
                        .color(theme.text_muted),
                )
                .extend(),
            );

            egui::Frame::new()
                .fill(theme.bubble_fill)
                .corner_radius(CornerRadius {
                    nw: 4,
                    ne: 12,
                    sw: 12,
                    se: 12,
                })
                .inner_margin(Margin::symmetric(12, 8))
                .show(ui, |ui| {
                    ui.add(
                        egui::Label::new(
                            RichText::new(&bubble.text)
                                .text_style(TextStyle::Name("bubble_text".into()))
                                .color(theme.text_primary),
                        )
                        .wrap(),
                    );
                });
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_width_caps_at_maximum() {
        assert_eq!(wrap_width(2000.0), MAX_WRAP_WIDTH);
        assert_eq!(wrap_width(TEXT_COLUMN_MARGIN + MAX_WRAP_WIDTH), MAX_WRAP_WIDTH);
    }

    #[test]
    fn test_wrap_width_tracks_narrow_containers() {
        assert_eq!(wrap_width(600.0), 470.0);
        assert_eq!(wrap_width(200.0), 70.0);
    }

    #[test]
    fn test_wrap_width_clamps_at_zero() {
        assert_eq!(wrap_width(130.0), 0.0);
        assert_eq!(wrap_width(50.0), 0.0);
    }

    #[test]
    fn test_wrap_width_never_exceeds_bounds() {
        for width in [0.0f32, 131.0, 400.0, 930.0, 1500.0] {
            let w = wrap_width(width);
            assert!(w <= MAX_WRAP_WIDTH);
            assert!(w <= (width - TEXT_COLUMN_MARGIN).max(0.0));
        }
    }
}
