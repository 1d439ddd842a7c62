//! The scrollable message panel callers feed records into.

use std::path::Path;

use eframe::egui;

use crate::message::{BubbleRegistry, MessageRecord};

use super::avatar::AvatarSource;
use super::bubble;
use super::theme::PaneTheme;

/// Scroll container owning the rendered bubbles and the avatar source.
///
/// The caller keeps ownership of the record collection and hands the full
/// set to [`MessagePanel::sync_records`] on every update; the panel only
/// tracks what it has already rendered. Bubbles live as long as the panel.
pub struct MessagePanel {
    registry: BubbleRegistry,
    avatar: AvatarSource,
}

impl MessagePanel {
    /// Build a panel with the avatar asset at `avatar_path`. The path is
    /// resolved once here; a missing asset falls back to the placeholder.
    pub fn new(avatar_path: &Path) -> Self {
        Self {
            registry: BubbleRegistry::new(),
            avatar: AvatarSource::resolve(avatar_path),
        }
    }

    /// Append bubbles for any record not yet rendered.
    ///
    /// Returns how many bubbles were added. Safe to call with the same
    /// collection any number of times.
    pub fn sync_records(&mut self, records: &[MessageRecord]) -> usize {
        self.registry.absorb(records)
    }

    /// Rendered bubbles, in render order.
    pub fn registry(&self) -> &BubbleRegistry {
        &self.registry
    }

    /// Render the scroll area. Wheel input and the vertical scrollbar come
    /// with the widget; sticking to the bottom keeps the newest message in
    /// view from the first paint onward.
    pub fn show(&self, ui: &mut egui::Ui, theme: &PaneTheme) {
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                ui.add_space(8.0);
                for entry in self.registry.iter() {
                    bubble::show(ui, &self.avatar, entry, theme);
                    ui.add_space(10.0);
                }
                ui.add_space(8.0);
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_panel() -> MessagePanel {
        // Nonexistent path keeps tests off the filesystem; the panel
        // resolves it to the placeholder.
        MessagePanel::new(&PathBuf::from("test/no-avatar.png"))
    }

    #[test]
    fn test_sync_records_is_idempotent() {
        let mut panel = test_panel();
        let records = vec![MessageRecord::new("hi", 1_700_000_000)];

        assert_eq!(panel.sync_records(&records), 1);
        assert_eq!(panel.sync_records(&records), 0);
        assert_eq!(panel.registry().len(), 1);
    }

    #[test]
    fn test_sync_records_appends_only_new() {
        let mut panel = test_panel();
        panel.sync_records(&[
            MessageRecord::new("one", 1_700_000_000),
            MessageRecord::new("two", 1_700_000_001),
        ]);

        // Overlapping batch: one old record, one new
        let added = panel.sync_records(&[
            MessageRecord::new("two", 1_700_000_001),
            MessageRecord::new("three", 1_700_000_002),
        ]);

        assert_eq!(added, 1);
        let texts: Vec<&str> = panel.registry().iter().map(|b| b.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }
}
