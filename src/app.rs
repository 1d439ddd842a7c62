//! Application shell around the message panel.

use std::path::PathBuf;
use std::time::Duration;

use crossbeam_channel::Receiver;
use eframe::egui;

use crate::config::{load_settings, save_settings, Settings};
use crate::feed;
use crate::message::MessageRecord;
use crate::ui::panel::MessagePanel;
use crate::ui::theme::{self, PaneTheme};

pub struct PanelApp {
    /// The externally-owned message collection; the feed appends to it and
    /// the panel is synced against the full set every frame.
    records: Vec<MessageRecord>,

    feed_rx: Receiver<MessageRecord>,
    panel: MessagePanel,
    settings: Settings,
}

impl PanelApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // file:// avatar URIs go through the egui image loaders
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let settings = load_settings().unwrap_or_default();
        match settings.theme.as_str() {
            "light" => cc.egui_ctx.set_visuals(egui::Visuals::light()),
            _ => cc.egui_ctx.set_visuals(egui::Visuals::dark()),
        }
        theme::apply_app_style(&cc.egui_ctx);

        let panel = MessagePanel::new(&PathBuf::from(&settings.avatar));

        Self {
            records: Vec::new(),
            feed_rx: feed::spawn_feed(),
            panel,
            settings,
        }
    }

    /// Move everything the feed produced since the last frame into the
    /// record collection.
    fn drain_feed(&mut self) {
        while let Ok(record) = self.feed_rx.try_recv() {
            self.records.push(record);
        }
    }

    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.settings.theme = if self.settings.theme == "light" {
            "dark".to_string()
        } else {
            "light".to_string()
        };
        match self.settings.theme.as_str() {
            "light" => ctx.set_visuals(egui::Visuals::light()),
            _ => ctx.set_visuals(egui::Visuals::dark()),
        }
        if let Err(e) = save_settings(&self.settings) {
            log::warn!("failed to save settings: {}", e);
        }
    }
}

impl eframe::App for PanelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_feed();
        self.panel.sync_records(&self.records);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Messages").heading());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = if self.settings.theme == "light" {
                        "Dark"
                    } else {
                        "Light"
                    };
                    if ui.button(label).clicked() {
                        self.toggle_theme(ctx);
                    }
                });
            });
        });

        let pane_theme = PaneTheme::from_name(&self.settings.theme);
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(pane_theme.panel_background))
            .show(ctx, |ui| {
                self.panel.show(ui, &pane_theme);
            });

        // Keep draining the feed while it is still producing
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
