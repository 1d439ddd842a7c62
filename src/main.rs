//! chatpane - a scrollable chat bubble panel built with egui.
//!
//! Architecture:
//! - Main thread: runs the egui UI and owns the message collection
//! - Feed thread: plays a scripted conversation into a crossbeam channel

use eframe::egui;

use chatpane::app::PanelApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "chatpane",
        options,
        Box::new(|cc| Ok(Box::new(PanelApp::new(cc)))),
    )
}
