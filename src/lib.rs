//! chatpane library.
//!
//! A scrollable chat message bubble panel for egui, plus the demo app
//! around it.

pub mod app;
pub mod config;
pub mod feed;
pub mod message;
pub mod ui;
