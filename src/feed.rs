//! Demo message source: a background thread feeding records to the UI.
//!
//! The panel itself has no opinion about where records come from; this
//! module plays the external caller, pushing a scripted conversation over
//! a channel the app drains each frame.

use std::thread;
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::message::MessageRecord;

/// Scripted conversation: (delay before sending in ms, text, epoch seconds).
const SCRIPT: &[(u64, &str, i64)] = &[
    (0, "hey, you around?", 1_700_000_000),
    (600, "just got in. how was the flight?", 1_700_000_041),
    (
        900,
        "long. the layover was four hours and the gate changed twice, so I \
         mostly walked laps around the terminal with a pretzel and regrets",
        1_700_000_097,
    ),
    (700, "ouch", 1_700_000_112),
    // Re-sent on purpose: the panel must not render it twice
    (500, "ouch", 1_700_000_112),
    (800, "anyway, dinner on friday still on?", 1_700_000_160),
    (600, "yes. 7pm, same place", 1_700_000_185),
];

/// The full script as records, in send order.
pub fn script_records() -> Vec<MessageRecord> {
    SCRIPT
        .iter()
        .map(|(_, text, date)| MessageRecord::new(*text, *date))
        .collect()
}

/// Start the feed thread and return the receiving end.
pub fn spawn_feed() -> Receiver<MessageRecord> {
    let (tx, rx) = unbounded();
    thread::spawn(move || run_feed(tx));
    rx
}

fn run_feed(tx: Sender<MessageRecord>) {
    for (delay_ms, text, date) in SCRIPT {
        thread::sleep(Duration::from_millis(*delay_ms));
        if tx.send(MessageRecord::new(*text, *date)).is_err() {
            // UI dropped the receiver, stop feeding
            return;
        }
    }
    log::info!("feed script finished");
}
