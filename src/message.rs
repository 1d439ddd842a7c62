//! Message records and the registry of rendered bubbles.

use chrono::DateTime;

/// Display format for bubble timestamps (day-first, second precision).
const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// A message as handed to the panel by the caller.
///
/// The caller owns the collection and passes the full set on every update;
/// the panel never stores records, only what it has rendered from them.
#[derive(Clone, Debug, PartialEq)]
pub struct MessageRecord {
    /// Message body.
    pub message: String,
    /// Epoch seconds.
    pub date: i64,
}

impl MessageRecord {
    pub fn new(message: impl Into<String>, date: i64) -> Self {
        Self {
            message: message.into(),
            date,
        }
    }
}

/// One rendered message: the text and its pre-formatted display time.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedBubble {
    pub text: String,
    pub time: String,
}

/// Format an epoch-seconds timestamp for display.
///
/// Rendered from UTC so the same record produces the same display string
/// (and therefore the same dedup key) on every machine. Epochs outside
/// chrono's representable range degrade to a marker instead of aborting
/// the update.
pub fn format_timestamp(epoch_seconds: i64) -> String {
    match DateTime::from_timestamp(epoch_seconds, 0) {
        Some(dt) => dt.format(TIMESTAMP_FORMAT).to_string(),
        None => {
            log::warn!("message date {} out of range", epoch_seconds);
            "invalid date".to_string()
        }
    }
}

/// Ordered list of rendered bubbles.
///
/// Append-only: entries are added as records arrive and removed only when
/// the owning panel is dropped. Doubles as the duplicate-detection table,
/// keyed on the exact (text, formatted-time) pair.
#[derive(Default, Clone)]
pub struct BubbleRegistry {
    bubbles: Vec<RenderedBubble>,
}

impl BubbleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a bubble with this exact text and display time is already
    /// rendered. Linear scan; registries stay small enough that an index
    /// would not pay for itself.
    pub fn contains(&self, text: &str, time: &str) -> bool {
        self.bubbles.iter().any(|b| b.text == text && b.time == time)
    }

    /// Append bubbles for every record not yet rendered.
    ///
    /// Returns the number of bubbles added. Records whose (text,
    /// formatted-time) pair matches an existing bubble are skipped, so
    /// re-absorbing an unchanged collection is a no-op.
    pub fn absorb(&mut self, records: &[MessageRecord]) -> usize {
        let mut added = 0;
        for record in records {
            let time = format_timestamp(record.date);
            if !self.contains(&record.message, &time) {
                self.bubbles.push(RenderedBubble {
                    text: record.message.clone(),
                    time,
                });
                added += 1;
            }
        }
        added
    }

    pub fn iter(&self) -> impl Iterator<Item = &RenderedBubble> {
        self.bubbles.iter()
    }

    pub fn len(&self) -> usize {
        self.bubbles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty()
    }
}
