//! Change notices for puzzle viewers.
//!
//! Every change to a puzzle is announced on `puzzles.<id>`. The payload only
//! tells subscribers how much to redraw; they re-read the puzzle themselves.

use std::fmt;
use std::sync::mpsc::Sender;

use log::debug;

pub const TOPIC_PREFIX: &str = "puzzles.";

pub fn topic_for(puzzle_id: &str) -> String {
    format!("{}{}", TOPIC_PREFIX, puzzle_id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// Blocks or dimensions changed; numbering and clues must be recomputed.
    Structural,
    /// Letters, cursors or clue text changed.
    Value,
}

impl ChangeKind {
    pub fn payload(&self) -> &'static str {
        match self {
            ChangeKind::Structural => "structural",
            ChangeKind::Value => "signal",
        }
    }

    pub fn from_payload(payload: &str) -> Option<Self> {
        match payload {
            "structural" => Some(ChangeKind::Structural),
            "signal" => Some(ChangeKind::Value),
            _ => None,
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.payload())
    }
}

/// Outbound pub/sub seam. Implementations must not block the caller.
pub trait Notifier: Send + Sync {
    fn publish(&self, topic: &str, payload: &str);
}

/// Drops every notice. Used when no message bus is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn publish(&self, topic: &str, _payload: &str) {
        debug!("publish skipped (no notifier): {}", topic);
    }
}

/// A published notice, as delivered by [`ChannelNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub topic: String,
    pub payload: String,
}

impl Notice {
    pub fn kind(&self) -> Option<ChangeKind> {
        ChangeKind::from_payload(&self.payload)
    }
}

/// Forwards notices into an mpsc channel for an in-process fan-out thread.
#[derive(Clone, Default)]
pub struct ChannelNotifier {
    /// None until a receiver is attached.
    tx: Option<Sender<Notice>>,
}

impl ChannelNotifier {
    /// A notifier with no listener attached.
    pub fn new() -> Self {
        Self { tx: None }
    }

    pub fn with_channel(tx: Sender<Notice>) -> Self {
        Self { tx: Some(tx) }
    }

    pub fn has_listeners(&self) -> bool {
        self.tx.is_some()
    }
}

impl Notifier for ChannelNotifier {
    fn publish(&self, topic: &str, payload: &str) {
        if let Some(tx) = &self.tx {
            // A dropped receiver just means nobody is watching any more.
            let _ = tx.send(Notice {
                topic: topic.to_string(),
                payload: payload.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_topic_and_payloads() {
        assert_eq!(topic_for("abc"), "puzzles.abc");
        assert_eq!(ChangeKind::Structural.payload(), "structural");
        assert_eq!(ChangeKind::Value.payload(), "signal");
        assert_eq!(ChangeKind::from_payload("signal"), Some(ChangeKind::Value));
        assert_eq!(ChangeKind::from_payload("other"), None);
    }

    #[test]
    fn test_channel_notifier_delivers() {
        let (tx, rx) = mpsc::channel();
        let notifier = ChannelNotifier::with_channel(tx);
        assert!(notifier.has_listeners());

        notifier.publish("puzzles.p1", "structural");
        let notice = rx.try_recv().unwrap();
        assert_eq!(notice.topic, "puzzles.p1");
        assert_eq!(notice.kind(), Some(ChangeKind::Structural));
    }

    #[test]
    fn test_disconnected_notifiers_are_silent() {
        let notifier = ChannelNotifier::new();
        assert!(!notifier.has_listeners());
        notifier.publish("puzzles.p1", "signal");

        let (tx, rx) = mpsc::channel();
        drop(rx);
        ChannelNotifier::with_channel(tx).publish("puzzles.p1", "signal");

        NullNotifier.publish("puzzles.p1", "signal");
    }
}
