use crate::classify::Label;
use crate::pipeline::AnalysisResult;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Number of characters of the source text kept per entry.
pub const TRUNCATE_CHARS: usize = 100;

/// One remembered analysis.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub truncated_text: String,
    pub label: Label,
    pub polarity: f32,
}

impl HistoryEntry {
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            truncated_text: truncate_text(&result.source_text),
            label: result.label,
            polarity: result.polarity,
        }
    }
}

/// Keeps the first `TRUNCATE_CHARS` characters and marks the cut with
/// an ellipsis. The marker is appended even when nothing was cut, so
/// every stored entry reads the same way.
fn truncate_text(text: &str) -> String {
    let mut out: String = text.chars().take(TRUNCATE_CHARS).collect();
    out.push_str("...");
    out
}

/// Most-recent-first log of past analyses, bounded at `capacity`.
#[derive(Clone, Debug)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stores the newest entry at the front. Returns the evicted entry
    /// once the log is full.
    pub fn record(&mut self, result: &AnalysisResult) -> Option<HistoryEntry> {
        self.entries.push_front(HistoryEntry::from_result(result));
        if self.entries.len() > self.capacity {
            self.entries.pop_back()
        } else {
            None
        }
    }

    /// Newest entry first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}
