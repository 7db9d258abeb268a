use crate::history::{History, HistoryEntry};
use crate::pipeline::AnalysisResult;

/// Per-user interactive state. The pipeline itself is stateless; the
/// presentation layer keeps one of these alive between interactions
/// and records results into it.
#[derive(Clone, Debug)]
pub struct Session {
    input_text: String,
    history: History,
}

impl Session {
    pub fn new(history_capacity: usize) -> Self {
        Self {
            input_text: String::new(),
            history: History::new(history_capacity),
        }
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn set_input_text<S: Into<String>>(&mut self, text: S) {
        self.input_text = text.into();
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn record(&mut self, result: &AnalysisResult) -> Option<HistoryEntry> {
        self.history.record(result)
    }
}
