mod lexicon;

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};

pub use lexicon::LexiconScorer;

/// Sentiment of a piece of English text: polarity in [-1, 1]
/// (negative to positive valence) and subjectivity in [0, 1]
/// (factual to opinion-laden).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Sentiment {
    pub polarity: f32,
    pub subjectivity: f32,
}

#[derive(thiserror::Error, Debug)]
pub enum ScoreError {
    #[error("sentiment model unavailable: {0}")]
    Unavailable(String),
}

pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: String) -> BoxFuture<'_, Result<Sentiment, ScoreError>>;
}
