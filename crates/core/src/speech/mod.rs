mod dummy;
mod google;

use crate::config::LangCode;
use bytes::Bytes;
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};

pub use dummy::DummyTranscriber;
pub use google::{GoogleSpeechTranscriber, DEFAULT_SPEECH_API_KEY};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Transcript {
    pub text: String,
    pub confidence: Option<f32>,
}

#[derive(thiserror::Error, Debug)]
pub enum TranscribeError {
    #[error("no speech detected in audio")]
    NoSpeechDetected,

    #[error("speech service error: {0}")]
    Service(String),
}

/// Speech-to-text boundary. The core hands over encoded audio bytes and
/// a language code and gets text back; capture and encoding stay with
/// the caller.
pub trait SpeechTranscriber: Send + Sync {
    fn transcribe(
        &self,
        audio: Bytes,
        language: LangCode,
    ) -> BoxFuture<'_, Result<Transcript, TranscribeError>>;
}
