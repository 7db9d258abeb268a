use crate::config::LangCode;
use crate::speech::{SpeechTranscriber, TranscribeError, Transcript};
use bytes::Bytes;
use futures::future::BoxFuture;
use futures::FutureExt;

/// Transcriber that returns a canned transcript. Useful for wiring up
/// the pipeline without hitting the speech service.
#[derive(Clone)]
pub struct DummyTranscriber {
    text: String,
}

impl DummyTranscriber {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self { text: text.into() }
    }
}

impl SpeechTranscriber for DummyTranscriber {
    fn transcribe(
        &self,
        _audio: Bytes,
        _language: LangCode,
    ) -> BoxFuture<'_, Result<Transcript, TranscribeError>> {
        let text = self.text.clone();
        async move {
            if text.is_empty() {
                return Err(TranscribeError::NoSpeechDetected);
            }
            Ok(Transcript {
                text,
                confidence: None,
            })
        }
        .boxed()
    }
}
