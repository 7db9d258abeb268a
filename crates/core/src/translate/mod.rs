mod deepl;
mod dummy;
mod google;

use crate::config::LanguagePair;
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};

pub use deepl::DeepLTranslator;
pub use dummy::DummyTranslator;
pub use google::GoogleTranslator;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    pub detected_source_lang: Option<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum TranslateError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("translation api error: {0}")]
    Api(String),

    #[error("invalid translation response: {0}")]
    InvalidResponse(String),
}

pub trait Translator: Send + Sync {
    fn translate(
        &self,
        text: String,
        languages: LanguagePair,
    ) -> BoxFuture<'_, Result<Translation, TranslateError>>;
}
