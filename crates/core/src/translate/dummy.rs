use crate::config::LanguagePair;
use crate::translate::{TranslateError, Translation, Translator};
use futures::future::BoxFuture;
use futures::FutureExt;

/// Passthrough translator for tests and offline runs: the input text
/// comes back unchanged, with the requested source reported as detected.
#[derive(Clone)]
pub struct DummyTranslator;

impl DummyTranslator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DummyTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator for DummyTranslator {
    fn translate(
        &self,
        text: String,
        languages: LanguagePair,
    ) -> BoxFuture<'_, Result<Translation, TranslateError>> {
        async move {
            Ok(Translation {
                text,
                detected_source_lang: Some(languages.source.as_str().to_owned()),
            })
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn passes_text_through_unchanged() {
        let translator = DummyTranslator::new();
        let t = translator
            .translate("texto de prueba".to_owned(), LanguagePair::default())
            .await
            .expect("never fails");
        assert_eq!(t.text, "texto de prueba");
        assert_eq!(t.detected_source_lang.as_deref(), Some("es"));
    }
}
