use crate::config::LanguagePair;
use crate::translate::{TranslateError, Translation, Translator};
use futures::future::BoxFuture;
use futures::FutureExt;
use reqwest::Client;
use std::time::Duration;
use url::Url;

const ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Google's free web translation endpoint. Needs no API key; the
/// response is an undocumented nested-array format, so parsing is kept
/// in a separate function and tested against canned payloads.
#[derive(Clone)]
pub struct GoogleTranslator {
    client: Client,
}

impl GoogleTranslator {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for GoogleTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator for GoogleTranslator {
    fn translate(
        &self,
        text: String,
        languages: LanguagePair,
    ) -> BoxFuture<'_, Result<Translation, TranslateError>> {
        let this = self.clone();
        async move {
            // Build the URL; "dt=t" asks for the translation segments only
            let url = Url::parse_with_params(
                ENDPOINT,
                &[
                    ("client", "gtx"),
                    ("sl", languages.source.as_str()),
                    ("tl", languages.target.as_str()),
                    ("dt", "t"),
                    ("q", text.as_str()),
                ],
            )
            .map_err(|e| TranslateError::Api(format!("invalid endpoint url: {e}")))?;

            // Send the request
            let response = this.client.get(url).timeout(REQUEST_TIMEOUT).send().await?;

            // Check if the request was successful
            if !response.status().is_success() {
                let status = response.status();
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                return Err(TranslateError::Api(format!("HTTP {}: {}", status, error_text)));
            }

            let body = response.text().await?;
            parse_gtx_response(&body)
        }
        .boxed()
    }
}

/// The gtx payload is `[[ [translated, original, ...], ... ], _, detected_lang, ...]`;
/// the translated text is the concatenation of the first element of
/// every segment.
fn parse_gtx_response(body: &str) -> Result<Translation, TranslateError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| TranslateError::InvalidResponse(format!("not valid JSON: {e}")))?;

    let segments = value
        .get(0)
        .and_then(|v| v.as_array())
        .ok_or_else(|| TranslateError::InvalidResponse("missing segment list".to_owned()))?;

    let mut text = String::new();
    for segment in segments {
        if let Some(part) = segment.get(0).and_then(|v| v.as_str()) {
            text.push_str(part);
        }
    }

    if text.is_empty() {
        return Err(TranslateError::InvalidResponse(
            "no translated text in response".to_owned(),
        ));
    }

    let detected_source_lang = value.get(2).and_then(|v| v.as_str()).map(str::to_owned);

    Ok(Translation {
        text,
        detected_source_lang,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_segment() {
        let body = r#"[[["Hello world","Hola mundo",null,null,10]],null,"es"]"#;
        let t = parse_gtx_response(body).expect("parses");
        assert_eq!(t.text, "Hello world");
        assert_eq!(t.detected_source_lang.as_deref(), Some("es"));
    }

    #[test]
    fn concatenates_segments() {
        let body = r#"[[["I am happy ","Estoy feliz ",null,null],["today","hoy",null,null]],null,"es"]"#;
        let t = parse_gtx_response(body).expect("parses");
        assert_eq!(t.text, "I am happy today");
    }

    #[test]
    fn rejects_non_json() {
        let err = parse_gtx_response("<html>blocked</html>").unwrap_err();
        assert!(matches!(err, TranslateError::InvalidResponse(_)));
    }

    #[test]
    fn rejects_payload_without_segments() {
        let err = parse_gtx_response("{}").unwrap_err();
        assert!(matches!(err, TranslateError::InvalidResponse(_)));
    }

    #[test]
    fn rejects_empty_segment_list() {
        let err = parse_gtx_response(r#"[[],null,"es"]"#).unwrap_err();
        assert!(matches!(err, TranslateError::InvalidResponse(_)));
    }
}
