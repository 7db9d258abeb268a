use crate::config::LanguagePair;
use crate::translate::{TranslateError, Translation, Translator};
use futures::future::BoxFuture;
use futures::FutureExt;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const FREE_ENDPOINT: &str = "https://api-free.deepl.com/v2/translate";
const PRO_ENDPOINT: &str = "https://api.deepl.com/v2/translate";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct DeepLTranslator {
    client: Client,
    api_key: String,
}

impl DeepLTranslator {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }
}

#[derive(Serialize)]
struct DeepLRequest {
    text: Vec<String>,
    target_lang: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_lang: Option<String>,
}

#[derive(Deserialize)]
struct DeepLResponse {
    translations: Vec<DeepLTranslation>,
}

#[derive(Deserialize)]
struct DeepLTranslation {
    detected_source_language: String,
    text: String,
}

// DeepL takes uppercase codes, except for a handful of regional target
// variants that keep their own casing.
fn map_target_lang(code: &str) -> String {
    match code.to_lowercase().as_str() {
        "pt-br" => "pt-BR".to_string(),
        "pt-pt" => "pt-PT".to_string(),
        "en-gb" => "en-GB".to_string(),
        "en-us" => "en-US".to_string(),
        other => other.to_uppercase(),
    }
}

impl Translator for DeepLTranslator {
    fn translate(
        &self,
        text: String,
        languages: LanguagePair,
    ) -> BoxFuture<'_, Result<Translation, TranslateError>> {
        let this = self.clone();
        async move {
            // Prepare the request; the source language is passed explicitly
            // rather than left to detection
            let request = DeepLRequest {
                text: vec![text],
                target_lang: map_target_lang(languages.target.as_str()),
                source_lang: Some(languages.source.as_str().to_uppercase()),
            };

            // Free-tier keys are suffixed ":fx" and use their own host
            let url = if this.api_key.ends_with(":fx") {
                FREE_ENDPOINT
            } else {
                PRO_ENDPOINT
            };

            // Send the request
            let response = this
                .client
                .post(url)
                .header("Authorization", format!("DeepL-Auth-Key {}", this.api_key))
                .json(&request)
                .timeout(REQUEST_TIMEOUT)
                .send()
                .await?;

            // Check if the request was successful
            if !response.status().is_success() {
                let status = response.status();
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                return Err(TranslateError::Api(format!("HTTP {}: {}", status, error_text)));
            }

            // Parse the response
            let deepl_response: DeepLResponse = response
                .json()
                .await
                .map_err(|e| TranslateError::InvalidResponse(format!("failed to parse JSON: {e}")))?;

            // Extract the translation
            let translation = deepl_response
                .translations
                .into_iter()
                .next()
                .ok_or_else(|| {
                    TranslateError::InvalidResponse("no translations in response".to_string())
                })?;

            Ok(Translation {
                text: translation.text,
                detected_source_lang: Some(translation.detected_source_language),
            })
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_lang_mapping() {
        assert_eq!(map_target_lang("en"), "EN");
        assert_eq!(map_target_lang("es"), "ES");
        assert_eq!(map_target_lang("pt-br"), "pt-BR");
        assert_eq!(map_target_lang("EN-GB"), "en-GB");
    }
}
