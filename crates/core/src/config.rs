use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_SOURCE_LANG: &str = "es";
pub const DEFAULT_TARGET_LANG: &str = "en";
pub const DEFAULT_SPEECH_LANG: &str = "es-ES";
pub const DEFAULT_HISTORY_CAPACITY: usize = 5;
pub const MIN_INPUT_CHARS: usize = 10;
pub const ENV_DEEPL_API_KEY: &str = "DEEPL_API_KEY";
pub const ENV_SPEECH_API_KEY: &str = "SPEECH_API_KEY";

/// BCP-47-ish language code ("es", "en", "es-ES"). Stored verbatim;
/// adapters map it to whatever their service expects.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LangCode(pub String);

impl LangCode {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, ConfigError> {
        let v = value.into();
        if v.trim().is_empty() {
            return Err(ConfigError::EmptyLangCode);
        }
        Ok(Self(v))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LangCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source/target pair handed to translators. Defaults to the app's
/// fixed Spanish-to-English direction.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguagePair {
    pub source: LangCode,
    pub target: LangCode,
}

impl LanguagePair {
    pub fn new(source: LangCode, target: LangCode) -> Self {
        Self { source, target }
    }

    pub fn spanish_to_english() -> Self {
        Self {
            source: LangCode(DEFAULT_SOURCE_LANG.to_owned()),
            target: LangCode(DEFAULT_TARGET_LANG.to_owned()),
        }
    }
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self::spanish_to_english()
    }
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, ConfigError> {
        let v = value.into();
        if v.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(v))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(**redacted**)")
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiKeys {
    pub deepl: Option<ApiKey>,
    pub speech: Option<ApiKey>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    pub languages: LanguagePair,
    pub speech_lang: LangCode,
    pub api_keys: ApiKeys,
    pub history_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            languages: LanguagePair::default(),
            speech_lang: LangCode(DEFAULT_SPEECH_LANG.to_owned()),
            api_keys: ApiKeys::default(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("language code must not be empty")]
    EmptyLangCode,
    #[error("api key must not be empty")]
    EmptyApiKey,
}

pub trait Env {
    fn var(&self, key: &str) -> Option<String>;
}

#[derive(Clone, Debug, Default)]
pub struct StdEnv;

impl Env for StdEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

#[derive(Clone, Debug, Default)]
pub struct MapEnv {
    vars: std::collections::BTreeMap<String, String>,
}

impl MapEnv {
    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_owned(), value.to_owned());
        self
    }
}

impl Env for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

pub fn resolve_api_key(
    cli_value: Option<String>,
    env_key: &str,
    env: &impl Env,
) -> Result<Option<ApiKey>, ConfigError> {
    match cli_value {
        Some(v) => Ok(Some(ApiKey::new(v)?)),
        None => match env.var(env_key) {
            Some(v) => Ok(Some(ApiKey::new(v)?)),
            None => Ok(None),
        },
    }
}

pub fn resolve_string_with_default(
    cli_value: Option<String>,
    env_key: &str,
    env: &impl Env,
    default: &str,
) -> String {
    match cli_value {
        Some(v) => v,
        None => env.var(env_key).unwrap_or_else(|| default.to_owned()),
    }
}
