use crate::classify::{classify, Label};
use crate::config::{AppConfig, LanguagePair, MIN_INPUT_CHARS};
use crate::score::{ScoreError, SentimentScorer};
use crate::translate::{TranslateError, Translator};
use serde::{Deserialize, Serialize};

/// Raw user input headed for analysis.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub source_text: String,
}

impl AnalysisRequest {
    pub fn new<S: Into<String>>(source_text: S) -> Self {
        Self {
            source_text: source_text.into(),
        }
    }
}

/// Outcome of one full analysis. Immutable once composed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    pub source_text: String,
    pub translated_text: String,
    pub polarity: f32,
    pub subjectivity: f32,
    pub label: Label,
}

impl AnalysisResult {
    /// Distance from neutral, in [0, 1].
    pub fn confidence(&self) -> f32 {
        self.polarity.abs()
    }

    /// Polarity remapped onto a 0..=100 scale for display gauges.
    pub fn polarity_percent(&self) -> u8 {
        ((self.polarity + 1.0) * 50.0).round().clamp(0.0, 100.0) as u8
    }

    /// Subjectivity on the same 0..=100 scale.
    pub fn subjectivity_percent(&self) -> u8 {
        (self.subjectivity * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("input text is empty")]
    Empty,
    #[error("input has {chars} characters, need at least {min}")]
    TooShort { chars: usize, min: usize },
}

#[derive(thiserror::Error, Debug)]
pub enum AnalyzeError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("translation failed: {0}")]
    Translation(#[from] TranslateError),
    #[error("scoring failed: {0}")]
    Scoring(#[from] ScoreError),
}

#[derive(Clone, Debug)]
pub struct PipelineConfig {
    pub languages: LanguagePair,
    pub min_input_chars: usize,
}

impl PipelineConfig {
    pub fn from_app(app: &AppConfig) -> Self {
        Self {
            languages: app.languages.clone(),
            min_input_chars: MIN_INPUT_CHARS,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            languages: LanguagePair::default(),
            min_input_chars: MIN_INPUT_CHARS,
        }
    }
}

/// Translate, score, classify. Holds no state between calls; callers
/// keep past results in a `Session` if they want history.
pub struct AnalysisPipeline<Tr, Sc> {
    pub translator: Tr,
    pub scorer: Sc,
    pub config: PipelineConfig,
}

impl<Tr, Sc> AnalysisPipeline<Tr, Sc>
where
    Tr: Translator,
    Sc: SentimentScorer,
{
    pub fn new(translator: Tr, scorer: Sc, config: PipelineConfig) -> Self {
        Self {
            translator,
            scorer,
            config,
        }
    }

    /// Runs one request through translate, score and classify. Each
    /// step waits for the previous one; the first failure ends the
    /// run and nothing downstream is invoked.
    pub async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResult, AnalyzeError> {
        let trimmed = request.source_text.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty.into());
        }
        let chars = trimmed.chars().count();
        if chars < self.config.min_input_chars {
            return Err(ValidationError::TooShort {
                chars,
                min: self.config.min_input_chars,
            }
            .into());
        }

        tracing::debug!(chars, "analyzing input");

        let translation = self
            .translator
            .translate(request.source_text.clone(), self.config.languages.clone())
            .await?;

        let sentiment = self.scorer.score(translation.text.clone()).await?;
        let label = classify(sentiment.polarity);

        tracing::info!(
            polarity = sentiment.polarity,
            subjectivity = sentiment.subjectivity,
            label = %label,
            "analysis complete"
        );

        Ok(AnalysisResult {
            source_text: request.source_text,
            translated_text: translation.text,
            polarity: sentiment.polarity,
            subjectivity: sentiment.subjectivity,
            label,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::Sentiment;
    use crate::translate::{DummyTranslator, Translation};
    use futures::future::BoxFuture;
    use futures::FutureExt;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone)]
    struct CountingTranslator {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    impl CountingTranslator {
        fn passthrough() -> Self {
            Self {
                calls: Arc::new(AtomicUsize::new(0)),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                calls: Arc::new(AtomicUsize::new(0)),
                fail: true,
            }
        }
    }

    impl Translator for CountingTranslator {
        fn translate(
            &self,
            text: String,
            _languages: LanguagePair,
        ) -> BoxFuture<'_, Result<Translation, TranslateError>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let fail = self.fail;
            async move {
                if fail {
                    Err(TranslateError::Api("quota exceeded".to_owned()))
                } else {
                    Ok(Translation {
                        text,
                        detected_source_lang: None,
                    })
                }
            }
            .boxed()
        }
    }

    #[derive(Clone)]
    struct FixedScorer {
        calls: Arc<AtomicUsize>,
        polarity: f32,
        subjectivity: f32,
    }

    impl FixedScorer {
        fn new(polarity: f32, subjectivity: f32) -> Self {
            Self {
                calls: Arc::new(AtomicUsize::new(0)),
                polarity,
                subjectivity,
            }
        }
    }

    impl SentimentScorer for FixedScorer {
        fn score(&self, _text: String) -> BoxFuture<'_, Result<Sentiment, ScoreError>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let sentiment = Sentiment {
                polarity: self.polarity,
                subjectivity: self.subjectivity,
            };
            async move { Ok(sentiment) }.boxed()
        }
    }

    fn pipeline(
        translator: CountingTranslator,
        scorer: FixedScorer,
    ) -> AnalysisPipeline<CountingTranslator, FixedScorer> {
        AnalysisPipeline::new(translator, scorer, PipelineConfig::default())
    }

    #[tokio::test]
    async fn empty_input_never_reaches_the_collaborators() {
        let translator = CountingTranslator::passthrough();
        let scorer = FixedScorer::new(0.0, 0.0);
        let p = pipeline(translator.clone(), scorer.clone());

        for input in ["", "   \n\t  "] {
            let err = p.analyze(AnalysisRequest::new(input)).await.unwrap_err();
            assert!(matches!(
                err,
                AnalyzeError::Validation(ValidationError::Empty)
            ));
        }
        assert_eq!(translator.calls.load(Ordering::SeqCst), 0);
        assert_eq!(scorer.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn short_input_is_rejected_with_counts() {
        let translator = CountingTranslator::passthrough();
        let scorer = FixedScorer::new(0.0, 0.0);
        let p = pipeline(translator.clone(), scorer.clone());

        let err = p
            .analyze(AnalysisRequest::new("hola hola"))
            .await
            .unwrap_err();
        match err {
            AnalyzeError::Validation(ValidationError::TooShort { chars, min }) => {
                assert_eq!(chars, 9);
                assert_eq!(min, 10);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(translator.calls.load(Ordering::SeqCst), 0);
        assert_eq!(scorer.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn ten_characters_is_long_enough() {
        let translator = CountingTranslator::passthrough();
        let scorer = FixedScorer::new(0.0, 0.0);
        let p = pipeline(translator.clone(), scorer.clone());

        p.analyze(AnalysisRequest::new("hola mundo"))
            .await
            .expect("analyzes");
        assert_eq!(translator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn translator_failure_stops_the_run() {
        let translator = CountingTranslator::failing();
        let scorer = FixedScorer::new(0.8, 0.9);
        let p = pipeline(translator.clone(), scorer.clone());

        let err = p
            .analyze(AnalysisRequest::new("un texto suficientemente largo"))
            .await
            .unwrap_err();
        assert!(matches!(err, AnalyzeError::Translation(_)));
        assert_eq!(translator.calls.load(Ordering::SeqCst), 1);
        assert_eq!(scorer.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn stubbed_round_trip_composes_the_result() {
        let p = AnalysisPipeline::new(
            DummyTranslator::default(),
            FixedScorer::new(0.8, 0.9),
            PipelineConfig::default(),
        );

        let result = p
            .analyze(AnalysisRequest::new("texto de prueba"))
            .await
            .expect("analyzes");
        assert_eq!(result.source_text, "texto de prueba");
        assert_eq!(result.translated_text, "texto de prueba");
        assert!((result.polarity - 0.8).abs() < f32::EPSILON);
        assert!((result.subjectivity - 0.9).abs() < f32::EPSILON);
        assert_eq!(result.label, Label::VeryPositive);
    }

    #[test]
    fn display_helpers_derive_from_the_scores() {
        let result = AnalysisResult {
            source_text: String::new(),
            translated_text: String::new(),
            polarity: 0.8,
            subjectivity: 0.35,
            label: Label::VeryPositive,
        };
        assert!((result.confidence() - 0.8).abs() < f32::EPSILON);
        assert_eq!(result.polarity_percent(), 90);
        assert_eq!(result.subjectivity_percent(), 35);

        let neutral = AnalysisResult {
            polarity: 0.0,
            ..result.clone()
        };
        assert_eq!(neutral.polarity_percent(), 50);

        let negative = AnalysisResult {
            polarity: -1.0,
            ..result
        };
        assert_eq!(negative.polarity_percent(), 0);
    }
}
