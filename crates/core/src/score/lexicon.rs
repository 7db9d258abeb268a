//! Lexicon-based sentiment scoring for English text.
//!
//! Each lexicon entry carries a polarity and a subjectivity. A negator
//! directly before a scored word multiplies its polarity by -0.5; an
//! intensifier scales it by the intensifier's factor ("not very good"
//! applies both). The document score is the mean over all matched
//! assessments, so text with no scored words comes out (0.0, 0.0).

use crate::score::{ScoreError, Sentiment, SentimentScorer};
use futures::future::BoxFuture;
use futures::FutureExt;
use std::collections::HashMap;

const NEGATION_FACTOR: f32 = -0.5;

const NEGATORS: &[&str] = &["not", "no", "never", "neither", "nor", "cannot"];

const INTENSIFIERS: &[(&str, f32)] = &[
    ("absolutely", 1.5),
    ("barely", 0.6),
    ("completely", 1.4),
    ("extremely", 1.5),
    ("hardly", 0.6),
    ("incredibly", 1.5),
    ("quite", 1.1),
    ("rather", 1.1),
    ("really", 1.3),
    ("slightly", 0.8),
    ("somewhat", 0.9),
    ("super", 1.4),
    ("too", 1.2),
    ("totally", 1.4),
    ("very", 1.3),
];

// (word, polarity, subjectivity)
const LEXICON: &[(&str, f32, f32)] = &[
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("brilliant", 0.9, 0.9),
    ("calm", 0.3, 0.5),
    ("cheerful", 0.8, 1.0),
    ("comfortable", 0.4, 0.6),
    ("delicious", 1.0, 1.0),
    ("delighted", 0.9, 1.0),
    ("enjoy", 0.4, 0.5),
    ("enjoyed", 0.4, 0.5),
    ("excellent", 1.0, 1.0),
    ("excited", 0.5, 0.9),
    ("exciting", 0.45, 0.8),
    ("fantastic", 0.4, 0.9),
    ("fun", 0.3, 0.2),
    ("glad", 0.5, 1.0),
    ("good", 0.7, 0.6),
    ("grateful", 0.6, 0.8),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("helpful", 0.5, 0.6),
    ("hopeful", 0.5, 0.8),
    ("impressive", 0.7, 0.9),
    ("incredible", 0.9, 0.9),
    ("interesting", 0.5, 1.0),
    ("joyful", 0.8, 1.0),
    ("kind", 0.6, 0.9),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("lovely", 0.7, 0.9),
    ("marvelous", 1.0, 1.0),
    ("motivated", 0.4, 0.6),
    ("nice", 0.6, 1.0),
    ("optimistic", 0.6, 0.8),
    ("outstanding", 0.9, 0.9),
    ("perfect", 1.0, 1.0),
    ("pleasant", 0.7, 0.8),
    ("positive", 0.3, 0.5),
    ("proud", 0.8, 0.65),
    ("relaxed", 0.4, 0.6),
    ("remarkable", 0.75, 0.75),
    ("satisfied", 0.5, 0.7),
    ("spectacular", 0.9, 0.9),
    ("successful", 0.6, 0.7),
    ("superb", 1.0, 1.0),
    ("thankful", 0.6, 0.8),
    ("wonderful", 1.0, 1.0),
    ("afraid", -0.6, 1.0),
    ("angry", -0.5, 1.0),
    ("annoying", -0.5, 0.8),
    ("anxious", -0.4, 0.9),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.67),
    ("boring", -1.0, 1.0),
    ("broken", -0.4, 0.5),
    ("cruel", -0.8, 0.9),
    ("depressed", -0.7, 1.0),
    ("difficult", -0.5, 1.0),
    ("disappointed", -0.75, 0.75),
    ("disappointing", -0.6, 0.7),
    ("disaster", -0.8, 0.6),
    ("disgusting", -0.8, 1.0),
    ("dreadful", -1.0, 1.0),
    ("failed", -0.4, 0.5),
    ("failure", -0.6, 0.7),
    ("fear", -0.5, 0.8),
    ("frustrated", -0.6, 0.9),
    ("frustrating", -0.5, 0.9),
    ("gloomy", -0.6, 0.9),
    ("hate", -0.8, 0.9),
    ("horrible", -1.0, 1.0),
    ("hurt", -0.5, 0.7),
    ("lonely", -0.6, 0.9),
    ("lost", -0.3, 0.5),
    ("miserable", -1.0, 1.0),
    ("negative", -0.3, 0.5),
    ("painful", -0.7, 0.9),
    ("pessimistic", -0.5, 0.8),
    ("poor", -0.4, 0.6),
    ("sad", -0.5, 1.0),
    ("scared", -0.6, 1.0),
    ("sick", -0.7, 0.9),
    ("stressful", -0.6, 0.8),
    ("stupid", -0.8, 0.9),
    ("terrible", -1.0, 1.0),
    ("tired", -0.3, 0.6),
    ("ugly", -0.7, 1.0),
    ("unfair", -0.5, 0.8),
    ("unhappy", -0.6, 1.0),
    ("upset", -0.5, 0.9),
    ("useless", -0.6, 0.7),
    ("worried", -0.3, 1.0),
    ("worse", -0.6, 0.8),
    ("worst", -1.0, 1.0),
    ("wrong", -0.5, 0.5),
];

pub struct LexiconScorer {
    entries: HashMap<&'static str, (f32, f32)>,
    intensifiers: HashMap<&'static str, f32>,
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self {
            entries: LEXICON.iter().map(|&(w, p, s)| (w, (p, s))).collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        }
    }

    /// Scores a text synchronously. Exposed for direct use; the trait
    /// method wraps it.
    pub fn assess(&self, text: &str) -> Sentiment {
        let tokens: Vec<String> = text.split_whitespace().map(normalize_token).collect();

        let mut polarity_sum = 0.0f32;
        let mut subjectivity_sum = 0.0f32;
        let mut matched = 0usize;

        for (i, token) in tokens.iter().enumerate() {
            let Some(&(base_polarity, subjectivity)) = self.entries.get(token.as_str()) else {
                continue;
            };

            let mut polarity = base_polarity;
            let prev = i.checked_sub(1).map(|j| tokens[j].as_str());
            let prev2 = i.checked_sub(2).map(|j| tokens[j].as_str());

            if let Some(p) = prev {
                if let Some(&factor) = self.intensifiers.get(p) {
                    polarity *= factor;
                    if prev2.is_some_and(is_negator) {
                        polarity *= NEGATION_FACTOR;
                    }
                } else if is_negator(p) {
                    polarity *= NEGATION_FACTOR;
                }
            }

            polarity_sum += polarity.clamp(-1.0, 1.0);
            subjectivity_sum += subjectivity;
            matched += 1;
        }

        if matched == 0 {
            return Sentiment {
                polarity: 0.0,
                subjectivity: 0.0,
            };
        }

        let n = matched as f32;
        Sentiment {
            polarity: (polarity_sum / n).clamp(-1.0, 1.0),
            subjectivity: (subjectivity_sum / n).clamp(0.0, 1.0),
        }
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: String) -> BoxFuture<'_, Result<Sentiment, ScoreError>> {
        async move { Ok(self.assess(&text)) }.boxed()
    }
}

fn normalize_token(raw: &str) -> String {
    raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
        .to_lowercase()
}

fn is_negator(token: &str) -> bool {
    NEGATORS.contains(&token) || token.ends_with("n't")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_text_scores_positive() {
        let scorer = LexiconScorer::new();
        let s = scorer.assess("What a wonderful day, the results were excellent");
        assert!(s.polarity > 0.5, "polarity was {}", s.polarity);
        assert!(s.subjectivity > 0.5);
    }

    #[test]
    fn negative_text_scores_negative() {
        let scorer = LexiconScorer::new();
        let s = scorer.assess("This was a terrible and disappointing failure");
        assert!(s.polarity < -0.5, "polarity was {}", s.polarity);
    }

    #[test]
    fn unscored_words_come_out_neutral() {
        let scorer = LexiconScorer::new();
        let s = scorer.assess("The seminar began at nine with fifty participants");
        assert_eq!(s.polarity, 0.0);
        assert_eq!(s.subjectivity, 0.0);
    }

    #[test]
    fn empty_text_is_neutral() {
        let scorer = LexiconScorer::new();
        let s = scorer.assess("");
        assert_eq!(s.polarity, 0.0);
        assert_eq!(s.subjectivity, 0.0);
    }

    #[test]
    fn negation_flips_and_damps() {
        let scorer = LexiconScorer::new();
        let plain = scorer.assess("the food was good");
        let negated = scorer.assess("the food was not good");
        assert!(plain.polarity > 0.0);
        assert!(negated.polarity < 0.0);
        assert!(negated.polarity.abs() < plain.polarity.abs());
    }

    #[test]
    fn contraction_counts_as_negator() {
        let scorer = LexiconScorer::new();
        let s = scorer.assess("this isn't good");
        assert!(s.polarity < 0.0, "polarity was {}", s.polarity);
    }

    #[test]
    fn intensifier_scales_polarity() {
        let scorer = LexiconScorer::new();
        let plain = scorer.assess("a good idea");
        let boosted = scorer.assess("a very good idea");
        assert!(boosted.polarity > plain.polarity);
    }

    #[test]
    fn negated_intensifier_applies_both() {
        let scorer = LexiconScorer::new();
        let s = scorer.assess("not very good");
        // 0.7 * 1.3 * -0.5
        assert!(s.polarity < 0.0);
        assert!((s.polarity + 0.455).abs() < 1e-4, "polarity was {}", s.polarity);
    }

    #[test]
    fn polarity_stays_clamped() {
        let scorer = LexiconScorer::new();
        let s = scorer.assess("extremely excellent and absolutely wonderful");
        assert!(s.polarity <= 1.0);
        assert!(s.subjectivity <= 1.0);
    }

    #[test]
    fn punctuation_is_stripped() {
        let scorer = LexiconScorer::new();
        let s = scorer.assess("Excellent!!!");
        assert!(s.polarity > 0.5);
    }

    #[tokio::test]
    async fn trait_method_matches_assess() {
        let scorer = LexiconScorer::new();
        let direct = scorer.assess("a happy day");
        let via_trait = scorer.score("a happy day".to_owned()).await.unwrap();
        assert_eq!(direct, via_trait);
    }
}
