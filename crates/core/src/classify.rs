use serde::{Deserialize, Serialize};
use std::fmt;

pub const VERY_POSITIVE_THRESHOLD: f32 = 0.5;
pub const POSITIVE_THRESHOLD: f32 = 0.1;
pub const NEGATIVE_THRESHOLD: f32 = -0.1;
pub const VERY_NEGATIVE_THRESHOLD: f32 = -0.5;

pub const SUBJECTIVE_THRESHOLD: f32 = 0.7;
pub const MIXED_THRESHOLD: f32 = 0.4;

/// Discrete sentiment classification derived from polarity alone.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Label {
    VeryPositive,
    Positive,
    Neutral,
    Negative,
    VeryNegative,
}

impl Label {
    pub fn emoji(&self) -> &'static str {
        match self {
            Label::VeryPositive => "😄",
            Label::Positive => "😊",
            Label::Neutral => "😐",
            Label::Negative => "😔",
            Label::VeryNegative => "😢",
        }
    }

    /// Accent color used by the presentation layer, as a CSS hex value.
    pub fn color_hex(&self) -> &'static str {
        match self {
            Label::VeryPositive => "#10b981",
            Label::Positive => "#34d399",
            Label::Neutral => "#f59e0b",
            Label::Negative => "#ef4444",
            Label::VeryNegative => "#dc2626",
        }
    }

    /// One-line Spanish reading of the classification.
    pub fn description(&self) -> &'static str {
        match self {
            Label::VeryPositive => "¡Excelente! Tu mensaje irradia felicidad y optimismo.",
            Label::Positive => "Tu mensaje tiene un tono positivo y agradable.",
            Label::Neutral => "Tu mensaje es neutral, sin emociones marcadas.",
            Label::Negative => "Tu mensaje tiene un tono negativo o de preocupación.",
            Label::VeryNegative => "Tu mensaje refleja emociones negativas muy fuertes.",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::VeryPositive => write!(f, "Muy Positivo"),
            Label::Positive => write!(f, "Positivo"),
            Label::Neutral => write!(f, "Neutral"),
            Label::Negative => write!(f, "Negativo"),
            Label::VeryNegative => write!(f, "Muy Negativo"),
        }
    }
}

/// Maps a polarity score to its label. Pure and total; the inequalities
/// are strict, so boundary values fall on the weaker side (0.5 is
/// Positive, not VeryPositive).
pub fn classify(polarity: f32) -> Label {
    if polarity > VERY_POSITIVE_THRESHOLD {
        Label::VeryPositive
    } else if polarity > POSITIVE_THRESHOLD {
        Label::Positive
    } else if polarity < VERY_NEGATIVE_THRESHOLD {
        Label::VeryNegative
    } else if polarity < NEGATIVE_THRESHOLD {
        Label::Negative
    } else {
        Label::Neutral
    }
}

/// How opinion-laden the text is, bucketed for display.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SubjectivityBand {
    Subjective,
    Mixed,
    Objective,
}

impl SubjectivityBand {
    pub fn description(&self) -> &'static str {
        match self {
            SubjectivityBand::Subjective => {
                "Tu mensaje es principalmente una opinión personal con juicios de valor."
            }
            SubjectivityBand::Mixed => {
                "Tu mensaje combina opiniones personales con algunos hechos."
            }
            SubjectivityBand::Objective => {
                "Tu mensaje está basado principalmente en hechos y datos."
            }
        }
    }
}

impl fmt::Display for SubjectivityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubjectivityBand::Subjective => write!(f, "Muy Subjetivo"),
            SubjectivityBand::Mixed => write!(f, "Mixto"),
            SubjectivityBand::Objective => write!(f, "Objetivo"),
        }
    }
}

pub fn subjectivity_band(subjectivity: f32) -> SubjectivityBand {
    if subjectivity > SUBJECTIVE_THRESHOLD {
        SubjectivityBand::Subjective
    } else if subjectivity > MIXED_THRESHOLD {
        SubjectivityBand::Mixed
    } else {
        SubjectivityBand::Objective
    }
}
