use crate::lang::Language;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One entry of a confidence distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceValue {
    pub language: Language,
    pub confidence: f64,
}

/// Outcome of one detection call.
///
/// Serialized form: `{"language":"English"}`,
/// `{"distribution":[{"language":"English","confidence":0.97},...]}` or
/// `"no_match"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionResult {
    Language(Language),
    /// Every candidate, confidences summing to 1, highest first.
    Distribution(Vec<ConfidenceValue>),
    NoMatch,
}

impl DetectionResult {
    /// The winner, or the head of a distribution.
    pub fn language(&self) -> Option<Language> {
        match self {
            DetectionResult::Language(language) => Some(*language),
            DetectionResult::Distribution(values) => values.first().map(|v| v.language),
            DetectionResult::NoMatch => None,
        }
    }

    pub fn distribution(&self) -> Option<&[ConfidenceValue]> {
        match self {
            DetectionResult::Distribution(values) => Some(values),
            _ => None,
        }
    }

    #[inline]
    pub fn is_no_match(&self) -> bool {
        matches!(self, DetectionResult::NoMatch)
    }

    /// Confidence assigned to `language`: its distribution entry, 1.0 for a
    /// sole winner, 0.0 otherwise.
    pub fn confidence_of(&self, language: Language) -> f64 {
        match self {
            DetectionResult::Language(winner) if *winner == language => 1.0,
            DetectionResult::Distribution(values) => values
                .iter()
                .find(|v| v.language == language)
                .map_or(0.0, |v| v.confidence),
            _ => 0.0,
        }
    }
}

/// Softmax over raw scores, highest first, ties in catalog order.
pub fn confidences(scores: &[(Language, f64)]) -> Vec<ConfidenceValue> {
    let max = scores
        .iter()
        .map(|&(_, s)| s)
        .fold(f64::NEG_INFINITY, f64::max);

    let mut values: Vec<ConfidenceValue> = scores
        .iter()
        .map(|&(language, score)| ConfidenceValue {
            language,
            confidence: (score - max).exp(),
        })
        .collect();
    let total: f64 = values.iter().map(|v| v.confidence).sum();
    for value in &mut values {
        value.confidence /= total;
    }

    sort_ranked(&mut values);
    values
}

/// Highest confidence first, ties in catalog order.
fn sort_ranked(values: &mut [ConfidenceValue]) {
    values.sort_by(|a, b| {
        b.confidence
            .total_cmp(&a.confidence)
            .then_with(|| a.language.cmp(&b.language))
    });
}

/// `(c0 - c1) / c0` over a ranked distribution; 1.0 with a single entry.
pub fn relative_distance(ranked: &[ConfidenceValue]) -> f64 {
    match ranked {
        [] => 0.0,
        [_] => 1.0,
        [first, second, ..] => (first.confidence - second.confidence) / first.confidence,
    }
}

/// Turn raw scores into a result.
///
/// A requested distribution is returned whatever the distance; otherwise the
/// top language wins only if it clears `minimum_relative_distance`.
pub fn rank(
    scores: &[(Language, f64)],
    minimum_relative_distance: f64,
    want_distribution: bool,
) -> DetectionResult {
    if scores.is_empty() {
        return DetectionResult::NoMatch;
    }
    let ranked = confidences(scores);
    if want_distribution {
        return DetectionResult::Distribution(ranked);
    }

    let distance = relative_distance(&ranked);
    if distance >= minimum_relative_distance {
        DetectionResult::Language(ranked[0].language)
    } else {
        debug!(
            "No match: {} leads {} by relative distance {:.4} < {}",
            ranked[0].language, ranked[1].language, distance, minimum_relative_distance
        );
        DetectionResult::NoMatch
    }
}

/// Add candidates that were never scored with confidence 0.0. Scored
/// confidences can underflow to 0.0 too, so the whole list is re-ranked.
pub(crate) fn append_unscored(result: &mut DetectionResult, unscored: &[Language]) {
    if let DetectionResult::Distribution(values) = result {
        values.extend(unscored.iter().map(|&language| ConfidenceValue {
            language,
            confidence: 0.0,
        }));
        sort_ranked(values);
    }
}
