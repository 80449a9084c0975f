use crate::{lang::Language, model::ModelError};
use thiserror::Error;

/// Every way a detection call or catalog lookup can fail.
///
/// A text that cannot be attributed to any candidate is not an error; it is
/// [`DetectionResult::NoMatch`](crate::DetectionResult::NoMatch).
#[derive(Debug, Error)]
pub enum DetectionError {
    #[error("no language carries the ISO code `{0}`")]
    UnrecognizedIsoCode(String),

    #[error("`{0}` does not name a supported language")]
    UnrecognizedLanguage(String),

    #[error("`{0}` is not a language selection strategy")]
    UnrecognizedStrategy(String),

    #[error("strategy `{strategy}` needs at least two distinct languages, got {count}")]
    InsufficientLanguages { strategy: &'static str, count: usize },

    #[error("minimum relative distance must lie in [0.0, 0.99], got {0}")]
    InvalidMinimumRelativeDistance(f64),

    #[error("failed to load the {language} model: {source}")]
    ModelLoad {
        language: Language,
        #[source]
        source: ModelError,
    },
}
