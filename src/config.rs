//! Detection configuration.
//!
//! [`DetectionConfig`] is the typed value the detector consumes, built with
//! [`DetectionConfigBuilder`]. [`DetectionOptions`] is the loosely typed
//! shape a calling layer deserializes from JSON and resolves with
//! [`DetectionOptions::to_config`].

use crate::{
    error::DetectionError,
    lang::{Language, Script},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which catalog languages are candidates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Strategy {
    #[default]
    AllLanguages,
    AllSpokenLanguages,
    AllWithScript(Script),
    WithLanguages(Vec<Language>),
    WithoutLanguages(Vec<Language>),
}

impl Strategy {
    pub const ALL_LANGUAGES: &'static str = "all_languages";
    pub const ALL_SPOKEN_LANGUAGES: &'static str = "all_spoken_languages";
    pub const WITH_LANGUAGES: &'static str = "with_languages";
    pub const WITHOUT_LANGUAGES: &'static str = "without_languages";

    /// Parse a strategy string. `languages` is only resolved for the two
    /// explicit-list strategies; shortcut strategies ignore it entirely.
    pub fn parse<S: AsRef<str>>(name: &str, languages: &[S]) -> Result<Self, DetectionError> {
        let key = name.trim().to_ascii_lowercase();
        let strategy = match key.as_str() {
            Self::ALL_LANGUAGES => Strategy::AllLanguages,
            Self::ALL_SPOKEN_LANGUAGES => Strategy::AllSpokenLanguages,
            Self::WITH_LANGUAGES => Strategy::WithLanguages(resolve_languages(languages)?),
            Self::WITHOUT_LANGUAGES => Strategy::WithoutLanguages(resolve_languages(languages)?),
            other => {
                let script = other
                    .strip_prefix("all_languages_with_")
                    .and_then(|rest| rest.strip_suffix("_script"))
                    .and_then(Script::from_name)
                    .ok_or_else(|| DetectionError::UnrecognizedStrategy(name.to_string()))?;
                Strategy::AllWithScript(script)
            }
        };
        Ok(strategy)
    }

    /// Strategy family, without the script or language payload.
    pub fn kind(&self) -> &'static str {
        match self {
            Strategy::AllLanguages => Self::ALL_LANGUAGES,
            Strategy::AllSpokenLanguages => Self::ALL_SPOKEN_LANGUAGES,
            Strategy::AllWithScript(_) => "all_languages_with_script",
            Strategy::WithLanguages(_) => Self::WITH_LANGUAGES,
            Strategy::WithoutLanguages(_) => Self::WITHOUT_LANGUAGES,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::AllWithScript(script) => write!(f, "all_languages_with_{script}_script"),
            other => f.write_str(other.kind()),
        }
    }
}

fn resolve_languages<S: AsRef<str>>(languages: &[S]) -> Result<Vec<Language>, DetectionError> {
    languages.iter().map(|id| id.as_ref().parse()).collect()
}

/// Validated detection settings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetectionConfig {
    strategy: Strategy,
    minimum_relative_distance: f64,
    return_distribution: bool,
    low_accuracy_mode: bool,
}

impl DetectionConfig {
    pub const MAX_RELATIVE_DISTANCE: f64 = 0.99;

    pub fn builder() -> DetectionConfigBuilder {
        DetectionConfigBuilder::default()
    }

    #[inline]
    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    #[inline]
    pub fn minimum_relative_distance(&self) -> f64 {
        self.minimum_relative_distance
    }

    #[inline]
    pub fn return_distribution(&self) -> bool {
        self.return_distribution
    }

    #[inline]
    pub fn low_accuracy_mode(&self) -> bool {
        self.low_accuracy_mode
    }

    /// Same settings, always asking for the full distribution.
    pub(crate) fn with_distribution(&self) -> Self {
        Self {
            return_distribution: true,
            ..self.clone()
        }
    }

    pub(crate) fn validate(&self) -> Result<(), DetectionError> {
        let d = self.minimum_relative_distance;
        if !(0.0..=Self::MAX_RELATIVE_DISTANCE).contains(&d) {
            return Err(DetectionError::InvalidMinimumRelativeDistance(d));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct DetectionConfigBuilder {
    config: DetectionConfig,
}

impl DetectionConfigBuilder {
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    pub fn all_languages(self) -> Self {
        self.strategy(Strategy::AllLanguages)
    }

    pub fn all_spoken_languages(self) -> Self {
        self.strategy(Strategy::AllSpokenLanguages)
    }

    pub fn all_with_script(self, script: Script) -> Self {
        self.strategy(Strategy::AllWithScript(script))
    }

    pub fn with_languages(self, languages: impl IntoIterator<Item = Language>) -> Self {
        self.strategy(Strategy::WithLanguages(languages.into_iter().collect()))
    }

    pub fn without_languages(self, languages: impl IntoIterator<Item = Language>) -> Self {
        self.strategy(Strategy::WithoutLanguages(languages.into_iter().collect()))
    }

    /// Required gap between the top two confidences, relative to the top one.
    pub fn minimum_relative_distance(mut self, distance: f64) -> Self {
        self.config.minimum_relative_distance = distance;
        self
    }

    pub fn return_distribution(mut self, yes: bool) -> Self {
        self.config.return_distribution = yes;
        self
    }

    /// Score trigrams only. Faster and smaller, less reliable on short text.
    pub fn low_accuracy_mode(mut self, yes: bool) -> Self {
        self.config.low_accuracy_mode = yes;
        self
    }

    pub fn build(self) -> Result<DetectionConfig, DetectionError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Detection options as a calling layer passes them.
///
/// ```json
/// {"strategy": "with_languages", "languages": ["en", "German", "fra"],
///  "minimum_relative_distance": 0.1, "return_distribution": true}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DetectionOptions {
    pub strategy: String,
    pub languages: Vec<String>,
    pub minimum_relative_distance: f64,
    pub return_distribution: bool,
    pub low_accuracy_mode: bool,
}

impl Default for DetectionOptions {
    fn default() -> Self {
        Self {
            strategy: Strategy::ALL_LANGUAGES.to_string(),
            languages: Vec::new(),
            minimum_relative_distance: 0.0,
            return_distribution: false,
            low_accuracy_mode: false,
        }
    }
}

impl DetectionOptions {
    pub fn to_config(&self) -> Result<DetectionConfig, DetectionError> {
        DetectionConfig::builder()
            .strategy(Strategy::parse(&self.strategy, &self.languages)?)
            .minimum_relative_distance(self.minimum_relative_distance)
            .return_distribution(self.return_distribution)
            .low_accuracy_mode(self.low_accuracy_mode)
            .build()
    }
}
