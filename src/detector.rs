use crate::{
    candidates::CandidateSet,
    config::{DetectionConfig, DetectionOptions},
    error::DetectionError,
    lang::{Language, all_languages},
    model::{ModelSource, ModelStore},
    ranker::{ConfidenceValue, DetectionResult, append_unscored, rank},
    scorer::Scorer,
    text::PreparedText,
};
use std::{sync::Arc, time::Instant};
use tracing::{debug, info};

/// Entry point for detection calls. Cheap to clone; clones share one store.
#[derive(Debug, Clone)]
pub struct Detector {
    store: Arc<ModelStore>,
}

impl Default for Detector {
    /// Detector over the process-wide [`ModelStore::global`].
    fn default() -> Self {
        Self::new(ModelStore::global())
    }
}

impl Detector {
    pub fn new(store: Arc<ModelStore>) -> Self {
        Self { store }
    }

    /// Detector with a private store reading from `source`.
    pub fn with_source(source: impl ModelSource + 'static) -> Self {
        Self::new(Arc::new(ModelStore::new(source)))
    }

    #[inline]
    pub fn store(&self) -> &ModelStore {
        &self.store
    }

    /// Load every model up front.
    pub fn initialize(&self) -> Result<(), DetectionError> {
        let started = Instant::now();
        self.store.warm_up_all()?;
        info!(
            "Initialized {} language models in {:?}",
            all_languages().len(),
            started.elapsed()
        );
        Ok(())
    }

    /// Load only the models `config` can select.
    pub fn warm_up(&self, config: &DetectionConfig) -> Result<(), DetectionError> {
        let candidates = CandidateSet::build(config.strategy())?;
        self.store.warm_up(&candidates)
    }

    /// Detect the language of `text` among the candidates `config` selects.
    ///
    /// `NoMatch` comes from text with no letters, from a top language that
    /// misses `minimum_relative_distance`, or, even at a distance of 0.0, from
    /// text whose letters belong to no candidate's script: Cyrillic text among
    /// English, German and French is never scored.
    pub fn detect(
        &self,
        text: &str,
        config: &DetectionConfig,
    ) -> Result<DetectionResult, DetectionError> {
        config.validate()?;
        let candidates = CandidateSet::build(config.strategy())?;

        let prepared = PreparedText::new(text);
        let profile = prepared.profile(config.low_accuracy_mode());
        if profile.is_empty() {
            debug!("No match: text has no letters to score");
            return Ok(DetectionResult::NoMatch);
        }

        let (scored, unscored) = candidates.partition_by_scripts(prepared.scripts());
        let mut result = match scored.as_slice() {
            [] => {
                debug!(
                    "No match: no {} candidate is written in the text's scripts",
                    config.strategy()
                );
                return Ok(DetectionResult::NoMatch);
            }
            [only] => {
                debug!("Script filter left only {}", only);
                if config.return_distribution() {
                    DetectionResult::Distribution(vec![ConfidenceValue {
                        language: *only,
                        confidence: 1.0,
                    }])
                } else {
                    DetectionResult::Language(*only)
                }
            }
            _ => {
                if !unscored.is_empty() {
                    debug!(
                        "Script filter dropped {} of {} candidates",
                        unscored.len(),
                        candidates.len()
                    );
                }
                let scores = Scorer::new(&self.store).score(&profile, &scored)?;
                rank(
                    &scores,
                    config.minimum_relative_distance(),
                    config.return_distribution(),
                )
            }
        };

        append_unscored(&mut result, &unscored);
        Ok(result)
    }

    /// Resolve loosely typed options, then detect.
    pub fn detect_with_options(
        &self,
        text: &str,
        options: &DetectionOptions,
    ) -> Result<DetectionResult, DetectionError> {
        let config = options.to_config()?;
        self.detect(text, &config)
    }

    /// Confidence that `text` is written in `language` among the candidates
    /// `config` selects. 0.0 outside the candidate set or on no match.
    pub fn confidence_for(
        &self,
        text: &str,
        language: Language,
        config: &DetectionConfig,
    ) -> Result<f64, DetectionError> {
        let result = self.detect(text, &config.with_distribution())?;
        Ok(result.confidence_of(language))
    }
}

/// Load every model into the global store.
pub fn initialize() -> Result<(), DetectionError> {
    Detector::default().initialize()
}

/// Detect with the global store.
pub fn detect(text: &str, config: &DetectionConfig) -> Result<DetectionResult, DetectionError> {
    Detector::default().detect(text, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{ENGLISH, FRENCH, GERMAN, RUSSIAN};

    fn among(languages: &[Language]) -> DetectionConfig {
        DetectionConfig::builder()
            .with_languages(languages.iter().copied())
            .build()
            .unwrap()
    }

    #[test]
    fn validation_precedes_everything() {
        let detector = Detector::with_source(crate::model::EmbeddedModels);
        let err = detector.detect("", &among(&[ENGLISH])).unwrap_err();
        assert!(matches!(err, DetectionError::InsufficientLanguages { .. }));
        assert!(detector.store().loaded_languages().is_empty());
    }

    #[test]
    fn script_filter_short_circuits_without_loading() {
        let detector = Detector::with_source(crate::model::EmbeddedModels);
        let config = among(&[ENGLISH, GERMAN, RUSSIAN]);
        assert_eq!(
            detector.detect("Привет, как дела?", &config).unwrap(),
            DetectionResult::Language(RUSSIAN)
        );
        assert!(detector.store().loaded_languages().is_empty());

        let config = among(&[ENGLISH, GERMAN, FRENCH]);
        assert!(detector.detect("Привет", &config).unwrap().is_no_match());
        assert!(detector.store().loaded_languages().is_empty());
    }

    #[test]
    fn filtered_candidates_trail_the_distribution() {
        let detector = Detector::with_source(crate::model::EmbeddedModels);
        let config = DetectionConfig::builder()
            .with_languages([RUSSIAN, ENGLISH, GERMAN])
            .return_distribution(true)
            .build()
            .unwrap();
        let result = detector.detect("Привет", &config).unwrap();
        let dist = result.distribution().unwrap();
        assert_eq!(dist[0], ConfidenceValue { language: RUSSIAN, confidence: 1.0 });
        let tail: Vec<_> = dist[1..].iter().map(|v| (v.language, v.confidence)).collect();
        assert_eq!(tail, [(ENGLISH, 0.0), (GERMAN, 0.0)]);
    }
}
