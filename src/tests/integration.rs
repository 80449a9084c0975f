#[cfg(test)]
mod integration_tests {

    use crate::{
        ARABIC, DetectionConfig, DetectionError, DetectionOptions, DetectionResult, Detector,
        EmbeddedModels, ENGLISH, FRENCH, GERMAN, Language, LanguageModel, ModelDirectory,
        ModelError, ModelFile, ModelSource, ModelStore, RUSSIAN, SPANISH, VIETNAMESE, detect,
    };
    use std::{
        fs,
        sync::{
            Arc,
            atomic::{AtomicUsize, Ordering},
        },
        thread,
        time::Duration,
    };

    const FOX: &str = "The quick brown fox jumps over the lazy dog.";
    const GERMAN_TEXT: &str = "Das ist ein einfacher Satz, der auf Deutsch geschrieben wurde.";
    const FRENCH_TEXT: &str = "Je voudrais un café avec du lait, s'il vous plaît.";

    fn among(languages: &[Language]) -> DetectionConfig {
        DetectionConfig::builder()
            .with_languages(languages.iter().copied())
            .build()
            .unwrap()
    }

    fn detector() -> Detector {
        Detector::with_source(EmbeddedModels)
    }

    #[test]
    fn clear_text_wins_among_three() {
        let detector = detector();
        let config = among(&[ENGLISH, GERMAN, FRENCH]);
        assert_eq!(
            detector.detect(FOX, &config).unwrap(),
            DetectionResult::Language(ENGLISH)
        );
        assert_eq!(
            detector.detect(GERMAN_TEXT, &config).unwrap(),
            DetectionResult::Language(GERMAN)
        );
        assert_eq!(detector.store().loaded_languages(), [ENGLISH, FRENCH, GERMAN]);
    }

    #[test]
    fn clear_text_wins_among_all_languages() {
        let config = DetectionConfig::default();
        assert_eq!(detect(FOX, &config).unwrap(), DetectionResult::Language(ENGLISH));
        assert_eq!(detect(GERMAN_TEXT, &config).unwrap(), DetectionResult::Language(GERMAN));
        assert_eq!(detect(FRENCH_TEXT, &config).unwrap(), DetectionResult::Language(FRENCH));
    }

    #[test]
    fn no_match_depends_on_the_candidate_set() {
        fn strict(languages: &[Language]) -> DetectionConfig {
            DetectionConfig::builder()
                .with_languages(languages.iter().copied())
                .minimum_relative_distance(0.25)
                .build()
                .unwrap()
        }
        let detector = detector();
        assert_eq!(
            detector.detect(FOX, &strict(&[ENGLISH, GERMAN, FRENCH])).unwrap(),
            DetectionResult::Language(ENGLISH)
        );
        assert!(
            detector
                .detect(FOX, &strict(&[GERMAN, FRENCH, SPANISH]))
                .unwrap()
                .is_no_match()
        );
    }

    #[test]
    fn ambiguous_short_text_falls_below_threshold() {
        let detector = detector();
        let config = DetectionConfig::builder()
            .with_languages([ENGLISH, GERMAN, FRENCH])
            .minimum_relative_distance(0.5)
            .build()
            .unwrap();
        assert!(detector.detect("a", &config).unwrap().is_no_match());
    }

    #[test]
    fn distribution_keeps_low_confidence_alternatives() {
        let detector = detector();
        let config = DetectionConfig::builder()
            .with_languages([ENGLISH, GERMAN, FRENCH])
            .return_distribution(true)
            .minimum_relative_distance(0.99)
            .build()
            .unwrap();
        let result = detector.detect(FOX, &config).unwrap();
        let dist = result.distribution().unwrap();
        assert_eq!(dist.len(), 3);
        assert_eq!(dist[0].language, ENGLISH);
        assert!(dist[0].confidence > 0.9);
        assert!(dist[1..].iter().all(|v| v.confidence > 0.0 && v.confidence < 0.1));
        let total: f64 = dist.iter().map(|v| v.confidence).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn long_text_ties_at_zero_keep_catalog_order() {
        let detector = detector();
        let config = DetectionConfig::builder()
            .with_languages([VIETNAMESE, ARABIC, ENGLISH])
            .return_distribution(true)
            .build()
            .unwrap();
        let text = format!("{FOX} ").repeat(200);
        let result = detector.detect(&text, &config).unwrap();
        let dist = result.distribution().unwrap();
        assert_eq!(dist.len(), 3);
        assert_eq!(dist[0].language, ENGLISH);
        assert_eq!(result.confidence_of(ARABIC), 0.0);
        for pair in dist.windows(2) {
            assert!(pair[0].confidence >= pair[1].confidence);
            if pair[0].confidence == pair[1].confidence {
                assert!(
                    pair[0].language < pair[1].language,
                    "{} ranked before {}",
                    pair[0].language,
                    pair[1].language
                );
            }
        }
    }

    #[test]
    fn empty_and_letterless_text_is_no_match() {
        let detector = detector();
        for text in ["", "   ", "\n\t", "12345 !?", "😀😀"] {
            assert!(detector.detect(text, &DetectionConfig::default()).unwrap().is_no_match());
        }
        assert!(detector.store().loaded_languages().is_empty());
    }

    #[test]
    fn single_language_list_is_rejected() {
        let options = DetectionOptions {
            strategy: "with_languages".into(),
            languages: vec!["en".into()],
            ..Default::default()
        };
        assert!(matches!(
            detector().detect_with_options(FOX, &options),
            Err(DetectionError::InsufficientLanguages { count: 1, .. })
        ));
    }

    #[test]
    fn options_errors_surface_before_scoring() {
        let detector = detector();
        let unknown = DetectionOptions {
            strategy: "with_languages".into(),
            languages: vec!["en".into(), "klingon".into()],
            ..Default::default()
        };
        assert!(matches!(
            detector.detect_with_options(FOX, &unknown),
            Err(DetectionError::UnrecognizedLanguage(id)) if id == "klingon"
        ));

        let bad_distance = DetectionOptions {
            minimum_relative_distance: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            detector.detect_with_options(FOX, &bad_distance),
            Err(DetectionError::InvalidMinimumRelativeDistance(_))
        ));
        assert!(detector.store().loaded_languages().is_empty());
    }

    #[test]
    fn options_round_trip_through_json() {
        let options: DetectionOptions = serde_json::from_str(
            r#"{"strategy":"with_languages","languages":["English","deu","fr"],"return_distribution":true}"#,
        )
        .unwrap();
        let result = detector().detect_with_options(GERMAN_TEXT, &options).unwrap();
        assert_eq!(result.language(), Some(GERMAN));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["distribution"][0]["language"], "German");
    }

    #[test]
    fn confidence_for_a_language() {
        let detector = detector();
        let config = among(&[ENGLISH, GERMAN, FRENCH]);
        let english = detector.confidence_for(FOX, ENGLISH, &config).unwrap();
        let german = detector.confidence_for(FOX, GERMAN, &config).unwrap();
        assert!(english > 0.9);
        assert!(german < 0.1);
        assert_eq!(detector.confidence_for(FOX, SPANISH, &config).unwrap(), 0.0);
        assert_eq!(detector.confidence_for("", ENGLISH, &config).unwrap(), 0.0);
    }

    #[test]
    fn low_accuracy_mode_still_separates_clear_text() {
        let detector = detector();
        let config = DetectionConfig::builder()
            .with_languages([ENGLISH, GERMAN, FRENCH, SPANISH])
            .low_accuracy_mode(true)
            .build()
            .unwrap();
        assert_eq!(detector.detect(FRENCH_TEXT, &config).unwrap().language(), Some(FRENCH));
        assert_eq!(detector.detect(GERMAN_TEXT, &config).unwrap().language(), Some(GERMAN));
    }

    #[test]
    fn cyrillic_text_skips_latin_candidates() {
        let detector = detector();
        let text = "Я люблю читать книги по вечерам.";
        assert_eq!(
            detector.detect(text, &among(&[RUSSIAN, ENGLISH, GERMAN])).unwrap(),
            DetectionResult::Language(RUSSIAN)
        );
        assert!(detector.detect(text, &among(&[ENGLISH, GERMAN, FRENCH])).unwrap().is_no_match());
    }

    #[test]
    fn repeated_calls_agree() {
        let detector = detector();
        let config = DetectionConfig::builder()
            .with_languages([ENGLISH, GERMAN, FRENCH])
            .return_distribution(true)
            .build()
            .unwrap();
        let first = detector.detect(FOX, &config).unwrap();
        let second = detector.detect(FOX, &config).unwrap();
        assert_eq!(first, second);
    }

    // Counts loads and holds each one long enough for racing callers to pile up.
    struct CountingSource {
        loads: AtomicUsize,
    }

    impl ModelSource for CountingSource {
        fn load(&self, language: Language) -> Result<ModelFile, ModelError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            thread::sleep(Duration::from_millis(50));
            EmbeddedModels.load(language)
        }
    }

    impl ModelSource for Arc<CountingSource> {
        fn load(&self, language: Language) -> Result<ModelFile, ModelError> {
            self.as_ref().load(language)
        }
    }

    #[test]
    fn concurrent_first_use_loads_once() {
        let source = Arc::new(CountingSource {
            loads: AtomicUsize::new(0),
        });
        let store = ModelStore::new(Arc::clone(&source));

        let models: Vec<usize> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(|| {
                        let model = store.model_for(GERMAN).unwrap();
                        assert!(model.ngram_count() > 0);
                        model as *const LanguageModel as usize
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(source.loads.load(Ordering::SeqCst), 1);
        assert!(models.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(store.loaded_languages(), [GERMAN]);
    }

    #[test]
    fn concurrent_detection_shares_one_store() {
        let source = Arc::new(CountingSource {
            loads: AtomicUsize::new(0),
        });
        let detector = Detector::new(Arc::new(ModelStore::new(Arc::clone(&source))));
        let config = among(&[ENGLISH, GERMAN, FRENCH]);

        thread::scope(|scope| {
            for _ in 0..6 {
                scope.spawn(|| {
                    let result = detector.detect(FOX, &config).unwrap();
                    assert_eq!(result, DetectionResult::Language(ENGLISH));
                });
            }
        });
        assert_eq!(source.loads.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn model_directory_backs_detection() {
        let dir = tempfile::tempdir().unwrap();
        for language in [ENGLISH, GERMAN] {
            let json = EmbeddedModels.load(language).unwrap().to_json().unwrap();
            fs::write(dir.path().join(format!("{}.json", language.iso_code_639_3())), json)
                .unwrap();
        }
        let detector = Detector::with_source(ModelDirectory::new(dir.path()));
        let result = detector.detect(GERMAN_TEXT, &among(&[ENGLISH, GERMAN])).unwrap();
        assert_eq!(result, DetectionResult::Language(GERMAN));

        let err = detector.detect(GERMAN_TEXT, &among(&[ENGLISH, FRENCH])).unwrap_err();
        assert!(matches!(
            err,
            DetectionError::ModelLoad { language, source: ModelError::Missing(_) } if language == FRENCH
        ));
    }

    #[test]
    fn corrupt_model_aborts_detection() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("eng.json"), r#"{"version":1,"language":"eng","orders":[]}"#)
            .unwrap();
        fs::write(dir.path().join("deu.json"), r#"{"version":1,"language":"fra","orders":[]}"#)
            .unwrap();
        let detector = Detector::with_source(ModelDirectory::new(dir.path()));
        let err = detector.detect(FOX, &among(&[ENGLISH, GERMAN])).unwrap_err();
        assert!(matches!(
            err,
            DetectionError::ModelLoad { source: ModelError::LanguageMismatch { .. }, .. }
        ));
        assert!(!detector.store().is_loaded(GERMAN));
    }

    #[test]
    fn warm_up_and_initialize() {
        let detector = detector();
        detector.warm_up(&among(&[FRENCH, SPANISH])).unwrap();
        assert_eq!(detector.store().loaded_languages(), [FRENCH, SPANISH]);

        detector.initialize().unwrap();
        assert_eq!(detector.store().loaded_languages().len(), 41);
    }

    #[test]
    fn trained_model_covers_every_order() {
        let model = LanguageModel::from_file(ENGLISH, ModelFile::train(ENGLISH, FOX)).unwrap();
        assert_eq!(model.language(), ENGLISH);
        assert!(model.has_order(5));
    }
}
