//! Offline language identification with smoothed character n-gram models.
//!
//! ```no_run
//! use glottis::{DetectionConfig, Detector, ENGLISH, FRENCH, GERMAN};
//!
//! let config = DetectionConfig::builder()
//!     .with_languages([ENGLISH, FRENCH, GERMAN])
//!     .build()?;
//! let text = "Das ist ein einfacher Satz, der auf Deutsch geschrieben wurde.";
//! let result = Detector::default().detect(text, &config)?;
//! assert_eq!(result.language(), Some(GERMAN));
//! # Ok::<(), glottis::DetectionError>(())
//! ```

pub mod candidates;
pub mod config;
pub mod detector;
pub mod error;
pub mod lang;
pub mod model;
pub mod ranker;
pub mod scorer;
pub mod text;
pub mod unicode;

pub use candidates::CandidateSet;
pub use config::{DetectionConfig, DetectionConfigBuilder, DetectionOptions, Strategy};
pub use detector::{Detector, detect, initialize};
pub use error::DetectionError;
pub use lang::{
    Language, Script, all_languages, all_spoken_languages, all_with_script, iso_code_639_1_for,
    iso_code_639_3_for, language_for_iso_code,
};
pub use lang::{
    AFRIKAANS, ARABIC, ARMENIAN, BENGALI, BOKMAL, BULGARIAN, CEBUANO, CHINESE, CZECH, DANISH,
    DUTCH, ENGLISH, ESPERANTO, FINNISH, FRENCH, GEORGIAN, GERMAN, GREEK, HEBREW, HINDI,
    HUNGARIAN, INDONESIAN, ITALIAN, JAPANESE, KOREAN, LATIN, MARATHI, OLD_ENGLISH, PERSIAN,
    POLISH, PORTUGUESE, ROMANIAN, RUSSIAN, SERBIAN, SPANISH, SWAHILI, SWEDISH, THAI, TURKISH,
    UKRAINIAN, VIETNAMESE,
};
pub use model::{
    EmbeddedModels, LanguageModel, ModelDirectory, ModelError, ModelFile, ModelSource, ModelStore,
};
pub use ranker::{ConfidenceValue, DetectionResult};
