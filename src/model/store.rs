use crate::{
    error::DetectionError,
    lang::{Language, all_languages},
    model::{EmbeddedModels, LanguageModel, ModelDirectory, ModelSource},
};
use once_cell::sync::OnceCell;
use rayon::prelude::*;
use std::{
    env,
    sync::{Arc, LazyLock},
    time::Instant,
};
use tracing::{debug, info, warn};

/// Environment variable that points the global store at a model directory.
pub const MODEL_DIR_ENV: &str = "GLOTTIS_MODEL_DIR";

static GLOBAL_STORE: LazyLock<Arc<ModelStore>> = LazyLock::new(|| Arc::new(ModelStore::from_env()));

/// Lazily populated cache of language models, one slot per catalog language.
///
/// Each slot is an init-once cell: concurrent requests for an unloaded
/// language block on a single load, later requests read without locking.
/// A failed load leaves the slot empty so a later call can try again.
pub struct ModelStore {
    source: Box<dyn ModelSource>,
    slots: Box<[OnceCell<LanguageModel>]>,
}

impl ModelStore {
    pub fn new(source: impl ModelSource + 'static) -> Self {
        let slots = all_languages().iter().map(|_| OnceCell::new()).collect();
        Self {
            source: Box::new(source),
            slots,
        }
    }

    pub fn embedded() -> Self {
        Self::new(EmbeddedModels)
    }

    /// Directory store if `GLOTTIS_MODEL_DIR` is set, embedded models otherwise.
    pub fn from_env() -> Self {
        match env::var_os(MODEL_DIR_ENV) {
            Some(dir) if !dir.is_empty() => {
                debug!("Reading models from {} ({})", dir.to_string_lossy(), MODEL_DIR_ENV);
                Self::new(ModelDirectory::new(dir))
            }
            _ => Self::embedded(),
        }
    }

    /// The process-wide store shared by [`Detector::default`](crate::Detector).
    pub fn global() -> Arc<ModelStore> {
        Arc::clone(&GLOBAL_STORE)
    }

    pub fn model_for(&self, language: Language) -> Result<&LanguageModel, DetectionError> {
        self.slot(language).get_or_try_init(|| self.load(language))
    }

    /// Load every listed language in parallel. Returns the first failure;
    /// languages that did load stay cached.
    pub fn warm_up(&self, languages: &[Language]) -> Result<(), DetectionError> {
        languages
            .par_iter()
            .try_for_each(|&language| self.model_for(language).map(|_| ()))
    }

    pub fn warm_up_all(&self) -> Result<(), DetectionError> {
        self.warm_up(all_languages())
    }

    pub fn is_loaded(&self, language: Language) -> bool {
        self.slot(language).get().is_some()
    }

    /// Languages with a cached model, in catalog order.
    pub fn loaded_languages(&self) -> Vec<Language> {
        all_languages()
            .iter()
            .copied()
            .filter(|&l| self.is_loaded(l))
            .collect()
    }

    #[inline]
    fn slot(&self, language: Language) -> &OnceCell<LanguageModel> {
        // one slot per catalog entry, indexed by ordinal
        &self.slots[language.index()]
    }

    fn load(&self, language: Language) -> Result<LanguageModel, DetectionError> {
        let started = Instant::now();
        let loaded = self
            .source
            .load(language)
            .and_then(|file| LanguageModel::from_file(language, file));

        match loaded {
            Ok(model) => {
                info!(
                    "Loaded {} model ({} n-grams) from {} in {:?}",
                    language,
                    model.ngram_count(),
                    self.source.describe(),
                    started.elapsed()
                );
                Ok(model)
            }
            Err(source) => {
                warn!("Failed to load {} model: {}", language, source);
                Err(DetectionError::ModelLoad { language, source })
            }
        }
    }
}

impl Default for ModelStore {
    fn default() -> Self {
        Self::embedded()
    }
}

impl std::fmt::Debug for ModelStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelStore")
            .field("source", &self.source.describe())
            .field("loaded", &self.loaded_languages())
            .finish()
    }
}
