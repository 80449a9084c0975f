use crate::{
    lang::{Language, data::MODEL_ASSETS},
    model::{ModelError, ModelFile},
};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Where model files come from.
///
/// Implementations only fetch and parse; validation and smoothing happen in
/// [`LanguageModel::from_file`](crate::model::LanguageModel::from_file).
pub trait ModelSource: Send + Sync {
    fn load(&self, language: Language) -> Result<ModelFile, ModelError>;

    /// Short label for logs.
    fn describe(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}

/// Models compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedModels;

impl ModelSource for EmbeddedModels {
    fn load(&self, language: Language) -> Result<ModelFile, ModelError> {
        let json = MODEL_ASSETS
            .get(language.index())
            .ok_or_else(|| ModelError::Missing(language.iso_code_639_3().to_string()))?;
        ModelFile::from_json(json)
    }

    fn describe(&self) -> String {
        "embedded".to_string()
    }
}

/// Models read from `<root>/<iso639_3>.json`.
#[derive(Debug, Clone)]
pub struct ModelDirectory {
    root: PathBuf,
}

impl ModelDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, language: Language) -> PathBuf {
        self.root.join(format!("{}.json", language.iso_code_639_3()))
    }
}

impl ModelSource for ModelDirectory {
    fn load(&self, language: Language) -> Result<ModelFile, ModelError> {
        let path = self.path_for(language);
        let json = fs::read_to_string(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => ModelError::Missing(path.display().to_string()),
            _ => ModelError::Io {
                path: path.clone(),
                source,
            },
        })?;
        ModelFile::from_json(&json)
    }

    fn describe(&self) -> String {
        format!("directory {}", self.root.display())
    }
}

impl<S: ModelSource + ?Sized> ModelSource for Box<S> {
    fn load(&self, language: Language) -> Result<ModelFile, ModelError> {
        (**self).load(language)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
