//! Builds version-1 model files from plain-text corpora.
//!
//! ```text
//! glottis-train --corpora assets/corpora --output assets/models
//! glottis-train --corpora assets/corpora --output /tmp/models -l de -l fr
//! ```

use anyhow::{Context, Result, bail};
use clap::Parser;
use glottis::{Language, LanguageModel, ModelFile, all_languages};
use rayon::prelude::*;
use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Instant,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Train glottis n-gram models
#[derive(Parser, Debug)]
#[command(name = "glottis-train", version)]
struct Cli {
    /// Directory holding `<iso639_3>.txt` corpora
    #[arg(long, env = "GLOTTIS_CORPORA_DIR", default_value = "assets/corpora")]
    corpora: PathBuf,

    /// Directory the `<iso639_3>.json` models are written to
    #[arg(long, env = "GLOTTIS_MODEL_DIR", default_value = "assets/models")]
    output: PathBuf,

    /// Only train these languages (name or ISO code); repeatable
    #[arg(short, long = "language", value_parser = parse_language)]
    languages: Vec<Language>,

    /// Compare against the existing files instead of writing
    #[arg(long)]
    check: bool,
}

fn parse_language(s: &str) -> Result<Language, String> {
    s.parse().map_err(|e: glottis::DetectionError| e.to_string())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("glottis=info".parse()?)
                .add_directive("glottis_train=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let languages = if cli.languages.is_empty() {
        all_languages().to_vec()
    } else {
        cli.languages.clone()
    };

    if !cli.check {
        fs::create_dir_all(&cli.output)
            .with_context(|| format!("cannot create {}", cli.output.display()))?;
    }

    let started = Instant::now();
    let stale: Vec<Language> = languages
        .par_iter()
        .map(|&language| train_one(&cli, language).map(|fresh| (!fresh).then_some(language)))
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .flatten()
        .collect();

    if cli.check && !stale.is_empty() {
        for language in &stale {
            warn!("{} model is out of date", language);
        }
        bail!("{} of {} models are out of date", stale.len(), languages.len());
    }

    info!(
        "{} {} models in {:?}",
        if cli.check { "Checked" } else { "Trained" },
        languages.len(),
        started.elapsed()
    );
    Ok(())
}

/// Train one language. Returns whether the on-disk model matches the corpus
/// (always `true` when writing).
fn train_one(cli: &Cli, language: Language) -> Result<bool> {
    let code = language.iso_code_639_3();
    let corpus_path = cli.corpora.join(format!("{code}.txt"));
    let corpus = fs::read_to_string(&corpus_path)
        .with_context(|| format!("cannot read corpus {}", corpus_path.display()))?;

    let model = ModelFile::train(language, &corpus);
    // refuse to write something the loader would reject
    let ngrams = LanguageModel::from_file(language, model.clone())
        .with_context(|| format!("trained {language} model does not validate"))?
        .ngram_count();

    let model_path = cli.output.join(format!("{code}.json"));
    if cli.check {
        return matches_on_disk(&model_path, &model);
    }

    let mut json = model.to_json()?;
    json.push('\n');
    fs::write(&model_path, json)
        .with_context(|| format!("cannot write {}", model_path.display()))?;
    info!("{}: {} n-grams -> {}", language, ngrams, model_path.display());
    Ok(true)
}

/// Whether `path` holds exactly `model`. A missing file is stale, not an error.
fn matches_on_disk(path: &Path, model: &ModelFile) -> Result<bool> {
    let existing = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!("{} does not exist", path.display());
            return Ok(false);
        }
        Err(e) => return Err(e).with_context(|| format!("cannot read model {}", path.display())),
    };
    Ok(ModelFile::from_json(&existing)? == *model)
}
