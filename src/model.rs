//! Per-language n-gram models.
//!
//! [`ModelFile`] is the on-disk shape, [`LanguageModel`] the validated,
//! smoothed form the scorer reads, and [`ModelStore`] the lazy cache that
//! turns the first into the second at most once per language.

pub mod file;
pub mod source;
pub mod store;

pub use file::{FORMAT_VERSION, ModelFile, OrderTable};
pub use source::{EmbeddedModels, ModelDirectory, ModelSource};
pub use store::ModelStore;

use crate::{
    lang::Language,
    text::{MAX_ORDER, ORDERS},
};
use rustc_hash::{FxHashMap, FxHashSet};
use std::{io, path::PathBuf};
use thiserror::Error;

/// Pseudo-vocabulary size for additive smoothing. Every order's denominator
/// is at least `total + PSEUDO_VOCABULARY`, so floors stay comparable across
/// models whose tables differ in size.
pub const PSEUDO_VOCABULARY: u64 = 1000;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model asset `{0}` does not exist")]
    Missing(String),

    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed model JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("model format version {found} is not supported (expected {})", FORMAT_VERSION)]
    Version { found: u32 },

    #[error("model is tagged `{found}` but `{expected}` was requested")]
    LanguageMismatch { expected: &'static str, found: String },

    #[error("corrupt model: {0}")]
    Corrupt(String),
}

#[derive(Debug)]
struct OrderModel {
    ln_probs: FxHashMap<Box<str>, f64>,
    ln_floor: f64,
}

/// Smoothed natural-log probabilities for one language, orders 1..=5.
#[derive(Debug)]
pub struct LanguageModel {
    language: Language,
    orders: [Option<OrderModel>; MAX_ORDER],
}

impl LanguageModel {
    /// Validate a parsed model file and precompute its log-probabilities.
    pub fn from_file(language: Language, file: ModelFile) -> Result<Self, ModelError> {
        if file.version != FORMAT_VERSION {
            return Err(ModelError::Version { found: file.version });
        }
        if file.language != language.iso_code_639_3() {
            return Err(ModelError::LanguageMismatch {
                expected: language.iso_code_639_3(),
                found: file.language,
            });
        }

        let mut orders: [Option<OrderModel>; MAX_ORDER] = Default::default();
        for table in file.orders {
            let order = table.order;
            if !ORDERS.contains(&order) {
                return Err(ModelError::Corrupt(format!("order {order} is out of range")));
            }
            let slot = &mut orders[order - 1];
            if slot.is_some() {
                return Err(ModelError::Corrupt(format!("order {order} is listed twice")));
            }
            *slot = Some(OrderModel::from_table(table)?);
        }

        Ok(Self { language, orders })
    }

    #[inline]
    pub fn language(&self) -> Language {
        self.language
    }

    /// `ln p(ngram)` under the smoothed distribution of `order`.
    ///
    /// Unseen n-grams get the order's floor; an order the model lacks gets
    /// `ln(1 / PSEUDO_VOCABULARY)`.
    #[inline]
    pub fn log_probability(&self, order: usize, ngram: &str) -> f64 {
        match order.checked_sub(1).and_then(|i| self.orders.get(i)) {
            Some(Some(table)) => table.ln_probs.get(ngram).copied().unwrap_or(table.ln_floor),
            _ => -(PSEUDO_VOCABULARY as f64).ln(),
        }
    }

    pub fn has_order(&self, order: usize) -> bool {
        matches!(order.checked_sub(1).and_then(|i| self.orders.get(i)), Some(Some(_)))
    }

    /// Distinct n-grams across all orders.
    pub fn ngram_count(&self) -> usize {
        self.orders
            .iter()
            .flatten()
            .map(|t| t.ln_probs.len())
            .sum()
    }
}

impl OrderModel {
    fn from_table(table: OrderTable) -> Result<Self, ModelError> {
        let order = table.order;
        let mut counted = 0u64;
        let mut seen = FxHashSet::default();
        let mut raw: Vec<(&str, u64)> = Vec::new();

        for (&count, grams) in &table.ngrams {
            if count == 0 {
                return Err(ModelError::Corrupt(format!("order {order} lists a zero count")));
            }
            for gram in grams.split(' ').filter(|g| !g.is_empty()) {
                if gram.chars().count() != order {
                    return Err(ModelError::Corrupt(format!(
                        "`{gram}` does not have {order} characters"
                    )));
                }
                if !seen.insert(gram) {
                    return Err(ModelError::Corrupt(format!("`{gram}` is listed twice")));
                }
                counted = counted.saturating_add(count);
                raw.push((gram, count));
            }
        }
        if counted > table.total {
            return Err(ModelError::Corrupt(format!(
                "order {order} counts {counted} occurrences but its total is {}",
                table.total
            )));
        }

        let vocabulary = raw.len() as u64 + 1;
        let denominator = table.total.saturating_add(vocabulary.max(PSEUDO_VOCABULARY)) as f64;
        let ln_denominator = denominator.ln();
        let ln_probs = raw
            .into_iter()
            .map(|(gram, count)| (Box::from(gram), (count as f64 + 1.0).ln() - ln_denominator))
            .collect();

        Ok(Self {
            ln_probs,
            ln_floor: -ln_denominator,
        })
    }
}
