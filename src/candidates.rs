use crate::{
    config::Strategy,
    error::DetectionError,
    lang::{Language, all_languages, all_spoken_languages, all_with_script},
    unicode::ScriptSet,
};
use std::ops::Deref;

/// Minimum number of distinct languages an explicit list must name, and
/// the minimum a `without_languages` exclusion must leave.
pub const MIN_CANDIDATES: usize = 2;

/// Languages a detection call chooses between: non-empty, duplicate-free,
/// in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    languages: Vec<Language>,
}

impl CandidateSet {
    pub fn build(strategy: &Strategy) -> Result<Self, DetectionError> {
        let languages = match strategy {
            Strategy::AllLanguages => all_languages().to_vec(),
            Strategy::AllSpokenLanguages => all_spoken_languages(),
            Strategy::AllWithScript(script) => all_with_script(*script),
            Strategy::WithLanguages(listed) => {
                let listed = distinct(listed);
                require_enough(strategy, listed.len())?;
                listed
            }
            Strategy::WithoutLanguages(listed) => {
                let excluded = distinct(listed);
                require_enough(strategy, excluded.len())?;
                let remaining: Vec<_> = all_languages()
                    .iter()
                    .copied()
                    .filter(|l| excluded.binary_search(l).is_err())
                    .collect();
                require_enough(strategy, remaining.len())?;
                remaining
            }
        };
        Ok(Self { languages })
    }

    #[inline]
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    #[inline]
    pub fn contains(&self, language: Language) -> bool {
        self.languages.binary_search(&language).is_ok()
    }

    /// Split into candidates written in one of `scripts` and the rest.
    ///
    /// An empty script set filters nothing.
    pub fn partition_by_scripts(&self, scripts: ScriptSet) -> (Vec<Language>, Vec<Language>) {
        if scripts.is_empty() {
            return (self.languages.clone(), Vec::new());
        }
        self.languages
            .iter()
            .copied()
            .partition(|l| scripts.intersects_bits(l.script_bits()))
    }
}

impl Deref for CandidateSet {
    type Target = [Language];

    fn deref(&self) -> &[Language] {
        &self.languages
    }
}

fn distinct(languages: &[Language]) -> Vec<Language> {
    let mut out = languages.to_vec();
    out.sort_unstable();
    out.dedup();
    out
}

fn require_enough(strategy: &Strategy, count: usize) -> Result<(), DetectionError> {
    if count < MIN_CANDIDATES {
        return Err(DetectionError::InsufficientLanguages {
            strategy: strategy.kind(),
            count,
        });
    }
    Ok(())
}
