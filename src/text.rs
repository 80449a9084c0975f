//! Text preparation and n-gram extraction.
//!
//! Both the scorer and the trainer go through [`PreparedText`], so a model
//! always sees n-grams cut exactly the way detection cuts them:
//!
//! 1. lowercase
//! 2. Unicode NFC (ICU4X)
//! 3. words = maximal runs of letters and combining marks, holding at least
//!    one letter
//! 4. n-grams = every window of `n` characters inside one word

use crate::unicode::{ScriptSet, script_of};
use icu_normalizer::{ComposingNormalizer, ComposingNormalizerBorrowed};
use smallvec::SmallVec;
use std::{iter, ops::RangeInclusive, sync::LazyLock};
use unicode_normalization::char::is_combining_mark;

static ICU4X_NFC: LazyLock<ComposingNormalizerBorrowed> =
    LazyLock::new(ComposingNormalizer::new_nfc);

/// Longest n-gram order a model carries.
pub const MAX_ORDER: usize = 5;

/// Every order from unigrams up to [`MAX_ORDER`].
pub const ORDERS: RangeInclusive<usize> = 1..=MAX_ORDER;

/// Order scored in low-accuracy mode.
pub const LOW_ACCURACY_ORDER: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedText {
    normalized: String,
}

impl PreparedText {
    pub fn new(text: &str) -> Self {
        // lowercasing can decompose (`İ` -> `i` + U+0307), so compose last
        let lowered = text.to_lowercase();
        Self {
            normalized: ICU4X_NFC.normalize(&lowered).into_owned(),
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.normalized
            .split(|c: char| !is_word_char(c))
            .filter(|w| w.chars().any(char::is_alphabetic))
    }

    /// `true` when nothing alphabetic is left to score.
    pub fn has_no_words(&self) -> bool {
        self.words().next().is_none()
    }

    /// Scripts of every letter in the text.
    pub fn scripts(&self) -> ScriptSet {
        self.words()
            .flat_map(str::chars)
            .filter_map(script_of)
            .collect()
    }

    /// All n-grams of one order, in text order, borrowed from the text.
    pub fn ngrams(&self, order: usize) -> Vec<&str> {
        let mut out = Vec::new();
        for word in self.words() {
            push_word_ngrams(word, order, &mut out);
        }
        out
    }

    /// N-grams for every order that should be scored.
    ///
    /// Full mode keeps every order with at least one window. Low-accuracy
    /// mode keeps trigrams only, or the highest lower order if no word is
    /// three characters long.
    pub fn profile(&self, low_accuracy: bool) -> NGramProfile<'_> {
        let mut orders: SmallVec<[(usize, Vec<&str>); MAX_ORDER]> = SmallVec::new();
        if low_accuracy {
            for order in (1..=LOW_ACCURACY_ORDER).rev() {
                let grams = self.ngrams(order);
                if !grams.is_empty() {
                    orders.push((order, grams));
                    break;
                }
            }
        } else {
            for order in ORDERS {
                let grams = self.ngrams(order);
                if grams.is_empty() {
                    // a longer window cannot fit where this one did not
                    break;
                }
                orders.push((order, grams));
            }
        }
        NGramProfile { orders }
    }
}

/// N-grams of a text grouped by order; only non-empty orders are kept.
#[derive(Debug, Clone, Default)]
pub struct NGramProfile<'a> {
    orders: SmallVec<[(usize, Vec<&'a str>); MAX_ORDER]>,
}

impl<'a> NGramProfile<'a> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn orders(&self) -> impl Iterator<Item = (usize, &[&'a str])> + '_ {
        self.orders.iter().map(|(order, grams)| (*order, grams.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.orders.iter().map(|(_, grams)| grams.len()).sum()
    }

    pub fn highest_order(&self) -> Option<usize> {
        self.orders.last().map(|(order, _)| *order)
    }
}

/// Letters plus the marks that attach to them (viramas, vowel signs, the
/// dot of a lowercased `İ`).
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || is_combining_mark(c)
}

fn push_word_ngrams<'a>(word: &'a str, order: usize, out: &mut Vec<&'a str>) {
    if order == 0 {
        return;
    }
    let bounds: SmallVec<[usize; 32]> = word
        .char_indices()
        .map(|(i, _)| i)
        .chain(iter::once(word.len()))
        .collect();
    let chars = bounds.len() - 1;
    if chars < order {
        return;
    }
    out.extend((0..=chars - order).map(|i| &word[bounds[i]..bounds[i + order]]));
}
