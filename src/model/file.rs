use crate::{
    lang::Language,
    model::ModelError,
    text::{ORDERS, PreparedText},
};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const FORMAT_VERSION: u32 = 1;

/// On-disk model, format version 1.
///
/// ```json
/// {"version":1,"language":"eng","orders":[
///   {"order":1,"total":878,"ngrams":{"2":"q x","8":"k"}}]}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelFile {
    pub version: u32,
    /// ISO 639-3 code of the language the model was trained for.
    pub language: String,
    pub orders: Vec<OrderTable>,
}

/// N-gram counts of one order. `ngrams` maps an occurrence count to the
/// space-separated n-grams seen exactly that many times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTable {
    pub order: usize,
    pub total: u64,
    pub ngrams: BTreeMap<u64, String>,
}

impl ModelFile {
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Count every n-gram of `corpus` the way detection extracts them.
    ///
    /// Orders with no n-grams are left out. Within a count group n-grams are
    /// sorted, so training the same corpus twice yields identical files.
    pub fn train(language: Language, corpus: &str) -> Self {
        let text = PreparedText::new(corpus);
        let mut orders = Vec::new();

        for order in ORDERS {
            let grams = text.ngrams(order);
            if grams.is_empty() {
                continue;
            }
            let total = grams.len() as u64;

            let mut counts: FxHashMap<&str, u64> = FxHashMap::default();
            for gram in grams {
                *counts.entry(gram).or_default() += 1;
            }

            let mut groups: BTreeMap<u64, Vec<&str>> = BTreeMap::new();
            for (gram, count) in counts {
                groups.entry(count).or_default().push(gram);
            }
            let ngrams = groups
                .into_iter()
                .map(|(count, mut grams)| {
                    grams.sort_unstable();
                    (count, grams.join(" "))
                })
                .collect();

            orders.push(OrderTable { order, total, ngrams });
        }

        Self {
            version: FORMAT_VERSION,
            language: language.iso_code_639_3().to_string(),
            orders,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{ENGLISH, GERMAN};

    #[test]
    fn train_groups_by_count() {
        let file = ModelFile::train(ENGLISH, "Abba");
        assert_eq!(file.version, 1);
        assert_eq!(file.language, "eng");

        let unigrams = &file.orders[0];
        assert_eq!(unigrams.order, 1);
        assert_eq!(unigrams.total, 4);
        assert_eq!(unigrams.ngrams.get(&2).map(String::as_str), Some("a b"));

        let orders: Vec<_> = file.orders.iter().map(|t| t.order).collect();
        assert_eq!(orders, [1, 2, 3, 4]);
    }

    #[test]
    fn training_is_deterministic() {
        let corpus = "Der schnelle braune Fuchs springt über den faulen Hund.";
        assert_eq!(ModelFile::train(GERMAN, corpus), ModelFile::train(GERMAN, corpus));
    }

    #[test]
    fn json_field_layout() {
        let json = ModelFile::train(ENGLISH, "ab").to_json().unwrap();
        assert_eq!(
            json,
            r#"{"version":1,"language":"eng","orders":[{"order":1,"total":2,"ngrams":{"1":"a b"}},{"order":2,"total":1,"ngrams":{"1":"ab"}}]}"#
        );
        assert_eq!(ModelFile::from_json(&json).unwrap(), ModelFile::train(ENGLISH, "ab"));
    }

    #[test]
    fn reproduces_the_embedded_english_model() {
        let corpus = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/corpora/eng.txt"));
        let embedded = ModelFile::from_json(crate::lang::data::MODEL_ASSETS[ENGLISH.index()]).unwrap();
        assert_eq!(ModelFile::train(ENGLISH, corpus), embedded);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(ModelFile::from_json("{\"version\":"), Err(ModelError::Parse(_))));
        assert!(matches!(
            ModelFile::from_json(r#"{"version":1,"language":"eng","orders":[{"order":1,"total":1,"ngrams":{"x":"a"}}]}"#),
            Err(ModelError::Parse(_))
        ));
    }
}
