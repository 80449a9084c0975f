use crate::{
    error::DetectionError,
    lang::Language,
    model::{LanguageModel, ModelStore},
    text::{MAX_ORDER, NGramProfile},
};
use tracing::trace;

/// Weight of each n-gram order, unigrams first. Higher orders are more
/// discriminative, so they count more.
pub const ORDER_WEIGHTS: [f64; MAX_ORDER] = [1.0, 2.0, 3.0, 4.0, 5.0];

/// Raw log-likelihood scoring against models borrowed from a [`ModelStore`].
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'s> {
    store: &'s ModelStore,
}

impl<'s> Scorer<'s> {
    pub fn new(store: &'s ModelStore) -> Self {
        Self { store }
    }

    /// One finite score per candidate, in the order given. Scores are only
    /// comparable within one call.
    pub fn score(
        &self,
        profile: &NGramProfile<'_>,
        candidates: &[Language],
    ) -> Result<Vec<(Language, f64)>, DetectionError> {
        candidates
            .iter()
            .map(|&language| {
                let model = self.store.model_for(language)?;
                let score = score_model(model, profile);
                trace!("{} scored {:.4}", language, score);
                Ok((language, score))
            })
            .collect()
    }
}

/// Weighted mean over orders of the summed n-gram log-probabilities.
pub fn score_model(model: &LanguageModel, profile: &NGramProfile<'_>) -> f64 {
    let mut weighted = 0.0;
    let mut weight_sum = 0.0;
    for (order, grams) in profile.orders() {
        let weight = ORDER_WEIGHTS[order - 1];
        let sum: f64 = grams.iter().map(|g| model.log_probability(order, g)).sum();
        weighted += weight * sum;
        weight_sum += weight;
    }
    if weight_sum == 0.0 {
        return 0.0;
    }
    weighted / weight_sum
}
