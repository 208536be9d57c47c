use crate::VariantError;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

const PROBABILITY_TOLERANCE: f64 = 1e-9;

/// A distribution over next states.
#[derive(Clone, Debug)]
pub struct Categorical {
    outcomes: Vec<usize>,
    index: WeightedIndex<f64>,
}

impl Categorical {
    pub fn new(pairs: &[(usize, f64)]) -> Result<Self, VariantError> {
        if pairs.is_empty() {
            return Err(VariantError::InvalidDistribution {
                reason: "no outcomes".into(),
            });
        }
        if let Some(&(state, p)) = pairs.iter().find(|(_, p)| !p.is_finite() || *p < 0.0) {
            return Err(VariantError::InvalidDistribution {
                reason: format!("outcome {state} has probability {p}"),
            });
        }
        let total: f64 = pairs.iter().map(|(_, p)| p).sum();
        if (total - 1.0).abs() > PROBABILITY_TOLERANCE {
            return Err(VariantError::InvalidDistribution {
                reason: format!("probabilities sum to {total}"),
            });
        }
        let (outcomes, probabilities): (Vec<usize>, Vec<f64>) = pairs.iter().copied().unzip();
        let index = WeightedIndex::new(&probabilities).map_err(|e| {
            VariantError::InvalidDistribution {
                reason: e.to_string(),
            }
        })?;
        Ok(Self {
            outcomes,
            index,
        })
    }
    pub fn certain(state: usize) -> Result<Self, VariantError> {
        Self::new(&[(state, 1.0)])
    }
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.outcomes[self.index.sample(rng)]
    }
    pub fn outcomes(&self) -> &[usize] {
        &self.outcomes
    }
}
