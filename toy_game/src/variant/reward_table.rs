use crate::VariantError;
use std::ops::RangeInclusive;

/// Per-state terminal rewards. A state is terminal exactly when it has an
/// entry.
#[derive(Clone, Debug, PartialEq)]
pub struct RewardTable {
    rewards: Vec<Option<f64>>,
}

impl RewardTable {
    pub fn new(n_states: usize) -> Self {
        Self {
            rewards: vec![None; n_states],
        }
    }
    pub fn with_terminal(mut self, state: usize, reward: f64) -> Result<Self, VariantError> {
        let n_states = self.rewards.len();
        let slot = self
            .rewards
            .get_mut(state)
            .ok_or(VariantError::StateOutOfRange { state, n_states })?;
        *slot = Some(reward);
        Ok(self)
    }
    /// Marks every state in `states` terminal, with reward
    /// `list[state - offset]`.
    pub fn with_offset_rewards(
        mut self,
        states: RangeInclusive<usize>,
        list: &[f64],
        offset: usize,
    ) -> Result<Self, VariantError> {
        for state in states {
            let reward = state
                .checked_sub(offset)
                .and_then(|index| list.get(index))
                .ok_or(VariantError::RewardIndex { state, offset })?;
            self = self.with_terminal(state, *reward)?;
        }
        Ok(self)
    }
    pub fn reward(&self, state: usize) -> Option<f64> {
        self.rewards.get(state).copied().flatten()
    }
    pub fn is_terminal(&self, state: usize) -> bool {
        self.reward(state).is_some()
    }
    pub fn terminal_states(&self) -> impl Iterator<Item = usize> + '_ {
        self.rewards
            .iter()
            .enumerate()
            .filter_map(|(state, reward)| reward.map(|_| state))
    }
    pub fn len(&self) -> usize {
        self.rewards.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rewards.is_empty()
    }
}
