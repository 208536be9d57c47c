//! Data that fully describes one game variant.

mod categorical;
mod reward_table;
mod rule_table;
mod transition_policy;

pub use categorical::Categorical;
pub use reward_table::RewardTable;
pub use rule_table::{RuleKey, RuleTable, RuleTableBuilder};
pub use transition_policy::TransitionPolicy;

use crate::VariantError;
use std::collections::BTreeSet;

/// A set of states sharing one transition policy.
#[derive(Clone, Debug)]
pub struct Layer {
    pub states: Vec<usize>,
    pub policy: TransitionPolicy,
}

impl Layer {
    pub fn new<I: IntoIterator<Item = usize>>(states: I, policy: TransitionPolicy) -> Self {
        Self {
            states: states.into_iter().collect(),
            policy,
        }
    }
}

/// A shortcut taken with fixed `probability` from any of `states`, checked
/// before the layer's own policy. `target` must be terminal.
#[derive(Clone, Debug, PartialEq)]
pub struct RareBranch {
    pub states: Vec<usize>,
    pub probability: f64,
    pub target: usize,
}

#[derive(Clone, Debug)]
pub struct VariantSpec {
    pub name: String,
    pub n_states: usize,
    pub n_actions: u8,
    pub n_adv_actions: u8,
    pub layers: Vec<Layer>,
    pub rewards: RewardTable,
    pub rare_branch: Option<RareBranch>,
}

impl VariantSpec {
    pub fn validate(&self) -> Result<(), VariantError> {
        if self.n_states == 0 {
            return Err(VariantError::EmptySpace { what: "state space" });
        }
        if self.n_actions == 0 {
            return Err(VariantError::EmptySpace {
                what: "action space",
            });
        }
        if self.n_adv_actions == 0 {
            return Err(VariantError::EmptySpace {
                what: "adversary action space",
            });
        }
        if self.rewards.len() != self.n_states {
            return Err(VariantError::RewardTableSize {
                len: self.rewards.len(),
                n_states: self.n_states,
            });
        }
        if self.rewards.is_terminal(0) {
            return Err(VariantError::InitialStateTerminal);
        }
        let mut covered = BTreeSet::new();
        for layer in &self.layers {
            for &state in &layer.states {
                self.check_state(state)?;
                if self.rewards.is_terminal(state) {
                    return Err(VariantError::TerminalStateInLayer { state });
                }
                if !covered.insert(state) {
                    return Err(VariantError::StateInSeveralLayers { state });
                }
                for next in layer.policy.reachable(state, self.n_actions) {
                    self.check_state(next)?;
                }
            }
            self.check_policy(layer)?;
        }
        if !covered.contains(&0) {
            return Err(VariantError::InitialStateUncovered);
        }
        if let Some(branch) = &self.rare_branch {
            self.check_rare_branch(branch, &covered)?;
        }
        Ok(())
    }
    /// Index of the layer containing each state.
    pub(crate) fn layer_index(&self) -> Vec<Option<usize>> {
        let mut index = vec![None; self.n_states];
        for (i, layer) in self.layers.iter().enumerate() {
            for &state in &layer.states {
                index[state] = Some(i);
            }
        }
        index
    }
    fn check_state(&self, state: usize) -> Result<(), VariantError> {
        if state < self.n_states {
            Ok(())
        } else {
            Err(VariantError::StateOutOfRange {
                state,
                n_states: self.n_states,
            })
        }
    }
    fn check_policy(&self, layer: &Layer) -> Result<(), VariantError> {
        match &layer.policy {
            TransitionPolicy::Table(table) => {
                for (key, _) in table.iter() {
                    if !layer.states.contains(&key.state) {
                        return Err(VariantError::RuleOutsideLayer { state: key.state });
                    }
                    if key.action >= self.n_actions {
                        return Err(VariantError::ActionOutOfRange {
                            what: "action",
                            value: key.action,
                            size: self.n_actions,
                        });
                    }
                    if key.adv_action >= self.n_adv_actions {
                        return Err(VariantError::ActionOutOfRange {
                            what: "adversary action",
                            value: key.adv_action,
                            size: self.n_adv_actions,
                        });
                    }
                }
                Ok(())
            }
            TransitionPolicy::AdversaryThenShift { by_adv, .. } => {
                if by_adv.len() == usize::from(self.n_adv_actions) {
                    Ok(())
                } else {
                    Err(VariantError::AdversaryRules {
                        expected: usize::from(self.n_adv_actions),
                        found: by_adv.len(),
                    })
                }
            }
            TransitionPolicy::Affine { .. } => Ok(()),
        }
    }
    fn check_rare_branch(
        &self,
        branch: &RareBranch,
        covered: &BTreeSet<usize>,
    ) -> Result<(), VariantError> {
        if !(0.0..=1.0).contains(&branch.probability) {
            return Err(VariantError::RareBranch {
                reason: format!("probability {} is not in [0, 1]", branch.probability),
            });
        }
        self.check_state(branch.target)?;
        if !self.rewards.is_terminal(branch.target) {
            return Err(VariantError::RareBranch {
                reason: format!("target state {} is not terminal", branch.target),
            });
        }
        if let Some(state) = branch.states.iter().find(|&&state| !covered.contains(&state)) {
            return Err(VariantError::RareBranch {
                reason: format!("state {state} belongs to no layer"),
            });
        }
        Ok(())
    }
}
