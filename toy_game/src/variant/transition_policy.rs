use super::{Categorical, RuleKey, RuleTable};
use crate::EnvError;
use rand::Rng;

/// How a layer picks the next state.
#[derive(Clone, Debug)]
pub enum TransitionPolicy {
    /// Exact lookup on `(state, action, adv_action)`.
    Table(RuleTable),
    /// The adversary action selects a base distribution; the agent action,
    /// clipped to `action_clip`, then shifts the drawn state by
    /// `action * stride`.
    AdversaryThenShift {
        by_adv: Vec<Categorical>,
        action_clip: u8,
        stride: usize,
    },
    /// `next = scale * state + offset + action`, no randomness.
    Affine { scale: usize, offset: usize },
}

impl TransitionPolicy {
    pub fn next_state<R: Rng + ?Sized>(
        &self,
        state: usize,
        action: u8,
        adv_action: u8,
        rng: &mut R,
    ) -> Result<usize, EnvError> {
        let missing = EnvError::MissingRule {
            state,
            action,
            adv_action,
        };
        match self {
            Self::Table(table) => {
                let key = RuleKey {
                    state,
                    action,
                    adv_action,
                };
                let dist = table.lookup(key).ok_or(missing)?;
                Ok(dist.sample(rng))
            }
            Self::AdversaryThenShift {
                by_adv,
                action_clip,
                stride,
            } => {
                let dist = by_adv.get(usize::from(adv_action)).ok_or(missing)?;
                let base = dist.sample(rng);
                Ok(base + usize::from(action.min(*action_clip)) * stride)
            }
            Self::Affine { scale, offset } => Ok(scale * state + offset + usize::from(action)),
        }
    }
    /// Every state this policy can produce from `state`, over all actions.
    pub(crate) fn reachable(&self, state: usize, n_actions: u8) -> Vec<usize> {
        match self {
            Self::Table(table) => table
                .iter()
                .filter(|(key, _)| key.state == state)
                .flat_map(|(_, dist)| dist.outcomes().iter().copied())
                .collect(),
            Self::AdversaryThenShift {
                by_adv,
                action_clip,
                stride,
            } => {
                let max_shift = usize::from((n_actions - 1).min(*action_clip)) * stride;
                by_adv
                    .iter()
                    .flat_map(|dist| dist.outcomes().iter().copied())
                    .flat_map(|base| [base, base + max_shift])
                    .collect()
            }
            Self::Affine { scale, offset } => (0..n_actions)
                .map(|action| scale * state + offset + usize::from(action))
                .collect(),
        }
    }
}
