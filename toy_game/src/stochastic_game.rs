use super::env::{one_hot, Env, Step};
use super::{EnvError, Variant, VariantError, VariantSpec};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use trajectory_data::{Observation, StepInfo};

/// A game variant together with its current state and its own source of
/// randomness.
pub struct StochasticGame<R = ChaCha8Rng> {
    spec: VariantSpec,
    layer_index: Vec<Option<usize>>,
    state: usize,
    rng: R,
}

impl StochasticGame<ChaCha8Rng> {
    pub fn seeded(spec: VariantSpec, seed: u64) -> Result<Self, VariantError> {
        Self::new(spec, ChaCha8Rng::seed_from_u64(seed))
    }
    pub fn from_variant(variant: Variant, seed: u64) -> Result<Self, VariantError> {
        Self::seeded(variant.spec()?, seed)
    }
}

impl<R: Rng> StochasticGame<R> {
    pub fn new(spec: VariantSpec, rng: R) -> Result<Self, VariantError> {
        spec.validate()?;
        let layer_index = spec.layer_index();
        Ok(Self {
            spec,
            layer_index,
            state: 0,
            rng,
        })
    }
    pub fn state(&self) -> usize {
        self.state
    }
    pub fn is_terminal(&self) -> bool {
        self.spec.rewards.is_terminal(self.state)
    }
    fn observation(&self) -> Observation {
        one_hot(self.state, self.spec.n_states)
    }
    fn takes_rare_branch(&mut self) -> Option<usize> {
        let branch = self.spec.rare_branch.as_ref()?;
        if !branch.states.contains(&self.state) {
            return None;
        }
        // drawn on every eligible step so the rng stream does not depend on
        // the outcome
        let draw: f64 = self.rng.gen();
        (draw < branch.probability).then_some(branch.target)
    }
    fn next_state(&mut self, action: u8, adv_action: u8) -> Result<usize, EnvError> {
        if let Some(target) = self.takes_rare_branch() {
            return Ok(target);
        }
        let missing = EnvError::MissingRule {
            state: self.state,
            action,
            adv_action,
        };
        let layer = self.layer_index[self.state].ok_or(missing)?;
        self.spec.layers[layer]
            .policy
            .next_state(self.state, action, adv_action, &mut self.rng)
    }
}

impl<R: Rng> Env for StochasticGame<R> {
    fn reset(&mut self) -> Observation {
        self.state = 0;
        self.observation()
    }
    fn step(&mut self, action: u8) -> Result<Step, EnvError> {
        if action >= self.spec.n_actions {
            return Err(EnvError::ActionOutOfRange {
                action,
                n_actions: self.spec.n_actions,
            });
        }
        let adv_action = self.rng.gen_range(0..self.spec.n_adv_actions);
        let next_state = self.next_state(action, adv_action)?;
        self.state = next_state;
        let (reward, done) = match self.spec.rewards.reward(next_state) {
            Some(reward) => (reward, true),
            None => (0.0, false),
        };
        Ok(Step {
            observation: self.observation(),
            reward,
            done,
            truncated: false,
            info: StepInfo { adv_action },
        })
    }
    fn n_actions(&self) -> u8 {
        self.spec.n_actions
    }
    fn n_adv_actions(&self) -> u8 {
        self.spec.n_adv_actions
    }
    fn observation_len(&self) -> usize {
        self.spec.n_states
    }
}
