use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use trajectory_data::PolicyInfo;

pub struct Decision {
    pub action: u8,
    pub info: PolicyInfo,
}

/// Chooses the agent's actions while trajectories are collected.
pub trait RolloutPolicy {
    fn act(&mut self, observation: &[u8], n_actions: u8) -> Decision;
}

/// Picks every action uniformly, ignoring the observation.
pub struct RandomPolicy<R = ChaCha8Rng> {
    rng: R,
}

impl RandomPolicy<ChaCha8Rng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomPolicy<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> RolloutPolicy for RandomPolicy<R> {
    fn act(&mut self, _observation: &[u8], n_actions: u8) -> Decision {
        Decision {
            action: self.rng.gen_range(0..n_actions),
            info: PolicyInfo::new(),
        }
    }
}
