use super::EnvError;
use trajectory_data::{Observation, StepInfo};

/// What the environment answers to one action.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub observation: Observation,
    pub reward: f64,
    pub done: bool,
    // always false: the horizon cutoff belongs to whoever drives the episode
    pub truncated: bool,
    pub info: StepInfo,
}

pub trait Env {
    fn reset(&mut self) -> Observation;
    fn step(&mut self, action: u8) -> Result<Step, EnvError>;
    fn n_actions(&self) -> u8;
    fn n_adv_actions(&self) -> u8;
    fn observation_len(&self) -> usize;
}

pub fn one_hot(index: usize, len: usize) -> Observation {
    let mut observation = vec![0; len];
    observation[index] = 1;
    observation
}
