use super::{Observation, PolicyInfo, StepInfo};
use serde::{Deserialize, Serialize};

/// The record of one episode, from reset to termination or horizon cutoff.
///
/// Index `t` of every field belongs to step `t`: the observation the policy
/// acted on, the action it chose, and what the environment answered.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    observations: Vec<Observation>,
    actions: Vec<u8>,
    rewards: Vec<f64>,
    infos: Vec<StepInfo>,
    policy_infos: Vec<PolicyInfo>,
}

impl Trajectory {
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }
    pub fn actions(&self) -> &[u8] {
        &self.actions
    }
    pub fn rewards(&self) -> &[f64] {
        &self.rewards
    }
    pub fn infos(&self) -> &[StepInfo] {
        &self.infos
    }
    pub fn policy_infos(&self) -> &[PolicyInfo] {
        &self.policy_infos
    }
    pub fn len(&self) -> usize {
        self.actions.len()
    }
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
    pub fn total_reward(&self) -> f64 {
        self.rewards.iter().sum()
    }
}

/// Accumulates the steps of an episode that is still running.
///
/// A finished [`Trajectory`] cannot be appended to; it is produced once by
/// [`TrajectoryRecorder::finish`].
#[derive(Default)]
pub struct TrajectoryRecorder {
    trajectory: Trajectory,
}

impl TrajectoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn record(
        &mut self,
        observation: Observation,
        action: u8,
        reward: f64,
        info: StepInfo,
        policy_info: PolicyInfo,
    ) {
        let trajectory = &mut self.trajectory;
        trajectory.observations.push(observation);
        trajectory.actions.push(action);
        trajectory.rewards.push(reward);
        trajectory.infos.push(info);
        trajectory.policy_infos.push(policy_info);
    }
    pub fn len(&self) -> usize {
        self.trajectory.len()
    }
    pub fn is_empty(&self) -> bool {
        self.trajectory.is_empty()
    }
    pub fn finish(self) -> Trajectory {
        self.trajectory
    }
}
