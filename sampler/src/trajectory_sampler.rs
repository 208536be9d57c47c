use super::{PolicyError, RolloutPolicy, SampleError};
use toy_game::Env;
use trajectory_data::{Trajectory, TrajectoryRecorder};

/// Runs episodes of one environment under one rollout policy.
///
/// `n_interactions` counts environment steps. Collection stops once the
/// collected trajectories hold at least that many steps; the episode in
/// progress is always completed, so the total can overshoot by up to
/// `horizon - 1`.
pub struct TrajectorySampler<E, P> {
    env: E,
    policy: P,
    horizon: usize,
}

impl<E, P> TrajectorySampler<E, P>
where
    E: Env,
    P: RolloutPolicy,
{
    pub fn new(env: E, policy: P, horizon: usize) -> Result<Self, SampleError> {
        if horizon == 0 {
            return Err(SampleError::ZeroHorizon);
        }
        if env.n_actions() == 0 {
            return Err(SampleError::NoActions);
        }
        Ok(Self {
            env,
            policy,
            horizon,
        })
    }
    pub fn collect_trajectories(
        &mut self,
        n_interactions: usize,
    ) -> Result<Vec<Trajectory>, SampleError> {
        let mut trajectories = vec![];
        let mut n_steps = 0;
        while n_steps < n_interactions {
            let trajectory = self.collect_trajectory()?;
            n_steps += trajectory.len();
            tracing::debug!(
                episode = trajectories.len(),
                len = trajectory.len(),
                total_reward = trajectory.total_reward(),
                "collected trajectory"
            );
            trajectories.push(trajectory);
        }
        tracing::info!(
            trajectories = trajectories.len(),
            steps = n_steps,
            "trajectory collection finished"
        );
        Ok(trajectories)
    }
    /// Resets the environment and plays until it reports done or the horizon
    /// is reached.
    pub fn collect_trajectory(&mut self) -> Result<Trajectory, SampleError> {
        let n_actions = self.env.n_actions();
        let mut recorder = TrajectoryRecorder::new();
        let mut observation = self.env.reset();
        while recorder.len() < self.horizon {
            let decision = self.policy.act(&observation, n_actions);
            if decision.action >= n_actions {
                return Err(PolicyError::ActionOutOfRange {
                    action: decision.action,
                    n_actions,
                }
                .into());
            }
            let step = self.env.step(decision.action)?;
            let next_observation = step.observation;
            recorder.record(
                observation,
                decision.action,
                step.reward,
                step.info,
                decision.info,
            );
            if step.done {
                break;
            }
            observation = next_observation;
        }
        Ok(recorder.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Decision, RandomPolicy};
    use toy_game::{one_hot, EnvError, Step, StochasticGame, Variant};
    use trajectory_data::{Observation, PolicyInfo, StepInfo};

    /// Never terminates; the state counts steps modulo the observation length.
    struct Treadmill {
        state: usize,
    }

    impl Env for Treadmill {
        fn reset(&mut self) -> Observation {
            self.state = 0;
            one_hot(0, 4)
        }
        fn step(&mut self, _action: u8) -> Result<Step, EnvError> {
            self.state = (self.state + 1) % 4;
            Ok(Step {
                observation: one_hot(self.state, 4),
                reward: 0.0,
                done: false,
                truncated: false,
                info: StepInfo { adv_action: 0 },
            })
        }
        fn n_actions(&self) -> u8 {
            2
        }
        fn n_adv_actions(&self) -> u8 {
            1
        }
        fn observation_len(&self) -> usize {
            4
        }
    }

    struct Constant(u8);

    impl RolloutPolicy for Constant {
        fn act(&mut self, _observation: &[u8], _n_actions: u8) -> Decision {
            let mut info = PolicyInfo::new();
            info.insert("constant".into(), f64::from(self.0));
            Decision {
                action: self.0,
                info,
            }
        }
    }

    fn game_sampler(
        variant: Variant,
        seed: u64,
        horizon: usize,
    ) -> TrajectorySampler<StochasticGame, RandomPolicy> {
        let env = StochasticGame::from_variant(variant, seed).unwrap();
        TrajectorySampler::new(env, RandomPolicy::seeded(seed + 1), horizon).unwrap()
    }

    #[test]
    fn zero_horizon_is_rejected() {
        let result = TrajectorySampler::new(Treadmill { state: 0 }, Constant(0), 0);
        assert!(matches!(result, Err(SampleError::ZeroHorizon)));
    }

    #[test]
    fn environment_without_actions_is_rejected() {
        struct Stuck;
        impl Env for Stuck {
            fn reset(&mut self) -> Observation {
                one_hot(0, 1)
            }
            fn step(&mut self, _action: u8) -> Result<Step, EnvError> {
                unreachable!("no action can be chosen")
            }
            fn n_actions(&self) -> u8 {
                0
            }
            fn n_adv_actions(&self) -> u8 {
                1
            }
            fn observation_len(&self) -> usize {
                1
            }
        }
        let result = TrajectorySampler::new(Stuck, RandomPolicy::seeded(0), 5);
        assert!(matches!(result, Err(SampleError::NoActions)));
    }

    #[test]
    fn zero_interactions_collects_nothing() {
        let mut sampler = game_sampler(Variant::Jackpot, 0, 5);
        assert!(sampler.collect_trajectories(0).unwrap().is_empty());
    }

    #[test]
    fn horizon_caps_episodes_that_never_end() {
        let mut sampler = TrajectorySampler::new(Treadmill { state: 0 }, Constant(1), 5).unwrap();
        let trajectories = sampler.collect_trajectories(50).unwrap();
        assert_eq!(trajectories.len(), 10);
        assert!(trajectories.iter().all(|t| t.len() == 5));

        let mut sampler = TrajectorySampler::new(Treadmill { state: 0 }, Constant(1), 3).unwrap();
        let trajectories = sampler.collect_trajectories(50).unwrap();
        assert_eq!(trajectories.len(), 17);
        assert_eq!(trajectories.iter().map(Trajectory::len).sum::<usize>(), 51);
    }

    #[test]
    fn step_count_reaches_the_requested_interactions() {
        for variant in Variant::ALL {
            let mut sampler = game_sampler(variant, 3, 5);
            let trajectories = sampler.collect_trajectories(50).unwrap();
            assert!(trajectories.len() >= 10);
            assert!(trajectories.iter().all(|t| !t.is_empty() && t.len() <= 5));
            let steps: usize = trajectories.iter().map(Trajectory::len).sum();
            assert!((50..50 + 5).contains(&steps), "{steps} steps");
        }
    }

    #[test]
    fn trajectories_start_at_the_initial_state_and_pay_out_last() {
        let mut sampler = game_sampler(Variant::ThreeLayer, 9, 10);
        for trajectory in sampler.collect_trajectories(300).unwrap() {
            assert_eq!(trajectory.observations()[0], one_hot(0, 10));
            assert_eq!(trajectory.len(), 3);
            let (last, earlier) = trajectory.rewards().split_last().unwrap();
            assert!(earlier.iter().all(|&r| r == 0.0));
            assert!([25.0, 10.0, -15.0].contains(last));
            assert_eq!(trajectory.infos().len(), 3);
            assert_eq!(trajectory.policy_infos().len(), 3);
        }
    }

    #[test]
    fn short_horizon_cuts_episodes_before_done() {
        let mut sampler = game_sampler(Variant::ThreeLayer, 9, 2);
        let trajectories = sampler.collect_trajectories(20).unwrap();
        assert_eq!(trajectories.len(), 10);
        for trajectory in trajectories {
            assert_eq!(trajectory.len(), 2);
            assert!(trajectory.rewards().iter().all(|&r| r == 0.0));
        }
    }

    #[test]
    fn seeded_runs_are_identical() {
        let run = |seed| game_sampler(Variant::Jackpot, seed, 5).collect_trajectories(500).unwrap();
        assert_eq!(run(7), run(7));
        assert_ne!(run(7), run(8));
    }

    #[test]
    fn policy_infos_are_recorded_per_step() {
        let env = StochasticGame::from_variant(Variant::Jackpot, 0).unwrap();
        let mut sampler = TrajectorySampler::new(env, Constant(0), 5).unwrap();
        let trajectory = sampler.collect_trajectory().unwrap();
        assert_eq!(trajectory.len(), 2);
        assert!(trajectory
            .policy_infos()
            .iter()
            .all(|info| info.get("constant") == Some(&0.0)));
    }

    #[test]
    fn out_of_range_policy_action_fails_the_run() {
        let env = StochasticGame::from_variant(Variant::ThreeLayer, 0).unwrap();
        let mut sampler = TrajectorySampler::new(env, Constant(2), 5).unwrap();
        assert_eq!(
            sampler.collect_trajectories(10),
            Err(SampleError::Policy(PolicyError::ActionOutOfRange {
                action: 2,
                n_actions: 2
            }))
        );
    }

    #[test]
    fn environment_errors_fail_the_run() {
        struct Broken;
        impl Env for Broken {
            fn reset(&mut self) -> Observation {
                one_hot(0, 1)
            }
            fn step(&mut self, action: u8) -> Result<Step, EnvError> {
                Err(EnvError::MissingRule {
                    state: 0,
                    action,
                    adv_action: 0,
                })
            }
            fn n_actions(&self) -> u8 {
                1
            }
            fn n_adv_actions(&self) -> u8 {
                1
            }
            fn observation_len(&self) -> usize {
                1
            }
        }
        let mut sampler = TrajectorySampler::new(Broken, Constant(0), 5).unwrap();
        assert!(matches!(
            sampler.collect_trajectories(10),
            Err(SampleError::Env(EnvError::MissingRule { .. }))
        ));
    }
}
