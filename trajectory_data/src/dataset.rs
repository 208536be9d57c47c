use super::Trajectory;
use serde::{Deserialize, Serialize};

/// An ordered collection of trajectories produced by one collection run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    trajectories: Vec<Trajectory>,
}

impl Dataset {
    pub fn new(trajectories: Vec<Trajectory>) -> Self {
        Self { trajectories }
    }
    pub fn trajectories(&self) -> &[Trajectory] {
        &self.trajectories
    }
    pub fn len(&self) -> usize {
        self.trajectories.len()
    }
    pub fn is_empty(&self) -> bool {
        self.trajectories.is_empty()
    }
    /// Total number of environment steps across all trajectories.
    pub fn n_interactions(&self) -> usize {
        self.trajectories.iter().map(Trajectory::len).sum()
    }
}

impl From<Vec<Trajectory>> for Dataset {
    fn from(trajectories: Vec<Trajectory>) -> Self {
        Self::new(trajectories)
    }
}
