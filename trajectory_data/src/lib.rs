mod dataset;
mod step_info;
mod trajectory;

pub use dataset::Dataset;
pub use step_info::{PolicyInfo, StepInfo};
pub use trajectory::{Trajectory, TrajectoryRecorder};

/// One-hot indicator over the state space.
pub type Observation = Vec<u8>;
