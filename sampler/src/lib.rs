mod error;
mod policy;
mod trajectory_sampler;

pub use error::{PolicyError, SampleError};
pub use policy::{Decision, RandomPolicy, RolloutPolicy};
pub use trajectory_sampler::TrajectorySampler;
