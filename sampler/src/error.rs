use thiserror::Error;
use toy_game::EnvError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("policy chose action {action} outside the action space of size {n_actions}")]
    ActionOutOfRange { action: u8, n_actions: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    #[error("horizon must be positive")]
    ZeroHorizon,

    #[error("environment has no actions to choose from")]
    NoActions,

    #[error("environment step failed: {0}")]
    Env(#[from] EnvError),

    #[error(transparent)]
    Policy(#[from] PolicyError),
}
