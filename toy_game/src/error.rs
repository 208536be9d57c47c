use thiserror::Error;

/// Failures while stepping a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    /// The variant defines no transition for this combination. Stepping a
    /// game that already reached a terminal state also ends up here.
    #[error("no transition rule for state {state}, action {action}, adversary action {adv_action}")]
    MissingRule {
        state: usize,
        action: u8,
        adv_action: u8,
    },

    #[error("action {action} is outside the action space of size {n_actions}")]
    ActionOutOfRange { action: u8, n_actions: u8 },
}

/// A variant descriptor that cannot describe a well-formed game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariantError {
    #[error("{what} must not be empty")]
    EmptySpace { what: &'static str },

    #[error("invalid categorical distribution: {reason}")]
    InvalidDistribution { reason: String },

    #[error("state {state} is out of range for a game with {n_states} states")]
    StateOutOfRange { state: usize, n_states: usize },

    #[error("{what} {value} is out of range for a space of size {size}")]
    ActionOutOfRange {
        what: &'static str,
        value: u8,
        size: u8,
    },

    #[error("duplicate rule for state {state}, action {action}, adversary action {adv_action}")]
    DuplicateRule {
        state: usize,
        action: u8,
        adv_action: u8,
    },

    #[error("rule for state {state} is attached to a layer that does not contain it")]
    RuleOutsideLayer { state: usize },

    #[error("state {state} belongs to more than one layer")]
    StateInSeveralLayers { state: usize },

    #[error("the initial state 0 belongs to no layer")]
    InitialStateUncovered,

    #[error("the initial state 0 must not be terminal")]
    InitialStateTerminal,

    #[error("terminal state {state} must not belong to a layer")]
    TerminalStateInLayer { state: usize },

    #[error("reward table has {len} entries but the game has {n_states} states")]
    RewardTableSize { len: usize, n_states: usize },

    #[error("no reward list entry for state {state} at offset {offset}")]
    RewardIndex { state: usize, offset: usize },

    #[error("expected one adversary distribution per adversary action ({expected}), found {found}")]
    AdversaryRules { expected: usize, found: usize },

    #[error("invalid rare branch: {reason}")]
    RareBranch { reason: String },
}
