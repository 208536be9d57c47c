use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Auxiliary data the environment reports alongside every step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepInfo {
    pub adv_action: u8,
}

/// Whatever a rollout policy wants to remember about its decision. The
/// uniform policy leaves this empty.
pub type PolicyInfo = BTreeMap<String, f64>;
