use crate::variant::{Categorical, Layer, RareBranch, RewardTable, TransitionPolicy};
use crate::{VariantError, VariantSpec};

const N_STATES: usize = 12;
const REWARD_LIST: [f64; 9] = [5.0, 5.0, 0.0, 6.0, 1.0, 2.0, 7.0, 4.0, 100.0];
const JACKPOT_STATE: usize = 11;
const JACKPOT_PROBABILITY: f64 = 0.02;

// state 0 lands on 1 or 2 depending on the adversary; agent actions 1 and 2
// both push that two states further, onto the early exits 3 and 4.
// 1 and 2 lead to 3 * s + 2 + action, i.e. the exits 5..=10, unless the
// jackpot fires first.
pub fn spec() -> Result<VariantSpec, VariantError> {
    let opening = TransitionPolicy::AdversaryThenShift {
        by_adv: vec![
            Categorical::new(&[(1, 0.6), (2, 0.4)])?,
            Categorical::new(&[(1, 0.2), (2, 0.8)])?,
        ],
        action_clip: 1,
        stride: 2,
    };
    let middle = TransitionPolicy::Affine {
        scale: 3,
        offset: 2,
    };
    let rewards = RewardTable::new(N_STATES)
        .with_offset_rewards(3..=4, &REWARD_LIST, 0)?
        .with_offset_rewards(5..=10, &REWARD_LIST, 5)?
        .with_terminal(JACKPOT_STATE, REWARD_LIST[8])?;
    Ok(VariantSpec {
        name: "jackpot".into(),
        n_states: N_STATES,
        n_actions: 3,
        n_adv_actions: 2,
        layers: vec![Layer::new([0], opening), Layer::new([1, 2], middle)],
        rewards,
        rare_branch: Some(RareBranch {
            states: vec![1, 2],
            probability: JACKPOT_PROBABILITY,
            target: JACKPOT_STATE,
        }),
    })
}
