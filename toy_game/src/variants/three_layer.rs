use crate::variant::{Layer, RewardTable, RuleTable, TransitionPolicy};
use crate::{VariantError, VariantSpec};

const N_STATES: usize = 10;
const N_ACTIONS: u8 = 2;
const N_ADV_ACTIONS: u8 = 2;

pub fn spec() -> Result<VariantSpec, VariantError> {
    let first = RuleTable::builder(N_ACTIONS, N_ADV_ACTIONS)
        .joint(0, 0, 0, &[(1, 0.7), (2, 0.3)])?
        .joint(0, 0, 1, &[(2, 0.5), (3, 0.5)])?
        .joint(0, 1, 0, &[(1, 0.6), (3, 0.4)])?
        .joint(0, 1, 1, &[(2, 0.3), (4, 0.7)])?
        .build();

    // 1 only listens to the agent, 2 only to the adversary, 4 is a fixed edge
    let second = RuleTable::builder(N_ACTIONS, N_ADV_ACTIONS)
        .by_action(1, 0, &[(5, 0.6), (6, 0.4)])?
        .by_action(1, 1, &[(5, 0.4), (6, 0.6)])?
        .by_adv(2, 0, &[(5, 0.7), (6, 0.3)])?
        .by_adv(2, 1, &[(5, 0.3), (6, 0.7)])?
        .joint(3, 0, 0, &[(5, 0.6), (6, 0.4)])?
        .joint(3, 0, 1, &[(5, 0.4), (6, 0.6)])?
        .joint(3, 1, 0, &[(5, 0.5), (6, 0.5)])?
        .joint(3, 1, 1, &[(5, 0.3), (6, 0.7)])?
        .always(4, &[(6, 1.0)])?
        .build();

    let third = RuleTable::builder(N_ACTIONS, N_ADV_ACTIONS)
        .joint(5, 0, 0, &[(7, 0.6), (8, 0.3), (9, 0.1)])?
        .joint(5, 0, 1, &[(7, 0.5), (8, 0.3), (9, 0.2)])?
        .joint(5, 1, 0, &[(7, 0.3), (8, 0.3), (9, 0.4)])?
        .joint(5, 1, 1, &[(7, 0.2), (8, 0.3), (9, 0.5)])?
        .joint(6, 0, 0, &[(7, 0.5), (8, 0.2), (9, 0.3)])?
        .joint(6, 0, 1, &[(7, 0.4), (8, 0.2), (9, 0.4)])?
        .joint(6, 1, 0, &[(7, 0.25), (8, 0.2), (9, 0.55)])?
        .joint(6, 1, 1, &[(7, 0.2), (8, 0.2), (9, 0.6)])?
        .build();

    let rewards = RewardTable::new(N_STATES).with_offset_rewards(7..=9, &[25.0, 10.0, -15.0], 7)?;
    Ok(VariantSpec {
        name: "three_layer".into(),
        n_states: N_STATES,
        n_actions: N_ACTIONS,
        n_adv_actions: N_ADV_ACTIONS,
        layers: vec![
            Layer::new([0], TransitionPolicy::Table(first)),
            Layer::new([1, 2, 3, 4], TransitionPolicy::Table(second)),
            Layer::new([5, 6], TransitionPolicy::Table(third)),
        ],
        rewards,
        rare_branch: None,
    })
}
