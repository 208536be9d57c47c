use super::Categorical;
use crate::VariantError;
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuleKey {
    pub state: usize,
    pub action: u8,
    pub adv_action: u8,
}

/// Exact-match transition rules. There is no fallback: a key that was never
/// inserted has no transition.
#[derive(Clone, Debug, Default)]
pub struct RuleTable {
    rules: BTreeMap<RuleKey, Categorical>,
}

impl RuleTable {
    pub fn builder(n_actions: u8, n_adv_actions: u8) -> RuleTableBuilder {
        RuleTableBuilder {
            n_actions,
            n_adv_actions,
            table: Self::default(),
        }
    }
    pub fn lookup(&self, key: RuleKey) -> Option<&Categorical> {
        self.rules.get(&key)
    }
    pub fn iter(&self) -> impl Iterator<Item = (&RuleKey, &Categorical)> {
        self.rules.iter()
    }
    pub fn len(&self) -> usize {
        self.rules.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Fills a [`RuleTable`]. The `by_action`, `by_adv` and `always` shorthands
/// expand into one explicit entry per matching key.
pub struct RuleTableBuilder {
    n_actions: u8,
    n_adv_actions: u8,
    table: RuleTable,
}

impl RuleTableBuilder {
    pub fn joint(
        mut self,
        state: usize,
        action: u8,
        adv_action: u8,
        outcomes: &[(usize, f64)],
    ) -> Result<Self, VariantError> {
        let dist = Categorical::new(outcomes)?;
        self.insert(state, action, adv_action, dist)?;
        Ok(self)
    }
    /// The adversary action does not matter.
    pub fn by_action(
        mut self,
        state: usize,
        action: u8,
        outcomes: &[(usize, f64)],
    ) -> Result<Self, VariantError> {
        let dist = Categorical::new(outcomes)?;
        for adv_action in 0..self.n_adv_actions {
            self.insert(state, action, adv_action, dist.clone())?;
        }
        Ok(self)
    }
    /// The agent action does not matter.
    pub fn by_adv(
        mut self,
        state: usize,
        adv_action: u8,
        outcomes: &[(usize, f64)],
    ) -> Result<Self, VariantError> {
        let dist = Categorical::new(outcomes)?;
        for action in 0..self.n_actions {
            self.insert(state, action, adv_action, dist.clone())?;
        }
        Ok(self)
    }
    pub fn always(mut self, state: usize, outcomes: &[(usize, f64)]) -> Result<Self, VariantError> {
        let dist = Categorical::new(outcomes)?;
        for action in 0..self.n_actions {
            for adv_action in 0..self.n_adv_actions {
                self.insert(state, action, adv_action, dist.clone())?;
            }
        }
        Ok(self)
    }
    pub fn build(self) -> RuleTable {
        self.table
    }
    fn insert(
        &mut self,
        state: usize,
        action: u8,
        adv_action: u8,
        dist: Categorical,
    ) -> Result<(), VariantError> {
        if action >= self.n_actions {
            return Err(VariantError::ActionOutOfRange {
                what: "action",
                value: action,
                size: self.n_actions,
            });
        }
        if adv_action >= self.n_adv_actions {
            return Err(VariantError::ActionOutOfRange {
                what: "adversary action",
                value: adv_action,
                size: self.n_adv_actions,
            });
        }
        let key = RuleKey {
            state,
            action,
            adv_action,
        };
        if self.table.rules.insert(key, dist).is_some() {
            return Err(VariantError::DuplicateRule {
                state,
                action,
                adv_action,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(state: usize, action: u8, adv_action: u8) -> RuleKey {
        RuleKey {
            state,
            action,
            adv_action,
        }
    }

    #[test]
    fn shorthands_expand_to_every_matching_key() {
        let table = RuleTable::builder(2, 2)
            .by_action(1, 0, &[(5, 1.0)])
            .unwrap()
            .by_adv(2, 1, &[(6, 1.0)])
            .unwrap()
            .always(4, &[(6, 1.0)])
            .unwrap()
            .build();
        assert_eq!(table.len(), 2 + 2 + 4);
        assert!(table.lookup(key(1, 0, 0)).is_some());
        assert!(table.lookup(key(1, 0, 1)).is_some());
        assert!(table.lookup(key(1, 1, 0)).is_none());
        assert!(table.lookup(key(2, 0, 1)).is_some());
        assert!(table.lookup(key(2, 1, 0)).is_none());
        assert_eq!(table.lookup(key(4, 1, 1)).unwrap().outcomes(), &[6]);
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let result = RuleTable::builder(2, 2)
            .joint(3, 0, 1, &[(5, 1.0)])
            .unwrap()
            .by_action(3, 0, &[(6, 1.0)]);
        assert!(matches!(
            result,
            Err(VariantError::DuplicateRule {
                state: 3,
                action: 0,
                adv_action: 1
            })
        ));
    }

    #[test]
    fn out_of_range_actions_are_rejected() {
        assert!(matches!(
            RuleTable::builder(2, 2).joint(0, 2, 0, &[(1, 1.0)]),
            Err(VariantError::ActionOutOfRange { what: "action", .. })
        ));
        assert!(matches!(
            RuleTable::builder(2, 2).joint(0, 0, 2, &[(1, 1.0)]),
            Err(VariantError::ActionOutOfRange {
                what: "adversary action",
                ..
            })
        ));
    }
}
