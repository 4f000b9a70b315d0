//! Range conditions gating event eligibility
//!
//! A condition map pairs a field name with an optional `min` and `max`.
//! Evaluation never fails: a field the state does not know reads as zero.

use crate::GameState;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Inclusive range constraint on one numeric field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
}

/// Field name to range, in catalog order
pub type Conditions = IndexMap<String, Range>;

impl Range {
    /// Range with only a lower bound
    pub fn at_least(min: i64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Range with only an upper bound
    pub fn at_most(max: i64) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    /// Range with both bounds
    pub fn between(min: i64, max: i64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Check a value against this range
    pub fn contains(&self, value: i64) -> bool {
        if let Some(max) = self.max {
            if value > max {
                return false;
            }
        }
        if let Some(min) = self.min {
            if value < min {
                return false;
            }
        }
        true
    }

    /// A range whose minimum exceeds its maximum can never be satisfied
    pub fn is_empty(&self) -> bool {
        matches!((self.min, self.max), (Some(min), Some(max)) if min > max)
    }
}

/// Check whether `state` satisfies every range in `conditions`
///
/// An empty map is always satisfied.
pub fn satisfies(state: &GameState, conditions: &Conditions) -> bool {
    conditions
        .iter()
        .all(|(field, range)| range.contains(state.value_of(field)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(1000, 50, 50, 50, 0).unwrap()
    }

    #[test]
    fn test_empty_conditions_always_hold() {
        assert!(satisfies(&state(), &Conditions::new()));
    }

    #[test]
    fn test_max_and_min_are_inclusive() {
        let mut conditions = Conditions::new();
        conditions.insert("health".into(), Range::at_most(50));
        assert!(satisfies(&state(), &conditions));

        conditions.insert("money".into(), Range::at_least(1000));
        assert!(satisfies(&state(), &conditions));

        conditions.insert("money".into(), Range::at_least(2000));
        assert!(!satisfies(&state(), &conditions));
    }

    #[test]
    fn test_violating_any_bound_fails() {
        let mut conditions = Conditions::new();
        conditions.insert("health".into(), Range::between(10, 40));
        assert!(!satisfies(&state(), &conditions));

        let mut conditions = Conditions::new();
        conditions.insert("relations".into(), Range::between(60, 90));
        assert!(!satisfies(&state(), &conditions));
    }

    #[test]
    fn test_unknown_field_reads_as_zero() {
        let mut conditions = Conditions::new();
        conditions.insert("luck".into(), Range::at_most(0));
        assert!(satisfies(&state(), &conditions));

        conditions.insert("luck".into(), Range::at_least(1));
        assert!(!satisfies(&state(), &conditions));
    }

    #[test]
    fn test_age_condition_uses_biography() {
        let mut conditions = Conditions::new();
        conditions.insert("age".into(), Range::at_least(65));
        assert!(!satisfies(&state().with_age(30), &conditions));
        assert!(satisfies(&state().with_age(70), &conditions));
    }

    #[test]
    fn test_range_ron() {
        let conditions: Conditions = ron::from_str(r#"{"health": (max: Some(60))}"#).unwrap();
        assert_eq!(conditions["health"], Range::at_most(60));
        assert!(Range::between(5, 1).is_empty());
        assert!(!Range::between(1, 1).is_empty());
    }
}
