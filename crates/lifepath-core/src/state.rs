//! Player game state
//!
//! `GameState` is a value: nothing mutates it after construction. Effects
//! and decisions produce a fresh copy, so a state handed to a reader can never
//! be observed half-updated.

use crate::{Error, Resource, Result};
use serde::{Deserialize, Serialize};

/// Snapshot of a player's resources and biography
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameStateRepr", into = "GameStateRepr")]
pub struct GameState {
    money: i64,
    health: i64,
    relations: i64,
    satisfaction: i64,
    passive_income: i64,
    age: Option<u32>,
    job: Option<String>,
    education: Option<String>,
}

/// Wire shape of a game state; bounds are checked when converting
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GameStateRepr {
    money: i64,
    health: i64,
    relations: i64,
    satisfaction: i64,
    passive_income: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    job: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    education: Option<String>,
}

impl GameState {
    /// Create a state with the given resources and no biography
    ///
    /// Fails with [`Error::OutOfBounds`] if a bounded resource (health) is
    /// outside its declared range.
    pub fn new(
        money: i64,
        health: i64,
        relations: i64,
        satisfaction: i64,
        passive_income: i64,
    ) -> Result<Self> {
        let state = Self {
            money,
            health,
            relations,
            satisfaction,
            passive_income,
            age: None,
            job: None,
            education: None,
        };
        state.check_bounds()?;
        Ok(state)
    }

    /// Set the player's age
    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    /// Set the player's job
    pub fn with_job(mut self, job: impl Into<String>) -> Self {
        self.job = Some(job.into());
        self
    }

    /// Set the player's education
    pub fn with_education(mut self, education: impl Into<String>) -> Self {
        self.education = Some(education.into());
        self
    }

    /// Read a resource
    pub fn get(&self, resource: Resource) -> i64 {
        match resource {
            Resource::Money => self.money,
            Resource::Health => self.health,
            Resource::Relations => self.relations,
            Resource::Satisfaction => self.satisfaction,
            Resource::PassiveIncome => self.passive_income,
        }
    }

    /// Read any numeric field by name
    ///
    /// Covers the five resources plus `age`. Unknown names and an unset age
    /// read as zero, so catalog conditions may mention fields this state
    /// does not have.
    pub fn value_of(&self, name: &str) -> i64 {
        if let Some(resource) = Resource::parse(name) {
            return self.get(resource);
        }
        match name {
            "age" => self.age.map(i64::from).unwrap_or(0),
            _ => 0,
        }
    }

    /// Copy of this state with one resource replaced
    ///
    /// The caller is responsible for clamping.
    pub(crate) fn with_resource(&self, resource: Resource, value: i64) -> Self {
        let mut next = self.clone();
        match resource {
            Resource::Money => next.money = value,
            Resource::Health => next.health = value,
            Resource::Relations => next.relations = value,
            Resource::Satisfaction => next.satisfaction = value,
            Resource::PassiveIncome => next.passive_income = value,
        }
        next
    }

    /// Copy of this state with `delta` years added to the age
    ///
    /// An unset age counts from zero, as it does when conditions read it.
    /// The result saturates at the ends of `u32`.
    pub(crate) fn with_age_delta(&self, delta: i64) -> Self {
        let current = i64::from(self.age.unwrap_or(0));
        let aged = current.saturating_add(delta).clamp(0, i64::from(u32::MAX));
        let mut next = self.clone();
        next.age = u32::try_from(aged).ok();
        next
    }

    pub fn money(&self) -> i64 {
        self.money
    }

    pub fn health(&self) -> i64 {
        self.health
    }

    pub fn relations(&self) -> i64 {
        self.relations
    }

    pub fn satisfaction(&self) -> i64 {
        self.satisfaction
    }

    pub fn passive_income(&self) -> i64 {
        self.passive_income
    }

    pub fn age(&self) -> Option<u32> {
        self.age
    }

    pub fn job(&self) -> Option<&str> {
        self.job.as_deref()
    }

    pub fn education(&self) -> Option<&str> {
        self.education.as_deref()
    }

    /// True once the player's age is strictly beyond `limit`
    ///
    /// A state without an age never passes the limit.
    pub fn is_past_age(&self, limit: u32) -> bool {
        self.age.is_some_and(|age| age > limit)
    }

    fn check_bounds(&self) -> Result<()> {
        for resource in Resource::ALL {
            if let Some(bounds) = resource.bounds() {
                let value = self.get(resource);
                if !bounds.contains(value) {
                    return Err(Error::OutOfBounds {
                        resource,
                        value,
                        min: bounds.min,
                        max: bounds.max,
                    });
                }
            }
        }
        Ok(())
    }
}

impl TryFrom<GameStateRepr> for GameState {
    type Error = Error;

    fn try_from(repr: GameStateRepr) -> Result<Self> {
        let state = Self {
            money: repr.money,
            health: repr.health,
            relations: repr.relations,
            satisfaction: repr.satisfaction,
            passive_income: repr.passive_income,
            age: repr.age,
            job: repr.job,
            education: repr.education,
        };
        state.check_bounds()?;
        Ok(state)
    }
}

impl From<GameState> for GameStateRepr {
    fn from(state: GameState) -> Self {
        Self {
            money: state.money,
            health: state.health,
            relations: state.relations,
            satisfaction: state.satisfaction,
            passive_income: state.passive_income,
            age: state.age,
            job: state.job,
            education: state.education,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_health_out_of_bounds() {
        assert!(GameState::new(0, 100, 0, 0, 0).is_ok());
        assert!(matches!(
            GameState::new(0, 101, 0, 0, 0),
            Err(Error::OutOfBounds { resource: Resource::Health, value: 101, .. })
        ));
        assert!(GameState::new(0, -1, 0, 0, 0).is_err());
        // unbounded resources may be negative
        assert!(GameState::new(-500, 50, -3, -4, -10).is_ok());
    }

    #[test]
    fn test_value_of_defaults_to_zero() {
        let state = GameState::new(1000, 50, 40, 30, 5).unwrap();
        assert_eq!(state.value_of("money"), 1000);
        assert_eq!(state.value_of("passive_income"), 5);
        assert_eq!(state.value_of("age"), 0);
        assert_eq!(state.value_of("charisma"), 0);

        let aged = state.with_age(42);
        assert_eq!(aged.value_of("age"), 42);
    }

    #[test]
    fn test_with_resource_leaves_original_untouched() {
        let state = GameState::new(1000, 50, 40, 30, 5).unwrap();
        let next = state.with_resource(Resource::Money, 10);
        assert_eq!(state.money(), 1000);
        assert_eq!(next.money(), 10);
        assert_eq!(next.health(), 50);
    }

    #[test]
    fn test_deserialize_checks_bounds() {
        let ok: GameState = serde_json::from_str(
            r#"{"money": 1000, "health": 50, "relations": 50, "satisfaction": 50,
                "passive_income": 0, "age": 30, "job": "baker"}"#,
        )
        .unwrap();
        assert_eq!(ok.age(), Some(30));
        assert_eq!(ok.job(), Some("baker"));
        assert_eq!(ok.education(), None);

        let bad = serde_json::from_str::<GameState>(
            r#"{"money":1000,"health":150,"relations":50,"satisfaction":50,"passive_income":0}"#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn test_is_past_age() {
        let state = GameState::new(0, 50, 0, 0, 0).unwrap();
        assert!(!state.is_past_age(80));
        assert!(!state.clone().with_age(80).is_past_age(80));
        assert!(state.with_age(81).is_past_age(80));
    }
}
