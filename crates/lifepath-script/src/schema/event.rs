//! Event definition schema

use lifepath_core::{Conditions, Effects, EventId, Range};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether an event helps or hurts the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Positive,
    Negative,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventType::Positive => write!(f, "positive"),
            EventType::Negative => write!(f, "negative"),
        }
    }
}

/// Definition of a life event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDef {
    /// Unique name, also the key of the triggered set
    pub name: EventId,
    /// Positive or negative
    #[serde(rename = "type", alias = "kind")]
    pub kind: EventType,
    /// Base description, used whenever generated narration is unavailable
    #[serde(default)]
    pub description: String,
    /// Ranges the state must satisfy for the event to be eligible
    #[serde(default)]
    pub conditions: Conditions,
    /// Deltas applied when the event fires
    #[serde(default)]
    pub effects: Effects,
    /// Probability in [0, 1] of passing the per-turn gate
    #[serde(default)]
    pub chance: f64,
}

/// Dry-run view of an eligible event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSummary {
    pub name: EventId,
    #[serde(rename = "type")]
    pub kind: EventType,
    pub description: String,
    pub chance: f64,
    pub effects: Effects,
}

impl EventDef {
    /// Create a new event definition that never fires until given a chance
    pub fn new(name: impl Into<EventId>, kind: EventType) -> Self {
        Self {
            name: name.into(),
            kind,
            description: String::new(),
            conditions: Conditions::new(),
            effects: Effects::new(),
            chance: 0.0,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_condition(mut self, field: impl Into<String>, range: Range) -> Self {
        self.conditions.insert(field.into(), range);
        self
    }

    pub fn with_effect(mut self, resource: impl Into<String>, delta: i64) -> Self {
        self.effects.insert(resource.into(), delta);
        self
    }

    pub fn with_chance(mut self, chance: f64) -> Self {
        self.chance = chance;
        self
    }

    /// Summary used by the availability preview
    pub fn summary(&self) -> EventSummary {
        EventSummary {
            name: self.name.clone(),
            kind: self.kind,
            description: self.description.clone(),
            chance: self.chance,
            effects: self.effects.clone(),
        }
    }
}

/// A collection of event definitions, as stored in a catalog file
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EventDefs {
    pub events: Vec<EventDef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_def_basic() {
        let event = EventDef::new("flu", EventType::Negative)
            .with_condition("health", Range::at_most(60))
            .with_effect("health", -10)
            .with_chance(0.3);
        assert_eq!(event.name.as_str(), "flu");
        assert_eq!(event.effects["health"], -10);
        assert_eq!(event.conditions["health"].max, Some(60));
    }

    #[test]
    fn test_event_def_ron() {
        let ron_str = r#"
        (
            name: "promotion",
            kind: positive,
            description: "Your boss noticed your work.",
            conditions: {"satisfaction": (min: Some(40))},
            effects: {"money": 2000, "satisfaction": 5},
            chance: 0.2,
        )
        "#;

        let def: EventDef = ron::from_str(ron_str).unwrap();
        assert_eq!(def.name.as_str(), "promotion");
        assert_eq!(def.kind, EventType::Positive);
        assert_eq!(def.effects["money"], 2000);
        assert_eq!(def.conditions["satisfaction"], Range::at_least(40));
    }

    #[test]
    fn test_event_def_json_uses_type_key() {
        let json = r#"{
            "name": "burnout",
            "type": "negative",
            "description": "Too many late nights.",
            "conditions": {"satisfaction": {"max": 30}},
            "effects": {"money": 0, "health": -15, "relations": -5,
                        "satisfaction": -10, "passive_income": 0},
            "chance": 0.4
        }"#;
        let def: EventDef = serde_json::from_str(json).unwrap();
        assert_eq!(def.kind, EventType::Negative);
        assert_eq!(def.effects.len(), 5);

        let back = serde_json::to_value(def.summary()).unwrap();
        assert_eq!(back["type"], "negative");
        assert_eq!(back["name"], "burnout");
    }
}
