//! Append-only record of the options a player has chosen

use crate::DecisionOption;
use serde::{Deserialize, Serialize};

/// Ordered sequence of chosen decision options
///
/// There is no way to edit or remove an entry once recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameHistory {
    options: Vec<DecisionOption>,
}

impl GameHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chosen option
    pub fn record(&mut self, option: DecisionOption) {
        self.options.push(option);
    }

    /// All chosen options, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &DecisionOption> {
        self.options.iter()
    }

    /// The last `n` chosen options, oldest first
    pub fn recent(&self, n: usize) -> &[DecisionOption] {
        let start = self.options.len().saturating_sub(n);
        &self.options[start..]
    }

    /// Whether an option with this name (case-insensitive) was already chosen
    pub fn contains_option(&self, name: &str) -> bool {
        let name = name.trim();
        self.options
            .iter()
            .any(|option| option.name.trim().eq_ignore_ascii_case(name))
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CurrencyChange, Resource};

    fn option(name: &str) -> DecisionOption {
        DecisionOption {
            name: name.into(),
            price: 0,
            currency: Resource::Satisfaction,
            results: vec![CurrencyChange::new(Resource::Relations, 5)],
        }
    }

    #[test]
    fn test_record_keeps_order() {
        let mut history = GameHistory::new();
        history.record(option("Move abroad"));
        history.record(option("Adopt a dog"));
        history.record(option("Start a band"));

        let names: Vec<_> = history.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["Move abroad", "Adopt a dog", "Start a band"]);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_recent() {
        let mut history = GameHistory::new();
        assert!(history.recent(2).is_empty());
        history.record(option("a"));
        history.record(option("b"));
        history.record(option("c"));
        assert_eq!(history.recent(2).len(), 2);
        assert_eq!(history.recent(2)[0].name, "b");
        assert_eq!(history.recent(10).len(), 3);
    }

    #[test]
    fn test_contains_option_ignores_case() {
        let mut history = GameHistory::new();
        history.record(option("Adopt a dog"));
        assert!(history.contains_option("adopt a DOG "));
        assert!(!history.contains_option("Adopt a cat"));
    }
}
