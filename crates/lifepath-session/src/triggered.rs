//! Names of events a session has already fired

use indexmap::IndexSet;
use lifepath_core::EventId;
use serde::{Deserialize, Serialize};

/// Grows monotonically until [`TriggeredEventSet::clear`]
///
/// Kept in firing order so a saved session reads as a timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TriggeredEventSet {
    names: IndexSet<EventId>,
}

impl TriggeredEventSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an event as fired; returns false if it already was
    pub fn insert(&mut self, name: EventId) -> bool {
        self.names.insert(name)
    }

    pub fn contains(&self, name: &EventId) -> bool {
        self.names.contains(name)
    }

    /// Forget every fired event
    pub fn clear(&mut self) {
        self.names.clear();
    }

    /// Fired events, in firing order
    pub fn iter(&self) -> impl Iterator<Item = &EventId> {
        self.names.iter()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_idempotent() {
        let mut set = TriggeredEventSet::new();
        assert!(set.insert("flu".into()));
        assert!(!set.insert("flu".into()));
        assert_eq!(set.len(), 1);
        assert!(set.contains(&"flu".into()));
    }

    #[test]
    fn test_clear_and_order() {
        let mut set = TriggeredEventSet::new();
        set.insert("b".into());
        set.insert("a".into());
        let order: Vec<_> = set.iter().map(EventId::as_str).collect();
        assert_eq!(order, ["b", "a"]);

        set.clear();
        assert!(set.is_empty());
        assert!(!set.contains(&"a".into()));
    }
}
