//! The loaded event catalog

use crate::schema::event::EventDef;
use indexmap::IndexMap;
use lifepath_core::EventId;
use std::sync::Arc;

/// Immutable collection of event definitions, keyed by name
///
/// Iteration follows load order, which keeps seeded event selection
/// reproducible.
#[derive(Debug, Default, Clone)]
pub struct EventCatalog {
    events: IndexMap<EventId, EventDef>,
}

impl EventCatalog {
    pub(crate) fn from_map(events: IndexMap<EventId, EventDef>) -> Self {
        Self { events }
    }

    /// Build a catalog directly from definitions, for tests and embedding
    ///
    /// Later definitions replace earlier ones with the same name. Use
    /// [`crate::Loader`] for files, which rejects duplicates.
    pub fn from_events(events: impl IntoIterator<Item = EventDef>) -> Self {
        Self {
            events: events
                .into_iter()
                .map(|event| (event.name.clone(), event))
                .collect(),
        }
    }

    /// Look up an event by name
    pub fn get(&self, name: &EventId) -> Option<&EventDef> {
        self.events.get(name)
    }

    /// All events, in load order
    pub fn iter(&self) -> impl Iterator<Item = &EventDef> {
        self.events.values()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Freeze the catalog behind a shared handle
    pub fn into_shared(self) -> Arc<EventCatalog> {
        Arc::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EventType;

    #[test]
    fn test_iteration_follows_insertion_order() {
        let catalog = EventCatalog::from_events([
            EventDef::new("wedding", EventType::Positive),
            EventDef::new("accident", EventType::Negative),
            EventDef::new("inheritance", EventType::Positive),
        ]);
        let names: Vec<_> = catalog.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["wedding", "accident", "inheritance"]);
        assert!(catalog.get(&EventId::new("accident")).is_some());
        assert!(catalog.get(&EventId::new("divorce")).is_none());
    }
}
