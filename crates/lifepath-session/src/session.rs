//! Event selection for one game session

use crate::config::SessionConfig;
use crate::triggered::TriggeredEventSet;
use lifepath_core::{apply, satisfies, EventId, GameRng, GameState, RandomSource, SessionId};
use lifepath_script::{EventCatalog, EventDef, EventSummary};
use std::fmt;
use std::sync::Arc;

/// Why a turn passed without an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoEventReason {
    /// No unfired event had its conditions met
    NothingEligible,
    /// Some events were eligible but none passed its chance gate
    GateRejected { candidates: usize },
}

impl fmt::Display for NoEventReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoEventReason::NothingEligible => write!(f, "no eligible events"),
            NoEventReason::GateRejected { candidates } => {
                write!(f, "none of {} eligible events occurred", candidates)
            }
        }
    }
}

/// Result of one selection turn
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    NoEvent {
        reason: NoEventReason,
    },
    Occurred {
        event: EventDef,
        new_state: GameState,
    },
}

impl EventOutcome {
    pub fn occurred(&self) -> bool {
        matches!(self, EventOutcome::Occurred { .. })
    }

    /// The fired event, if any
    pub fn event(&self) -> Option<&EventDef> {
        match self {
            EventOutcome::Occurred { event, .. } => Some(event),
            EventOutcome::NoEvent { .. } => None,
        }
    }

    /// The state after the fired event's effects, if any
    pub fn new_state(&self) -> Option<&GameState> {
        match self {
            EventOutcome::Occurred { new_state, .. } => Some(new_state),
            EventOutcome::NoEvent { .. } => None,
        }
    }

    /// One-line human readable description
    pub fn message(&self) -> String {
        match self {
            EventOutcome::Occurred { event, .. } => {
                format!("Event: {} - {}", event.name, event.description)
            }
            EventOutcome::NoEvent { reason } => format!("No event this turn ({})", reason),
        }
    }
}

/// A game session: fired-event memory, RNG and a catalog handle
///
/// The RNG is a type parameter so tests can script exact draws; production
/// sessions use the seeded [`GameRng`].
#[derive(Debug)]
pub struct Session<R = GameRng> {
    id: SessionId,
    catalog: Arc<EventCatalog>,
    triggered: TriggeredEventSet,
    rng: R,
    config: SessionConfig,
}

impl Session<GameRng> {
    /// Create a session seeded from its configuration
    pub fn new(id: SessionId, catalog: Arc<EventCatalog>, config: SessionConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self::with_rng(id, catalog, config, rng)
    }
}

impl<R: RandomSource> Session<R> {
    /// Create a session drawing from the given random source
    pub fn with_rng(
        id: SessionId,
        catalog: Arc<EventCatalog>,
        config: SessionConfig,
        rng: R,
    ) -> Self {
        tracing::info!(session = %id, events = catalog.len(), "session opened");
        Self {
            id,
            catalog,
            triggered: TriggeredEventSet::new(),
            rng,
            config,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Arc<EventCatalog> {
        &self.catalog
    }

    /// Events this session has already fired
    pub fn triggered(&self) -> &TriggeredEventSet {
        &self.triggered
    }

    /// Record an event as fired without running it (restoring a saved game)
    pub fn mark_triggered(&mut self, name: impl Into<EventId>) {
        self.triggered.insert(name.into());
    }

    /// Whether the player is past the configured terminal age
    pub fn is_over(&self, state: &GameState) -> bool {
        state.is_past_age(self.config.terminal_age)
    }

    /// Preview the eligible events without drawing or firing anything
    pub fn list_available(&self, state: &GameState) -> Vec<EventSummary> {
        eligible(&self.catalog, &self.triggered, state)
            .map(EventDef::summary)
            .collect()
    }

    /// Select at most one event for this turn and apply it
    ///
    /// On success the event is marked as fired and will not be selected
    /// again until [`Session::reset`].
    pub fn choose_event(&mut self, state: &GameState) -> EventOutcome {
        let catalog = Arc::clone(&self.catalog);
        let candidates: Vec<&EventDef> = eligible(&catalog, &self.triggered, state).collect();
        if candidates.is_empty() {
            tracing::debug!(session = %self.id, "no eligible events");
            return EventOutcome::NoEvent {
                reason: NoEventReason::NothingEligible,
            };
        }

        let rng = &mut self.rng;
        let survivors: Vec<&EventDef> = candidates
            .iter()
            .copied()
            .filter(|event| rng.sample() < event.chance)
            .collect();

        tracing::debug!(
            session = %self.id,
            candidates = candidates.len(),
            survivors = survivors.len(),
            "chance gate applied"
        );

        if survivors.is_empty() {
            return EventOutcome::NoEvent {
                reason: NoEventReason::GateRejected {
                    candidates: candidates.len(),
                },
            };
        }

        let event = survivors[rng.pick_index(survivors.len())].clone();
        self.triggered.insert(event.name.clone());
        let new_state = apply(state, &event.effects);

        tracing::info!(
            session = %self.id,
            event = %event.name,
            kind = %event.kind,
            "event occurred"
        );
        EventOutcome::Occurred { event, new_state }
    }

    /// Run `turns` selections, feeding each new state into the next turn
    pub fn simulate(&mut self, state: &GameState, turns: usize) -> Vec<EventOutcome> {
        let mut current = state.clone();
        let mut outcomes = Vec::with_capacity(turns);

        for _ in 0..turns {
            let outcome = self.choose_event(&current);
            if let Some(next) = outcome.new_state() {
                current = next.clone();
            }
            outcomes.push(outcome);
        }

        outcomes
    }

    /// Make every event selectable again
    pub fn reset(&mut self) {
        tracing::info!(
            session = %self.id,
            cleared = self.triggered.len(),
            "triggered events reset"
        );
        self.triggered.clear();
    }
}

/// Unfired catalog events whose conditions hold for `state`
fn eligible<'a>(
    catalog: &'a EventCatalog,
    triggered: &'a TriggeredEventSet,
    state: &'a GameState,
) -> impl Iterator<Item = &'a EventDef> + 'a {
    catalog
        .iter()
        .filter(move |event| !triggered.contains(&event.name))
        .filter(move |event| satisfies(state, &event.conditions))
}
