//! One full turn: select, apply, then narrate

use crate::narrator::{Narrated, Narrator, Source};
use lifepath_core::{GameHistory, GameState, ProposedOptions, RandomSource};
use lifepath_session::{EventOutcome, Session};

/// Everything a front end needs to render a turn
#[derive(Debug, Clone, PartialEq)]
pub struct TurnReport {
    /// What the selector decided
    pub outcome: EventOutcome,
    /// Narration of the fired event; `None` when nothing happened
    pub narration: Option<Narrated<String>>,
    /// Choices for the player's next decision
    pub options: Narrated<ProposedOptions>,
    /// State after the fired event's effects
    pub state: GameState,
}

impl TurnReport {
    /// Whether the game ended this turn
    pub fn is_final(&self) -> bool {
        self.options.source == Source::Skipped
    }
}

/// Play one turn of `session` starting from `state`
///
/// Event selection and effect application complete before the first await,
/// so the returned future can be dropped at any point without leaving the
/// session half-updated.
pub async fn play_turn<R: RandomSource>(
    session: &mut Session<R>,
    narrator: &Narrator,
    state: &GameState,
    history: &GameHistory,
) -> TurnReport {
    let outcome = session.choose_event(state);
    let new_state = outcome.new_state().cloned().unwrap_or_else(|| state.clone());

    let narration = match outcome.event() {
        Some(event) => Some(narrator.describe_event(event, &new_state).await),
        None => None,
    };

    let count = if session.is_over(&new_state) {
        tracing::info!(session = %session.id(), "terminal age reached");
        0
    } else {
        narrator.config().option_count
    };
    let options = narrator.propose_options(&new_state, history, count).await;

    TurnReport {
        outcome,
        narration,
        options,
        state: new_state,
    }
}
