//! Applying deltas to game state
//!
//! Effects are the "write" side of an event: a signed delta per resource
//! (or per year of age).
//! Application is saturating and clamps bounded resources, so for any delta
//! `clamp(clamp(x) + d) == clamp(x + d)` holds while the sum stays in range
//! of `i64`.

use crate::{DecisionOption, GameState, Resource};
use indexmap::IndexMap;

/// Resource name to signed delta, in catalog order
pub type Effects = IndexMap<String, i64>;

/// Add `delta` to one resource, clamping to its declared bounds
fn add_clamped(state: &GameState, resource: Resource, delta: i64) -> GameState {
    let raw = state.get(resource).saturating_add(delta);
    let value = match resource.bounds() {
        Some(bounds) => bounds.clamp(raw),
        None => raw,
    };
    state.with_resource(resource, value)
}

/// Apply an effect map, returning a new state
///
/// Resource keys and `age` receive their delta; every other key is
/// ignored. The input state is left untouched.
pub fn apply(state: &GameState, effects: &Effects) -> GameState {
    effects
        .iter()
        .fold(state.clone(), |acc, (name, &delta)| match Resource::parse(name) {
            Some(resource) => add_clamped(&acc, resource, delta),
            None if name == "age" => acc.with_age_delta(delta),
            None => acc,
        })
}

/// Pay for a decision option and apply its results
///
/// The price is taken from the option's currency first, then each result is
/// applied in order with the same clamping as [`apply`].
pub fn apply_decision(state: &GameState, option: &DecisionOption) -> GameState {
    let paid = add_clamped(state, option.currency, option.price.saturating_neg());
    option
        .results
        .iter()
        .fold(paid, |acc, change| add_clamped(&acc, change.currency, change.amount))
}
