//! Lifepath Core - State and rules for a life-simulation turn engine
//!
//! This crate provides the pure, synchronous half of the engine:
//! - The player's `GameState` and the closed `Resource` vocabulary
//! - Event and session identifiers
//! - Range conditions (`satisfies`) gating event eligibility
//! - Bounded effect application (`apply`, `apply_decision`)
//! - A deterministic, seedable RNG behind the `RandomSource` trait
//! - Decision options, the append-only `GameHistory` and the validator
//!   that gates options produced by an external text generator
//!
//! ## Bounds
//!
//! Only `health` carries a declared bound (`[0, 100]`). Every other resource
//! receives the raw sum of its deltas and may go negative.
//!
//! Nothing in this crate blocks, performs I/O or holds shared mutable state.

mod condition;
mod effect;
mod error;
mod history;
mod identity;
mod option;
mod resource;
mod rng;
mod state;
pub mod validate;

pub use condition::{satisfies, Conditions, Range};
pub use effect::{apply, apply_decision, Effects};
pub use error::{Error, Result, ValidationError};
pub use history::GameHistory;
pub use identity::{EventId, SessionId};
pub use option::{CurrencyChange, DecisionOption, ProposedOptions};
pub use resource::{Bounds, Resource, HEALTH_MAX, HEALTH_MIN};
pub use rng::{GameRng, RandomSource};
pub use state::GameState;
pub use validate::{validate_options, OptionsValidator};
