//! Lifepath Narrator - Boundary to the text-generation collaborator
//!
//! The engine never waits on text generation while it mutates state. A turn
//! first selects an event and applies its effects synchronously
//! ([`lifepath_session::Session::choose_event`]); only then does
//! [`play_turn`] await the collaborator for:
//!
//! - narration of the fired event
//! - the next set of decision options
//!
//! Every collaborator call is bounded by a timeout. Failures of any kind
//! (timeout, transport, unparseable or invalid output) are logged and
//! replaced by a deterministic fallback, so dropping or cancelling a turn
//! future never loses or corrupts state.

mod config;
mod error;
mod generator;
mod json;
mod narrator;
mod prompt;
mod turn;

pub use config::NarratorConfig;
pub use error::CollaboratorError;
pub use generator::{GeminiClient, Offline, TextGenerator, DEFAULT_GEMINI_MODEL};
pub use json::extract_json;
pub use narrator::{plain_summary, Narrated, Narrator, Source};
pub use turn::{play_turn, TurnReport};
