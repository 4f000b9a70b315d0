//! Lifepath Session - Event selection owned by a game session
//!
//! Each [`Session`] owns its own [`TriggeredEventSet`] and RNG and holds a
//! shared read-only handle to the [`EventCatalog`](lifepath_script::EventCatalog).
//! Sessions never share mutable state, so two players cannot see each
//! other's fired events.
//!
//! ## Architecture
//!
//! ```text
//! SessionHub (owns sessions, one catalog handle)
//!  │
//!  ├── Arc<EventCatalog>   ← loaded once, read by every session
//!  │
//!  └── Session[]
//!       ├── TriggeredEventSet
//!       └── RNG
//! ```
//!
//! ## Selection
//!
//! 1. Candidates are catalog events not yet fired whose conditions hold.
//! 2. Each candidate independently passes a Bernoulli gate with its `chance`.
//! 3. One survivor is picked uniformly, marked as fired and its effects applied.

mod config;
mod error;
mod hub;
mod session;
mod triggered;

pub use config::SessionConfig;
pub use error::{Error, Result};
pub use hub::SessionHub;
pub use session::{EventOutcome, NoEventReason, Session};
pub use triggered::TriggeredEventSet;
