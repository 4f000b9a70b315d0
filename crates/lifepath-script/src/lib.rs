//! Lifepath Script - Event catalog loader and schema definitions
//!
//! Loads the event catalog from side files:
//! - RON (`.ron`), the native format
//! - JSON (`.json`), the format of legacy `event.json` catalogs
//!
//! The catalog is loaded once at startup and shared read-only afterwards
//! (see [`EventCatalog::into_shared`]). Any load error is fatal.

mod catalog;
mod error;
mod loader;
mod schema;

pub use catalog::EventCatalog;
pub use error::{Error, Result};
pub use loader::Loader;
pub use schema::event::{EventDef, EventDefs, EventSummary, EventType};
