//! SessionHub - Registry of open game sessions
//!
//! The hub holds the single catalog handle and hands each new session a
//! clone of it. Sessions are owned exclusively by the hub; callers borrow
//! them by ID for the duration of one turn.

use crate::config::SessionConfig;
use crate::error::{Error, Result};
use crate::session::Session;
use lifepath_core::SessionId;
use lifepath_script::EventCatalog;
use std::collections::HashMap;
use std::sync::Arc;

/// Owner of every open session
///
/// ```
/// use lifepath_script::EventCatalog;
/// use lifepath_session::{SessionConfig, SessionHub};
///
/// let mut hub = SessionHub::new(EventCatalog::default().into_shared(), SessionConfig::default());
/// let id = hub.open();
/// assert!(hub.get(id).is_ok());
/// hub.close(id).unwrap();
/// assert!(hub.get(id).is_err());
/// ```
#[derive(Debug)]
pub struct SessionHub {
    catalog: Arc<EventCatalog>,
    sessions: HashMap<SessionId, Session>,
    next_id: u64,
    config: SessionConfig,
}

impl SessionHub {
    /// Create a hub serving the given catalog
    pub fn new(catalog: Arc<EventCatalog>, config: SessionConfig) -> Self {
        Self {
            catalog,
            sessions: HashMap::new(),
            next_id: 1,
            config,
        }
    }

    /// Open a session with the hub's default configuration
    ///
    /// Each session's seed is offset by its ID so two sessions opened from
    /// the same hub draw different sequences.
    pub fn open(&mut self) -> SessionId {
        let seed = self.config.seed.wrapping_add(self.next_id);
        self.open_with(self.config.clone().with_seed(seed))
    }

    /// Open a session with an explicit configuration
    pub fn open_with(&mut self, config: SessionConfig) -> SessionId {
        let id = SessionId::new(self.next_id);
        self.next_id += 1;
        let session = Session::new(id, Arc::clone(&self.catalog), config);
        self.sessions.insert(id, session);
        id
    }

    /// Borrow a session
    pub fn get(&self, id: SessionId) -> Result<&Session> {
        self.sessions.get(&id).ok_or(Error::SessionNotFound(id))
    }

    /// Borrow a session mutably, for a turn
    pub fn get_mut(&mut self, id: SessionId) -> Result<&mut Session> {
        self.sessions.get_mut(&id).ok_or(Error::SessionNotFound(id))
    }

    /// Close a session, returning it to the caller
    pub fn close(&mut self, id: SessionId) -> Result<Session> {
        let session = self.sessions.remove(&id).ok_or(Error::SessionNotFound(id))?;
        tracing::info!(session = %id, fired = session.triggered().len(), "session closed");
        Ok(session)
    }

    /// The shared catalog
    pub fn catalog(&self) -> &Arc<EventCatalog> {
        &self.catalog
    }

    /// Number of open sessions
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
