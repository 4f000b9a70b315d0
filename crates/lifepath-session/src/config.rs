//! Session configuration
//!
//! Can be built in code or read from a RON file:
//!
//! ```
//! use lifepath_session::SessionConfig;
//!
//! let config = SessionConfig::from_ron_str("(seed: 7, terminal_age: 90)").unwrap();
//! assert_eq!(config.seed, 7);
//! assert_eq!(config.terminal_age, 90);
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Default age after which no more decision options are offered
pub const DEFAULT_TERMINAL_AGE: u32 = 80;

/// Default RNG seed for new sessions
pub const DEFAULT_SEED: u64 = 12345;

/// Configuration for a game session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seed for the session's RNG
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Once the player's age is beyond this, the game is over
    #[serde(default = "default_terminal_age")]
    pub terminal_age: u32,
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_terminal_age() -> u32 {
    DEFAULT_TERMINAL_AGE
}

impl SessionConfig {
    /// Parse a configuration from RON; missing fields take defaults
    pub fn from_ron_str(content: &str) -> Result<Self> {
        Ok(ron::from_str(content)?)
    }

    /// Same configuration with another seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Same configuration with another terminal age
    pub fn with_terminal_age(mut self, age: u32) -> Self {
        self.terminal_age = age;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            terminal_age: DEFAULT_TERMINAL_AGE,
        }
    }
}
