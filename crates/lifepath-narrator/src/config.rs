//! Narrator configuration

use std::time::Duration;

/// Default time allowed for one collaborator call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Default number of retries after a failed option proposal
pub const DEFAULT_MAX_RETRIES: u32 = 1;

/// Default number of decision options per turn
pub const DEFAULT_OPTION_COUNT: usize = 3;

/// Timeout, retry and sizing policy for collaborator calls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarratorConfig {
    /// Upper bound on a single collaborator call
    pub timeout: Duration,
    /// Extra attempts after the first when options fail to parse or validate
    pub max_retries: u32,
    /// Options requested per turn
    pub option_count: usize,
}

impl NarratorConfig {
    /// Read overrides from `LIFEPATH_TIMEOUT_SECS`, `LIFEPATH_MAX_RETRIES`
    /// and `LIFEPATH_OPTION_COUNT`
    ///
    /// Unset or unparseable variables keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            timeout: parse_var(&lookup, "LIFEPATH_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            max_retries: parse_var(&lookup, "LIFEPATH_MAX_RETRIES")
                .unwrap_or(defaults.max_retries),
            option_count: parse_var(&lookup, "LIFEPATH_OPTION_COUNT")
                .filter(|&count: &usize| count > 0)
                .unwrap_or(defaults.option_count),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_option_count(mut self, option_count: usize) -> Self {
        self.option_count = option_count;
        self
    }
}

impl Default for NarratorConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            option_count: DEFAULT_OPTION_COUNT,
        }
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparseable setting");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(NarratorConfig::from_lookup(lookup(&[])), NarratorConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = NarratorConfig::from_lookup(lookup(&[
            ("LIFEPATH_TIMEOUT_SECS", "5"),
            ("LIFEPATH_MAX_RETRIES", "0"),
            ("LIFEPATH_OPTION_COUNT", "4"),
        ]));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.max_retries, 0);
        assert_eq!(config.option_count, 4);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = NarratorConfig::from_lookup(lookup(&[
            ("LIFEPATH_TIMEOUT_SECS", "soon"),
            ("LIFEPATH_OPTION_COUNT", "0"),
        ]));
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.option_count, DEFAULT_OPTION_COUNT);
    }
}
