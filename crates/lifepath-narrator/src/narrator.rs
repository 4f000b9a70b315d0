//! Narrator - collaborator calls with timeout, retry and fallback
//!
//! Every public operation comes in two flavours. The `try_*` methods make a
//! single bounded call and report what went wrong. The plain methods never
//! fail: they log the error at `warn` and return deterministic fallback
//! content tagged with [`Source::Fallback`].

use crate::config::NarratorConfig;
use crate::error::CollaboratorError;
use crate::generator::{Offline, TextGenerator};
use crate::json::extract_json;
use crate::prompt;
use lifepath_core::{GameHistory, GameState, OptionsValidator, ProposedOptions, Resource};
use lifepath_script::EventDef;
use serde::Deserialize;
use std::fmt::Write;
use std::sync::Arc;

/// Where a piece of narrated content came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Produced by the text generator and accepted
    Generated,
    /// The generator failed; deterministic content was used instead
    Fallback,
    /// No call was made
    Skipped,
}

/// Content plus its provenance
#[derive(Debug, Clone, PartialEq)]
pub struct Narrated<T> {
    pub value: T,
    pub source: Source,
}

impl<T> Narrated<T> {
    pub fn generated(value: T) -> Self {
        Self {
            value,
            source: Source::Generated,
        }
    }

    pub fn fallback(value: T) -> Self {
        Self {
            value,
            source: Source::Fallback,
        }
    }

    pub fn skipped(value: T) -> Self {
        Self {
            value,
            source: Source::Skipped,
        }
    }

    pub fn is_generated(&self) -> bool {
        self.source == Source::Generated
    }
}

/// The name/description pair a generator may rewrite
#[derive(Debug, Deserialize)]
struct Variation {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// Asynchronous boundary to the text generator
#[derive(Clone)]
pub struct Narrator {
    generator: Arc<dyn TextGenerator>,
    config: NarratorConfig,
}

impl Narrator {
    pub fn new(generator: Arc<dyn TextGenerator>, config: NarratorConfig) -> Self {
        Self { generator, config }
    }

    /// A narrator that always falls back
    pub fn offline() -> Self {
        Self::new(Arc::new(Offline), NarratorConfig::default())
    }

    pub fn config(&self) -> &NarratorConfig {
        &self.config
    }

    async fn call(&self, prompt: &str) -> Result<String, CollaboratorError> {
        match tokio::time::timeout(self.config.timeout, self.generator.generate(prompt)).await {
            Ok(result) => result,
            Err(_) => Err(CollaboratorError::Timeout),
        }
    }

    /// Ask for narrative text about an event that just fired
    pub async fn try_describe_event(
        &self,
        event: &EventDef,
        state: &GameState,
    ) -> Result<String, CollaboratorError> {
        let text = self.call(&prompt::describe_event(event, state)).await?;
        non_empty(text)
    }

    /// Narrative text for an event, or its catalog description
    pub async fn describe_event(&self, event: &EventDef, state: &GameState) -> Narrated<String> {
        match self.try_describe_event(event, state).await {
            Ok(text) => Narrated::generated(text),
            Err(e) => {
                tracing::warn!(
                    event = %event.name,
                    error = %e,
                    "event narration fell back to catalog text"
                );
                Narrated::fallback(event.description.clone())
            }
        }
    }

    /// One attempt at generating `count` valid, non-repeating options
    pub async fn try_propose_options(
        &self,
        state: &GameState,
        history: &GameHistory,
        count: usize,
    ) -> Result<ProposedOptions, CollaboratorError> {
        let raw = self.call(&prompt::propose_options(state, history, count)).await?;
        let json = extract_json(&raw)
            .ok_or_else(|| CollaboratorError::Malformed("no JSON in response".into()))?;
        Ok(OptionsValidator::new(count)
            .forbid_repeats(history)
            .validate_str(json)?)
    }

    /// Options for the next decision, or none
    ///
    /// A `count` of zero means the game is over: no call is made. Parse and
    /// validation failures are retried up to `max_retries` times; anything
    /// else falls back to an empty list at once.
    pub async fn propose_options(
        &self,
        state: &GameState,
        history: &GameHistory,
        count: usize,
    ) -> Narrated<ProposedOptions> {
        if count == 0 {
            return Narrated::skipped(ProposedOptions::empty());
        }

        let attempts = self.config.max_retries.saturating_add(1);
        for attempt in 1..=attempts {
            match self.try_propose_options(state, history, count).await {
                Ok(options) => {
                    if attempt > 1 {
                        tracing::info!(attempt, "options accepted after retry");
                    }
                    return Narrated::generated(options);
                }
                Err(e) if e.is_retryable() && attempt < attempts => {
                    tracing::warn!(
                        attempt,
                        max_retries = self.config.max_retries,
                        error = %e,
                        "options rejected, retrying"
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        attempt,
                        error = %e,
                        "option proposal fell back to an empty list"
                    );
                    break;
                }
            }
        }
        Narrated::fallback(ProposedOptions::empty())
    }

    /// Ask for a personalised name and description for an event
    ///
    /// Only the text is taken from the answer; conditions, effects and
    /// chance stay as in the catalog.
    pub async fn try_vary_event(
        &self,
        event: &EventDef,
        state: &GameState,
    ) -> Result<EventDef, CollaboratorError> {
        let raw = self.call(&prompt::vary_event(event, state)).await?;
        let json = extract_json(&raw)
            .ok_or_else(|| CollaboratorError::Malformed("no JSON in response".into()))?;
        let variation: Variation =
            serde_json::from_str(json).map_err(|e| CollaboratorError::Malformed(e.to_string()))?;

        let mut varied = event.clone();
        if let Some(name) = variation.name.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            varied.name = name.into();
        }
        if let Some(description) = variation
            .description
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            varied.description = description.to_string();
        }
        Ok(varied)
    }

    /// A personalised event, or the catalog event unchanged
    pub async fn vary_event(&self, event: &EventDef, state: &GameState) -> Narrated<EventDef> {
        match self.try_vary_event(event, state).await {
            Ok(varied) => Narrated::generated(varied),
            Err(e) => {
                tracing::warn!(
                    event = %event.name,
                    error = %e,
                    "event variation fell back to catalog event"
                );
                Narrated::fallback(event.clone())
            }
        }
    }

    pub async fn try_summarize(
        &self,
        history: &GameHistory,
        state: &GameState,
    ) -> Result<String, CollaboratorError> {
        let text = self.call(&prompt::summarize(history, state)).await?;
        non_empty(text)
    }

    /// End-of-game summary
    pub async fn summarize(&self, history: &GameHistory, state: &GameState) -> Narrated<String> {
        match self.try_summarize(history, state).await {
            Ok(text) => Narrated::generated(text),
            Err(e) => {
                tracing::warn!(error = %e, "summary fell back to plain recap");
                Narrated::fallback(plain_summary(history, state))
            }
        }
    }
}

impl std::fmt::Debug for Narrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Narrator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn non_empty(text: String) -> Result<String, CollaboratorError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CollaboratorError::Malformed("empty text".into()));
    }
    Ok(trimmed.to_string())
}

/// Deterministic recap of a finished game
pub fn plain_summary(history: &GameHistory, state: &GameState) -> String {
    let mut summary = match state.age() {
        Some(age) => format!("Your life ended at age {}.", age),
        None => String::from("Your life has ended."),
    };

    if history.is_empty() {
        summary.push_str(" You made no choices along the way.");
    } else {
        let names: Vec<&str> = history.iter().map(|o| o.name.as_str()).collect();
        let _ = write!(
            summary,
            " You made {} choices: {}.",
            history.len(),
            names.join(", ")
        );
    }

    let totals: Vec<String> = Resource::ALL
        .iter()
        .map(|&r| format!("{} {}", r, state.get(r)))
        .collect();
    let _ = write!(summary, " Final standing: {}.", totals.join(", "));
    summary
}
