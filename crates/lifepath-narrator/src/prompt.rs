//! Prompt construction
//!
//! Prompts are plain English. Each one restates the player's situation so the
//! generator needs no memory between calls.

use lifepath_core::{GameHistory, GameState, Resource};
use lifepath_script::EventDef;
use std::fmt::Write;

/// How many past choices are quoted back to the generator
pub const HISTORY_WINDOW: usize = 5;

pub fn describe_event(event: &EventDef, state: &GameState) -> String {
    let mut prompt = String::from(
        "You narrate a life simulation game. In two or three sentences, tell the player \
         what just happened to them. Reply with plain text only.\n\n",
    );
    push_state(&mut prompt, state);
    push_event(&mut prompt, event);
    prompt
}

pub fn propose_options(state: &GameState, history: &GameHistory, count: usize) -> String {
    let mut prompt = format!(
        "You design choices for a life simulation game. Propose exactly {count} options \
         the player could take this year.\n\n"
    );
    push_state(&mut prompt, state);

    let recent = history.recent(HISTORY_WINDOW);
    if !recent.is_empty() {
        prompt.push_str("Recent choices (do not repeat these names):\n");
        for option in recent {
            let _ = writeln!(prompt, "- {}", option.name);
        }
        prompt.push('\n');
    }

    let currencies: Vec<&str> = Resource::ALL.iter().map(Resource::name).collect();
    let _ = write!(
        prompt,
        "Answer with JSON only, shaped as\n\
         {{\"flavour_text\": string, \"options\": [{{\"name\": string, \"price\": integer >= 0, \
         \"currency\": string, \"results\": [{{\"currency\": string, \"amount\": integer}}]}}]}}\n\
         Rules:\n\
         - currency is one of: {}\n\
         - price cannot be paid in passive_income\n\
         - each option has 1 to 3 results\n\
         - an option priced in money must not also lose money in its results\n",
        currencies.join(", ")
    );
    prompt
}

pub fn vary_event(event: &EventDef, state: &GameState) -> String {
    let mut prompt = String::from(
        "You write events for a life simulation game. Rewrite the event below so it fits \
         this player, keeping its meaning. Answer with JSON only: \
         {\"name\": string, \"description\": string}\n\n",
    );
    push_state(&mut prompt, state);
    push_event(&mut prompt, event);
    prompt
}

pub fn summarize(history: &GameHistory, state: &GameState) -> String {
    let mut prompt = String::from(
        "The player's life in a life simulation game has ended. Write a short, warm \
         summary of how it went. Reply with plain text only.\n\n",
    );
    push_state(&mut prompt, state);
    if history.is_empty() {
        prompt.push_str("They made no notable choices.\n");
    } else {
        prompt.push_str("Choices, in order:\n");
        for option in history.iter() {
            let _ = writeln!(prompt, "- {}", option.name);
        }
    }
    prompt
}

fn push_state(prompt: &mut String, state: &GameState) {
    prompt.push_str("Player:\n");
    if let Some(age) = state.age() {
        let _ = writeln!(prompt, "- age: {}", age);
    }
    if let Some(job) = state.job() {
        let _ = writeln!(prompt, "- job: {}", job);
    }
    if let Some(education) = state.education() {
        let _ = writeln!(prompt, "- education: {}", education);
    }
    for resource in Resource::ALL {
        let _ = writeln!(prompt, "- {}: {}", resource, state.get(resource));
    }
    prompt.push('\n');
}

fn push_event(prompt: &mut String, event: &EventDef) {
    let _ = writeln!(prompt, "Event ({}): {}", event.kind, event.name);
    if !event.description.is_empty() {
        let _ = writeln!(prompt, "Description: {}", event.description);
    }
    if !event.effects.is_empty() {
        let effects: Vec<String> = event
            .effects
            .iter()
            .map(|(resource, delta)| format!("{} {:+}", resource, delta))
            .collect();
        let _ = writeln!(prompt, "Effects: {}", effects.join(", "));
    }
}
