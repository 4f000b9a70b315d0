//! Year Runner
//!
//! Plays one life from age 18 against an event catalog, one turn per year.
//! Each year an event may fire, the narrator describes it and proposes
//! options, and the player always takes the first one.
//!
//! ```text
//! cargo run -p year_runner -- [catalog file or directory] [years]
//! ```
//!
//! Set `GEMINI_API_KEY` (a `.env` file works) to narrate with Gemini;
//! without it every narration falls back to catalog text.

use lifepath_core::{apply, apply_decision, Effects, GameHistory, GameState};
use lifepath_narrator::{play_turn, GeminiClient, Narrator, NarratorConfig, Offline, TextGenerator};
use lifepath_script::Loader;
use lifepath_session::{SessionConfig, SessionHub};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CATALOG: &str = "assets/events.ron";
const DEFAULT_YEARS: u32 = 10;
const START_AGE: u32 = 18;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lifepath=info,year_runner=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let catalog_path = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_CATALOG.to_string()));
    let years: u32 = match args.next() {
        Some(raw) => raw.parse()?,
        None => DEFAULT_YEARS,
    };

    // A catalog that fails to load is the one fatal error
    let mut loader = Loader::new();
    if catalog_path.is_dir() {
        loader.load_directory(&catalog_path)?;
    } else {
        loader.load_file(&catalog_path)?;
    }
    let catalog = loader.finish().into_shared();

    let generator: Arc<dyn TextGenerator> = match GeminiClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), "narrating with Gemini");
            Arc::new(client)
        }
        Err(e) => {
            tracing::warn!(error = %e, "no text generator, using catalog text");
            Arc::new(Offline)
        }
    };
    let narrator = Narrator::new(generator, NarratorConfig::from_env());

    let mut hub = SessionHub::new(catalog, SessionConfig::default());
    let id = hub.open();

    let mut state = GameState::new(1000, 80, 50, 50, 0)?.with_age(START_AGE);
    let mut history = GameHistory::new();

    println!("=== Lifepath Year Runner ===\n");
    print_state(&state);

    for _ in 0..years {
        let session = hub.get_mut(id)?;
        let report = play_turn(session, &narrator, &state, &history).await;
        state = report.state.clone();

        let age = state.age().unwrap_or(START_AGE);
        println!("\n--- Age {} ---", age);
        match (&report.narration, report.outcome.event()) {
            (Some(narration), Some(event)) => println!("{}: {}", event.name, narration.value),
            _ => println!("{}", report.outcome.message()),
        }

        if report.is_final() {
            break;
        }

        if let Some(flavour) = &report.options.value.flavour_text {
            println!("{}", flavour);
        }
        if let Some(choice) = report.options.value.options.first() {
            println!("You choose: {} ({} {})", choice.name, choice.price, choice.currency);
            state = apply_decision(&state, choice);
            history.record(choice.clone());
        }

        state = next_year(&state);
        print_state(&state);
    }

    let summary = narrator.summarize(&history, &state).await;
    println!("\n=== Summary ===\n{}", summary.value);

    hub.close(id)?;
    Ok(())
}

/// Age the player one year and pay out passive income
fn next_year(state: &GameState) -> GameState {
    let mut income = Effects::new();
    income.insert("money".to_string(), state.passive_income());
    let age = state.age().unwrap_or(START_AGE).saturating_add(1);
    apply(state, &income).with_age(age)
}

fn print_state(state: &GameState) {
    println!(
        "money {} | health {} | relations {} | satisfaction {} | passive income {}",
        state.money(),
        state.health(),
        state.relations(),
        state.satisfaction(),
        state.passive_income(),
    );
}
