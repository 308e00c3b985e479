//! Score an answer set read as JSON from a file or stdin.
//!
//! ```text
//! shadow-score answers.json
//! echo '{"1": "A", "2": "C"}' | shadow-score
//! ```
//!
//! Configuration comes from the file named by `SHADOW_CONFIG`, or from
//! `SHADOW_*` environment variables alone.

use std::io::Read;

use anyhow::Context;
use shadow_core::{AnswerSet, QUESTIONS};
use shadow_scoring::{ScoringConfig, ScoringEngine};
use tracing_subscriber::EnvFilter;

fn read_answers(path: Option<String>) -> anyhow::Result<AnswerSet> {
    let answers = match path {
        Some(path) => AnswerSet::from_path(&path)
            .with_context(|| format!("Failed to load answers from {path}"))?,
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            AnswerSet::from_json(&input).context("Invalid answer set on stdin")?
        }
    };
    Ok(answers)
}

fn load_config() -> anyhow::Result<ScoringConfig> {
    let config = match std::env::var("SHADOW_CONFIG") {
        Ok(path) => ScoringConfig::from_file(&path)
            .with_context(|| format!("Failed to load config from {path}"))?,
        Err(_) => ScoringConfig::from_env().context("Failed to load config from environment")?,
    };
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let answers = read_answers(std::env::args().nth(1))?;

    let missing = answers.missing(QUESTIONS);
    if !missing.is_empty() {
        tracing::warn!(?missing, "Answer set is incomplete; unanswered questions score zero");
    }

    let engine = ScoringEngine::with_config(load_config()?)?;
    let result = engine.score(&answers);

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
