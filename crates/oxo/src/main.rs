//! OXO - terminal front-end for the tic-tac-toe engine.

#![warn(missing_docs)]

mod cli;
mod play;
mod self_play;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use oxo_core::{Board, DecisionEngine, EngineConfig, Strategy, Style};
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = load_config(&cli.config, cli.seed, cli.strategy)?;

    match cli.command {
        Command::Play { human } => play::run_interactive(config, human.into()),
        Command::SelfPlay { games, json } => run_self_play(&config, games, json),
        Command::Suggest { layout, style, json } => {
            run_suggest(config, &layout, style.map(Style::from), json)
        }
    }
}

/// Logs go to stderr so they never interleave with the game on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,oxo=info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[instrument(skip(config_path))]
fn load_config(
    config_path: &Path,
    seed: Option<u64>,
    strategy: Option<Strategy>,
) -> Result<EngineConfig> {
    let mut config = if config_path.exists() {
        EngineConfig::from_file(config_path)?
    } else {
        info!(
            "Config file not found at {}, using defaults",
            config_path.display()
        );
        EngineConfig::default()
    };

    if let Some(seed) = seed {
        info!(seed, "Overriding tie-break seed");
        config = config.with_seed(seed);
    }
    if let Some(strategy) = strategy {
        info!(%strategy, "Overriding strategy");
        config = config.with_strategy(strategy);
    }

    Ok(config)
}

#[instrument(skip(config))]
fn run_self_play(config: &EngineConfig, games: usize, json: bool) -> Result<()> {
    let tally = self_play::run_games(config, games)?;
    info!(?tally, "Self-play finished");

    if json {
        println!("{}", serde_json::to_string_pretty(&tally)?);
    } else {
        println!("{}", tally);
    }
    Ok(())
}

#[instrument(skip(config))]
fn run_suggest(config: EngineConfig, layout: &str, style: Option<Style>, json: bool) -> Result<()> {
    let board = Board::from_layout(layout).context("Invalid board layout")?;
    let style = style.unwrap_or_else(|| board.to_move());

    let mut engine = DecisionEngine::new(config);
    let decision = engine.decide(&board, style)?;

    if json {
        let value = match decision {
            Some(decision) => serde_json::json!({
                "style": style,
                "position": decision.position,
                "rule": decision.rule.to_string(),
                "score": decision.score,
            }),
            None => serde_json::json!({ "style": style, "position": null }),
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{}\n", board);
    match decision {
        Some(decision) => println!(
            "{} plays {} {} ({})",
            style,
            decision.position,
            decision.position.label(),
            decision.rule
        ),
        None => println!("No empty cells left"),
    }
    Ok(())
}
