use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use combat::{ActionSource, Narrator, ScriptedInput};
use dungeon_crawler::config::GameConfig;
use dungeon_crawler::console::{ConsoleNarrator, StdinInput};
use dungeon_crawler::new_run;
use error::{GameError, handle_error};
use tracing_subscriber::EnvFilter;

/// Turn-based console dungeon crawler
#[derive(Parser, Debug)]
#[command(name = "dungeon_crawler")]
#[command(about = "Fight your way through the dungeon, one turn at a time")]
struct Args {
    /// Hero name (asked interactively when omitted)
    #[arg(long)]
    name: Option<String>,

    /// Random seed for treasure rolls
    #[arg(long)]
    seed: Option<u64>,

    /// JSON config file with hero stats
    #[arg(long)]
    config: Option<PathBuf>,

    /// Comma separated menu choices to play without a keyboard, e.g. "1,1,3"
    #[arg(long)]
    script: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => GameConfig::default(),
    };
    let seed = args.seed.or(config.seed).unwrap_or_else(rand::random);

    let mut keyboard = StdinInput::stdin();
    let name = match args.name.clone() {
        Some(name) => name,
        None => keyboard
            .ask("Enter your hero's name: ")
            .context("Failed to read hero name")?
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "Hero".to_string()),
    };

    tracing::info!(%name, seed, "starting dungeon run");

    let mut scripted;
    let input: &mut dyn ActionSource = match &args.script {
        Some(script) => {
            scripted = ScriptedInput::from_script(script);
            &mut scripted
        }
        None => &mut keyboard,
    };
    let mut narrator = ConsoleNarrator::stdout();

    let mut run = new_run(&config, &name, seed);
    match run.play(input, &mut narrator) {
        Ok(summary) => {
            tracing::info!(?summary, "run complete");
            println!(
                "Monsters defeated: {}, treasures found: {}",
                summary.monsters_defeated, summary.treasures_found
            );
            Ok(())
        }
        Err(GameError::InputClosed) => {
            narrator.narrate(&handle_error(&GameError::InputClosed));
            Ok(())
        }
        Err(e) => {
            eprintln!("Game crashed: {}", handle_error(&e));
            Err(e.into())
        }
    }
}
