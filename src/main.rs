mod script;

use std::fs;
use std::path::{Path, PathBuf};

use canvas::config::{BoardConfig, ConfigError};
use canvas::engine::EngineCore;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::script::{Replay, ScriptError, parse_script};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },
    #[error("invalid config file {}: {source}", path.display())]
    ConfigJson { path: PathBuf, source: serde_json::Error },
    #[error("invalid board config: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid script: {0}")]
    Script(#[from] ScriptError),
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "gridboard", about = "Headless infinite-canvas board driven by scripted input")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a JSON Lines event script and print the resulting board.
    Replay {
        script: PathBuf,
        #[arg(long, env = "GRIDBOARD_CONFIG")]
        config: Option<PathBuf>,
        #[arg(long, default_value_t = 800.0)]
        width: f64,
        #[arg(long, default_value_t = 600.0)]
        height: f64,
        /// Print every committed action as a JSON line before the snapshot.
        #[arg(long)]
        emit_actions: bool,
        #[arg(long)]
        pretty: bool,
    },
    /// Print the default board config as JSON.
    Config,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Replay { script, config, width, height, emit_actions, pretty } => {
            run_replay(&script, config.as_deref(), width, height, emit_actions, pretty)
        }
        Command::Config => {
            println!("{}", render(&BoardConfig::default(), true)?);
            Ok(())
        }
    }
}

fn run_replay(
    script: &Path,
    config: Option<&Path>,
    width: f64,
    height: f64,
    emit_actions: bool,
    pretty: bool,
) -> Result<(), CliError> {
    let config = match config {
        Some(path) => load_config(path)?,
        None => BoardConfig::default(),
    };
    let mut engine = EngineCore::with_config(config)?;
    engine.set_viewport(width, height);

    let text = read(script)?;
    let events = parse_script(&text)?;
    tracing::info!(script = %script.display(), events = events.len(), "replaying");

    let mut replay = Replay::new(engine);
    let mut committed = 0usize;
    for event in &events {
        for action in replay.apply(event) {
            committed += 1;
            if emit_actions {
                println!("{}", serde_json::to_string(&action)?);
            }
        }
    }

    let snapshot = replay.engine().snapshot();
    tracing::info!(actions = committed, boxes = snapshot.entities.len(), zoom = snapshot.camera.zoom, "replay finished");
    println!("{}", render(&snapshot, pretty)?);
    Ok(())
}

fn load_config(path: &Path) -> Result<BoardConfig, CliError> {
    let text = read(path)?;
    serde_json::from_str(&text).map_err(|source| CliError::ConfigJson { path: path.to_path_buf(), source })
}

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read { path: path.to_path_buf(), source })
}

fn render<T: Serialize>(value: &T, pretty: bool) -> Result<String, CliError> {
    let rendered = if pretty { serde_json::to_string_pretty(value)? } else { serde_json::to_string(value)? };
    Ok(rendered)
}
