//! dungen: generate a dungeon layout from the command line
//!
//! Prints the level as ASCII (exposed walls only) followed by a summary, or
//! as the full JSON generation result.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use dg_core::dungeon::{CellState, EntityKind};
use dg_core::{GameRng, GenerationConfig, GenerationError, GenerationResult, generate};
use log::LevelFilter;
use serde::Serialize;
use strum::IntoEnumIterator;
use thiserror::Error;

/// Procedural dungeon layout generator
#[derive(Parser, Debug)]
#[command(name = "dungen")]
#[command(author, version, about = "Generate a dungeon layout", long_about = None)]
struct Args {
    /// RNG seed (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON generation config; missing fields use defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// World width, overrides the config
    #[arg(long)]
    width: Option<u32>,

    /// World height, overrides the config
    #[arg(long)]
    height: Option<u32>,

    /// Number of rooms, overrides the config
    #[arg(short, long)]
    rooms: Option<u32>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Ascii)]
    format: Format,

    /// Log generation details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Ascii,
    Json,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("failed to read config {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        source: io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ParseConfig {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("failed to encode result: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// `warn` by default, `debug` with `--verbose`; `RUST_LOG` overrides both
fn log_builder(verbose: bool) -> env_logger::Builder {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env();
    builder
}

fn load_config(args: &Args) -> Result<GenerationConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
                path: path.clone(),
                source,
            })?;
            serde_json::from_str(&text).map_err(|source| CliError::ParseConfig {
                path: path.clone(),
                source,
            })?
        }
        None => GenerationConfig::default(),
    };

    if let Some(width) = args.width {
        config.world_width = width;
    }
    if let Some(height) = args.height {
        config.world_height = height;
    }
    if let Some(rooms) = args.rooms {
        config.number_of_rooms = rooms;
    }
    Ok(config)
}

/// Draw the level, leaving buried walls blank
fn render_ascii(result: &GenerationResult) -> String {
    let width = result.grid.width() as usize;
    let mut out = String::with_capacity((width + 1) * result.grid.height() as usize);

    for (x, y, state) in result.grid.iter() {
        let c = match state {
            CellState::Wall if !result.grid.is_exposed_wall(x, y) => ' ',
            other => other.symbol(),
        };
        out.push(c);
        if x as usize + 1 == width {
            out.push('\n');
        }
    }
    out
}

fn write_summary(out: &mut impl Write, result: &GenerationResult, seed: u64) -> io::Result<()> {
    writeln!(out, "seed: {seed}")?;
    writeln!(out, "rooms: {}", result.rooms.len())?;
    for (i, room) in result.rooms.iter().enumerate() {
        let b = room.bounding_box;
        writeln!(
            out,
            "  {i}: {} at ({}, {}) {}x{}, {} floor cells",
            room.shape,
            b.x,
            b.y,
            b.width,
            b.height,
            room.floor_cells.len()
        )?;
    }
    writeln!(out, "start: {:?}  end: {:?}", result.start, result.end)?;
    for kind in EntityKind::iter() {
        writeln!(out, "{kind}: {}", result.entity_positions(kind).len())?;
    }
    for shortfall in &result.shortfalls {
        writeln!(out, "shortfall: {shortfall}")?;
    }
    Ok(())
}

/// JSON document printed by `--format json`
#[derive(Serialize)]
struct JsonOutput<'a> {
    seed: u64,
    #[serde(flatten)]
    level: &'a GenerationResult,
}

fn run(args: &Args) -> Result<(), CliError> {
    let config = load_config(args)?;
    let mut rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    let seed = rng.seed();

    let result = generate(&config, &mut rng)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        Format::Ascii => {
            writeln!(out, "{}", render_ascii(&result))?;
            write_summary(&mut out, &result, seed)?;
        }
        Format::Json => {
            let doc = JsonOutput {
                seed,
                level: &result,
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    log_builder(args.verbose).init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("dungen: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        Args::parse_from(std::iter::once("dungen").chain(extra.iter().copied()))
    }

    #[test]
    fn test_overrides_apply_over_defaults() {
        let args = args(&["--width", "64", "--rooms", "8", "--seed", "3"]);
        let config = load_config(&args).unwrap();
        assert_eq!(config.world_width, 64);
        assert_eq!(config.world_height, 50);
        assert_eq!(config.number_of_rooms, 8);
        assert_eq!(args.format, Format::Ascii);
    }

    #[test]
    fn test_verbose_raises_log_level() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert_eq!(log_builder(false).build().filter(), LevelFilter::Warn);
        assert_eq!(log_builder(true).build().filter(), LevelFilter::Debug);
        assert!(args(&["-v"]).verbose);
    }

    #[test]
    fn test_missing_config_file() {
        let args = args(&["--config", "/nonexistent/dungen.json"]);
        assert!(matches!(load_config(&args), Err(CliError::ReadConfig { .. })));
    }

    #[test]
    fn test_ascii_hides_buried_walls() {
        let config = GenerationConfig::default();
        let result = generate(&config, &mut GameRng::new(12)).unwrap();
        let text = render_ascii(&result);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 50);
        assert!(lines.iter().all(|l| l.chars().count() == 50));
        assert_eq!(text.matches('#').count(), result.exposed_walls().len());
        assert_eq!(text.matches('<').count(), 1);
        assert_eq!(text.matches('>').count(), 1);
    }

    #[test]
    fn test_summary_lists_entities() {
        let result = generate(&GenerationConfig::default(), &mut GameRng::new(4)).unwrap();
        let mut buf = Vec::new();
        write_summary(&mut buf, &result, 4).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("seed: 4\n"));
        assert!(text.contains("Treasure: "));
        assert!(text.contains("Enemy: "));
    }

    #[test]
    fn test_json_output_carries_seed() {
        let result = generate(&GenerationConfig::default(), &mut GameRng::new(31)).unwrap();
        let doc = JsonOutput {
            seed: 31,
            level: &result,
        };
        let value: serde_json::Value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["seed"], 31);
        assert!(value["grid"].is_object());
        assert_eq!(value["rooms"].as_array().unwrap().len(), result.rooms.len());
    }
}
