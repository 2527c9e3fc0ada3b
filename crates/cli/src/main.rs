// xword CLI - inspect crossword puzzle files (.puz, .ipuz) headlessly

mod exit_codes;
mod render;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::debug;
use xword_config::Settings;
use xword_core::Clue;
use xword_engine::{calculate_numbers, derive_clues, merge_clues};
use xword_io::{accept, parse_puzzle_file, ImportError, ImportedGrid};

use exit_codes::{EXIT_IMPORT, EXIT_SUCCESS, EXIT_USAGE};
use render::{clues_text, grid_text, CellDoc, InspectDoc};

#[derive(Parser)]
#[command(name = "xword")]
#[command(about = "Crossword puzzle file tools (CLI mode, headless)")]
#[command(long_version = long_version())]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the numbered grid and clues of a puzzle file
    #[command(after_help = "\
Examples:
  xword inspect sunday.puz
  xword inspect daily.ipuz --json
  xword inspect big.ipuz --config ./settings.toml")]
    Inspect {
        /// Puzzle file (.puz or .ipuz)
        file: PathBuf,

        /// Output JSON instead of text
        #[arg(long)]
        json: bool,

        /// Settings file (defaults to the user config directory)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List the clues of a puzzle file with their answers
    #[command(after_help = "\
Examples:
  xword clues sunday.puz
  xword clues daily.ipuz --json")]
    Clues {
        /// Puzzle file (.puz or .ipuz)
        file: PathBuf,

        /// Output JSON instead of text
        #[arg(long)]
        json: bool,

        /// Settings file (defaults to the user config directory)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        " (", env!("GIT_COMMIT_HASH"), ")",
        "\nengine:  xword-engine ", env!("CARGO_PKG_VERSION"),
        "\ntarget:  ", env!("TARGET"),
    )
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Inspect { file, json, config } => cmd_inspect(&file, json, config.as_deref()),
        Commands::Clues { file, json, config } => cmd_clues(&file, json, config.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn usage(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    pub fn import(err: ImportError) -> Self {
        let hint = match &err {
            ImportError::UnsupportedFormat => Some("expected a .puz or .ipuz file".to_string()),
            ImportError::TooLarge { .. } => Some("raise [grid] max_dimension in settings.toml".to_string()),
            _ => None,
        };
        Self { code: EXIT_IMPORT, message: err.to_string(), hint }
    }
}

fn load_settings(path: Option<&Path>) -> Result<Settings, CliError> {
    match path {
        Some(path) => Settings::load_from(path).map_err(|e| CliError::usage(e.to_string())),
        None => Ok(Settings::load()),
    }
}

/// Read, parse and size-check a puzzle file.
fn load_puzzle(file: &Path, settings: &Settings) -> Result<ImportedGrid, CliError> {
    let data = fs::read(file).map_err(|e| CliError::usage(format!("cannot read {}: {}", file.display(), e)))?;
    let filename = file.file_name().and_then(|n| n.to_str()).unwrap_or_default();

    let parsed = parse_puzzle_file(filename, &data).map_err(CliError::import)?;
    debug!(
        "parsed {} ({}x{}, {} clues)",
        filename,
        parsed.width,
        parsed.height,
        parsed.clues.len()
    );
    accept(parsed, &settings.grid).map_err(CliError::import)
}

/// Structural clues with the file's clue text laid over them.
fn clue_list(grid: &ImportedGrid) -> Vec<Clue> {
    merge_clues(derive_clues(grid.width, grid.height, &grid.cells), grid.clues.iter().cloned())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(value).map_err(|e| CliError::usage(format!("cannot encode JSON: {}", e)))
}

fn cmd_inspect(file: &Path, json: bool, config: Option<&Path>) -> Result<(), CliError> {
    let settings = load_settings(config)?;
    let grid = load_puzzle(file, &settings)?;
    let numbered = calculate_numbers(grid.width, grid.height, &grid.cells);
    let clues = clue_list(&grid);

    if json {
        let doc = InspectDoc {
            title: &grid.title,
            author: &grid.author,
            width: grid.width,
            height: grid.height,
            cells: numbered.iter().map(CellDoc::from).collect(),
            clues: &clues,
        };
        println!("{}", to_json(&doc)?);
        return Ok(());
    }

    if !grid.title.is_empty() {
        println!("Title:  {}", grid.title);
    }
    if !grid.author.is_empty() {
        println!("Author: {}", grid.author);
    }
    println!("Size:   {}x{}", grid.width, grid.height);
    println!();
    print!("{}", grid_text(grid.width, &numbered));
    println!();
    print!("{}", clues_text(&clues));
    Ok(())
}

fn cmd_clues(file: &Path, json: bool, config: Option<&Path>) -> Result<(), CliError> {
    let settings = load_settings(config)?;
    let grid = load_puzzle(file, &settings)?;
    let clues = clue_list(&grid);

    if json {
        println!("{}", to_json(&clues)?);
    } else {
        print!("{}", clues_text(&clues));
    }
    Ok(())
}
