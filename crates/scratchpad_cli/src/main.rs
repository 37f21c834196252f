//! `scratchpad` command-line host.
//!
//! # Responsibility
//! - Resolve config from file, environment and flags.
//! - Open the notes database and run one action per invocation.

mod clipboard;
mod commands;

use clap::{Parser, Subcommand};
use clipboard::SystemClipboard;
use commands::{execute, Action};
use log::error;
use scratchpad_core::db::open_db;
use scratchpad_core::{
    init_logging_from_config, NoteStore, PersistPolicy, Scratchpad, ScratchpadConfig,
    SqliteKvRepository,
};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "scratchpad", version, about = "Single-note scratchpad")]
struct Cli {
    /// SQLite file holding the notes (overrides SCRATCHPAD_DB_PATH)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// When popover results are saved: immediate, on-next-edit
    #[arg(long, global = true)]
    persist_policy: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the notes
    Show,
    /// Replace the notes with TEXT, or with stdin when TEXT is omitted
    Set { text: Option<String> },
    /// Append the clipboard text to the notes
    Paste,
    /// Copy the notes to the clipboard
    Copy,
    /// Remove blank lines
    StripEmpty,
    /// Trim each line and collapse repeated spaces
    Trim,
    /// Delete all notes after confirmation
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Check core linkage
    Ping,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("event=cli_run module=cli status=error error={}", message);
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let config = resolve_config(&cli)?;
    init_logging_from_config(&config)?;

    let action = match cli.command {
        Command::Ping => {
            println!("scratchpad_core ping={}", scratchpad_core::ping());
            println!("scratchpad_core version={}", scratchpad_core::core_version());
            return Ok(());
        }
        Command::Show => Action::Show,
        Command::Set { text } => Action::Set(match text {
            Some(text) => text,
            None => read_stdin()?,
        }),
        Command::Paste => Action::Paste,
        Command::Copy => Action::Copy,
        Command::StripEmpty => Action::StripEmpty,
        Command::Trim => Action::Trim,
        Command::Clear { yes } => Action::Clear { assume_yes: yes },
    };

    let conn = open_db(&config.db_path)
        .map_err(|err| format!("cannot open `{}`: {err}", config.db_path.display()))?;
    let store = NoteStore::new(SqliteKvRepository::new(&conn));
    let mut session = Scratchpad::open(store, config.persist_policy)
        .map_err(|err| format!("cannot load notes: {err}"))?;

    let mut clipboard = SystemClipboard::new();
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut stdout = std::io::stdout();
    execute(&mut session, action, &mut clipboard, &mut input, &mut stdout)
}

fn resolve_config(cli: &Cli) -> Result<ScratchpadConfig, String> {
    let base = match &cli.config {
        Some(path) => ScratchpadConfig::from_file(path).map_err(|err| err.to_string())?,
        None => ScratchpadConfig::default(),
    };
    let mut config = base
        .with_overrides(|key| std::env::var(key).ok())
        .map_err(|err| err.to_string())?;

    if let Some(db) = &cli.db {
        config.db_path = db.clone();
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(dir) = &cli.log_dir {
        config.log_dir = Some(dir.clone());
    }
    if let Some(policy) = &cli.persist_policy {
        config.persist_policy = PersistPolicy::parse(policy)
            .ok_or_else(|| format!("invalid persist policy `{policy}`"))?;
    }
    Ok(config)
}

fn read_stdin() -> Result<String, String> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|err| format!("cannot read stdin: {err}"))?;
    Ok(text)
}
