//! Subcommand execution over a scratchpad session.
//!
//! # Responsibility
//! - Map each CLI action onto the session/popover operations.
//! - Keep I/O (clipboard, prompt input, output) injectable for tests.

use scratchpad_core::{
    ClearChoice, ClearPrompt, ClipboardPort, KvRepository, Scratchpad, StoreError,
};
use std::io::{BufRead, Write};

/// One scratchpad action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Show,
    Set(String),
    Paste,
    Copy,
    StripEmpty,
    Trim,
    Clear { assume_yes: bool },
}

/// Runs `action` against `session`, writing user-facing output to `out`.
pub fn execute<R: KvRepository>(
    session: &mut Scratchpad<R>,
    action: Action,
    clipboard: &mut dyn ClipboardPort,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<(), String> {
    match action {
        Action::Show => {
            if let Some(notes) = session.notes() {
                write!(out, "{notes}").map_err(io_error)?;
            }
        }
        Action::Set(text) => {
            session.on_edit_change(Some(text)).map_err(store_error)?;
        }
        Action::Paste => {
            let outcome = session.open_popover().paste(clipboard);
            session.apply_popover_outcome(outcome).map_err(store_error)?;
        }
        Action::Copy => {
            let outcome = session.open_popover().copy(clipboard);
            if let Some(err) = &outcome.clipboard_error {
                return Err(format!("notes were not copied: {err}"));
            }
            if let Some(notice) = session.apply_popover_outcome(outcome).map_err(store_error)? {
                writeln!(out, "{}", notice.message).map_err(io_error)?;
            }
        }
        Action::StripEmpty => {
            let outcome = session.open_popover().remove_empty_lines();
            session.apply_popover_outcome(outcome).map_err(store_error)?;
        }
        Action::Trim => {
            let outcome = session.open_popover().trim_whitespace();
            session.apply_popover_outcome(outcome).map_err(store_error)?;
        }
        Action::Clear { assume_yes } => {
            let prompt = session.request_clear();
            let choice = if assume_yes {
                ClearChoice::Clear
            } else {
                ask_clear(&prompt, input, out)?
            };
            session.resolve_clear(prompt, choice).map_err(store_error)?;
            if choice == ClearChoice::Clear {
                writeln!(out, "Scratchpad cleared.").map_err(io_error)?;
            }
        }
    }

    session.flush().map_err(store_error)?;
    Ok(())
}

fn ask_clear(
    prompt: &ClearPrompt,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<ClearChoice, String> {
    write!(out, "{} {} [y/N]: ", prompt.title, prompt.message)
    .map_err(io_error)?;
    out.flush().map_err(io_error)?;

    let mut answer = String::new();
    input.read_line(&mut answer).map_err(io_error)?;
    Ok(parse_clear_answer(&answer))
}

/// Anything but `y`/`yes` (or the button label `clear`) cancels.
fn parse_clear_answer(answer: &str) -> ClearChoice {
    match answer.trim().to_ascii_lowercase().as_str() {
        "clear" | "y" | "yes" => ClearChoice::Clear,
        _ => ClearChoice::Cancel,
    }
}

fn store_error(err: StoreError) -> String {
    format!("storage error: {err}")
}

fn io_error(err: std::io::Error) -> String {
    format!("I/O error: {err}")
}
