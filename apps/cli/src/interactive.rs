//! # Interactive Mode
//!
//! A prompt loop standing in for a form: each command edits one input and
//! the split is redrawn straight away.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   start ──► render ──► prompt ──┬── amount/tip/people ──► changed? ─┐   │
//! │                          ▲      │                                   │   │
//! │                          │      ├── show / reset ───────────────────┤   │
//! │                          │      │                                   │   │
//! │                          │      ├── bad input ──► print error ──────┤   │
//! │                          │      │                                   │   │
//! │                          └──────┴───────────── render ◄─────────────┘   │
//! │                                                                         │
//! │   quit / end of input ──► done (nothing is saved)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;
use wesplit_core::{CurrencyCode, PeopleCount, SplitSession, TipPercentage};

use crate::error::CliResult;
use crate::render::render_text;

const PROMPT: &str = "> ";

const HELP: &str = "\
Commands:
  amount <AMOUNT>   set the check amount (e.g. amount $42.50)
  tip <PERCENT>     set the tip percentage (0-100)
  people <COUNT>    set the number of people (2-99)
  show              print the current split
  reset             restore the starting values
  help              show this list
  quit              leave";

/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Amount(String),
    Tip(u32),
    People(u32),
    Show,
    Reset,
    Help,
    Quit,
}

/// Why a prompt line could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}' (type 'help')")]
    Unknown(String),

    #[error("'{0}' needs a value")]
    MissingArgument(&'static str),

    #[error("'{0}' is not a whole number")]
    NotAWholeNumber(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let number = |name: &'static str| -> Result<u32, CommandError> {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument(name));
            }
            rest.trim_end_matches('%')
                .parse()
                .map_err(|_| CommandError::NotAWholeNumber(rest.to_string()))
        };

        match word.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "amount" | "a" => {
                if rest.is_empty() {
                    Err(CommandError::MissingArgument("amount"))
                } else {
                    Ok(Command::Amount(rest.to_string()))
                }
            }
            "tip" | "t" => number("tip").map(Command::Tip),
            "people" | "p" => number("people").map(Command::People),
            "show" | "s" => Ok(Command::Show),
            "reset" => Ok(Command::Reset),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Runs the prompt loop until `quit` or end of input.
///
/// Bad input never ends the loop: the error is printed and the previous
/// value is kept. Only I/O failures are returned.
pub fn run_loop<R, W>(
    session: &mut SplitSession,
    currency: &CurrencyCode,
    input: R,
    out: &mut W,
) -> CliResult<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}\n", HELP)?;
    write!(out, "{}", render_text(session, currency))?;
    write!(out, "{}", PROMPT)?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(out, "{}", HELP)?,
            Ok(Command::Show) => write!(out, "{}", render_text(session, currency))?,
            Ok(Command::Reset) => {
                let changed = session.reset();
                debug!(changed, "Session reset");
                write!(out, "{}", render_text(session, currency))?;
            }
            Ok(edit) => match apply_edit(session, &edit) {
                Ok(true) => write!(out, "{}", render_text(session, currency))?,
                Ok(false) => writeln!(out, "(unchanged)")?,
                Err(message) => writeln!(out, "! {}", message)?,
            },
            Err(CommandError::Empty) => {}
            Err(e) => writeln!(out, "! {}", e)?,
        }

        write!(out, "{}", PROMPT)?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(())
}

/// Applies an input-editing command, returning whether an input changed.
fn apply_edit(session: &mut SplitSession, command: &Command) -> Result<bool, String> {
    let changed = match command {
        Command::Amount(text) => session.set_check_amount_text(text),
        Command::Tip(pct) => {
            TipPercentage::new(*pct).map(|tip| session.set_tip_percentage(tip))
        }
        Command::People(count) => {
            PeopleCount::new(*count).map(|people| session.set_people(people))
        }
        _ => return Ok(false),
    }
    .map_err(|e| e.to_string())?;

    debug!(?command, changed, inputs = ?session.inputs(), "Input edited");
    Ok(changed)
}
