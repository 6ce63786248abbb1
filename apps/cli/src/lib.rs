//! # WeSplit CLI Library
//!
//! The terminal presentation surface for `wesplit-core`. It supplies raw
//! input to a [`SplitSession`] and renders the derived values.
//!
//! ## Module Organization
//! ```text
//! wesplit_cli/
//! ├── lib.rs          ◄─── You are here (startup & dispatch)
//! ├── cli.rs          ◄─── clap flag definitions
//! ├── config.rs       ◄─── WESPLIT_* and locale defaults
//! ├── format.rs       ◄─── Currency text formatting
//! ├── render.rs       ◄─── Text block and JSON report
//! ├── interactive.rs  ◄─── Prompt loop
//! ├── logging.rs      ◄─── tracing-subscriber setup
//! └── error.rs        ◄─── CliError and exit codes
//! ```
//!
//! ## Modes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  --list-tips / --list-people  ──► print picker domain, exit             │
//! │  --interactive                ──► prompt loop, redraw on every edit     │
//! │  --json                       ──► one SplitReport as JSON               │
//! │  (default)                    ──► one text block                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod interactive;
pub mod logging;
pub mod render;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use wesplit_core::validation::parse_check_amount;
use wesplit_core::{CurrencyCode, PeopleCount, SplitInputs, SplitSession, TipPercentage};

use crate::cli::Cli;
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};
use crate::render::{render_text, SplitReport};

/// Runs the `wesplit` binary.
///
/// ## Startup Sequence
/// 1. Parse flags (clap exits on `--help` / bad syntax)
/// 2. Initialize logging
/// 3. Load configuration
/// 4. Execute the selected mode against stdin / stdout
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting WeSplit");

    let result = AppConfig::from_env()
        .map_err(CliError::from)
        .and_then(|config| {
            let stdin = io::stdin();
            let stdout = io::stdout();
            execute(&cli, &config, stdin.lock(), &mut stdout.lock())
        });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "wesplit failed");
            eprintln!("error: {}", e);
            e.exit_code()
        }
    }
}

/// Executes one invocation against the given input and output streams.
pub fn execute<R, W>(cli: &Cli, config: &AppConfig, input: R, out: &mut W) -> CliResult<()>
where
    R: BufRead,
    W: Write,
{
    if cli.list_tips {
        for tip in TipPercentage::domain() {
            writeln!(out, "{}", tip)?;
        }
        return Ok(());
    }

    if cli.list_people {
        for people in PeopleCount::domain() {
            writeln!(out, "{:>2}  {}", people.selection(), people)?;
        }
        return Ok(());
    }

    let currency = match &cli.currency {
        Some(code) => CurrencyCode::new(code)?,
        None => config.currency.clone(),
    };

    let inputs = initial_inputs(cli, config)?;
    info!(?inputs, %currency, "Session started");
    let mut session = SplitSession::with_inputs(inputs);

    if cli.interactive {
        return interactive::run_loop(&mut session, &currency, input, out);
    }

    if cli.json {
        serde_json::to_writer_pretty(&mut *out, &SplitReport::new(&session, &currency))?;
        writeln!(out)?;
    } else {
        write!(out, "{}", render_text(&session, &currency))?;
    }

    Ok(())
}

/// Starting inputs: configuration defaults overridden by flags.
fn initial_inputs(cli: &Cli, config: &AppConfig) -> CliResult<SplitInputs> {
    let mut inputs = config.initial_inputs();

    if let Some(text) = &cli.amount {
        inputs.check_amount = parse_check_amount(text)?;
    }

    if let Some(pct) = cli.tip {
        inputs.tip_percentage = TipPercentage::new(pct)?;
    }

    if let Some(count) = cli.people {
        inputs.people = PeopleCount::new(count)?;
    } else if let Some(index) = cli.people_index {
        inputs.people = PeopleCount::from_selection(index)?;
    }

    Ok(inputs)
}
