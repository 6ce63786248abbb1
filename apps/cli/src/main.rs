//! # WeSplit CLI Entry Point
//!
//! ## Startup Sequence
//! 1. Parse command line flags
//! 2. Initialize tracing (logging to stderr)
//! 3. Load configuration from `WESPLIT_*` and the locale
//! 4. Run one-shot or interactive mode
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

fn main() -> ExitCode {
    wesplit_cli::run()
}
