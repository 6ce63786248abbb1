//! Tracing setup.

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `--verbose` - Debug for the wesplit crates when `RUST_LOG` is unset
/// - Default: WARN, so normal runs print only the split
///
/// Logs go to stderr; stdout carries the rendered split or JSON report.
pub fn init_tracing(verbose: bool) {
    let default_directives = if verbose {
        "warn,wesplit_cli=debug,wesplit_core=debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
