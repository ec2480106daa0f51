//! Logging setup for the CLI.

use tracing_subscriber::EnvFilter;

/// Crates whose log level follows the `--debug` / `--quiet` flags.
const CRATES: &[&str] = &["configgen", "configgen_cli", "configgen_llm", "configgen_extractor"];

/// Log level selected by the global flags.
///
/// `--debug` wins over `--quiet`.
pub fn level(debug: bool, quiet: bool) -> &'static str {
    if debug {
        "debug"
    } else if quiet {
        "error"
    } else {
        "info"
    }
}

/// Filter directives: dependencies stay at `warn`, configgen crates use `level`.
pub fn directives(level: &str) -> String {
    let mut directives = vec!["warn".to_string()];
    directives.extend(CRATES.iter().map(|krate| format!("{}={}", krate, level)));
    directives.join(",")
}

/// Initialize tracing (log to stderr).
///
/// `RUST_LOG` replaces the default filter unless `--debug` or `--quiet` is set.
pub fn init(debug: bool, quiet: bool) {
    let filter = if debug || quiet {
        EnvFilter::new(directives(level(debug, quiet)))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives(level(false, false))))
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(debug)
        .init();
}
