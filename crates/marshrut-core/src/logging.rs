//! Logging infrastructure for marshrut
//!
//! Uses the `tracing` crate for structured logging to stderr, keeping
//! stdout clean for command output. Supports:
//! - Text format (default): compact, human-readable
//! - JSON format (--log-json): machine-readable with span events

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize structured logging based on CLI arguments
///
/// Log level resolution order:
/// 1. `--log-level <level>` if given
/// 2. `--verbose` implies debug
/// 3. Default: warn
///
/// The `MARSHRUT_LOG` environment variable (or `RUST_LOG`) overrides all of
/// these with a full filter directive.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = match (verbose, log_level) {
        (_, Some(level)) => level,
        (true, None) => "debug",
        (false, None) => "warn",
    };

    init_with_level(level, log_json)
}

fn init_with_level(level: &str, log_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("MARSHRUT_LOG"))
        .unwrap_or_else(|_| {
            // Bare levels are scoped to the marshrut crates, full
            // directives pass through untouched
            EnvFilter::new(if level.contains('=') {
                level.to_string()
            } else {
                format!("marshrut={level},marshrut_core={level}")
            })
        });

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(
                        tracing_subscriber::fmt::format::FmtSpan::NEW
                            | tracing_subscriber::fmt::format::FmtSpan::CLOSE,
                    ),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
