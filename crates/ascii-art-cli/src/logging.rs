//! Logging setup
//!
//! Structured logging via `tracing`. Every layer writes to stderr so that
//! stdout carries nothing but the JSON document.
//!
//! # Environment Variables
//!
//! - `ASCII_ART_LOG_LEVEL`: log filter (trace|debug|info|warn|error|off, or
//!   any `EnvFilter` directive). Defaults to `warn`.
//! - `RUST_LOG`: used when `ASCII_ART_LOG_LEVEL` is unset
//! - `ASCII_ART_LOG_FORMAT`: compact|pretty|json. Defaults to `compact`.
//!
//! ```bash
//! ASCII_ART_LOG_LEVEL=debug ascii-art-generator "HI"
//! RUST_LOG="ascii_art_generator::render=trace" ascii-art-generator "HI"
//! ```

use clap::ValueEnum;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

pub const LOG_LEVEL_ENV: &str = "ASCII_ART_LOG_LEVEL";
pub const LOG_FORMAT_ENV: &str = "ASCII_ART_LOG_FORMAT";

const DEFAULT_LEVEL: &str = "warn";

/// Format of the lines written to stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// One line per event
    #[default]
    Compact,
    /// Multi-line, coloured, with source locations
    Pretty,
    /// One JSON object per event
    Json,
}

impl LogFormat {
    /// Parse a format name, ignoring case and surrounding whitespace
    pub fn parse(name: &str) -> Result<Self, String> {
        <Self as ValueEnum>::from_str(name.trim(), true).map_err(|_| {
            let expected: Vec<String> = Self::value_variants()
                .iter()
                .filter_map(ValueEnum::to_possible_value)
                .map(|value| value.get_name().to_string())
                .collect();
            format!("unknown format `{}`, expected {}", name, expected.join("|"))
        })
    }
}

/// Resolve the filter directive: explicit value, then `ASCII_ART_LOG_LEVEL`,
/// then `RUST_LOG`, then `warn`.
pub fn resolve_level(level: Option<&str>) -> String {
    level
        .map(|s| s.to_string())
        .or_else(|| std::env::var(LOG_LEVEL_ENV).ok())
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LEVEL.to_string())
}

/// Resolve the log format: explicit value, then `ASCII_ART_LOG_FORMAT`,
/// then compact.
pub fn resolve_format(format: Option<&str>) -> Result<LogFormat, String> {
    match format
        .map(|s| s.to_string())
        .or_else(|| std::env::var(LOG_FORMAT_ENV).ok())
    {
        Some(name) => LogFormat::parse(&name),
        None => Ok(LogFormat::default()),
    }
}

/// Initialize the global tracing subscriber
///
/// Returns an error for an unknown format or when a subscriber is already
/// installed.
pub fn init_logging(
    level: Option<&str>,
    format: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = resolve_format(format).map_err(|e| format!("Invalid log format: {}", e))?;

    let log_level = resolve_level(level);
    let filter = EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    match format {
        LogFormat::Compact => {
            Registry::default()
                .with(filter)
                .with(
                    fmt::Layer::default()
                        .with_writer(std::io::stderr)
                        .with_target(false)
                        .with_level(true)
                        .with_file(false)
                        .with_line_number(false)
                        .with_span_events(FmtSpan::NONE),
                )
                .try_init()?;
        }
        LogFormat::Pretty => {
            Registry::default()
                .with(filter)
                .with(
                    fmt::Layer::default()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true)
                        .with_file(true)
                        .with_line_number(true)
                        .with_span_events(FmtSpan::ACTIVE)
                        .pretty(),
                )
                .try_init()?;
        }
        LogFormat::Json => {
            Registry::default()
                .with(filter)
                .with(
                    fmt::Layer::default()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true)
                        .with_span_events(FmtSpan::CLOSE)
                        .json(),
                )
                .try_init()?;
        }
    }

    Ok(())
}
