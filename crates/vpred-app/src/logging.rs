//! Tracing subscriber setup.
//!
//! `LOG_FORMAT=json` selects JSON lines; anything else gives compact text.
//! Logs go to stderr so stdout stays reserved for the form and verdict.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "vpred=warn";

/// Whether `LOG_FORMAT` asks for JSON output.
pub fn use_json_format(value: Option<&str>) -> bool {
    value.map(|v| v.trim().eq_ignore_ascii_case("json")).unwrap_or(false)
}

/// Install the global subscriber.
pub fn init_tracing() {
    let use_json = use_json_format(std::env::var("LOG_FORMAT").ok().as_deref());

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(true)
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_selection() {
        assert!(use_json_format(Some("json")));
        assert!(use_json_format(Some(" JSON ")));
        assert!(!use_json_format(Some("text")));
        assert!(!use_json_format(None));
    }
}
