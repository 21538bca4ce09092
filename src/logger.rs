//! Tracing subscriber setup.
//!
//! The chosen level applies to everything except the HTTP client stack,
//! which is capped at `warn` so a `debug` run shows pipeline decisions
//! rather than connection-pool chatter. A non-empty `RUST_LOG` replaces the
//! whole filter unless the level was forced on the command line.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Directives appended after the base level.
const QUIET_DEPENDENCIES: &[&str] = &["hyper=warn", "hyper_util=warn", "reqwest=warn", "rustls=warn"];

/// Install the global subscriber, writing to stderr.
///
/// `forced` means `level` came from `-v` flags and must win over `RUST_LOG`.
pub fn init(level: &str, forced: bool) -> Result<(), AppError> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = build_filter(level, forced, rust_log.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Logger(format!("failed to set subscriber: {e}")))
}

/// Validate a level string such as `"info"` or `"debug"`.
///
/// Called by [`crate::config::load_from`] on `[assistant].log_level` and
/// its env override, and again here before building the filter.
pub fn parse_level(level: &str) -> Result<LevelFilter, AppError> {
    let level = level.trim();
    if level.is_empty() {
        return Err(AppError::Logger("log level must not be empty".into()));
    }
    level
        .parse::<LevelFilter>()
        .map_err(|_| AppError::Logger(format!("unrecognised log level: '{level}'")))
}

fn build_filter(level: &str, forced: bool, rust_log: Option<&str>) -> Result<EnvFilter, AppError> {
    parse_level(level)?;

    if !forced {
        // an unparsable RUST_LOG falls back to the configured level
        if let Some(Ok(filter)) = rust_log.filter(|s| !s.trim().is_empty()).map(EnvFilter::try_new) {
            return Ok(filter);
        }
    }

    let mut directives = vec![level.trim().to_ascii_lowercase()];
    directives.extend(QUIET_DEPENDENCIES.iter().map(|d| d.to_string()));
    EnvFilter::try_new(directives.join(","))
        .map_err(|e| AppError::Logger(format!("invalid log filter for level '{level}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_levels_parse() {
        for l in ["error", "warn", "info", "debug", "trace", " DEBUG "] {
            assert!(parse_level(l).is_ok(), "expected '{l}' to be valid");
        }
    }

    #[test]
    fn unknown_levels_are_rejected() {
        assert!(matches!(parse_level("verbose"), Err(AppError::Logger(_))));
        assert!(parse_level("  ").is_err());
    }

    #[test]
    fn filter_quiets_http_stack() {
        let filter = build_filter("debug", false, None).unwrap().to_string();
        assert!(filter.contains("debug"));
        assert!(filter.contains("hyper=warn"));
        assert!(filter.contains("reqwest=warn"));
    }

    #[test]
    fn rust_log_wins_unless_forced() {
        let from_env = build_filter("info", false, Some("ia_migrante=trace")).unwrap().to_string();
        assert!(from_env.contains("trace"));
        assert!(!from_env.contains("hyper=warn"));

        let forced = build_filter("info", true, Some("ia_migrante=trace")).unwrap().to_string();
        assert!(!forced.contains("trace"));
        assert!(forced.contains("hyper=warn"));
    }

    #[test]
    fn blank_rust_log_is_ignored() {
        let filter = build_filter("warn", false, Some("  ")).unwrap().to_string();
        assert!(filter.contains("hyper=warn"));
    }

    #[test]
    fn invalid_level_fails_before_rust_log() {
        assert!(build_filter("loud", false, Some("info")).is_err());
    }

    #[test]
    fn init_succeeds_or_already_installed() {
        // another test in this process may have installed a subscriber first
        match init("info", true) {
            Ok(()) => {}
            Err(AppError::Logger(msg)) if msg.contains("set subscriber") => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
}
