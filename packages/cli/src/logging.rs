//! Logging setup for the binary.
//!
//! Filter priority (highest to lowest):
//! 1. `DOGGYBAG_LOG` environment variable (any `EnvFilter` directive)
//! 2. `-v` count on the command line
//! 3. `warn`

use tracing_subscriber::EnvFilter;

use crate::CliError;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "DOGGYBAG_LOG";

/// Level used when `DOGGYBAG_LOG` is not set.
pub fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build the log filter.
pub fn build_filter(verbosity: u8, env_directive: Option<&str>) -> Result<EnvFilter, CliError> {
    match env_directive {
        Some(directive) => EnvFilter::try_new(directive).map_err(|e| CliError::Logging {
            message: format!("invalid {}: {}", LOG_ENV, e),
        }),
        None => Ok(EnvFilter::new(default_level(verbosity))),
    }
}

/// Install the global subscriber, writing to stderr.
pub fn init(verbosity: u8) -> Result<(), CliError> {
    let env_directive = std::env::var(LOG_ENV).ok();
    let filter = build_filter(verbosity, env_directive.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| CliError::Logging {
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(default_level(0), "warn");
        assert_eq!(default_level(1), "info");
        assert_eq!(default_level(2), "debug");
        assert_eq!(default_level(9), "trace");
    }

    #[test]
    fn env_directive_wins() {
        let filter = build_filter(0, Some("doggybag_tree=trace")).unwrap();
        assert!(filter.to_string().contains("doggybag_tree=trace"));
    }
}
