//! Settings resolved from command-line flags and the environment.
//!
//! Flags win; environment variables only switch behavior on.
//!
//! - `DOGGYBAG_STRICT=1` - reject unsupported file contents
//! - `DOGGYBAG_LOG=<filter>` - log filter (see [`crate::logging`])

use doggybag_tree::{BuildOptions, Traversal, UnsupportedPolicy};

/// Environment variable enabling strict flattening.
pub const STRICT_ENV: &str = "DOGGYBAG_STRICT";

/// Resolve flattening options.
///
/// `env` looks up an environment variable; pass `|key| std::env::var(key).ok()`
/// outside tests.
pub fn build_options(
    strict: bool,
    iterative: bool,
    env: impl Fn(&str) -> Option<String>,
) -> BuildOptions {
    let strict = strict || env(STRICT_ENV).is_some_and(|value| is_truthy(&value));

    BuildOptions::default()
        .with_unsupported(if strict {
            UnsupportedPolicy::Reject
        } else {
            UnsupportedPolicy::Substitute
        })
        .with_traversal(if iterative {
            Traversal::Iterative
        } else {
            Traversal::Recursive
        })
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
