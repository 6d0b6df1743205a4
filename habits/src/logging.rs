//! Diagnostic tracing for the habits binary.
//!
//! Tracing goes to stderr and is controlled by `RUST_LOG`. Everything the
//! user is meant to read (menu, prompts, validation and load messages) is
//! printed by the session on stdout and is unaffected by the filter.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_DIRECTIVES: &str = "warn";

/// Install the stderr subscriber.
///
/// A second call, or a subscriber installed by an embedding program, is left
/// in place.
///
/// # Example
/// ```bash
/// RUST_LOG=habits=debug cargo run
/// ```
pub fn init() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter_from(directives.as_deref()))
        .with(layer)
        .try_init();
}

fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_directives_fall_back_to_warn() {
        assert!(filter_from(None).to_string().contains("warn"));
    }

    #[test]
    fn explicit_directives_are_used() {
        assert!(filter_from(Some("habits=debug")).to_string().contains("habits=debug"));
    }
}
