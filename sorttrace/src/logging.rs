//! Development-time tracing for the sort engine and its server.
//!
//! Steps recorded into a [`crate::trace::Trace`] are product output and are
//! unaffected by `RUST_LOG`. This module only configures diagnostics.

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Starts from `RUST_LOG` (or `warn` if unset) and always adds `directives`
/// on top, so a binary keeps its own info-level events whatever the
/// environment says about other targets.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=sorttrace=debug cargo run -p sorttrace-server
/// ```
pub fn init(directives: &[&str]) -> Result<(), ParseError> {
    let base = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let filter = with_directives(base, directives)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
    Ok(())
}

fn with_directives(mut filter: EnvFilter, directives: &[&str]) -> Result<EnvFilter, ParseError> {
    for directive in directives {
        filter = filter.add_directive(directive.parse()?);
    }
    Ok(filter)
}
