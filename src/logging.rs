//! Logging setup
//!
//! Diagnostics go to stderr through `tracing-subscriber`, leaving stdout to
//! command output and the `--json` event stream.

use is_terminal::IsTerminal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "HUBLOAD_LOG";

/// Filter directive for a `-v` count
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "hubload=warn",
        1 => "hubload=info",
        2 => "hubload=debug",
        _ => "hubload=trace",
    }
}

/// Install the global subscriber.
///
/// `HUBLOAD_LOG` wins over the verbosity flag when it parses. Calling this
/// twice is harmless; the second call is ignored.
pub fn init(verbose: u8) {
    let filter = std::env::var(LOG_ENV)
        .ok()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive(verbose)));

    let use_ansi = std::io::stderr().is_terminal();
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(use_ansi)
        .with_filter(filter);

    if tracing_subscriber::registry()
        .with(console_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("global subscriber already installed");
    }
}
