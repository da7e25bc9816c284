//! Tracing subscriber setup shared by the binaries

use crate::config::LoggingSettings;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins over `logging.level`. `logging.format = "json"` switches
/// to JSON lines; anything else prints human-readable text. Logs go to
/// stderr so stdout stays free for the client's event output.
pub fn init_tracing(settings: &LoggingSettings) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    // A second initialisation (e.g. in tests) keeps the first subscriber
    let _ = if settings.format.eq_ignore_ascii_case("json") {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
