//! Browser console logging.
//!
//! Directives come from `Config::log_filter`, so a page can turn up
//! verbosity with `<body data-log="storefront_wasm=trace">`.

use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

pub const DEFAULT_LOG_FILTER: &str = "error,storefront_wasm=debug";

/// Parse the directives, falling back to the default set when they are invalid.
fn env_filter(directives: &str) -> (EnvFilter, bool) {
    match EnvFilter::try_new(directives) {
        Ok(filter) => (filter, true),
        Err(_) => (EnvFilter::new(DEFAULT_LOG_FILTER), false),
    }
}

/// Install the console subscriber. A second call leaves the first one in place.
pub fn init_logging(directives: &str) {
    let (filter, valid) = env_filter(directives);

    // Browsers have no `std::time`, and the console renders its own levels.
    let console = tracing_subscriber::fmt::layer()
        .without_time()
        .with_ansi(false)
        .with_level(false)
        .with_line_number(true)
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level());

    if tracing_subscriber::registry().with(filter).with(console).try_init().is_err() {
        return;
    }
    if valid {
        tracing::debug!(directives, "console logging ready");
    } else {
        tracing::warn!(directives, fallback = DEFAULT_LOG_FILTER, "ignoring invalid log filter");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn valid_directives_are_kept() {
        let (filter, valid) = env_filter("warn,storefront_wasm=trace");
        assert!(valid);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn invalid_directives_fall_back_to_default() {
        let (filter, valid) = env_filter("storefront_wasm=loudest");
        assert!(!valid);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
