use std::sync::Once;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt};

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// A non-empty `RUST_LOG` is used as given. Otherwise every target logs at
/// `warn` and the crate's own events at `info`, or `debug` when `verbose` is
/// set. Later calls are no-ops.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        let filter = build_filter(rust_log.as_deref(), verbose);

        fmt().with_env_filter(filter).with_target(false).init();
    });
}

fn build_filter(rust_log: Option<&str>, verbose: bool) -> EnvFilter {
    let builder = EnvFilter::builder().with_default_directive(LevelFilter::WARN.into());
    match rust_log.map(str::trim).filter(|s| !s.is_empty()) {
        Some(directives) => builder.parse_lossy(directives),
        None if verbose => builder.parse_lossy("warn,rashod=debug"),
        None => builder.parse_lossy("warn,rashod=info"),
    }
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::filter::LevelFilter;

    use super::build_filter;

    #[test]
    fn init_does_not_panic() {
        super::init_tracing(false);
        super::init_tracing(true);
    }

    #[test]
    fn test_rust_log_is_not_overridden() {
        let filter = build_filter(Some("rashod=trace"), false);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
        assert!(!filter.to_string().contains("rashod=info"));
    }

    #[test]
    fn test_default_keeps_other_crates_at_warn() {
        let filter = build_filter(None, false);
        let directives = filter.to_string();
        assert!(directives.contains("rashod=info"), "{directives}");
        assert!(directives.contains("warn"), "{directives}");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_verbose_raises_crate_level() {
        let filter = build_filter(None, true);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_blank_rust_log_uses_defaults() {
        let filter = build_filter(Some("  "), false);
        assert!(filter.to_string().contains("rashod=info"));
    }
}
