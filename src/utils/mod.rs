use std::sync::Once;

use tracing_subscriber::EnvFilter;

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "chair_ledger=info";

/// Filter from `RUST_LOG` when it is set and valid, `chair_ledger=info` otherwise.
pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(log_filter())
            .with_writer(std::io::stderr)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{subscriber, Level};
    use tracing_subscriber::prelude::*;

    fn levels_enabled(directives: &str) -> (bool, bool) {
        let registry = tracing_subscriber::registry().with(EnvFilter::new(directives));
        subscriber::with_default(registry, || {
            (
                tracing::enabled!(target: "chair_ledger", Level::INFO),
                tracing::enabled!(target: "chair_ledger", Level::DEBUG),
            )
        })
    }

    #[test]
    fn default_directive_logs_info_but_not_debug() {
        assert_eq!(levels_enabled(DEFAULT_DIRECTIVE), (true, false));
    }

    #[test]
    fn env_directives_are_not_overridden() {
        assert_eq!(levels_enabled("chair_ledger=debug"), (true, true));
        assert_eq!(levels_enabled("off"), (false, false));
    }
}
