//! Log subscriber installation.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "LISPY_LOG";

/// Set to `1` for indented, span-nested output.
pub const LOG_TREE_ENV: &str = "LISPY_LOG_TREE";

/// Install the global tracing subscriber.
///
/// Does nothing unless `LISPY_LOG` is set (e.g. `LISPY_LOG=debug` or
/// `LISPY_LOG=lispy_eval=trace`). Logs go to stderr so they never mix
/// with printed results. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var(LOG_ENV).is_err() {
            return;
        }
        let filter = EnvFilter::from_env(LOG_ENV);

        if std::env::var(LOG_TREE_ENV).is_ok_and(|v| v == "1") {
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
