use std::sync::Once;

use tracing_subscriber::{prelude::*, EnvFilter};
use tracing_tree::HierarchicalLayer;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. `RUST_LOG` wins when set
/// (`RUST_LOG=cinder_lexer=trace` shows every scanned token); otherwise
/// `verbose` turns on `debug` for the driver and scanner. Logs go to stderr
/// so they never mix with the token report on stdout.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if verbose {
            EnvFilter::new("cinderc=debug,cinder_lexer=debug")
        } else {
            return;
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(
                HierarchicalLayer::new(2)
                    .with_targets(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    });
}
