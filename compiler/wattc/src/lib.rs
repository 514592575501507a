//! The watt driver.
//!
//! - [`Session`]: an environment that persists across inputs, committed only when an
//!   input runs through both passes without error
//! - [`repl`]: the dot-commands of the interactive prompt
//! - [`init_tracing`]: opt-in logging for the binary

pub mod repl;
mod session;

use std::sync::Once;

pub use session::{Session, WattError};

static TRACING_INIT: Once = Once::new();

/// Install the log subscriber.
///
/// Does nothing unless `RUST_LOG` is set, e.g. `RUST_LOG=watt_eval=debug`. Safe to call
/// more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
