//! Logging setup.
//!
//! Console output through `tracing_subscriber::fmt`, filtered by `RUST_LOG`
//! (default `info`), plus an optional [`JsonlLayer`] appending one JSON
//! object per event to `<data_dir>/logs/<instance>.jsonl`.
//!
//! ```bash
//! # errors from the last run
//! jq 'select(.level == "error")' ~/.local/share/showcase/logs/showcase.jsonl
//! ```

pub mod entry;
pub mod layer;

pub use entry::JsonLogEntry;
pub use layer::JsonlLayer;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber.
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init(jsonl: Option<JsonlLayer>) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(jsonl)
        .try_init();

    if result.is_err() {
        tracing::debug!("Global subscriber already installed");
    }
}
