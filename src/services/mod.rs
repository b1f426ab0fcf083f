//! Service layer.
//!
//! Services own the application's I/O. The UI talks to them through
//! traits so views can be exercised against canned data in tests.

pub mod countries;

pub use countries::{CountriesApi, CountriesError, RestCountriesClient};

use std::sync::OnceLock;

use tokio::runtime::Runtime;

static RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Shared tokio runtime for service I/O.
///
/// gpui drives the UI on its own executor; network futures are spawned
/// here and their join handles awaited from gpui tasks.
pub fn runtime() -> &'static Runtime {
    RUNTIME.get_or_init(|| Runtime::new().expect("Failed to start tokio runtime"))
}
