//! End-to-end browser tests for the family public law case management
//! service.
//!
//! The crate splits cleanly into two halves:
//!
//! - **Pure locator synthesis** ([`locator`], [`tab`]): compile field paths
//!   and tab descriptions into XPath/CSS queries and assertion plans, with
//!   no browser in sight. This is where most of the test coverage lives.
//! - **Execution** ([`driver`], [`browser`], [`pages`], [`workflows`]): an
//!   async [`CaseDriver`](driver::CaseDriver) boundary with a scriptable
//!   mock for unit tests and a Chrome DevTools Protocol backend (feature
//!   `browser`) for the real thing.

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

pub mod config;
pub mod driver;
pub mod fixtures;
pub mod locator;
pub mod pages;
pub mod result;
pub mod tab;
pub mod wait;
pub mod workflows;

#[cfg(feature = "browser")]
pub mod browser;

pub use config::{Persona, SuiteConfig, UserCredentials};
pub use driver::{CaseDriver, DriverConfig, ElementHandle, MockDriver};
pub use locator::{Locator, LocatorOptions, Selector};
pub use result::{E2eError, E2eResult};
pub use tab::{FieldPath, TabValue, VisibleText};

#[cfg(feature = "browser")]
pub use browser::ChromiumDriver;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Install the tracing subscriber for a test run.
///
/// Honours `RUST_LOG`; defaults to `info` for this crate. Safe to call from
/// several tests, later calls are no-ops.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fpl_e2e=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod lib_tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
    }
}
