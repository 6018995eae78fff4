#![forbid(unsafe_code)]

//! Logging and tracing support.
//!
//! This module re-exports the `tracing` macros when the `tracing` feature
//! is enabled. When the feature is disabled, no-op macros keep call sites
//! compiling with zero overhead.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace, warn};

/// Install a global JSON subscriber filtered by `RUST_LOG`.
///
/// Intended for production embedders that want structured log output
/// without wiring their own subscriber.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}

// When tracing is not enabled, provide no-op macros
#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// No-op trace macro when tracing is disabled.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// No-op debug macro when tracing is disabled.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// No-op warn macro when tracing is disabled.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }
}
