#![forbid(unsafe_code)]

//! Core: geometry, change detection, and the sticky/exposure transition
//! engines.
//!
//! Everything in this crate is a pure, synchronous state machine over
//! measured rectangles. The host platform is reached only through the
//! [`frame::BoundsProvider`] seam; wiring notifications and callbacks to
//! the engines is the job of `vtrack-runtime`.

pub mod change;
pub mod exposure;
pub mod frame;
pub mod geometry;
pub mod logging;
pub mod mode;
pub mod sticky;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, trace, warn};
