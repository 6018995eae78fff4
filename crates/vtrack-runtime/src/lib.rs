#![forbid(unsafe_code)]

//! ViewTrack Runtime
//!
//! This crate ties the pure engines from `vtrack-core` to a host platform:
//! it owns the per-region evaluation cycle, the latest-wins configuration
//! and callback holders, and the lifecycle of notification-source
//! bindings.
//!
//! # Key Components
//!
//! - [`StickyTracker`] - one region's sticky state plus pin placement
//! - [`ExposureTracker`] - one region's exposure state plus lazy
//!   materialization
//! - [`Bindings`] - idempotent teardown of notification subscriptions
//! - [`ObserverHandle`] - what a custom observer factory produced
//!
//! # How it fits in the system
//! The host implements `vtrack_core::frame::BoundsProvider` and routes its
//! scroll/resize (and custom observer) notifications to
//! [`StickyTracker::notify`] / [`ExposureTracker::notify`]. Each
//! notification runs one synchronous evaluation cycle; the change gate
//! inside the tracker keeps re-entrant notification loops bounded. The
//! rendering layer reads the tracker state and placement afterwards.

pub mod binding;
pub mod tracker;

pub use binding::{Bindings, ObserverHandle};
pub use tracker::{ExposureTracker, StickyTracker};
