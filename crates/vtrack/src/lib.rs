#![forbid(unsafe_code)]

//! ViewTrack public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.

// --- Core re-exports -------------------------------------------------------

pub use vtrack_core::change::{ChangeGate, RectPair};
pub use vtrack_core::exposure::{
    Direction, ExposureConfig, ExposureEngine, ExposureState, ExposureTransition,
};
pub use vtrack_core::frame::{BoundsProvider, Frame};
pub use vtrack_core::geometry::{Rect, Sides};
pub use vtrack_core::mode::{Axes, Axis, KeepDims, StickyEdge, StickyEdges};
pub use vtrack_core::sticky::{
    Anchor, EdgeClamps, Placement, PlacementContext, PositionStrategy, StickyConfig, StickyEngine,
    StickyState, StickyTransition,
};

// --- Runtime re-exports ----------------------------------------------------

#[cfg(feature = "runtime")]
pub use vtrack_runtime::{Bindings, ExposureTracker, ObserverHandle, StickyTracker};

/// Convenience imports for typical usage.
pub mod prelude {
    pub use crate::{
        Axis, BoundsProvider, Direction, ExposureConfig, Frame, Rect, Sides, StickyConfig,
        StickyEdge,
    };

    #[cfg(feature = "runtime")]
    pub use crate::{ExposureTracker, StickyTracker};
}
