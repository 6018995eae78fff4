#![forbid(unsafe_code)]

//! Mode sets: which edges, axes, and dimensions an engine evaluates.
//!
//! Callers configure either a single value or a set; the flag types cover
//! both through the `From` impls (a single edge converts to a one-element
//! set). The empty set matches nothing.

use bitflags::bitflags;

/// A frame edge the sticky engine can pin to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StickyEdge {
    Top,
    Bottom,
}

bitflags! {
    /// The set of edges the sticky engine evaluates.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StickyEdges: u8 {
        const TOP = 1 << 0;
        const BOTTOM = 1 << 1;
    }
}

impl Default for StickyEdges {
    /// Bottom-only, matching the most common pinned-footer use.
    fn default() -> Self {
        Self::BOTTOM
    }
}

impl From<StickyEdge> for StickyEdges {
    fn from(edge: StickyEdge) -> Self {
        match edge {
            StickyEdge::Top => Self::TOP,
            StickyEdge::Bottom => Self::BOTTOM,
        }
    }
}

/// A scroll axis the exposure engine can track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Vertical,
    Horizontal,
}

bitflags! {
    /// The set of axes the exposure engine evaluates.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Axes: u8 {
        const VERTICAL = 1 << 0;
        const HORIZONTAL = 1 << 1;
    }
}

impl Default for Axes {
    /// Both axes: exposure requires overlap vertically and horizontally.
    fn default() -> Self {
        Self::all()
    }
}

impl From<Axis> for Axes {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::Vertical => Self::VERTICAL,
            Axis::Horizontal => Self::HORIZONTAL,
        }
    }
}

bitflags! {
    /// Which measured dimensions to freeze when sticking with
    /// `keep_bounds`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct KeepDims: u8 {
        const WIDTH = 1 << 0;
        const HEIGHT = 1 << 1;
    }
}

impl Default for KeepDims {
    /// Preserve both dimensions.
    fn default() -> Self {
        Self::all()
    }
}
