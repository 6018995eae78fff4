#![forbid(unsafe_code)]

//! Exposure transition engine.
//!
//! Decides whether a tracked region currently overlaps the visible band of
//! its container frame along the configured axes, and which scroll
//! direction caused the most recent flip. Supports fire-once semantics
//! (evaluation freezes permanently after the first exposure) and a lazy
//! materialization latch for deferred content.

use crate::geometry::{Rect, Sides};
use crate::mode::Axes;

/// Scroll direction inferred from the content's movement between admitted
/// cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Exposure behavior configuration. Replaceable between evaluation cycles.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExposureConfig {
    /// Axes to evaluate; an inactive axis never gates exposure.
    pub axes: Axes,
    /// Extra per-side distance added to the visible band thresholds.
    pub offset: Sides,
    /// Freeze evaluation permanently after the first exposure.
    pub once: bool,
    /// Defer content materialization until the first exposure.
    pub lazy: bool,
}

impl ExposureConfig {
    /// Set the evaluated axes (a single axis or a set).
    #[must_use]
    pub fn with_axes(mut self, axes: impl Into<Axes>) -> Self {
        self.axes = axes.into();
        self
    }

    /// Set the per-side offsets.
    #[must_use]
    pub fn with_offset(mut self, offset: impl Into<Sides>) -> Self {
        self.offset = offset.into();
        self
    }

    /// Fire the exposure transition at most once.
    #[must_use]
    pub fn with_once(mut self, once: bool) -> Self {
        self.once = once;
        self
    }

    /// Defer content materialization until the first exposure.
    #[must_use]
    pub fn with_lazy(mut self, lazy: bool) -> Self {
        self.lazy = lazy;
        self
    }
}

/// Observable exposure state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExposureState {
    is_exposed: bool,
    direction: Option<Direction>,
}

impl ExposureState {
    /// Whether the region is currently exposed.
    #[inline]
    pub const fn is_exposed(&self) -> bool {
        self.is_exposed
    }

    /// Direction of the most recent transition, `None` before the first.
    #[inline]
    pub const fn direction(&self) -> Option<Direction> {
        self.direction
    }
}

/// A reported change of the exposure flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExposureTransition {
    /// New value of the exposure flag.
    pub is_exposed: bool,
    /// Direction that caused the flip.
    pub direction: Direction,
}

/// The exposure state machine. One instance per tracked region.
#[derive(Debug, Clone, Default)]
pub struct ExposureEngine {
    state: ExposureState,
    prev_top: i32,
    prev_left: i32,
    suppressed: bool,
    materialized: bool,
}

impl ExposureEngine {
    /// Create an engine in the not-exposed state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The observable state: exposure flag plus last transition direction.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> ExposureState {
        self.state
    }

    /// True once a fire-once exposure has happened; evaluation is frozen
    /// for the rest of this engine's lifetime and notification sources can
    /// be dropped.
    #[inline]
    #[must_use]
    pub const fn suppressed(&self) -> bool {
        self.suppressed
    }

    /// True once lazily deferred content has been materialized. Latches on
    /// the first exposure and never resets, regardless of later exposure
    /// flips.
    #[inline]
    #[must_use]
    pub const fn materialized(&self) -> bool {
        self.materialized
    }

    /// Run one evaluation cycle over an admitted rectangle pair.
    ///
    /// Returns the transition iff the exposure flag flipped. Direction is
    /// always inferred from the configured axes before the exposure test,
    /// with vertical precedence and the horizontal delta as tie-break; when
    /// only the horizontal axis is tracked, a purely vertical move still
    /// reports `Left`/`Right` (direction reporting is scoped to configured
    /// axes).
    pub fn evaluate(
        &mut self,
        content: Rect,
        frame: Rect,
        config: &ExposureConfig,
    ) -> Option<ExposureTransition> {
        if self.suppressed {
            return None;
        }

        let vertical = config.axes.contains(Axes::VERTICAL);
        let horizontal = config.axes.contains(Axes::HORIZONTAL);

        let mut direction = if self.prev_top <= content.top {
            Direction::Down
        } else {
            Direction::Up
        };
        if !vertical || (horizontal && self.prev_top == content.top) {
            direction = if self.prev_left <= content.left {
                Direction::Right
            } else {
                Direction::Left
            };
        }
        self.prev_top = content.top;
        self.prev_left = content.left;

        let top_space = content.top.saturating_sub(frame.top);
        let left_space = content.left.saturating_sub(frame.left);

        // Overlap with the frame's valid band per active axis; an inactive
        // axis never gates.
        let vertical_ok = !vertical
            || (top_space >= config.offset.top.saturating_sub(content.height)
                && top_space <= frame.height.saturating_sub(config.offset.bottom));
        let horizontal_ok = !horizontal
            || (left_space >= config.offset.left.saturating_sub(content.width)
                && left_space <= frame.width.saturating_sub(config.offset.right));
        let exposed = vertical_ok && horizontal_ok;

        crate::trace!(top_space, left_space, exposed, "exposure evaluate");

        if exposed == self.state.is_exposed {
            return None;
        }

        if config.once && !self.state.is_exposed {
            self.suppressed = true;
        }
        if exposed && config.lazy {
            self.materialized = true;
        }
        self.state = ExposureState {
            is_exposed: exposed,
            direction: Some(direction),
        };
        crate::debug!(exposed, ?direction, "exposure transition");

        Some(ExposureTransition {
            is_exposed: exposed,
            direction,
        })
    }
}
