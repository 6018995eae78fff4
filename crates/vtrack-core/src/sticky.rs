#![forbid(unsafe_code)]

//! Sticky transition engine.
//!
//! Decides when a tracked region should pin to the top or bottom edge of
//! its container frame, and computes the positioning parameters the
//! rendering layer needs while the region is stuck.
//!
//! # State machine
//!
//! Three states: free, stuck-to-top, stuck-to-bottom. Transitions are
//! evaluated once per admitted rectangle pair, in a fixed priority order
//! (top entry, top exit, bottom entry, bottom exit); the first matching
//! rule wins, so at most one transition fires per cycle. Entry uses `<`
//! against the configured offset and exit uses `>=`, leaving no dead zone
//! in which both or neither rule holds.
//!
//! # Invariants
//!
//! 1. The engine is never stuck to two edges at once (the state is a
//!    tagged union, not independent flags).
//! 2. A transition is reported only when the stuck flag actually flips.
//! 3. While disabled, entries are suppressed; a previously stuck engine
//!    exits on its next transition request and keeps the edge tag so that
//!    re-enabling resumes against the same edge.

use crate::geometry::Rect;
use crate::mode::{KeepDims, StickyEdge, StickyEdges};

/// How the stuck element is positioned by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionStrategy {
    /// Viewport-fixed positioning; pinned offsets are viewport-relative.
    #[default]
    Fixed,
    /// Absolute positioning inside the region's offset parent; pinned
    /// offsets are corrected so the visual result matches `Fixed`.
    Absolute,
}

/// Sticky behavior configuration. Replaceable between evaluation cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StickyConfig {
    /// Edges to evaluate.
    pub edges: StickyEdges,
    /// Distance from the frame top below which the region sticks to it.
    pub offset_top: i32,
    /// Distance from the frame bottom below which the region sticks to it.
    pub offset_bottom: i32,
    /// Suppress entries and force an exit if currently stuck.
    pub disabled: bool,
    /// Freeze the pre-stick horizontal offset and size while stuck.
    pub keep_bounds: bool,
    /// Which dimensions `keep_bounds` freezes.
    pub keep_dims: KeepDims,
    /// Positioning strategy for the stuck element.
    pub strategy: PositionStrategy,
}

impl Default for StickyConfig {
    fn default() -> Self {
        Self {
            edges: StickyEdges::default(),
            offset_top: 0,
            offset_bottom: 0,
            disabled: false,
            keep_bounds: false,
            keep_dims: KeepDims::default(),
            strategy: PositionStrategy::default(),
        }
    }
}

impl StickyConfig {
    /// Set the evaluated edges (a single edge or a set).
    #[must_use]
    pub fn with_edges(mut self, edges: impl Into<StickyEdges>) -> Self {
        self.edges = edges.into();
        self
    }

    /// Set the top entry offset.
    #[must_use]
    pub fn with_offset_top(mut self, offset: i32) -> Self {
        self.offset_top = offset;
        self
    }

    /// Set the bottom entry offset.
    #[must_use]
    pub fn with_offset_bottom(mut self, offset: i32) -> Self {
        self.offset_bottom = offset;
        self
    }

    /// Freeze pre-stick bounds while stuck.
    #[must_use]
    pub fn with_keep_bounds(mut self, keep: bool) -> Self {
        self.keep_bounds = keep;
        self
    }

    /// Select which dimensions `keep_bounds` freezes.
    #[must_use]
    pub fn with_keep_dims(mut self, dims: KeepDims) -> Self {
        self.keep_dims = dims;
        self
    }

    /// Set the positioning strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: PositionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enable or disable sticking.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Observable sticky state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StickyState {
    is_sticky: bool,
    edge: Option<StickyEdge>,
}

impl StickyState {
    /// Whether the region is currently stuck.
    #[inline]
    pub const fn is_sticky(&self) -> bool {
        self.is_sticky
    }

    /// The edge of the most recent stick, retained across exits.
    #[inline]
    pub const fn edge(&self) -> Option<StickyEdge> {
        self.edge
    }
}

/// A reported change of the stuck flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StickyTransition {
    /// New value of the stuck flag.
    pub is_sticky: bool,
    /// The edge the transition concerns.
    pub edge: StickyEdge,
}

/// External pinning boundaries resolved for the current cycle.
///
/// `None` on a side means no boundary was supplied and the clamp step is
/// skipped for that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeClamps {
    /// Viewport-relative position of a fixed element above, limiting how
    /// far down a bottom-stuck region may be pinned.
    pub top: Option<i32>,
    /// Viewport-relative position of a fixed element below, limiting how
    /// far down a top-stuck region may be pinned.
    pub bottom: Option<i32>,
}

/// Which frame edge the stuck element is pinned against, with the pinned
/// viewport-relative distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Distance from the viewport top.
    Top(i32),
    /// Distance from the viewport bottom.
    Bottom(i32),
}

/// Positioning parameters for a stuck element, handed to the rendering
/// layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// The pinned edge and distance.
    pub anchor: Anchor,
    /// Strategy the offsets were computed for.
    pub strategy: PositionStrategy,
    /// Frozen horizontal offset, present under `keep_bounds`.
    pub left: Option<i32>,
    /// Frozen width, present under `keep_bounds` with `KeepDims::WIDTH`.
    pub width: Option<i32>,
    /// Frozen height, present under `keep_bounds` with `KeepDims::HEIGHT`.
    pub height: Option<i32>,
}

/// Geometry inputs for [`StickyEngine::placement`].
#[derive(Debug, Clone, Copy)]
pub struct PlacementContext {
    /// The tracked region's rect from the last admitted cycle.
    pub content: Rect,
    /// The container frame's rect from the last admitted cycle.
    pub frame: Rect,
    /// Current viewport rect.
    pub viewport: Rect,
    /// Current rect of the stuck (inner) element, for clamp math.
    pub inner: Rect,
    /// Current rect of the offset parent, for the absolute-strategy
    /// rebase. Ignored under `Fixed`.
    pub parent: Rect,
    /// External boundaries, already resolved for this cycle.
    pub clamps: EdgeClamps,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Free { last: Option<StickyEdge> },
    Stuck(StickyEdge),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Request {
    Enter(StickyEdge),
    Exit(StickyEdge),
}

/// The sticky state machine. One instance per tracked region.
#[derive(Debug, Clone)]
pub struct StickyEngine {
    phase: Phase,
}

impl Default for StickyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl StickyEngine {
    /// Create an engine in the free (not stuck) state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Free { last: None },
        }
    }

    /// The observable state: stuck flag plus the retained edge tag.
    #[must_use]
    pub fn state(&self) -> StickyState {
        match self.phase {
            Phase::Stuck(edge) => StickyState {
                is_sticky: true,
                edge: Some(edge),
            },
            Phase::Free { last } => StickyState {
                is_sticky: false,
                edge: last,
            },
        }
    }

    /// Run one evaluation cycle over an admitted rectangle pair.
    ///
    /// Returns the transition iff the stuck flag flipped; `None` means no
    /// observable change (and no callback should fire).
    pub fn evaluate(
        &mut self,
        content: Rect,
        frame: Rect,
        config: &StickyConfig,
    ) -> Option<StickyTransition> {
        let top_space = content.top.saturating_sub(frame.top);
        let bottom_space = frame
            .height
            .saturating_sub(content.bottom())
            .saturating_add(frame.top);

        crate::trace!(top_space, bottom_space, "sticky evaluate");

        // While disabled the region renders unstuck, so entry rules see it
        // as free; exit rules never match because they require `stuck`.
        let stuck = !config.disabled && matches!(self.phase, Phase::Stuck(_));

        let request = if config.edges.contains(StickyEdges::TOP)
            && top_space < config.offset_top
            && !stuck
        {
            Request::Enter(StickyEdge::Top)
        } else if stuck
            && self.stuck_edge() == Some(StickyEdge::Top)
            && top_space >= config.offset_top
        {
            Request::Exit(StickyEdge::Top)
        } else if config.edges.contains(StickyEdges::BOTTOM)
            && bottom_space < config.offset_bottom
            && !stuck
        {
            Request::Enter(StickyEdge::Bottom)
        } else if stuck
            && self.stuck_edge() == Some(StickyEdge::Bottom)
            && bottom_space >= config.offset_bottom
        {
            Request::Exit(StickyEdge::Bottom)
        } else {
            return None;
        };

        self.apply(request, config.disabled)
    }

    /// Positioning parameters while stuck; `None` when free or disabled.
    #[must_use]
    pub fn placement(&self, config: &StickyConfig, geo: &PlacementContext) -> Option<Placement> {
        let edge = match self.phase {
            Phase::Stuck(edge) if !config.disabled => edge,
            _ => return None,
        };

        let anchor = match edge {
            StickyEdge::Top => {
                let mut top = config.offset_top.saturating_add(geo.frame.top);
                if let Some(bottom_edge) = geo.clamps.bottom {
                    let max_top = bottom_edge.saturating_sub(geo.inner.height);
                    if top > max_top {
                        top = max_top;
                    }
                }
                if config.strategy == PositionStrategy::Absolute {
                    // Re-base from viewport-fixed to the in-flow position.
                    top = top.saturating_sub(geo.content.top);
                }
                Anchor::Top(top)
            }
            StickyEdge::Bottom => {
                let mut bottom = config.offset_bottom.saturating_add(
                    geo.viewport
                        .height
                        .saturating_sub(geo.frame.top)
                        .saturating_sub(geo.frame.height),
                );
                if let Some(top_edge) = geo.clamps.top {
                    let max_bottom = geo
                        .viewport
                        .height
                        .saturating_sub(top_edge)
                        .saturating_sub(geo.inner.height);
                    if bottom > max_bottom {
                        bottom = max_bottom;
                    }
                }
                if config.strategy == PositionStrategy::Absolute {
                    bottom = bottom.saturating_add(
                        geo.content
                            .top
                            .saturating_add(geo.content.height)
                            .saturating_sub(geo.viewport.height),
                    );
                }
                Anchor::Bottom(bottom)
            }
        };

        let (left, width, height) = if config.keep_bounds {
            let left = match config.strategy {
                PositionStrategy::Absolute => geo.content.left.saturating_sub(geo.parent.left),
                PositionStrategy::Fixed => geo.content.left,
            };
            (
                Some(left),
                config
                    .keep_dims
                    .contains(KeepDims::WIDTH)
                    .then_some(geo.content.width),
                config
                    .keep_dims
                    .contains(KeepDims::HEIGHT)
                    .then_some(geo.content.height),
            )
        } else {
            (None, None, None)
        };

        Some(Placement {
            anchor,
            strategy: config.strategy,
            left,
            width,
            height,
        })
    }

    const fn stuck_edge(&self) -> Option<StickyEdge> {
        match self.phase {
            Phase::Stuck(edge) => Some(edge),
            Phase::Free { .. } => None,
        }
    }

    fn apply(&mut self, request: Request, disabled: bool) -> Option<StickyTransition> {
        if disabled {
            // Entries are suppressed. A request arriving while previously
            // stuck forces the exit; the edge tag is retained so that
            // re-enabling resumes evaluating against the same edge.
            if let Phase::Stuck(edge) = self.phase {
                self.phase = Phase::Free { last: Some(edge) };
                crate::debug!(?edge, "sticky forced exit while disabled");
                return Some(StickyTransition {
                    is_sticky: false,
                    edge,
                });
            }
            return None;
        }

        match request {
            Request::Enter(edge) => {
                self.phase = Phase::Stuck(edge);
                crate::debug!(?edge, "sticky enter");
                Some(StickyTransition {
                    is_sticky: true,
                    edge,
                })
            }
            Request::Exit(edge) => {
                self.phase = Phase::Free { last: Some(edge) };
                crate::debug!(?edge, "sticky exit");
                Some(StickyTransition {
                    is_sticky: false,
                    edge,
                })
            }
        }
    }
}
