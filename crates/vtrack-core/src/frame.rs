#![forbid(unsafe_code)]

//! Frame resolution and the host bounds seam.
//!
//! A [`Frame`] is the reference rectangle a tracked region is measured
//! against: either the visible viewport or a specific host element (a
//! scrolling container). The host implements [`BoundsProvider`]; the
//! engines never touch the platform directly.

use crate::geometry::Rect;

/// Injected collaborator that answers rectangle queries.
///
/// Implementations must round fractional measurements to integer pixels and
/// must return [`Rect::ZERO`] for an element that is absent or not yet
/// measurable. Queries have no side effects and are re-invoked on every
/// evaluation cycle; results are never cached across cycles, because content
/// can move without a notification the caller recognizes as distinct.
pub trait BoundsProvider {
    /// Opaque host handle for a measurable element.
    type Element;

    /// Current visible viewport size, with the origin at `(0, 0)`.
    fn viewport(&self) -> Rect;

    /// Screen-space rectangle of an element, or [`Rect::ZERO`] if it
    /// cannot be measured.
    fn element_rect(&self, element: &Self::Element) -> Rect;
}

/// The reference rectangle for a tracked region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Frame<E> {
    /// Measure against the visible viewport.
    #[default]
    Viewport,
    /// Measure against a host element (a scrolling container).
    Element(E),
}

impl<E> Frame<E> {
    /// Query the current rectangle of this frame.
    pub fn resolve<P>(&self, provider: &P) -> Rect
    where
        P: BoundsProvider<Element = E>,
    {
        match self {
            Frame::Viewport => provider.viewport(),
            Frame::Element(element) => provider.element_rect(element),
        }
    }
}
