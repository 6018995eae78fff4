#![forbid(unsafe_code)]

//! Per-region trackers: the evaluation cycle around the core engines.
//!
//! A tracker owns the state for exactly one tracked region and runs the
//! cycle in a fixed synchronous order on every notification:
//!
//! 1. resolve the container frame (falling back to the viewport),
//! 2. re-query both rectangles through the [`BoundsProvider`],
//! 3. short-circuit through the change gate if nothing moved,
//! 4. run the transition engine,
//! 5. dispatch callbacks for the transition, if any.
//!
//! Everything runs to completion on the notifying thread; the change gate
//! is what bounds re-entrant notification loops (applying computed state
//! can itself trigger layout notifications).
//!
//! Configuration and callbacks are holders, not captures: they can be
//! replaced between cycles and the cycle always reads the latest values.

use vtrack_core::change::{ChangeGate, RectPair};
use vtrack_core::exposure::{Direction, ExposureConfig, ExposureEngine, ExposureState};
use vtrack_core::frame::{BoundsProvider, Frame};
use vtrack_core::geometry::Rect;
use vtrack_core::mode::StickyEdge;
use vtrack_core::sticky::{
    EdgeClamps, Placement, PlacementContext, StickyConfig, StickyEngine, StickyState,
};

use crate::binding::{Bindings, ObserverHandle};

type Resolver<E> = Box<dyn FnMut() -> Option<Frame<E>>>;
type EdgeFn = Box<dyn FnMut() -> Option<i32>>;

/// Tracks one region's sticky state against its container frame.
pub struct StickyTracker<P: BoundsProvider>
where
    P::Element: 'static,
{
    content: P::Element,
    inner: Option<P::Element>,
    resolver: Resolver<P::Element>,
    config: StickyConfig,
    engine: StickyEngine,
    gate: ChangeGate,
    bindings: Bindings,
    top_edge: Option<EdgeFn>,
    bottom_edge: Option<EdgeFn>,
    on_sticky_change: Option<Box<dyn FnMut(bool, StickyEdge)>>,
}

impl<P: BoundsProvider> StickyTracker<P>
where
    P::Element: 'static,
{
    /// Track `content` against the viewport.
    #[must_use]
    pub fn new(content: P::Element) -> Self {
        Self {
            content,
            inner: None,
            resolver: Box::new(|| None),
            config: StickyConfig::default(),
            engine: StickyEngine::new(),
            gate: ChangeGate::new(),
            bindings: Bindings::new(),
            top_edge: None,
            bottom_edge: None,
            on_sticky_change: None,
        }
    }

    /// Measure against the frame this resolver yields instead of the
    /// viewport. Re-invoked every cycle; `None` falls back to the viewport.
    #[must_use]
    pub fn with_resolver(
        mut self,
        resolver: impl FnMut() -> Option<Frame<P::Element>> + 'static,
    ) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    /// The element that is visually pinned while stuck, used for clamp
    /// math in [`placement`](Self::placement).
    #[must_use]
    pub fn with_inner(mut self, inner: P::Element) -> Self {
        self.inner = Some(inner);
        self
    }

    /// Replace the configuration; the next cycle reads the new values.
    pub fn set_config(&mut self, config: StickyConfig) {
        self.config = config;
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &StickyConfig {
        &self.config
    }

    /// Replace the sticky-change callback.
    pub fn on_sticky_change(&mut self, callback: impl FnMut(bool, StickyEdge) + 'static) {
        self.on_sticky_change = Some(Box::new(callback));
    }

    /// Boundary of a fixed element above, consulted only while stuck to
    /// the bottom. A closure returning `None` means the viewport top.
    pub fn set_top_edge(&mut self, edge: impl FnMut() -> Option<i32> + 'static) {
        self.top_edge = Some(Box::new(edge));
    }

    /// Boundary of a fixed element below, consulted only while stuck to
    /// the top. A closure returning `None` means the viewport bottom.
    pub fn set_bottom_edge(&mut self, edge: impl FnMut() -> Option<i32> + 'static) {
        self.bottom_edge = Some(Box::new(edge));
    }

    /// Teardown bookkeeping for this region's notification sources.
    pub fn bindings_mut(&mut self) -> &mut Bindings {
        &mut self.bindings
    }

    /// Current sticky state (stuck flag plus retained edge tag).
    #[must_use]
    pub fn state(&self) -> StickyState {
        self.engine.state()
    }

    /// Effective stuck flag as the rendering layer should see it: a
    /// disabled region renders unstuck even before the engine's forced
    /// exit has run.
    #[must_use]
    pub fn is_sticky(&self) -> bool {
        !self.config.disabled && self.engine.state().is_sticky()
    }

    /// Entry point for host notifications (scroll, resize, observer).
    pub fn notify(&mut self, provider: &P) {
        self.run_cycle(provider);
    }

    /// Force one evaluation cycle outside the notification flow, e.g.
    /// after a programmatic mutation no notification source observed.
    pub fn layout(&mut self, provider: &P) {
        self.run_cycle(provider);
    }

    /// Positioning parameters for the stuck element; `None` while free or
    /// disabled. Edge clamp closures are consulted here, never while free.
    pub fn placement(&mut self, provider: &P) -> Option<Placement> {
        if !self.is_sticky() {
            return None;
        }
        let pair = self.gate.last();
        let viewport = provider.viewport();
        let inner = match &self.inner {
            Some(element) => provider.element_rect(element),
            None => Rect::ZERO,
        };
        let parent = provider.element_rect(&self.content);
        let clamps = EdgeClamps {
            top: self.top_edge.as_mut().map(|edge| edge().unwrap_or(0)),
            bottom: self
                .bottom_edge
                .as_mut()
                .map(|edge| edge().unwrap_or(viewport.height)),
        };
        let geo = PlacementContext {
            content: pair.content,
            frame: pair.frame,
            viewport,
            inner,
            parent,
            clamps,
        };
        self.engine.placement(&self.config, &geo)
    }

    /// Release all notification bindings. Idempotent; also runs on drop.
    pub fn release(&mut self) {
        self.bindings.release();
    }

    fn run_cycle(&mut self, provider: &P) {
        let frame = (self.resolver)().unwrap_or(Frame::Viewport);
        let frame_rect = frame.resolve(provider);
        let content_rect = provider.element_rect(&self.content);
        let pair = RectPair::new(content_rect, frame_rect);

        if pair.content == Rect::ZERO {
            // Region not measurable yet; a later cycle will observe real
            // geometry.
            tracing::trace!("content rect is zero, skipping cycle");
            return;
        }
        if !self.gate.admit(pair) {
            tracing::trace!("geometry unchanged, skipping cycle");
            return;
        }

        if let Some(transition) = self.engine.evaluate(pair.content, pair.frame, &self.config) {
            tracing::debug!(
                is_sticky = transition.is_sticky,
                edge = ?transition.edge,
                "sticky change"
            );
            if let Some(callback) = self.on_sticky_change.as_mut() {
                callback(transition.is_sticky, transition.edge);
            }
        }
    }
}

impl<P: BoundsProvider> std::fmt::Debug for StickyTracker<P>
where
    P::Element: 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StickyTracker")
            .field("config", &self.config)
            .field("state", &self.engine.state())
            .field("bindings", &self.bindings)
            .finish_non_exhaustive()
    }
}

/// Tracks one region's exposure state against its container frame.
pub struct ExposureTracker<P: BoundsProvider>
where
    P::Element: 'static,
{
    content: P::Element,
    resolver: Resolver<P::Element>,
    config: ExposureConfig,
    engine: ExposureEngine,
    gate: ChangeGate,
    bindings: Bindings,
    on_exposure: Option<Box<dyn FnMut(Direction)>>,
    on_un_exposure: Option<Box<dyn FnMut(Direction)>>,
}

impl<P: BoundsProvider> ExposureTracker<P>
where
    P::Element: 'static,
{
    /// Track `content` against the viewport.
    #[must_use]
    pub fn new(content: P::Element) -> Self {
        Self {
            content,
            resolver: Box::new(|| None),
            config: ExposureConfig::default(),
            engine: ExposureEngine::new(),
            gate: ChangeGate::new(),
            bindings: Bindings::new(),
            on_exposure: None,
            on_un_exposure: None,
        }
    }

    /// Measure against the frame this resolver yields instead of the
    /// viewport. Re-invoked every cycle; `None` falls back to the viewport.
    #[must_use]
    pub fn with_resolver(
        mut self,
        resolver: impl FnMut() -> Option<Frame<P::Element>> + 'static,
    ) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    /// Replace the configuration; the next cycle reads the new values.
    pub fn set_config(&mut self, config: ExposureConfig) {
        self.config = config;
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &ExposureConfig {
        &self.config
    }

    /// Replace the exposure callback.
    pub fn on_exposure(&mut self, callback: impl FnMut(Direction) + 'static) {
        self.on_exposure = Some(Box::new(callback));
    }

    /// Replace the un-exposure callback.
    pub fn on_un_exposure(&mut self, callback: impl FnMut(Direction) + 'static) {
        self.on_un_exposure = Some(Box::new(callback));
    }

    /// Teardown bookkeeping for this region's notification sources.
    pub fn bindings_mut(&mut self) -> &mut Bindings {
        &mut self.bindings
    }

    /// Wire up a custom observer's product. An element is handed back so
    /// the host can subscribe its scroll notifications too; a teardown
    /// closure is registered for release.
    pub fn adopt_observer(&mut self, handle: ObserverHandle<P::Element>) -> Option<P::Element> {
        match handle {
            ObserverHandle::Element(element) => Some(element),
            ObserverHandle::Teardown(teardown) => {
                self.bindings.register(teardown);
                None
            }
        }
    }

    /// Current exposure state (flag plus last transition direction).
    #[must_use]
    pub fn state(&self) -> ExposureState {
        self.engine.state()
    }

    /// Whether the region is currently exposed.
    #[must_use]
    pub fn is_exposed(&self) -> bool {
        self.engine.state().is_exposed()
    }

    /// False once a fire-once exposure has happened: the host may stop
    /// delivering notifications (the tracker ignores them regardless).
    #[must_use]
    pub fn wants_notifications(&self) -> bool {
        !self.engine.suppressed()
    }

    /// Whether real content should be rendered. Always true without the
    /// lazy flag; with it, flips true at the first exposure and stays
    /// true through later exposure flips.
    #[must_use]
    pub fn should_render_content(&self) -> bool {
        !self.config.lazy || self.engine.materialized()
    }

    /// Entry point for host notifications (scroll, resize, observer).
    pub fn notify(&mut self, provider: &P) {
        self.run_cycle(provider);
    }

    /// Force one evaluation cycle outside the notification flow.
    pub fn layout(&mut self, provider: &P) {
        self.run_cycle(provider);
    }

    /// Release all notification bindings. Idempotent; also runs on drop.
    pub fn release(&mut self) {
        self.bindings.release();
    }

    fn run_cycle(&mut self, provider: &P) {
        if self.engine.suppressed() {
            tracing::trace!("exposure frozen, ignoring notification");
            return;
        }

        let frame = (self.resolver)().unwrap_or(Frame::Viewport);
        let frame_rect = frame.resolve(provider);
        let content_rect = provider.element_rect(&self.content);
        let pair = RectPair::new(content_rect, frame_rect);

        if pair.content == Rect::ZERO {
            tracing::trace!("content rect is zero, skipping cycle");
            return;
        }
        if !self.gate.admit(pair) {
            tracing::trace!("geometry unchanged, skipping cycle");
            return;
        }

        if let Some(transition) = self.engine.evaluate(pair.content, pair.frame, &self.config) {
            tracing::debug!(
                is_exposed = transition.is_exposed,
                direction = ?transition.direction,
                "exposure change"
            );
            if transition.is_exposed {
                if let Some(callback) = self.on_exposure.as_mut() {
                    callback(transition.direction);
                }
            } else if let Some(callback) = self.on_un_exposure.as_mut() {
                callback(transition.direction);
            }
        }

        if self.engine.suppressed() {
            // Fire-once exposure happened this cycle: notification sources
            // are no longer needed.
            self.bindings.release();
        }
    }
}

impl<P: BoundsProvider> std::fmt::Debug for ExposureTracker<P>
where
    P::Element: 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExposureTracker")
            .field("config", &self.config)
            .field("state", &self.engine.state())
            .field("bindings", &self.bindings)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;
    use vtrack_core::geometry::Rect;
    use vtrack_core::mode::StickyEdge;
    use vtrack_core::sticky::Anchor;

    const CONTAINER: u32 = 1;
    const CONTENT: u32 = 2;
    const INNER: u32 = 3;

    struct TestHost {
        viewport: Rect,
        rects: RefCell<HashMap<u32, Rect>>,
    }

    impl TestHost {
        fn new(viewport: Rect) -> Self {
            Self {
                viewport,
                rects: RefCell::new(HashMap::new()),
            }
        }

        fn set(&self, id: u32, rect: Rect) {
            self.rects.borrow_mut().insert(id, rect);
        }
    }

    impl BoundsProvider for TestHost {
        type Element = u32;

        fn viewport(&self) -> Rect {
            self.viewport
        }

        fn element_rect(&self, element: &u32) -> Rect {
            self.rects
                .borrow()
                .get(element)
                .copied()
                .unwrap_or(Rect::ZERO)
        }
    }

    fn sticky_events() -> (Rc<RefCell<Vec<(bool, StickyEdge)>>>, impl FnMut(bool, StickyEdge)) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        (events, move |is_sticky, edge| {
            sink.borrow_mut().push((is_sticky, edge));
        })
    }

    #[test]
    fn scroll_into_sticky_fires_exactly_once() {
        // Container 1000 tall, 50-tall content sitting at its bottom edge.
        let host = TestHost::new(Rect::from_size(400, 800));
        host.set(CONTAINER, Rect::new(0, 0, 400, 1000));
        host.set(CONTENT, Rect::new(0, 1000, 400, 50));

        let mut tracker = StickyTracker::<TestHost>::new(CONTENT)
            .with_resolver(|| Some(Frame::Element(CONTAINER)));
        tracker.set_config(StickyConfig::default().with_edges(StickyEdge::Top));
        let (events, callback) = sticky_events();
        tracker.on_sticky_change(callback);

        tracker.notify(&host);
        assert!(events.borrow().is_empty());
        assert!(!tracker.is_sticky());

        // Scroll until the content's top passes the frame top.
        host.set(CONTENT, Rect::new(0, -10, 400, 50));
        tracker.notify(&host);
        assert_eq!(events.borrow().as_slice(), &[(true, StickyEdge::Top)]);
        assert!(tracker.is_sticky());

        // Re-delivered notification with identical geometry: the change
        // gate swallows it before any state or callback work.
        tracker.notify(&host);
        assert_eq!(events.borrow().len(), 1);
    }

    #[test]
    fn resolver_none_falls_back_to_viewport() {
        let host = TestHost::new(Rect::from_size(400, 800));
        host.set(CONTENT, Rect::new(0, -10, 400, 50));

        let mut tracker = StickyTracker::<TestHost>::new(CONTENT).with_resolver(|| None);
        tracker.set_config(StickyConfig::default().with_edges(StickyEdge::Top));
        let (events, callback) = sticky_events();
        tracker.on_sticky_change(callback);

        // top_space measured against the viewport: -10 < 0 sticks.
        tracker.notify(&host);
        assert_eq!(events.borrow().as_slice(), &[(true, StickyEdge::Top)]);
    }

    #[test]
    fn unmeasured_content_is_skipped_until_it_appears() {
        let host = TestHost::new(Rect::from_size(400, 800));

        let mut tracker = StickyTracker::<TestHost>::new(CONTENT);
        tracker.set_config(StickyConfig::default().with_edges(StickyEdge::Top));
        let (events, callback) = sticky_events();
        tracker.on_sticky_change(callback);

        // Content element not attached yet.
        tracker.notify(&host);
        assert!(events.borrow().is_empty());

        host.set(CONTENT, Rect::new(0, -10, 400, 50));
        tracker.notify(&host);
        assert_eq!(events.borrow().len(), 1);
    }

    #[test]
    fn layout_forces_a_cycle() {
        let host = TestHost::new(Rect::from_size(400, 800));
        host.set(CONTENT, Rect::new(0, -10, 400, 50));

        let mut tracker = StickyTracker::<TestHost>::new(CONTENT);
        tracker.set_config(StickyConfig::default().with_edges(StickyEdge::Top));
        let (events, callback) = sticky_events();
        tracker.on_sticky_change(callback);

        tracker.layout(&host);
        assert_eq!(events.borrow().len(), 1);
    }

    #[test]
    fn placement_resolves_edge_closures() {
        let host = TestHost::new(Rect::from_size(400, 800));
        host.set(CONTAINER, Rect::new(0, 0, 400, 1000));
        host.set(CONTENT, Rect::new(0, -10, 400, 50));
        host.set(INNER, Rect::new(0, 0, 400, 40));

        let mut tracker = StickyTracker::<TestHost>::new(CONTENT)
            .with_resolver(|| Some(Frame::Element(CONTAINER)))
            .with_inner(INNER);
        tracker.set_config(
            StickyConfig::default()
                .with_edges(StickyEdge::Top)
                .with_offset_top(100),
        );
        tracker.set_bottom_edge(|| Some(50));

        tracker.notify(&host);
        assert!(tracker.is_sticky());

        // Unclamped top of 100 capped at 50 - 40 = 10.
        let placement = tracker.placement(&host).unwrap();
        assert_eq!(placement.anchor, Anchor::Top(10));
    }

    #[test]
    fn placement_bottom_edge_closure_none_means_viewport_bottom() {
        let host = TestHost::new(Rect::from_size(400, 800));
        host.set(CONTENT, Rect::new(0, -10, 400, 50));
        host.set(INNER, Rect::new(0, 0, 400, 40));

        let mut tracker = StickyTracker::<TestHost>::new(CONTENT).with_inner(INNER);
        tracker.set_config(
            StickyConfig::default()
                .with_edges(StickyEdge::Top)
                .with_offset_top(900),
        );
        // A supplied closure that yields nothing clamps against the
        // viewport bottom instead.
        tracker.set_bottom_edge(|| None);

        tracker.notify(&host);
        let placement = tracker.placement(&host).unwrap();
        assert_eq!(placement.anchor, Anchor::Top(800 - 40));
    }

    #[test]
    fn placement_without_closures_is_unclamped() {
        let host = TestHost::new(Rect::from_size(400, 800));
        host.set(CONTENT, Rect::new(0, -10, 400, 50));

        let mut tracker = StickyTracker::<TestHost>::new(CONTENT);
        tracker.set_config(
            StickyConfig::default()
                .with_edges(StickyEdge::Top)
                .with_offset_top(900),
        );

        tracker.notify(&host);
        let placement = tracker.placement(&host).unwrap();
        assert_eq!(placement.anchor, Anchor::Top(900));
    }

    #[test]
    fn placement_is_none_while_free() {
        let host = TestHost::new(Rect::from_size(400, 800));
        host.set(CONTENT, Rect::new(0, 100, 400, 50));

        let mut tracker = StickyTracker::<TestHost>::new(CONTENT);
        tracker.set_config(StickyConfig::default().with_edges(StickyEdge::Top));
        tracker.notify(&host);
        assert_eq!(tracker.placement(&host), None);
    }

    #[test]
    fn disabling_after_stick_renders_unstuck_and_fires_on_next_cycle() {
        let host = TestHost::new(Rect::from_size(400, 800));
        host.set(CONTENT, Rect::new(0, -10, 400, 50));

        let mut tracker = StickyTracker::<TestHost>::new(CONTENT);
        tracker.set_config(StickyConfig::default().with_edges(StickyEdge::Top));
        let (events, callback) = sticky_events();
        tracker.on_sticky_change(callback);

        tracker.notify(&host);
        assert!(tracker.is_sticky());

        // Latest-wins config holder: the flipped flag is visible to the
        // effective state immediately.
        tracker.set_config(
            StickyConfig::default()
                .with_edges(StickyEdge::Top)
                .with_disabled(true),
        );
        assert!(!tracker.is_sticky());

        // The engine's forced exit lands on the next admitted cycle.
        host.set(CONTENT, Rect::new(0, -20, 400, 50));
        tracker.notify(&host);
        assert_eq!(
            events.borrow().as_slice(),
            &[(true, StickyEdge::Top), (false, StickyEdge::Top)]
        );
        assert_eq!(tracker.state().edge(), Some(StickyEdge::Top));
    }

    fn exposure_events() -> (Rc<RefCell<Vec<(bool, Direction)>>>, ExposureTracker<TestHost>) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut tracker = ExposureTracker::<TestHost>::new(CONTENT);
        let sink = Rc::clone(&events);
        tracker.on_exposure(move |direction| sink.borrow_mut().push((true, direction)));
        let sink = Rc::clone(&events);
        tracker.on_un_exposure(move |direction| sink.borrow_mut().push((false, direction)));
        (events, tracker)
    }

    #[test]
    fn exposure_callbacks_fire_per_transition() {
        let host = TestHost::new(Rect::from_size(400, 500));
        host.set(CONTENT, Rect::new(0, 700, 100, 100));

        let (events, mut tracker) = exposure_events();

        tracker.notify(&host);
        assert!(events.borrow().is_empty());

        host.set(CONTENT, Rect::new(0, 100, 100, 100));
        tracker.notify(&host);
        assert_eq!(events.borrow().as_slice(), &[(true, Direction::Up)]);

        // Still exposed elsewhere: no callback.
        host.set(CONTENT, Rect::new(0, 200, 100, 100));
        tracker.notify(&host);
        assert_eq!(events.borrow().len(), 1);

        host.set(CONTENT, Rect::new(0, 700, 100, 100));
        tracker.notify(&host);
        assert_eq!(
            events.borrow().as_slice(),
            &[(true, Direction::Up), (false, Direction::Down)]
        );
    }

    #[test]
    fn once_releases_bindings_and_freezes() {
        let host = TestHost::new(Rect::from_size(400, 500));
        host.set(CONTENT, Rect::new(0, 700, 100, 100));

        let (events, mut tracker) = exposure_events();
        tracker.set_config(ExposureConfig::default().with_once(true));

        let released = Rc::new(Cell::new(false));
        let flag = Rc::clone(&released);
        tracker.bindings_mut().register(move || flag.set(true));

        tracker.notify(&host);
        assert!(tracker.wants_notifications());
        assert!(!released.get());

        host.set(CONTENT, Rect::new(0, 100, 100, 100));
        tracker.notify(&host);
        assert_eq!(events.borrow().len(), 1);
        assert!(!tracker.wants_notifications());
        assert!(released.get());

        // Later notifications are ignored even if geometry flips back.
        host.set(CONTENT, Rect::new(0, 700, 100, 100));
        tracker.notify(&host);
        host.set(CONTENT, Rect::new(0, 100, 100, 100));
        tracker.notify(&host);
        assert_eq!(events.borrow().len(), 1);
        assert!(tracker.is_exposed());
    }

    #[test]
    fn lazy_content_materializes_once() {
        let host = TestHost::new(Rect::from_size(400, 500));
        host.set(CONTENT, Rect::new(0, 700, 100, 100));

        let (_events, mut tracker) = exposure_events();
        tracker.set_config(ExposureConfig::default().with_lazy(true));

        tracker.notify(&host);
        assert!(!tracker.should_render_content());

        host.set(CONTENT, Rect::new(0, 100, 100, 100));
        tracker.notify(&host);
        assert!(tracker.should_render_content());

        // Exposure flips back; materialization does not.
        host.set(CONTENT, Rect::new(0, 700, 100, 100));
        tracker.notify(&host);
        assert!(!tracker.is_exposed());
        assert!(tracker.should_render_content());
    }

    #[test]
    fn adopt_observer_element_is_handed_back() {
        let (_events, mut tracker) = exposure_events();
        let element = tracker.adopt_observer(ObserverHandle::Element(42));
        assert_eq!(element, Some(42));
        assert!(tracker.bindings_mut().is_empty());
    }

    #[test]
    fn adopt_observer_teardown_runs_on_release() {
        let (_events, mut tracker) = exposure_events();
        let torn_down = Rc::new(Cell::new(false));
        let flag = Rc::clone(&torn_down);
        let handle = tracker.adopt_observer(ObserverHandle::Teardown(Box::new(move || {
            flag.set(true);
        })));
        assert_eq!(handle, None);

        tracker.release();
        assert!(torn_down.get());

        // Releasing again is a no-op.
        tracker.release();
    }

    #[test]
    fn exposure_with_element_frame() {
        let host = TestHost::new(Rect::from_size(400, 800));
        host.set(CONTAINER, Rect::new(0, 100, 400, 300));
        host.set(CONTENT, Rect::new(0, 500, 100, 100));

        let events = Rc::new(RefCell::new(Vec::new()));
        let mut tracker = ExposureTracker::<TestHost>::new(CONTENT)
            .with_resolver(|| Some(Frame::Element(CONTAINER)));
        let sink = Rc::clone(&events);
        tracker.on_exposure(move |direction| sink.borrow_mut().push((true, direction)));

        // top_space = 500 - 100 = 400 > 300: below the container's band.
        tracker.notify(&host);
        assert!(!tracker.is_exposed());

        host.set(CONTENT, Rect::new(0, 250, 100, 100));
        tracker.notify(&host);
        assert!(tracker.is_exposed());
        assert_eq!(events.borrow().as_slice(), &[(true, Direction::Up)]);
    }
}
