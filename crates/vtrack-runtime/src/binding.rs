#![forbid(unsafe_code)]

//! Notification-source bindings and teardown bookkeeping.
//!
//! The host subscribes a tracker to its scroll/resize sources and hands
//! the matching unsubscribe actions to [`Bindings`]. Releasing runs every
//! registered teardown exactly once; releasing again is a no-op, and
//! dropping a `Bindings` releases it. This mirrors the host-side listener
//! add/remove symmetry: every subscription registered here must have its
//! removal registered here too.

/// What a custom observer factory produced.
///
/// A factory may hand back a host element — the host should additionally
/// subscribe the tracker to that element's scroll notifications — or a
/// teardown closure to run when the region is torn down.
pub enum ObserverHandle<E> {
    /// Subscribe this element's scroll notifications as well.
    Element(E),
    /// Run this on teardown.
    Teardown(Box<dyn FnOnce()>),
}

impl<E: std::fmt::Debug> std::fmt::Debug for ObserverHandle<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Element(e) => f.debug_tuple("Element").field(e).finish(),
            Self::Teardown(_) => f.debug_tuple("Teardown").finish_non_exhaustive(),
        }
    }
}

/// Idempotent collection of unsubscribe actions for one tracked region.
#[derive(Default)]
pub struct Bindings {
    teardowns: Vec<Box<dyn FnOnce()>>,
}

impl Bindings {
    /// Create an empty set of bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an unsubscribe action to run on release.
    pub fn register(&mut self, teardown: impl FnOnce() + 'static) {
        self.teardowns.push(Box::new(teardown));
    }

    /// Number of registered, not yet released, teardowns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.teardowns.len()
    }

    /// True when nothing remains to release.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.teardowns.is_empty()
    }

    /// Run every registered teardown once. Idempotent: a second call finds
    /// nothing left to run.
    pub fn release(&mut self) {
        if self.teardowns.is_empty() {
            return;
        }
        tracing::debug!(count = self.teardowns.len(), "releasing bindings");
        for teardown in self.teardowns.drain(..) {
            teardown();
        }
    }
}

impl Drop for Bindings {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Bindings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bindings")
            .field("teardowns", &self.teardowns.len())
            .finish()
    }
}
