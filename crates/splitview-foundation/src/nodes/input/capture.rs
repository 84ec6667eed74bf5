//! Temporary capture of the global pointer stream.
//!
//! While a divider is being dragged the pointer routinely leaves the divider
//! element, so movement and release have to be observed document-wide. A
//! [`PointerCaptureHost`] hands out a [`CaptureGuard`] that keeps those global
//! listeners bound; dropping the guard unbinds them on every path, including
//! a gesture cancelled by the platform.

use std::fmt;
use std::rc::Weak;

use super::types::PointerEvent;

/// Receiver of captured pointer events.
pub trait PointerSink {
    fn on_captured_event(&self, event: &PointerEvent);
}

/// Weak route from a host's global listeners back to the capturing gesture.
///
/// Holding the sink weakly keeps listeners from extending the lifetime of the
/// controller that owns the guard.
#[derive(Clone)]
pub struct CaptureTarget {
    sink: Weak<dyn PointerSink>,
}

impl CaptureTarget {
    pub fn new(sink: Weak<dyn PointerSink>) -> Self {
        Self { sink }
    }

    /// Forwards `event` to the sink. Returns false once the sink is gone.
    pub fn dispatch(&self, event: &PointerEvent) -> bool {
        match self.sink.upgrade() {
            Some(sink) => {
                sink.on_captured_event(event);
                true
            }
            None => false,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.sink.strong_count() > 0
    }
}

impl fmt::Debug for CaptureTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureTarget")
            .field("alive", &self.is_alive())
            .finish()
    }
}

/// Binds global pointer listeners for the duration of a gesture.
///
/// Implementations deliver `Move`, `Up` and `Cancel` events observed anywhere
/// in the host to `target` until the returned guard is released.
pub trait PointerCaptureHost {
    fn capture(&self, target: CaptureTarget) -> CaptureGuard;
}

/// Releases a pointer capture exactly once, on [`release`](Self::release) or drop.
#[must_use = "dropping the guard releases the capture immediately"]
pub struct CaptureGuard {
    release: Option<Box<dyn FnOnce()>>,
}

impl CaptureGuard {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A guard with nothing to release, for hosts that deliver global events
    /// some other way.
    pub fn detached() -> Self {
        Self { release: None }
    }

    pub fn is_held(&self) -> bool {
        self.release.is_some()
    }

    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl fmt::Debug for CaptureGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureGuard")
            .field("held", &self.is_held())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[test]
    fn guard_releases_once_on_drop() {
        let releases = Rc::new(Cell::new(0));
        {
            let releases = Rc::clone(&releases);
            let _guard = CaptureGuard::new(move || releases.set(releases.get() + 1));
        }
        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn explicit_release_does_not_run_twice() {
        let releases = Rc::new(Cell::new(0));
        let guard = {
            let releases = Rc::clone(&releases);
            CaptureGuard::new(move || releases.set(releases.get() + 1))
        };
        assert!(guard.is_held());
        guard.release();
        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn detached_guard_holds_nothing() {
        assert!(!CaptureGuard::detached().is_held());
    }

    struct Recorder(RefCell<Vec<PointerEvent>>);

    impl PointerSink for Recorder {
        fn on_captured_event(&self, event: &PointerEvent) {
            self.0.borrow_mut().push(event.clone());
        }
    }

    #[test]
    fn target_stops_dispatching_after_sink_drops() {
        let recorder = Rc::new(Recorder(RefCell::new(Vec::new())));
        let sink: Rc<dyn PointerSink> = recorder.clone();
        let target = CaptureTarget::new(Rc::downgrade(&sink));
        drop(sink);

        assert!(target.dispatch(&PointerEvent::moved(1.0, 1.0)));
        assert_eq!(recorder.0.borrow().len(), 1);

        drop(recorder);
        assert!(!target.is_alive());
        assert!(!target.dispatch(&PointerEvent::moved(2.0, 2.0)));
    }
}
