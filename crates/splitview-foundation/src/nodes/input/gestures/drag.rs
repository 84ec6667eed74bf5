//! Divider drag gesture.
//!
//! Pointer movement arrives far more often than the screen refreshes, and each
//! resize triggers a layout pass downstream. The controller therefore parks the
//! latest pointer position and reports it on the next frame only: any number
//! of moves between two frames collapse into one delta.
//!
//! Range checking works on the divider's travel since the gesture started.
//! A frame whose travel would leave `[-min_size, max_size]` is dropped whole,
//! never shortened to the boundary, but the anchor still advances so the
//! next frame measures from where the pointer really is.
//!
//! The resize callback must not re-enter the controller from inside a frame
//! delivery in a way that triggers another delivery; the controller does not
//! guard against it.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use splitview_core::{FrameCallbackRegistration, FrameClock};
use splitview_ui_graphics::Point;

use crate::gesture_constants::{DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE};
use crate::nodes::input::capture::{CaptureGuard, CaptureTarget, PointerCaptureHost, PointerSink};
use crate::nodes::input::types::{PointerEvent, PointerEventKind};
use crate::orientation::Orientation;

/// Immutable per-controller configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragConfig {
    pub orientation: Orientation,
    /// Allowed travel towards the negative end of the axis.
    pub min_size: f32,
    /// Allowed travel towards the positive end of the axis.
    pub max_size: f32,
}

impl DragConfig {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            min_size: DEFAULT_MIN_SIZE,
            max_size: DEFAULT_MAX_SIZE,
        }
    }

    pub fn horizontal() -> Self {
        Self::new(Orientation::Horizontal)
    }

    pub fn vertical() -> Self {
        Self::new(Orientation::Vertical)
    }

    pub fn with_min_size(mut self, min_size: f32) -> Self {
        self.min_size = min_size;
        self
    }

    pub fn with_max_size(mut self, max_size: f32) -> Self {
        self.max_size = max_size;
        self
    }

    /// Whether `offset` lies in `[-min_size, max_size]`. Both sizes are
    /// plain pixel amounts; `min_size` is negated for the lower bound.
    pub fn accepts(&self, offset: f32) -> bool {
        offset >= -self.min_size && offset <= self.max_size
    }
}

impl Default for DragConfig {
    fn default() -> Self {
        Self::horizontal()
    }
}

struct DragSession {
    origin: Point,
    anchor: Point,
    accumulated_offset: f32,
    pending: Option<Point>,
    frame: Option<FrameCallbackRegistration>,
    capture: Option<CaptureGuard>,
}

impl DragSession {
    fn new(position: Point) -> Self {
        Self {
            origin: position,
            anchor: position,
            accumulated_offset: 0.0,
            pending: None,
            frame: None,
            capture: None,
        }
    }
}

struct ControllerInner {
    config: DragConfig,
    clock: FrameClock,
    capture_host: RefCell<Option<Rc<dyn PointerCaptureHost>>>,
    session: RefCell<Option<DragSession>>,
    on_resize: RefCell<Box<dyn FnMut(f32)>>,
    weak_self: Weak<ControllerInner>,
}

impl ControllerInner {
    fn start(&self, position: Point) {
        // A second press without a release restarts the gesture from scratch.
        self.end();

        log::debug!(
            "{:?} divider drag started at ({}, {})",
            self.config.orientation,
            position.x,
            position.y
        );
        *self.session.borrow_mut() = Some(DragSession::new(position));

        let host = self.capture_host.borrow().clone();
        if let Some(host) = host {
            let sink: Weak<dyn PointerSink> = self.weak_self.clone();
            let guard = host.capture(CaptureTarget::new(sink));
            let unused = match self.session.borrow_mut().as_mut() {
                Some(session) => {
                    session.capture = Some(guard);
                    None
                }
                // The host ended the gesture while binding.
                None => Some(guard),
            };
            drop(unused);
        }
    }

    fn move_to(&self, position: Point) {
        if !position.x.is_finite() || !position.y.is_finite() {
            log::debug!("ignoring non-finite pointer position ({}, {})", position.x, position.y);
            return;
        }
        let previous = {
            let mut session = self.session.borrow_mut();
            let Some(session) = session.as_mut() else {
                return;
            };
            if session.pending.replace(position).is_some() {
                log::trace!("pointer move coalesced into pending frame");
            }
            session.frame.take()
        };
        drop(previous);

        let weak = self.weak_self.clone();
        let registration = self.clock.with_frame_nanos(move |_| {
            if let Some(inner) = weak.upgrade() {
                inner.deliver_frame();
            }
        });

        if let Some(session) = self.session.borrow_mut().as_mut() {
            session.frame = Some(registration);
        }
    }

    fn deliver_frame(&self) {
        let (fired, delta) = {
            let mut session = self.session.borrow_mut();
            let Some(session) = session.as_mut() else {
                return;
            };
            let fired = session.frame.take();
            let Some(position) = session.pending.take() else {
                return;
            };

            let orientation = self.config.orientation;
            let delta = orientation.component(position - session.anchor);
            let candidate = orientation.component(position - session.origin);
            session.anchor = position;

            if self.config.accepts(candidate) {
                session.accumulated_offset = candidate;
                (fired, Some(delta))
            } else {
                log::debug!(
                    "divider frame dropped: offset {} outside [-{}, {}]",
                    candidate,
                    self.config.min_size,
                    self.config.max_size
                );
                (fired, None)
            }
        };
        drop(fired);

        if let Some(delta) = delta {
            (self.on_resize.borrow_mut())(delta);
        }
    }

    fn end(&self) {
        let session = self.session.borrow_mut().take();
        if let Some(session) = session {
            log::debug!(
                "{:?} divider drag ended at offset {}",
                self.config.orientation,
                session.accumulated_offset
            );
            // Dropping the session cancels its frame and releases the capture.
            drop(session);
        }
    }
}

impl PointerSink for ControllerInner {
    fn on_captured_event(&self, event: &PointerEvent) {
        match event.kind {
            PointerEventKind::Move => self.move_to(event.position),
            PointerEventKind::Up | PointerEventKind::Cancel => self.end(),
            PointerEventKind::Down => {}
        }
    }
}

/// Turns a divider drag into bounded, frame-throttled resize deltas.
///
/// Cloning yields another handle to the same controller.
#[derive(Clone)]
pub struct DividerDragController {
    inner: Rc<ControllerInner>,
}

impl DividerDragController {
    /// Creates a controller that schedules deliveries on `clock` and reports
    /// each accepted delta to `on_resize`.
    pub fn new(config: DragConfig, clock: FrameClock, on_resize: impl FnMut(f32) + 'static) -> Self {
        let inner = Rc::new_cyclic(|weak_self| ControllerInner {
            config,
            clock,
            capture_host: RefCell::new(None),
            session: RefCell::new(None),
            on_resize: RefCell::new(Box::new(on_resize)),
            weak_self: weak_self.clone(),
        });
        Self { inner }
    }

    /// Routes global move/release events through `host` while a drag is active.
    pub fn with_capture_host(self, host: Rc<dyn PointerCaptureHost>) -> Self {
        self.set_capture_host(Some(host));
        self
    }

    /// Takes effect from the next gesture on.
    pub fn set_capture_host(&self, host: Option<Rc<dyn PointerCaptureHost>>) {
        *self.inner.capture_host.borrow_mut() = host;
    }

    pub fn config(&self) -> DragConfig {
        self.inner.config
    }

    /// Begins a gesture at `(x, y)`.
    pub fn start(&self, x: f32, y: f32) {
        self.inner.start(Point::new(x, y));
    }

    /// Records a pointer position; the delta is delivered on the next frame.
    /// Does nothing without an active gesture.
    pub fn move_to(&self, x: f32, y: f32) {
        self.inner.move_to(Point::new(x, y));
    }

    /// Finishes the gesture, dropping any undelivered movement.
    pub fn end(&self) {
        self.inner.end();
    }

    /// Feeds a raw pointer event: down starts, move moves, up and cancel end.
    ///
    /// Events the controller acts on are consumed.
    pub fn handle_pointer_event(&self, event: &PointerEvent) {
        match event.kind {
            PointerEventKind::Down => {
                self.inner.start(event.position);
                event.consume();
            }
            PointerEventKind::Move => {
                if self.is_dragging() {
                    self.inner.move_to(event.position);
                    event.consume();
                }
            }
            PointerEventKind::Up | PointerEventKind::Cancel => {
                if self.is_dragging() {
                    self.inner.end();
                    event.consume();
                }
            }
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.inner.session.borrow().is_some()
    }

    /// Travel committed so far in the current gesture; zero when idle.
    pub fn accumulated_offset(&self) -> f32 {
        self.inner
            .session
            .borrow()
            .as_ref()
            .map(|session| session.accumulated_offset)
            .unwrap_or(0.0)
    }

    /// Whether a delivery is waiting for the next frame.
    pub fn has_pending_frame(&self) -> bool {
        self.inner
            .session
            .borrow()
            .as_ref()
            .and_then(|session| session.frame.as_ref())
            .is_some_and(FrameCallbackRegistration::is_active)
    }

    /// Whether the current gesture holds a global pointer capture.
    pub fn has_capture(&self) -> bool {
        self.inner
            .session
            .borrow()
            .as_ref()
            .and_then(|session| session.capture.as_ref())
            .is_some_and(CaptureGuard::is_held)
    }
}

impl fmt::Debug for DividerDragController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DividerDragController")
            .field("config", &self.inner.config)
            .field("dragging", &self.is_dragging())
            .field("accumulated_offset", &self.accumulated_offset())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use splitview_core::{DefaultScheduler, Runtime};
    use std::sync::Arc;

    fn controller(config: DragConfig) -> (Runtime, DividerDragController, Rc<RefCell<Vec<f32>>>) {
        let runtime = Runtime::new(Arc::new(DefaultScheduler));
        let deltas = Rc::new(RefCell::new(Vec::new()));
        let controller = {
            let deltas = Rc::clone(&deltas);
            DividerDragController::new(config, runtime.frame_clock(), move |delta| {
                deltas.borrow_mut().push(delta)
            })
        };
        (runtime, controller, deltas)
    }

    #[test]
    fn config_defaults_match_gesture_constants() {
        let config = DragConfig::default();
        assert_eq!(config.orientation, Orientation::Horizontal);
        assert_eq!(config.min_size, DEFAULT_MIN_SIZE);
        assert_eq!(config.max_size, DEFAULT_MAX_SIZE);
    }

    #[test]
    fn accepts_is_inclusive_and_asymmetric() {
        let config = DragConfig::horizontal().with_min_size(0.0).with_max_size(20.0);
        assert!(config.accepts(0.0));
        assert!(config.accepts(20.0));
        assert!(!config.accepts(20.5));
        assert!(!config.accepts(-1.0));
    }

    #[test]
    fn move_is_deferred_until_frame() {
        let (runtime, controller, deltas) = controller(DragConfig::horizontal());
        controller.start(10.0, 0.0);
        controller.move_to(15.0, 0.0);

        assert!(deltas.borrow().is_empty());
        assert!(controller.has_pending_frame());
        assert!(runtime.needs_frame());

        runtime.drain_frame_callbacks(0);
        assert_eq!(deltas.borrow().as_slice(), &[5.0]);
        assert!(!controller.has_pending_frame());
    }

    #[test]
    fn each_move_replaces_the_pending_frame() {
        let (runtime, controller, _) = controller(DragConfig::horizontal());
        controller.start(0.0, 0.0);
        controller.move_to(1.0, 0.0);
        controller.move_to(2.0, 0.0);
        controller.move_to(3.0, 0.0);

        assert_eq!(runtime.handle().frame_callback_count(), 1);
    }

    #[test]
    fn end_cancels_pending_frame() {
        let (runtime, controller, deltas) = controller(DragConfig::horizontal());
        controller.start(0.0, 0.0);
        controller.move_to(30.0, 0.0);
        controller.end();

        assert!(!runtime.has_frame_callbacks());
        runtime.drain_frame_callbacks(0);
        assert!(deltas.borrow().is_empty());
    }

    #[test]
    fn restart_discards_previous_session() {
        let (runtime, controller, deltas) = controller(DragConfig::horizontal());
        controller.start(0.0, 0.0);
        controller.move_to(50.0, 0.0);
        runtime.drain_frame_callbacks(0);
        assert_eq!(controller.accumulated_offset(), 50.0);

        controller.start(200.0, 0.0);
        assert_eq!(controller.accumulated_offset(), 0.0);
        controller.move_to(190.0, 0.0);
        runtime.drain_frame_callbacks(1);

        assert_eq!(deltas.borrow().as_slice(), &[50.0, -10.0]);
    }

    #[test]
    fn handle_pointer_event_consumes_what_it_acts_on() {
        let (runtime, controller, deltas) = controller(DragConfig::vertical());

        let stray = PointerEvent::moved(0.0, 5.0);
        controller.handle_pointer_event(&stray);
        assert!(!stray.is_consumed());

        let down = PointerEvent::down(0.0, 100.0);
        controller.handle_pointer_event(&down);
        assert!(down.is_consumed());

        let moved = PointerEvent::moved(0.0, 120.0);
        controller.handle_pointer_event(&moved);
        assert!(moved.is_consumed());
        runtime.drain_frame_callbacks(0);

        let cancel = PointerEvent::cancel();
        controller.handle_pointer_event(&cancel);
        assert!(cancel.is_consumed());
        assert!(!controller.is_dragging());

        assert_eq!(deltas.borrow().as_slice(), &[20.0]);
    }

    #[test]
    fn dropping_the_controller_leaves_runtime_clean() {
        let (runtime, controller, deltas) = controller(DragConfig::horizontal());
        controller.start(0.0, 0.0);
        controller.move_to(10.0, 0.0);
        drop(controller);

        assert!(!runtime.has_frame_callbacks());
        runtime.drain_frame_callbacks(0);
        assert!(deltas.borrow().is_empty());
    }
}
