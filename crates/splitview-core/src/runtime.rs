use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};
use std::sync::Arc;
use std::thread::ThreadId;

use crate::frame_clock::FrameClock;
use crate::platform::RuntimeScheduler;
use crate::FrameCallbackId;

type FrameCallback = Box<dyn FnOnce(u64) + 'static>;

struct PendingFrame {
    id: FrameCallbackId,
    run: FrameCallback,
}

struct RuntimeState {
    scheduler: Arc<dyn RuntimeScheduler>,
    needs_frame: Cell<bool>,
    queue: RefCell<VecDeque<PendingFrame>>,
    next_id: Cell<FrameCallbackId>,
    owner_thread: ThreadId,
}

impl RuntimeState {
    fn request_frame(&self) {
        self.needs_frame.set(true);
        self.scheduler.schedule_frame();
    }

    fn enqueue(&self, run: FrameCallback) -> FrameCallbackId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.queue.borrow_mut().push_back(PendingFrame { id, run });
        self.request_frame();
        id
    }

    fn cancel(&self, id: FrameCallbackId) {
        let mut queue = self.queue.borrow_mut();
        let before = queue.len();
        queue.retain(|pending| pending.id != id);
        if queue.len() != before {
            log::trace!("frame callback {id} cancelled");
        }
        if queue.is_empty() {
            self.needs_frame.set(false);
        }
    }

    fn queued(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Runs every callback that was queued before this frame started.
    ///
    /// Callbacks registered while draining wait for the next frame, and a
    /// callback cancelled by an earlier one in the same frame never runs.
    fn run_frame(&self, frame_time_nanos: u64) {
        let boundary = self.next_id.get();
        loop {
            // Pop one at a time so callbacks may register or cancel freely.
            let next = {
                let mut queue = self.queue.borrow_mut();
                match queue.front() {
                    Some(pending) if pending.id < boundary => queue.pop_front(),
                    _ => None,
                }
            };
            match next {
                Some(pending) => (pending.run)(frame_time_nanos),
                None => break,
            }
        }

        if self.queued() > 0 {
            self.scheduler.schedule_frame();
        } else {
            self.needs_frame.set(false);
        }
    }
}

/// Owner of the frame-callback queue. Clones share one queue.
#[derive(Clone)]
pub struct Runtime {
    state: Rc<RuntimeState>,
}

impl Runtime {
    pub fn new(scheduler: Arc<dyn RuntimeScheduler>) -> Self {
        Self {
            state: Rc::new(RuntimeState {
                scheduler,
                needs_frame: Cell::new(false),
                queue: RefCell::new(VecDeque::new()),
                next_id: Cell::new(1),
                owner_thread: std::thread::current().id(),
            }),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            state: Rc::downgrade(&self.state),
            owner_thread: self.state.owner_thread,
        }
    }

    /// Whether queued work is waiting for a frame.
    pub fn needs_frame(&self) -> bool {
        self.state.needs_frame.get()
    }

    pub fn set_needs_frame(&self, value: bool) {
        self.state.needs_frame.set(value);
    }

    pub fn has_frame_callbacks(&self) -> bool {
        self.state.queued() > 0
    }

    /// Runs one frame; call from the host at each frame boundary.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        self.state.run_frame(frame_time_nanos);
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.handle())
    }
}

/// Scheduler for hosts that poll [`Runtime::needs_frame`] themselves.
#[derive(Default)]
pub struct DefaultScheduler;

impl RuntimeScheduler for DefaultScheduler {
    fn schedule_frame(&self) {}
}

/// Weak handle to a [`Runtime`].
///
/// Every operation silently does nothing once the runtime has been dropped.
#[derive(Clone)]
pub struct RuntimeHandle {
    state: Weak<RuntimeState>,
    owner_thread: ThreadId,
}

impl RuntimeHandle {
    fn with_state<R>(&self, f: impl FnOnce(&RuntimeState) -> R) -> Option<R> {
        self.state.upgrade().map(|state| f(&state))
    }

    pub fn is_alive(&self) -> bool {
        self.state.strong_count() > 0
    }

    /// Asks the host for a frame without queueing anything.
    pub fn schedule(&self) {
        self.with_state(RuntimeState::request_frame);
    }

    /// Queues `callback` for the next frame. `None` once the runtime is gone.
    pub fn register_frame_callback(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> Option<FrameCallbackId> {
        self.assert_ui_thread();
        self.with_state(|state| state.enqueue(Box::new(callback)))
    }

    pub fn cancel_frame_callback(&self, id: FrameCallbackId) {
        self.with_state(|state| state.cancel(id));
    }

    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        self.with_state(|state| state.run_frame(frame_time_nanos));
    }

    pub fn has_frame_callbacks(&self) -> bool {
        self.frame_callback_count() > 0
    }

    pub fn frame_callback_count(&self) -> usize {
        self.with_state(RuntimeState::queued).unwrap_or(0)
    }

    pub fn needs_frame(&self) -> bool {
        self.with_state(|state| state.needs_frame.get()).unwrap_or(false)
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.clone())
    }

    pub fn assert_ui_thread(&self) {
        debug_assert_eq!(
            std::thread::current().id(),
            self.owner_thread,
            "frame callback touched off the runtime's UI thread"
        );
    }
}
