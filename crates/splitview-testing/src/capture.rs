use std::cell::{Cell, RefCell};
use std::rc::Rc;

use splitview_foundation::{
    CaptureGuard, CaptureTarget, PointerCaptureHost, PointerEvent, PointerEventKind,
};

#[derive(Default)]
struct CaptureState {
    target: RefCell<Option<CaptureTarget>>,
    acquired: Cell<usize>,
    released: Cell<usize>,
}

/// In-memory stand-in for the document-level listeners of a real host.
///
/// Tests play the part of the document: events sent with
/// [`send`](Self::send) reach the capturing gesture only while its guard is
/// alive, exactly like listeners that have been removed stop firing.
#[derive(Clone, Default)]
pub struct ManualCaptureHost {
    state: Rc<CaptureState>,
}

impl ManualCaptureHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// The host as the trait object a controller expects.
    pub fn as_host(&self) -> Rc<dyn PointerCaptureHost> {
        Rc::new(self.clone())
    }

    pub fn is_captured(&self) -> bool {
        self.state.target.borrow().is_some()
    }

    pub fn acquired(&self) -> usize {
        self.state.acquired.get()
    }

    pub fn released(&self) -> usize {
        self.state.released.get()
    }

    /// Delivers a global event. Returns false when nothing is listening.
    pub fn send(&self, event: PointerEvent) -> bool {
        if event.kind == PointerEventKind::Down {
            return false;
        }
        let target = self.state.target.borrow().clone();
        match target {
            Some(target) => target.dispatch(&event),
            None => false,
        }
    }

    pub fn send_move(&self, x: f32, y: f32) -> bool {
        self.send(PointerEvent::moved(x, y))
    }

    pub fn send_up(&self, x: f32, y: f32) -> bool {
        self.send(PointerEvent::up(x, y))
    }

    pub fn send_cancel(&self) -> bool {
        self.send(PointerEvent::cancel())
    }
}

impl PointerCaptureHost for ManualCaptureHost {
    fn capture(&self, target: CaptureTarget) -> CaptureGuard {
        self.state.acquired.set(self.state.acquired.get() + 1);
        *self.state.target.borrow_mut() = Some(target);
        let state = Rc::clone(&self.state);
        CaptureGuard::new(move || {
            state.released.set(state.released.get() + 1);
            state.target.borrow_mut().take();
        })
    }
}
