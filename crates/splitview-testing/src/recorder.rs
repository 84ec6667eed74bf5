use std::cell::RefCell;
use std::rc::Rc;

/// Collects the deltas a drag controller reports.
#[derive(Clone, Default)]
pub struct ResizeRecorder {
    deltas: Rc<RefCell<Vec<f32>>>,
}

impl ResizeRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A resize callback that appends to this recorder.
    pub fn callback(&self) -> impl FnMut(f32) + 'static {
        let deltas = Rc::clone(&self.deltas);
        move |delta| deltas.borrow_mut().push(delta)
    }

    pub fn deltas(&self) -> Vec<f32> {
        self.deltas.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.deltas.borrow().len()
    }

    pub fn last(&self) -> Option<f32> {
        self.deltas.borrow().last().copied()
    }

    pub fn clear(&self) {
        self.deltas.borrow_mut().clear();
    }
}
