use splitview_ui_graphics::Point;
use std::cell::Cell;
use std::rc::Rc;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Start,
    Move,
    End,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Device family that produced an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PointerSource {
    #[default]
    Mouse,
    Touch,
}

/// Pointer event with consumption tracking.
///
/// A handler that acts on an event consumes it; hosts use that to suppress
/// the platform default (text selection, touch scrolling) for the gesture.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub phase: PointerPhase,
    pub source: PointerSource,
    /// Viewport (client) coordinates in logical pixels.
    pub position: Point,
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            id: 0,
            kind,
            phase: match kind {
                PointerEventKind::Down => PointerPhase::Start,
                PointerEventKind::Move => PointerPhase::Move,
                PointerEventKind::Up => PointerPhase::End,
                PointerEventKind::Cancel => PointerPhase::Cancel,
            },
            source: PointerSource::Mouse,
            position,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Down, Point::new(x, y))
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Move, Point::new(x, y))
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Up, Point::new(x, y))
    }

    pub fn cancel() -> Self {
        Self::new(PointerEventKind::Cancel, Point::ZERO)
    }

    pub fn with_source(mut self, source: PointerSource) -> Self {
        self.source = source;
        self
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    /// Mark this event as handled.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }

    /// True for the events that finish a gesture.
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, PointerEventKind::Up | PointerEventKind::Cancel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_follows_kind() {
        assert_eq!(PointerEvent::down(0.0, 0.0).phase, PointerPhase::Start);
        assert_eq!(PointerEvent::moved(0.0, 0.0).phase, PointerPhase::Move);
        assert_eq!(PointerEvent::up(0.0, 0.0).phase, PointerPhase::End);
        assert_eq!(PointerEvent::cancel().phase, PointerPhase::Cancel);
    }

    #[test]
    fn consumption_is_shared_between_clones() {
        let event = PointerEvent::down(1.0, 2.0).with_source(PointerSource::Touch);
        let copy = event.clone();
        copy.consume();
        assert!(event.is_consumed());
        assert_eq!(event.source, PointerSource::Touch);
    }

    #[test]
    fn only_up_and_cancel_are_terminal() {
        assert!(!PointerEvent::down(0.0, 0.0).is_terminal());
        assert!(!PointerEvent::moved(0.0, 0.0).is_terminal());
        assert!(PointerEvent::up(0.0, 0.0).is_terminal());
        assert!(PointerEvent::cancel().is_terminal());
    }
}
