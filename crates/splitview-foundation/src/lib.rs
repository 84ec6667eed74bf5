//! Pointer input and gesture building blocks for splitview
//!
//! The centrepiece is [`DividerDragController`], which turns the raw pointer
//! stream of a divider drag into at most one bounded resize delta per frame.

pub mod gesture_constants;
pub mod nodes;
mod orientation;

pub use gesture_constants::*;
pub use nodes::input::capture::{CaptureGuard, CaptureTarget, PointerCaptureHost, PointerSink};
pub use nodes::input::gestures::drag::{DividerDragController, DragConfig};
pub use nodes::input::types::{
    PointerEvent, PointerEventKind, PointerId, PointerPhase, PointerSource,
};
pub use orientation::Orientation;

pub mod prelude {
    pub use crate::nodes::input::prelude::*;
    pub use crate::orientation::Orientation;
}
