pub mod capture;
pub mod gestures;
pub mod types;

pub use capture::{CaptureGuard, CaptureTarget, PointerCaptureHost, PointerSink};
pub use types::{PointerEvent, PointerEventKind, PointerId, PointerPhase, PointerSource};

pub mod prelude {
    pub use super::capture::{CaptureGuard, CaptureTarget, PointerCaptureHost, PointerSink};
    pub use super::gestures::{DividerDragController, DragConfig};
    pub use super::types::{
        PointerEvent, PointerEventKind, PointerId, PointerPhase, PointerSource,
    };
}
