pub mod drag;

pub use drag::{DividerDragController, DragConfig};
