//! Testing utilities and harness for splitview

pub mod capture;
pub mod recorder;
pub mod testing;

pub use capture::ManualCaptureHost;
pub use recorder::ResizeRecorder;
pub use testing::*;

pub mod prelude {
    pub use crate::capture::ManualCaptureHost;
    pub use crate::recorder::ResizeRecorder;
    pub use crate::testing::*;
}
