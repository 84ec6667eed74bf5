//! Core runtime for splitview.
//!
//! Everything in the dashboard runs on one UI thread. The runtime owns the
//! queue of callbacks waiting for the next rendered frame and asks the host
//! platform (through [`RuntimeScheduler`]) to produce that frame.

mod frame_clock;
mod owned;
pub mod platform;
mod runtime;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use owned::Owned;
pub use platform::{Clock, RuntimeScheduler};
pub use runtime::{DefaultScheduler, Runtime, RuntimeHandle};

/// Identifier handed out for every queued frame callback.
pub type FrameCallbackId = u64;

/// Nanoseconds between two frames of a 60 Hz display.
pub const FRAME_INTERVAL_NANOS: u64 = 16_666_667;

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
