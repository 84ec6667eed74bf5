//! Platform abstraction traits for runtime services.
//!
//! Hosts (the browser, a native shell, a test harness) implement these to
//! drive frames and report time without the runtime touching `std::time` or
//! `web_sys` directly.

/// Requests frames on behalf of the runtime.
///
/// Implementations only need to arrange for
/// [`Runtime::drain_frame_callbacks`](crate::Runtime::drain_frame_callbacks)
/// to be called at the next frame boundary. They must be safe to share
/// across threads even though the runtime itself is single-threaded.
pub trait RuntimeScheduler: Send + Sync {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}

/// Provides timing information for the runtime.
pub trait Clock: Send + Sync {
    /// Instant type produced by this clock implementation.
    type Instant: Copy + Send + Sync;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;

    /// Returns the number of milliseconds elapsed since `since`.
    fn elapsed_millis(&self, since: Self::Instant) -> u64;
}
