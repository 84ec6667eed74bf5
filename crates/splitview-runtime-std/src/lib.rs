//! Native host services for the splitview runtime.
//!
//! [`StdRuntime`] bundles a [`Runtime`] with a scheduler that merely records
//! frame requests, so a host loop (or a test) decides when frames happen and
//! stamps them with [`StdClock`] time. Time comes from `web_time`, which maps
//! to `performance.now()` when this crate is built for the browser.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use splitview_core::{Clock, FrameClock, Runtime, RuntimeHandle, RuntimeScheduler};
use web_time::{Duration, Instant};

type FrameWaker = Arc<dyn Fn() + Send + Sync + 'static>;

/// Records frame requests for a polling host loop.
#[derive(Default)]
pub struct StdScheduler {
    pending: AtomicBool,
    requests: AtomicU64,
    waker: Mutex<Option<FrameWaker>>,
}

impl StdScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the pending request flag.
    pub fn take_frame_request(&self) -> bool {
        self.pending.swap(false, Ordering::AcqRel)
    }

    /// Frame requests received so far, including coalesced ones.
    pub fn request_count(&self) -> u64 {
        self.requests.load(Ordering::Relaxed)
    }

    /// `waker` runs on every request, e.g. to unpark a host loop.
    pub fn set_frame_waker(&self, waker: impl Fn() + Send + Sync + 'static) {
        *self.waker.lock().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(waker));
    }

    pub fn clear_frame_waker(&self) {
        self.waker.lock().unwrap_or_else(PoisonError::into_inner).take();
    }
}

impl RuntimeScheduler for StdScheduler {
    fn schedule_frame(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
        self.pending.store(true, Ordering::Release);
        // Clone out so the waker may touch the scheduler again.
        let waker = self
            .waker
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(waker) = waker {
            waker();
        }
    }
}

impl fmt::Debug for StdScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdScheduler")
            .field("pending", &self.pending.load(Ordering::Acquire))
            .field("requests", &self.request_count())
            .finish()
    }
}

/// Monotonic clock measuring from its creation.
#[derive(Clone, Copy, Debug)]
pub struct StdClock {
    origin: Instant,
}

impl StdClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn since_origin(&self) -> Duration {
        self.origin.elapsed()
    }

    /// Timestamp for a frame produced now.
    pub fn frame_time_nanos(&self) -> u64 {
        u64::try_from(self.since_origin().as_nanos()).unwrap_or(u64::MAX)
    }
}

impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for StdClock {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn elapsed_millis(&self, since: Instant) -> u64 {
        u64::try_from(since.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// A runtime whose frames are pumped by the caller.
#[derive(Clone)]
pub struct StdRuntime {
    runtime: Runtime,
    scheduler: Arc<StdScheduler>,
    clock: StdClock,
}

impl StdRuntime {
    pub fn new() -> Self {
        let scheduler = Arc::new(StdScheduler::new());
        Self {
            runtime: Runtime::new(scheduler.clone()),
            scheduler,
            clock: StdClock::new(),
        }
    }

    pub fn runtime(&self) -> Runtime {
        self.runtime.clone()
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    pub fn frame_clock(&self) -> FrameClock {
        self.runtime.frame_clock()
    }

    pub fn scheduler(&self) -> &StdScheduler {
        &self.scheduler
    }

    pub fn clock(&self) -> StdClock {
        self.clock
    }

    pub fn take_frame_request(&self) -> bool {
        self.scheduler.take_frame_request()
    }

    pub fn set_frame_waker(&self, waker: impl Fn() + Send + Sync + 'static) {
        self.scheduler.set_frame_waker(waker);
    }

    pub fn clear_frame_waker(&self) {
        self.scheduler.clear_frame_waker();
    }

    /// Runs one frame stamped `frame_time_nanos`, requested or not.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        self.runtime.drain_frame_callbacks(frame_time_nanos);
    }

    /// Runs a frame stamped with clock time if one is due. Returns whether it
    /// ran.
    pub fn pump_frame(&self) -> bool {
        let requested = self.take_frame_request();
        if !requested && !self.runtime.needs_frame() {
            return false;
        }
        let nanos = self.clock.frame_time_nanos();
        log::trace!("frame at {nanos}ns");
        self.drain_frame_callbacks(nanos);
        true
    }
}

impl Default for StdRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StdRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdRuntime")
            .field("scheduler", &self.scheduler)
            .field("needs_frame", &self.runtime.needs_frame())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/std_runtime_tests.rs"]
mod tests;
