use splitview_core::{FrameClock, RuntimeHandle, FRAME_INTERVAL_NANOS};
use splitview_runtime_std::StdRuntime;

/// Headless harness that owns a runtime and advances frames by hand.
///
/// Nothing runs until the test asks for a frame, which makes frame
/// boundaries explicit: every call to [`advance_frame`](Self::advance_frame)
/// is one rendered frame, stamped 16.6 ms after the previous one.
pub struct FrameTestRule {
    runtime: StdRuntime,
    frame_time_nanos: u64,
    frames: u64,
}

impl FrameTestRule {
    pub fn new() -> Self {
        Self {
            runtime: StdRuntime::new(),
            frame_time_nanos: 0,
            frames: 0,
        }
    }

    pub fn frame_clock(&self) -> FrameClock {
        self.runtime.frame_clock()
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.runtime_handle()
    }

    /// Whether anything asked for a frame since the last one ran.
    pub fn has_pending_frame(&self) -> bool {
        self.runtime.runtime().needs_frame()
    }

    /// Runs one frame and returns its timestamp.
    pub fn advance_frame(&mut self) -> u64 {
        self.frame_time_nanos += FRAME_INTERVAL_NANOS;
        self.frames += 1;
        self.runtime.take_frame_request();
        self.runtime.drain_frame_callbacks(self.frame_time_nanos);
        self.frame_time_nanos
    }

    /// Runs frames until no callback is waiting, returning how many ran.
    pub fn pump_until_idle(&mut self) -> usize {
        let mut ran = 0;
        while self.has_pending_frame() {
            ran += 1;
            if ran > 100 {
                panic!("pump_until_idle: frame callbacks keep rescheduling");
            }
            self.advance_frame();
        }
        ran
    }

    /// Total frames run by this rule.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for FrameTestRule {
    fn default() -> Self {
        Self::new()
    }
}
