use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use splitview_core::{Runtime, RuntimeScheduler};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Scheduler for a runtime driven by [`WebFrameLoop`].
///
/// The loop polls every animation frame, so a request only needs recording.
#[derive(Debug, Default)]
pub struct WebScheduler {
    frame_requested: AtomicBool,
}

impl WebScheduler {
    pub fn take_frame_request(&self) -> bool {
        self.frame_requested.swap(false, Ordering::AcqRel)
    }
}

impl RuntimeScheduler for WebScheduler {
    fn schedule_frame(&self) {
        self.frame_requested.store(true, Ordering::Release);
    }
}

#[derive(Clone, Copy, Debug)]
pub struct WebFrameLoopOptions {
    /// Frames whose callbacks run longer than this are logged as warnings.
    pub slow_frame_warning_ms: Option<f64>,
}

impl Default for WebFrameLoopOptions {
    fn default() -> Self {
        Self {
            slow_frame_warning_ms: Some(50.0),
        }
    }
}

impl WebFrameLoopOptions {
    pub fn with_slow_frame_warning_ms(mut self, threshold: Option<f64>) -> Self {
        self.slow_frame_warning_ms = threshold;
        self
    }
}

type Tick = Closure<dyn FnMut(f64)>;

struct LoopState {
    runtime: Runtime,
    scheduler: Option<Arc<WebScheduler>>,
    window: Window,
    options: WebFrameLoopOptions,
    request_id: Cell<Option<i32>>,
    tick: RefCell<Option<Tick>>,
}

impl LoopState {
    fn request(&self) {
        let tick = self.tick.borrow();
        let Some(tick) = tick.as_ref() else {
            return;
        };
        match self.window.request_animation_frame(tick.as_ref().unchecked_ref()) {
            Ok(id) => self.request_id.set(Some(id)),
            Err(err) => log::error!("requestAnimationFrame failed: {err:?}"),
        }
    }

    fn run_frame(&self, timestamp_ms: f64) {
        self.request_id.set(None);
        let requested = self
            .scheduler
            .as_ref()
            .is_some_and(|scheduler| scheduler.take_frame_request());
        if requested || self.runtime.needs_frame() {
            let started = self.now();
            self.runtime
                .drain_frame_callbacks((timestamp_ms * 1_000_000.0) as u64);
            if let (Some(threshold), Some(started), Some(finished)) =
                (self.options.slow_frame_warning_ms, started, self.now())
            {
                let spent = finished - started;
                if spent > threshold {
                    log::warn!("frame callbacks took {spent:.1}ms");
                }
            }
        }
        self.request();
    }

    fn now(&self) -> Option<f64> {
        self.window.performance().map(|performance| performance.now())
    }
}

/// Drains the runtime's frame callbacks from `requestAnimationFrame`.
///
/// Runs until dropped.
pub struct WebFrameLoop {
    state: Rc<LoopState>,
}

impl WebFrameLoop {
    pub fn start(runtime: Runtime, options: WebFrameLoopOptions) -> Result<Self, JsValue> {
        Self::start_inner(runtime, None, options)
    }

    /// Like [`start`](Self::start) for a runtime created with `scheduler`.
    pub fn start_with_scheduler(
        runtime: Runtime,
        scheduler: Arc<WebScheduler>,
        options: WebFrameLoopOptions,
    ) -> Result<Self, JsValue> {
        Self::start_inner(runtime, Some(scheduler), options)
    }

    fn start_inner(
        runtime: Runtime,
        scheduler: Option<Arc<WebScheduler>>,
        options: WebFrameLoopOptions,
    ) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or("no global window exists")?;
        let state = Rc::new(LoopState {
            runtime,
            scheduler,
            window,
            options,
            request_id: Cell::new(None),
            tick: RefCell::new(None),
        });

        let weak: Weak<LoopState> = Rc::downgrade(&state);
        *state.tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
            if let Some(state) = weak.upgrade() {
                state.run_frame(timestamp_ms);
            }
        }) as Box<dyn FnMut(f64)>));

        state.request();
        Ok(Self { state })
    }

    pub fn runtime(&self) -> &Runtime {
        &self.state.runtime
    }
}

impl Drop for WebFrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.state.request_id.take() {
            if let Err(err) = self.state.window.cancel_animation_frame(id) {
                log::warn!("cancelAnimationFrame failed: {err:?}");
            }
        }
        // May be dropped from inside a frame callback.
        if let Some(tick) = self.state.tick.borrow_mut().take() {
            wasm_bindgen_futures::spawn_local(async move { drop(tick) });
        }
    }
}
