use super::*;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct CountingScheduler {
    requests: AtomicUsize,
}

impl RuntimeScheduler for CountingScheduler {
    fn schedule_frame(&self) {
        self.requests.fetch_add(1, Ordering::SeqCst);
    }
}

fn runtime_with_counter() -> (Runtime, Arc<CountingScheduler>) {
    let scheduler = Arc::new(CountingScheduler::default());
    (Runtime::new(scheduler.clone()), scheduler)
}

#[test]
fn frame_callback_runs_once_with_frame_time() {
    let (runtime, scheduler) = runtime_with_counter();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let _registration = {
        let seen = Rc::clone(&seen);
        runtime
            .frame_clock()
            .with_frame_nanos(move |time| seen.borrow_mut().push(time))
    };

    assert!(runtime.needs_frame());
    assert_eq!(scheduler.requests.load(Ordering::SeqCst), 1);

    runtime.drain_frame_callbacks(42);
    runtime.drain_frame_callbacks(43);

    assert_eq!(seen.borrow().as_slice(), &[42]);
    assert!(!runtime.needs_frame());
}

#[test]
fn dropping_registration_cancels_callback() {
    let (runtime, _) = runtime_with_counter();
    let fired = Rc::new(RefCell::new(false));

    let registration = {
        let fired = Rc::clone(&fired);
        runtime
            .frame_clock()
            .with_frame_nanos(move |_| *fired.borrow_mut() = true)
    };
    assert!(registration.is_active());
    drop(registration);

    assert!(!runtime.has_frame_callbacks());
    assert!(!runtime.needs_frame());
    runtime.drain_frame_callbacks(1);
    assert!(!*fired.borrow());
}

#[test]
fn explicit_cancel_only_removes_its_own_callback() {
    let (runtime, _) = runtime_with_counter();
    let log = Rc::new(RefCell::new(Vec::new()));
    let clock = runtime.frame_clock();

    let first = {
        let log = Rc::clone(&log);
        clock.with_frame_nanos(move |_| log.borrow_mut().push("first"))
    };
    let _second = {
        let log = Rc::clone(&log);
        clock.with_frame_nanos(move |_| log.borrow_mut().push("second"))
    };

    first.cancel();
    runtime.drain_frame_callbacks(0);

    assert_eq!(log.borrow().as_slice(), &["second"]);
}

#[test]
fn callbacks_registered_during_drain_wait_for_next_frame() {
    let (runtime, scheduler) = runtime_with_counter();
    let handle = runtime.handle();
    let log = Rc::new(RefCell::new(Vec::new()));
    let nested_registration = Rc::new(RefCell::new(None));

    let _outer = {
        let log = Rc::clone(&log);
        let nested_registration = Rc::clone(&nested_registration);
        runtime.frame_clock().with_frame_nanos(move |time| {
            log.borrow_mut().push(("outer", time));
            let log = Rc::clone(&log);
            let registration = handle
                .frame_clock()
                .with_frame_nanos(move |time| log.borrow_mut().push(("inner", time)));
            *nested_registration.borrow_mut() = Some(registration);
        })
    };

    runtime.drain_frame_callbacks(1);
    assert_eq!(log.borrow().as_slice(), &[("outer", 1)]);
    assert!(runtime.needs_frame());
    assert_eq!(scheduler.requests.load(Ordering::SeqCst), 3);

    runtime.drain_frame_callbacks(2);
    assert_eq!(log.borrow().as_slice(), &[("outer", 1), ("inner", 2)]);
}

#[test]
fn callback_cancelled_by_earlier_callback_in_same_frame_never_runs() {
    let (runtime, _) = runtime_with_counter();
    let log = Rc::new(RefCell::new(Vec::new()));
    let victim: Rc<RefCell<Option<FrameCallbackRegistration>>> = Rc::new(RefCell::new(None));
    let clock = runtime.frame_clock();

    let _killer = {
        let victim = Rc::clone(&victim);
        let log = Rc::clone(&log);
        clock.with_frame_nanos(move |_| {
            log.borrow_mut().push("killer");
            victim.borrow_mut().take();
        })
    };
    {
        let log = Rc::clone(&log);
        *victim.borrow_mut() = Some(clock.with_frame_nanos(move |_| log.borrow_mut().push("victim")));
    }

    runtime.drain_frame_callbacks(0);
    assert_eq!(log.borrow().as_slice(), &["killer"]);
}

#[test]
fn registration_after_runtime_drop_is_inactive() {
    let (runtime, _) = runtime_with_counter();
    let clock = runtime.frame_clock();
    drop(runtime);

    let registration = clock.with_frame_nanos(|_| {});
    assert!(!registration.is_active());
    assert!(!clock.runtime_handle().is_alive());
}

#[test]
fn with_frame_millis_converts_nanos() {
    let (runtime, _) = runtime_with_counter();
    let seen = Rc::new(RefCell::new(None));
    let _registration = {
        let seen = Rc::clone(&seen);
        runtime
            .frame_clock()
            .with_frame_millis(move |millis| *seen.borrow_mut() = Some(millis))
    };

    runtime.drain_frame_callbacks(3 * FRAME_INTERVAL_NANOS);
    assert_eq!(*seen.borrow(), Some(50));
}

#[test]
fn owned_clones_share_value() {
    let owned = Owned::new(1);
    let other = owned.clone();
    other.update(|value| *value += 1);
    assert_eq!(owned.get(), 2);
    assert_eq!(owned.replace(10), 2);
    assert_eq!(other.with(|value| *value), 10);
}
