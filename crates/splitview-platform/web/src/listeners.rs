use smallvec::SmallVec;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

type Listener = Closure<dyn FnMut(Event)>;

/// DOM listeners removed together when the set drops.
pub(crate) struct ListenerSet {
    target: EventTarget,
    entries: SmallVec<[(&'static str, Listener); 5]>,
}

impl ListenerSet {
    pub(crate) fn new(target: EventTarget) -> Self {
        Self {
            target,
            entries: SmallVec::new(),
        }
    }

    pub(crate) fn add(
        &mut self,
        event: &'static str,
        passive: bool,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<(), JsValue> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        self.target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                closure.as_ref().unchecked_ref(),
                &options,
            )?;
        self.entries.push((event, closure));
        Ok(())
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Drop for ListenerSet {
    fn drop(&mut self) {
        for (event, closure) in &self.entries {
            if let Err(err) = self
                .target
                .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            {
                log::warn!("failed to remove {event} listener: {err:?}");
            }
        }
        // The set is often dropped from inside one of its own handlers, and a
        // closure must not be freed while it runs.
        let entries = std::mem::take(&mut self.entries);
        if !entries.is_empty() {
            wasm_bindgen_futures::spawn_local(async move { drop(entries) });
        }
    }
}
