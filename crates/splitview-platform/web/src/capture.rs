use splitview_foundation::{CaptureGuard, CaptureTarget, PointerCaptureHost, PointerEventKind};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, MouseEvent, TouchEvent};

use crate::listeners::ListenerSet;
use crate::WebPlatform;

/// Captures the pointer by listening on the whole document.
///
/// Moves are observed passively; release and cancel end the gesture wherever
/// the pointer is.
#[derive(Clone)]
pub struct DocumentCaptureHost {
    document: Document,
    platform: WebPlatform,
}

impl DocumentCaptureHost {
    pub fn new(document: Document, platform: WebPlatform) -> Self {
        Self { document, platform }
    }

    pub fn from_window() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or("no global window exists")?;
        let document = window.document().ok_or("should have a document on window")?;
        Ok(Self::new(document, WebPlatform))
    }

    pub fn platform(&self) -> WebPlatform {
        self.platform
    }

    fn bind(&self, target: CaptureTarget) -> Result<ListenerSet, JsValue> {
        let mut listeners = ListenerSet::new(self.document.clone().into());
        let platform = self.platform;

        for (name, kind) in [
            ("mousemove", PointerEventKind::Move),
            ("mouseup", PointerEventKind::Up),
        ] {
            let target = target.clone();
            listeners.add(name, kind == PointerEventKind::Move, move |event: Event| {
                if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                    target.dispatch(&platform.mouse_event(kind, mouse));
                }
            })?;
        }

        for (name, kind) in [
            ("touchmove", PointerEventKind::Move),
            ("touchend", PointerEventKind::Up),
            ("touchcancel", PointerEventKind::Cancel),
        ] {
            let target = target.clone();
            listeners.add(name, kind == PointerEventKind::Move, move |event: Event| {
                let pointer = event
                    .dyn_ref::<TouchEvent>()
                    .and_then(|touch| platform.touch_event(kind, touch));
                if let Some(pointer) = pointer {
                    target.dispatch(&pointer);
                }
            })?;
        }

        Ok(listeners)
    }
}

impl PointerCaptureHost for DocumentCaptureHost {
    fn capture(&self, target: CaptureTarget) -> CaptureGuard {
        match self.bind(target) {
            Ok(listeners) => {
                log::debug!("document capture bound ({} listeners)", listeners.len());
                CaptureGuard::new(move || drop(listeners))
            }
            Err(err) => {
                log::error!("failed to capture pointer on document: {err:?}");
                CaptureGuard::detached()
            }
        }
    }
}
