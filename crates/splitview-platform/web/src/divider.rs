use std::rc::Rc;

use splitview_foundation::{DividerDragController, PointerCaptureHost, PointerEventKind};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, MouseEvent, TouchEvent};

use crate::capture::DocumentCaptureHost;
use crate::listeners::ListenerSet;

/// Keeps a divider element wired to its controller. Dropping it unbinds the
/// element.
pub struct DividerBinding {
    controller: DividerDragController,
    _listeners: ListenerSet,
}

impl DividerBinding {
    pub fn controller(&self) -> &DividerDragController {
        &self.controller
    }
}

/// Makes `element` the handle of `controller`.
///
/// Presses on the element start a drag; the rest of the gesture is followed
/// on the document through `host`.
pub fn bind_divider(
    element: &HtmlElement,
    controller: DividerDragController,
    host: &DocumentCaptureHost,
) -> Result<DividerBinding, JsValue> {
    let platform = host.platform();
    let capture: Rc<dyn PointerCaptureHost> = Rc::new(host.clone());
    controller.set_capture_host(Some(capture));

    let style = element.style();
    style.set_property("cursor", controller.config().orientation.cursor())?;
    style.set_property("touch-action", "none")?;

    let mut listeners = ListenerSet::new(element.clone().into());
    {
        let controller = controller.clone();
        listeners.add("mousedown", false, move |event: Event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                mouse.prevent_default();
                controller.handle_pointer_event(&platform.mouse_event(PointerEventKind::Down, mouse));
            }
        })?;
    }
    {
        let controller = controller.clone();
        listeners.add("touchstart", false, move |event: Event| {
            let Some(touch) = event.dyn_ref::<TouchEvent>() else {
                return;
            };
            touch.prevent_default();
            if let Some(pointer) = platform.touch_event(PointerEventKind::Down, touch) {
                controller.handle_pointer_event(&pointer);
            }
        })?;
    }

    Ok(DividerBinding {
        controller,
        _listeners: listeners,
    })
}
