//! Browser host for splitview.
//!
//! Wires [`DividerDragController`](splitview_foundation::DividerDragController)s
//! to DOM elements, captures the pointer on the document while a divider is
//! dragged, drives the frame runtime from `requestAnimationFrame` and keeps
//! panel sizes in `localStorage`.

mod capture;
mod dashboard;
mod divider;
mod frame_loop;
mod listeners;
mod storage;

pub use capture::DocumentCaptureHost;
pub use dashboard::{mount_dashboard, DashboardElements, WebDashboard};
pub use divider::{bind_divider, DividerBinding};
pub use frame_loop::{WebFrameLoop, WebFrameLoopOptions, WebScheduler};
pub use storage::LocalStorageStore;

use splitview_foundation::{PointerEvent, PointerEventKind, PointerSource};
use splitview_ui_graphics::Point;
use web_sys::{MouseEvent, TouchEvent};

/// Maps DOM pointer input onto splitview pointer events.
///
/// Client coordinates are CSS pixels, the same unit panel sizes use, so the
/// mapping carries no state.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebPlatform;

impl WebPlatform {
    pub fn pointer_position(&self, x: f64, y: f64) -> Point {
        Point {
            x: x as f32,
            y: y as f32,
        }
    }

    pub fn pointer_event(&self, kind: PointerEventKind, x: f64, y: f64) -> PointerEvent {
        PointerEvent::new(kind, self.pointer_position(x, y))
    }

    pub fn mouse_event(&self, kind: PointerEventKind, event: &MouseEvent) -> PointerEvent {
        self.pointer_event(kind, event.client_x() as f64, event.client_y() as f64)
            .with_source(PointerSource::Mouse)
    }

    /// Maps the first active touch. Releases carry no active touches, so they
    /// fall back to the first changed one.
    pub fn touch_event(&self, kind: PointerEventKind, event: &TouchEvent) -> Option<PointerEvent> {
        let touch = event
            .touches()
            .get(0)
            .or_else(|| event.changed_touches().get(0));
        let pointer = match touch {
            Some(touch) => {
                self.pointer_event(kind, touch.client_x() as f64, touch.client_y() as f64)
            }
            None if matches!(kind, PointerEventKind::Up | PointerEventKind::Cancel) => {
                PointerEvent::new(kind, Point::ZERO)
            }
            None => return None,
        };
        Some(pointer.with_source(PointerSource::Touch))
    }
}

/// Routes `log` output to the browser console and installs the panic hook.
///
/// Does nothing outside wasm32.
pub fn install_logging(level: log::Level) {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(level));
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = level;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_event_keeps_css_pixels() {
        let event = WebPlatform.pointer_event(PointerEventKind::Move, 120.5, 48.0);

        assert_eq!(event.kind, PointerEventKind::Move);
        assert_eq!(event.position, Point::new(120.5, 48.0));
    }
}
