use std::fmt;
use std::rc::Rc;

use splitview_core::{FrameClock, Owned};
use splitview_foundation::{DividerDragController, PointerCaptureHost};
use splitview_ui_graphics::Size;

use crate::layout::{DashboardLayout, DashboardLayoutConfig, PanelKey};
use crate::store::PanelSizeStore;

type ChangeListener = Box<dyn FnMut(&DashboardLayout)>;

struct PaneState {
    layout: Owned<DashboardLayout>,
    store: Rc<dyn PanelSizeStore>,
    on_change: Owned<Option<ChangeListener>>,
}

impl PaneState {
    fn apply(&self, key: PanelKey, delta: f32) {
        let changed = self.layout.update(|layout| match key {
            PanelKey::NotesWidth => layout.apply_notes_divider_delta(delta),
            PanelKey::OutputHeight => layout.apply_output_divider_delta(delta),
        });
        if !changed {
            return;
        }

        let snapshot = self.layout.get();
        if let Err(err) = snapshot.save_key(key, &*self.store) {
            log::warn!("failed to cache {}: {err}", key.storage_key());
        }

        // The listener may install a replacement while it runs.
        let Some(mut listener) = self.on_change.replace(None) else {
            return;
        };
        listener(&snapshot);
        self.on_change.update(|slot| {
            if slot.is_none() {
                *slot = Some(listener);
            }
        });
    }
}

/// The dashboard's two dividers wired to a shared panel layout.
///
/// The notes divider runs horizontally between editor and notes, the output
/// divider vertically between editor and console. Every delivered delta is
/// clamped into the layout and the changed size is written to the store.
pub struct SplitPane {
    state: Rc<PaneState>,
    notes_divider: DividerDragController,
    output_divider: DividerDragController,
}

impl SplitPane {
    /// Builds the pane and restores cached sizes from `store`.
    pub fn new(
        config: DashboardLayoutConfig,
        viewport: Size,
        clock: FrameClock,
        store: Rc<dyn PanelSizeStore>,
    ) -> Self {
        let mut layout = DashboardLayout::new(&config, viewport);
        if let Err(err) = layout.load(&*store) {
            log::warn!("using default panel sizes: {err}");
        }

        let state = Rc::new(PaneState {
            layout: Owned::new(layout),
            store,
            on_change: Owned::new(None),
        });

        let notes_divider = {
            let state = Rc::clone(&state);
            DividerDragController::new(config.notes_divider_config(), clock.clone(), move |delta| {
                state.apply(PanelKey::NotesWidth, delta)
            })
        };
        let output_divider = {
            let state = Rc::clone(&state);
            DividerDragController::new(config.output_divider_config(), clock, move |delta| {
                state.apply(PanelKey::OutputHeight, delta)
            })
        };

        Self {
            state,
            notes_divider,
            output_divider,
        }
    }

    pub fn layout(&self) -> DashboardLayout {
        self.state.layout.get()
    }

    pub fn notes_width(&self) -> f32 {
        self.state.layout.with(DashboardLayout::notes_width)
    }

    pub fn output_height(&self) -> f32 {
        self.state.layout.with(DashboardLayout::output_height)
    }

    pub fn notes_divider(&self) -> &DividerDragController {
        &self.notes_divider
    }

    pub fn output_divider(&self) -> &DividerDragController {
        &self.output_divider
    }

    pub fn is_dragging(&self) -> bool {
        self.notes_divider.is_dragging() || self.output_divider.is_dragging()
    }

    pub fn set_viewport(&self, viewport: Size) {
        self.state.layout.update(|layout| layout.set_viewport(viewport));
    }

    /// Called after every size change with the updated layout.
    pub fn set_on_change(&self, listener: impl FnMut(&DashboardLayout) + 'static) {
        self.state.on_change.replace(Some(Box::new(listener)));
    }

    /// Routes global pointer events of both dividers through `host`.
    pub fn set_capture_host(&self, host: Option<Rc<dyn PointerCaptureHost>>) {
        self.notes_divider.set_capture_host(host.clone());
        self.output_divider.set_capture_host(host);
    }
}

impl fmt::Debug for SplitPane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitPane")
            .field("layout", &*self.state.layout.borrow())
            .field("notes_divider", &self.notes_divider)
            .field("output_divider", &self.output_divider)
            .finish()
    }
}
