use std::rc::Rc;
use std::sync::Arc;

use splitview_core::Runtime;
use splitview_ui::{DashboardLayout, DashboardLayoutConfig, MemoryStore, PanelSizeStore, SplitPane};
use splitview_ui_graphics::Size;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::capture::DocumentCaptureHost;
use crate::divider::{bind_divider, DividerBinding};
use crate::frame_loop::{WebFrameLoop, WebFrameLoopOptions, WebScheduler};
use crate::listeners::ListenerSet;
use crate::storage::LocalStorageStore;

/// Element ids of the resizable parts of the page.
#[derive(Clone, Debug)]
pub struct DashboardElements {
    pub notes_divider: String,
    pub notes_panel: String,
    pub output_divider: String,
    pub output_panel: String,
}

impl Default for DashboardElements {
    fn default() -> Self {
        Self {
            notes_divider: "notes-divider".into(),
            notes_panel: "notes-panel".into(),
            output_divider: "output-divider".into(),
            output_panel: "output-panel".into(),
        }
    }
}

/// A mounted dashboard. Dropping it detaches every listener and stops the
/// frame loop.
pub struct WebDashboard {
    pane: Rc<SplitPane>,
    _dividers: [DividerBinding; 2],
    _window_listeners: ListenerSet,
    _frame_loop: WebFrameLoop,
}

impl WebDashboard {
    pub fn pane(&self) -> &SplitPane {
        &self.pane
    }
}

fn html_element(document: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| format!("element with id '{id}' not found"))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("element '{id}' is not an HTML element")))
}

fn viewport(window: &Window) -> Size {
    let extent = |value: Result<JsValue, JsValue>| {
        value.ok().and_then(|value| value.as_f64()).unwrap_or(0.0) as f32
    };
    Size::new(extent(window.inner_width()), extent(window.inner_height()))
}

fn apply_sizes(notes: &HtmlElement, output: &HtmlElement, layout: &DashboardLayout) {
    let result = notes
        .style()
        .set_property("width", &format!("{}px", layout.notes_width()))
        .and_then(|_| {
            output
                .style()
                .set_property("height", &format!("{}px", layout.output_height()))
        });
    if let Err(err) = result {
        log::warn!("failed to apply panel sizes: {err:?}");
    }
}

/// Wires the dashboard dividers in the current page.
pub fn mount_dashboard(
    elements: &DashboardElements,
    config: DashboardLayoutConfig,
    options: WebFrameLoopOptions,
) -> Result<WebDashboard, JsValue> {
    let window = web_sys::window().ok_or("no global window exists")?;
    let document = window.document().ok_or("should have a document on window")?;

    let store: Rc<dyn PanelSizeStore> = match LocalStorageStore::from_window() {
        Ok(store) => Rc::new(store),
        Err(err) => {
            log::warn!("panel sizes will not persist: {err}");
            Rc::new(MemoryStore::new())
        }
    };

    let scheduler = Arc::new(WebScheduler::default());
    let runtime = Runtime::new(scheduler.clone());
    let pane = Rc::new(SplitPane::new(
        config,
        viewport(&window),
        runtime.frame_clock(),
        store,
    ));

    let notes_panel = html_element(&document, &elements.notes_panel)?;
    let output_panel = html_element(&document, &elements.output_panel)?;
    apply_sizes(&notes_panel, &output_panel, &pane.layout());
    pane.set_on_change(move |layout| apply_sizes(&notes_panel, &output_panel, layout));

    let host = DocumentCaptureHost::from_window()?;
    let dividers = [
        bind_divider(
            &html_element(&document, &elements.notes_divider)?,
            pane.notes_divider().clone(),
            &host,
        )?,
        bind_divider(
            &html_element(&document, &elements.output_divider)?,
            pane.output_divider().clone(),
            &host,
        )?,
    ];

    let mut window_listeners = ListenerSet::new(window.clone().into());
    {
        let pane = Rc::clone(&pane);
        let window = window.clone();
        window_listeners.add("resize", true, move |_| pane.set_viewport(viewport(&window)))?;
    }

    let frame_loop = WebFrameLoop::start_with_scheduler(runtime, scheduler, options)?;
    log::info!(
        "dashboard mounted: notes {}px, output {}px",
        pane.notes_width(),
        pane.output_height()
    );

    Ok(WebDashboard {
        pane,
        _dividers: dividers,
        _window_listeners: window_listeners,
        _frame_loop: frame_loop,
    })
}
