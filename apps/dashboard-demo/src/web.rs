use std::cell::RefCell;

use splitview_platform_web::{
    install_logging, mount_dashboard, DashboardElements, WebDashboard, WebFrameLoopOptions,
};
use splitview_ui::DashboardLayoutConfig;
use wasm_bindgen::prelude::*;

thread_local! {
    static DASHBOARD: RefCell<Option<WebDashboard>> = const { RefCell::new(None) };
}

/// Browser entry point.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    install_logging(log::Level::Info);
    let dashboard = mount_dashboard(
        &DashboardElements::default(),
        DashboardLayoutConfig::default(),
        WebFrameLoopOptions::default(),
    )?;
    DASHBOARD.with(|slot| *slot.borrow_mut() = Some(dashboard));
    Ok(())
}
