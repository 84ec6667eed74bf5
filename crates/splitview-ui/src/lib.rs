//! Dashboard panels for splitview
//!
//! The interview dashboard shows a code editor next to a notes panel, with
//! an output console under the editor. Two dividers resize those panels:
//! this crate turns their drag deltas into clamped panel sizes and caches
//! the sizes in a key-value store between sessions.

mod layout;
mod panel;
mod split_pane;
pub mod store;

pub use layout::{DashboardLayout, DashboardLayoutConfig, PanelKey};
pub use panel::PanelDimension;
pub use split_pane::SplitPane;
pub use store::{JsonFileStore, MemoryStore, PanelSizeStore, StoreError};

pub mod prelude {
    pub use crate::layout::{DashboardLayout, DashboardLayoutConfig, PanelKey};
    pub use crate::panel::PanelDimension;
    pub use crate::split_pane::SplitPane;
    pub use crate::store::{MemoryStore, PanelSizeStore};
}
