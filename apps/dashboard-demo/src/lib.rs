pub mod cli;
pub mod script;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

pub use cli::Args;
pub use script::{parse_script, Divider, Replay, Step, DEFAULT_SCRIPT};
