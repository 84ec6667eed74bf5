//! Mock compile service for splitview
//!
//! Nothing is executed. Output statements are picked out of the submitted
//! source with a per-language pattern and echoed back as console lines, which
//! is enough to drive the dashboard's output panel.

mod handler;
mod language;
mod mock;

pub use handler::{handle_compile_request, HttpReply};
pub use language::Language;
pub use mock::{compile, compile_source, CompileRequest, CompileResponse};

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CompileError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("output pattern failed to build: {0}")]
    Pattern(#[from] regex::Error),
}
