use serde::{Deserialize, Serialize};

use crate::language::Language;
use crate::CompileError;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileRequest {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub language: String,
}

impl CompileRequest {
    pub fn new(code: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            language: language.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileResponse {
    pub success: bool,
    pub output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CompileResponse {
    pub fn ok(output: String) -> Self {
        Self {
            success: true,
            output,
            error: None,
        }
    }

    pub fn failed(error: impl ToString) -> Self {
        Self {
            success: false,
            output: String::new(),
            error: Some(error.to_string()),
        }
    }
}

/// Console text `language` would print for `code`, without the header line.
pub fn compile_source(code: &str, language: Language) -> Result<String, CompileError> {
    let pattern = language.output_pattern()?;
    let lines: Vec<String> = pattern
        .captures_iter(code)
        .filter_map(|captures| captures.get(1))
        .map(|content| {
            let content = match language {
                Language::Cpp => content.as_str().trim(),
                _ => content.as_str(),
            };
            format!("> {content}")
        })
        .collect();

    if lines.is_empty() {
        return Ok(language.silent_message().to_owned());
    }
    Ok(lines.join("\n"))
}

/// Runs `request` through the mock executor.
pub fn compile(request: &CompileRequest) -> CompileResponse {
    let result = request
        .language
        .parse::<Language>()
        .and_then(|language| compile_source(&request.code, language));
    match result {
        Ok(text) => CompileResponse::ok(format!("Output\n{text}")),
        Err(err) => {
            log::debug!("compile request rejected: {err}");
            CompileResponse::failed(err)
        }
    }
}
