use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::CompileError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    JavaScript,
    TypeScript,
    Python,
    Java,
    Cpp,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::JavaScript,
        Language::TypeScript,
        Language::Python,
        Language::Java,
        Language::Cpp,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Python => "python",
            Language::Java => "java",
            Language::Cpp => "cpp",
        }
    }

    /// Whether the language goes through a separate compile step.
    pub fn is_compiled(self) -> bool {
        matches!(self, Language::Java | Language::Cpp)
    }

    /// Message used when the source prints nothing.
    pub fn silent_message(self) -> &'static str {
        if self.is_compiled() {
            "Code compiled and executed successfully. No output detected."
        } else {
            "Code executed successfully. No output detected."
        }
    }

    /// Pattern whose first group is the printed expression.
    pub(crate) fn output_pattern(self) -> Result<&'static Regex, CompileError> {
        static CONSOLE_LOG: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
        static PRINT: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
        static PRINTLN: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
        static COUT: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();

        let (cell, pattern) = match self {
            Language::JavaScript | Language::TypeScript => {
                (&CONSOLE_LOG, r"console\.log\(([^)]+)\)")
            }
            Language::Python => (&PRINT, r"print\(([^)]+)\)"),
            Language::Java => (&PRINTLN, r"System\.out\.println\(([^)]+)\)"),
            Language::Cpp => (&COUT, r"cout\s*<<\s*([^;]+);"),
        };
        cell.get_or_init(|| Regex::new(pattern))
            .as_ref()
            .map_err(|err| CompileError::Pattern(err.clone()))
    }
}

impl FromStr for Language {
    type Err = CompileError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|language| language.id() == id)
            .ok_or_else(|| CompileError::UnsupportedLanguage(id.to_owned()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
