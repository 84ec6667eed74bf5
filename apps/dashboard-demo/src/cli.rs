use std::path::PathBuf;

use clap::Parser;

/// Command line of the native demo.
#[derive(Parser, Debug)]
#[command(name = "dashboard-demo")]
#[command(about = "Replay divider drags against the interview dashboard layout")]
pub struct Args {
    /// JSON file that keeps panel sizes between runs.
    #[arg(long, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Gesture script to replay instead of the built-in one.
    #[arg(long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Run a source file through the mock compiler.
    #[arg(long, num_args = 2, value_names = ["LANG", "FILE"])]
    pub compile: Option<Vec<String>>,
}

impl Args {
    /// Language and source path given to `--compile`.
    pub fn compile_target(&self) -> Option<(&str, PathBuf)> {
        match self.compile.as_deref() {
            Some([language, file]) => Some((language.as_str(), PathBuf::from(file))),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_memory_store_and_builtin_script() {
        let args = Args::try_parse_from(["dashboard-demo"]).unwrap();
        assert!(args.store.is_none());
        assert!(args.script.is_none());
        assert!(args.compile_target().is_none());
    }

    #[test]
    fn compile_takes_language_and_file() {
        let args = Args::try_parse_from([
            "dashboard-demo",
            "--store",
            "panels.json",
            "--compile",
            "python",
            "main.py",
        ])
        .unwrap();
        assert_eq!(args.store, Some(PathBuf::from("panels.json")));
        assert_eq!(
            args.compile_target(),
            Some(("python", PathBuf::from("main.py")))
        );
    }

    #[test]
    fn compile_without_file_is_rejected() {
        assert!(Args::try_parse_from(["dashboard-demo", "--compile", "python"]).is_err());
        assert!(Args::try_parse_from(["dashboard-demo", "--verbose"]).is_err());
    }
}
