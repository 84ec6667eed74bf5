use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use dashboard_demo::{parse_script, Args, Replay, DEFAULT_SCRIPT};
use splitview_compile::{compile, CompileRequest};
use splitview_ui::{DashboardLayoutConfig, JsonFileStore, MemoryStore, PanelSizeStore};
use splitview_ui_graphics::Size;

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();

    let store: Rc<dyn PanelSizeStore> = match &args.store {
        Some(path) => Rc::new(
            JsonFileStore::open(path)
                .with_context(|| format!("opening panel store {}", path.display()))?,
        ),
        None => Rc::new(MemoryStore::new()),
    };

    let script = match &args.script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading script {}", path.display()))?,
        None => DEFAULT_SCRIPT.to_owned(),
    };
    let steps = parse_script(&script)?;

    println!("=== splitview dashboard replay ===");
    let mut replay = Replay::new(
        DashboardLayoutConfig::default(),
        Size::new(1920.0, 1080.0),
        store,
    );
    let layout = replay.run(steps);
    println!(
        "final layout: notes {}px, output {}px",
        layout.notes_width(),
        layout.output_height()
    );

    if let Some((language, path)) = args.compile_target() {
        let code = std::fs::read_to_string(&path)
            .with_context(|| format!("reading source {}", path.display()))?;
        let response = compile(&CompileRequest::new(code, language));
        match response.error {
            Some(error) => println!("compile failed: {error}"),
            None => println!("{}", response.output),
        }
    }

    Ok(())
}
