//! Text scripts of divider gestures, replayed frame by frame.
//!
//! One step per line, `#` starts a comment:
//!
//! ```text
//! viewport 1920 1080
//! press notes 1000 300
//! move 1040 300
//! frame
//! release
//! ```

use std::rc::Rc;

use anyhow::{anyhow, bail, Context, Result};
use splitview_core::FRAME_INTERVAL_NANOS;
use splitview_foundation::{DividerDragController, PointerEvent};
use splitview_runtime_std::StdRuntime;
use splitview_ui::{DashboardLayout, DashboardLayoutConfig, PanelSizeStore, SplitPane};
use splitview_ui_graphics::{Point, Size};

pub const DEFAULT_SCRIPT: &str = "\
# widen the editor, then give the console more room
press notes 1000 300
move 1020 300
move 1040 301
frame
move 1090 305
frame
release
press output 600 800
move 600 760
frame
move 600 900
frame
release
";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Divider {
    Notes,
    Output,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    Viewport(Size),
    Press(Divider, Point),
    Move(Point),
    Release,
    Cancel,
    Frames(u32),
}

fn number(token: Option<&str>, line: usize) -> Result<f32> {
    let token = token.ok_or_else(|| anyhow!("line {line}: missing coordinate"))?;
    token
        .parse()
        .with_context(|| format!("line {line}: `{token}` is not a number"))
}

pub fn parse_script(text: &str) -> Result<Vec<Step>> {
    let mut steps = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let content = raw.split('#').next().unwrap_or_default().trim();
        let mut tokens = content.split_whitespace();
        let Some(command) = tokens.next() else {
            continue;
        };
        let step = match command {
            "viewport" => Step::Viewport(Size::new(
                number(tokens.next(), line)?,
                number(tokens.next(), line)?,
            )),
            "press" => {
                let divider = match tokens.next() {
                    Some("notes") => Divider::Notes,
                    Some("output") => Divider::Output,
                    other => bail!("line {line}: unknown divider {other:?}"),
                };
                Step::Press(
                    divider,
                    Point::new(number(tokens.next(), line)?, number(tokens.next(), line)?),
                )
            }
            "move" => Step::Move(Point::new(
                number(tokens.next(), line)?,
                number(tokens.next(), line)?,
            )),
            "release" => Step::Release,
            "cancel" => Step::Cancel,
            "frame" => {
                let count = match tokens.next() {
                    Some(count) => count
                        .parse()
                        .with_context(|| format!("line {line}: bad frame count `{count}`"))?,
                    None => 1,
                };
                Step::Frames(count)
            }
            other => bail!("line {line}: unknown step `{other}`"),
        };
        if let Some(extra) = tokens.next() {
            bail!("line {line}: unexpected `{extra}`");
        }
        steps.push(step);
    }
    Ok(steps)
}

/// Replays steps against a headless dashboard.
pub struct Replay {
    runtime: StdRuntime,
    pane: SplitPane,
    active: Option<Divider>,
    frame_time_nanos: u64,
}

impl Replay {
    pub fn new(config: DashboardLayoutConfig, viewport: Size, store: Rc<dyn PanelSizeStore>) -> Self {
        let runtime = StdRuntime::new();
        let pane = SplitPane::new(config, viewport, runtime.frame_clock(), store);
        pane.set_on_change(|layout| {
            log::info!(
                "notes {}px, output {}px",
                layout.notes_width(),
                layout.output_height()
            );
        });
        Self {
            runtime,
            pane,
            active: None,
            frame_time_nanos: 0,
        }
    }

    pub fn pane(&self) -> &SplitPane {
        &self.pane
    }

    pub fn layout(&self) -> DashboardLayout {
        self.pane.layout()
    }

    fn controller(&self, divider: Divider) -> &DividerDragController {
        match divider {
            Divider::Notes => self.pane.notes_divider(),
            Divider::Output => self.pane.output_divider(),
        }
    }

    fn send(&self, event: PointerEvent) {
        match self.active {
            Some(divider) => self.controller(divider).handle_pointer_event(&event),
            None => log::debug!("no divider pressed, ignoring {:?}", event.kind),
        }
    }

    fn frame(&mut self) {
        self.frame_time_nanos += FRAME_INTERVAL_NANOS;
        self.runtime.take_frame_request();
        self.runtime.drain_frame_callbacks(self.frame_time_nanos);
    }

    pub fn apply(&mut self, step: Step) {
        match step {
            Step::Viewport(size) => self.pane.set_viewport(size),
            Step::Press(divider, at) => {
                self.active = Some(divider);
                self.send(PointerEvent::down(at.x, at.y));
            }
            Step::Move(to) => self.send(PointerEvent::moved(to.x, to.y)),
            Step::Release => {
                self.send(PointerEvent::up(0.0, 0.0));
                self.active = None;
            }
            Step::Cancel => {
                self.send(PointerEvent::cancel());
                self.active = None;
            }
            Step::Frames(count) => {
                for _ in 0..count {
                    self.frame();
                }
            }
        }
    }

    pub fn run(&mut self, steps: impl IntoIterator<Item = Step>) -> DashboardLayout {
        for step in steps {
            self.apply(step);
        }
        self.layout()
    }
}
