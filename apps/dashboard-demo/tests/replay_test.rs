use std::rc::Rc;

use dashboard_demo::{parse_script, Divider, Replay, Step, DEFAULT_SCRIPT};
use splitview_ui::{DashboardLayoutConfig, JsonFileStore, MemoryStore, PanelSizeStore};
use splitview_ui_graphics::{Point, Size};

const DESKTOP: Size = Size::new(1920.0, 1080.0);

#[test]
fn default_script_resizes_both_panels() {
    let store = Rc::new(MemoryStore::new());
    let mut replay = Replay::new(DashboardLayoutConfig::default(), DESKTOP, store.clone());

    let layout = replay.run(parse_script(DEFAULT_SCRIPT).unwrap());

    // notes: 384 - 40 - 50; output: 192 - 40 + 140
    assert_eq!(layout.notes_width(), 294.0);
    assert_eq!(layout.output_height(), 292.0);
    assert_eq!(store.get("notesWidth").unwrap().as_deref(), Some("294"));
    assert_eq!(store.get("outputHeight").unwrap().as_deref(), Some("292"));
    assert!(!replay.pane().is_dragging());
}

#[test]
fn moves_before_a_frame_coalesce() {
    let mut replay = Replay::new(
        DashboardLayoutConfig::default(),
        DESKTOP,
        Rc::new(MemoryStore::new()),
    );
    let layout = replay.run(
        parse_script("press notes 0 0\nmove 10 0\nmove 30 0\nframe 3\nrelease").unwrap(),
    );
    assert_eq!(layout.notes_width(), 354.0);
}

#[test]
fn release_drops_undelivered_movement() {
    let mut replay = Replay::new(
        DashboardLayoutConfig::default(),
        DESKTOP,
        Rc::new(MemoryStore::new()),
    );
    let layout = replay.run([
        Step::Press(Divider::Output, Point::new(0.0, 500.0)),
        Step::Move(Point::new(0.0, 600.0)),
        Step::Release,
        Step::Frames(2),
    ]);
    assert_eq!(layout.output_height(), 192.0);
}

#[test]
fn parse_reports_line_numbers() {
    let err = parse_script("frame\npress sidebar 1 2").unwrap_err();
    assert!(err.to_string().contains("line 2"), "{err}");

    let err = parse_script("move 1").unwrap_err();
    assert!(err.to_string().contains("missing coordinate"), "{err}");

    assert_eq!(
        parse_script("# nothing\n\nviewport 800 600 # small").unwrap(),
        vec![Step::Viewport(Size::new(800.0, 600.0))]
    );
}

#[test]
fn sizes_persist_across_replays() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("panels.json");

    let store = Rc::new(JsonFileStore::open(&path).unwrap());
    Replay::new(DashboardLayoutConfig::default(), DESKTOP, store)
        .run(parse_script("press notes 500 0\nmove 450 0\nframe\nrelease").unwrap());

    let reopened = Rc::new(JsonFileStore::open(&path).unwrap());
    let replay = Replay::new(DashboardLayoutConfig::default(), DESKTOP, reopened);
    assert_eq!(replay.layout().notes_width(), 434.0);
}
