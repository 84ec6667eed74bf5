use std::cell::RefCell;
use std::rc::Rc;

use splitview_testing::{FrameTestRule, ManualCaptureHost};
use splitview_ui::{
    DashboardLayoutConfig, JsonFileStore, MemoryStore, PanelSizeStore, SplitPane,
};
use splitview_ui_graphics::Size;

const DESKTOP: Size = Size::new(1920.0, 1080.0);

fn pane_with_store(rule: &FrameTestRule, store: Rc<dyn PanelSizeStore>) -> SplitPane {
    SplitPane::new(DashboardLayoutConfig::default(), DESKTOP, rule.frame_clock(), store)
}

#[test]
fn notes_divider_drag_resizes_and_persists() {
    let mut rule = FrameTestRule::new();
    let store = Rc::new(MemoryStore::new());
    let pane = pane_with_store(&rule, store.clone());

    pane.notes_divider().start(1000.0, 300.0);
    pane.notes_divider().move_to(1050.0, 310.0);
    rule.advance_frame();
    pane.notes_divider().end();

    assert_eq!(pane.notes_width(), 334.0);
    assert_eq!(store.get("notesWidth").unwrap().as_deref(), Some("334"));
    assert_eq!(store.get("outputHeight").unwrap(), None);
}

#[test]
fn output_divider_drag_grows_console() {
    let mut rule = FrameTestRule::new();
    let store = Rc::new(MemoryStore::new());
    let pane = pane_with_store(&rule, store.clone());
    let host = ManualCaptureHost::new();
    pane.set_capture_host(Some(host.as_host()));

    pane.output_divider().start(400.0, 700.0);
    assert!(pane.is_dragging());
    host.send_move(480.0, 740.0);
    rule.advance_frame();
    host.send_up(480.0, 740.0);

    assert!(!pane.is_dragging());
    assert_eq!(pane.output_height(), 232.0);
    assert_eq!(store.get("outputHeight").unwrap().as_deref(), Some("232"));
    assert_eq!(host.released(), 1);
}

#[test]
fn cached_sizes_are_restored() {
    let rule = FrameTestRule::new();
    let store = Rc::new(MemoryStore::with_entries([
        ("notesWidth", "512"),
        ("outputHeight", "garbage"),
    ]));
    let pane = pane_with_store(&rule, store);

    assert_eq!(pane.notes_width(), 512.0);
    assert_eq!(pane.output_height(), 192.0);
}

#[test]
fn clamped_out_drags_do_not_notify() {
    let mut rule = FrameTestRule::new();
    let pane = pane_with_store(&rule, Rc::new(MemoryStore::new()));
    let changes = Rc::new(RefCell::new(Vec::new()));
    {
        let changes = Rc::clone(&changes);
        pane.set_on_change(move |layout| changes.borrow_mut().push(layout.notes_width()));
    }

    pane.notes_divider().start(1000.0, 0.0);
    pane.notes_divider().move_to(1150.0, 0.0);
    rule.advance_frame();
    pane.notes_divider().move_to(1190.0, 0.0);
    rule.advance_frame();
    pane.notes_divider().end();

    // 384 - 150 hits the 250 floor; the second step cannot shrink further.
    assert_eq!(changes.borrow().as_slice(), &[250.0]);
}

#[test]
fn smaller_viewport_limits_later_growth() {
    let mut rule = FrameTestRule::new();
    let pane = pane_with_store(&rule, Rc::new(MemoryStore::new()));
    pane.set_viewport(Size::new(800.0, 600.0));

    pane.notes_divider().start(500.0, 0.0);
    pane.notes_divider().move_to(300.0, 0.0);
    rule.advance_frame();

    // 0.6 of an 800 wide window.
    assert_eq!(pane.notes_width(), 480.0);
}

#[test]
fn json_file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("panels.json");
    let mut rule = FrameTestRule::new();

    {
        let store = Rc::new(JsonFileStore::open(&path).unwrap());
        let pane = pane_with_store(&rule, store);
        pane.output_divider().start(0.0, 500.0);
        pane.output_divider().move_to(0.0, 560.0);
        rule.advance_frame();
        pane.output_divider().end();
    }

    let reopened = Rc::new(JsonFileStore::open(&path).unwrap());
    let pane = pane_with_store(&rule, reopened);
    assert_eq!(pane.output_height(), 252.0);
    assert_eq!(pane.notes_width(), 384.0);
}

#[test]
fn corrupt_json_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("panels.json");
    std::fs::write(&path, "{not json").unwrap();

    assert!(matches!(
        JsonFileStore::open(&path),
        Err(splitview_ui::StoreError::Json(_))
    ));
}

#[test]
fn failed_write_is_retried_on_next_set() {
    let dir = tempfile::tempdir().unwrap();
    let parent = dir.path().join("missing");
    let path = parent.join("panels.json");
    let store = JsonFileStore::open(&path).unwrap();

    assert!(store.set("notesWidth", "300").is_err());
    assert_eq!(store.get("notesWidth").unwrap(), None);

    std::fs::create_dir_all(&parent).unwrap();
    store.set("notesWidth", "300").unwrap();
    assert!(path.exists());

    let reopened = JsonFileStore::open(&path).unwrap();
    assert_eq!(reopened.get("notesWidth").unwrap().as_deref(), Some("300"));
}
