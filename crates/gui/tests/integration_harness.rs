//! Integration tests for TestHarness.
//!
//! Drives the editor through pointer gestures against the retained scene.

use garden_gui_lib::harness::TestHarness;
use garden_gui_lib::state::{EditorSettings, ViewMode, HISTORY_LIMIT};

#[test]
fn test_harness_place_select_delete() {
    let mut h = TestHarness::new();
    let id = h.place("oak-tree", 2.0, -3.0).unwrap();
    assert_eq!(h.count(), 1);
    assert_eq!(h.handle_count(), 1);

    assert_eq!(h.click(2.0, -3.0).as_ref(), Some(&id));
    assert_eq!(h.selected(), Some(&id));

    assert!(h.delete_selected());
    assert_eq!(h.count(), 0);
    assert_eq!(h.handle_count(), 0);
    assert!(h.selected().is_none());
}

#[test]
fn test_harness_click_empty_ground_clears_selection() {
    let mut h = TestHarness::new();
    let id = h.place("oak-tree", 0.0, 0.0).unwrap();
    h.select(&id);

    assert!(h.click(8.0, 8.0).is_none());
    assert!(h.selected().is_none());
}

#[test]
fn test_harness_drag_snaps_and_records_one_step() {
    let mut h = TestHarness::new();
    let id = h.place("oak-tree", 0.0, 0.0).unwrap();

    assert!(h.drag((0.0, 0.0), (3.1, 2.1), 8));
    let element = h.element(&id).unwrap();
    assert_eq!((element.position.x, element.position.z), (3.0, 2.0));

    let item = h.render_item(&id).unwrap();
    assert!((item.center.x - 3.0).abs() < 1e-5);
    assert!((item.center.z - 2.0).abs() < 1e-5);

    // One undo returns to the drop point, a second removes the element
    assert!(h.undo());
    let element = h.element(&id).unwrap();
    assert_eq!((element.position.x, element.position.z), (0.0, 0.0));
    assert!(h.undo());
    assert_eq!(h.count(), 0);
    assert!(!h.undo());
}

#[test]
fn test_harness_drag_from_empty_ground_does_nothing() {
    let mut h = TestHarness::new();
    h.place("oak-tree", 0.0, 0.0);
    assert!(!h.drag((6.0, 6.0), (1.0, 1.0), 4));
    assert_eq!(h.editor.state.garden.history().undo_len(), 1);
}

#[test]
fn test_harness_snap_disabled_keeps_exact_position() {
    let mut settings = EditorSettings::default();
    settings.snap_to_grid = false;
    let mut h = TestHarness::with_settings(settings);

    let id = h.editor.place_template("garden-bench", 1.23, -0.77).unwrap();
    let element = h.element(&id).unwrap();
    assert_eq!((element.position.x, element.position.z), (1.23, -0.77));
}

#[test]
fn test_harness_undo_redo_cycle() {
    let mut h = TestHarness::new();
    h.place("oak-tree", -2.0, 0.0);
    h.place("garden-bench", 2.0, 0.0);
    assert_eq!(h.count(), 2);

    assert!(h.undo());
    assert_eq!(h.count(), 1);
    assert_eq!(h.handle_count(), 1);

    assert!(h.redo());
    assert_eq!(h.count(), 2);
    assert_eq!(h.handle_count(), 2);
    assert!(!h.redo());
}

#[test]
fn test_harness_new_change_clears_redo() {
    let mut h = TestHarness::new();
    h.place("oak-tree", 0.0, 0.0);
    h.undo();
    assert!(h.editor.state.garden.can_redo());

    h.place("rose-bush", 1.0, 1.0);
    assert!(!h.editor.state.garden.can_redo());
}

#[test]
fn test_harness_history_limit() {
    let mut h = TestHarness::new();
    for i in 0..(HISTORY_LIMIT + 10) {
        h.editor.place_template("rose-bush", (i % 20) as f64, 0.0);
    }
    let mut undone = 0;
    while h.undo() {
        undone += 1;
    }
    assert_eq!(undone, HISTORY_LIMIT);
    assert_eq!(h.count(), 10);
}

#[test]
fn test_harness_save_and_reopen() {
    let mut h = TestHarness::new();
    h.place("oak-tree", 1.0, 1.0);
    h.place("swimming-pool", -5.0, 5.0);
    let id = h.save_as("Backyard").unwrap();
    assert!(!h.editor.has_unsaved_changes());

    h.editor.request_new_garden();
    h.editor.confirm(&mut h.storage);
    assert_eq!(h.count(), 0);
    assert_eq!(h.handle_count(), 0);

    h.open(&id).unwrap();
    assert_eq!(h.count(), 2);
    assert_eq!(h.handle_count(), 2);
    assert!(!h.editor.state.garden.can_undo());
    assert_eq!(
        h.editor.state.current_garden.as_ref().map(|c| c.name.as_str()),
        Some("Backyard")
    );
}

#[test]
fn test_harness_open_unknown_garden() {
    let mut h = TestHarness::new();
    assert!(h.open("missing").is_err());
    assert!(h.editor.state.notice.is_some());
}

#[test]
fn test_harness_view_mode_switch_keeps_picking() {
    let mut h = TestHarness::new();
    let id = h.place("garden-bench", 0.0, 0.0).unwrap();

    h.editor.set_view_mode(ViewMode::Perspective);
    assert_eq!(h.editor.scene().view_mode(), ViewMode::Perspective);
    assert_eq!(h.click(0.0, 0.0).as_ref(), Some(&id));

    h.editor.set_view_mode(ViewMode::TopDown);
    assert_eq!(h.click(0.0, 0.0).as_ref(), Some(&id));
}
