//! Integration tests for the EditorCommand JSON protocol.
//!
//! Tests the full command pipeline: JSON string -> parse -> execute -> response.

use garden_gui_lib::command::{execute_json, execute_json_batch};
use garden_gui_lib::fixtures;
use garden_gui_lib::harness::TestHarness;

#[test]
fn test_command_place_move_rotate() {
    let mut h = TestHarness::new();
    let resp = execute_json(
        &mut h,
        r#"{"command": "place", "template": "oak-tree", "x": 0.2, "z": -0.2}"#,
    )
    .unwrap();
    assert!(resp.success);
    let id = resp.data.unwrap()["id"].as_str().unwrap().to_string();

    let cmd = serde_json::json!({"command": "move", "id": id, "x": 4.0, "z": 2.5});
    assert!(execute_json(&mut h, &cmd.to_string()).unwrap().success);

    let cmd = serde_json::json!({"command": "rotate", "id": id, "degrees": 450.0});
    assert!(execute_json(&mut h, &cmd.to_string()).unwrap().success);

    let element = h.element(&id).unwrap();
    assert_eq!((element.position.x, element.position.z), (4.0, 2.5));
    assert_eq!(element.rotation, 90.0);
}

#[test]
fn test_command_unknown_element() {
    let mut h = TestHarness::new();
    let resp = execute_json(&mut h, r#"{"command": "select", "id": "nope"}"#).unwrap();
    assert!(!resp.success);
    assert!(resp.error.unwrap().contains("nope"));
}

#[test]
fn test_command_invalid_json() {
    let mut h = TestHarness::new();
    assert!(execute_json(&mut h, r#"{"command": "explode"}"#).is_err());
    assert!(execute_json(&mut h, "not json").is_err());
}

#[test]
fn test_command_batch() {
    let mut h = TestHarness::new();
    let json = r#"[
        {"command": "place", "template": "oak-tree", "x": -3, "z": 0},
        {"command": "place", "template": "garden-bench", "x": 3, "z": 0},
        {"command": "undo"},
        {"command": "inspect"}
    ]"#;

    let responses = execute_json_batch(&mut h, json).unwrap();
    assert_eq!(responses.len(), 4);
    assert!(responses.iter().all(|r| r.success));
    let data = responses[3].data.as_ref().unwrap();
    assert_eq!(data["element_count"], 1);
    assert_eq!(data["elements"][0]["type"], "tree");
}

#[test]
fn test_command_save_list_load() {
    let mut h = TestHarness::new();
    execute_json(
        &mut h,
        r#"{"command": "place", "template": "rose-bush", "x": 1, "z": 1}"#,
    )
    .unwrap();

    let resp = execute_json(
        &mut h,
        r#"{"command": "save", "name": "Roses", "description": "Front bed"}"#,
    )
    .unwrap();
    assert!(resp.success);
    let id = resp.data.unwrap()["id"].as_str().unwrap().to_string();

    let resp = execute_json(&mut h, r#"{"command": "list_gardens"}"#).unwrap();
    let data = resp.data.unwrap();
    assert_eq!(data["gardens"].as_array().unwrap().len(), 1);
    assert_eq!(data["gardens"][0]["name"], "Roses");
    assert_eq!(data["gardens"][0]["element_count"], 1);

    execute_json(&mut h, r#"{"command": "clear"}"#).unwrap();
    assert_eq!(h.count(), 0);

    let cmd = serde_json::json!({"command": "load", "id": id});
    let resp = execute_json(&mut h, &cmd.to_string()).unwrap();
    assert!(resp.success);
    assert_eq!(resp.data.unwrap()["element_count"], 1);
}

#[test]
fn test_command_save_same_name_overwrites() {
    let mut h = TestHarness::new();
    let first = execute_json(&mut h, r#"{"command": "save", "name": "Plan"}"#).unwrap();
    execute_json(
        &mut h,
        r#"{"command": "place", "template": "hot-tub", "x": 0, "z": 0}"#,
    )
    .unwrap();
    let second = execute_json(&mut h, r#"{"command": "save", "name": "Plan"}"#).unwrap();

    assert_eq!(first.data.unwrap()["id"], second.data.unwrap()["id"]);
    let resp = execute_json(&mut h, r#"{"command": "list_gardens"}"#).unwrap();
    assert_eq!(resp.data.unwrap()["gardens"].as_array().unwrap().len(), 1);
}

#[test]
fn test_command_delete_current_garden() {
    let mut h = TestHarness::new();
    h.place("oak-tree", 0.0, 0.0);
    let id = h.save_as("Temporary").unwrap();

    let cmd = serde_json::json!({"command": "delete_garden", "id": id});
    assert!(execute_json(&mut h, &cmd.to_string()).unwrap().success);

    assert_eq!(h.count(), 0);
    assert!(h.editor.state.current_garden.is_none());
    assert!(h.storage.list().unwrap().is_empty());
}

#[test]
fn test_command_import_export() {
    let mut h = TestHarness::new();
    let cmd = serde_json::json!({"command": "import", "json": fixtures::backyard_json()});
    let resp = execute_json(&mut h, &cmd.to_string()).unwrap();
    assert!(resp.success);
    assert_eq!(resp.data.unwrap()["element_count"], 4);
    assert_eq!(h.count(), 4);

    let resp = execute_json(&mut h, r#"{"command": "export"}"#).unwrap();
    let text = resp.data.unwrap()["garden_json"].as_str().unwrap().to_string();
    let exported: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(exported["name"], "Backyard");
    assert_eq!(exported["elements"].as_array().unwrap().len(), 4);
    assert!(exported.get("lastModified").is_some());
}

#[test]
fn test_command_import_rejects_bad_document() {
    let mut h = TestHarness::new();
    let cmd = serde_json::json!({"command": "import", "json": r#"{"name": "x"}"#});
    let resp = execute_json(&mut h, &cmd.to_string()).unwrap();
    assert!(!resp.success);
    assert!(h.storage.list().unwrap().is_empty());
}

#[test]
fn test_command_search_and_view() {
    let mut h = TestHarness::new();
    let resp = execute_json(&mut h, r#"{"command": "search", "term": "rose"}"#).unwrap();
    let data = resp.data.unwrap();
    assert_eq!(data["templates"][0], "rose-bush");

    let resp = execute_json(&mut h, r#"{"command": "set_view", "mode": "3d"}"#).unwrap();
    assert_eq!(resp.data.unwrap()["mode"], "3d");
    let resp = execute_json(&mut h, r#"{"command": "inspect"}"#).unwrap();
    assert_eq!(resp.data.unwrap()["view"], "3d");
}
