//! JSON command protocol for scripted editing.
//!
//! Each command maps onto one editor operation of the headless harness.

use serde::{Deserialize, Serialize};

use crate::harness::TestHarness;
use crate::state::ViewMode;
use crate::storage;

/// A command a script or agent can execute.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum EditorCommand {
    /// Drop a catalog template at a ground position
    Place {
        template: String,
        x: f64,
        z: f64,
    },
    /// Move an element (one undo step)
    Move {
        id: String,
        x: f64,
        z: f64,
    },
    /// Delete an element by ID
    Delete {
        id: String,
    },
    Select {
        id: String,
    },
    ClearSelection,
    /// Set a property from text, parsed against its current type
    SetProperty {
        id: String,
        key: String,
        value: String,
    },
    /// Rotation in degrees
    Rotate {
        id: String,
        degrees: f64,
    },
    Rename {
        id: String,
        name: String,
    },
    /// Undo the last change.
    Undo,
    /// Redo the last undone change.
    Redo,
    /// Start an empty garden (no confirmation).
    Clear,
    /// Save the layout under a name (upsert by name)
    Save {
        name: String,
        #[serde(default)]
        description: String,
    },
    /// Open a saved garden by ID
    Load {
        id: String,
    },
    /// List saved gardens
    ListGardens,
    /// Delete a saved garden by ID
    DeleteGarden {
        id: String,
    },
    /// Import an exported garden document
    Import {
        json: String,
    },
    /// Export the layout as a garden document
    Export,
    SetView {
        mode: ViewMode,
    },
    /// Catalog search by name or species
    Search {
        term: String,
    },
    /// Inspect the garden: list all elements.
    Inspect,
}

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
            data: None,
        }
    }
}

fn unknown_element(id: &str) -> CommandResponse {
    CommandResponse::err(format!("Element {id} not found"))
}

/// Execute a single command on the harness.
pub fn execute_command(harness: &mut TestHarness, cmd: EditorCommand) -> CommandResponse {
    let editor = &mut harness.editor;
    match cmd {
        EditorCommand::Place { template, x, z } => match editor.place_template(&template, x, z) {
            Some(id) => CommandResponse::ok_with_data(serde_json::json!({ "id": id })),
            None => CommandResponse::err(format!("Unknown template {template}")),
        },

        EditorCommand::Move { id, x, z } => {
            if editor.move_element(&id, x, z) {
                CommandResponse::ok()
            } else {
                unknown_element(&id)
            }
        }

        EditorCommand::Delete { id } => {
            let removed = editor.delete_element(&id);
            CommandResponse::ok_with_data(serde_json::json!({ "removed": removed }))
        }

        EditorCommand::Select { id } => {
            if editor.select(&id) {
                CommandResponse::ok_with_data(serde_json::json!({ "selected": id }))
            } else {
                unknown_element(&id)
            }
        }

        EditorCommand::ClearSelection => {
            editor.clear_selection();
            CommandResponse::ok()
        }

        EditorCommand::SetProperty { id, key, value } => {
            match editor.set_property_input(&id, &key, &value) {
                Ok(true) => {
                    let value = editor
                        .state
                        .garden
                        .get(&id)
                        .and_then(|e| e.properties.get(&key))
                        .map(|v| serde_json::json!(v));
                    CommandResponse::ok_with_data(serde_json::json!({ "value": value }))
                }
                Ok(false) => unknown_element(&id),
                Err(e) => CommandResponse::err(e.to_string()),
            }
        }

        EditorCommand::Rotate { id, degrees } => {
            if editor.set_rotation(&id, degrees) {
                CommandResponse::ok()
            } else {
                unknown_element(&id)
            }
        }

        EditorCommand::Rename { id, name } => {
            if editor.rename(&id, &name) {
                CommandResponse::ok()
            } else {
                unknown_element(&id)
            }
        }

        EditorCommand::Undo => {
            let success = editor.undo();
            CommandResponse::ok_with_data(serde_json::json!({ "undone": success }))
        }

        EditorCommand::Redo => {
            let success = editor.redo();
            CommandResponse::ok_with_data(serde_json::json!({ "redone": success }))
        }

        EditorCommand::Clear => {
            editor.request_new_garden();
            editor.confirm(&mut harness.storage);
            CommandResponse::ok()
        }

        EditorCommand::Save { name, description } => {
            match editor.save_as(&mut harness.storage, &name, &description) {
                Ok(garden) => CommandResponse::ok_with_data(serde_json::json!({ "id": garden.id })),
                Err(e) => CommandResponse::err(e.to_string()),
            }
        }

        EditorCommand::Load { id } => match editor.open_garden(&harness.storage, &id) {
            Ok(()) => CommandResponse::ok_with_data(serde_json::json!({
                "element_count": editor.elements().len(),
            })),
            Err(e) => CommandResponse::err(e.to_string()),
        },

        EditorCommand::ListGardens => match harness.storage.list() {
            Ok(gardens) => {
                let gardens: Vec<serde_json::Value> = gardens
                    .iter()
                    .map(|g| {
                        serde_json::json!({
                            "id": g.id,
                            "name": g.name,
                            "element_count": g.elements.len(),
                            "last_modified": g.last_modified,
                        })
                    })
                    .collect();
                CommandResponse::ok_with_data(serde_json::json!({ "gardens": gardens }))
            }
            Err(e) => CommandResponse::err(e.to_string()),
        },

        EditorCommand::DeleteGarden { id } => {
            let is_current = editor
                .state
                .current_garden
                .as_ref()
                .is_some_and(|c| c.id == id);
            if is_current {
                editor.request_delete_garden();
                editor.confirm(&mut harness.storage);
                return CommandResponse::ok();
            }
            match harness.storage.delete(&id) {
                Ok(()) => CommandResponse::ok(),
                Err(e) => CommandResponse::err(e.to_string()),
            }
        }

        EditorCommand::Import { json } => match editor.import_json(&mut harness.storage, &json) {
            Ok(garden) => CommandResponse::ok_with_data(serde_json::json!({
                "id": garden.id,
                "element_count": garden.elements.len(),
            })),
            Err(e) => CommandResponse::err(e.to_string()),
        },

        EditorCommand::Export => match storage::export_json(&editor.garden_document()) {
            Ok(json) => CommandResponse::ok_with_data(serde_json::json!({ "garden_json": json })),
            Err(e) => CommandResponse::err(e.to_string()),
        },

        EditorCommand::SetView { mode } => {
            editor.set_view_mode(mode);
            CommandResponse::ok_with_data(serde_json::json!({ "mode": mode.as_str() }))
        }

        EditorCommand::Search { term } => {
            let ids: Vec<&str> = editor
                .catalog()
                .search(&term)
                .into_iter()
                .map(|t| t.id.as_str())
                .collect();
            CommandResponse::ok_with_data(serde_json::json!({ "templates": ids }))
        }

        EditorCommand::Inspect => {
            let elements: Vec<serde_json::Value> = editor
                .elements()
                .iter()
                .map(|e| {
                    serde_json::json!({
                        "id": e.id,
                        "name": e.name,
                        "type": e.kind.as_str(),
                        "x": e.position.x,
                        "z": e.position.z,
                        "rotation": e.rotation,
                    })
                })
                .collect();
            CommandResponse::ok_with_data(serde_json::json!({
                "element_count": elements.len(),
                "elements": elements,
                "selected": editor.state.selection.selected(),
                "view": editor.state.view_mode.as_str(),
            }))
        }
    }
}

/// Parse and execute a single JSON command string.
pub fn execute_json(harness: &mut TestHarness, json: &str) -> Result<CommandResponse, String> {
    let cmd: EditorCommand =
        serde_json::from_str(json).map_err(|e| format!("Invalid command JSON: {e}"))?;
    Ok(execute_command(harness, cmd))
}

/// Parse and execute multiple JSON commands (array).
pub fn execute_json_batch(
    harness: &mut TestHarness,
    json: &str,
) -> Result<Vec<CommandResponse>, String> {
    let cmds: Vec<EditorCommand> =
        serde_json::from_str(json).map_err(|e| format!("Invalid commands JSON: {e}"))?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(harness, cmd))
        .collect())
}
