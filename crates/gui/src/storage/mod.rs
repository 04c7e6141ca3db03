//! Garden persistence: the saved garden list, JSON export/import, share
//! links and starter templates.

mod error;
mod store;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::{new_element_id, validate_element_value, Garden, GardenElement};

pub use error::{Result, StorageError};
pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Storage key holding the whole garden list
pub const GARDENS_KEY: &str = "gardens";

/// Query parameter carrying share info
const SHARE_PARAM: &str = "garden";

/// What a share link carries (never the elements)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ShareInfo {
    id: String,
    name: String,
    last_modified: DateTime<Utc>,
}

/// Named garden layouts kept as one JSON list in a key-value store
pub struct GardenStorage<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> GardenStorage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// All saved gardens in save order
    pub fn list(&self) -> Result<Vec<Garden>> {
        match self.store.get(GARDENS_KEY)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    fn write(&mut self, gardens: &[Garden]) -> Result<()> {
        let json = serde_json::to_string(gardens)?;
        self.store.set(GARDENS_KEY, &json)
    }

    /// Save under `name`. An existing garden with the same name is
    /// overwritten in place and keeps its id.
    pub fn save(
        &mut self,
        elements: &[GardenElement],
        name: &str,
        description: &str,
    ) -> Result<Garden> {
        let mut gardens = self.list()?;
        let existing = gardens.iter().position(|g| g.name == name);

        let garden = Garden {
            id: existing
                .map(|i| gardens[i].id.clone())
                .unwrap_or_else(new_element_id),
            name: name.to_string(),
            description: description.to_string(),
            elements: elements.to_vec(),
            last_modified: Utc::now(),
        };

        match existing {
            Some(i) => gardens[i] = garden.clone(),
            None => gardens.push(garden.clone()),
        }
        self.write(&gardens)?;

        tracing::info!(
            "Saved garden '{}' ({} elements, id {})",
            garden.name,
            garden.elements.len(),
            garden.id
        );
        Ok(garden)
    }

    pub fn load(&self, id: &str) -> Result<Garden> {
        self.list()?
            .into_iter()
            .find(|g| g.id == id)
            .ok_or_else(|| StorageError::NotFound(id.to_string()))
    }

    /// Delete a saved garden. Unknown ids are ignored.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        let mut gardens = self.list()?;
        let before = gardens.len();
        gardens.retain(|g| g.id != id);
        if gardens.len() != before {
            self.write(&gardens)?;
            tracing::info!("Deleted garden {id}");
        }
        Ok(())
    }

    /// Import a garden from exported JSON and save it
    pub fn import_json(&mut self, text: &str) -> Result<Garden> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| StorageError::Validation(format!("invalid JSON: {e}")))?;

        let name = value
            .get("name")
            .and_then(Value::as_str)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| StorageError::Validation("missing garden name".to_string()))?;
        let description = value
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let elements = parse_elements(&value)?;

        self.save(&elements, name, description)
    }

    /// Read a file and import it
    pub fn import_file(&mut self, path: &Path) -> Result<Garden> {
        let text = std::fs::read_to_string(path)?;
        self.import_json(&text)
    }

    /// Resolve a share link against local saved gardens
    pub fn resolve_share_link(&self, link: &str) -> Result<Option<Garden>> {
        let url = url::Url::parse(link)?;
        let Some((_, data)) = url.query_pairs().find(|(k, _)| k == SHARE_PARAM) else {
            return Ok(None);
        };
        let info: ShareInfo = serde_json::from_str(&data)
            .map_err(|e| StorageError::ShareLink(e.to_string()))?;

        Ok(self.list()?.into_iter().find(|g| g.id == info.id))
    }
}

/// Elements array of a garden or template document, each one validated
fn parse_elements(value: &Value) -> Result<Vec<GardenElement>> {
    let items = value
        .get("elements")
        .and_then(Value::as_array)
        .ok_or_else(|| StorageError::Validation("missing elements array".to_string()))?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            if !validate_element_value(item) {
                return Err(StorageError::Validation(format!("element #{i} is invalid")));
            }
            GardenElement::from_json(item)
                .map_err(|e| StorageError::Validation(format!("element #{i}: {e}")))
        })
        .collect()
}

/// Pretty JSON of a full garden
pub fn export_json(garden: &Garden) -> Result<String> {
    Ok(serde_json::to_string_pretty(garden)?)
}

/// `<name with whitespace runs replaced by "_">_garden.json`
pub fn export_file_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 12);
    let mut in_space = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push('_');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out.push_str("_garden.json");
    out
}

/// Write the export file into a directory, returning its path
pub fn export_to_dir(garden: &Garden, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(export_file_name(&garden.name));
    std::fs::write(&path, export_json(garden)?)?;
    tracing::info!("Exported garden '{}' to {}", garden.name, path.display());
    Ok(path)
}

/// Link carrying the garden's id, name and timestamp
pub fn share_link(garden: &Garden, base_url: &str) -> Result<String> {
    let mut url = url::Url::parse(base_url)?;
    let info = ShareInfo {
        id: garden.id.clone(),
        name: garden.name.clone(),
        last_modified: garden.last_modified,
    };
    let data = serde_json::to_string(&info)?;

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != SHARE_PARAM)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair(SHARE_PARAM, &data);
    Ok(url.to_string())
}

/// Parse a starter layout document `{ "elements": [...] }`
pub fn parse_template(text: &str) -> Result<Vec<GardenElement>> {
    let value: Value = serde_json::from_str(text)?;
    parse_elements(&value)
}

/// Read a starter layout file
pub fn read_template(path: &Path) -> Result<Vec<GardenElement>> {
    let text = std::fs::read_to_string(path)?;
    parse_template(&text)
}
