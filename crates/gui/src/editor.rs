//! Editor: owns the state, the scene adapter and the catalog.
//!
//! Every pointer, keyboard and storage callback goes through here. After each
//! mutation the garden's events are drained into the scene adapter.

use std::path::Path;

use glam::Vec2;
use shared::{
    new_element_id, parse_angle_input, parse_property_input, ElementId, ElementTemplate, Garden,
    GardenElement, PropertyInputError, PropertyValue,
};

use crate::catalog::Catalog;
use crate::placement::{instantiate, snap_point, PlacementSession};
use crate::state::{
    ConfirmAction, CurrentGarden, EditorSettings, EditorState, GardenEvent, ViewMode,
};
use crate::storage::{self, GardenStorage, KeyValueStore, StorageError};
use crate::viewport::{RenderBackend, SceneAdapter};

/// Name used when exporting a garden that was never saved
pub const UNTITLED_GARDEN: &str = "Untitled Garden";

pub struct Editor<B: RenderBackend> {
    pub state: EditorState,
    scene: SceneAdapter<B>,
    catalog: Catalog,
    drag: Option<PlacementSession>,
}

impl<B: RenderBackend> Editor<B> {
    pub fn new(backend: B, settings: EditorSettings) -> Self {
        let mut scene = SceneAdapter::new(
            backend,
            ViewMode::default(),
            settings.viewport.garden_size,
        );
        scene.set_zoom_speed(settings.viewport.zoom_speed);
        Self {
            state: EditorState::new(settings),
            scene,
            catalog: Catalog::builtin(),
            drag: None,
        }
    }

    pub fn scene(&self) -> &SceneAdapter<B> {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut SceneAdapter<B> {
        &mut self.scene
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Catalog templates for the panel: search results when a term is
    /// entered, otherwise the active category
    pub fn visible_templates(&self) -> Vec<&ElementTemplate> {
        let term = self.state.search.trim();
        if term.is_empty() {
            self.catalog
                .elements_by_category(&self.state.category)
                .iter()
                .collect()
        } else {
            self.catalog.search(term)
        }
    }

    pub fn elements(&self) -> &[GardenElement] {
        self.state.garden.elements()
    }

    pub fn selected_element(&self) -> Option<&GardenElement> {
        let id = self.state.selection.selected()?;
        self.state.garden.get(id)
    }

    /// Apply pending garden events to the scene and selection
    pub fn sync_scene(&mut self) {
        for event in self.state.garden.drain_events() {
            match event {
                GardenEvent::Added(id) | GardenEvent::Updated(id) => {
                    if let Some(element) = self.state.garden.get(&id) {
                        self.scene.update_element_visual(element);
                    }
                }
                GardenEvent::Removed(id) => {
                    self.scene.remove_element(&id);
                    self.state.selection.forget(&id);
                    if self.drag.as_ref().is_some_and(|d| d.element_id == id) {
                        self.drag = None;
                    }
                }
                GardenEvent::Replaced => {
                    self.scene.render_all(self.state.garden.elements());
                    let stale = self
                        .state
                        .selection
                        .selected()
                        .is_some_and(|id| self.state.garden.get(id).is_none());
                    if stale {
                        self.state.selection.clear();
                    }
                    self.drag = None;
                }
            }
        }
    }

    // ── Placement ─────────────────────────────────────────────

    /// Drop a catalog template at a viewport position (NDC)
    pub fn drop_template(&mut self, template_id: &str, ndc: Vec2) -> Option<ElementId> {
        let Some(point) = self.scene.ground_point(ndc) else {
            tracing::debug!("Drop of '{template_id}' missed the ground");
            return None;
        };
        self.place_template(template_id, point.x as f64, point.z as f64)
    }

    /// Place a catalog template at a ground position
    pub fn place_template(&mut self, template_id: &str, x: f64, z: f64) -> Option<ElementId> {
        let Some(template) = self.catalog.element_by_id(template_id) else {
            tracing::warn!("Dropped unknown template '{template_id}'");
            return None;
        };
        let settings = &self.state.settings;
        let (x, z) = snap_point(x, z, settings.grid.size, settings.snap_to_grid);
        let element = instantiate(template, x, z);

        tracing::info!("Placed {} at ({x}, {z})", element.name);
        let id = self.state.garden.add_element(element);
        self.sync_scene();
        Some(id)
    }

    // ── Pointer ───────────────────────────────────────────────

    /// Select the element under the pointer and start a drag, or clear
    /// the selection on empty space
    pub fn pointer_down(&mut self, ndc: Vec2) -> Option<ElementId> {
        let Some(id) = self.scene.pick(ndc) else {
            self.state.selection.clear();
            self.drag = None;
            return None;
        };
        let start = self.state.garden.get(&id)?.position;
        self.state.selection.select(id.clone());
        self.drag = Some(PlacementSession::begin(id.clone(), start));
        Some(id)
    }

    /// Move the dragged element to the ground point under the pointer
    pub fn pointer_move(&mut self, ndc: Vec2) -> bool {
        if self.drag.is_none() {
            return false;
        }
        let Some(point) = self.scene.ground_point(ndc) else {
            return false;
        };
        let settings = &self.state.settings;
        let (x, z) = snap_point(
            point.x as f64,
            point.z as f64,
            settings.grid.size,
            settings.snap_to_grid,
        );

        let Some(session) = self.drag.as_mut() else {
            return false;
        };
        if !self.state.garden.move_live(&session.element_id, x, z) {
            return false;
        }
        session.mark_moved();
        self.scene.set_element_position(&session.element_id, x, z)
    }

    /// Finish a drag; a drag that moved records one history entry
    pub fn pointer_up(&mut self) -> bool {
        let Some(session) = self.drag.take() else {
            return false;
        };
        if session.moved() {
            self.state.garden.register_change();
            true
        } else {
            false
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Abort a drag and put the element back where it started
    pub fn cancel_drag(&mut self) -> bool {
        let Some(session) = self.drag.take() else {
            return false;
        };
        if session.moved() {
            let (x, z) = (session.start.x, session.start.z);
            self.state.garden.move_live(&session.element_id, x, z);
            self.scene.set_element_position(&session.element_id, x, z);
        }
        true
    }

    // ── Element edits ─────────────────────────────────────────

    pub fn select(&mut self, id: &str) -> bool {
        if self.state.garden.get(id).is_none() {
            return false;
        }
        self.state.selection.select(id.to_string());
        true
    }

    pub fn clear_selection(&mut self) {
        self.state.selection.clear();
    }

    pub fn delete_element(&mut self, id: &str) -> bool {
        let removed = self.state.garden.remove_element(id).is_some();
        self.sync_scene();
        removed
    }

    pub fn delete_selected(&mut self) -> bool {
        match self.state.selection.selected().cloned() {
            Some(id) => self.delete_element(&id),
            None => false,
        }
    }

    pub fn set_property(&mut self, id: &str, key: &str, value: PropertyValue) -> bool {
        let changed = self.state.garden.set_property(id, key, value);
        self.sync_scene();
        changed
    }

    /// Parse panel text against the property's current type and apply it
    pub fn set_property_input(
        &mut self,
        id: &str,
        key: &str,
        input: &str,
    ) -> Result<bool, PropertyInputError> {
        let previous = self
            .state
            .garden
            .get(id)
            .and_then(|e| e.properties.get(key))
            .cloned();
        let value = parse_property_input(input, previous.as_ref())?;
        Ok(self.set_property(id, key, value))
    }

    /// Rotation in degrees, normalized to [0, 360)
    pub fn set_rotation(&mut self, id: &str, degrees: f64) -> bool {
        let changed = self
            .state
            .garden
            .set_rotation(id, degrees.rem_euclid(360.0));
        self.sync_scene();
        changed
    }

    pub fn set_rotation_input(
        &mut self,
        id: &str,
        input: &str,
    ) -> Result<bool, PropertyInputError> {
        let degrees = parse_angle_input(input)?;
        Ok(self.set_rotation(id, degrees))
    }

    pub fn rename(&mut self, id: &str, name: &str) -> bool {
        let changed = self.state.garden.rename(id, name);
        self.sync_scene();
        changed
    }

    /// Move an element to a ground position as one undoable step
    pub fn move_element(&mut self, id: &str, x: f64, z: f64) -> bool {
        if !self.state.garden.move_live(id, x, z) {
            return false;
        }
        self.state.garden.register_change();
        self.scene.set_element_position(id, x, z)
    }

    pub fn undo(&mut self) -> bool {
        let done = self.state.garden.undo();
        self.sync_scene();
        done
    }

    pub fn redo(&mut self) -> bool {
        let done = self.state.garden.redo();
        self.sync_scene();
        done
    }

    // ── View ──────────────────────────────────────────────────

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.scene.set_view_mode(mode);
        self.state.view_mode = mode;
    }

    pub fn zoom(&mut self, delta: f32) {
        self.scene.zoom(delta);
    }

    // ── Garden lifecycle ──────────────────────────────────────

    pub fn request_new_garden(&mut self) {
        self.state.pending_confirm = Some(ConfirmAction::NewGarden);
    }

    pub fn request_delete_garden(&mut self) {
        match &self.state.current_garden {
            Some(current) => {
                self.state.pending_confirm = Some(ConfirmAction::DeleteGarden {
                    id: current.id.clone(),
                    name: current.name.clone(),
                });
            }
            None => self.state.notify_error("No garden is currently loaded."),
        }
    }

    pub fn cancel_confirm(&mut self) {
        self.state.pending_confirm = None;
    }

    /// Run the pending destructive action
    pub fn confirm<S: KeyValueStore>(&mut self, storage: &mut GardenStorage<S>) -> bool {
        let Some(action) = self.state.pending_confirm.take() else {
            return false;
        };
        match action {
            ConfirmAction::NewGarden => {
                self.new_garden();
                true
            }
            ConfirmAction::DeleteGarden { id, name } => match storage.delete(&id) {
                Ok(()) => {
                    if self.state.current_garden.as_ref().is_some_and(|c| c.id == id) {
                        self.new_garden();
                    }
                    self.state.notify(format!("Deleted \"{name}\""));
                    true
                }
                Err(e) => {
                    self.state.notify_error(format!("Failed to delete the garden: {e}"));
                    false
                }
            },
        }
    }

    fn new_garden(&mut self) {
        self.state.garden.clear();
        self.state.current_garden = None;
        self.state.selection.clear();
        self.sync_scene();
    }

    /// Quick save under the current name, or open the save dialog
    pub fn save<S: KeyValueStore>(&mut self, storage: &mut GardenStorage<S>) -> bool {
        match self.state.current_garden.clone() {
            Some(current) => self
                .save_as(storage, &current.name, &current.description)
                .is_ok(),
            None => {
                self.state.save_dialog.open = true;
                false
            }
        }
    }

    pub fn save_as<S: KeyValueStore>(
        &mut self,
        storage: &mut GardenStorage<S>,
        name: &str,
        description: &str,
    ) -> storage::Result<Garden> {
        let result = storage.save(self.state.garden.elements(), name, description);
        match &result {
            Ok(garden) => {
                self.state.current_garden = Some(CurrentGarden::from(garden));
                self.state.garden.mark_saved();
                self.state.save_dialog.open = false;
                self.state.notify(format!("Saved \"{}\"", garden.name));
            }
            Err(e) => self
                .state
                .notify_error(format!("Failed to save the garden: {e}")),
        }
        result
    }

    pub fn open_garden<S: KeyValueStore>(
        &mut self,
        storage: &GardenStorage<S>,
        id: &str,
    ) -> storage::Result<()> {
        match storage.load(id) {
            Ok(garden) => {
                self.apply_loaded_garden(garden);
                Ok(())
            }
            Err(e) => {
                self.state
                    .notify_error(format!("Failed to load the garden: {e}"));
                Err(e)
            }
        }
    }

    /// Make a saved garden the live one; history starts over
    pub fn apply_loaded_garden(&mut self, garden: Garden) {
        tracing::info!(
            "Loaded garden '{}' ({} elements)",
            garden.name,
            garden.elements.len()
        );
        self.state.current_garden = Some(CurrentGarden::from(&garden));
        self.state.garden.load_elements(garden.elements);
        self.state.garden.mark_saved();
        self.state.selection.clear();
        self.sync_scene();
    }

    pub fn import_json<S: KeyValueStore>(
        &mut self,
        storage: &mut GardenStorage<S>,
        text: &str,
    ) -> storage::Result<Garden> {
        let result = storage.import_json(text);
        self.after_import(&result);
        result
    }

    pub fn import_file<S: KeyValueStore>(
        &mut self,
        storage: &mut GardenStorage<S>,
        path: &Path,
    ) -> storage::Result<Garden> {
        let result = storage.import_file(path);
        self.after_import(&result);
        result
    }

    fn after_import(&mut self, result: &storage::Result<Garden>) {
        match result {
            Ok(garden) => {
                self.apply_loaded_garden(garden.clone());
                self.state.notify(format!("Imported \"{}\"", garden.name));
            }
            Err(e) => self
                .state
                .notify_error(format!("Failed to import the garden: {e}")),
        }
    }

    /// The live layout as a full garden document
    pub fn garden_document(&self) -> Garden {
        let elements = self.state.garden.elements().to_vec();
        match &self.state.current_garden {
            Some(current) => Garden {
                id: current.id.clone(),
                name: current.name.clone(),
                description: current.description.clone(),
                elements,
                last_modified: current.last_modified,
            },
            None => Garden {
                id: new_element_id(),
                name: UNTITLED_GARDEN.to_string(),
                description: String::new(),
                elements,
                last_modified: chrono::Utc::now(),
            },
        }
    }

    /// Write the live layout to `<dir>/<name>_garden.json`
    pub fn export_to_dir(&mut self, dir: &Path) -> storage::Result<std::path::PathBuf> {
        let result = storage::export_to_dir(&self.garden_document(), dir);
        if let Err(e) = &result {
            self.state
                .notify_error(format!("Failed to export the garden: {e}"));
        }
        result
    }

    /// Build a share link for the current (saved) garden
    pub fn share(&mut self, base_url: &str) -> Option<String> {
        let Some(current) = &self.state.current_garden else {
            self.state
                .notify_error("Please save your garden first before sharing.");
            return None;
        };
        match storage::share_link(&self.garden_document(), base_url) {
            Ok(link) => {
                tracing::info!("Share link created for '{}'", current.name);
                self.state.share_link = Some(link.clone());
                Some(link)
            }
            Err(e) => {
                self.state
                    .notify_error(format!("Failed to generate share link: {e}"));
                None
            }
        }
    }

    /// Open the garden a share link points at, if it exists locally
    pub fn open_share_link<S: KeyValueStore>(
        &mut self,
        storage: &GardenStorage<S>,
        link: &str,
    ) -> storage::Result<bool> {
        match storage.resolve_share_link(link) {
            Ok(Some(garden)) => {
                self.apply_loaded_garden(garden);
                Ok(true)
            }
            Ok(None) => {
                self.state
                    .notify_error("The shared garden is not available on this device.");
                Ok(false)
            }
            Err(e) => {
                self.state.notify_error(format!("{e}"));
                Err(e)
            }
        }
    }

    /// Replace the layout with a starter template (undoable)
    pub fn apply_template(&mut self, elements: Vec<GardenElement>) {
        self.state.garden.replace_elements(elements);
        self.state.current_garden = None;
        self.state.selection.clear();
        self.sync_scene();
    }

    pub fn load_template_file(&mut self, path: &Path) -> Result<usize, StorageError> {
        match storage::read_template(path) {
            Ok(elements) => {
                let count = elements.len();
                self.apply_template(elements);
                tracing::info!("Applied template {} ({count} elements)", path.display());
                Ok(count)
            }
            Err(e) => {
                self.state
                    .notify_error(format!("Failed to load the template: {e}"));
                Err(e)
            }
        }
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.state.garden.has_unsaved_changes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::viewport::RetainedScene;
    use glam::Vec3;

    fn editor() -> Editor<RetainedScene> {
        Editor::new(RetainedScene::default(), EditorSettings::default())
    }

    fn ndc(editor: &Editor<RetainedScene>, x: f32, z: f32) -> Vec2 {
        let scene = editor.scene();
        scene
            .camera()
            .project(Vec3::new(x, 0.0, z), scene.aspect())
            .unwrap()
    }

    #[test]
    fn test_drop_snaps_and_adds_handle() {
        let mut e = editor();
        let at = ndc(&e, 1.73, -0.26);
        let id = e.drop_template("oak-tree", at).unwrap();

        let element = e.state.garden.get(&id).unwrap();
        assert!((element.position.x - 1.5).abs() < 1e-9);
        assert!((element.position.z + 0.5).abs() < 1e-9);
        assert_eq!(element.position.y, 0.0);
        assert!(e.scene().handle_of(&id).is_some());
        assert!(e.state.garden.can_undo());
    }

    #[test]
    fn test_drop_without_snap() {
        let mut e = editor();
        e.state.settings.snap_to_grid = false;
        let id = e.place_template("garden-bench", 1.73, -0.26).unwrap();
        let element = e.state.garden.get(&id).unwrap();
        assert_eq!((element.position.x, element.position.z), (1.73, -0.26));
    }

    #[test]
    fn test_drop_unknown_template_is_noop() {
        let mut e = editor();
        assert!(e.drop_template("spaceship", Vec2::ZERO).is_none());
        assert!(e.state.garden.is_empty());
        assert!(!e.state.garden.can_undo());
    }

    #[test]
    fn test_drop_off_ground_is_noop() {
        let mut e = editor();
        assert!(e.drop_template("oak-tree", Vec2::new(1.0, 1.0)).is_none());
        assert!(e.state.garden.is_empty());
    }

    #[test]
    fn test_delete_selected_clears_selection_and_handle() {
        let mut e = editor();
        let id = e.place_template("oak-tree", 0.0, 0.0).unwrap();
        assert!(e.select(&id));
        assert!(e.delete_selected());
        assert!(e.state.selection.selected().is_none());
        assert!(e.scene().handle_of(&id).is_none());
        assert!(e.scene().backend().is_empty());
    }

    #[test]
    fn test_click_selects_and_empty_click_clears() {
        let mut e = editor();
        let id = e.place_template("oak-tree", 2.0, 2.0).unwrap();
        let hit = e.pointer_down(ndc(&e, 2.0, 2.0));
        assert_eq!(hit.as_ref(), Some(&id));
        assert!(!e.pointer_up());
        assert!(e.state.selection.is_selected(&id));

        assert!(e.pointer_down(ndc(&e, -9.0, 9.0)).is_none());
        assert!(e.state.selection.selected().is_none());
    }

    #[test]
    fn test_drag_records_one_snapshot() {
        let mut e = editor();
        let id = e.place_template("oak-tree", 0.0, 0.0).unwrap();
        let undo_before = e.state.garden.history().undo_len();

        e.pointer_down(ndc(&e, 0.0, 0.0));
        for step in 1..=5 {
            assert!(e.pointer_move(ndc(&e, step as f32, 0.0)));
        }
        assert_eq!(e.state.garden.history().undo_len(), undo_before);
        assert!(e.pointer_up());
        assert_eq!(e.state.garden.history().undo_len(), undo_before + 1);

        let moved = e.state.garden.get(&id).unwrap().position;
        assert!((moved.x - 5.0).abs() < 1e-9);
        let item = e.scene().backend().get(e.scene().handle_of(&id).unwrap()).unwrap();
        assert!((item.center.x - 5.0).abs() < 1e-6);

        assert!(e.undo());
        assert_eq!(e.state.garden.get(&id).unwrap().position.x, 0.0);
    }

    #[test]
    fn test_cancelled_drag_restores_position() {
        let mut e = editor();
        let id = e.place_template("oak-tree", 1.0, 2.0).unwrap();
        let undo_before = e.state.garden.history().undo_len();

        e.pointer_down(ndc(&e, 1.0, 2.0));
        assert!(e.pointer_move(ndc(&e, 4.0, -3.0)));
        assert!(e.cancel_drag());
        assert!(!e.is_dragging());
        assert!(!e.pointer_up());

        let position = e.state.garden.get(&id).unwrap().position;
        assert_eq!((position.x, position.z), (1.0, 2.0));
        let item = e.scene().backend().get(e.scene().handle_of(&id).unwrap()).unwrap();
        assert!((item.center.x - 1.0).abs() < 1e-6);
        assert!((item.center.z - 2.0).abs() < 1e-6);
        assert_eq!(e.state.garden.history().undo_len(), undo_before);
        assert!(!e.cancel_drag());
    }

    #[test]
    fn test_undo_redo_rerenders() {
        let mut e = editor();
        e.place_template("oak-tree", 0.0, 0.0);
        e.place_template("rose-bush", 3.0, 0.0);
        assert!(e.undo());
        assert_eq!(e.scene().len(), 1);
        assert!(e.redo());
        assert_eq!(e.scene().len(), 2);
        assert_eq!(e.scene().backend().len(), 2);
    }

    #[test]
    fn test_undo_removes_selected_element() {
        let mut e = editor();
        let id = e.place_template("oak-tree", 0.0, 0.0).unwrap();
        e.select(&id);
        e.undo();
        assert!(e.state.selection.selected().is_none());
    }

    #[test]
    fn test_property_input() {
        let mut e = editor();
        let id = e.place_template("oak-tree", 0.0, 0.0).unwrap();
        assert_eq!(e.set_property_input(&id, "height", "2 * 6"), Ok(true));
        assert_eq!(e.state.garden.get(&id).unwrap().number("height"), Some(12.0));
        let item = e.scene().backend().get(e.scene().handle_of(&id).unwrap()).unwrap();
        assert_eq!(item.center.y, 6.0);
        assert!(e.set_property_input(&id, "height", "tall").is_err());
    }

    #[test]
    fn test_rotation_normalized() {
        let mut e = editor();
        let id = e.place_template("garden-bench", 0.0, 0.0).unwrap();
        assert!(e.set_rotation(&id, -90.0));
        assert_eq!(e.state.garden.get(&id).unwrap().rotation, 270.0);
        assert_eq!(e.set_rotation_input(&id, "45 + 360"), Ok(true));
        assert_eq!(e.state.garden.get(&id).unwrap().rotation, 45.0);
    }

    #[test]
    fn test_save_load_cycle() {
        let mut e = editor();
        let mut storage = GardenStorage::new(MemoryStore::default());
        e.place_template("oak-tree", 0.0, 0.0);

        assert!(!e.save(&mut storage));
        assert!(e.state.save_dialog.open);

        let saved = e.save_as(&mut storage, "Backyard", "").unwrap();
        assert!(!e.has_unsaved_changes());
        e.place_template("rose-bush", 1.0, 1.0);
        assert!(e.has_unsaved_changes());
        assert!(e.save(&mut storage));
        assert_eq!(storage.list().unwrap().len(), 1);

        e.request_new_garden();
        assert!(e.confirm(&mut storage));
        assert!(e.elements().is_empty());
        assert!(!e.state.garden.can_undo());

        e.open_garden(&storage, &saved.id).unwrap();
        assert_eq!(e.elements().len(), 2);
        assert_eq!(e.scene().len(), 2);
        assert!(!e.state.garden.can_undo());
        assert!(e.open_garden(&storage, "missing").is_err());
        assert!(e.state.notice.is_some());
    }

    #[test]
    fn test_destructive_actions_wait_for_confirmation() {
        let mut e = editor();
        let mut storage = GardenStorage::new(MemoryStore::default());
        e.place_template("oak-tree", 0.0, 0.0);
        e.save_as(&mut storage, "Backyard", "").unwrap();

        e.request_delete_garden();
        assert!(matches!(
            e.state.pending_confirm,
            Some(ConfirmAction::DeleteGarden { .. })
        ));
        e.cancel_confirm();
        assert!(!e.confirm(&mut storage));
        assert_eq!(storage.list().unwrap().len(), 1);

        e.request_delete_garden();
        assert!(e.confirm(&mut storage));
        assert!(storage.list().unwrap().is_empty());
        assert!(e.state.current_garden.is_none());
        assert!(e.elements().is_empty());
    }

    #[test]
    fn test_delete_without_garden_notifies() {
        let mut e = editor();
        e.request_delete_garden();
        assert!(e.state.pending_confirm.is_none());
        assert!(e.state.notice.is_some());
    }

    #[test]
    fn test_share_requires_saved_garden() {
        let mut e = editor();
        assert!(e.share("https://gardens.example/").is_none());

        let mut storage = GardenStorage::new(MemoryStore::default());
        e.save_as(&mut storage, "Front", "").unwrap();
        let link = e.share("https://gardens.example/").unwrap();
        assert_eq!(e.state.share_link.as_deref(), Some(link.as_str()));

        let mut other = editor();
        assert!(other.open_share_link(&storage, &link).unwrap());
        assert_eq!(other.state.current_garden.unwrap().name, "Front");
    }

    #[test]
    fn test_template_replaces_and_is_undoable() {
        let mut e = editor();
        let first = e.place_template("oak-tree", 0.0, 0.0).unwrap();
        let template = vec![instantiate(
            e.catalog().element_by_id("swimming-pool").unwrap(),
            0.0,
            0.0,
        )];
        e.apply_template(template);
        assert_eq!(e.elements().len(), 1);
        assert_eq!(e.elements()[0].name, "Swimming Pool");
        assert!(e.undo());
        assert_eq!(e.elements()[0].id, first);
    }

    #[test]
    fn test_visible_templates_follow_search() {
        let mut e = editor();
        assert_eq!(e.visible_templates().len(), 5);
        e.state.category = "ponds".to_string();
        assert!(e.visible_templates().iter().any(|t| t.id == "hot-tub"));
        e.state.search = "  oak ".to_string();
        let ids: Vec<&str> = e.visible_templates().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["oak-tree"]);
    }

    #[test]
    fn test_view_mode_switch() {
        let mut e = editor();
        e.set_view_mode(ViewMode::Perspective);
        assert_eq!(e.state.view_mode, ViewMode::Perspective);
        assert_eq!(e.scene().view_mode(), ViewMode::Perspective);
    }
}
