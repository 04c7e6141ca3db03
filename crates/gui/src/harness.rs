//! Headless test harness for programmatic garden manipulation.
//!
//! Wraps an editor over the retained scene backend and in-memory storage,
//! so gestures and storage flows run without a window.

use glam::{Vec2, Vec3};
use shared::{ElementId, GardenElement};

use crate::editor::Editor;
use crate::state::EditorSettings;
use crate::storage::{GardenStorage, MemoryStore};
use crate::viewport::{RenderItem, RetainedScene};

/// Headless test harness: editor, retained scene and in-memory storage
pub struct TestHarness {
    pub editor: Editor<RetainedScene>,
    pub storage: GardenStorage<MemoryStore>,
}

impl TestHarness {
    /// Create a new empty harness.
    pub fn new() -> Self {
        Self::with_settings(EditorSettings::default())
    }

    pub fn with_settings(settings: EditorSettings) -> Self {
        Self {
            editor: Editor::new(RetainedScene::default(), settings),
            storage: GardenStorage::new(MemoryStore::default()),
        }
    }

    /// NDC of a ground point under the current camera
    pub fn ndc_of(&self, x: f64, z: f64) -> Vec2 {
        let scene = self.editor.scene();
        scene
            .camera()
            .project(Vec3::new(x as f32, 0.0, z as f32), scene.aspect())
            .unwrap_or(Vec2::splat(f32::MAX))
    }

    // ── Gestures ──────────────────────────────────────────────

    /// Drag a catalog template onto a ground point
    pub fn place(&mut self, template_id: &str, x: f64, z: f64) -> Option<ElementId> {
        let ndc = self.ndc_of(x, z);
        self.editor.drop_template(template_id, ndc)
    }

    /// Click at a ground point
    pub fn click(&mut self, x: f64, z: f64) -> Option<ElementId> {
        let ndc = self.ndc_of(x, z);
        let hit = self.editor.pointer_down(ndc);
        self.editor.pointer_up();
        hit
    }

    /// Press on `from`, drag through `steps` intermediate points, release on `to`
    pub fn drag(&mut self, from: (f64, f64), to: (f64, f64), steps: usize) -> bool {
        let ndc = self.ndc_of(from.0, from.1);
        if self.editor.pointer_down(ndc).is_none() {
            self.editor.pointer_up();
            return false;
        }
        let steps = steps.max(1);
        for i in 1..=steps {
            let t = i as f64 / steps as f64;
            let x = from.0 + (to.0 - from.0) * t;
            let z = from.1 + (to.1 - from.1) * t;
            let ndc = self.ndc_of(x, z);
            self.editor.pointer_move(ndc);
        }
        self.editor.pointer_up()
    }

    pub fn select(&mut self, id: &str) -> bool {
        self.editor.select(id)
    }

    pub fn delete_selected(&mut self) -> bool {
        self.editor.delete_selected()
    }

    pub fn undo(&mut self) -> bool {
        self.editor.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.editor.redo()
    }

    // ── Storage ───────────────────────────────────────────────

    pub fn save_as(&mut self, name: &str) -> Result<String, String> {
        self.editor
            .save_as(&mut self.storage, name, "")
            .map(|g| g.id)
            .map_err(|e| e.to_string())
    }

    pub fn open(&mut self, id: &str) -> Result<(), String> {
        self.editor
            .open_garden(&self.storage, id)
            .map_err(|e| e.to_string())
    }

    // ── Inspection ────────────────────────────────────────────

    /// Number of elements in the garden
    pub fn count(&self) -> usize {
        self.editor.elements().len()
    }

    pub fn element(&self, id: &str) -> Option<&GardenElement> {
        self.editor.state.garden.get(id)
    }

    pub fn selected(&self) -> Option<&ElementId> {
        self.editor.state.selection.selected()
    }

    /// Render item currently drawn for an element
    pub fn render_item(&self, id: &str) -> Option<&RenderItem> {
        let scene = self.editor.scene();
        scene.backend().get(scene.handle_of(id)?)
    }

    /// Number of live render handles
    pub fn handle_count(&self) -> usize {
        self.editor.scene().backend().len()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
