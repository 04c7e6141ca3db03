//! Element → render handle bookkeeping, camera and picking

use std::collections::HashMap;

use glam::{Vec2, Vec3};
use shared::{ElementId, GardenElement};

use super::backend::{RenderBackend, RenderHandle};
use super::camera::{Camera, ViewMode};
use super::picking::{pick_nearest, ray_ground, Aabb};
use super::shape::RenderItem;

struct SceneEntry {
    handle: RenderHandle,
    item: RenderItem,
    bounds: Aabb,
}

impl SceneEntry {
    fn new(handle: RenderHandle, item: RenderItem) -> Self {
        let bounds = item.bounds();
        Self { handle, item, bounds }
    }
}

/// Keeps exactly one render handle per element id
pub struct SceneAdapter<B: RenderBackend> {
    backend: B,
    entries: HashMap<ElementId, SceneEntry>,
    camera: Camera,
    garden_size: f32,
    aspect: f32,
    zoom_speed: f32,
}

impl<B: RenderBackend> SceneAdapter<B> {
    pub fn new(backend: B, mode: ViewMode, garden_size: f32) -> Self {
        Self {
            backend,
            entries: HashMap::new(),
            camera: Camera::for_mode(mode, garden_size),
            garden_size,
            aspect: 1.0,
            zoom_speed: 2.0,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn garden_size(&self) -> f32 {
        self.garden_size
    }

    // ── Handles ───────────────────────────────────────────────

    /// Create the handle for an element (replaces an existing one)
    pub fn add_element(&mut self, element: &GardenElement) -> RenderHandle {
        self.remove_element(&element.id);
        let item = RenderItem::from_element(element);
        let handle = self.backend.insert(item.clone());
        self.entries
            .insert(element.id.clone(), SceneEntry::new(handle, item));
        handle
    }

    /// Dispose the element's handle. Returns false if there was none.
    pub fn remove_element(&mut self, id: &str) -> bool {
        match self.entries.remove(id) {
            Some(entry) => {
                self.backend.remove(entry.handle);
                true
            }
            None => false,
        }
    }

    /// Reapply position, rotation and geometry after an edit
    pub fn update_element_visual(&mut self, element: &GardenElement) {
        let Some(entry) = self.entries.get_mut(&element.id) else {
            self.add_element(element);
            return;
        };
        let item = RenderItem::from_element(element);
        self.backend.update(entry.handle, item.clone());
        *entry = SceneEntry::new(entry.handle, item);
    }

    /// Move a handle along the ground during a drag
    pub fn set_element_position(&mut self, id: &str, x: f64, z: f64) -> bool {
        let Some(entry) = self.entries.get_mut(id) else {
            return false;
        };
        let mut item = entry.item.clone();
        item.set_ground_position(x as f32, z as f32);
        self.backend.update(entry.handle, item.clone());
        *entry = SceneEntry::new(entry.handle, item);
        true
    }

    /// Dispose all handles
    pub fn clear_scene(&mut self) {
        for (_, entry) in self.entries.drain() {
            self.backend.remove(entry.handle);
        }
    }

    /// Rebuild every handle from the element list
    pub fn render_all(&mut self, elements: &[GardenElement]) {
        self.clear_scene();
        for element in elements {
            self.add_element(element);
        }
    }

    pub fn handle_of(&self, id: &str) -> Option<RenderHandle> {
        self.entries.get(id).map(|e| e.handle)
    }

    /// Element id that owns a handle
    pub fn element_of(&self, handle: RenderHandle) -> Option<&ElementId> {
        self.entries
            .iter()
            .find(|(_, e)| e.handle == handle)
            .map(|(id, _)| id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // ── Picking ───────────────────────────────────────────────

    /// Nearest element under an NDC position
    pub fn pick(&self, ndc: Vec2) -> Option<ElementId> {
        let ray = self.camera.ray_from_ndc(ndc, self.aspect);
        pick_nearest(&ray, self.entries.iter().map(|(id, e)| (id, &e.bounds)))
    }

    /// Ground point under an NDC position, inside the garden
    pub fn ground_point(&self, ndc: Vec2) -> Option<Vec3> {
        let ray = self.camera.ray_from_ndc(ndc, self.aspect);
        ray_ground(&ray, self.garden_size * 0.5)
    }

    // ── Camera ────────────────────────────────────────────────

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn view_mode(&self) -> ViewMode {
        self.camera.mode()
    }

    /// Switch view mode. The old camera is dropped and a new one built.
    pub fn set_view_mode(&mut self, mode: ViewMode) -> bool {
        if mode == self.camera.mode() {
            return false;
        }
        self.camera = Camera::for_mode(mode, self.garden_size);
        tracing::debug!("Switched view to {}", mode.as_str());
        true
    }

    pub fn zoom(&mut self, delta: f32) {
        self.camera.zoom(delta, self.zoom_speed);
    }

    pub fn set_zoom_speed(&mut self, speed: f32) {
        self.zoom_speed = speed;
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }
}
