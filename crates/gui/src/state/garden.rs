//! Live garden element list

use shared::{ElementId, GardenElement, PropertyValue};

use super::history::HistoryManager;

/// Change notifications consumed by the scene adapter
#[derive(Debug, Clone, PartialEq)]
pub enum GardenEvent {
    Added(ElementId),
    Removed(ElementId),
    Updated(ElementId),
    /// The whole list was swapped (load, undo, redo, template, clear)
    Replaced,
}

/// Element list with undo/redo history and outgoing events
#[derive(Default)]
pub struct GardenState {
    elements: Vec<GardenElement>,
    history: HistoryManager,
    /// Monotonically increasing version counter
    version: u64,
    events: Vec<GardenEvent>,
}

impl GardenState {
    pub fn elements(&self) -> &[GardenElement] {
        &self.elements
    }

    pub fn get(&self, id: &str) -> Option<&GardenElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut GardenElement> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Current version (increments on every mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    /// Take pending events
    pub fn drain_events(&mut self) -> Vec<GardenEvent> {
        std::mem::take(&mut self.events)
    }

    fn changed(&mut self, event: GardenEvent) {
        self.version += 1;
        self.events.push(event);
    }

    /// Snapshot the current list as one undoable step
    pub fn register_change(&mut self) {
        self.history.register_change(&self.elements);
    }

    /// Append an element and record the change
    pub fn add_element(&mut self, element: GardenElement) -> ElementId {
        let id = element.id.clone();
        self.elements.push(element);
        self.changed(GardenEvent::Added(id.clone()));
        self.register_change();
        id
    }

    /// Remove an element and record the change
    pub fn remove_element(&mut self, id: &str) -> Option<GardenElement> {
        let index = self.elements.iter().position(|e| e.id == id)?;
        let removed = self.elements.remove(index);
        self.changed(GardenEvent::Removed(removed.id.clone()));
        self.register_change();
        Some(removed)
    }

    fn edit(&mut self, id: &str, apply: impl FnOnce(&mut GardenElement)) -> bool {
        let Some(element) = self.get_mut(id) else {
            return false;
        };
        apply(element);
        self.changed(GardenEvent::Updated(id.to_string()));
        self.register_change();
        true
    }

    pub fn set_property(&mut self, id: &str, key: &str, value: PropertyValue) -> bool {
        self.edit(id, |e| {
            e.properties.insert(key.to_string(), value);
        })
    }

    /// Rotation in degrees
    pub fn set_rotation(&mut self, id: &str, degrees: f64) -> bool {
        self.edit(id, |e| e.rotation = degrees)
    }

    pub fn rename(&mut self, id: &str, name: &str) -> bool {
        self.edit(id, |e| e.name = name.to_string())
    }

    /// Move to a ground position without recording history (drag in progress)
    pub fn move_live(&mut self, id: &str, x: f64, z: f64) -> bool {
        let Some(element) = self.get_mut(id) else {
            return false;
        };
        element.position.x = x;
        element.position.z = z;
        self.version += 1;
        true
    }

    /// Replace the list with a loaded garden; history starts over
    pub fn load_elements(&mut self, elements: Vec<GardenElement>) {
        self.elements = elements;
        self.history.clear_history(&self.elements);
        self.changed(GardenEvent::Replaced);
    }

    /// Replace the list as an undoable step (templates)
    pub fn replace_elements(&mut self, elements: Vec<GardenElement>) {
        self.elements = elements;
        self.changed(GardenEvent::Replaced);
        self.register_change();
    }

    /// Empty the garden and forget history
    pub fn clear(&mut self) {
        self.load_elements(Vec::new());
    }

    pub fn undo(&mut self) -> bool {
        match self.history.undo(&self.elements) {
            Some(elements) => {
                self.elements = elements;
                self.changed(GardenEvent::Replaced);
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo(&self.elements) {
            Some(elements) => {
                self.elements = elements;
                self.changed(GardenEvent::Replaced);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn mark_saved(&mut self) {
        self.history.mark_saved(&self.elements);
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.history.has_unsaved_changes(&self.elements)
    }
}
