//! Rendering boundary
//!
//! The scene adapter talks to the renderer only through opaque handles.

use std::collections::BTreeMap;

use super::shape::RenderItem;

/// Opaque handle to a drawn item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RenderHandle(u64);

pub trait RenderBackend {
    fn insert(&mut self, item: RenderItem) -> RenderHandle;
    fn update(&mut self, handle: RenderHandle, item: RenderItem);
    fn remove(&mut self, handle: RenderHandle);
}

/// Retained item table. The painter draws it every frame.
#[derive(Default)]
pub struct RetainedScene {
    items: BTreeMap<RenderHandle, RenderItem>,
    next_handle: u64,
}

impl RetainedScene {
    pub fn get(&self, handle: RenderHandle) -> Option<&RenderItem> {
        self.items.get(&handle)
    }

    /// Items in insertion order
    pub fn items(&self) -> impl Iterator<Item = (RenderHandle, &RenderItem)> {
        self.items.iter().map(|(h, item)| (*h, item))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl RenderBackend for RetainedScene {
    fn insert(&mut self, item: RenderItem) -> RenderHandle {
        self.next_handle += 1;
        let handle = RenderHandle(self.next_handle);
        self.items.insert(handle, item);
        handle
    }

    fn update(&mut self, handle: RenderHandle, item: RenderItem) {
        if let Some(slot) = self.items.get_mut(&handle) {
            *slot = item;
        }
    }

    fn remove(&mut self, handle: RenderHandle) {
        self.items.remove(&handle);
    }
}
