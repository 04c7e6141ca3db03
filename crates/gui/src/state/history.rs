//! Undo/redo history for the garden element list
//!
//! Snapshots are taken before a change is applied: `register_change` pushes
//! the last registered state onto the undo stack and makes the current list
//! the new registered state.

use std::collections::VecDeque;

use shared::{GardenElement, HistorySnapshot};

/// Maximum number of undo steps kept
pub const HISTORY_LIMIT: usize = 50;

pub struct HistoryManager {
    undo_stack: VecDeque<HistorySnapshot>,
    redo_stack: Vec<HistorySnapshot>,
    /// Element list as of the last registered change
    baseline: Vec<GardenElement>,
    /// Element list as of the last save (None = never saved)
    last_saved: Option<Vec<GardenElement>>,
    limit: usize,
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::with_limit(HISTORY_LIMIT)
    }
}

impl HistoryManager {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            baseline: Vec::new(),
            last_saved: None,
            limit: limit.max(1),
        }
    }

    fn push_undo(&mut self, snapshot: HistorySnapshot) {
        self.undo_stack.push_back(snapshot);
        while self.undo_stack.len() > self.limit {
            self.undo_stack.pop_front();
        }
    }

    /// Record that `current` is the result of a new change
    pub fn register_change(&mut self, current: &[GardenElement]) {
        let previous = std::mem::replace(&mut self.baseline, current.to_vec());
        self.push_undo(HistorySnapshot::capture(&previous));
        self.redo_stack.clear();
    }

    /// Step back. Returns the element list that becomes live.
    pub fn undo(&mut self, current: &[GardenElement]) -> Option<Vec<GardenElement>> {
        let snapshot = self.undo_stack.pop_back()?;
        self.redo_stack.push(HistorySnapshot::capture(current));
        self.baseline = snapshot.elements.clone();
        Some(snapshot.elements)
    }

    /// Step forward again. Returns the element list that becomes live.
    pub fn redo(&mut self, current: &[GardenElement]) -> Option<Vec<GardenElement>> {
        let snapshot = self.redo_stack.pop()?;
        self.push_undo(HistorySnapshot::capture(current));
        self.baseline = snapshot.elements.clone();
        Some(snapshot.elements)
    }

    /// Forget all history; `current` becomes the base state
    pub fn clear_history(&mut self, current: &[GardenElement]) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.baseline = current.to_vec();
        self.last_saved = None;
    }

    pub fn mark_saved(&mut self, current: &[GardenElement]) {
        self.last_saved = Some(current.to_vec());
    }

    pub fn has_unsaved_changes(&self, current: &[GardenElement]) -> bool {
        match &self.last_saved {
            Some(saved) => saved.as_slice() != current,
            None => !current.is_empty(),
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{create_element, ElementKind, Position, Properties};

    fn bench(id: &str) -> GardenElement {
        create_element(
            ElementKind::Furniture,
            id,
            "Bench",
            Position::default(),
            0.0,
            Properties::new(),
        )
    }

    #[test]
    fn test_register_then_undo_restores_prior_list() {
        let mut h = HistoryManager::default();
        let before = vec![bench("a"), bench("b")];
        h.register_change(&before);

        let mut after = before.clone();
        after.insert(1, bench("c"));
        h.register_change(&after);

        assert_eq!(h.undo(&after), Some(before.clone()));
        assert_eq!(h.redo(&before), Some(after));
    }

    #[test]
    fn test_undo_empty_is_noop() {
        let mut h = HistoryManager::default();
        assert!(!h.can_undo());
        assert_eq!(h.undo(&[]), None);
        assert_eq!(h.redo(&[]), None);
    }

    #[test]
    fn test_undo_stack_capped() {
        let mut h = HistoryManager::default();
        let mut list = Vec::new();
        for i in 0..60 {
            list.push(bench(&format!("e{i}")));
            h.register_change(&list);
        }
        assert_eq!(h.undo_len(), HISTORY_LIMIT);

        // Oldest snapshots were evicted: fully unwinding stops at 10 elements
        let mut current = list.clone();
        while let Some(prev) = h.undo(&current) {
            current = prev;
        }
        assert_eq!(current.len(), 10);
    }

    #[test]
    fn test_new_change_clears_redo() {
        let mut h = HistoryManager::default();
        let one = vec![bench("a")];
        h.register_change(&one);
        let restored = h.undo(&one).unwrap();
        assert!(h.can_redo());

        let other = vec![bench("z")];
        h.register_change(&other);
        assert!(!h.can_redo());
        assert!(restored.is_empty());
    }

    #[test]
    fn test_multi_step_undo_redo() {
        let mut h = HistoryManager::default();
        let s1 = vec![bench("a")];
        let s2 = vec![bench("a"), bench("b")];
        let s3 = vec![bench("b")];
        h.register_change(&s1);
        h.register_change(&s2);
        h.register_change(&s3);

        let back1 = h.undo(&s3).unwrap();
        assert_eq!(back1, s2);
        let back2 = h.undo(&back1).unwrap();
        assert_eq!(back2, s1);
        let fwd = h.redo(&back2).unwrap();
        assert_eq!(fwd, s2);
        let fwd = h.redo(&fwd).unwrap();
        assert_eq!(fwd, s3);
        assert!(!h.can_redo());
    }

    #[test]
    fn test_clear_history() {
        let mut h = HistoryManager::default();
        let list = vec![bench("a")];
        h.register_change(&list);
        h.mark_saved(&list);
        h.clear_history(&list);
        assert!(!h.can_undo());
        assert!(!h.can_redo());
        // Saved marker is reset
        assert!(h.has_unsaved_changes(&list));
    }

    #[test]
    fn test_unsaved_changes() {
        let mut h = HistoryManager::default();
        assert!(!h.has_unsaved_changes(&[]));

        let list = vec![bench("a")];
        assert!(h.has_unsaved_changes(&list));
        h.mark_saved(&list);
        assert!(!h.has_unsaved_changes(&list));

        let mut edited = list.clone();
        edited[0].rotation = 90.0;
        assert!(h.has_unsaved_changes(&edited));
        assert!(h.has_unsaved_changes(&[]));
    }
}
