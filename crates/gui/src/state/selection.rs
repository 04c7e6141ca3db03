use shared::ElementId;

/// Element selection state (single selection)
#[derive(Default)]
pub struct SelectionState {
    selected: Option<ElementId>,
}

impl SelectionState {
    /// Currently selected element
    pub fn selected(&self) -> Option<&ElementId> {
        self.selected.as_ref()
    }

    /// Check if an element is selected
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    /// Select an element (replaces previous selection)
    pub fn select(&mut self, id: ElementId) {
        self.selected = Some(id);
    }

    /// Clear selection
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Clear selection if it points at `id`. Returns true if it did.
    pub fn forget(&mut self, id: &str) -> bool {
        if self.is_selected(id) {
            self.selected = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_empty() {
        let s = SelectionState::default();
        assert!(s.selected().is_none());
    }

    #[test]
    fn test_select_replaces_previous() {
        let mut s = SelectionState::default();
        s.select("a".to_string());
        s.select("b".to_string());
        assert!(!s.is_selected("a"));
        assert!(s.is_selected("b"));
    }

    #[test]
    fn test_clear() {
        let mut s = SelectionState::default();
        s.select("a".to_string());
        s.clear();
        assert!(s.selected().is_none());
    }

    #[test]
    fn test_forget_only_matching() {
        let mut s = SelectionState::default();
        s.select("a".to_string());
        assert!(!s.forget("b"));
        assert!(s.is_selected("a"));
        assert!(s.forget("a"));
        assert!(s.selected().is_none());
    }
}
