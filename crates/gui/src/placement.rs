//! Dropping catalog templates onto the ground and dragging placed elements

use shared::{new_element_id, ElementId, ElementTemplate, GardenElement, Position};

/// Default grid step in meters
pub const GRID_SIZE: f64 = 0.5;

/// Round to the nearest grid multiple (halves round up)
pub fn snap_to_grid(value: f64, grid_size: f64) -> f64 {
    if grid_size <= 0.0 {
        return value;
    }
    (value / grid_size + 0.5).floor() * grid_size
}

/// Snap both ground coordinates when `enabled`
pub fn snap_point(x: f64, z: f64, grid_size: f64, enabled: bool) -> (f64, f64) {
    if enabled {
        (snap_to_grid(x, grid_size), snap_to_grid(z, grid_size))
    } else {
        (x, z)
    }
}

/// Payload carried from the catalog panel to the viewport
#[derive(Debug, Clone, PartialEq)]
pub struct DragPayload {
    pub template_id: String,
}

/// New element from a template at a ground position
pub fn instantiate(template: &ElementTemplate, x: f64, z: f64) -> GardenElement {
    GardenElement {
        id: new_element_id(),
        name: template.name.clone(),
        kind: template.kind.clone(),
        position: Position::ground(x, z),
        rotation: 0.0,
        properties: template.properties.clone(),
    }
}

/// One drag-reposition gesture, pointer-down to pointer-up
#[derive(Debug, Clone)]
pub struct PlacementSession {
    pub element_id: ElementId,
    pub start: Position,
    moved: bool,
}

impl PlacementSession {
    pub fn begin(element_id: ElementId, start: Position) -> Self {
        Self {
            element_id,
            start,
            moved: false,
        }
    }

    pub fn mark_moved(&mut self) {
        self.moved = true;
    }

    /// Whether any move happened (one history entry is due on release)
    pub fn moved(&self) -> bool {
        self.moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_snap_examples() {
        assert_eq!(snap_to_grid(1.73, 0.5), 1.5);
        assert_eq!(snap_to_grid(1.75, 0.5), 2.0);
        assert_eq!(snap_to_grid(-0.26, 0.5), -0.5);
        assert_eq!(snap_to_grid(-0.25, 0.5), 0.0);
        assert_eq!(snap_to_grid(3.0, 0.5), 3.0);
    }

    #[test]
    fn test_snap_results_are_grid_multiples() {
        let mut v = -7.3;
        while v < 7.3 {
            let snapped = snap_to_grid(v, GRID_SIZE);
            let steps = snapped / GRID_SIZE;
            assert!((steps - steps.round()).abs() < 1e-9, "{v} -> {snapped}");
            assert!((snapped - v).abs() <= GRID_SIZE / 2.0 + 1e-9);
            v += 0.037;
        }
    }

    #[test]
    fn test_snap_disabled() {
        assert_eq!(snap_point(1.73, -0.26, 0.5, false), (1.73, -0.26));
        assert_eq!(snap_point(1.73, -0.26, 0.5, true), (1.5, -0.5));
    }

    #[test]
    fn test_instantiate_copies_template() {
        let catalog = Catalog::builtin();
        let template = catalog.element_by_id("oak-tree").unwrap();
        let a = instantiate(template, 1.5, -2.0);
        let b = instantiate(template, 0.0, 0.0);

        assert_ne!(a.id, template.id);
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, "Oak Tree");
        assert_eq!(a.position, Position::ground(1.5, -2.0));
        assert_eq!(a.rotation, 0.0);
        assert_eq!(a.properties, template.properties);
    }

    #[test]
    fn test_session_tracks_movement() {
        let mut session = PlacementSession::begin("e1".to_string(), Position::default());
        assert!(!session.moved());
        session.mark_moved();
        assert!(session.moved());
    }
}
