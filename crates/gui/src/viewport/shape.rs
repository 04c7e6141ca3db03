//! Element → render item mapping (geometry, color, placement)

use glam::Vec3;
use shared::{ElementKind, GardenElement};

use super::picking::Aabb;

/// RGB color
pub type Rgb = [u8; 3];

pub const PLANT_COLOR: Rgb = [0x2d, 0x5a, 0x27];
pub const WATER_COLOR: Rgb = [0x3f, 0x7f, 0xbf];
pub const DEFAULT_COLOR: Rgb = [0x80, 0x80, 0x80];

/// Thickness of flat items (surfaces, paths, water)
const FLAT_HEIGHT: f64 = 0.1;
const PLANT_RADIUS: f64 = 0.3;

/// Color for a surface material
pub fn material_color(material: Option<&str>) -> Rgb {
    match material {
        Some("grass") => [0x3c, 0x8f, 0x3c],
        Some("concrete") => [0xcc, 0xcc, 0xcc],
        Some("brick") => [0xb3, 0x5c, 0x44],
        Some("wood") => [0x8b, 0x45, 0x13],
        Some("gravel") => [0xa0, 0xa0, 0xa0],
        Some("soil") => [0x59, 0x48, 0x33],
        _ => DEFAULT_COLOR,
    }
}

/// Render geometry, in world units
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Box { width: f32, height: f32, depth: f32 },
    Cylinder { radius: f32, height: f32 },
}

impl Shape {
    pub fn height(&self) -> f32 {
        match *self {
            Shape::Box { height, .. } | Shape::Cylinder { height, .. } => height,
        }
    }
}

/// Everything a backend needs to draw one element
#[derive(Debug, Clone, PartialEq)]
pub struct RenderItem {
    pub shape: Shape,
    /// Shape center; the base sits on the ground
    pub center: Vec3,
    /// Rotation about the vertical axis, radians
    pub rotation: f32,
    pub color: Rgb,
    pub label: String,
    pub kind: ElementKind,
}

impl RenderItem {
    pub fn from_element(element: &GardenElement) -> Self {
        let shape = element_shape(element);
        let center = Vec3::new(
            element.position.x as f32,
            shape.height() * 0.5,
            element.position.z as f32,
        );
        Self {
            shape,
            center,
            rotation: (element.rotation as f32).to_radians(),
            color: element_color(element),
            label: element.name.clone(),
            kind: element.kind.clone(),
        }
    }

    /// Move along the ground, keeping height
    pub fn set_ground_position(&mut self, x: f32, z: f32) {
        self.center.x = x;
        self.center.z = z;
    }

    /// Footprint corners on the ground (x, z), counter-clockwise
    pub fn footprint(&self) -> [Vec3; 4] {
        let (hw, hd) = match self.shape {
            Shape::Box { width, depth, .. } => (width * 0.5, depth * 0.5),
            Shape::Cylinder { radius, .. } => (radius, radius),
        };
        let (sin, cos) = self.rotation.sin_cos();
        let ground = Vec3::new(self.center.x, 0.0, self.center.z);
        [(-hw, -hd), (hw, -hd), (hw, hd), (-hw, hd)].map(|(x, z)| {
            ground + Vec3::new(x * cos + z * sin, 0.0, -x * sin + z * cos)
        })
    }

    /// World-space bounds, enlarged to cover the rotated footprint
    pub fn bounds(&self) -> Aabb {
        let half_y = self.shape.height() * 0.5;
        let (hx, hz) = match self.shape {
            Shape::Box { width, depth, .. } => {
                let (sin, cos) = self.rotation.sin_cos();
                let (hw, hd) = (width * 0.5, depth * 0.5);
                (
                    cos.abs() * hw + sin.abs() * hd,
                    sin.abs() * hw + cos.abs() * hd,
                )
            }
            Shape::Cylinder { radius, .. } => (radius, radius),
        };
        Aabb::from_center_half_extents(self.center, Vec3::new(hx, half_y, hz))
    }
}

fn dim(element: &GardenElement, key: &str, fallback: f64) -> f32 {
    element
        .number(key)
        .filter(|v| *v > 0.0)
        .unwrap_or(fallback) as f32
}

fn element_shape(element: &GardenElement) -> Shape {
    match &element.kind {
        ElementKind::Surface => Shape::Box {
            width: dim(element, "width", 1.0),
            height: dim(element, "height", FLAT_HEIGHT),
            depth: dim(element, "depth", 1.0),
        },
        ElementKind::Path => Shape::Box {
            width: dim(element, "width", 0.8),
            height: FLAT_HEIGHT as f32,
            depth: dim(element, "length", 3.0),
        },
        kind if kind.is_plant() => Shape::Cylinder {
            radius: PLANT_RADIUS as f32,
            height: dim(element, "height", 1.0),
        },
        kind if kind.is_water() => {
            if element.text("shape") == Some("circular") || element.number("radius").is_some() {
                Shape::Cylinder {
                    radius: dim(element, "radius", 1.0),
                    height: FLAT_HEIGHT as f32,
                }
            } else {
                Shape::Box {
                    width: dim(element, "width", 1.0),
                    height: FLAT_HEIGHT as f32,
                    depth: dim(element, "length", 1.0),
                }
            }
        }
        _ => Shape::Box {
            width: dim(element, "width", 1.0),
            height: dim(element, "height", 1.0),
            depth: dim(element, "depth", 1.0),
        },
    }
}

fn element_color(element: &GardenElement) -> Rgb {
    match &element.kind {
        kind if kind.is_plant() => PLANT_COLOR,
        kind if kind.is_water() => WATER_COLOR,
        _ => material_color(element.text("material")),
    }
}
