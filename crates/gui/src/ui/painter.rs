//! Immediate-mode drawing of the retained scene with the egui painter

use egui::{Color32, Painter, Pos2, Rect, Stroke};
use glam::{Vec2, Vec3};

use crate::app::AppEditor;
use crate::viewport::shape::Rgb;
use crate::viewport::{ndc_to_screen, Camera, RenderItem, Shape};

const GROUND_COLOR: Color32 = Color32::from_rgb(0x7c, 0xae, 0x5a);
const CIRCLE_SEGMENTS: usize = 24;

struct Projector<'a> {
    camera: &'a Camera,
    aspect: f32,
    rect: Rect,
}

impl Projector<'_> {
    fn point(&self, world: Vec3) -> Option<Pos2> {
        let ndc = self.camera.project(world, self.aspect)?;
        let screen = ndc_to_screen(
            ndc,
            Vec2::new(self.rect.min.x, self.rect.min.y),
            Vec2::new(self.rect.width(), self.rect.height()),
        );
        Some(Pos2::new(screen.x, screen.y))
    }

    /// All points or nothing
    fn polygon(&self, points: &[Vec3]) -> Option<Vec<Pos2>> {
        points.iter().map(|p| self.point(*p)).collect()
    }
}

fn color(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

fn darken(c: Color32, factor: f32) -> Color32 {
    let f = |v: u8| (v as f32 * factor) as u8;
    Color32::from_rgb(f(c.r()), f(c.g()), f(c.b()))
}

/// Outline of an item at height `y`
fn outline(item: &RenderItem, y: f32) -> Vec<Vec3> {
    match item.shape {
        Shape::Box { .. } => item
            .footprint()
            .iter()
            .map(|p| Vec3::new(p.x, y, p.z))
            .collect(),
        Shape::Cylinder { radius, .. } => (0..CIRCLE_SEGMENTS)
            .map(|i| {
                let a = i as f32 / CIRCLE_SEGMENTS as f32 * std::f32::consts::TAU;
                Vec3::new(
                    item.center.x + radius * a.cos(),
                    y,
                    item.center.z + radius * a.sin(),
                )
            })
            .collect(),
    }
}

pub fn paint(painter: &Painter, rect: Rect, editor: &AppEditor) {
    let settings = &editor.state.settings;
    let scene = editor.scene();
    let proj = Projector {
        camera: scene.camera(),
        aspect: scene.aspect(),
        rect,
    };

    painter.rect_filled(rect, 0.0, color(settings.viewport.background_color));

    // Ground
    let half = scene.garden_size() * 0.5;
    let ground = [
        Vec3::new(-half, 0.0, -half),
        Vec3::new(half, 0.0, -half),
        Vec3::new(half, 0.0, half),
        Vec3::new(-half, 0.0, half),
    ];
    if let Some(points) = proj.polygon(&ground) {
        painter.add(egui::Shape::convex_polygon(points, GROUND_COLOR, Stroke::NONE));
    }

    // Grid
    if settings.grid.visible && settings.grid.size > 0.0 {
        let alpha = (settings.grid.opacity.clamp(0.0, 1.0) * 255.0) as u8;
        let stroke = Stroke::new(1.0, Color32::from_rgba_unmultiplied(255, 255, 255, alpha));
        let step = settings.grid.size as f32;
        let lines = (2.0 * half / step).round() as i32;
        for i in 0..=lines {
            let v = -half + i as f32 * step;
            for (a, b) in [
                (Vec3::new(v, 0.0, -half), Vec3::new(v, 0.0, half)),
                (Vec3::new(-half, 0.0, v), Vec3::new(half, 0.0, v)),
            ] {
                if let (Some(a), Some(b)) = (proj.point(a), proj.point(b)) {
                    painter.line_segment([a, b], stroke);
                }
            }
        }
    }

    // Elements, far to near
    let view = scene.camera().view_matrix();
    let mut items: Vec<_> = scene
        .backend()
        .items()
        .map(|(handle, item)| (view.transform_point3(item.center).z, handle, item))
        .collect();
    items.sort_by(|a, b| a.0.total_cmp(&b.0));

    let selected = editor
        .state
        .selection
        .selected()
        .and_then(|id| scene.handle_of(id));
    let selection_stroke = Stroke::new(2.5, color(settings.viewport.selection_color));

    for (_, handle, item) in items {
        let fill = color(item.color);
        let top_y = item.center.y + item.shape.height() * 0.5;
        let Some(top) = proj.polygon(&outline(item, top_y)) else {
            continue;
        };

        // Base outline and vertical edges; they collapse onto the top in 2D
        if let Some(base) = proj.polygon(&outline(item, 0.0)) {
            let side = darken(fill, 0.7);
            for (a, b) in base.iter().zip(&top) {
                painter.line_segment([*a, *b], Stroke::new(1.0, side));
            }
            painter.add(egui::Shape::closed_line(base, Stroke::new(1.0, side)));
        }

        let stroke = if Some(handle) == selected {
            selection_stroke
        } else {
            Stroke::new(1.0, darken(fill, 0.6))
        };
        let label_pos = proj.point(Vec3::new(item.center.x, top_y, item.center.z));
        painter.add(egui::Shape::convex_polygon(top, fill, stroke));

        if let Some(pos) = label_pos {
            painter.text(
                pos,
                egui::Align2::CENTER_CENTER,
                &item.label,
                egui::FontId::proportional(11.0),
                Color32::from_rgb(20, 20, 20),
            );
        }
    }
}
