//! Garden viewport panel: catalog drops, element selection and dragging,
//! camera controls

use egui::{PointerButton, Pos2, Rect, Ui};
use glam::Vec2;

use crate::app::AppEditor;
use crate::i18n::t;
use crate::placement::DragPayload;
use crate::state::ViewMode;
use crate::ui::painter;
use crate::viewport::screen_to_ndc;

/// Scroll distance of one wheel notch, in points
const SCROLL_NOTCH: f32 = 50.0;
/// 2D zoom factor change per notch
const TOP_DOWN_ZOOM_STEP: f32 = 0.1;
/// Orbit degrees per dragged point
const ORBIT_SPEED: f32 = 0.4;

/// Zoom by wheel notches (positive zooms in)
pub fn zoom_steps(editor: &mut AppEditor, notches: f32) {
    match editor.state.view_mode {
        ViewMode::TopDown => editor.zoom(notches * TOP_DOWN_ZOOM_STEP),
        ViewMode::Perspective => editor.zoom(notches),
    }
}

fn to_ndc(rect: Rect, pos: Pos2) -> Vec2 {
    screen_to_ndc(
        Vec2::new(pos.x, pos.y),
        Vec2::new(rect.min.x, rect.min.y),
        Vec2::new(rect.width(), rect.height()),
    )
}

#[derive(Default)]
pub struct ViewportPanel;

impl ViewportPanel {
    pub fn show(&mut self, ui: &mut Ui, editor: &mut AppEditor) {
        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
        editor
            .scene_mut()
            .set_aspect(rect.width() / rect.height().max(1.0));

        // ── Drop from catalog ─────────────────────────────
        if let Some(payload) = response.dnd_release_payload::<DragPayload>() {
            if let Some(pos) = response.hover_pos() {
                editor.drop_template(&payload.template_id, to_ndc(rect, pos));
            }
        }

        // ── Select and drag elements ──────────────────────
        if response.clicked_by(PointerButton::Primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                editor.pointer_down(to_ndc(rect, pos));
                editor.pointer_up();
            }
        }
        if response.drag_started_by(PointerButton::Primary) {
            let origin = ui.input(|i| i.pointer.press_origin());
            if let Some(pos) = origin.or_else(|| response.interact_pointer_pos()) {
                editor.pointer_down(to_ndc(rect, pos));
            }
        }
        if response.dragged_by(PointerButton::Primary) && editor.is_dragging() {
            if let Some(pos) = response.interact_pointer_pos() {
                editor.pointer_move(to_ndc(rect, pos));
            }
        }
        if response.drag_stopped() {
            editor.pointer_up();
        }

        // ── Camera ────────────────────────────────────────
        self.handle_camera(ui, &response, rect, editor);

        if !ui.is_rect_visible(rect) {
            return;
        }
        let painter = ui.painter_at(rect);
        painter::paint(&painter, rect, editor);

        if editor.elements().is_empty() {
            painter.text(
                egui::pos2(rect.center().x, rect.bottom() - 20.0),
                egui::Align2::CENTER_BOTTOM,
                t("viewport.hint"),
                egui::FontId::proportional(12.0),
                egui::Color32::from_rgb(90, 100, 90),
            );
        }
    }

    fn handle_camera(
        &mut self,
        ui: &Ui,
        response: &egui::Response,
        rect: Rect,
        editor: &mut AppEditor,
    ) {
        let camera_drag = response.dragged_by(PointerButton::Secondary)
            || response.dragged_by(PointerButton::Middle);
        if camera_drag {
            let delta = response.drag_delta();
            let orbit = editor.state.view_mode == ViewMode::Perspective
                && response.dragged_by(PointerButton::Secondary);
            let camera = editor.scene_mut().camera_mut();
            if orbit {
                camera.orbit(delta.x * ORBIT_SPEED, delta.y * ORBIT_SPEED);
            } else {
                camera.pan(Vec2::new(delta.x, delta.y), rect.height());
            }
        }

        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll.abs() > 0.1 {
                zoom_steps(editor, scroll / SCROLL_NOTCH);
            }
        }
    }
}
