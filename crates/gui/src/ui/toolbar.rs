//! Toolbar: file actions, history, view mode and grid toggles

use egui::Ui;

use crate::app::{AppEditor, AppStorage, SHARE_BASE_URL};
use crate::i18n::t;
use crate::state::ViewMode;
use crate::ui::viewport::zoom_steps;

pub fn show(ui: &mut Ui, editor: &mut AppEditor, storage: &mut AppStorage) {
    ui.horizontal(|ui| {
        if ui.button(t("tb.new")).clicked() {
            editor.request_new_garden();
        }
        if ui.button(t("tb.save")).clicked() {
            editor.save(storage);
        }
        if ui.button(t("tb.share")).clicked() {
            editor.share(SHARE_BASE_URL);
        }

        ui.separator();

        if ui
            .add_enabled(editor.state.garden.can_undo(), egui::Button::new(t("tb.undo")))
            .clicked()
        {
            editor.undo();
        }
        if ui
            .add_enabled(editor.state.garden.can_redo(), egui::Button::new(t("tb.redo")))
            .clicked()
        {
            editor.redo();
        }
        if ui
            .add_enabled(
                editor.state.selection.selected().is_some(),
                egui::Button::new(t("tb.delete")),
            )
            .clicked()
        {
            editor.delete_selected();
        }

        ui.separator();

        let mode = editor.state.view_mode;
        if ui
            .selectable_label(mode == ViewMode::TopDown, t("view.2d"))
            .clicked()
        {
            editor.set_view_mode(ViewMode::TopDown);
        }
        if ui
            .selectable_label(mode == ViewMode::Perspective, t("view.3d"))
            .clicked()
        {
            editor.set_view_mode(ViewMode::Perspective);
        }
        if ui.button("−").on_hover_text(t("tb.zoom_out")).clicked() {
            zoom_steps(editor, -1.0);
        }
        if ui.button("+").on_hover_text(t("tb.zoom_in")).clicked() {
            zoom_steps(editor, 1.0);
        }

        ui.separator();

        let settings = &mut editor.state.settings;
        ui.toggle_value(&mut settings.grid.visible, t("tb.grid"));
        ui.toggle_value(&mut settings.snap_to_grid, t("tb.snap"));
    });
}
