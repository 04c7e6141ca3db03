use egui::Ui;

use crate::app::AppEditor;
use crate::i18n::t;
use crate::state::NoticeLevel;

pub fn show(ui: &mut Ui, editor: &AppEditor) {
    let state = &editor.state;
    ui.horizontal(|ui| {
        match &state.current_garden {
            Some(current) => ui.label(&current.name),
            None => ui.weak(t("status.unsaved_garden")),
        };
        if editor.has_unsaved_changes() {
            ui.weak("*");
        }

        ui.separator();
        ui.weak(format!("{}: {}", t("status.elements"), state.garden.len()));

        ui.separator();
        match editor.selected_element() {
            Some(element) => ui.label(format!("{}: {}", t("status.selected"), element.name)),
            None => ui.weak(t("status.ready")),
        };

        if let Some(notice) = &state.notice {
            ui.separator();
            let color = match notice.level {
                NoticeLevel::Info => egui::Color32::from_rgb(60, 120, 60),
                NoticeLevel::Error => egui::Color32::from_rgb(200, 60, 60),
            };
            ui.colored_label(color, &notice.message);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(state.view_mode.as_str().to_uppercase());
        });
    });
}
