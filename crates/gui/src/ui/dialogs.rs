//! Modal windows: confirmation, save as, share link and the saved garden list

use eframe::egui;

use crate::app::{AppEditor, AppStorage};
use crate::i18n::t;
use crate::state::ConfirmAction;

fn centered_window(title: &str) -> egui::Window<'_> {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
}

/// Confirmation for destructive actions
pub fn confirm_dialog(ctx: &egui::Context, editor: &mut AppEditor, storage: &mut AppStorage) {
    let Some(action) = editor.state.pending_confirm.clone() else {
        return;
    };
    let message = match &action {
        ConfirmAction::NewGarden => t("confirm.new_garden").to_string(),
        ConfirmAction::DeleteGarden { name, .. } => {
            format!("{} \"{name}\"?", t("confirm.delete_garden"))
        }
    };

    centered_window(t("confirm.title")).show(ctx, |ui| {
        ui.label(message);
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button(t("dialog.ok")).clicked() {
                editor.confirm(storage);
            }
            if ui.button(t("dialog.cancel")).clicked() {
                editor.cancel_confirm();
            }
        });
    });
}

/// "Save as" form: name (required) and description
pub fn save_dialog(ctx: &egui::Context, editor: &mut AppEditor, storage: &mut AppStorage) {
    if !editor.state.save_dialog.open {
        return;
    }

    centered_window(t("save.title")).show(ctx, |ui| {
        let dialog = &mut editor.state.save_dialog;
        egui::Grid::new("save_dialog")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label(t("save.name"));
                ui.text_edit_singleline(&mut dialog.name);
                ui.end_row();

                ui.label(t("save.description"));
                ui.text_edit_multiline(&mut dialog.description);
                ui.end_row();
            });

        let name = dialog.name.trim().to_string();
        let description = dialog.description.trim().to_string();
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui
                .add_enabled(!name.is_empty(), egui::Button::new(t("dialog.save")))
                .clicked()
            {
                // Failures are shown as a notice; the dialog stays open
                let _ = editor.save_as(storage, &name, &description);
            }
            if ui.button(t("dialog.cancel")).clicked() {
                editor.state.save_dialog.open = false;
            }
        });
    });
}

/// Share link with a copy button
pub fn share_dialog(ctx: &egui::Context, editor: &mut AppEditor) {
    let Some(link) = editor.state.share_link.clone() else {
        return;
    };

    centered_window(t("share.title")).show(ctx, |ui| {
        ui.label(t("share.hint"));
        let mut text = link.as_str();
        ui.add(egui::TextEdit::singleline(&mut text).desired_width(380.0));
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button(t("share.copy")).clicked() {
                ui.ctx().copy_text(link.clone());
                editor.state.notify(t("notice.link_copied"));
            }
            if ui.button(t("dialog.close")).clicked() {
                editor.state.share_link = None;
            }
        });
    });
}

/// Saved gardens: open or delete
pub fn open_garden_window(
    ctx: &egui::Context,
    editor: &mut AppEditor,
    storage: &mut AppStorage,
    open: &mut bool,
) {
    if !*open {
        return;
    }

    let gardens = match storage.list() {
        Ok(gardens) => gardens,
        Err(e) => {
            editor
                .state
                .notify_error(format!("{}: {e}", t("notice.list_failed")));
            *open = false;
            return;
        }
    };

    let mut still_open = true;
    let mut chosen = None;
    egui::Window::new(t("open.title"))
        .open(&mut still_open)
        .collapsible(false)
        .default_width(360.0)
        .show(ctx, |ui| {
            if gardens.is_empty() {
                ui.weak(t("open.empty"));
                return;
            }
            egui::ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
                for garden in &gardens {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.strong(&garden.name);
                            ui.weak(format!(
                                "{} · {} {}",
                                garden.last_modified.format("%Y-%m-%d %H:%M"),
                                garden.elements.len(),
                                t("open.elements"),
                            ));
                            if !garden.description.is_empty() {
                                ui.label(&garden.description);
                            }
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button(t("open.load")).clicked() {
                                chosen = Some(garden.id.clone());
                            }
                        });
                    });
                    ui.separator();
                }
            });
        });

    if let Some(id) = chosen {
        if editor.open_garden(storage, &id).is_ok() {
            still_open = false;
        }
    }
    *open = still_open;
}
