//! Application menu bar and settings window

use eframe::egui;

use crate::i18n::t;
use crate::state::{EditorSettings, Language, ViewMode};

use super::{AppEditor, AppStorage, Windows, SHARE_BASE_URL};

/// Show the file menu
pub fn file_menu(
    ui: &mut egui::Ui,
    editor: &mut AppEditor,
    storage: &mut AppStorage,
    windows: &mut Windows,
) {
    ui.menu_button(t("menu.file"), |ui| {
        if ui.button(t("menu.new")).clicked() {
            editor.request_new_garden();
            ui.close_menu();
        }
        if ui.button(t("menu.open")).clicked() {
            windows.open_garden = true;
            ui.close_menu();
        }
        if ui.button(t("menu.save")).clicked() {
            editor.save(storage);
            ui.close_menu();
        }
        if ui.button(t("menu.save_as")).clicked() {
            open_save_as(editor);
            ui.close_menu();
        }
        ui.separator();
        if ui.button(t("menu.import")).clicked() {
            ui.close_menu();
            if let Some(path) = rfd::FileDialog::new()
                .set_title(t("menu.import_title"))
                .add_filter("JSON", &["json"])
                .pick_file()
            {
                // Errors are reported through the editor notice
                let _ = editor.import_file(storage, &path);
            }
        }
        if ui.button(t("menu.export")).clicked() {
            ui.close_menu();
            export_garden(editor);
        }
        if ui.button(t("menu.template")).clicked() {
            ui.close_menu();
            if let Some(path) = rfd::FileDialog::new()
                .set_title(t("menu.template_title"))
                .add_filter("JSON", &["json"])
                .pick_file()
            {
                let _ = editor.load_template_file(&path);
            }
        }
        ui.separator();
        if ui.button(t("menu.share")).clicked() {
            editor.share(SHARE_BASE_URL);
            ui.close_menu();
        }
        if ui
            .add_enabled(
                editor.state.current_garden.is_some(),
                egui::Button::new(t("menu.delete_garden")),
            )
            .clicked()
        {
            editor.request_delete_garden();
            ui.close_menu();
        }
        ui.separator();
        if ui.button(t("menu.quit")).clicked() {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

/// Prefill and open the "save as" dialog
pub fn open_save_as(editor: &mut AppEditor) {
    let state = &mut editor.state;
    if let Some(current) = &state.current_garden {
        state.save_dialog.name = current.name.clone();
        state.save_dialog.description = current.description.clone();
    }
    state.save_dialog.open = true;
}

/// Pick a directory and write `<name>_garden.json` into it
pub fn export_garden(editor: &mut AppEditor) {
    let Some(dir) = rfd::FileDialog::new()
        .set_title(t("menu.export_title"))
        .pick_folder()
    else {
        return;
    };
    if let Ok(written) = editor.export_to_dir(&dir) {
        tracing::info!("Exported garden to {}", written.display());
        editor
            .state
            .notify(format!("{} {}", t("notice.exported"), written.display()));
    }
}

/// Show the edit menu
pub fn edit_menu(ui: &mut egui::Ui, editor: &mut AppEditor) {
    ui.menu_button(t("menu.edit"), |ui| {
        if ui
            .add_enabled(editor.state.garden.can_undo(), egui::Button::new(t("menu.undo")))
            .clicked()
        {
            editor.undo();
            ui.close_menu();
        }
        if ui
            .add_enabled(editor.state.garden.can_redo(), egui::Button::new(t("menu.redo")))
            .clicked()
        {
            editor.redo();
            ui.close_menu();
        }
        ui.separator();
        let has_selection = editor.state.selection.selected().is_some();
        if ui
            .add_enabled(has_selection, egui::Button::new(t("menu.delete")))
            .clicked()
        {
            editor.delete_selected();
            ui.close_menu();
        }
        if ui.button(t("menu.deselect")).clicked() {
            editor.clear_selection();
            ui.close_menu();
        }
    });
}

/// Show the view menu
pub fn view_menu(ui: &mut egui::Ui, editor: &mut AppEditor, windows: &mut Windows) {
    ui.menu_button(t("menu.view"), |ui| {
        ui.checkbox(&mut editor.state.panels.catalog, t("menu.catalog"));
        ui.checkbox(&mut editor.state.panels.properties, t("menu.properties"));
        ui.separator();
        let mode = editor.state.view_mode;
        if ui.radio(mode == ViewMode::TopDown, t("view.2d")).clicked() {
            editor.set_view_mode(ViewMode::TopDown);
            ui.close_menu();
        }
        if ui.radio(mode == ViewMode::Perspective, t("view.3d")).clicked() {
            editor.set_view_mode(ViewMode::Perspective);
            ui.close_menu();
        }
        ui.separator();
        ui.checkbox(&mut editor.state.settings.grid.visible, t("settings.grid_visible"));
        ui.checkbox(&mut editor.state.settings.snap_to_grid, t("settings.snap_grid"));
        ui.separator();
        ui.menu_button(t("menu.language"), |ui| {
            let language = &mut editor.state.settings.ui.language;
            if ui.selectable_label(*language == Language::Ru, "Русский").clicked() {
                *language = Language::Ru;
                ui.close_menu();
            }
            if ui.selectable_label(*language == Language::En, "English").clicked() {
                *language = Language::En;
                ui.close_menu();
            }
        });
        if ui.button(t("menu.preferences")).clicked() {
            windows.settings = true;
            ui.close_menu();
        }
    });
}

/// Show the settings window
pub fn settings_window(ctx: &egui::Context, editor: &mut AppEditor, windows: &mut Windows) {
    let mut open = windows.settings;
    let settings = &mut editor.state.settings;
    egui::Window::new(t("settings.title"))
        .open(&mut open)
        .resizable(true)
        .default_width(360.0)
        .show(ctx, |ui| {
            show_grid_settings(ui, settings);
            show_viewport_settings(ui, settings);
            show_ui_settings(ui, settings);

            ui.separator();
            if ui.button(t("settings.reset")).clicked() {
                *settings = EditorSettings::default();
            }
        });
    windows.settings = open;
}

fn show_grid_settings(ui: &mut egui::Ui, settings: &mut EditorSettings) {
    ui.heading(t("settings.grid"));
    ui.checkbox(&mut settings.grid.visible, t("settings.grid_visible"));
    ui.checkbox(&mut settings.snap_to_grid, t("settings.snap_grid"));

    ui.horizontal(|ui| {
        ui.label(t("settings.grid_size"));
        ui.add(
            egui::DragValue::new(&mut settings.grid.size)
                .speed(0.05)
                .range(0.1..=5.0)
                .suffix(" m"),
        );
    });

    ui.horizontal(|ui| {
        ui.label(t("settings.grid_opacity"));
        ui.add(egui::Slider::new(&mut settings.grid.opacity, 0.0..=1.0));
    });
    ui.add_space(10.0);
}

fn show_viewport_settings(ui: &mut egui::Ui, settings: &mut EditorSettings) {
    ui.heading(t("settings.viewport"));
    ui.horizontal(|ui| {
        ui.label(t("settings.zoom_speed"));
        ui.add(
            egui::DragValue::new(&mut settings.viewport.zoom_speed)
                .speed(0.1)
                .range(0.1..=10.0),
        );
    });
    color_row(ui, t("settings.bg_color"), &mut settings.viewport.background_color);
    color_row(ui, t("settings.sel_color"), &mut settings.viewport.selection_color);
    ui.add_space(10.0);
}

fn color_row(ui: &mut egui::Ui, label: &str, rgb: &mut [u8; 3]) {
    ui.horizontal(|ui| {
        ui.label(label);
        let mut color = egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2]);
        if ui.color_edit_button_srgba(&mut color).changed() {
            *rgb = [color.r(), color.g(), color.b()];
        }
    });
}

fn show_ui_settings(ui: &mut egui::Ui, settings: &mut EditorSettings) {
    ui.heading(t("settings.ui"));
    ui.horizontal(|ui| {
        ui.label(t("settings.font_size"));
        ui.add(
            egui::DragValue::new(&mut settings.ui.font_size)
                .speed(0.5)
                .range(8.0..=24.0)
                .suffix(" pt"),
        );
    });
    ui.add_space(10.0);
}
