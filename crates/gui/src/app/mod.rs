//! Main application module

mod keyboard;
mod menus;
mod styles;

use eframe::egui;

use crate::editor::Editor;
use crate::i18n::{set_lang, Lang};
use crate::state::{EditorSettings, Language};
use crate::storage::{FileStore, GardenStorage};
use crate::ui::dialogs;
use crate::ui::properties::PropertiesPanel;
use crate::ui::viewport::ViewportPanel;
use crate::ui::{catalog_panel, status_bar, toolbar};
use crate::viewport::RetainedScene;
use crate::LaunchArgs;

/// Base URL share links point at
pub const SHARE_BASE_URL: &str = "https://garden-planner.app/";

pub type AppEditor = Editor<RetainedScene>;
pub type AppStorage = GardenStorage<FileStore>;

/// Floating windows toggled from menus
#[derive(Default)]
pub struct Windows {
    pub open_garden: bool,
    pub settings: bool,
}

/// Main application
pub struct GardenApp {
    editor: AppEditor,
    storage: AppStorage,
    viewport: ViewportPanel,
    properties: PropertiesPanel,
    windows: Windows,
    /// Last applied font size (to detect changes)
    last_font_size: f32,
    /// Last persisted settings (to detect changes)
    last_settings: EditorSettings,
}

impl GardenApp {
    pub fn new(cc: &eframe::CreationContext<'_>, args: LaunchArgs) -> Self {
        let settings = EditorSettings::load();
        apply_language(settings.ui.language);
        styles::configure_styles(&cc.egui_ctx, settings.ui.font_size);

        let store = FileStore::open_default().unwrap_or_else(|| {
            tracing::warn!("No data directory available, storing gardens in ./garden-data");
            FileStore::new("garden-data")
        });
        let mut storage = GardenStorage::new(store);

        let mut editor = Editor::new(RetainedScene::default(), settings.clone());

        // CLI garden takes priority over a share link
        if let Some(path) = &args.garden {
            if editor.import_file(&mut storage, path).is_ok() {
                tracing::info!("Imported garden from {}", path.display());
            }
        } else if let Some(link) = &args.link {
            if let Ok(true) = editor.open_share_link(&storage, link) {
                tracing::info!("Opened shared garden from {link}");
            }
        }

        Self {
            editor,
            storage,
            viewport: ViewportPanel::default(),
            properties: PropertiesPanel::default(),
            windows: Windows::default(),
            last_font_size: settings.ui.font_size,
            last_settings: settings,
        }
    }

    fn persist_settings_if_changed(&mut self, ctx: &egui::Context) {
        if self.editor.state.settings == self.last_settings {
            return;
        }
        let settings = self.editor.state.settings.clone();
        if settings.ui.font_size != self.last_font_size {
            styles::apply_font_size(ctx, settings.ui.font_size);
            self.last_font_size = settings.ui.font_size;
        }
        apply_language(settings.ui.language);
        self.editor
            .scene_mut()
            .set_zoom_speed(settings.viewport.zoom_speed);
        settings.save();
        self.last_settings = settings;
    }
}

fn apply_language(language: Language) {
    set_lang(match language {
        Language::Ru => Lang::Ru,
        Language::En => Lang::En,
    });
}

impl eframe::App for GardenApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.persist_settings_if_changed(ctx);

        keyboard::handle_keyboard(ctx, &mut self.editor, &mut self.storage);

        // ── Menu bar ──────────────────────────────────────────
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                menus::file_menu(ui, &mut self.editor, &mut self.storage, &mut self.windows);
                menus::edit_menu(ui, &mut self.editor);
                menus::view_menu(ui, &mut self.editor, &mut self.windows);
            });
        });

        // ── Windows and dialogs ──────────────────────────────
        menus::settings_window(ctx, &mut self.editor, &mut self.windows);
        dialogs::confirm_dialog(ctx, &mut self.editor, &mut self.storage);
        dialogs::save_dialog(ctx, &mut self.editor, &mut self.storage);
        dialogs::share_dialog(ctx, &mut self.editor);
        dialogs::open_garden_window(
            ctx,
            &mut self.editor,
            &mut self.storage,
            &mut self.windows.open_garden,
        );

        // ── Toolbar ───────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .frame(
                egui::Frame::side_top_panel(&ctx.style())
                    .inner_margin(egui::Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                toolbar::show(ui, &mut self.editor, &mut self.storage);
            });

        // ── Status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .frame(
                egui::Frame::side_top_panel(&ctx.style())
                    .inner_margin(egui::Margin::symmetric(8, 2)),
            )
            .show(ctx, |ui| {
                status_bar::show(ui, &self.editor);
            });

        // ── Left panel: Catalog ──────────────────────────────
        if self.editor.state.panels.catalog {
            egui::SidePanel::left("catalog")
                .default_width(230.0)
                .width_range(160.0..=400.0)
                .resizable(true)
                .frame(
                    egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(6)),
                )
                .show(ctx, |ui| {
                    catalog_panel::show(ui, &mut self.editor);
                });
        }

        // ── Right panel: Properties ──────────────────────────
        if self.editor.state.panels.properties {
            egui::SidePanel::right("properties")
                .default_width(280.0)
                .width_range(200.0..=500.0)
                .resizable(true)
                .frame(
                    egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(6)),
                )
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical()
                        .id_salt("props_scroll")
                        .show(ui, |ui| {
                            self.properties.show(ui, &mut self.editor);
                        });
                });
        }

        // ── Central panel: garden viewport ───────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.viewport.show(ui, &mut self.editor);
            });
    }
}
