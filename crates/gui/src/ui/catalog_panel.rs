//! Element catalog: category tabs, search and draggable templates

use egui::Ui;
use shared::{ElementKind, ElementTemplate};

use crate::app::AppEditor;
use crate::i18n::t;
use crate::placement::DragPayload;

pub fn show(ui: &mut Ui, editor: &mut AppEditor) {
    ui.heading(t("catalog.title"));
    ui.add(
        egui::TextEdit::singleline(&mut editor.state.search)
            .hint_text(t("catalog.search"))
            .desired_width(f32::INFINITY),
    );
    ui.add_space(4.0);

    if editor.state.search.trim().is_empty() {
        let categories: Vec<&'static str> = editor.catalog().categories().collect();
        ui.horizontal_wrapped(|ui| {
            for id in categories {
                let selected = editor.state.category == id;
                if ui.selectable_label(selected, category_label(id)).clicked() {
                    editor.state.category = id.to_string();
                }
            }
        });
    }
    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("catalog_scroll")
        .show(ui, |ui| {
            let templates = editor.visible_templates();
            if templates.is_empty() {
                ui.weak(t("catalog.empty"));
            }
            for template in templates {
                template_row(ui, template);
            }
        });

    ui.add_space(4.0);
    ui.weak(t("catalog.hint"));
}

fn template_row(ui: &mut Ui, template: &ElementTemplate) {
    let id = egui::Id::new(("catalog_template", template.id.as_str()));
    let payload = DragPayload {
        template_id: template.id.clone(),
    };
    let response = ui
        .dnd_drag_source(id, payload, |ui| {
            ui.horizontal(|ui| {
                ui.monospace(kind_badge(&template.kind));
                ui.label(&template.name);
            });
        })
        .response;
    response.on_hover_text(template_summary(template));
}

fn template_summary(template: &ElementTemplate) -> String {
    let mut lines = vec![template.name.clone()];
    for (key, value) in &template.properties {
        lines.push(format!("{key}: {value}"));
    }
    lines.join("\n")
}

fn category_label(id: &str) -> &'static str {
    match id {
        "garden-plan" => t("category.garden_plan"),
        "plot" => t("category.plot"),
        "houses" => t("category.houses"),
        "plants" => t("category.plants"),
        "furniture" => t("category.furniture"),
        "ponds" => t("category.ponds"),
        "notes" => t("category.notes"),
        _ => "?",
    }
}

/// Short tag shown next to a template or element name
pub fn kind_badge(kind: &ElementKind) -> &'static str {
    match kind {
        ElementKind::Surface | ElementKind::Path => "[S]",
        ElementKind::Tree | ElementKind::Bush | ElementKind::Flower => "[P]",
        ElementKind::House => "[H]",
        ElementKind::Furniture => "[F]",
        ElementKind::Pond | ElementKind::Pool | ElementKind::Fountain => "[W]",
        ElementKind::Note => "[N]",
        ElementKind::Other(_) => "[?]",
    }
}
