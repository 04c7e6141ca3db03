//! Properties panel for the selected element
//!
//! Text fields are committed on Enter or focus loss and parsed against the
//! property's current type.

use std::collections::BTreeMap;

use egui::Ui;
use shared::{ElementId, GardenElement, PropertyValue};

use crate::app::AppEditor;
use crate::i18n::t;
use crate::ui::catalog_panel::kind_badge;

const NAME_FIELD: &str = "#name";
const ROTATION_FIELD: &str = "#rotation";

/// Edit buffers of the element shown in the panel
#[derive(Default)]
pub struct PropertiesPanel {
    element_id: Option<ElementId>,
    /// Garden version the buffers were filled from
    version: u64,
    buffers: BTreeMap<String, String>,
    /// Text each buffer started from
    originals: BTreeMap<String, String>,
    error: Option<String>,
}

impl PropertiesPanel {
    pub fn show(&mut self, ui: &mut Ui, editor: &mut AppEditor) {
        ui.heading(t("prop.title"));
        ui.separator();

        let Some(element) = editor.selected_element().cloned() else {
            self.element_id = None;
            self.buffers.clear();
            self.error = None;
            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                ui.weak(t("prop.select_element"));
            });
            return;
        };

        let version = editor.state.garden.version();
        if self.element_id.as_ref() != Some(&element.id) || self.version != version {
            if self.element_id.as_ref() != Some(&element.id) {
                self.error = None;
            }
            self.fill(&element, version);
        }

        ui.horizontal(|ui| {
            ui.strong(kind_badge(&element.kind));
            ui.strong(&element.name);
        });
        ui.add_space(4.0);

        egui::Grid::new("element_props")
            .num_columns(2)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                ui.label(format!("{}:", t("prop.name")));
                if let Some(name) = self.text_field(ui, NAME_FIELD) {
                    if !name.trim().is_empty() {
                        editor.rename(&element.id, name.trim());
                    }
                }
                ui.end_row();

                ui.label(format!("{}:", t("prop.type")));
                ui.label(element.kind.as_str());
                ui.end_row();

                ui.label(format!("{}:", t("prop.position")));
                ui.monospace(format!(
                    "x {:.2}  z {:.2}",
                    element.position.x, element.position.z
                ));
                ui.end_row();

                ui.label(format!("{}:", t("prop.rotation")));
                if let Some(input) = self.text_field(ui, ROTATION_FIELD) {
                    if let Err(e) = editor.set_rotation_input(&element.id, &input) {
                        self.error = Some(e.to_string());
                    }
                }
                ui.end_row();
            });

        if !element.properties.is_empty() {
            ui.add_space(8.0);
            egui::CollapsingHeader::new(t("prop.properties"))
                .id_salt("element_properties")
                .default_open(true)
                .show(ui, |ui| {
                    egui::Grid::new("element_custom_props")
                        .num_columns(2)
                        .spacing([8.0, 4.0])
                        .show(ui, |ui| {
                            for (key, value) in &element.properties {
                                ui.label(format!("{key}:"));
                                self.property_field(ui, editor, &element.id, key, value);
                                ui.end_row();
                            }
                        });
                });
        }

        if let Some(error) = &self.error {
            ui.add_space(4.0);
            ui.colored_label(egui::Color32::from_rgb(200, 60, 60), error);
        }

        ui.add_space(8.0);
        if ui.button(t("prop.delete")).clicked() {
            editor.delete_selected();
        }
    }

    fn fill(&mut self, element: &GardenElement, version: u64) {
        self.element_id = Some(element.id.clone());
        self.version = version;
        self.originals.clear();
        self.originals
            .insert(NAME_FIELD.to_string(), element.name.clone());
        self.originals
            .insert(ROTATION_FIELD.to_string(), format!("{}", element.rotation));
        for (key, value) in &element.properties {
            self.originals.insert(key.clone(), value.to_string());
        }
        self.buffers = self.originals.clone();
    }

    /// Single-line editor; the edited text once the user commits a change
    fn text_field(&mut self, ui: &mut Ui, field: &str) -> Option<String> {
        let buffer = self.buffers.entry(field.to_string()).or_default();
        let response = ui.add(egui::TextEdit::singleline(buffer).desired_width(140.0));
        if !response.lost_focus() {
            return None;
        }
        let text = buffer.clone();
        (self.originals.get(field) != Some(&text)).then_some(text)
    }

    fn property_field(
        &mut self,
        ui: &mut Ui,
        editor: &mut AppEditor,
        id: &str,
        key: &str,
        value: &PropertyValue,
    ) {
        if let PropertyValue::Bool(current) = value {
            let mut checked = *current;
            if ui.checkbox(&mut checked, "").changed() {
                editor.set_property(id, key, PropertyValue::Bool(checked));
            }
            return;
        }
        if let Some(input) = self.text_field(ui, key) {
            match editor.set_property_input(id, key, &input) {
                Ok(_) => self.error = None,
                Err(e) => self.error = Some(format!("{key}: {e}")),
            }
        }
    }
}
