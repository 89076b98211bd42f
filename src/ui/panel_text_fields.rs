// src/ui/panel_text_fields.rs

use eframe::egui;
use readiness_wizard_lib::{
    command::{missing_required, required_fields, Tab},
    types::{AppState, FieldGroup},
};

use super::widgets;

/// Free-text tabs: executive summary and appendices.
pub struct TextFieldsPanel {
    tab: Tab,
    group: FieldGroup,
    intro: &'static str,
}

impl TextFieldsPanel {
    pub fn executive() -> Self {
        Self {
            tab: Tab::Executive,
            group: FieldGroup::Executive,
            intro: "High-level summary for reviewers and approvers. All fields are required.",
        }
    }

    pub fn appendices() -> Self {
        Self {
            tab: Tab::Appendices,
            group: FieldGroup::Appendices,
            intro: "Supporting material referenced by the checklist.",
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        let required: Vec<&str> = required_fields(self.tab).iter().map(|f| f.key).collect();

        ui.heading(self.tab.title());
        ui.label(self.intro);
        ui.separator();

        if widgets::field_inputs(ui, state, self.group, true, &required) {
            state.after_mutation();
        }

        let missing = missing_required(state, self.tab);
        if !missing.is_empty() {
            ui.weak(format!("Still required: {}", missing.join(", ")));
        }
    }
}
