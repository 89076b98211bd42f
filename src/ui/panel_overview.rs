// src/ui/panel_overview.rs

use eframe::egui;
use readiness_wizard_lib::{
    command::{missing_required, required_fields, Tab},
    types::{AppState, FieldGroup, CRITICALITY_CHOICES, SERVICE_TYPE_CHOICES},
};

use super::widgets;

pub struct OverviewPanel;

impl OverviewPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        let required = required_keys();

        ui.heading(Tab::Overview.title());
        ui.label("Project metadata for this readiness review. Fields marked * are required.");
        ui.separator();

        let mut changed = widgets::field_inputs(ui, state, FieldGroup::Metadata, false, &required);

        ui.add_space(6.0);
        changed |= radio_group(ui, state, "service_type", "Service Type *", &SERVICE_TYPE_CHOICES);
        ui.add_space(6.0);
        changed |= radio_group(
            ui,
            state,
            "criticality_level",
            "Criticality Level *",
            &CRITICALITY_CHOICES,
        );

        if changed {
            state.after_mutation();
        }

        let missing = missing_required(state, Tab::Overview);
        if !missing.is_empty() {
            ui.add_space(10.0);
            ui.weak(format!("Still required: {}", missing.join(", ")));
        }
    }
}

fn required_keys() -> Vec<&'static str> {
    required_fields(Tab::Overview)
        .iter()
        .map(|f| f.key)
        .collect()
}

fn radio_group(
    ui: &mut egui::Ui,
    state: &mut AppState,
    key: &str,
    label: &str,
    choices: &[&str],
) -> bool {
    let current = state.form.field(FieldGroup::Metadata, key).to_string();
    let mut picked = None;

    ui.label(label);
    ui.horizontal_wrapped(|ui| {
        for choice in choices {
            if ui.radio(current == *choice, *choice).clicked() {
                picked = Some(*choice);
            }
        }
    });

    match picked {
        Some(c) if c != current => state.form.set_field(FieldGroup::Metadata, key, c).is_ok(),
        _ => false,
    }
}
