// src/ui/panel_signoff.rs

use eframe::egui;
use readiness_wizard_lib::{
    form::ReviewRow,
    types::{AppState, FieldGroup},
};

use super::{message::PanelMsgState, widgets};

/// Sign-offs and review history, shown under the final validation checklist.
pub struct SignoffPanel;

impl SignoffPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, state: &mut AppState, msg: &mut PanelMsgState) {
        ui.add_space(12.0);
        ui.heading("Sign-offs");
        ui.separator();

        let mut changed = widgets::field_inputs(ui, state, FieldGroup::Signoffs, false, &[]);

        ui.add_space(12.0);
        ui.heading("Review History");
        ui.separator();

        let mut edits: Vec<(usize, ReviewRow)> = Vec::new();

        egui::Grid::new("review_history")
            .num_columns(3)
            .striped(true)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.strong("Date");
                ui.strong("Reviewer");
                ui.strong("Comments");
                ui.end_row();

                for (i, row) in state.form.review_history.iter().enumerate() {
                    let mut r = row.clone();
                    let mut touched = false;
                    touched |= ui.text_edit_singleline(&mut r.date).changed();
                    touched |= ui.text_edit_singleline(&mut r.reviewer).changed();
                    touched |= ui.text_edit_singleline(&mut r.comments).changed();
                    ui.end_row();

                    if touched {
                        edits.push((i, r));
                    }
                }
            });

        for (i, row) in edits {
            match state.form.set_review_row(i, row) {
                Ok(()) => changed = true,
                Err(e) => msg.from_app_error(&e),
            }
        }

        if changed {
            state.after_mutation();
        }
    }
}
