// src/ui/panel_export.rs

use std::path::PathBuf;

use chrono::Local;
use eframe::egui;
use readiness_wizard_lib::{
    command::Tab,
    context::AppCtx,
    error::AppError,
    export::{
        export_document, write_artifact, ExportArtifact, ExportCollaborators, ExportError,
        ExportFormat,
    },
    progress::{overall_counts, summary_rows, CategoryBreakdown},
    types::AppState,
};

use super::{message::PanelMsgState, widgets};

/// Whole-state actions offered below the export buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportPanelAction {
    ReloadChecklist,
    StartOver,
}

pub struct ExportPanel {
    use_save_dialog: bool,
    last_saved: Option<PathBuf>,
    confirm_start_over: bool,
}

impl ExportPanel {
    pub fn new() -> Self {
        Self {
            use_save_dialog: true,
            last_saved: None,
            confirm_start_over: false,
        }
    }

    pub fn ui(
        &mut self,
        ui: &mut egui::Ui,
        state: &AppState,
        ctx: &AppCtx,
        collaborators: &ExportCollaborators,
        msg: &mut PanelMsgState,
    ) -> Option<ExportPanelAction> {
        ui.heading(Tab::Export.title());
        ui.separator();

        let counts = overall_counts(&state.definition, &state.form);
        ui.label(format!(
            "Overall completion: {}% ({} of {} tracked fields and items)",
            counts.percent(),
            counts.completed,
            counts.total
        ));
        ui.add_space(10.0);

        ui.label(egui::RichText::new("Completion Summary by Category").size(16.0).strong());
        match state.category_summary.as_ref() {
            Some(summary) => summary_table(ui, summary),
            None => {
                ui.weak("Summary is being prepared…");
            }
        }

        ui.add_space(16.0);
        ui.label(egui::RichText::new("Export").size(16.0).strong());
        ui.checkbox(&mut self.use_save_dialog, "Choose location when saving");
        if !self.use_save_dialog {
            ui.weak(format!("Files go to {}", ctx.export_dir.display()));
        }
        ui.add_space(6.0);

        let mut requested = None;
        ui.horizontal(|ui| {
            for format in ExportFormat::ALL {
                let btn = ui
                    .add_enabled(
                        collaborators.supports(format),
                        egui::Button::new(format!("Export {}", format.label())),
                    )
                    .on_disabled_hover_text("This build has no backend for this format.");
                if btn.clicked() {
                    requested = Some(format);
                }
            }
        });

        if let Some(format) = requested {
            match export_document(state, format, collaborators, Local::now()) {
                Ok(artifact) => self.save(format, artifact, ctx, msg),
                Err(e) => {
                    tracing::warn!(error = %e, "export failed");
                    msg.from_app_error(&AppError::from(e));
                }
            }
        }

        if let Some(p) = self.last_saved.as_ref() {
            ui.add_space(8.0);
            ui.weak(format!("Last saved: {}", p.display()));
        }

        ui.add_space(16.0);
        ui.separator();
        let mut action = None;
        ui.horizontal(|ui| {
            if ui
                .button("Reload checklist")
                .on_hover_text(ctx.checklist_path.display().to_string())
                .clicked()
            {
                action = Some(ExportPanelAction::ReloadChecklist);
            }
            ui.checkbox(&mut self.confirm_start_over, "Clear all answers");
            if ui
                .add_enabled(self.confirm_start_over, egui::Button::new("Start over"))
                .clicked()
            {
                self.confirm_start_over = false;
                self.last_saved = None;
                action = Some(ExportPanelAction::StartOver);
            }
        });

        action
    }

    fn save(
        &mut self,
        format: ExportFormat,
        artifact: ExportArtifact,
        ctx: &AppCtx,
        msg: &mut PanelMsgState,
    ) {
        let target: Result<PathBuf, ExportError> = if self.use_save_dialog {
            let ext = artifact
                .filename
                .rsplit('.')
                .next()
                .unwrap_or_default()
                .to_string();
            match rfd::FileDialog::new()
                .set_directory(&ctx.export_dir)
                .set_file_name(&artifact.filename)
                .add_filter(ext.to_uppercase(), &[ext.as_str()])
                .save_file()
            {
                Some(path) => std::fs::write(&path, &artifact.bytes).map(|_| path).map_err(Into::into),
                None => {
                    msg.clear();
                    return;
                }
            }
        } else {
            write_artifact(&ctx.export_dir, &artifact)
        };

        match target {
            Ok(path) => {
                tracing::info!(path = %path.display(), "export saved");
                self.last_saved = Some(path);
                msg.set_success(match format {
                    ExportFormat::Text => "Document exported successfully!",
                    ExportFormat::Docx => "Word document exported successfully!",
                    ExportFormat::Pdf => "PDF document exported successfully!",
                });
            }
            Err(e) => msg.from_app_error(&AppError::from(e)),
        }
    }
}

fn summary_table(ui: &mut egui::Ui, summary: &CategoryBreakdown) {
    egui::Grid::new("category_summary")
        .num_columns(7)
        .striped(true)
        .spacing([16.0, 6.0])
        .show(ui, |ui| {
            for h in ["Category", "Total", "Completed", "Progress", "Exceptions", "Comments", "Status"] {
                ui.strong(h);
            }
            ui.end_row();

            for row in summary_rows(summary) {
                widgets::chip(ui, row.label, widgets::tone_color(row.category.tone()));
                ui.label(row.total.to_string());
                ui.label(row.completed.to_string());
                ui.add(
                    egui::ProgressBar::new(row.completion_pct as f32 / 100.0)
                        .desired_width(120.0)
                        .text(format!("{}%", row.completion_pct)),
                );
                ui.label(row.exceptions.to_string());
                ui.label(row.comments.to_string());
                widgets::chip(ui, row.status.label(), widgets::status_color(row.status));
                ui.end_row();
            }
        });
}
