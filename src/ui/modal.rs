// src/ui/modal.rs

use chrono::Local;
use eframe::egui;
use readiness_wizard_lib::{
    command::{self, Modal},
    types::AppState,
};

use super::message::PanelMsgState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ModalAction {
    Submit,
    Cancel,
}

/// Draws the open dialog (if any) and applies its outcome. Validation
/// failures keep the dialog open and show inline.
pub struct ModalHost {
    inline: PanelMsgState,
}

impl ModalHost {
    pub fn new() -> Self {
        Self {
            inline: PanelMsgState::default(),
        }
    }

    pub fn ui(&mut self, ctx: &egui::Context, state: &mut AppState, toast: &mut PanelMsgState, debug_ui: bool) {
        let Some(modal) = state.modal.as_mut() else {
            self.inline.clear();
            return;
        };

        let title = match &*modal {
            Modal::Exception(_) => "Request Exception",
            Modal::Comment(f) if f.is_edit => "Edit Comment",
            Modal::Comment(_) => "Add Comment",
            Modal::ConfirmDeleteComment { .. } => "Delete Comment",
        };

        let mut action = None;
        let inline = &self.inline;

        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                match &mut *modal {
                    Modal::Exception(f) => {
                        ui.label(egui::RichText::new(&f.item_text).strong());
                        ui.add_space(8.0);
                        ui.label("Reason *");
                        ui.add(egui::TextEdit::multiline(&mut f.draft.reason).desired_rows(3));
                        ui.label("Approver *");
                        ui.text_edit_singleline(&mut f.draft.approver);
                        ui.label("Date");
                        ui.text_edit_singleline(&mut f.draft.date);
                    }
                    Modal::Comment(f) => {
                        ui.label(egui::RichText::new(&f.item_text).strong());
                        ui.add_space(8.0);
                        ui.label("Comment *");
                        ui.add(egui::TextEdit::multiline(&mut f.draft.text).desired_rows(4));
                        ui.label("Author *");
                        ui.text_edit_singleline(&mut f.draft.author);
                    }
                    Modal::ConfirmDeleteComment { item_text, .. } => {
                        ui.label(format!(
                            "Are you sure you want to delete the comment on \"{item_text}\"?"
                        ));
                    }
                }

                ui.add_space(6.0);
                inline.show(ui, debug_ui);
                ui.add_space(6.0);

                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        action = Some(ModalAction::Cancel);
                    }
                    let (label, danger) = match &*modal {
                        Modal::ConfirmDeleteComment { .. } => ("Delete", true),
                        _ => ("Save", false),
                    };
                    let mut btn = egui::Button::new(label);
                    if danger {
                        btn = btn.fill(ui.visuals().error_fg_color);
                    }
                    if ui.add(btn).clicked() {
                        action = Some(ModalAction::Submit);
                    }
                });
            });

        match action {
            None => {}
            Some(ModalAction::Cancel) => {
                command::cancel_modal(state);
                self.inline.clear();
            }
            Some(ModalAction::Submit) => self.submit(state, toast),
        }
    }

    fn submit(&mut self, state: &mut AppState, toast: &mut PanelMsgState) {
        let now = Local::now();
        let res = match state.modal {
            Some(Modal::Exception(_)) => {
                command::submit_exception_modal(state, now).map(|_| "Exception granted")
            }
            Some(Modal::Comment(_)) => {
                command::submit_comment_modal(state, now).map(|_| "Comment saved")
            }
            Some(Modal::ConfirmDeleteComment { .. }) => {
                command::confirm_remove_comment(state).map(|_| "Comment deleted")
            }
            None => return,
        };

        match res {
            Ok(done) => {
                self.inline.clear();
                toast.set_success(done);
            }
            Err(e) => self.inline.from_app_error(&e),
        }
    }
}
