// src/ui/panel_checklist.rs

use chrono::Local;
use eframe::egui;
use readiness_wizard_lib::{
    command::{self, Tab},
    error::AppResult,
    types::AppState,
    view::{render_tab, GroupView, ItemView},
};

use super::{message::PanelMsgState, widgets};

/// What the user asked for while the view tree was drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
enum ItemIntent {
    SetChecked(String, bool),
    RequestException(String),
    RemoveException(String),
    EditComment(String),
    DeleteComment(String),
}

pub struct ChecklistPanel;

impl ChecklistPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, state: &mut AppState, tab: Tab, msg: &mut PanelMsgState) {
        let Some(view) = render_tab(&state.definition, &state.form, tab) else {
            return;
        };

        ui.heading(tab.title());
        if let Some(title) = view.section_title.as_deref() {
            if title != tab.title() {
                ui.weak(title);
            }
        }
        ui.separator();

        if let Some(p) = view.placeholder {
            widgets::ui_notice(ui, p);
            return;
        }

        let mut intents = Vec::new();
        for group in &view.groups {
            group_ui(ui, group, &mut intents);
            ui.add_space(10.0);
        }

        for intent in intents {
            if let Err(e) = apply(state, intent) {
                msg.from_app_error(&e);
            }
        }
    }
}

fn apply(state: &mut AppState, intent: ItemIntent) -> AppResult<()> {
    match intent {
        ItemIntent::SetChecked(id, checked) => command::set_item_checked(state, &id, checked),
        ItemIntent::RequestException(id) => command::open_exception_modal(state, &id, Local::now()),
        ItemIntent::RemoveException(id) => {
            command::remove_exception(state, &id);
            Ok(())
        }
        ItemIntent::EditComment(id) => command::open_comment_modal(state, &id),
        ItemIntent::DeleteComment(id) => command::request_remove_comment(state, &id),
    }
}

fn group_ui(ui: &mut egui::Ui, group: &GroupView, intents: &mut Vec<ItemIntent>) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(&group.title).size(16.0).strong());
            if let Some(d) = group.description.as_deref() {
                ui.weak(d);
            }
            ui.add_space(6.0);

            if let Some(p) = group.placeholder {
                ui.weak(p);
                return;
            }

            for item in &group.items {
                item_ui(ui, item, intents);
                ui.separator();
            }
        });
}

fn item_ui(ui: &mut egui::Ui, item: &ItemView, intents: &mut Vec<ItemIntent>) {
    ui.horizontal_wrapped(|ui| {
        let mut checked = item.checked;
        let text = if checked {
            egui::RichText::new(&item.text).strong()
        } else {
            egui::RichText::new(&item.text)
        };
        if ui.checkbox(&mut checked, text).changed() {
            intents.push(ItemIntent::SetChecked(item.id.clone(), checked));
        }

        widgets::chip(ui, item.category_label, widgets::tone_color(item.tone));

        if item.actions.request_exception && ui.small_button("Exception").clicked() {
            intents.push(ItemIntent::RequestException(item.id.clone()));
        }
        if item.actions.remove_exception {
            widgets::chip(ui, "Exception Granted", egui::Color32::from_rgb(255, 170, 0));
            if ui.small_button("Remove").clicked() {
                intents.push(ItemIntent::RemoveException(item.id.clone()));
            }
        }
        if ui.small_button(item.actions.comment_label).clicked() {
            intents.push(ItemIntent::EditComment(item.id.clone()));
        }
    });

    if let Some(d) = item.description.as_deref() {
        ui.weak(d);
    }

    if let Some(c) = &item.comment {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Comment:").strong());
            if item.actions.delete_comment
                && ui
                    .small_button("×")
                    .on_hover_text("Delete comment")
                    .clicked()
            {
                intents.push(ItemIntent::DeleteComment(item.id.clone()));
            }
        });
        ui.label(&c.text);
        ui.weak(format!("By: {} | {}", c.author, c.date));
    }

    if let Some(e) = &item.exception {
        ui.label(format!("Exception Reason: {}", e.reason));
        ui.label(format!("Approved by: {}", e.approver));
        ui.label(format!("Date: {}", e.date));
    }
}
