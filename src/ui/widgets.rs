// src/ui/widgets.rs

use eframe::egui;
use readiness_wizard_lib::{
    checklist::CategoryTone,
    progress::CategoryStatus,
    types::{field_label, AppState, FieldGroup},
};

pub fn tone_color(tone: CategoryTone) -> egui::Color32 {
    match tone {
        CategoryTone::Red => egui::Color32::from_rgb(229, 72, 77),
        CategoryTone::Green => egui::Color32::from_rgb(46, 170, 90),
        CategoryTone::Blue => egui::Color32::from_rgb(60, 130, 230),
        CategoryTone::Gray => egui::Color32::from_rgb(140, 140, 140),
    }
}

pub fn status_color(status: CategoryStatus) -> egui::Color32 {
    match status {
        CategoryStatus::Complete => egui::Color32::from_rgb(46, 170, 90),
        CategoryStatus::Good => egui::Color32::from_rgb(120, 190, 80),
        CategoryStatus::InProgress => egui::Color32::from_rgb(255, 170, 0),
        CategoryStatus::NeedsAttention => egui::Color32::from_rgb(229, 72, 77),
        CategoryStatus::LowPriority => egui::Color32::from_rgb(140, 140, 140),
    }
}

/// Small coloured pill, e.g. a category label.
pub fn chip(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    let fill = egui::Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 40);
    egui::Frame::NONE
        .fill(fill)
        .stroke(egui::Stroke::new(1.0, color))
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(6, 1))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).small().color(color));
        });
}

pub fn ui_notice(ui: &mut egui::Ui, body: &str) {
    let accent = egui::Color32::from_rgb(255, 215, 90);

    let stroke = egui::Stroke::new(1.5, accent);
    let fill = egui::Color32::from_rgba_unmultiplied(accent.r(), accent.g(), accent.b(), 48);

    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12))
        .stroke(stroke)
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new("Notice")
                    .size(18.0)
                    .strong()
                    .color(accent),
            );
            ui.add_space(4.0);
            ui.label(body);
        });
}

/// Labelled text inputs for every seeded field of `group`, in order.
/// Returns whether any value changed this frame.
pub fn field_inputs(
    ui: &mut egui::Ui,
    state: &mut AppState,
    group: FieldGroup,
    multiline: bool,
    required: &[&str],
) -> bool {
    let mut changed = false;

    for key in group.seeded_fields() {
        let label = if required.contains(key) {
            format!("{} *", field_label(key))
        } else {
            field_label(key)
        };
        ui.label(label);

        let Some(buf) = state.form.field_mut(group, key) else {
            continue;
        };
        let edit = if multiline {
            egui::TextEdit::multiline(buf).desired_rows(3)
        } else {
            egui::TextEdit::singleline(buf)
        };
        changed |= ui
            .add(edit.desired_width(f32::INFINITY))
            .changed();

        ui.add_space(8.0);
    }

    changed
}
