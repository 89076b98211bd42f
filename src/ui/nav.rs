// src/ui/nav.rs

use eframe::egui;
use readiness_wizard_lib::command::{NavButtons, Tab, TAB_ORDER};

/// What the nav should show (derived by ui/mod.rs)
#[derive(Clone, Copy, Debug)]
pub struct NavModel {
    pub current: Tab,
    pub overall_pct: u8,
    pub buttons: NavButtons,
    /// Indexed by `Tab::index()`; true where required fields are still empty.
    pub incomplete: [bool; TAB_ORDER.len()],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIntent {
    GoTo(Tab),
    Previous,
    Next,
}

pub struct LeftNav;

impl LeftNav {
    pub fn new() -> Self {
        Self
    }

    /// Pure view: renders from NavModel and reports the clicked target.
    pub fn ui(&mut self, ctx: &egui::Context, model: NavModel) -> Option<NavIntent> {
        let mut intent = None;

        egui::SidePanel::left("left_nav")
            .resizable(false)
            .min_width(210.0)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                ui.label(egui::RichText::new("Overall progress").strong());
                ui.add(
                    egui::ProgressBar::new(model.overall_pct as f32 / 100.0)
                        .text(format!("{}%", model.overall_pct)),
                );
                ui.separator();

                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        for (i, tab) in TAB_ORDER.iter().enumerate() {
                            let mark = if model.incomplete[i] { " •" } else { "" };
                            let label = format!("{}. {}{mark}", i + 1, tab.title());
                            if ui
                                .selectable_label(model.current == *tab, label)
                                .clicked()
                            {
                                intent = Some(NavIntent::GoTo(*tab));
                            }
                        }
                    });
            });

        egui::TopBottomPanel::bottom("step_nav").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(model.buttons.prev_enabled, egui::Button::new("← Previous"))
                    .on_hover_text("Ctrl+←")
                    .clicked()
                {
                    intent = Some(NavIntent::Previous);
                }

                ui.label(format!(
                    "Step {} of {}",
                    model.current.index() + 1,
                    TAB_ORDER.len()
                ));

                if model.buttons.next_visible
                    && ui
                        .button("Next →")
                        .on_hover_text("Ctrl+→")
                        .clicked()
                {
                    intent = Some(NavIntent::Next);
                }
            });
            ui.add_space(4.0);
        });

        intent
    }
}

/// Ctrl+← / Ctrl+→ step through the wizard.
pub fn keyboard_intent(ctx: &egui::Context) -> Option<NavIntent> {
    ctx.input(|i| {
        if !i.modifiers.ctrl {
            return None;
        }
        if i.key_pressed(egui::Key::ArrowLeft) {
            Some(NavIntent::Previous)
        } else if i.key_pressed(egui::Key::ArrowRight) {
            Some(NavIntent::Next)
        } else {
            None
        }
    })
}
