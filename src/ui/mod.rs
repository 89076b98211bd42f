// src/ui/mod.rs

pub mod message;
pub mod modal;
pub mod nav;
pub mod panel_checklist;
pub mod panel_export;
pub mod panel_overview;
pub mod panel_signoff;
pub mod panel_text_fields;
pub mod widgets;

use std::time::Duration;

use eframe::egui;

use message::PanelMsgState;
use modal::ModalHost;
use nav::{keyboard_intent, LeftNav, NavIntent, NavModel};
use panel_checklist::ChecklistPanel;
use panel_export::{ExportPanel, ExportPanelAction};
use panel_overview::OverviewPanel;
use panel_signoff::SignoffPanel;
use panel_text_fields::TextFieldsPanel;
use readiness_wizard_lib::checklist::{load_checklist_path, LoadError};
use readiness_wizard_lib::command::{self, Tab, TAB_ORDER};
use readiness_wizard_lib::context::AppCtx;
use readiness_wizard_lib::error::AppError;
use readiness_wizard_lib::export::ExportCollaborators;
use readiness_wizard_lib::progress::overall_progress;
use readiness_wizard_lib::types::AppState;

const TOAST_TTL: Duration = Duration::from_secs(4);

pub struct UiApp {
    state: AppState,
    ctx: AppCtx,
    collaborators: ExportCollaborators,

    nav: LeftNav,
    overview: OverviewPanel,
    executive: TextFieldsPanel,
    appendices: TextFieldsPanel,
    checklist: ChecklistPanel,
    signoff: SignoffPanel,
    export: ExportPanel,
    modals: ModalHost,

    /// Short-lived feedback (validation, saves).
    toast: PanelMsgState,
    /// Stays up for the whole run.
    load_notice: PanelMsgState,
    prev_tab: Tab,
}

impl UiApp {
    pub fn new(
        state: AppState,
        ctx: AppCtx,
        collaborators: ExportCollaborators,
        load_err: Option<LoadError>,
    ) -> Self {
        let mut load_notice = PanelMsgState::default();
        if let Some(e) = load_err {
            load_notice.from_app_error(&AppError::from(e));
        }

        tracing::debug!(?collaborators, "ui ready");

        let prev_tab = state.nav.current;
        Self {
            state,
            ctx,
            collaborators,
            nav: LeftNav::new(),
            overview: OverviewPanel::new(),
            executive: TextFieldsPanel::executive(),
            appendices: TextFieldsPanel::appendices(),
            checklist: ChecklistPanel::new(),
            signoff: SignoffPanel::new(),
            export: ExportPanel::new(),
            modals: ModalHost::new(),
            toast: PanelMsgState::default(),
            load_notice,
            prev_tab,
        }
    }

    fn derive_nav_model(&self) -> NavModel {
        NavModel {
            current: self.state.nav.current,
            overall_pct: overall_progress(&self.state.definition, &self.state.form),
            buttons: command::nav_buttons(&self.state),
            incomplete: TAB_ORDER.map(|t| !command::is_tab_complete(&self.state, t)),
        }
    }

    fn apply_nav(&mut self, intent: NavIntent) {
        let res = match intent {
            NavIntent::GoTo(tab) => {
                command::go_to_tab(&mut self.state, tab);
                Ok(())
            }
            NavIntent::Previous => {
                command::navigate_previous(&mut self.state);
                Ok(())
            }
            NavIntent::Next => command::navigate_next(&mut self.state),
        };

        if let Err(e) = res {
            self.toast.from_app_error(&e);
        }
    }

    fn apply_export_action(&mut self, action: ExportPanelAction) {
        match action {
            ExportPanelAction::ReloadChecklist => {
                match load_checklist_path(&self.ctx.checklist_path) {
                    Ok(def) => {
                        self.state.reload_definition(def);
                        self.load_notice.clear();
                        self.toast.set_success("Checklist reloaded.");
                    }
                    Err(e) => {
                        // current definition stays in place
                        tracing::warn!(error = %e, "checklist reload failed");
                        self.toast.set_error("Could not reload the checklist file.");
                    }
                }
            }
            ExportPanelAction::StartOver => {
                self.state.reset();
                self.toast.set_success("All answers cleared.");
            }
        }
    }

    fn central_ui(&mut self, ui: &mut egui::Ui) {
        let tab = self.state.nav.current;
        let debug_ui = self.ctx.debug_ui;

        self.load_notice.show(ui, debug_ui);
        self.toast.show(ui, debug_ui);
        if self.load_notice.is_set() || self.toast.is_set() {
            ui.add_space(8.0);
        }

        egui::ScrollArea::vertical()
            .id_salt(tab.id())
            .auto_shrink([false; 2])
            .show(ui, |ui| match tab {
                Tab::Overview => self.overview.ui(ui, &mut self.state),
                Tab::Executive => self.executive.ui(ui, &mut self.state),
                Tab::Appendices => self.appendices.ui(ui, &mut self.state),
                Tab::Export => {
                    let action = self.export.ui(
                        ui,
                        &self.state,
                        &self.ctx,
                        &self.collaborators,
                        &mut self.toast,
                    );
                    if let Some(action) = action {
                        self.apply_export_action(action);
                    }
                }
                Tab::Validation => {
                    self.checklist
                        .ui(ui, &mut self.state, tab, &mut self.toast);
                    self.signoff.ui(ui, &mut self.state, &mut self.toast);
                }
                _ => self
                    .checklist
                    .ui(ui, &mut self.state, tab, &mut self.toast),
            });
    }
}

impl eframe::App for UiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Deferred from the tab switch so the table is built on the export tab's first frame.
        if command::take_pending_summary_refresh(&mut self.state) {
            self.state.refresh_summary();
        }

        if self.state.modal.is_none() {
            if let Some(intent) = keyboard_intent(ctx) {
                self.apply_nav(intent);
            }
        }

        let nav_model = self.derive_nav_model();
        if let Some(intent) = self.nav.ui(ctx, nav_model) {
            self.apply_nav(intent);
        }

        if self.state.nav.current != self.prev_tab {
            self.toast.clear();
            self.prev_tab = self.state.nav.current;
            // export tab needs its summary on this frame
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| self.central_ui(ui));

        self.modals
            .ui(ctx, &mut self.state, &mut self.toast, self.ctx.debug_ui);

        self.toast.expire_after(TOAST_TTL);
        if let Some(left) = self.toast.tick() {
            ctx.request_repaint_after(left);
        }
    }
}
