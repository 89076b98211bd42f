// src/command/navigation.rs

use crate::{
    command::validate::validate_current_tab,
    error::{AppError, AppResult},
    types::AppState,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tab {
    Overview,
    Executive,
    Architecture,
    Security,
    Performance,
    Monitoring,
    Logging,
    Testing,
    Deployment,
    Incident,
    Documentation,
    Compliance,
    Business,
    Validation,
    Appendices,
    Export,
}

/// Fixed wizard order.
pub const TAB_ORDER: [Tab; 16] = [
    Tab::Overview,
    Tab::Executive,
    Tab::Architecture,
    Tab::Security,
    Tab::Performance,
    Tab::Monitoring,
    Tab::Logging,
    Tab::Testing,
    Tab::Deployment,
    Tab::Incident,
    Tab::Documentation,
    Tab::Compliance,
    Tab::Business,
    Tab::Validation,
    Tab::Appendices,
    Tab::Export,
];

/// Checklist section id -> the tab that renders it.
pub const SECTION_TABS: [(&str, Tab); 12] = [
    ("1-system-architecture-and-design", Tab::Architecture),
    ("2-security-and-compliance", Tab::Security),
    ("3-performance-and-scalability", Tab::Performance),
    ("4-monitoring-and-observability", Tab::Monitoring),
    ("5-logging-and-tracing", Tab::Logging),
    ("6-testing-and-quality-assurance", Tab::Testing),
    ("7-deployment-and-rollback", Tab::Deployment),
    ("8-incident-response-and-recovery", Tab::Incident),
    ("9-documentation-and-knowledge-transfer", Tab::Documentation),
    ("10-compliance-and-governance", Tab::Compliance),
    ("11-business-readiness", Tab::Business),
    ("12-final-validation", Tab::Validation),
];

impl Tab {
    pub fn id(self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Executive => "executive",
            Tab::Architecture => "architecture",
            Tab::Security => "security",
            Tab::Performance => "performance",
            Tab::Monitoring => "monitoring",
            Tab::Logging => "logging",
            Tab::Testing => "testing",
            Tab::Deployment => "deployment",
            Tab::Incident => "incident",
            Tab::Documentation => "documentation",
            Tab::Compliance => "compliance",
            Tab::Business => "business",
            Tab::Validation => "validation",
            Tab::Appendices => "appendices",
            Tab::Export => "export",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Overview => "Overview & Metadata",
            Tab::Executive => "Executive Summary",
            Tab::Architecture => "System Architecture",
            Tab::Security => "Security & Compliance",
            Tab::Performance => "Performance & Scalability",
            Tab::Monitoring => "Monitoring & Observability",
            Tab::Logging => "Logging & Tracing",
            Tab::Testing => "Testing & QA",
            Tab::Deployment => "Deployment & Rollback",
            Tab::Incident => "Incident Response",
            Tab::Documentation => "Documentation",
            Tab::Compliance => "Compliance & Governance",
            Tab::Business => "Business Readiness",
            Tab::Validation => "Final Validation",
            Tab::Appendices => "Appendices",
            Tab::Export => "Review & Export",
        }
    }

    pub fn from_id(id: &str) -> Option<Tab> {
        TAB_ORDER.iter().copied().find(|t| t.id() == id)
    }

    pub fn index(self) -> usize {
        TAB_ORDER.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// The checklist section rendered on this tab, if any.
    pub fn section_id(self) -> Option<&'static str> {
        SECTION_TABS
            .iter()
            .find(|(_, t)| *t == self)
            .map(|(sid, _)| *sid)
    }

    pub fn is_checklist(self) -> bool {
        self.section_id().is_some()
    }
}

pub fn tab_for_section(section_id: &str) -> Option<Tab> {
    SECTION_TABS
        .iter()
        .find(|(sid, _)| *sid == section_id)
        .map(|(_, t)| *t)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavState {
    pub current: Tab,

    /// Set when the export tab is entered; the UI recomputes the summary table.
    pub summary_refresh_pending: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            current: Tab::Overview,
            summary_refresh_pending: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavButtons {
    pub prev_enabled: bool,
    /// Hidden on the last tab.
    pub next_visible: bool,
}

pub fn nav_buttons(state: &AppState) -> NavButtons {
    let idx = state.nav.current.index();
    NavButtons {
        prev_enabled: idx > 0,
        next_visible: idx + 1 < TAB_ORDER.len(),
    }
}

fn enter(state: &mut AppState, tab: Tab) {
    if state.nav.current == tab {
        return;
    }
    tracing::debug!(from = state.nav.current.id(), to = tab.id(), "tab change");
    state.nav.current = tab;
    if tab == Tab::Export {
        state.nav.summary_refresh_pending = true;
    }
}

/// Move forward one tab if the current tab validates. At the last tab this is a no-op.
pub fn navigate_next(state: &mut AppState) -> AppResult<()> {
    let idx = state.nav.current.index();
    let Some(next) = TAB_ORDER.get(idx + 1).copied() else {
        return Ok(());
    };

    validate_current_tab(state)?;
    enter(state, next);
    Ok(())
}

/// Move back one tab without validation. At the first tab this is a no-op.
pub fn navigate_previous(state: &mut AppState) {
    let idx = state.nav.current.index();
    if idx == 0 {
        return;
    }
    enter(state, TAB_ORDER[idx - 1]);
}

/// Direct tab selection. Not validation-gated.
pub fn go_to(state: &mut AppState, tab_id: &str) -> AppResult<()> {
    let tab = Tab::from_id(tab_id).ok_or_else(|| AppError::UnknownTab(tab_id.to_string()))?;
    go_to_tab(state, tab);
    Ok(())
}

pub fn go_to_tab(state: &mut AppState, tab: Tab) {
    enter(state, tab);
}

/// Returns whether the summary needs recomputing and clears the flag.
pub fn take_pending_summary_refresh(state: &mut AppState) -> bool {
    std::mem::take(&mut state.nav.summary_refresh_pending)
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::fallback_definition;
    use crate::types::FieldGroup;

    fn mk_state() -> AppState {
        AppState::new(fallback_definition())
    }

    fn fill_overview(state: &mut AppState) {
        for (k, v) in [
            ("project_name", "Atlas"),
            ("dri", "Dana"),
            ("target_production_date", "2026-12-01"),
            ("service_type", "Internal"),
            ("criticality_level", "High"),
        ] {
            state.form.set_field(FieldGroup::Metadata, k, v).unwrap();
        }
    }

    #[test]
    fn tab_ids_round_trip_and_are_unique() {
        for (i, t) in TAB_ORDER.iter().enumerate() {
            assert_eq!(Tab::from_id(t.id()), Some(*t));
            assert_eq!(t.index(), i);
        }
        assert_eq!(Tab::from_id("nope"), None);
    }

    #[test]
    fn every_section_tab_is_a_checklist_tab() {
        for (sid, tab) in SECTION_TABS {
            assert_eq!(tab.section_id(), Some(sid));
            assert_eq!(tab_for_section(sid), Some(tab));
        }
        assert!(!Tab::Overview.is_checklist());
        assert!(!Tab::Export.is_checklist());
        assert!(Tab::Validation.is_checklist());
    }

    #[test]
    fn next_is_refused_when_overview_incomplete() {
        let mut state = mk_state();
        let err = navigate_next(&mut state).unwrap_err();
        assert!(matches!(err, AppError::RequiredFieldsMissing { tab: Tab::Overview, .. }));
        assert_eq!(state.nav.current, Tab::Overview);
    }

    #[test]
    fn next_advances_once_overview_complete() {
        let mut state = mk_state();
        fill_overview(&mut state);
        navigate_next(&mut state).unwrap();
        assert_eq!(state.nav.current, Tab::Executive);
    }

    #[test]
    fn previous_at_first_tab_is_noop() {
        let mut state = mk_state();
        navigate_previous(&mut state);
        assert_eq!(state.nav.current, Tab::Overview);
        assert!(!nav_buttons(&state).prev_enabled);
    }

    #[test]
    fn next_at_last_tab_is_noop() {
        let mut state = mk_state();
        go_to_tab(&mut state, Tab::Export);
        navigate_next(&mut state).unwrap();
        assert_eq!(state.nav.current, Tab::Export);
        assert!(!nav_buttons(&state).next_visible);
    }

    #[test]
    fn go_to_skips_validation_and_rejects_unknown_ids() {
        let mut state = mk_state();
        go_to(&mut state, "security").unwrap();
        assert_eq!(state.nav.current, Tab::Security);

        let err = go_to(&mut state, "bogus").unwrap_err();
        assert!(matches!(err, AppError::UnknownTab(_)));
        assert_eq!(state.nav.current, Tab::Security);
    }

    #[test]
    fn entering_export_requests_summary_refresh_once() {
        let mut state = mk_state();
        go_to(&mut state, "export").unwrap();
        assert!(take_pending_summary_refresh(&mut state));
        assert!(!take_pending_summary_refresh(&mut state));
    }

    #[test]
    fn checklist_tabs_do_not_gate_next() {
        let mut state = mk_state();
        go_to_tab(&mut state, Tab::Architecture);
        navigate_next(&mut state).unwrap();
        assert_eq!(state.nav.current, Tab::Security);
    }
}
