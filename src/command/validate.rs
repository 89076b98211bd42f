// src/command/validate.rs

use crate::{
    command::navigation::Tab,
    error::{AppError, AppResult},
    types::{AppState, FieldGroup},
};

/// A required form value: which map it lives in, and its key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequiredField {
    pub group: FieldGroup,
    pub key: &'static str,
}

const fn req(group: FieldGroup, key: &'static str) -> RequiredField {
    RequiredField { group, key }
}

const OVERVIEW_REQUIRED: [RequiredField; 5] = [
    req(FieldGroup::Metadata, "project_name"),
    req(FieldGroup::Metadata, "dri"),
    req(FieldGroup::Metadata, "target_production_date"),
    req(FieldGroup::Metadata, "service_type"),
    req(FieldGroup::Metadata, "criticality_level"),
];

const EXECUTIVE_REQUIRED: [RequiredField; 4] = [
    req(FieldGroup::Executive, "brief_description"),
    req(FieldGroup::Executive, "business_impact"),
    req(FieldGroup::Executive, "key_risks"),
    req(FieldGroup::Executive, "success_criteria"),
];

/// Required fields gating `navigate_next` away from a tab.
pub fn required_fields(tab: Tab) -> &'static [RequiredField] {
    match tab {
        Tab::Overview => &OVERVIEW_REQUIRED,
        Tab::Executive => &EXECUTIVE_REQUIRED,
        _ => &[],
    }
}

trait ValidationSink {
    fn missing_required(&mut self, field: &RequiredField);

    fn stop_early(&self) -> bool;
}

/// Collects every missing key.
struct CollectSink {
    missing: Vec<&'static str>,
}

impl ValidationSink for CollectSink {
    fn missing_required(&mut self, field: &RequiredField) {
        self.missing.push(field.key);
    }

    fn stop_early(&self) -> bool {
        false
    }
}

/// Only answers "is anything missing".
struct FirstMissingSink {
    hit: bool,
}

impl ValidationSink for FirstMissingSink {
    fn missing_required(&mut self, _field: &RequiredField) {
        self.hit = true;
    }

    fn stop_early(&self) -> bool {
        true
    }
}

fn check_required(state: &AppState, fields: &[RequiredField], sink: &mut impl ValidationSink) {
    for f in fields {
        // whitespace-only counts as empty
        if state.form.field(f.group, f.key).trim().is_empty() {
            sink.missing_required(f);
            if sink.stop_early() {
                return;
            }
        }
    }
}

pub fn missing_required(state: &AppState, tab: Tab) -> Vec<&'static str> {
    let mut sink = CollectSink {
        missing: Vec::new(),
    };
    check_required(state, required_fields(tab), &mut sink);
    sink.missing
}

pub fn is_tab_complete(state: &AppState, tab: Tab) -> bool {
    let mut sink = FirstMissingSink { hit: false };
    check_required(state, required_fields(tab), &mut sink);
    !sink.hit
}

pub fn validate_tab(state: &AppState, tab: Tab) -> AppResult<()> {
    let missing = missing_required(state, tab);
    if missing.is_empty() {
        return Ok(());
    }
    tracing::debug!(tab = tab.id(), ?missing, "tab validation failed");
    Err(AppError::RequiredFieldsMissing { tab, missing })
}

pub fn validate_current_tab(state: &AppState) -> AppResult<()> {
    validate_tab(state, state.nav.current)
}

// ======================================================
// Unit Tests
// ======================================================
