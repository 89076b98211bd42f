// src/types.rs

use crate::checklist::ChecklistDefinition;
use crate::command::annotations::Modal;
use crate::command::navigation::NavState;
use crate::form::FormData;
use crate::progress::{category_breakdown, CategoryBreakdown};

pub const DOCUMENT_TITLE: &str = "Enterprise Agentic AI Production Readiness Checklist";

pub const METADATA_FIELDS: [&str; 7] = [
    "project_name",
    "version_release",
    "date",
    "dri",
    "reviewers",
    "target_production_date",
    "rollback_deadline",
];

/// Radio-group selections on the overview tab. Stored in the metadata map but
/// neither seeded nor counted by overall progress.
pub const METADATA_SELECTIONS: [&str; 2] = ["service_type", "criticality_level"];

pub const SERVICE_TYPE_CHOICES: [&str; 4] = [
    "Customer-facing",
    "Internal",
    "Platform / Shared service",
    "Batch / Offline",
];

pub const CRITICALITY_CHOICES: [&str; 4] = ["Critical", "High", "Medium", "Low"];

pub const EXECUTIVE_FIELDS: [&str; 4] = [
    "brief_description",
    "business_impact",
    "key_risks",
    "success_criteria",
];

pub const APPENDIX_FIELDS: [&str; 5] = [
    "appendix_a_critical_dependencies",
    "appendix_b_performance_benchmarks",
    "appendix_c_security_review_results",
    "appendix_d_test_results_summary",
    "appendix_e_rollback_procedures",
];

pub const SIGNOFF_FIELDS: [&str; 5] = [
    "engineering_manager",
    "security_team",
    "infrastructure_sre",
    "product_manager",
    "compliance_officer",
];

pub const REVIEW_HISTORY_ROWS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldGroup {
    Metadata,
    Executive,
    Appendices,
    Signoffs,
}

impl FieldGroup {
    pub fn name(self) -> &'static str {
        match self {
            FieldGroup::Metadata => "metadata",
            FieldGroup::Executive => "executive",
            FieldGroup::Appendices => "appendices",
            FieldGroup::Signoffs => "signoffs",
        }
    }

    /// Fields seeded by initialization, in display/export order.
    pub fn seeded_fields(self) -> &'static [&'static str] {
        match self {
            FieldGroup::Metadata => &METADATA_FIELDS,
            FieldGroup::Executive => &EXECUTIVE_FIELDS,
            FieldGroup::Appendices => &APPENDIX_FIELDS,
            FieldGroup::Signoffs => &SIGNOFF_FIELDS,
        }
    }

    pub fn accepts(self, key: &str) -> bool {
        self.seeded_fields().contains(&key)
            || (self == FieldGroup::Metadata && METADATA_SELECTIONS.contains(&key))
    }
}

/// `project_name` -> `Project Name`
pub fn field_label(key: &str) -> String {
    key.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut cs = w.chars();
            match cs.next() {
                Some(first) => first.to_uppercase().chain(cs).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whole-run application state. One writer at a time (the active UI callback).
#[derive(Debug)]
pub struct AppState {
    pub definition: ChecklistDefinition,
    pub form: FormData,
    pub nav: NavState,
    pub modal: Option<Modal>,

    /// Created lazily on the first visit to the export tab.
    pub category_summary: Option<CategoryBreakdown>,

    /// Bumped on every state mutation that affects rendered content.
    pub revision: u64,
}

impl AppState {
    pub fn new(definition: ChecklistDefinition) -> Self {
        let mut form = FormData::default();
        form.initialize(&definition);

        Self {
            definition,
            form,
            nav: NavState::default(),
            modal: None,
            category_summary: None,
            revision: 0,
        }
    }

    /// Swap in a new definition and seed any new item ids. Answers for ids that
    /// are still defined are kept; the rest are dropped.
    pub fn reload_definition(&mut self, definition: ChecklistDefinition) {
        self.definition = definition;
        let dropped = self.form.retain_defined(&self.definition);
        self.form.initialize(&self.definition);
        if self
            .modal
            .as_ref()
            .is_some_and(|m| !self.form.has_item(m.item_id()))
        {
            self.modal = None;
        }
        self.after_mutation();
        tracing::info!(
            items = self.form.checklist.len(),
            dropped,
            "checklist definition reloaded"
        );
    }

    /// Discard all user input and return to the first tab.
    pub fn reset(&mut self) {
        self.form = FormData::default();
        self.form.initialize(&self.definition);
        self.nav = NavState::default();
        self.modal = None;
        self.category_summary = None;
        self.after_mutation();
        tracing::info!("application state reset");
    }

    pub fn after_mutation(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        if self.category_summary.is_some() {
            self.refresh_summary();
        }
    }

    pub fn refresh_summary(&mut self) {
        self.category_summary = Some(category_breakdown(&self.definition, &self.form));
    }
}
