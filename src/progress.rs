// src/progress.rs

//! Completion aggregation.
//!
//! Two walks with different scopes are kept deliberately separate:
//! [`overall_progress`] counts form fields plus *direct* section items only,
//! while [`category_breakdown`] counts every item including subsection items.

use std::collections::BTreeMap;

use crate::checklist::{Category, ChecklistDefinition};
use crate::form::FormData;
use crate::types::{FieldGroup, APPENDIX_FIELDS, EXECUTIVE_FIELDS, METADATA_FIELDS};

/// Rounded percentage, half-up, clamped to 0..=100. `total == 0` yields 0.
pub fn percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = ((completed as f64 / total as f64) * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OverallCounts {
    pub completed: usize,
    pub total: usize,
}

impl OverallCounts {
    pub fn percent(&self) -> u8 {
        percent(self.completed, self.total)
    }
}

pub fn overall_counts(def: &ChecklistDefinition, form: &FormData) -> OverallCounts {
    let filled = |group: FieldGroup, keys: &[&str]| {
        keys.iter()
            .filter(|k| !form.field(group, k).is_empty())
            .count()
    };

    let mut completed = filled(FieldGroup::Metadata, &METADATA_FIELDS)
        + filled(FieldGroup::Executive, &EXECUTIVE_FIELDS)
        + filled(FieldGroup::Appendices, &APPENDIX_FIELDS);
    let mut total = METADATA_FIELDS.len() + EXECUTIVE_FIELDS.len() + APPENDIX_FIELDS.len();

    for item in def.top_level_items() {
        total += 1;
        if form.is_checked(&item.id) {
            completed += 1;
        }
    }

    OverallCounts { completed, total }
}

pub fn overall_progress(def: &ChecklistDefinition, form: &FormData) -> u8 {
    overall_counts(def, form).percent()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CategoryStats {
    pub total: usize,
    pub completed: usize,
    pub exceptions: usize,
    pub comments: usize,
}

impl CategoryStats {
    pub fn completion_pct(&self) -> u8 {
        percent(self.completed, self.total)
    }
}

/// Per-category counts. Always holds all four categories.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryBreakdown {
    stats: BTreeMap<Category, CategoryStats>,
}

impl CategoryBreakdown {
    fn empty() -> Self {
        Self {
            stats: Category::ALL
                .iter()
                .map(|c| (*c, CategoryStats::default()))
                .collect(),
        }
    }

    pub fn get(&self, category: Category) -> CategoryStats {
        self.stats.get(&category).copied().unwrap_or_default()
    }

    /// Mandatory, optional, future, other.
    pub fn iter(&self) -> impl Iterator<Item = (Category, CategoryStats)> + '_ {
        self.stats.iter().map(|(c, s)| (*c, *s))
    }

    pub fn total_items(&self) -> usize {
        self.stats.values().map(|s| s.total).sum()
    }
}

pub fn category_breakdown(def: &ChecklistDefinition, form: &FormData) -> CategoryBreakdown {
    let mut out = CategoryBreakdown::empty();

    for item in def.all_items() {
        let s = out.stats.entry(item.category).or_default();
        s.total += 1;
        if form.is_checked(&item.id) {
            s.completed += 1;
        }
        if form.exceptions.contains_key(&item.id) {
            s.exceptions += 1;
        }
        if form.comments.contains_key(&item.id) {
            s.comments += 1;
        }
    }

    out
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryStatus {
    Complete,
    Good,
    InProgress,
    NeedsAttention,
    LowPriority,
}

impl CategoryStatus {
    pub fn label(self) -> &'static str {
        match self {
            CategoryStatus::Complete => "Complete",
            CategoryStatus::Good => "Good",
            CategoryStatus::InProgress => "In Progress",
            CategoryStatus::NeedsAttention => "Needs Attention",
            CategoryStatus::LowPriority => "Low Priority",
        }
    }
}

/// Mandatory items are held to stricter thresholds than everything else.
pub fn classify(category: Category, pct: u8) -> CategoryStatus {
    let (good, in_progress, floor) = match category {
        Category::Mandatory => (80, 50, CategoryStatus::NeedsAttention),
        _ => (60, 30, CategoryStatus::LowPriority),
    };

    if pct >= 100 {
        CategoryStatus::Complete
    } else if pct >= good {
        CategoryStatus::Good
    } else if pct >= in_progress {
        CategoryStatus::InProgress
    } else {
        floor
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryRow {
    pub category: Category,
    pub label: &'static str,
    pub total: usize,
    pub completed: usize,
    pub completion_pct: u8,
    pub exceptions: usize,
    pub comments: usize,
    pub status: CategoryStatus,
}

/// Rows for the "Completion Summary by Category" table.
pub fn summary_rows(breakdown: &CategoryBreakdown) -> Vec<SummaryRow> {
    breakdown
        .iter()
        .map(|(category, s)| {
            let pct = s.completion_pct();
            SummaryRow {
                category,
                label: category.label(),
                total: s.total,
                completed: s.completed,
                completion_pct: pct,
                exceptions: s.exceptions,
                comments: s.comments,
                status: classify(category, pct),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::parse_checklist_str;

    fn def_with_subsection() -> ChecklistDefinition {
        parse_checklist_str(
            r#"{ "sections": [ { "id": "s", "title": "S",
                "items": [
                    { "id": "a", "text": "A", "category": "mandatory" },
                    { "id": "b", "text": "B", "category": "optional" }
                ],
                "subsections": [ { "title": "Sub", "items": [
                    { "id": "c", "text": "C", "category": "mandatory" },
                    { "id": "d", "text": "D" }
                ] } ] } ] }"#,
        )
        .expect("parse")
    }

    fn form_for(def: &ChecklistDefinition) -> FormData {
        let mut f = FormData::default();
        f.initialize(def);
        f
    }

    #[test]
    fn percent_rounds_half_up_and_handles_zero_total() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(1, 2), 50);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(1, 8), 13);
        assert_eq!(percent(5, 5), 100);
    }

    #[test]
    fn overall_counts_ignore_subsection_items() {
        let def = def_with_subsection();
        let mut form = form_for(&def);

        let base = overall_counts(&def, &form);
        assert_eq!(base.total, 16 + 2);
        assert_eq!(base.completed, 0);

        form.set_item("c", true).unwrap();
        assert_eq!(overall_counts(&def, &form).completed, 0);

        form.set_item("b", true).unwrap();
        assert_eq!(overall_counts(&def, &form).completed, 1);
    }

    #[test]
    fn overall_counts_fields_by_presence() {
        let def = def_with_subsection();
        let mut form = form_for(&def);
        form.set_field(FieldGroup::Metadata, "project_name", "Atlas").unwrap();
        form.set_field(FieldGroup::Appendices, "appendix_e_rollback_procedures", "x").unwrap();
        // selections and sign-offs are not tracked
        form.set_field(FieldGroup::Metadata, "service_type", "Internal").unwrap();
        form.set_field(FieldGroup::Signoffs, "security_team", "Eve").unwrap();

        assert_eq!(overall_counts(&def, &form).completed, 2);
    }

    #[test]
    fn breakdown_includes_subsection_items() {
        let def = def_with_subsection();
        let mut form = form_for(&def);
        form.set_item("c", true).unwrap();

        let b = category_breakdown(&def, &form);
        assert_eq!(b.get(Category::Mandatory).total, 2);
        assert_eq!(b.get(Category::Mandatory).completed, 1);
        assert_eq!(b.get(Category::Other).total, 1);
        assert_eq!(b.get(Category::Future).total, 0);
        assert_eq!(b.total_items(), def.item_count());
    }

    #[test]
    fn classify_thresholds_differ_for_mandatory() {
        assert_eq!(classify(Category::Mandatory, 100), CategoryStatus::Complete);
        assert_eq!(classify(Category::Mandatory, 80), CategoryStatus::Good);
        assert_eq!(classify(Category::Mandatory, 79), CategoryStatus::InProgress);
        assert_eq!(classify(Category::Mandatory, 50), CategoryStatus::InProgress);
        assert_eq!(classify(Category::Mandatory, 49), CategoryStatus::NeedsAttention);

        assert_eq!(classify(Category::Optional, 60), CategoryStatus::Good);
        assert_eq!(classify(Category::Future, 30), CategoryStatus::InProgress);
        assert_eq!(classify(Category::Other, 29), CategoryStatus::LowPriority);
        assert_eq!(classify(Category::Other, 0), CategoryStatus::LowPriority);
    }

    #[test]
    fn summary_rows_are_in_category_order() {
        let def = def_with_subsection();
        let form = form_for(&def);
        let rows = summary_rows(&category_breakdown(&def, &form));
        let labels: Vec<&str> = rows.iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["Mandatory", "Optional", "Future", "Other"]);
        assert_eq!(rows[0].status, CategoryStatus::NeedsAttention);
        assert_eq!(rows[2].status, CategoryStatus::LowPriority);
    }
}
