// src/form.rs

use std::collections::{BTreeMap, BTreeSet};

use crate::checklist::ChecklistDefinition;
use crate::error::{AppError, AppResult};
use crate::types::{FieldGroup, REVIEW_HISTORY_ROWS};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExceptionRecord {
    pub reason: String,
    pub approver: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// RFC 3339, UTC
    pub timestamp: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentRecord {
    pub text: String,
    pub author: String,
    /// Locale date at save time (`M/D/YYYY`).
    pub date: String,
    pub timestamp: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReviewRow {
    pub date: String,
    pub reviewer: String,
    pub comments: String,
}

impl ReviewRow {
    pub fn is_blank(&self) -> bool {
        self.date.is_empty() && self.reviewer.is_empty() && self.comments.is_empty()
    }
}

/// Everything the user has entered. Export only reads it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormData {
    pub metadata: BTreeMap<String, String>,
    pub executive: BTreeMap<String, String>,
    pub checklist: BTreeMap<String, bool>,
    pub exceptions: BTreeMap<String, ExceptionRecord>,
    pub comments: BTreeMap<String, CommentRecord>,
    pub appendices: BTreeMap<String, String>,
    pub signoffs: BTreeMap<String, String>,
    pub review_history: Vec<ReviewRow>,
}

impl FormData {
    /// Seed defaults without overwriting anything already present. Safe to call repeatedly.
    pub fn initialize(&mut self, def: &ChecklistDefinition) {
        for group in [
            FieldGroup::Metadata,
            FieldGroup::Executive,
            FieldGroup::Appendices,
            FieldGroup::Signoffs,
        ] {
            let map = self.group_map_mut(group);
            for key in group.seeded_fields() {
                map.entry((*key).to_string()).or_default();
            }
        }

        let before = self.checklist.len();
        for item in def.all_items() {
            self.checklist.entry(item.id.clone()).or_insert(false);
        }

        if self.review_history.is_empty() {
            self.review_history = vec![ReviewRow::default(); REVIEW_HISTORY_ROWS];
        }

        tracing::debug!(
            seeded = self.checklist.len() - before,
            total = self.checklist.len(),
            "checklist items initialized"
        );
    }

    /// Drop checks, exceptions and comments keyed by ids `def` no longer defines.
    /// Returns how many item ids were removed.
    pub fn retain_defined(&mut self, def: &ChecklistDefinition) -> usize {
        let defined: BTreeSet<&str> = def.all_items().map(|i| i.id.as_str()).collect();

        let before = self.checklist.len();
        self.checklist.retain(|id, _| defined.contains(id.as_str()));
        self.exceptions.retain(|id, _| defined.contains(id.as_str()));
        self.comments.retain(|id, _| defined.contains(id.as_str()));
        before - self.checklist.len()
    }

    pub fn group_map(&self, group: FieldGroup) -> &BTreeMap<String, String> {
        match group {
            FieldGroup::Metadata => &self.metadata,
            FieldGroup::Executive => &self.executive,
            FieldGroup::Appendices => &self.appendices,
            FieldGroup::Signoffs => &self.signoffs,
        }
    }

    fn group_map_mut(&mut self, group: FieldGroup) -> &mut BTreeMap<String, String> {
        match group {
            FieldGroup::Metadata => &mut self.metadata,
            FieldGroup::Executive => &mut self.executive,
            FieldGroup::Appendices => &mut self.appendices,
            FieldGroup::Signoffs => &mut self.signoffs,
        }
    }

    pub fn field(&self, group: FieldGroup, key: &str) -> &str {
        self.group_map(group)
            .get(key)
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    /// Editable buffer for a known field; `None` for keys the group does not accept.
    pub fn field_mut(&mut self, group: FieldGroup, key: &str) -> Option<&mut String> {
        if !group.accepts(key) {
            return None;
        }
        Some(self.group_map_mut(group).entry(key.to_string()).or_default())
    }

    pub fn set_field(&mut self, group: FieldGroup, key: &str, value: impl Into<String>) -> AppResult<()> {
        let slot = self.field_mut(group, key).ok_or_else(|| AppError::UnknownField {
            group: group.name(),
            key: key.to_string(),
        })?;
        *slot = value.into();
        Ok(())
    }

    /// Seeded fields in their fixed order, then any extra keys (e.g. selections).
    pub fn ordered_fields(&self, group: FieldGroup) -> Vec<(&str, &str)> {
        let map = self.group_map(group);
        let seeded = group.seeded_fields();

        let mut out: Vec<(&str, &str)> = seeded
            .iter()
            .filter_map(|k| map.get_key_value(*k))
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();

        out.extend(
            map.iter()
                .filter(|(k, _)| !seeded.contains(&k.as_str()))
                .map(|(k, v)| (k.as_str(), v.as_str())),
        );
        out
    }

    pub fn has_item(&self, item_id: &str) -> bool {
        self.checklist.contains_key(item_id)
    }

    pub fn is_checked(&self, item_id: &str) -> bool {
        self.checklist.get(item_id).copied().unwrap_or(false)
    }

    pub fn set_item(&mut self, item_id: &str, checked: bool) -> AppResult<()> {
        let slot = self
            .checklist
            .get_mut(item_id)
            .ok_or_else(|| AppError::UnknownItem(item_id.to_string()))?;
        *slot = checked;
        Ok(())
    }

    /// Flip an item and return its new state.
    pub fn toggle_item(&mut self, item_id: &str) -> AppResult<bool> {
        let slot = self
            .checklist
            .get_mut(item_id)
            .ok_or_else(|| AppError::UnknownItem(item_id.to_string()))?;
        *slot = !*slot;
        Ok(*slot)
    }

    pub fn set_review_row(&mut self, index: usize, row: ReviewRow) -> AppResult<()> {
        let rows = self.review_history.len();
        let slot = self
            .review_history
            .get_mut(index)
            .ok_or(AppError::InvalidReviewRow { index, rows })?;
        *slot = row;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::fallback_definition;
    use crate::types::{METADATA_FIELDS, SIGNOFF_FIELDS};

    fn seeded() -> FormData {
        let mut f = FormData::default();
        f.initialize(&fallback_definition());
        f
    }

    #[test]
    fn initialize_seeds_every_group_and_item() {
        let f = seeded();
        assert_eq!(f.metadata.len(), METADATA_FIELDS.len());
        assert_eq!(f.signoffs.len(), SIGNOFF_FIELDS.len());
        assert_eq!(f.checklist.len(), 8);
        assert!(f.checklist.values().all(|v| !v));
        assert_eq!(f.review_history.len(), REVIEW_HISTORY_ROWS);
        assert!(f.exceptions.is_empty());
        assert!(f.comments.is_empty());
    }

    #[test]
    fn reinitialize_keeps_values() {
        let mut f = seeded();
        f.set_item("arch_001", true).unwrap();
        f.set_field(FieldGroup::Metadata, "project_name", "Atlas").unwrap();

        f.initialize(&fallback_definition());

        assert!(f.is_checked("arch_001"));
        assert_eq!(f.field(FieldGroup::Metadata, "project_name"), "Atlas");
    }

    #[test]
    fn unknown_field_and_item_are_rejected() {
        let mut f = seeded();
        assert!(matches!(
            f.set_field(FieldGroup::Executive, "nope", "x"),
            Err(AppError::UnknownField { .. })
        ));
        assert!(matches!(
            f.toggle_item("missing"),
            Err(AppError::UnknownItem(_))
        ));
    }

    #[test]
    fn toggle_flips_state() {
        let mut f = seeded();
        assert!(f.toggle_item("sec_002").unwrap());
        assert!(!f.toggle_item("sec_002").unwrap());
    }

    #[test]
    fn review_history_is_fixed_size() {
        let mut f = seeded();
        let row = ReviewRow {
            date: "2026-01-01".into(),
            reviewer: "R".into(),
            comments: "ok".into(),
        };
        f.set_review_row(2, row.clone()).unwrap();
        assert_eq!(f.review_history[2], row);

        let err = f.set_review_row(3, row).unwrap_err();
        assert!(matches!(err, AppError::InvalidReviewRow { index: 3, rows: 3 }));
        assert_eq!(f.review_history.len(), REVIEW_HISTORY_ROWS);
    }

    #[test]
    fn ordered_fields_puts_selections_after_seeded_fields() {
        let mut f = seeded();
        f.set_field(FieldGroup::Metadata, "service_type", "Internal").unwrap();
        let keys: Vec<&str> = f
            .ordered_fields(FieldGroup::Metadata)
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys[0], "project_name");
        assert_eq!(keys[6], "rollback_deadline");
        assert_eq!(keys[7], "service_type");
    }
}
