// src/checklist/store.rs

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use thiserror::Error;

use super::fallback::fallback_definition;
use super::model::{ChecklistDefinition, Item};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("checklist read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("checklist parse error: {0}")]
    Parse(#[from] json5::Error),
    #[error("checklist validation error: {0}")]
    Validation(String),
}

/// Parse a checklist resource. Plain JSON is accepted; the JSON5 reader also
/// tolerates comments and trailing commas.
pub fn parse_checklist_str(s: &str) -> Result<ChecklistDefinition, LoadError> {
    let mut def: ChecklistDefinition = json5::from_str(s)?;
    validate_definition(&def)?;
    drop_duplicate_items(&mut def);
    Ok(def)
}

pub fn load_checklist_path(path: impl AsRef<Path>) -> Result<ChecklistDefinition, LoadError> {
    let s = fs::read_to_string(path)?;
    parse_checklist_str(&s)
}

/// Load the checklist, substituting the embedded definition on any failure.
/// The error (if any) is handed back so the caller can notify the user.
pub fn load_or_fallback(path: impl AsRef<Path>) -> (ChecklistDefinition, Option<LoadError>) {
    let path = path.as_ref();
    match load_checklist_path(path) {
        Ok(def) => {
            tracing::info!(
                path = %path.display(),
                sections = def.sections.len(),
                items = def.item_count(),
                "checklist loaded"
            );
            (def, None)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "checklist load failed; using fallback");
            (fallback_definition(), Some(e))
        }
    }
}

/// Section and item ids must be non-empty.
pub fn validate_definition(def: &ChecklistDefinition) -> Result<(), LoadError> {
    for (i, s) in def.sections.iter().enumerate() {
        if s.id.trim().is_empty() {
            return Err(LoadError::Validation(format!(
                "sections[{i}].id must be non-empty"
            )));
        }

        let direct = s.items.iter().enumerate().map(|(k, it)| (format!("sections[{i}].items[{k}]"), it));
        let nested = s.subsections.iter().enumerate().flat_map(move |(j, sub)| {
            sub.items
                .iter()
                .enumerate()
                .map(move |(k, it)| (format!("sections[{i}].subsections[{j}].items[{k}]"), it))
        });

        for (at, it) in direct.chain(nested) {
            if it.id.trim().is_empty() {
                return Err(LoadError::Validation(format!("{at}.id must be non-empty")));
            }
        }
    }

    Ok(())
}

/// Item ids key the form state. A repeated id keeps its first occurrence (in
/// `all_items` order) and later ones are dropped. Returns how many were dropped.
pub fn drop_duplicate_items(def: &mut ChecklistDefinition) -> usize {
    let mut seen = BTreeSet::new();
    let mut dropped = 0usize;

    let mut keep = |items: &mut Vec<Item>, section: &str| {
        items.retain(|it| {
            if seen.insert(it.id.clone()) {
                return true;
            }
            tracing::warn!(section, item_id = %it.id, "duplicate checklist item id; later entry ignored");
            dropped += 1;
            false
        });
    };

    for s in &mut def.sections {
        keep(&mut s.items, &s.id);
        for sub in &mut s.subsections {
            keep(&mut sub.items, &s.id);
        }
    }

    dropped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::model::Category;

    #[test]
    fn parses_sections_with_items_and_subsections() {
        let s = r#"
        {
          "sections": [
            {
              "id": "1-system-architecture-and-design",
              "title": "System Architecture",
              "items": [ { "id": "a1", "text": "Direct", "category": "optional" } ],
              "subsections": [
                { "title": "Design", "items": [
                    { "id": "a2", "text": "Nested", "description": "d", "category": "mandatory" },
                    { "id": "a3", "text": "No category" }
                ] }
              ]
            }
          ]
        }
        "#;

        let def = parse_checklist_str(s).expect("parse ok");
        assert_eq!(def.sections.len(), 1);
        assert_eq!(def.sections[0].items[0].category, Category::Optional);
        let nested = &def.sections[0].subsections[0].items;
        assert_eq!(nested[0].category, Category::Mandatory);
        assert_eq!(nested[0].description.as_deref(), Some("d"));
        assert_eq!(nested[1].category, Category::Other);
    }

    #[test]
    fn unknown_category_is_other() {
        let s = r#"{ "sections": [ { "id": "s", "title": "S",
            "items": [ { "id": "x", "text": "X", "category": "someday" } ] } ] }"#;
        let def = parse_checklist_str(s).expect("parse ok");
        assert_eq!(def.sections[0].items[0].category, Category::Other);
    }

    #[test]
    fn rejects_malformed_payload() {
        let err = parse_checklist_str("{ sections: [ ").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn duplicate_ids_keep_first_occurrence() {
        let s = r#"{ "sections": [ { "id": "s", "title": "S",
            "items": [ { "id": "dup", "text": "one" }, { "id": "x", "text": "X" } ],
            "subsections": [ { "title": "T", "items": [ { "id": "dup", "text": "two" } ] } ] },
            { "id": "t", "title": "T2", "items": [ { "id": "dup", "text": "three" } ] } ] }"#;
        let def = parse_checklist_str(s).expect("duplicates are tolerated");

        assert_eq!(def.item_count(), 2);
        assert_eq!(def.find_item("dup").map(|i| i.text.as_str()), Some("one"));
        assert!(def.sections[0].subsections[0].items.is_empty());
        assert!(def.sections[1].items.is_empty());
    }

    #[test]
    fn empty_item_id_is_rejected() {
        let s = r#"{ "sections": [ { "id": "s", "title": "S",
            "subsections": [ { "title": "T", "items": [ { "id": " ", "text": "blank" } ] } ] } ] }"#;
        match parse_checklist_str(s).unwrap_err() {
            LoadError::Validation(msg) => {
                assert!(msg.contains("sections[0].subsections[0].items[0].id"))
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn null_lists_read_as_empty() {
        let s = r#"{ "sections": [
            { "id": "a", "title": "A", "items": null,
              "subsections": [ { "title": "Sub", "items": null } ] },
            { "id": "b", "title": "B", "subsections": null,
              "items": [ { "id": "b1", "text": "B1", "description": null, "category": null } ] } ] }"#;
        let def = parse_checklist_str(s).expect("null lists are accepted");

        assert!(def.sections[0].items.is_empty());
        assert!(def.sections[0].subsections[0].items.is_empty());
        assert!(def.sections[1].subsections.is_empty());
        assert_eq!(def.item_count(), 1);
        assert_eq!(def.sections[1].items[0].category, Category::Other);
    }

    #[test]
    fn missing_file_falls_back() {
        let td = tempfile::tempdir().expect("tempdir");
        let (def, err) = load_or_fallback(td.path().join("absent.json"));
        assert!(matches!(err, Some(LoadError::Io(_))));
        assert_eq!(def.sections.len(), 3);
        assert_eq!(def.item_count(), 8);
    }
}
