// src/export/outline.rs

//! Backend-neutral document structure shared by the Word and PDF exports.

use std::collections::BTreeSet;

use crate::{
    checklist::{ChecklistDefinition, Item},
    form::FormData,
    types::{FieldGroup, DOCUMENT_TITLE},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemDepth {
    /// Direct section item.
    Section,
    /// Item nested under a subsection heading.
    Subsection,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocBlock {
    Title(String),
    /// "Generated on" line under the title.
    Subtitle(String),
    /// Level 1: document parts. 2: checklist sections. 3: subsections.
    Heading { level: u8, text: String },
    /// `key with spaces: value`
    Field(String),
    Checkbox {
        checked: bool,
        text: String,
        depth: ItemDepth,
    },
    /// Vertical spacing between parts (PDF only).
    Gap,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentOutline {
    pub blocks: Vec<DocBlock>,
}

impl DocumentOutline {
    fn push(&mut self, b: DocBlock) {
        self.blocks.push(b);
    }

    fn heading(&mut self, level: u8, text: impl Into<String>) {
        self.push(DocBlock::Heading {
            level,
            text: text.into(),
        });
    }

    fn fields(&mut self, form: &FormData, group: FieldGroup) {
        for (key, value) in form.ordered_fields(group) {
            if !value.is_empty() {
                self.push(DocBlock::Field(format!("{}: {value}", key.replace('_', " "))));
            }
        }
    }

    fn items(&mut self, form: &FormData, items: &[Item], depth: ItemDepth) {
        for item in items {
            self.push(DocBlock::Checkbox {
                checked: form.is_checked(&item.id),
                text: item.text.clone(),
                depth,
            });
        }
    }

    pub fn headings(&self, level: u8) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(move |b| match b {
            DocBlock::Heading { level: l, text } if *l == level => Some(text.as_str()),
            _ => None,
        })
    }
}

/// `[✓] text` / `[ ] text`
pub fn checkbox_line(checked: bool, text: &str) -> String {
    format!("{} {text}", if checked { "[✓]" } else { "[ ]" })
}

/// Full document: every section, subsection and item. Repeated section titles
/// (and repeated subsection titles within a section) are emitted once.
pub fn build_outline(def: &ChecklistDefinition, form: &FormData, generated_on: &str) -> DocumentOutline {
    let mut doc = DocumentOutline::default();

    doc.push(DocBlock::Title(DOCUMENT_TITLE.to_string()));
    doc.push(DocBlock::Subtitle(format!("Generated on: {generated_on}")));

    doc.heading(1, "Project Information");
    doc.fields(form, FieldGroup::Metadata);
    doc.push(DocBlock::Gap);

    doc.heading(1, "Executive Summary");
    doc.fields(form, FieldGroup::Executive);
    doc.push(DocBlock::Gap);

    let mut seen_sections = BTreeSet::new();
    for section in &def.sections {
        if !seen_sections.insert(section.title.as_str()) {
            continue;
        }
        doc.heading(2, section.title.as_str());

        let mut seen_subsections = BTreeSet::new();
        for sub in &section.subsections {
            if !seen_subsections.insert(sub.title.as_str()) {
                continue;
            }
            doc.heading(3, sub.title.as_str());
            doc.items(form, &sub.items, ItemDepth::Subsection);
        }

        doc.items(form, &section.items, ItemDepth::Section);
        doc.push(DocBlock::Gap);
    }

    doc.heading(1, "Appendices");
    doc.fields(form, FieldGroup::Appendices);
    doc.push(DocBlock::Gap);

    if !form.review_history.is_empty() {
        doc.heading(1, "Review History");
        for row in form.review_history.iter().filter(|r| !r.is_blank()) {
            doc.push(DocBlock::Field(format!(
                "Date: {}, Reviewer: {}, Comments: {}",
                row.date, row.reviewer, row.comments
            )));
        }
    }

    doc
}
