// src/export/text.rs

use std::fmt::Write as _;

use crate::{
    checklist::ChecklistDefinition,
    form::FormData,
    types::{field_label, FieldGroup, DOCUMENT_TITLE},
};

fn check_mark(checked: bool) -> &'static str {
    if checked {
        "[✓]"
    } else {
        "[ ]"
    }
}

/// Plain-text dump. Only direct section items are listed; subsection items
/// appear in the richer document formats.
pub fn render_plain_text(def: &ChecklistDefinition, form: &FormData, generated_on: &str) -> String {
    let mut out = String::new();
    let rule = "-".repeat(20);

    // writing into a String cannot fail
    let _ = writeln!(out, "{DOCUMENT_TITLE}");
    let _ = writeln!(out, "{}", "=".repeat(60));
    let _ = writeln!(out, "Generated on: {generated_on}\n");

    let _ = writeln!(out, "PROJECT INFORMATION\n{rule}");
    for (key, value) in form.ordered_fields(FieldGroup::Metadata) {
        if !value.is_empty() {
            let _ = writeln!(out, "{}: {value}", field_label(key));
        }
    }

    let _ = writeln!(out, "\nEXECUTIVE SUMMARY\n{rule}");
    for (key, value) in form.ordered_fields(FieldGroup::Executive) {
        if !value.is_empty() {
            let _ = writeln!(out, "{}:\n{value}\n", field_label(key));
        }
    }

    let _ = writeln!(out, "CHECKLIST ITEMS\n{rule}");
    for section in &def.sections {
        let _ = writeln!(out, "\n{}", section.title.to_uppercase());
        for item in &section.items {
            let _ = writeln!(out, "{} {}", check_mark(form.is_checked(&item.id)), item.text);
            if let Some(desc) = item.description.as_deref().filter(|d| !d.is_empty()) {
                let _ = writeln!(out, "    {desc}");
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::{fallback_definition, parse_checklist_str};

    fn seeded(def: &ChecklistDefinition) -> FormData {
        let mut f = FormData::default();
        f.initialize(def);
        f
    }

    #[test]
    fn empty_form_layout_is_exact() {
        let def = parse_checklist_str(
            r#"{ "sections": [ { "id": "s", "title": "Core Stuff",
                "items": [ { "id": "a", "text": "Alpha", "description": "first" },
                           { "id": "b", "text": "Beta" } ] } ] }"#,
        )
        .unwrap();
        let mut form = seeded(&def);
        form.set_item("a", true).unwrap();

        let expected = format!(
            "{DOCUMENT_TITLE}\n{}\nGenerated on: 1/2/2026\n\n\
             PROJECT INFORMATION\n{r}\n\
             \nEXECUTIVE SUMMARY\n{r}\n\
             CHECKLIST ITEMS\n{r}\n\
             \nCORE STUFF\n\
             [✓] Alpha\n    first\n\
             [ ] Beta\n",
            "=".repeat(60),
            r = "-".repeat(20),
        );
        assert_eq!(render_plain_text(&def, &form, "1/2/2026"), expected);
    }

    #[test]
    fn fields_use_title_case_and_skip_blanks() {
        let def = fallback_definition();
        let mut form = seeded(&def);
        form.set_field(FieldGroup::Metadata, "project_name", "Atlas").unwrap();
        form.set_field(FieldGroup::Metadata, "service_type", "Internal").unwrap();
        form.set_field(FieldGroup::Executive, "key_risks", "drift").unwrap();

        let txt = render_plain_text(&def, &form, "x");
        assert!(txt.contains("PROJECT INFORMATION\n--------------------\nProject Name: Atlas\nService Type: Internal\n"));
        assert!(txt.contains("EXECUTIVE SUMMARY\n--------------------\nKey Risks:\ndrift\n\nCHECKLIST ITEMS"));
        assert!(!txt.contains("Dri:"));
    }

    #[test]
    fn subsection_items_are_omitted() {
        let def = parse_checklist_str(
            r#"{ "sections": [ { "id": "s", "title": "S",
                "subsections": [ { "title": "Sub", "items": [ { "id": "n", "text": "Nested" } ] } ] } ] }"#,
        )
        .unwrap();
        let form = seeded(&def);
        let txt = render_plain_text(&def, &form, "x");
        assert!(txt.ends_with("\nS\n"));
        assert!(!txt.contains("Nested"));
    }
}
