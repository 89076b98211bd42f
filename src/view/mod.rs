// src/view/mod.rs

//! UI-agnostic view tree for checklist tabs.
//!
//! `render_tab` is a pure function of the definition and the form, rebuilt
//! in full for every frame. The desktop shell only draws what it is given and
//! reports intents back through the command layer.

use crate::{
    checklist::{Category, CategoryTone, ChecklistDefinition, Item, Section},
    command::navigation::Tab,
    form::FormData,
};

pub const EMPTY_SECTION: &str = "No checklist items found for this section.";
pub const EMPTY_SUBSECTION: &str = "No checklist items found for this subsection.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChecklistTabView {
    pub tab: Tab,
    pub section_id: &'static str,
    /// `None` when the definition has no section for this tab.
    pub section_title: Option<String>,
    pub groups: Vec<GroupView>,
    /// Set instead of `groups` when there is nothing to show.
    pub placeholder: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupView {
    pub title: String,
    pub description: Option<String>,
    pub items: Vec<ItemView>,
    pub placeholder: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemView {
    pub id: String,
    pub text: String,
    pub description: Option<String>,
    pub category: Category,
    pub category_label: &'static str,
    pub tone: CategoryTone,
    pub checked: bool,
    pub actions: ItemActions,
    pub exception: Option<ExceptionView>,
    pub comment: Option<CommentView>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemActions {
    /// Mandatory items without an exception.
    pub request_exception: bool,
    pub remove_exception: bool,
    pub comment_label: &'static str,
    pub delete_comment: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExceptionView {
    pub reason: String,
    pub approver: String,
    pub date: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentView {
    pub text: String,
    pub author: String,
    pub date: String,
}

fn item_view(item: &Item, form: &FormData) -> ItemView {
    let exception = form.exceptions.get(&item.id).map(|e| ExceptionView {
        reason: e.reason.clone(),
        approver: e.approver.clone(),
        date: e.date.clone(),
    });
    let comment = form.comments.get(&item.id).map(|c| CommentView {
        text: c.text.clone(),
        author: c.author.clone(),
        date: c.date.clone(),
    });

    ItemView {
        id: item.id.clone(),
        text: item.text.clone(),
        description: item.description.clone(),
        category: item.category,
        category_label: item.category.label(),
        tone: item.category.tone(),
        checked: form.is_checked(&item.id),
        actions: ItemActions {
            request_exception: item.category == Category::Mandatory && exception.is_none(),
            remove_exception: exception.is_some(),
            comment_label: if comment.is_some() {
                "Edit Comment"
            } else {
                "Add Comment"
            },
            delete_comment: comment.is_some(),
        },
        exception,
        comment,
    }
}

fn groups_for(section: &Section, form: &FormData) -> Vec<GroupView> {
    let mut groups: Vec<GroupView> = section
        .subsections
        .iter()
        .map(|sub| GroupView {
            title: sub.title.clone(),
            description: None,
            items: sub.items.iter().map(|i| item_view(i, form)).collect(),
            placeholder: sub.items.is_empty().then_some(EMPTY_SUBSECTION),
        })
        .collect();

    if !section.items.is_empty() {
        groups.push(GroupView {
            title: section.title.clone(),
            description: section.description.clone(),
            items: section.items.iter().map(|i| item_view(i, form)).collect(),
            placeholder: None,
        });
    }

    groups
}

/// View tree for a checklist tab; `None` for tabs that carry no checklist section.
pub fn render_tab(def: &ChecklistDefinition, form: &FormData, tab: Tab) -> Option<ChecklistTabView> {
    let section_id = tab.section_id()?;
    let section = def.find_section(section_id);

    let groups = section.map(|s| groups_for(s, form)).unwrap_or_default();
    let placeholder = groups.is_empty().then_some(EMPTY_SECTION);

    if section.is_none() {
        tracing::debug!(tab = tab.id(), section_id, "no section for tab");
    }

    Some(ChecklistTabView {
        tab,
        section_id,
        section_title: section.map(|s| s.title.clone()),
        groups,
        placeholder,
    })
}

impl ChecklistTabView {
    pub fn items(&self) -> impl Iterator<Item = &ItemView> {
        self.groups.iter().flat_map(|g| g.items.iter())
    }
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist::{fallback_definition, parse_checklist_str};
    use crate::form::{CommentRecord, ExceptionRecord};

    fn def() -> ChecklistDefinition {
        parse_checklist_str(
            r#"{ "sections": [
              { "id": "1-system-architecture-and-design", "title": "Arch",
                "description": "design",
                "items": [ { "id": "d1", "text": "Direct", "category": "optional" } ],
                "subsections": [
                  { "title": "Sub A", "items": [
                      { "id": "m1", "text": "Must", "category": "mandatory" } ] },
                  { "title": "Sub Empty", "items": [] } ] },
              { "id": "2-security-and-compliance", "title": "Sec" } ] }"#,
        )
        .unwrap()
    }

    fn form(def: &ChecklistDefinition) -> FormData {
        let mut f = FormData::default();
        f.initialize(def);
        f
    }

    #[test]
    fn non_checklist_tabs_render_nothing() {
        let d = def();
        let f = form(&d);
        assert!(render_tab(&d, &f, Tab::Overview).is_none());
        assert!(render_tab(&d, &f, Tab::Export).is_none());
    }

    #[test]
    fn subsections_first_then_direct_items() {
        let d = def();
        let f = form(&d);
        let v = render_tab(&d, &f, Tab::Architecture).unwrap();

        let titles: Vec<&str> = v.groups.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, vec!["Sub A", "Sub Empty", "Arch"]);
        assert_eq!(v.groups[1].placeholder, Some(EMPTY_SUBSECTION));
        assert_eq!(v.groups[2].description.as_deref(), Some("design"));
        assert!(v.placeholder.is_none());
    }

    #[test]
    fn empty_or_missing_section_gets_placeholder() {
        let d = def();
        let f = form(&d);

        let sec = render_tab(&d, &f, Tab::Security).unwrap();
        assert!(sec.groups.is_empty());
        assert_eq!(sec.placeholder, Some(EMPTY_SECTION));

        let mon = render_tab(&d, &f, Tab::Monitoring).unwrap();
        assert!(mon.section_title.is_none());
        assert_eq!(mon.placeholder, Some(EMPTY_SECTION));
    }

    #[test]
    fn exception_action_only_for_mandatory_without_exception() {
        let d = def();
        let mut f = form(&d);
        let v = render_tab(&d, &f, Tab::Architecture).unwrap();
        let by_id = |v: &ChecklistTabView, id: &str| v.items().find(|i| i.id == id).cloned().unwrap();

        assert!(by_id(&v, "m1").actions.request_exception);
        assert!(!by_id(&v, "d1").actions.request_exception);

        f.exceptions.insert(
            "m1".into(),
            ExceptionRecord {
                reason: "r".into(),
                approver: "a".into(),
                date: "2026-01-01".into(),
                timestamp: String::new(),
            },
        );
        let v = render_tab(&d, &f, Tab::Architecture).unwrap();
        let m1 = by_id(&v, "m1");
        assert!(!m1.actions.request_exception);
        assert!(m1.actions.remove_exception);
        assert_eq!(m1.exception.unwrap().approver, "a");
    }

    #[test]
    fn comment_label_tracks_state() {
        let d = def();
        let mut f = form(&d);
        f.set_item("d1", true).unwrap();
        f.comments.insert(
            "d1".into(),
            CommentRecord {
                text: "t".into(),
                author: "x".into(),
                date: "1/2/2026".into(),
                timestamp: String::new(),
            },
        );
        let v = render_tab(&d, &f, Tab::Architecture).unwrap();
        let d1 = v.items().find(|i| i.id == "d1").unwrap();
        assert!(d1.checked);
        assert_eq!(d1.actions.comment_label, "Edit Comment");
        assert!(d1.actions.delete_comment);
        assert_eq!(d1.tone, CategoryTone::Green);

        let m1 = v.items().find(|i| i.id == "m1").unwrap();
        assert_eq!(m1.actions.comment_label, "Add Comment");
    }

    #[test]
    fn fallback_definition_is_visible() {
        let d = fallback_definition();
        let f = form(&d);
        for tab in [Tab::Architecture, Tab::Security, Tab::Performance] {
            let v = render_tab(&d, &f, tab).unwrap();
            assert!(v.placeholder.is_none(), "{tab:?}");
        }
    }
}
