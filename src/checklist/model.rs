// src/checklist/model.rs

use serde::{Deserialize, Deserializer};

/// Top-level checklist resource (`{ "sections": [...] }`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChecklistDefinition {
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,

    /// Direct items. May coexist with subsections; both are walked.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<Item>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub subsections: Vec<Subsection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Subsection {
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<Item>,
}

/// `null` lists read the same as missing ones.
fn null_as_empty<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(d)?.unwrap_or_default())
}

#[derive(Debug, Clone, Deserialize)]
pub struct Item {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Category,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(from = "Option<String>")]
pub enum Category {
    Mandatory,
    Optional,
    Future,
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Mandatory,
        Category::Optional,
        Category::Future,
        Category::Other,
    ];

    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "mandatory" => Category::Mandatory,
            "optional" => Category::Optional,
            "future" => Category::Future,
            _ => Category::Other,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Mandatory => "Mandatory",
            Category::Optional => "Optional",
            Category::Future => "Future",
            Category::Other => "Other",
        }
    }

    pub fn tone(self) -> CategoryTone {
        match self {
            Category::Mandatory => CategoryTone::Red,
            Category::Optional => CategoryTone::Green,
            Category::Future => CategoryTone::Blue,
            Category::Other => CategoryTone::Gray,
        }
    }
}

impl From<Option<String>> for Category {
    fn from(v: Option<String>) -> Self {
        v.as_deref().map(Category::parse).unwrap_or_default()
    }
}

/// Display colour family for a category label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryTone {
    Red,
    Green,
    Blue,
    Gray,
}

impl ChecklistDefinition {
    /// Every item: direct section items first, then subsection items, section by section.
    pub fn all_items(&self) -> impl Iterator<Item = &Item> {
        self.sections.iter().flat_map(|s| {
            s.items
                .iter()
                .chain(s.subsections.iter().flat_map(|sub| sub.items.iter()))
        })
    }

    /// Direct section items only (subsection items excluded).
    pub fn top_level_items(&self) -> impl Iterator<Item = &Item> {
        self.sections.iter().flat_map(|s| s.items.iter())
    }

    pub fn find_section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn find_item(&self, id: &str) -> Option<&Item> {
        self.all_items().find(|i| i.id == id)
    }

    pub fn item_count(&self) -> usize {
        self.all_items().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> Item {
        Item {
            id: id.to_string(),
            text: format!("Item {id}"),
            description: None,
            category: Category::Other,
        }
    }

    #[test]
    fn category_parse_maps_unknown_to_other() {
        assert_eq!(Category::parse("mandatory"), Category::Mandatory);
        assert_eq!(Category::parse(" Optional "), Category::Optional);
        assert_eq!(Category::parse("future"), Category::Future);
        assert_eq!(Category::parse("nice-to-have"), Category::Other);
        assert_eq!(Category::from(None), Category::Other);
    }

    #[test]
    fn all_items_walks_sections_and_subsections() {
        let def = ChecklistDefinition {
            sections: vec![Section {
                id: "s1".into(),
                title: "S1".into(),
                description: None,
                items: vec![item("a")],
                subsections: vec![Subsection {
                    title: "Sub".into(),
                    items: vec![item("b"), item("c")],
                }],
            }],
        };

        let ids: Vec<&str> = def.all_items().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);

        let top: Vec<&str> = def.top_level_items().map(|i| i.id.as_str()).collect();
        assert_eq!(top, vec!["a"]);

        assert_eq!(def.item_count(), 3);
        assert!(def.find_item("c").is_some());
        assert!(def.find_item("zz").is_none());
    }
}
