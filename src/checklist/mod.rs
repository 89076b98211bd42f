// src/checklist/mod.rs

mod fallback;
mod model;
mod store;

pub use fallback::fallback_definition;
pub use model::{Category, CategoryTone, ChecklistDefinition, Item, Section, Subsection};
pub use store::{
    drop_duplicate_items, load_checklist_path, load_or_fallback, parse_checklist_str,
    validate_definition, LoadError,
};
