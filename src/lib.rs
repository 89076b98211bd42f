// src/lib.rs

pub mod checklist;
pub mod command;
pub mod context;
pub mod error;
pub mod export;
pub mod form;
pub mod progress;
pub mod types;
pub mod view;

use crate::checklist::ChecklistDefinition;
use crate::types::AppState;

/// Build the run's state from a loaded (or fallback) definition.
pub fn init_state(definition: ChecklistDefinition) -> AppState {
    let state = AppState::new(definition);
    tracing::info!(
        sections = state.definition.sections.len(),
        items = state.form.checklist.len(),
        "application state initialized"
    );
    state
}
