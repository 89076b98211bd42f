// src/command/mod.rs

pub mod annotations;
pub mod navigation;
pub mod validate;

// --- Public façade ---

pub use annotations::{
    cancel_modal, confirm_remove_comment, grant_exception, open_comment_modal,
    open_exception_modal, remove_comment, remove_exception, request_remove_comment, save_comment,
    submit_comment_modal, submit_exception_modal, CommentDraft, CommentForm, ExceptionDraft,
    ExceptionForm, Modal,
};
pub use navigation::{
    go_to, go_to_tab, nav_buttons, navigate_next, navigate_previous, tab_for_section,
    take_pending_summary_refresh, NavButtons, NavState, Tab, SECTION_TABS, TAB_ORDER,
};
pub use validate::{
    is_tab_complete, missing_required, required_fields, validate_current_tab, validate_tab,
    RequiredField,
};

use crate::{error::AppResult, types::AppState};

/// Check or uncheck an item and refresh aggregates.
pub fn set_item_checked(state: &mut AppState, item_id: &str, checked: bool) -> AppResult<()> {
    state.form.set_item(item_id, checked)?;
    state.after_mutation();
    tracing::debug!(item_id, checked, "item updated");
    Ok(())
}

pub fn toggle_item(state: &mut AppState, item_id: &str) -> AppResult<bool> {
    let now = state.form.toggle_item(item_id)?;
    state.after_mutation();
    tracing::debug!(item_id, checked = now, "item toggled");
    Ok(now)
}
