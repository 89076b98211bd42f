// src/command/annotations.rs

use chrono::{DateTime, Local, SecondsFormat, Utc};

use crate::{
    error::{AppError, AppResult},
    form::{CommentRecord, ExceptionRecord},
    types::AppState,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExceptionDraft {
    pub reason: String,
    pub approver: String,
    /// `YYYY-MM-DD`; blank means today.
    pub date: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommentDraft {
    pub text: String,
    pub author: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExceptionForm {
    pub item_id: String,
    pub item_text: String,
    pub draft: ExceptionDraft,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentForm {
    pub item_id: String,
    pub item_text: String,
    pub draft: CommentDraft,
    pub is_edit: bool,
}

/// At most one dialog is open at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Modal {
    Exception(ExceptionForm),
    Comment(CommentForm),
    ConfirmDeleteComment { item_id: String, item_text: String },
}

impl Modal {
    pub fn item_id(&self) -> &str {
        match self {
            Modal::Exception(f) => &f.item_id,
            Modal::Comment(f) => &f.item_id,
            Modal::ConfirmDeleteComment { item_id, .. } => item_id,
        }
    }
}

fn iso_date(now: &DateTime<Local>) -> String {
    now.format("%Y-%m-%d").to_string()
}

fn locale_date(now: &DateTime<Local>) -> String {
    now.format("%-m/%-d/%Y").to_string()
}

fn utc_timestamp(now: &DateTime<Local>) -> String {
    now.with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn item_text(state: &AppState, item_id: &str) -> AppResult<String> {
    if !state.form.has_item(item_id) {
        return Err(AppError::UnknownItem(item_id.to_string()));
    }
    Ok(state
        .definition
        .find_item(item_id)
        .map(|i| i.text.clone())
        .unwrap_or_else(|| item_id.to_string()))
}

// --------------------------------------------------
// exceptions
// --------------------------------------------------

pub fn open_exception_modal(
    state: &mut AppState,
    item_id: &str,
    now: DateTime<Local>,
) -> AppResult<()> {
    let item_text = item_text(state, item_id)?;
    state.modal = Some(Modal::Exception(ExceptionForm {
        item_id: item_id.to_string(),
        item_text,
        draft: ExceptionDraft {
            date: iso_date(&now),
            ..ExceptionDraft::default()
        },
    }));
    Ok(())
}

/// Upsert an exception. Reason and approver are required.
pub fn grant_exception(
    state: &mut AppState,
    item_id: &str,
    draft: &ExceptionDraft,
    now: DateTime<Local>,
) -> AppResult<()> {
    if !state.form.has_item(item_id) {
        return Err(AppError::UnknownItem(item_id.to_string()));
    }

    let reason = draft.reason.trim();
    let approver = draft.approver.trim();
    if reason.is_empty() || approver.is_empty() {
        return Err(AppError::ExceptionFieldsRequired);
    }

    let date = match draft.date.trim() {
        "" => iso_date(&now),
        d => d.to_string(),
    };

    state.form.exceptions.insert(
        item_id.to_string(),
        ExceptionRecord {
            reason: reason.to_string(),
            approver: approver.to_string(),
            date,
            timestamp: utc_timestamp(&now),
        },
    );
    state.after_mutation();
    tracing::info!(item_id, "exception granted");
    Ok(())
}

/// On error the dialog stays open with its contents intact.
pub fn submit_exception_modal(state: &mut AppState, now: DateTime<Local>) -> AppResult<()> {
    let Some(Modal::Exception(form)) = &state.modal else {
        return Err(AppError::NoOpenModal);
    };
    let (item_id, draft) = (form.item_id.clone(), form.draft.clone());

    grant_exception(state, &item_id, &draft, now)?;
    state.modal = None;
    Ok(())
}

/// Returns whether an exception was removed.
pub fn remove_exception(state: &mut AppState, item_id: &str) -> bool {
    if state.form.exceptions.remove(item_id).is_none() {
        return false;
    }
    state.after_mutation();
    tracing::info!(item_id, "exception removed");
    true
}

// --------------------------------------------------
// comments
// --------------------------------------------------

pub fn open_comment_modal(state: &mut AppState, item_id: &str) -> AppResult<()> {
    let item_text = item_text(state, item_id)?;
    let existing = state.form.comments.get(item_id);
    let is_edit = existing.is_some();

    let draft = existing
        .map(|c| CommentDraft {
            text: c.text.clone(),
            author: c.author.clone(),
        })
        .unwrap_or_default();

    state.modal = Some(Modal::Comment(CommentForm {
        item_id: item_id.to_string(),
        item_text,
        draft,
        is_edit,
    }));
    Ok(())
}

/// Upsert a comment. Text and author are required.
pub fn save_comment(
    state: &mut AppState,
    item_id: &str,
    draft: &CommentDraft,
    now: DateTime<Local>,
) -> AppResult<()> {
    if !state.form.has_item(item_id) {
        return Err(AppError::UnknownItem(item_id.to_string()));
    }

    let text = draft.text.trim();
    let author = draft.author.trim();
    if text.is_empty() || author.is_empty() {
        return Err(AppError::CommentFieldsRequired);
    }

    state.form.comments.insert(
        item_id.to_string(),
        CommentRecord {
            text: text.to_string(),
            author: author.to_string(),
            date: locale_date(&now),
            timestamp: utc_timestamp(&now),
        },
    );
    state.after_mutation();
    tracing::info!(item_id, "comment saved");
    Ok(())
}

pub fn submit_comment_modal(state: &mut AppState, now: DateTime<Local>) -> AppResult<()> {
    let Some(Modal::Comment(form)) = &state.modal else {
        return Err(AppError::NoOpenModal);
    };
    let (item_id, draft) = (form.item_id.clone(), form.draft.clone());

    save_comment(state, &item_id, &draft, now)?;
    state.modal = None;
    Ok(())
}

/// Opens the delete confirmation. No-op when the item has no comment.
pub fn request_remove_comment(state: &mut AppState, item_id: &str) -> AppResult<()> {
    let item_text = item_text(state, item_id)?;
    if !state.form.comments.contains_key(item_id) {
        return Ok(());
    }
    state.modal = Some(Modal::ConfirmDeleteComment {
        item_id: item_id.to_string(),
        item_text,
    });
    Ok(())
}

pub fn confirm_remove_comment(state: &mut AppState) -> AppResult<bool> {
    let Some(Modal::ConfirmDeleteComment { item_id, .. }) = &state.modal else {
        return Err(AppError::NoOpenModal);
    };
    let item_id = item_id.clone();

    state.modal = None;
    Ok(remove_comment(state, &item_id, true))
}

/// Deletes only when `confirmed`. Returns whether a comment was removed.
pub fn remove_comment(state: &mut AppState, item_id: &str, confirmed: bool) -> bool {
    if !confirmed || state.form.comments.remove(item_id).is_none() {
        return false;
    }
    state.after_mutation();
    tracing::info!(item_id, "comment removed");
    true
}

pub fn cancel_modal(state: &mut AppState) {
    state.modal = None;
}

// ======================================================
// Unit Tests
// ======================================================
