// src/error.rs

use thiserror::Error;

use crate::checklist::LoadError;
use crate::command::navigation::Tab;
use crate::export::ExportError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserMsgKind {
    Success,
    Warn,
    Error,
    Info,
}

#[derive(Clone, Debug)]
pub struct UserMsg {
    pub kind: UserMsgKind,
    pub short: &'static str,
    pub detail: Option<String>,
}

#[derive(Debug, Error)]
pub enum AppError {
    // --------------------------------------------------
    // plumbing
    // --------------------------------------------------
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Export(#[from] ExportError),

    // --------------------------------------------------
    // lookups
    // --------------------------------------------------
    #[error("unknown tab id: {0}")]
    UnknownTab(String),
    #[error("unknown checklist item: {0}")]
    UnknownItem(String),
    #[error("unknown {group} field: {key}")]
    UnknownField { group: &'static str, key: String },
    #[error("review history row {index} out of range; rows={rows}")]
    InvalidReviewRow { index: usize, rows: usize },

    // --------------------------------------------------
    // input / validation
    // --------------------------------------------------
    #[error("required fields missing on '{}': {}", .tab.id(), .missing.join(", "))]
    RequiredFieldsMissing {
        tab: Tab,
        missing: Vec<&'static str>,
    },
    #[error("exception requires a reason and an approver")]
    ExceptionFieldsRequired,
    #[error("comment requires text and an author")]
    CommentFieldsRequired,
    #[error("no dialog is open")]
    NoOpenModal,
}

impl AppError {
    pub fn user_msg(&self) -> UserMsg {
        use AppError::*;

        let mut kind = UserMsgKind::Error;
        let detail = Some(self.to_string());

        let short: &'static str = match self {
            Load(_) => {
                kind = UserMsgKind::Warn;
                "Failed to load checklist data. Using fallback."
            }
            Export(e) => e.short_msg(),

            UnknownTab(_) => "Unknown tab.",
            UnknownItem(_) => "Unknown checklist item.",
            UnknownField { .. } => "Unknown form field.",
            InvalidReviewRow { .. } => "Review history row does not exist.",

            RequiredFieldsMissing { .. } => {
                kind = UserMsgKind::Warn;
                "Please complete all required fields before proceeding"
            }
            ExceptionFieldsRequired | CommentFieldsRequired => {
                kind = UserMsgKind::Warn;
                "Please fill in all required fields."
            }
            NoOpenModal => "No dialog is open.",
        };

        UserMsg {
            kind,
            short,
            detail,
        }
    }
}
