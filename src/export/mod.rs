// src/export/mod.rs

//! Document export. Every path here only reads [`AppState`].

mod outline;
mod text;

pub mod docx;
pub mod pdf;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, NaiveDate, Utc};
use thiserror::Error;

use crate::{
    form::FormData,
    types::{AppState, FieldGroup},
};

pub use docx::DocumentBuilder;
pub use outline::{build_outline, checkbox_line, DocBlock, DocumentOutline, ItemDepth};
pub use pdf::{layout_pdf, PdfBuilder, PdfLayout, PdfPage, TextOp};
pub use text::render_plain_text;

#[cfg(feature = "docx")]
pub use docx::DocxBuilder;
#[cfg(feature = "pdf")]
pub use pdf::PrintPdfBuilder;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Docx,
    Pdf,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Text, ExportFormat::Docx, ExportFormat::Pdf];

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Docx => "docx",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            ExportFormat::Text => "text/plain",
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            ExportFormat::Pdf => "application/pdf",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Text => "Text",
            ExportFormat::Docx => "Word Document",
            ExportFormat::Pdf => "PDF",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.extension().to_ascii_uppercase())
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("{format} export unavailable: no document builder is installed")]
    CollaboratorUnavailable { format: ExportFormat },
    #[error("{format} build failed: {msg}")]
    Build { format: ExportFormat, msg: String },
    #[error("export write failed: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    pub fn short_msg(&self) -> &'static str {
        match self {
            ExportError::CollaboratorUnavailable {
                format: ExportFormat::Pdf,
            } => "Error: PDF library is not loaded. Cannot export as PDF.",
            ExportError::CollaboratorUnavailable { .. } => {
                "Error: docx library is not loaded. Cannot export as Word document."
            }
            ExportError::Build { .. } => "Document generation failed.",
            ExportError::Io(_) => "Failed to write export file.",
        }
    }
}

/// A finished export, ready to be saved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportArtifact {
    pub filename: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// Optional document backends. A missing one disables that format only.
pub struct ExportCollaborators {
    pub document: Option<Box<dyn DocumentBuilder>>,
    pub pdf: Option<Box<dyn PdfBuilder>>,
}

impl ExportCollaborators {
    /// Whatever backends this build was compiled with.
    pub fn available() -> Self {
        #[cfg(feature = "docx")]
        let document: Option<Box<dyn DocumentBuilder>> = Some(Box::new(DocxBuilder));
        #[cfg(not(feature = "docx"))]
        let document: Option<Box<dyn DocumentBuilder>> = None;

        #[cfg(feature = "pdf")]
        let pdf: Option<Box<dyn PdfBuilder>> = Some(Box::new(PrintPdfBuilder));
        #[cfg(not(feature = "pdf"))]
        let pdf: Option<Box<dyn PdfBuilder>> = None;

        Self { document, pdf }
    }

    pub fn none() -> Self {
        Self {
            document: None,
            pdf: None,
        }
    }

    pub fn supports(&self, format: ExportFormat) -> bool {
        match format {
            ExportFormat::Text => true,
            ExportFormat::Docx => self.document.is_some(),
            ExportFormat::Pdf => self.pdf.is_some(),
        }
    }
}

impl fmt::Debug for ExportCollaborators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportCollaborators")
            .field("document", &self.document.is_some())
            .field("pdf", &self.pdf.is_some())
            .finish()
    }
}

fn sanitize_name(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}

/// `{project}-production-readiness-{YYYY-MM-DD}.{ext}`
pub fn generate_filename(form: &FormData, format: ExportFormat, today: NaiveDate) -> String {
    let project = form.field(FieldGroup::Metadata, "project_name");
    let name = if project.is_empty() {
        "ai-checklist".to_string()
    } else {
        sanitize_name(project)
    };
    format!(
        "{name}-production-readiness-{}.{}",
        today.format("%Y-%m-%d"),
        format.extension()
    )
}

/// Locale-style date printed in document headers.
pub fn display_date(now: &DateTime<Local>) -> String {
    now.format("%-m/%-d/%Y").to_string()
}

/// Build an export artifact. Fails without side effects when the required
/// backend is missing.
pub fn export_document(
    state: &AppState,
    format: ExportFormat,
    collaborators: &ExportCollaborators,
    now: DateTime<Local>,
) -> Result<ExportArtifact, ExportError> {
    let generated_on = display_date(&now);
    // file names use the UTC calendar date
    let filename = generate_filename(
        &state.form,
        format,
        now.with_timezone(&Utc).date_naive(),
    );

    let bytes = match format {
        ExportFormat::Text => {
            render_plain_text(&state.definition, &state.form, &generated_on).into_bytes()
        }
        ExportFormat::Docx => {
            let builder = collaborators
                .document
                .as_ref()
                .ok_or(ExportError::CollaboratorUnavailable { format })?;
            let outline = build_outline(&state.definition, &state.form, &generated_on);
            builder.build(&outline)?
        }
        ExportFormat::Pdf => {
            let builder = collaborators
                .pdf
                .as_ref()
                .ok_or(ExportError::CollaboratorUnavailable { format })?;
            let outline = build_outline(&state.definition, &state.form, &generated_on);
            builder.build(&layout_pdf(&outline))?
        }
    };

    tracing::info!(%format, filename = %filename, bytes = bytes.len(), "export generated");

    Ok(ExportArtifact {
        filename,
        mime: format.mime(),
        bytes,
    })
}

/// Write `artifact` into `dir` (created if missing) and return the full path.
pub fn write_artifact(dir: &Path, artifact: &ExportArtifact) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(&artifact.filename);
    fs::write(&path, &artifact.bytes)?;
    tracing::info!(path = %path.display(), "export written");
    Ok(path)
}

// ======================================================
// Unit Tests
// ======================================================
