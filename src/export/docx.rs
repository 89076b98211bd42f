// src/export/docx.rs

use super::{DocumentOutline, ExportError};

/// Word-processor backend: turns an outline into document bytes.
pub trait DocumentBuilder {
    fn build(&self, outline: &DocumentOutline) -> Result<Vec<u8>, ExportError>;
}

#[cfg(feature = "docx")]
pub use imp::DocxBuilder;

#[cfg(feature = "docx")]
mod imp {
    use std::io::Cursor;

    use docx_rs::{BreakType, Docx, Paragraph, Run, Style, StyleType};

    use super::DocumentBuilder;
    use crate::export::outline::{checkbox_line, DocBlock, DocumentOutline};
    use crate::export::{ExportError, ExportFormat};

    // run sizes are half-points
    const TITLE_SIZE: usize = 48;
    const BODY_SIZE: usize = 28;
    const ITEM_SIZE: usize = 26;

    fn heading_size(level: u8) -> usize {
        match level {
            1 => 32,
            2 => 30,
            _ => 28,
        }
    }

    /// Line breaks inside one run; a raw `\n` renders as a space in Word.
    fn text_run(text: &str) -> Run {
        let mut run = Run::new();
        for (i, line) in text.lines().enumerate() {
            if i > 0 {
                run = run.add_break(BreakType::TextWrapping);
            }
            run = run.add_text(line);
        }
        run
    }

    fn text_paragraph(text: &str, size: usize, bold: bool) -> Paragraph {
        let mut run = text_run(text).size(size);
        if bold {
            run = run.bold();
        }
        Paragraph::new().add_run(run)
    }

    fn paragraph_for(block: &DocBlock) -> Option<Paragraph> {
        let p = match block {
            DocBlock::Title(t) => text_paragraph(t, TITLE_SIZE, true).style("Title"),
            DocBlock::Subtitle(t) => text_paragraph(t, BODY_SIZE, false),
            DocBlock::Heading { level, text } => text_paragraph(text, heading_size(*level), true)
                .style(&format!("Heading{}", level)),
            DocBlock::Field(t) => text_paragraph(t, BODY_SIZE, false),
            DocBlock::Checkbox { checked, text, .. } => {
                text_paragraph(&checkbox_line(*checked, text), ITEM_SIZE, *checked)
            }
            DocBlock::Gap => return None,
        };
        Some(p)
    }

    /// `.docx` output via `docx-rs`.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct DocxBuilder;

    impl DocumentBuilder for DocxBuilder {
        fn build(&self, outline: &DocumentOutline) -> Result<Vec<u8>, ExportError> {
            let mut docx = Docx::new()
                .add_style(Style::new("Title", StyleType::Paragraph).name("Title"))
                .add_style(Style::new("Heading1", StyleType::Paragraph).name("Heading 1"))
                .add_style(Style::new("Heading2", StyleType::Paragraph).name("Heading 2"))
                .add_style(Style::new("Heading3", StyleType::Paragraph).name("Heading 3"));

            for p in outline.blocks.iter().filter_map(paragraph_for) {
                docx = docx.add_paragraph(p);
            }

            let mut buf = Cursor::new(Vec::new());
            docx.build().pack(&mut buf).map_err(|e| ExportError::Build {
                format: ExportFormat::Docx,
                msg: e.to_string(),
            })?;

            let bytes = buf.into_inner();
            tracing::debug!(blocks = outline.blocks.len(), bytes = bytes.len(), "docx packed");
            Ok(bytes)
        }
    }

}
