// src/export/pdf.rs

//! PDF export: a pure pagination pass over the outline, then a backend that
//! places the resulting text runs.

use super::outline::{checkbox_line, DocBlock, DocumentOutline, ItemDepth};
use super::ExportError;

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

const TOP_MM: f32 = 15.0;
const LEFT_MM: f32 = 10.0;
const BOTTOM_LIMIT_MM: f32 = 285.0;

/// One text run. `y_mm` is measured from the top edge of the page.
#[derive(Clone, Debug, PartialEq)]
pub struct TextOp {
    pub x_mm: f32,
    pub y_mm: f32,
    pub font_size: f32,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PdfPage {
    pub ops: Vec<TextOp>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PdfLayout {
    pub title: String,
    pub pages: Vec<PdfPage>,
}

pub trait PdfBuilder {
    fn build(&self, layout: &PdfLayout) -> Result<Vec<u8>, ExportError>;
}

struct Cursor {
    y: f32,
    pages: Vec<PdfPage>,
}

impl Cursor {
    fn new() -> Self {
        Self {
            y: TOP_MM,
            pages: vec![PdfPage::default()],
        }
    }

    fn text(&mut self, indent: f32, font_size: f32, text: &str, advance: f32) {
        let y = self.y;
        if let Some(page) = self.pages.last_mut() {
            page.ops.push(TextOp {
                x_mm: LEFT_MM + indent,
                y_mm: y,
                font_size,
                text: text.to_string(),
            });
        }
        self.advance(advance);
    }

    fn advance(&mut self, by: f32) {
        self.y += by;
        if self.y > BOTTOM_LIMIT_MM {
            self.pages.push(PdfPage::default());
            self.y = TOP_MM;
        }
    }
}

/// Paginate the outline with a vertical cursor; a new page starts once the
/// cursor passes the bottom limit.
pub fn layout_pdf(outline: &DocumentOutline) -> PdfLayout {
    let mut c = Cursor::new();
    let mut title = String::new();

    for block in &outline.blocks {
        match block {
            DocBlock::Title(t) => {
                title = t.clone();
                c.text(0.0, 18.0, t, 10.0);
            }
            DocBlock::Subtitle(t) => c.text(0.0, 10.0, t, 10.0),
            DocBlock::Heading { level: 1, text } => c.text(0.0, 14.0, text, 8.0),
            DocBlock::Heading { level: 2, text } => c.text(0.0, 12.0, text, 7.0),
            DocBlock::Heading { text, .. } => c.text(2.0, 10.0, text, 6.0),
            DocBlock::Field(t) => {
                // one run per line
                for line in t.lines() {
                    c.text(2.0, 10.0, line, 6.0);
                }
            }
            DocBlock::Checkbox {
                checked,
                text,
                depth,
            } => {
                let indent = match depth {
                    ItemDepth::Section => 4.0,
                    ItemDepth::Subsection => 6.0,
                };
                c.text(indent, 10.0, &checkbox_line(*checked, text), 6.0);
            }
            DocBlock::Gap => c.advance(4.0),
        }
    }

    // a break right at the end leaves an empty trailing page
    if c.pages.len() > 1 && c.pages.last().is_some_and(|p| p.ops.is_empty()) {
        c.pages.pop();
    }

    PdfLayout {
        title,
        pages: c.pages,
    }
}

#[cfg(feature = "pdf")]
pub use imp::PrintPdfBuilder;

#[cfg(feature = "pdf")]
mod imp {
    use printpdf::{BuiltinFont, Mm, PdfDocument};

    use super::{PdfBuilder, PdfLayout, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
    use crate::export::{ExportError, ExportFormat};

    fn build_err(e: impl std::fmt::Display) -> ExportError {
        ExportError::Build {
            format: ExportFormat::Pdf,
            msg: e.to_string(),
        }
    }

    /// Standard Helvetica has no check mark glyph.
    fn encodable(text: &str) -> String {
        text.replace('✓', "x")
    }

    /// `.pdf` output via `printpdf`, A4 portrait, Helvetica.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct PrintPdfBuilder;

    impl PdfBuilder for PrintPdfBuilder {
        fn build(&self, layout: &PdfLayout) -> Result<Vec<u8>, ExportError> {
            let (doc, first_page, first_layer) = PdfDocument::new(
                layout.title.as_str(),
                Mm(PAGE_WIDTH_MM),
                Mm(PAGE_HEIGHT_MM),
                "Layer 1",
            );
            let font = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(build_err)?;

            for (i, page) in layout.pages.iter().enumerate() {
                let (page_idx, layer_idx) = if i == 0 {
                    (first_page, first_layer)
                } else {
                    doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1")
                };
                let layer = doc.get_page(page_idx).get_layer(layer_idx);

                for op in &page.ops {
                    layer.use_text(
                        encodable(&op.text),
                        op.font_size,
                        Mm(op.x_mm),
                        Mm(PAGE_HEIGHT_MM - op.y_mm),
                        &font,
                    );
                }
            }

            let bytes = doc.save_to_bytes().map_err(build_err)?;
            tracing::debug!(pages = layout.pages.len(), bytes = bytes.len(), "pdf rendered");
            Ok(bytes)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(n: usize) -> DocumentOutline {
        let mut blocks = vec![DocBlock::Title("T".into())];
        blocks.extend((0..n).map(|i| DocBlock::Field(format!("f{i}"))));
        DocumentOutline { blocks }
    }

    #[test]
    fn cursor_starts_at_top_margin() {
        let l = layout_pdf(&fields(1));
        assert_eq!(l.title, "T");
        assert_eq!(l.pages.len(), 1);
        let ops = &l.pages[0].ops;
        assert_eq!((ops[0].x_mm, ops[0].y_mm, ops[0].font_size), (10.0, 15.0, 18.0));
        assert_eq!((ops[1].x_mm, ops[1].y_mm, ops[1].font_size), (12.0, 25.0, 10.0));
    }

    #[test]
    fn breaks_page_past_bottom_limit() {
        // title at 15, fields at 25, 31, ..., 283; the one at 283 pushes the cursor past 285
        let l = layout_pdf(&fields(45));
        assert_eq!(l.pages.len(), 2);
        assert_eq!(l.pages[0].ops.len(), 1 + 44);
        assert_eq!(l.pages[0].ops[44].y_mm, 283.0);
        assert_eq!(l.pages[1].ops[0].y_mm, 15.0);
    }

    #[test]
    fn no_empty_trailing_page() {
        let l = layout_pdf(&fields(44));
        assert_eq!(l.pages.len(), 1);
    }

    #[test]
    fn multiline_field_gets_one_run_per_line() {
        let outline = DocumentOutline {
            blocks: vec![
                DocBlock::Field("key risks: burst load\nregion outage".into()),
                DocBlock::Field("after".into()),
            ],
        };
        let ops = &layout_pdf(&outline).pages[0].ops;
        assert_eq!(ops.len(), 3);
        assert_eq!(ops[0].text, "key risks: burst load");
        assert_eq!(ops[1].text, "region outage");
        assert_eq!(ops[1].y_mm - ops[0].y_mm, 6.0);
        assert_eq!(ops[1].x_mm, ops[0].x_mm);
        assert_eq!(ops[2].y_mm, 27.0);
    }

    #[test]
    fn item_indent_depends_on_depth() {
        let outline = DocumentOutline {
            blocks: vec![
                DocBlock::Checkbox {
                    checked: false,
                    text: "a".into(),
                    depth: ItemDepth::Subsection,
                },
                DocBlock::Checkbox {
                    checked: true,
                    text: "b".into(),
                    depth: ItemDepth::Section,
                },
            ],
        };
        let ops = &layout_pdf(&outline).pages[0].ops;
        assert_eq!(ops[0].x_mm, 16.0);
        assert_eq!(ops[0].text, "[ ] a");
        assert_eq!(ops[1].x_mm, 14.0);
        assert_eq!(ops[1].text, "[✓] b");
    }
}
