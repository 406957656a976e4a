//! PDF rendering for investment reports
//!
//! Renders a plain-text-with-markdown report into an A4 PDF. A CJK-capable
//! font family must be present on disk since the reports are Korean; see
//! `assets/fonts/README.md` for provisioning.

use genpdf::elements::{Break, Paragraph};
use genpdf::fonts::{self, FontData, FontFamily};
use genpdf::style::Style;
use genpdf::{Alignment, Document, Element, SimplePageDecorator};
use scout_core::{ScoutError, ScoutResult};
use tracing::debug;

use crate::markdown::{classify_line, strip_markdown_line, LineKind};

const DOCUMENT_TITLE: &str = "스타트업 투자 검토 보고서";
const DEFAULT_FONT_DIR: &str = "assets/fonts";
const DEFAULT_FONT_FAMILY: &str = "NanumGothic";

/// Renders report text into PDF bytes
///
/// Construction loads the font family from disk, so a missing or broken
/// font installation surfaces at boot instead of on the first download.
#[derive(Debug, Clone)]
pub struct PdfRenderer {
    fonts: FontFamily<FontData>,
}

impl PdfRenderer {
    pub fn new(font_dir: &str, font_family: &str) -> ScoutResult<Self> {
        let fonts = fonts::from_files(font_dir, font_family, None).map_err(|e| {
            ScoutError::config(format!(
                "failed to load font family '{font_family}' from '{font_dir}': {e}"
            ))
        })?;
        Ok(Self { fonts })
    }

    /// Font location from `REPORT_FONT_DIR` / `REPORT_FONT_FAMILY`,
    /// falling back to NanumGothic under `assets/fonts`
    pub fn from_env() -> ScoutResult<Self> {
        let font_dir =
            std::env::var("REPORT_FONT_DIR").unwrap_or_else(|_| DEFAULT_FONT_DIR.to_string());
        let font_family =
            std::env::var("REPORT_FONT_FAMILY").unwrap_or_else(|_| DEFAULT_FONT_FAMILY.to_string());
        Self::new(&font_dir, &font_family)
    }

    pub fn render(&self, report_text: &str) -> ScoutResult<Vec<u8>> {
        let mut doc = Document::new(self.fonts.clone());
        doc.set_title(DOCUMENT_TITLE);

        let mut decorator = SimplePageDecorator::new();
        decorator.set_margins(15);
        doc.set_page_decorator(decorator);

        let mut line_count = 0usize;
        for line in report_text.lines() {
            let kind = classify_line(line);
            let text = strip_markdown_line(line);
            if text.is_empty() && kind != LineKind::Blank {
                continue;
            }
            match kind {
                LineKind::Title => {
                    doc.push(
                        Paragraph::new(text)
                            .aligned(Alignment::Center)
                            .styled(Style::new().bold().with_font_size(18)),
                    );
                    doc.push(Break::new(1));
                }
                LineKind::Heading => {
                    doc.push(Paragraph::new(text).styled(Style::new().bold().with_font_size(13)));
                }
                LineKind::ListItem => {
                    doc.push(
                        Paragraph::new(format!("• {text}"))
                            .styled(Style::new().with_font_size(10)),
                    );
                }
                LineKind::Blank => {
                    doc.push(Break::new(1));
                }
                LineKind::Body => {
                    doc.push(Paragraph::new(text).styled(Style::new().with_font_size(10)));
                }
            }
            line_count += 1;
        }

        let mut buffer = Vec::new();
        doc.render(&mut buffer)
            .map_err(|e| ScoutError::internal(format!("pdf rendering failed: {e}")))?;

        debug!(lines = line_count, bytes = buffer.len(), "rendered report pdf");
        Ok(buffer)
    }
}
