//! Report synthesis and PDF rendering

pub mod markdown;
pub mod pdf;
pub mod synthesis;

pub use markdown::{classify_line, strip_markdown, strip_markdown_line, LineKind};
pub use pdf::PdfRenderer;
pub use synthesis::{ReportInputs, ReportSynthesizer};
