//! Field extraction from the numbered company profile
//!
//! The profile prompt asks the model for labeled lines ("회사명: ...").
//! Everything downstream treats a missing label or a sentinel-marked value
//! the same way: the field is unknown.

use std::sync::LazyLock;

use regex::Regex;
use scout_core::labels;

static COMPANY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"회사명\s*[:：]\s*(.*)").expect("Invalid company regex"));
static CEO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"대표자\s*[:：]\s*(.*)").expect("Invalid ceo regex"));
static INDUSTRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"산업분야\s*[:：]\s*(.*)").expect("Invalid industry regex"));

/// Fields pulled out of a profile; `None` means the label was absent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    pub company: Option<String>,
    pub ceo: Option<String>,
    pub industry: Option<String>,
}

impl ExtractedFields {
    /// Company name for query building, empty when unknown
    pub fn company_or_empty(&self) -> &str {
        known(&self.company).unwrap_or("")
    }

    /// CEO name for query building, empty when unknown
    pub fn ceo_or_empty(&self) -> &str {
        known(&self.ceo).unwrap_or("")
    }

    /// Industry for query building, empty when unknown
    pub fn industry_or_empty(&self) -> &str {
        known(&self.industry).unwrap_or("")
    }
}

/// A value carrying the profile prompt's "not found" sentinel counts as
/// unknown
fn known(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .filter(|v| !v.contains(labels::NOT_FOUND_SENTINEL))
}

pub fn extract_fields(text: &str) -> ExtractedFields {
    ExtractedFields {
        company: first_capture(&COMPANY_RE, text),
        ceo: first_capture(&CEO_RE, text),
        industry: first_capture(&INDUSTRY_RE, text),
    }
}

fn first_capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}
