//! Markdown stripping for PDF rendering
//!
//! The PDF layer works on plain text: each line is classified by its raw
//! markdown shape, then stripped of markdown tokens. Stripping is
//! idempotent, so re-rendering already-plain text is harmless.

/// Layout role of a line, decided before any token stripping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Top-level `#` heading
    Title,
    /// `##`/`###` heading or a fully bolded line
    Heading,
    /// `-`, `*` or `+` bullet
    ListItem,
    /// Empty or whitespace-only
    Blank,
    Body,
}

pub fn classify_line(line: &str) -> LineKind {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if trimmed.starts_with("# ") {
        return LineKind::Title;
    }
    if trimmed.starts_with("##") {
        return LineKind::Heading;
    }
    if trimmed.len() > 4 && trimmed.starts_with("**") && trimmed.ends_with("**") {
        return LineKind::Heading;
    }
    if trimmed.starts_with("- ") || trimmed.starts_with("* ") || trimmed.starts_with("+ ") {
        return LineKind::ListItem;
    }
    LineKind::Body
}

/// Strip markdown tokens from one line, preserving the text
pub fn strip_markdown_line(line: &str) -> String {
    let mut text = line.trim().to_string();

    // code fences carry no text worth rendering
    if text.starts_with("```") {
        return String::new();
    }

    while text.starts_with('#') {
        text.remove(0);
    }
    text = text.trim_start().to_string();

    loop {
        let stripped = text
            .strip_prefix("- ")
            .or_else(|| text.strip_prefix("* "))
            .or_else(|| text.strip_prefix("+ "));
        match stripped {
            Some(rest) => text = rest.trim_start().to_string(),
            None => break,
        }
    }

    // [text](url) -> text
    let mut without_links = String::with_capacity(text.len());
    let mut rest = text.as_str();
    while let Some(open) = rest.find('[') {
        let after_open = &rest[open + 1..];
        if let Some(close) = after_open.find(']') {
            let after_close = &after_open[close + 1..];
            if let Some(stripped) = after_close.strip_prefix('(') {
                if let Some(paren_end) = stripped.find(')') {
                    without_links.push_str(&rest[..open]);
                    without_links.push_str(&after_open[..close]);
                    rest = &stripped[paren_end + 1..];
                    continue;
                }
            }
        }
        without_links.push_str(&rest[..open + 1]);
        rest = after_open;
    }
    without_links.push_str(rest);

    without_links
        .replace("**", "")
        .replace('*', "")
        .replace('`', "")
        .trim()
        .to_string()
}

/// Strip markdown from a whole document, line by line
pub fn strip_markdown(text: &str) -> String {
    text.lines()
        .map(strip_markdown_line)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_headings_and_bullets() {
        assert_eq!(classify_line("# 보고서"), LineKind::Title);
        assert_eq!(classify_line("## 시장성 평가"), LineKind::Heading);
        assert_eq!(classify_line("**1. 기업 개요**"), LineKind::Heading);
        assert_eq!(classify_line("- 핵심 기술"), LineKind::ListItem);
        assert_eq!(classify_line("   "), LineKind::Blank);
        assert_eq!(classify_line("일반 문장입니다."), LineKind::Body);
    }

    #[test]
    fn test_bold_marker_mid_line_is_body() {
        assert_eq!(classify_line("이 회사는 **강점**이 있다"), LineKind::Body);
    }

    #[test]
    fn test_strip_heading_markers() {
        assert_eq!(strip_markdown_line("## 시장성 평가"), "시장성 평가");
        assert_eq!(strip_markdown_line("# 보고서"), "보고서");
    }

    #[test]
    fn test_strip_emphasis_and_code() {
        assert_eq!(strip_markdown_line("**강조** 그리고 *기울임* 과 `코드`"), "강조 그리고 기울임 과 코드");
    }

    #[test]
    fn test_strip_bullets_including_nested_markers() {
        assert_eq!(strip_markdown_line("- 항목"), "항목");
        assert_eq!(strip_markdown_line("- - 항목"), "항목");
        assert_eq!(strip_markdown_line("* **굵은 항목**"), "굵은 항목");
    }

    #[test]
    fn test_numbered_prefixes_survive() {
        assert_eq!(strip_markdown_line("1. 회사명: 뉴로보이스"), "1. 회사명: 뉴로보이스");
    }

    #[test]
    fn test_links_keep_text() {
        assert_eq!(
            strip_markdown_line("자세한 내용은 [홈페이지](https://example.com) 참고"),
            "자세한 내용은 홈페이지 참고"
        );
    }

    #[test]
    fn test_code_fence_line_drops() {
        assert_eq!(strip_markdown_line("```json"), "");
    }

    #[test]
    fn test_strip_is_idempotent() {
        let lines = [
            "## **시장성** 평가",
            "- [링크](https://a.b) 항목",
            "**1. 기업 개요**",
            "평범한 문장",
            "# - 혼합 마커",
        ];
        for line in lines {
            let once = strip_markdown_line(line);
            let twice = strip_markdown_line(&once);
            assert_eq!(once, twice, "stripping not idempotent for {line:?}");
        }
    }

    #[test]
    fn test_strip_markdown_document() {
        let doc = "# 제목\n\n- 항목 **하나**\n본문";
        assert_eq!(strip_markdown(doc), "제목\n\n항목 하나\n본문");
    }
}
