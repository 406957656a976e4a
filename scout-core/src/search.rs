use serde::{Deserialize, Serialize};

/// A single web search hit, normalized across providers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub content: String,
}

/// Render search hits as a prompt block.
///
/// Content is truncated per result to keep the prompt inside token limits.
pub fn format_results(results: &[SearchResult]) -> String {
    let mut block = String::new();
    for result in results {
        block.push_str(&format!("\n### {}\n", result.title));
        block.push_str(&format!("URL: {}\n", result.url));
        let truncated: String = result.content.chars().take(1500).collect();
        block.push_str(&format!("{}\n", truncated));
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_results_includes_title_and_url() {
        let results = vec![SearchResult {
            title: "AI 스타트업 투자 동향".to_string(),
            url: "https://example.com/a".to_string(),
            content: "시드 투자 유치".to_string(),
        }];

        let block = format_results(&results);
        assert!(block.contains("### AI 스타트업 투자 동향"));
        assert!(block.contains("URL: https://example.com/a"));
        assert!(block.contains("시드 투자 유치"));
    }

    #[test]
    fn test_format_results_truncates_long_content() {
        let results = vec![SearchResult {
            title: "t".to_string(),
            url: "u".to_string(),
            content: "가".repeat(3000),
        }];

        let block = format_results(&results);
        assert_eq!(block.matches('가').count(), 1500);
    }

    #[test]
    fn test_format_results_empty() {
        assert_eq!(format_results(&[]), "");
    }
}
