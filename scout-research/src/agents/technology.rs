//! Patent and paper based technology agent
//!
//! Pulls the company's KIPRIS filings, extracts keywords from them, retrieves
//! related papers from the vector index, and synthesizes one technology
//! report. Degrades to a short notice when no patents exist.

use std::sync::Arc;

use scout_core::{labels, one_entry, AgentSummary, ScoutError};
use scout_embedding::{DocumentIndex, DocumentMatch};
use tracing::{debug, info, instrument};

use crate::extract::extract_fields;
use crate::kipris::{Patent, PatentApi};
use crate::openai::ChatApi;

const KEYWORD_COUNT: usize = 5;
const PAPER_COUNT: usize = 5;
const PAPER_SNIPPET_CHARS: usize = 500;

pub(crate) const NO_PATENTS_NOTICE: &str =
    "등록된 특허를 찾을 수 없어 특허 기반 기술 분석을 수행하지 못했습니다.";

pub(crate) fn keyword_prompt(patents: &[Patent]) -> String {
    let mut combined = String::new();
    for patent in patents {
        combined.push_str(&format!(
            "제목: {}\n초록: {}\n\n",
            patent.title, patent.abstract_text
        ));
    }

    format!(
        "다음은 한 회사의 전체 특허 목록입니다. 이 특허들의 기술 내용을 바탕으로 \
        핵심 기술 키워드 {KEYWORD_COUNT}개를 뽑아 주세요.\n\
        키워드는 한 줄에 하나씩, 명확한 기술 용어로 작성해 주세요.\n\n{combined}"
    )
}

/// One keyword per line, with any bullet decoration stripped
pub(crate) fn parse_keywords(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.trim().trim_start_matches(['-', '•', '*', ' ']).trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub(crate) fn summary_prompt(
    company: &str,
    patents: &[Patent],
    keywords: &[String],
    papers: &[DocumentMatch],
) -> String {
    let abstracts = patents
        .iter()
        .filter(|p| !p.abstract_text.is_empty())
        .map(|p| format!("- {}:\n{}", p.title, p.abstract_text))
        .collect::<Vec<_>>()
        .join("\n");

    let paper_summaries = papers
        .iter()
        .enumerate()
        .map(|(idx, doc)| {
            let snippet: String = doc
                .content
                .replace('\n', " ")
                .chars()
                .take(PAPER_SNIPPET_CHARS)
                .collect();
            format!("{}. {}...", idx + 1, snippet)
        })
        .collect::<Vec<_>>()
        .join("\n");

    let patent_list = patents
        .iter()
        .filter(|p| !p.title.is_empty() && !p.abstract_text.is_empty())
        .map(|p| format!("- 특허명: {}\n  내용: {}", p.title, p.abstract_text))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "당신은 기술 스타트업에 투자할지 판단해야 하는 전문가입니다.\n\n\
        아래는 스타트업 '{company}'의 기술적 배경을 보여주는 핵심 자료입니다:\n\
        - 총 {count}건의 특허\n\
        - 특허에서 추출된 주요 키워드\n\
        - 전체 특허 초록을 통합한 내용\n\
        - 관련 논문 요약\n\n\
        이 자료를 바탕으로 다음 조건에 맞는 기술 요약 보고서를 작성해 주세요:\n\n\
        목적:\n\
        - 특허 기반 기술의 구조, 작동 방식, 응용 방안, 차별성을 모두 포함해 객관적으로 서술\n\
        - 특허 내용을 빠짐없이 요약에 녹여내고, 관련 논문과 함께 기술의 독창성과 실현 가능성을 뒷받침\n\
        - 향후 확장 가능성, 응용 분야, 상용화 가능성까지 포함\n\n\
        제공 정보:\n\
        특허 키워드:\n{keywords}\n\n\
        전체 특허 초록 통합 요약:\n{abstracts}\n\n\
        관련 논문 요약:\n{papers}\n\n\
        출력 요건:\n\
        - 전체 기술을 대표할 수 있도록 최대한 상세하고 객관적으로 작성\n\
        - bullet 없이 하나의 논리적 단락으로 구성 (20문장 이상)\n\
        - 보고서 하단에 아래 특허 목록을 특허명과 내용을 통해 보여줄 것 단, 내용은 특허 설명과 함께 \
        장단점을 포함하여 한,두문장을 사용해서 요약 (요약 결과 이후 구분선으로 삽입)\n\n\
        요약 결과 아래에 다음과 같은 특허 목록을 포함하세요:\n\n{patent_list}",
        company = company,
        count = patents.len(),
        keywords = keywords.join(", "),
        abstracts = abstracts,
        papers = paper_summaries,
        patent_list = patent_list,
    )
}

pub struct TechnologyAgent {
    patents: Arc<dyn PatentApi>,
    chat: Arc<dyn ChatApi>,
    papers: Arc<DocumentIndex>,
}

impl TechnologyAgent {
    pub fn new(patents: Arc<dyn PatentApi>, chat: Arc<dyn ChatApi>, papers: Arc<DocumentIndex>) -> Self {
        Self {
            patents,
            chat,
            papers,
        }
    }

    #[instrument(skip_all)]
    pub async fn run(&self, profile: &str) -> Result<AgentSummary, ScoutError> {
        let fields = extract_fields(profile);
        let company = fields.company_or_empty();

        let patents = self.patents.patents_by_applicant(company).await?;
        if patents.is_empty() {
            info!(%company, "no patent filings found");
            return Ok(one_entry(labels::TECH_SUMMARY, NO_PATENTS_NOTICE));
        }
        info!(%company, count = patents.len(), "collected patent filings");

        let keyword_text = self.chat.complete(&keyword_prompt(&patents)).await?;
        let keywords = parse_keywords(&keyword_text);
        debug!(?keywords, "extracted technology keywords");

        let papers = self
            .papers
            .top_k(&keywords.join(" "), PAPER_COUNT)
            .await
            .map_err(ScoutError::from)?;
        debug!(count = papers.len(), "retrieved related papers");

        let report = self
            .chat
            .complete(&summary_prompt(company, &patents, &keywords, &papers))
            .await?;

        Ok(one_entry(labels::TECH_SUMMARY, report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patent(title: &str, abstract_text: &str) -> Patent {
        Patent {
            title: title.to_string(),
            abstract_text: abstract_text.to_string(),
            ..Patent::default()
        }
    }

    #[test]
    fn test_parse_keywords_strips_bullets() {
        let text = "- 음성 분리\n• 딥러닝 잡음 제거\n* 실시간 추론\n\n화자 인식";
        assert_eq!(
            parse_keywords(text),
            vec!["음성 분리", "딥러닝 잡음 제거", "실시간 추론", "화자 인식"]
        );
    }

    #[test]
    fn test_keyword_prompt_includes_each_patent() {
        let patents = vec![patent("음성 분리 장치", "잡음 환경 분리"), patent("학습 방법", "모델 학습")];
        let prompt = keyword_prompt(&patents);
        assert!(prompt.contains("제목: 음성 분리 장치"));
        assert!(prompt.contains("초록: 모델 학습"));
        assert!(prompt.contains("키워드 5개"));
    }

    #[test]
    fn test_summary_prompt_skips_abstractless_patents_in_list() {
        let patents = vec![patent("A", "내용 있음"), patent("B", "")];
        let prompt = summary_prompt("뉴로보이스", &patents, &["키워드".to_string()], &[]);
        assert!(prompt.contains("- 특허명: A"));
        assert!(!prompt.contains("- 특허명: B"));
        assert!(prompt.contains("총 2건의 특허"));
    }

    #[test]
    fn test_summary_prompt_truncates_paper_snippets() {
        let long_paper = DocumentMatch {
            doc_id: "p1".to_string(),
            content: "가".repeat(2000),
            score: 0.9,
        };
        let prompt = summary_prompt("뉴로보이스", &[patent("A", "내용")], &[], &[long_paper]);
        let snippet_line = prompt.lines().find(|l| l.starts_with("1. ")).unwrap();
        assert!(snippet_line.chars().count() <= PAPER_SNIPPET_CHARS + 10);
    }
}
