//! Company performance and founder background agent

use std::sync::Arc;

use scout_core::{format_results, labels, AgentSummary, ScoutError};
use tracing::{debug, instrument};

use crate::extract::extract_fields;
use crate::openai::ChatApi;
use crate::tavily::SearchApi;

const SEARCH_RESULTS: u32 = 20;

pub(crate) fn company_query(company: &str) -> String {
    format!("{company} 투자유치 매출 수상 실적")
}

pub(crate) fn founder_query(company: &str, ceo: &str) -> String {
    if ceo.is_empty() {
        format!("{company} 창업자 경력 이력")
    } else {
        format!("{company} 창업자 {ceo} 경력 이력")
    }
}

pub(crate) fn company_prompt(results_block: &str) -> String {
    format!(
        "다음 웹 검색 자료를 읽고, 해당 회사의 실적 (투자유치, 매출, 수상 등)을 요약해줘. \
        개조식으로 작성하지 말고, 문장 형태로 작성해줘.\n\n{results_block}"
    )
}

pub(crate) fn founder_prompt(results_block: &str) -> String {
    format!(
        "다음 웹 검색 자료를 읽고, 창업자의 주요 경력과 학력을 요약해줘. \
        개조식으로 작성하지 말고, 문장 형태로 작성해줘.\n\n{results_block}"
    )
}

pub struct PerformanceAgent {
    search: Arc<dyn SearchApi>,
    chat: Arc<dyn ChatApi>,
}

impl PerformanceAgent {
    pub fn new(search: Arc<dyn SearchApi>, chat: Arc<dyn ChatApi>) -> Self {
        Self { search, chat }
    }

    /// Summarize company performance and founder background from web
    /// evidence
    #[instrument(skip_all)]
    pub async fn run(&self, profile: &str) -> Result<AgentSummary, ScoutError> {
        let fields = extract_fields(profile);
        let company = fields.company_or_empty();

        let company_results = self.search.search(&company_query(company), SEARCH_RESULTS).await?;
        let company_summary = self
            .chat
            .complete(&company_prompt(&format_results(&company_results)))
            .await?;

        let ceo = fields.ceo_or_empty();
        if ceo.is_empty() {
            debug!("no usable CEO name in profile, searching by company only");
        }
        let founder_results = self
            .search
            .search(&founder_query(company, ceo), SEARCH_RESULTS)
            .await?;
        let founder_summary = self
            .chat
            .complete(&founder_prompt(&format_results(&founder_results)))
            .await?;

        let mut summary = AgentSummary::new();
        summary.insert(labels::PERFORMANCE_SUMMARY.to_string(), company_summary);
        summary.insert(labels::FOUNDER_SUMMARY.to_string(), founder_summary);
        Ok(summary)
    }
}
