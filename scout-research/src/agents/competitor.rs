//! Competitor roster and comparison agent

use std::sync::Arc;

use scout_core::{format_results, labels, AgentSummary, ScoutError};
use tracing::instrument;

use crate::extract::extract_fields;
use crate::openai::ChatApi;
use crate::tavily::SearchApi;

const SEARCH_RESULTS: u32 = 5;

pub(crate) fn list_query(company: &str) -> String {
    format!("{company} 경쟁사 리스트 스타트업")
}

pub(crate) fn analysis_query(company: &str) -> String {
    format!("{company} 경쟁사 비교 분석 차별점 시장점유율")
}

pub(crate) fn list_prompt(company: &str, results_block: &str) -> String {
    format!(
        "당신은 기술 기반 스타트업 분석을 수행하는 시장조사 전문가입니다.\n\
        아래의 웹 검색 결과를 바탕으로 '{company}'의 주요 경쟁사 후보를 최대 5개까지 선정하고 \
        간단히 설명해 주세요.\n\n\
        작성 지침:\n\
        - 경쟁사 이름과 간단한 설명을 1~2문장으로 요약해 주세요.\n\n\
        [검색 자료]\n{results_block}"
    )
}

pub(crate) fn analysis_prompt(company: &str, results_block: &str) -> String {
    format!(
        "당신은 기술 기반 스타트업 분석을 전문으로 하는 시장 조사원입니다.\n\
        아래의 웹 검색 결과를 바탕으로, '{company}'과(와) 경쟁하는 주요 기업들과의 경쟁력 분석을 수행하세요.\n\n\
        분석 항목:\n\
        1. 사업 모델 비교 : 각 기업의 수익 구조, 고객 대상, 제공 가치\n\
        2. 기술력 비교 : 보유 핵심 기술, 특허, 기술 수준\n\
        3. 시장 점유율 비교 : 가능한 경우 수치 기반으로 시장 점유율 비교\n\
        4. 투자 유치 현황 비교 : 총 투자 금액, 투자 시기, 주요 투자자를 중심으로 비교\n\
        5. 주요 차별화 요소 : 해당 기업이 가진 독창적인 요소 또는 경쟁 우위를 정리\n\n\
        작성 지침:\n\
        - 각 항목별로 구분해서 작성하되, 전체는 하나의 보고서처럼 문장 형태로 기술하세요.\n\
        - 두괄식으로 요약한 후, 세부 내용을 풀어 설명하세요.\n\n\
        [검색 자료]\n{results_block}"
    )
}

pub struct CompetitorAgent {
    search: Arc<dyn SearchApi>,
    chat: Arc<dyn ChatApi>,
}

impl CompetitorAgent {
    pub fn new(search: Arc<dyn SearchApi>, chat: Arc<dyn ChatApi>) -> Self {
        Self { search, chat }
    }

    /// Produce the competitor roster and the comparative analysis
    #[instrument(skip_all)]
    pub async fn run(&self, profile: &str) -> Result<AgentSummary, ScoutError> {
        let fields = extract_fields(profile);
        let company = fields.company_or_empty();

        let list_results = self.search.search(&list_query(company), SEARCH_RESULTS).await?;
        let competitor_list = self
            .chat
            .complete(&list_prompt(company, &format_results(&list_results)))
            .await?;

        let analysis_results = self
            .search
            .search(&analysis_query(company), SEARCH_RESULTS)
            .await?;
        let competitor_analysis = self
            .chat
            .complete(&analysis_prompt(company, &format_results(&analysis_results)))
            .await?;

        let mut summary = AgentSummary::new();
        summary.insert(labels::COMPETITOR_LIST.to_string(), competitor_list);
        summary.insert(labels::COMPETITOR_ANALYSIS.to_string(), competitor_analysis);
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queries_embed_company() {
        assert_eq!(list_query("뉴로보이스"), "뉴로보이스 경쟁사 리스트 스타트업");
        assert!(analysis_query("뉴로보이스").contains("시장점유율"));
    }

    #[test]
    fn test_list_prompt_caps_competitors() {
        let prompt = list_prompt("뉴로보이스", "자료");
        assert!(prompt.contains("최대 5개"));
        assert!(prompt.contains("뉴로보이스"));
    }

    #[test]
    fn test_analysis_prompt_covers_five_axes() {
        let prompt = analysis_prompt("뉴로보이스", "자료");
        for heading in ["사업 모델 비교", "기술력 비교", "시장 점유율 비교", "투자 유치 현황 비교", "주요 차별화 요소"] {
            assert!(prompt.contains(heading), "missing heading {heading}");
        }
    }
}
