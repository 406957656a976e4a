//! Market sizing and attractiveness agent

use std::sync::Arc;

use scout_core::{format_results, labels, one_entry, AgentSummary, ScoutError};
use tracing::instrument;

use crate::extract::extract_fields;
use crate::openai::ChatApi;
use crate::tavily::SearchApi;

const SEARCH_RESULTS: u32 = 20;

pub(crate) fn sizing_query(company: &str, industry: &str) -> String {
    format!("{company} {industry} 시장 규모 TAM SAM SOM 성장률 트렌드 전망")
}

pub(crate) fn landscape_query(company: &str, industry: &str) -> String {
    format!("{company} {industry} 고객 세그먼트 시장 진입장벽 경쟁 규제")
}

pub(crate) fn analysis_prompt(company: &str, results_block: &str) -> String {
    format!(
        "당신은 VC(벤처 캐피탈)의 투자 심사역으로, 실제 투자 의사결정에 필요한 시장성 분석을 수행합니다.\n\
        아래의 웹 검색 결과를 바탕으로, '{company}'의 주요 사업 모델에 대한 시장성을 평가하세요.\n\n\
        분석 항목:\n\
        1. 시장 규모 및 성장성 (반드시 구체적인 수치 포함)\n\
           - TAM(Total Addressable Market): 시장 전체 규모 (달러/원 단위, CAGR)\n\
           - SAM(Serviceable Available Market): 실제 도달 가능한 시장 규모 (달러/원 단위)\n\
           - SOM(Serviceable Obtainable Market): 현실적으로 점유 가능한 시장 비율 및 규모 (%)\n\
           - 매출액 기준 잠재 시장 규모와 해당 기업의 잠재 점유율 추정\n\n\
        2. 시장 매력도 및 성장 동인\n\
           - 향후 3-5년 시장 CAGR 전망 및 근거 (구체적인 % 수치)\n\
           - 시장 성장을 견인하는 주요 요인 3-5가지 (기술 발전, 규제 환경, 소비자 행동 변화 등)\n\
           - 해당 시장의 수익성 지표 (업계 평균 영업이익률, 매출총이익률 등)\n\
           - 시장 성숙도 단계 (도입기/성장기/성숙기/쇠퇴기) 및 판단 근거\n\n\
        3. 시장 경쟁 강도 분석\n\
           - 주요 경쟁자 시장점유율 분포 및 집중도\n\
           - 시장 진입장벽 (높음/중간/낮음) 및 판단 근거\n\
           - 해당 기업의 차별화 포인트 및 지속가능한 경쟁우위 요소\n\
           - 신규 진입자 위협 수준 및 대체재 위협 수준\n\n\
        4. 고객 및 채널 분석\n\
           - B2B/B2C/B2B2C 판매 비중 및 주요 고객군 특성\n\
           - 주 수익원 및 수익 모델의 다각화 정도\n\
           - 고객 획득 비용(CAC) 및 고객 생애 가치(LTV) 추정치 또는 업계 평균\n\
           - 판매/유통 채널의 특성 및 확장성\n\n\
        5. 종합 결론\n\
           - 위 1~4번 분석 결과를 바탕으로 스타트업의 시장성에 대한 구체적인 결론을 도출해주세요.\n\
           - 잠재 수요 분석이 스타트업의 성장 가능성을 어떻게 뒷받침하는지 설명하세요.\n\
           - 최종적으로, 분석된 기회와 위험을 고려하여 스타트업의 시장성에 대한 합리적인 판단을 제시하세요.\n\n\
        데이터 기반 분석이 중요합니다. 가능한 한 구체적인 수치, 비율, 금액을 포함하세요.\n\
        확실하지 않은 추정치는 \"업계 평균 기준\", \"유사 기업 비교\", \"전문가 의견 기준\" 등 근거를 명시하세요.\n\
        결론은 매우 구체적이고 실행 가능한 내용으로 작성하세요. 모호한 일반론은 피하고, \
        투자 결정에 직접적으로 도움이 되는 인사이트를 제공하세요.\n\n\
        [검색 자료]\n{results_block}"
    )
}

pub struct MarketAgent {
    search: Arc<dyn SearchApi>,
    chat: Arc<dyn ChatApi>,
}

impl MarketAgent {
    pub fn new(search: Arc<dyn SearchApi>, chat: Arc<dyn ChatApi>) -> Self {
        Self { search, chat }
    }

    /// Assess market size, growth and entry barriers for the company's
    /// industry
    #[instrument(skip_all)]
    pub async fn run(&self, profile: &str) -> Result<AgentSummary, ScoutError> {
        let fields = extract_fields(profile);
        let company = fields.company_or_empty();
        let industry = fields.industry_or_empty();

        let mut results = self
            .search
            .search(&sizing_query(company, industry), SEARCH_RESULTS)
            .await?;
        let landscape = self
            .search
            .search(&landscape_query(company, industry), SEARCH_RESULTS)
            .await?;
        results.extend(landscape);

        let analysis = self
            .chat
            .complete(&analysis_prompt(company, &format_results(&results)))
            .await?;

        Ok(one_entry(labels::MARKET_ANALYSIS, analysis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queries_combine_company_and_industry() {
        assert_eq!(
            sizing_query("뉴로보이스", "음성 AI"),
            "뉴로보이스 음성 AI 시장 규모 TAM SAM SOM 성장률 트렌드 전망"
        );
        assert!(landscape_query("뉴로보이스", "음성 AI").contains("진입장벽"));
    }

    #[test]
    fn test_queries_tolerate_unknown_industry() {
        // missing industry degrades to a company-only query, not a panic
        let query = sizing_query("뉴로보이스", "");
        assert!(query.starts_with("뉴로보이스 "));
        assert!(query.contains("TAM SAM SOM"));
    }

    #[test]
    fn test_analysis_prompt_requests_numbers() {
        let prompt = analysis_prompt("뉴로보이스", "자료");
        assert!(prompt.contains("TAM(Total Addressable Market)"));
        assert!(prompt.contains("구체적인 수치"));
        assert!(prompt.contains("종합 결론"));
    }
}
