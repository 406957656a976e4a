//! Final report synthesis
//!
//! Collects the six agent result mappings in pipeline order, substitutes a
//! fallback for any absent section, and asks the model for the fixed
//! nine-section investment review report.

use std::sync::Arc;

use scout_core::{labels, AgentSummary, ScoutError};
use scout_research::ChatApi;
use tracing::{info, instrument};

/// Sections fed into the report template, in pipeline order
#[derive(Debug, Clone)]
pub struct ReportInputs {
    pub exploration_summary: String,
    pub perform_summary: String,
    pub founder_summary: String,
    pub competitor_list: String,
    pub competitor_summary: String,
    pub market_summary: String,
    pub tech_summary: String,
    pub investment_analysis: String,
}

impl ReportInputs {
    /// Pull the expected keys out of the agent results.
    ///
    /// Order: exploration, performance, competitor, market, technology,
    /// investment judgment. A missing key degrades to the fallback label; a
    /// missing mapping is a pipeline bug and errors out.
    pub fn from_sections(sections: &[AgentSummary]) -> Result<Self, ScoutError> {
        Ok(Self {
            exploration_summary: section_text(sections, 0, labels::EXPLORATION_SUMMARY)?,
            perform_summary: section_text(sections, 1, labels::PERFORMANCE_SUMMARY)?,
            founder_summary: section_text(sections, 1, labels::FOUNDER_SUMMARY)?,
            competitor_list: section_text(sections, 2, labels::COMPETITOR_LIST)?,
            competitor_summary: section_text(sections, 2, labels::COMPETITOR_ANALYSIS)?,
            market_summary: section_text(sections, 3, labels::MARKET_ANALYSIS)?,
            tech_summary: section_text(sections, 4, labels::TECH_SUMMARY)?,
            investment_analysis: section_text(sections, 5, labels::INVESTMENT_JUDGEMENT)?,
        })
    }
}

fn section_text(sections: &[AgentSummary], idx: usize, key: &str) -> Result<String, ScoutError> {
    let section = sections
        .get(idx)
        .ok_or_else(|| ScoutError::internal(format!("missing agent result at position {idx}")))?;
    Ok(section
        .get(key)
        .cloned()
        .unwrap_or_else(|| labels::MISSING_INFO.to_string()))
}

pub(crate) fn report_prompt(inputs: &ReportInputs) -> String {
    format!(
        "당신은 전문 투자 분석가입니다. 다음 정보를 바탕으로 스타트업 투자 검토 보고서를 작성해주세요.\n\
        각 섹션은 주어진 정보를 충실히 반영하고, 최종 투자 판단은 모든 정보를 종합하여 논리적으로 내려주세요.\n\
        보고서는 반드시 한국어로 작성되어야 합니다.\n\n\
        **스타트업 투자 검토 보고서**\n\n\
        **1. 기업 개요**\n\
        {exploration}\n\
        * 상세 정보는 아래 각 항목 참고\n\
        * 회사명 / 설립일 / 소재지\n\
        * 대표자 및 주요 경영진: 이력, 주요 경력, 핵심 인력 소개\n\
        * 주요 연혁: 설립, 투자유치, 특허/인증, 주요 거래처 등\n\n\
        **2. 사업 및 비즈니스 모델**\n\
        (기업 개요 내 '주요 사업 분야' 등 관련 내용을 바탕으로 상세히 서술)\n\
        * 핵심 사업 내용: 무엇을, 누구에게, 어떻게 제공하는가?\n\
        * 비즈니스 모델: 수익 구조, 고객 유치/유지 전략\n\
        * 시장 문제점 및 Pain Point: 어떤 문제를 해결하는가?\n\n\
        **3. 시장성 평가**\n\
        (다음 시장성 분석 결과를 바탕으로 상세히 서술)\n\
        {market}\n\
        * 시장 규모 및 성장성: TAM/SAM/SOM, 연평균 성장률, 주요 통계\n\
        * 시장 트렌드 및 기회: 산업 동향, 성장 요인, 진입장벽\n\
        * 고객 및 수요 분석: 주요 타깃 고객, 고객 세분화\n\n\
        **4. 경쟁사 및 차별성 분석**\n\
        (다음 경쟁사 목록과 비교 분석을 바탕으로 상세히 서술)\n\
        {competitor_list}\n\
        {competitor_summary}\n\
        * 주요 경쟁사 리스트: 경쟁사별 장단점 요약\n\
        * 경쟁 우위 요소: 기술, 가격, 네트워크, 브랜드 등\n\
        * 차별화 전략: 우리만의 강점, 진입장벽\n\n\
        **5. 기술력 및 지식재산권**\n\
        (다음 기술 요약과 실적 정보 내 특허 관련 내용을 바탕으로 서술)\n\
        {tech}\n\
        * 핵심 기술 요약: 기술 설명, 적용 분야, 혁신성\n\
        * 논문/특허/인증: 보유 현황, 출원/등록 내역, 기술적 차별성\n\
        * 기술 로드맵: 향후 개발 계획\n\n\
        **6. 팀 구성 및 조직 역량**\n\
        (기업 개요 내 '핵심 인력'과 다음 창업자 정보를 바탕으로 서술)\n\
        {founder}\n\
        * 핵심 인력 및 역할: CTO, CMO 등 주요 인력 소개\n\
        * 조직 구조: 팀원 수, 조직도, 외부 자문/파트너\n\
        * 팀의 강점: 실무 경험, 업계 네트워크, 실행력 등\n\n\
        **7. 재무 현황 및 계획**\n\
        (다음 실적 정보 내 '투자 유치', '매출' 등 관련 내용을 바탕으로 서술)\n\
        {perform}\n\
        * 주요 재무 지표: 매출, 영업이익, 순이익, 현금 흐름 등\n\
        * 투자 유치 내역: 과거 투자자, 투자금, 지분 구조\n\
        * 향후 자금 계획: 투자금 사용 계획, 추가 자금 조달 계획\n\n\
        **8. 사업 확장 및 성장 전략**\n\
        (기업 개요 내 '주요 연혁', 성장 계획 등 관련 내용을 바탕으로 서술)\n\
        * 단기/중장기 성장 계획: 제품/서비스 확장, 글로벌 진출 등\n\
        * 주요 마일스톤: 향후 1~3년 내 달성 목표\n\
        * 위험 요인 및 대응 전략: 시장, 기술, 재무 등\n\n\
        **9. 투자 판단 및 종합 의견**\n\
        (다음 투자 판단 결과를 바탕으로 서술)\n\
        {investment}\n\
        * 투자 포인트: 투자 매력, 기대 효과, Exit 전략(회수 방안)\n\
        * 리스크 요인 및 개선 과제\n\
        * 최종 평가 및 투자 의견: 투자/보류/기타\n\n\
        **[부록]** (참고 자료 목록은 별도로 관리)\n\
        * 데이터 출처 명시 (가능한 경우 각 항목 분석 시 명시)\n\n\
        ---\n\
        보고서 작성을 시작하세요.",
        exploration = inputs.exploration_summary,
        market = inputs.market_summary,
        competitor_list = inputs.competitor_list,
        competitor_summary = inputs.competitor_summary,
        tech = inputs.tech_summary,
        founder = inputs.founder_summary,
        perform = inputs.perform_summary,
        investment = inputs.investment_analysis,
    )
}

pub struct ReportSynthesizer {
    chat: Arc<dyn ChatApi>,
}

impl ReportSynthesizer {
    pub fn new(chat: Arc<dyn ChatApi>) -> Self {
        Self { chat }
    }

    /// Synthesize the final report from the agent results
    #[instrument(skip_all)]
    pub async fn synthesize(&self, sections: &[AgentSummary]) -> Result<String, ScoutError> {
        let inputs = ReportInputs::from_sections(sections)?;
        info!("synthesizing final report");
        self.chat.complete(&report_prompt(&inputs)).await
    }
}
