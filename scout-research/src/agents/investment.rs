//! Investment judgment agent
//!
//! Compares the other agents' findings against an industry baseline document
//! retrieved from the vector store and produces a weighted verdict.

use std::sync::Arc;

use scout_core::{labels, one_entry, AgentSummary, ScoutError};
use scout_embedding::DocumentIndex;
use tracing::{debug, instrument};

use crate::openai::ChatApi;

/// Fixed retrieval query for the baseline collection
pub(crate) const BASELINE_QUERY: &str = "2025년 AI 스타트업 업계 평균 Revenue Multiple";

/// Flatten the agent summaries into "## label" blocks, stable across runs
pub(crate) fn format_sections(sections: &[AgentSummary]) -> String {
    let mut lines = Vec::new();
    for section in sections {
        let mut keys: Vec<&String> = section.keys().collect();
        keys.sort();
        for key in keys {
            let value = &section[key];
            lines.push(format!("## {}\n{}\n", key.trim(), value.trim()));
        }
    }
    lines.join("\n").trim().to_string()
}

pub(crate) fn judgement_prompt(baseline: &str, text: &str) -> String {
    format!(
        "다음은 AI 스타트업의 업계 평균 벤치마크 정보입니다:\n\n\
        {baseline}\n\n\
        위 정보를 바탕으로, 아래 회사의 실적과 비교해 평가하세요.\n\
        평가 항목은 다음과 같습니다:\n\n\
        | 항목 | 비중(%) | 평가 포인트 |\n\
        | --- | --- | --- |\n\
        | 창업자 (Owner) | 30% | 전문성, 커뮤니케이션, 실행력 |\n\
        | 시장성 (Opportunity Size) | 25% | 시장 크기, 성장 가능성 |\n\
        | 제품/기술력 | 15% | 독창성, 구현 가능성 |\n\
        | 경쟁 우위 | 10% | 진입장벽, 특허, 네트워크 효과 |\n\
        | 실적 | 10% | 매출, 계약, 유저수 등 |\n\
        | 투자조건 (Deal Terms) | 10% | Valuation, 지분율 등 |\n\n\
        회사 정보:\n\
        {text}\n\n\
        위의 평가 기준에 따라 전체적으로 투자 관점에서 이 회사를 평가해줘. \
        표 형식은 사용하지 말고 문장으로 정리하고, 각 평가 항목의 점수는 평균을 100%로 해서 \
        업계 평균보다 높다고 판단되면 100% 이상, 낮다고 판단되면 100% 미만으로 설정해줘. \
        각 항목을 언급하면서 평가 내용을 제시해줘."
    )
}

pub struct InvestmentAgent {
    chat: Arc<dyn ChatApi>,
    baseline: Arc<DocumentIndex>,
}

impl InvestmentAgent {
    pub fn new(chat: Arc<dyn ChatApi>, baseline: Arc<DocumentIndex>) -> Self {
        Self { chat, baseline }
    }

    /// Judge the startup against the industry baseline
    #[instrument(skip_all)]
    pub async fn run(&self, sections: &[AgentSummary]) -> Result<AgentSummary, ScoutError> {
        let matches = self
            .baseline
            .top_k(BASELINE_QUERY, 1)
            .await
            .map_err(ScoutError::from)?;
        let baseline = matches
            .iter()
            .map(|doc| doc.content.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        debug!(found = !baseline.is_empty(), "loaded industry baseline");

        let verdict = self
            .chat
            .complete(&judgement_prompt(&baseline, &format_sections(sections)))
            .await?;

        Ok(one_entry(labels::INVESTMENT_JUDGEMENT, verdict))
    }
}
