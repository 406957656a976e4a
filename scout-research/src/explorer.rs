//! Startup discovery state machine
//!
//! Search with a randomized discovery query, have the model pick one company
//! that is not in the exclusion history, then collect a numbered profile for
//! it. Selection is enforced programmatically: an excluded answer triggers a
//! re-prompt before giving up.

use std::sync::Arc;

use rand::seq::IndexedRandom;
use scout_core::{format_results, ScoutError};
use tracing::{debug, instrument, warn};

use crate::openai::ChatApi;
use crate::tavily::SearchApi;
use crate::types::ExplorationOutcome;

const OPENINGS: [&str; 4] = [
    "혁신적인 인공지능 스타트업을 조사 중입니다.",
    "기술력과 성장성을 갖춘 AI 스타트업을 찾고 있습니다.",
    "다음 투자를 위한 유망한 AI 기반 스타트업 정보를 수집하고 있습니다.",
    "AI 기술을 주축으로 빠르게 성장 중인 스타트업을 찾습니다.",
];

const CONDITIONS: [&str; 11] = [
    "- 최근 3년(2021~2024년) 이내에 설립된 스타트업",
    "- 생성형 AI(Generative AI), 머신러닝(ML), 자연어 처리(NLP) 기술 활용",
    "- 독자적 알고리즘 또는 딥러닝 모델을 개발 및 보유",
    "- 기술력을 기반으로 한 SaaS 또는 플랫폼형 서비스 제공",
    "- 유의미한 기술 검증(PoC), 상용화 또는 파일럿 테스트 진행 경험",
    "- AI 관련 특허 또는 연구 논문이 존재",
    "- 소수 정예로 구성된 고급 기술 인력 보유",
    "- 최근 1년 내 외부 투자 유치 경험 있음 (시드~시리즈 C)",
    "- 정부 또는 글로벌 프로그램(R&D 지원, 스타트업 육성 등) 참여 이력 있음",
    "- AI를 기존 산업(예: 농업, 제조, 물류 등)에 접목한 융합형 모델 운영",
    "- 글로벌 진출을 위한 다국어 서비스 또는 해외 진출 계획 명시",
];

const EXTRAS: [&str; 4] = [
    "산업군은 제한 없으나, 헬스케어, 로보틱스, 에듀테크, 핀테크, 제조 자동화 분야면 더욱 좋습니다.",
    "국내외를 불문하고, 글로벌 진출 가능성이 있는 스타트업이면 더욱 좋습니다.",
    "기술 데모, PoC 사례, 기업 블로그 또는 미디어에 언급된 기사를 포함해 주세요.",
    "투자자(VC), 액셀러레이터, 인큐베이터의 평가 사례가 있는 자료가 있으면 포함해주세요.",
];

const CONDITIONS_PER_QUERY: usize = 3;
const DISCOVERY_RESULTS: u32 = 20;
const MAX_SELECT_ATTEMPTS: usize = 3;

/// Compose a discovery query from one opening, three random conditions and
/// one extra, so repeated runs surface different companies
pub(crate) fn discovery_query() -> String {
    let mut rng = rand::rng();
    let opening = OPENINGS.choose(&mut rng).unwrap_or(&OPENINGS[0]);
    let conditions: Vec<&str> = CONDITIONS
        .choose_multiple(&mut rng, CONDITIONS_PER_QUERY)
        .copied()
        .collect();
    let extra = EXTRAS.choose(&mut rng).unwrap_or(&EXTRAS[0]);

    format!("{}\n{}\n{}", opening, conditions.join("\n"), extra)
}

pub(crate) fn selection_prompt(results_block: &str, excluded: &[String]) -> String {
    format!(
        "당신은 AI 분야의 유망한 스타트업을 탐색하는 투자 분석가입니다.\n\
        현재 투자 여부를 판단할 기업을 선정하는 역할을 맡고 있습니다.\n\
        동일한 패턴의 선택을 반복하지 않기 위해, 기존과 다른 유형의 스타트업을 추천하는 것이 중요합니다.\n\
        다음 검색 결과를 바탕으로, 이미 선택한 기업 리스트([{list}])에 없는 기업 중:\n\
        - 기술이나 비즈니스 모델에서 새로운 관점을 제시하거나,\n\
        - 특정 AI 응용 분야에서 독창적인 접근을 한 기업을 선정해주세요.\n\
        - 지역, 산업, 기술 분야에서 다양성을 고려하세요.\n\n\
        단, 너무 일반적이거나 정보가 부족한 회사는 제외해주세요.\n\n\
        다음의 검색 결과를 활용해서 투자 평가를 진행할 스타트업 1곳을 선정하여 회사명만 출력해주세요.\n\
        꼭 회사의 이름을 출력해야합니다.\n\n\
        [검색 결과]\n{context}",
        list = excluded.join(", "),
        context = results_block,
    )
}

pub(crate) fn profile_prompt(company: &str, results_block: &str) -> String {
    format!(
        "아래는 '{company}'에 대한 검색 결과입니다. 이 정보를 바탕으로 회사 정보를 정리해 주세요.\n\n\
        - 회사명\n\
        - 설립연도\n\
        - 대표자\n\
        - 주요 AI 기술 또는 제품 및 회사 홈페이지\n\
        - 투자 현황 또는 주요 투자자\n\
        - 핵심 인력\n\
        - 주목할 만한 뉴스 또는 최근 성과\n\n\
        [검색 결과]\n{context}\n\n\
        답변은 아래의 형식으로 반환해주세요.\n\
        아래와 같이 개조식으로 작성하되, 볼드체 등 글 꾸밈 요소는 절대 포함하지 마세요!\n\
        만약 해당 정보를 정확하게 찾을 수 없는 경우 \"찾을 수 없음\"이라고 표시해주세요.\n\
        1. 회사명\n\
        2. 설립일\n\
        3. 대표자\n\
        4. 산업분야\n\
        5. 홈페이지\n\
        6. 연락처\n\
        7. 핵심 인력 (팀 구성)\n\
        8. 주요 연혁 (설립, 투자유치, 특허 등 중요 이력)",
        company = company,
        context = results_block,
    )
}

fn is_excluded(answer: &str, excluded: &[String]) -> bool {
    excluded
        .iter()
        .any(|name| !name.is_empty() && (answer == name || answer.contains(name.as_str())))
}

pub struct StartupExplorer {
    search: Arc<dyn SearchApi>,
    chat: Arc<dyn ChatApi>,
}

impl StartupExplorer {
    pub fn new(search: Arc<dyn SearchApi>, chat: Arc<dyn ChatApi>) -> Self {
        Self { search, chat }
    }

    /// Run the full discovery pipeline against an exclusion history
    #[instrument(skip(self, excluded), fields(excluded = excluded.len()))]
    pub async fn explore(&self, excluded: &[String]) -> Result<ExplorationOutcome, ScoutError> {
        let query = discovery_query();
        debug!(%query, "discovery query");

        let results = self.search.search(&query, DISCOVERY_RESULTS).await?;
        let results_block = format_results(&results);

        let name = self.select_startup(&results_block, excluded).await?;
        let profile = self.collect_profile(&name).await?;

        Ok(ExplorationOutcome { name, profile })
    }

    async fn select_startup(
        &self,
        results_block: &str,
        excluded: &[String],
    ) -> Result<String, ScoutError> {
        for attempt in 1..=MAX_SELECT_ATTEMPTS {
            let prompt = selection_prompt(results_block, excluded);
            let answer = self.chat.complete(&prompt).await?.trim().to_string();

            if answer.is_empty() {
                warn!(attempt, "selection returned an empty company name");
                continue;
            }
            if is_excluded(&answer, excluded) {
                warn!(attempt, %answer, "selection returned an excluded company");
                continue;
            }
            return Ok(answer);
        }

        Err(ScoutError::api(format!(
            "selection kept returning excluded companies after {} attempts",
            MAX_SELECT_ATTEMPTS
        )))
    }

    async fn collect_profile(&self, company: &str) -> Result<String, ScoutError> {
        let query =
            format!("{company} 회사 및 대표자 정보, 설립연도, 주요 AI 기술, 투자 현황, 최근 뉴스");
        let results = self.search.search(&query, DISCOVERY_RESULTS).await?;
        let prompt = profile_prompt(company, &format_results(&results));
        self.chat.complete(&prompt).await
    }
}
