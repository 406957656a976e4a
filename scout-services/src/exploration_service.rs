//! Startup exploration orchestration
//!
//! Runs the full pipeline: discover a startup not yet covered, fan the
//! analysis agents out over its profile, fold their results into an
//! investment judgment, then synthesize and store the final report.

use std::sync::Arc;

use scout_core::{labels, one_entry, AgentSummary, ScoutError};
use scout_embedding::{DocumentIndex, EmbeddingClient, VectorStore, BASELINE_COLLECTION, PAPERS_COLLECTION};
use scout_report::ReportSynthesizer;
use scout_research::{
    ChatApi, ChatClient, CompetitorAgent, InvestmentAgent, KiprisClient, MarketAgent, PatentApi,
    PerformanceAgent, SearchApi, StartupExplorer, TavilyClient, TechnologyAgent,
};
use tokio::sync::RwLock;
use tracing::{info, instrument};

use crate::ReportStore;

/// Result of one exploration pass
#[derive(Debug, Clone)]
pub struct ExplorationRun {
    pub report_id: String,
    pub company: String,
    /// Per-agent results in pipeline order, final report appended last
    pub sections: Vec<AgentSummary>,
}

/// Orchestrates the explorer, the analysis agents and report synthesis
pub struct ExplorationService {
    explorer: StartupExplorer,
    performance: PerformanceAgent,
    competitor: CompetitorAgent,
    market: MarketAgent,
    technology: TechnologyAgent,
    investment: InvestmentAgent,
    synthesizer: ReportSynthesizer,
    chat: Arc<dyn ChatApi>,
    history: RwLock<Vec<String>>,
    reports: ReportStore,
}

impl ExplorationService {
    pub fn new(
        search: Arc<dyn SearchApi>,
        chat: Arc<dyn ChatApi>,
        patents: Arc<dyn PatentApi>,
        baseline: Arc<DocumentIndex>,
        papers: Arc<DocumentIndex>,
    ) -> Self {
        Self {
            explorer: StartupExplorer::new(search.clone(), chat.clone()),
            performance: PerformanceAgent::new(search.clone(), chat.clone()),
            competitor: CompetitorAgent::new(search.clone(), chat.clone()),
            market: MarketAgent::new(search, chat.clone()),
            technology: TechnologyAgent::new(patents, chat.clone(), papers),
            investment: InvestmentAgent::new(chat.clone(), baseline),
            synthesizer: ReportSynthesizer::new(chat.clone()),
            chat,
            history: RwLock::new(Vec::new()),
            reports: ReportStore::new(),
        }
    }

    /// Wire the service against the real external APIs
    ///
    /// Requires TAVILY_API_KEY, OPENAI_API_KEY and KIPRIS_API_KEY to be set.
    pub fn from_env(database_path: &str) -> Result<Self, ScoutError> {
        let search: Arc<dyn SearchApi> = Arc::new(TavilyClient::new()?);
        let chat: Arc<dyn ChatApi> = Arc::new(ChatClient::new()?);
        let patents: Arc<dyn PatentApi> = Arc::new(KiprisClient::new()?);

        let embedder = Arc::new(EmbeddingClient::from_env()?);
        let store = Arc::new(VectorStore::new(database_path)?);
        let baseline = Arc::new(DocumentIndex::new(
            embedder.clone(),
            store.clone(),
            BASELINE_COLLECTION,
        ));
        let papers = Arc::new(DocumentIndex::new(embedder, store, PAPERS_COLLECTION));

        Ok(Self::new(search, chat, patents, baseline, papers))
    }

    /// Chat handle for the ad-hoc question endpoint
    pub fn chat(&self) -> Arc<dyn ChatApi> {
        self.chat.clone()
    }

    pub fn performance_agent(&self) -> &PerformanceAgent {
        &self.performance
    }

    pub fn competitor_agent(&self) -> &CompetitorAgent {
        &self.competitor
    }

    pub fn reports(&self) -> &ReportStore {
        &self.reports
    }

    /// Companies already explored in this process
    pub async fn exploration_history(&self) -> Vec<String> {
        let history = self.history.read().await;
        history.clone()
    }

    /// Run one full exploration pass
    #[instrument(skip(self))]
    pub async fn explore_startup(&self) -> Result<ExplorationRun, ScoutError> {
        let excluded = self.exploration_history().await;
        let outcome = self.explorer.explore(&excluded).await?;
        info!(company = %outcome.name, "exploring startup");

        {
            let mut history = self.history.write().await;
            history.push(outcome.name.clone());
        }

        let mut sections = vec![one_entry(labels::EXPLORATION_SUMMARY, &outcome.profile)];

        // the four profile-driven agents are independent of each other
        let (performance, competitor, market, technology) = tokio::try_join!(
            self.performance.run(&outcome.profile),
            self.competitor.run(&outcome.profile),
            self.market.run(&outcome.profile),
            self.technology.run(&outcome.profile),
        )?;
        sections.push(performance);
        sections.push(competitor);
        sections.push(market);
        sections.push(technology);

        let judgement = self.investment.run(&sections).await?;
        sections.push(judgement);

        let report = self.synthesizer.synthesize(&sections).await?;
        let report_id = self.reports.insert(&report).await;
        info!(company = %outcome.name, report_id = %report_id, "exploration complete");

        sections.push(one_entry(labels::FINAL_REPORT, report));

        Ok(ExplorationRun {
            report_id,
            company: outcome.name,
            sections,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use futures::stream::{self, StreamExt};
    use scout_core::SearchResult;
    use scout_embedding::EmbeddingVector;
    use scout_research::{Patent, TokenStream};

    struct StubSearch;

    #[async_trait]
    impl SearchApi for StubSearch {
        async fn search(
            &self,
            query: &str,
            _max_results: u32,
        ) -> Result<Vec<SearchResult>, ScoutError> {
            Ok(vec![SearchResult {
                title: "검색 결과".to_string(),
                url: "https://example.com".to_string(),
                content: format!("{query}에 대한 기사 본문"),
            }])
        }
    }

    struct StubChat;

    #[async_trait]
    impl ChatApi for StubChat {
        async fn complete(&self, prompt: &str) -> Result<String, ScoutError> {
            if prompt.contains("회사명만 출력") {
                return Ok("뉴로보이스".to_string());
            }
            if prompt.contains("글 꾸밈 요소") {
                return Ok(
                    "1. 회사명: 뉴로보이스\n2. 설립일: 2022년\n3. 대표자: 김민준\n\
                     4. 산업분야: 음성 AI\n5. 홈페이지: https://neurovoice.kr\n\
                     6. 연락처: 찾을 수 없음\n7. 핵심 인력: 연구 인력 12명\n\
                     8. 주요 연혁: 2023년 시드 투자 유치"
                        .to_string(),
                );
            }
            Ok("분석 요약입니다.".to_string())
        }

        async fn complete_stream(&self, _prompt: &str) -> Result<TokenStream, ScoutError> {
            Ok(stream::iter(vec![Ok("분석".to_string())]).boxed())
        }
    }

    struct StubPatents;

    #[async_trait]
    impl PatentApi for StubPatents {
        async fn patents_by_applicant(&self, _applicant: &str) -> Result<Vec<Patent>, ScoutError> {
            Ok(Vec::new())
        }
    }

    struct StubEmbedder;

    #[async_trait]
    impl scout_embedding::EmbedApi for StubEmbedder {
        async fn embed(&self, text: &str) -> scout_embedding::Result<EmbeddingVector> {
            let mut vector = vec![0.0f32; 3];
            vector[text.len() % 3] = 1.0;
            Ok(vector)
        }
    }

    fn stub_service() -> ExplorationService {
        let store = Arc::new(VectorStore::new_in_memory().unwrap());
        let embedder = Arc::new(StubEmbedder);
        let baseline = Arc::new(DocumentIndex::new(
            embedder.clone(),
            store.clone(),
            BASELINE_COLLECTION,
        ));
        let papers = Arc::new(DocumentIndex::new(embedder, store, PAPERS_COLLECTION));

        ExplorationService::new(
            Arc::new(StubSearch),
            Arc::new(StubChat),
            Arc::new(StubPatents),
            baseline,
            papers,
        )
    }

    #[tokio::test]
    async fn test_explore_startup_produces_all_sections() {
        let service = stub_service();
        let run = service.explore_startup().await.unwrap();

        assert_eq!(run.company, "뉴로보이스");
        assert_eq!(run.sections.len(), 7);
        assert!(run.sections[0].contains_key(labels::EXPLORATION_SUMMARY));
        assert!(run.sections[1].contains_key(labels::PERFORMANCE_SUMMARY));
        assert!(run.sections[1].contains_key(labels::FOUNDER_SUMMARY));
        assert!(run.sections[2].contains_key(labels::COMPETITOR_LIST));
        assert!(run.sections[2].contains_key(labels::COMPETITOR_ANALYSIS));
        assert!(run.sections[3].contains_key(labels::MARKET_ANALYSIS));
        assert!(run.sections[4].contains_key(labels::TECH_SUMMARY));
        assert!(run.sections[5].contains_key(labels::INVESTMENT_JUDGEMENT));
        assert!(run.sections[6].contains_key(labels::FINAL_REPORT));
    }

    #[tokio::test]
    async fn test_explore_startup_stores_report_and_history() {
        let service = stub_service();
        let run = service.explore_startup().await.unwrap();

        assert_eq!(
            service.exploration_history().await,
            vec!["뉴로보이스".to_string()]
        );
        let stored = service.reports().get(&run.report_id).await.unwrap();
        assert_eq!(
            Some(stored.text.as_str()),
            service.reports().latest_text().await.as_deref()
        );
    }
}
