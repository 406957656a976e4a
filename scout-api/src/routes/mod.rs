//! API route definitions

mod agents;
mod ask;
mod explore;
mod health;
mod report;

use axum::Router;
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Request body shared by the prompt-driven endpoints
#[derive(Debug, Deserialize)]
pub(crate) struct DataRequest {
    pub data: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ErrorResponse {
    pub error: String,
}

/// Create the /openai routes
pub fn openai_routes() -> Router<AppState> {
    Router::new()
        .merge(ask::routes())
        .merge(agents::routes())
        .merge(explore::routes())
        .merge(report::routes())
}

/// Create health routes
pub fn health_routes() -> Router<AppState> {
    health::routes()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum_test::TestServer;
    use futures::stream::{self, StreamExt};
    use scout_core::{labels, ScoutError, SearchResult};
    use scout_embedding::{
        DocumentIndex, EmbeddingVector, VectorStore, BASELINE_COLLECTION, PAPERS_COLLECTION,
    };
    use scout_report::PdfRenderer;
    use scout_research::{ChatApi, Patent, PatentApi, SearchApi, TokenStream};
    use scout_services::ExplorationService;
    use serde_json::{json, Value};

    use crate::AppState;

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
            let tokens = vec![Ok("안녕".to_string()), Ok("하세요".to_string())];
            Ok(stream::iter(tokens).boxed())
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

    fn bundled_font_dir() -> String {
        format!("{}/../assets/fonts", env!("CARGO_MANIFEST_DIR"))
    }

    fn test_server() -> (TestServer, Arc<ExplorationService>) {
        let store = Arc::new(VectorStore::new_in_memory().unwrap());
        let embedder = Arc::new(StubEmbedder);
        let baseline = Arc::new(DocumentIndex::new(
            embedder.clone(),
            store.clone(),
            BASELINE_COLLECTION,
        ));
        let papers = Arc::new(DocumentIndex::new(embedder, store, PAPERS_COLLECTION));

        let service = Arc::new(ExplorationService::new(
            Arc::new(StubSearch),
            Arc::new(StubChat),
            Arc::new(StubPatents),
            baseline,
            papers,
        ));
        let renderer = Arc::new(PdfRenderer::new(&bundled_font_dir(), "DejaVuSans").unwrap());
        let state = AppState {
            service: service.clone(),
            renderer,
        };

        let app = axum::Router::new()
            .nest("/openai", super::openai_routes())
            .merge(super::health_routes())
            .with_state(state);

        (TestServer::new(app).unwrap(), service)
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (server, _service) = test_server();
        let response = server.get("/health").await;
        response.assert_status_ok();
    }

    #[tokio::test]
    async fn test_ask_streams_tokens_and_done() {
        let (server, _service) = test_server();
        let response = server.post("/openai/ask").json(&json!({"data": "질문"})).await;

        response.assert_status_ok();
        let body = response.text();
        assert!(body.contains("data: 안녕"));
        assert!(body.contains("data: 하세요"));
        assert!(body.contains("data: [DONE]"));
    }

    #[tokio::test]
    async fn test_info_perform_returns_both_summaries() {
        let (server, _service) = test_server();
        let response = server
            .post("/openai/info_perform")
            .json(&json!({"data": "1. 회사명: 뉴로보이스\n3. 대표자: 김민준"}))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert!(body.get(labels::PERFORMANCE_SUMMARY).is_some());
        assert!(body.get(labels::FOUNDER_SUMMARY).is_some());
    }

    #[tokio::test]
    async fn test_competitor_compare_returns_list_and_analysis() {
        let (server, _service) = test_server();
        let response = server
            .post("/openai/competitor_compare")
            .json(&json!({"data": "1. 회사명: 뉴로보이스\n4. 산업분야: 음성 AI"}))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert!(body.get(labels::COMPETITOR_LIST).is_some());
        assert!(body.get(labels::COMPETITOR_ANALYSIS).is_some());
    }

    #[tokio::test]
    async fn test_explore_startup_returns_all_sections() {
        let (server, _service) = test_server();
        let response = server.get("/openai/explore_startup").await;

        response.assert_status_ok();
        let sections: Vec<Value> = response.json();
        assert_eq!(sections.len(), 7);
        assert!(sections[0].get(labels::EXPLORATION_SUMMARY).is_some());
        assert!(sections[5].get(labels::INVESTMENT_JUDGEMENT).is_some());
        assert!(sections[6].get(labels::FINAL_REPORT).is_some());
    }

    #[tokio::test]
    async fn test_download_report_without_any_report_is_bad_request() {
        let (server, _service) = test_server();
        let response = server
            .post("/openai/download_report")
            .json(&json!({"report_text": "짧은 본문"}))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert!(body.get("error").is_some());
    }

    #[tokio::test]
    async fn test_download_report_renders_supplied_text() {
        let (server, _service) = test_server();
        let report = "# Investment Report\n\n".to_string()
            + &"The company shows consistent revenue growth. ".repeat(4);

        let response = server
            .post("/openai/download_report")
            .json(&json!({"report_text": report}))
            .await;

        response.assert_status_ok();
        assert_eq!(response.header("content-type"), "application/pdf");
        assert!(response
            .header("content-disposition")
            .to_str()
            .unwrap()
            .contains("attachment"));
        assert!(response.as_bytes().starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_download_report_falls_back_to_latest_stored_report() {
        let (server, service) = test_server();
        let stored = "## Stored Report\n\n".to_string()
            + &"A previously synthesized investment review. ".repeat(4);
        service.reports().insert(stored).await;

        // body under the length threshold, posted under the legacy field name
        let response = server
            .post("/openai/download_report")
            .json(&json!({"data": "짧은 본문"}))
            .await;

        response.assert_status_ok();
        assert_eq!(response.header("content-type"), "application/pdf");
        assert!(response.as_bytes().starts_with(b"%PDF"));
    }
}
