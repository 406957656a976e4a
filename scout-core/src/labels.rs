//! Fixed Korean section labels shared by the agents, the report synthesizer
//! and the HTTP payloads. Consumers match on these exact strings, so they
//! live in one place.

/// Startup profile produced by the explorer
pub const EXPLORATION_SUMMARY: &str = "기업 정보 요약";

/// Company performance summary (funding, revenue, awards)
pub const PERFORMANCE_SUMMARY: &str = "기업 실적 요약";

/// Founder career summary
pub const FOUNDER_SUMMARY: &str = "창업자 정보 요약";

/// Competitor roster
pub const COMPETITOR_LIST: &str = "주요 경쟁사 목록";

/// Comparative competitor analysis
pub const COMPETITOR_ANALYSIS: &str = "경쟁사 비교 분석";

/// Market sizing and outlook analysis
pub const MARKET_ANALYSIS: &str = "시장성 종합 분석";

/// Patent and paper technology summary
pub const TECH_SUMMARY: &str = "기술 요약";

/// Investment judgment verdict
pub const INVESTMENT_JUDGEMENT: &str = "투자 판단 보고서";

/// Synthesized final report
pub const FINAL_REPORT: &str = "최종 보고서";

/// Substituted wherever an expected section is absent
pub const MISSING_INFO: &str = "정보 없음";

/// Sentinel the profile prompt instructs the model to emit for unknown fields
pub const NOT_FOUND_SENTINEL: &str = "찾을 수 없음";
