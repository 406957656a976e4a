//! Per-domain analysis agents
//!
//! Each agent takes the explorer's profile text (or, for investment
//! judgment, the other agents' output), gathers its own evidence, and
//! returns a labeled `AgentSummary`.

pub mod competitor;
pub mod investment;
pub mod market;
pub mod performance;
pub mod technology;

pub use competitor::CompetitorAgent;
pub use investment::InvestmentAgent;
pub use market::MarketAgent;
pub use performance::PerformanceAgent;
pub use technology::TechnologyAgent;
