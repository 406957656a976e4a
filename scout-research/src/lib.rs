//! Research clients and analysis agents for the startup scout pipeline
//!
//! Holds the external API clients (Tavily web search, OpenAI chat, KIPRIS
//! patents), the startup explorer, profile field extraction, and the
//! per-domain analysis agents.

pub mod agents;
pub mod explorer;
pub mod extract;
pub mod kipris;
pub mod openai;
pub mod tavily;
pub mod types;

pub use agents::{
    CompetitorAgent, InvestmentAgent, MarketAgent, PerformanceAgent, TechnologyAgent,
};
pub use explorer::StartupExplorer;
pub use extract::{extract_fields, ExtractedFields};
pub use kipris::{KiprisClient, Patent, PatentApi};
pub use openai::{ChatApi, ChatClient, TokenStream};
pub use tavily::{SearchApi, TavilyClient};
pub use types::ExplorationOutcome;
