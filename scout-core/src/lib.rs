//! Shared types for the startup scout pipeline

pub mod error;
pub mod labels;
pub mod search;
pub mod types;

pub use error::{ScoutError, ScoutResult};
pub use search::{format_results, SearchResult};
pub use types::{one_entry, AgentSummary};
