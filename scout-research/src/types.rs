use serde::{Deserialize, Serialize};

/// Result of one explorer run: the selected company and its profile text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorationOutcome {
    /// Company name as emitted by the selection prompt
    pub name: String,
    /// Numbered-field profile collected for the company
    pub profile: String,
}
