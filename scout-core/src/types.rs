use std::collections::HashMap;

/// Labeled text sections produced by one analysis agent
pub type AgentSummary = HashMap<String, String>;

/// Build a single-section summary
pub fn one_entry(label: &str, text: impl Into<String>) -> AgentSummary {
    let mut summary = AgentSummary::new();
    summary.insert(label.to_string(), text.into());
    summary
}
