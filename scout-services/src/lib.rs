//! Orchestration layer for the startup scout pipeline
//!
//! This crate wires the research agents, embedding indexes and report
//! synthesis into the exploration service the HTTP layer exposes.

pub mod exploration_service;
pub mod report_store;

pub use exploration_service::{ExplorationRun, ExplorationService};
pub use report_store::{ReportStore, StoredReport};
