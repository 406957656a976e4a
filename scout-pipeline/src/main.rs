//! Seeding pipeline for the embedding store
//!
//! Fills the two collections the agents query at runtime: recent arXiv
//! papers for the technology agent and industry baseline notes for the
//! investment agent. Run this before starting the API server.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use scout_embedding::{
    DocumentIndex, EmbeddingClient, VectorStore, BASELINE_COLLECTION, PAPERS_COLLECTION,
};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const ARXIV_API_BASE: &str = "http://export.arxiv.org/api/query";

#[derive(Parser, Debug)]
struct Args {
    /// SQLite database the API server reads from
    #[arg(long, default_value = "data/scout.db")]
    db_path: PathBuf,
    /// Text file with one baseline note per line
    #[arg(long)]
    baseline_file: Option<PathBuf>,
    /// arXiv search expression for the papers collection
    #[arg(long, default_value = "cat:cs.AI")]
    arxiv_query: String,
    /// Number of papers to fetch from arXiv
    #[arg(long, default_value_t = 50)]
    max_results: usize,
    /// Skip the arXiv fetch and only load the baseline file
    #[arg(long, default_value_t = false)]
    skip_papers: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    run(args).await
}

async fn run(args: Args) -> Result<()> {
    if let Some(parent) = args.db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let embedder = Arc::new(EmbeddingClient::from_env().context("OPENAI_API_KEY must be set")?);
    let store = Arc::new(
        VectorStore::new(&args.db_path)
            .with_context(|| format!("failed to open {}", args.db_path.display()))?,
    );

    if let Some(path) = &args.baseline_file {
        let baseline = DocumentIndex::new(embedder.clone(), store.clone(), BASELINE_COLLECTION);
        let count = load_baseline(&baseline, path).await?;
        info!(count, "baseline notes indexed");
    } else {
        warn!("no --baseline-file given, baseline collection left untouched");
    }

    if !args.skip_papers {
        let papers = DocumentIndex::new(embedder, store, PAPERS_COLLECTION);
        let count = load_arxiv_papers(&papers, &args.arxiv_query, args.max_results).await?;
        info!(count, query = %args.arxiv_query, "arxiv papers indexed");
    }

    Ok(())
}

/// Index one document per non-empty line of the baseline file
async fn load_baseline(index: &DocumentIndex, path: &PathBuf) -> Result<usize> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let mut count = 0usize;
    for (i, line) in content.lines().enumerate() {
        let note = line.trim();
        if note.is_empty() {
            continue;
        }
        index
            .add(&format!("baseline-{i}"), note)
            .await
            .with_context(|| format!("failed to index baseline line {i}"))?;
        count += 1;
    }

    Ok(count)
}

/// Fetch recent papers from the arXiv Atom API and index title plus abstract
async fn load_arxiv_papers(
    index: &DocumentIndex,
    query: &str,
    max_results: usize,
) -> Result<usize> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()?;

    let max_results = max_results.to_string();
    let response = client
        .get(ARXIV_API_BASE)
        .query(&[
            ("search_query", query),
            ("start", "0"),
            ("max_results", max_results.as_str()),
            ("sortBy", "submittedDate"),
            ("sortOrder", "descending"),
        ])
        .send()
        .await
        .context("arxiv request failed")?;

    if !response.status().is_success() {
        anyhow::bail!("arxiv returned status {}", response.status());
    }

    let content = response.bytes().await?;
    let feed = atom_syndication::Feed::read_from(&content[..]).context("invalid atom feed")?;

    let mut count = 0usize;
    for entry in feed.entries() {
        let title = entry.title().to_string();
        let summary = entry.summary().map(|s| s.as_str()).unwrap_or_default();
        if title.is_empty() && summary.is_empty() {
            continue;
        }

        let document = format!("{}\n{}", title.trim(), summary.trim());
        index
            .add(entry.id(), &document)
            .await
            .with_context(|| format!("failed to index {}", entry.id()))?;
        count += 1;
    }

    Ok(count)
}
