//! Search command handlers.
//!
//! Raw retrieval against the service, without answer generation.

use clap::Args;
use lexask_api::{create_client, AskApi, BatchSearchQuery, SearchHit, SearchQuery};
use lexask_core::{config::AppConfig, AppResult};

/// Retrieve reference passages for a query
#[derive(Args, Debug)]
pub struct SearchCommand {
    /// The search query
    pub query: String,

    /// Number of passages to return (service default if unset)
    #[arg(short = 'k', long)]
    pub top_k: Option<u32>,

    /// Minimum similarity score (service default if unset)
    #[arg(long)]
    pub min_score: Option<f64>,

    /// Include stored passage metadata
    #[arg(long)]
    pub metadata: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl SearchCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing search command");
        tracing::debug!("Search options: {:?}", self);

        let mut query = SearchQuery::new(self.query.trim());
        if let Some(top_k) = self.top_k {
            query = query.with_top_k(top_k);
        }
        if let Some(min_score) = self.min_score {
            query = query.with_min_score(min_score);
        }
        if self.metadata {
            query = query.with_metadata();
        }

        let api = create_client(config)?;
        let response = api.search(&query).await?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&response)?);
        } else {
            print!("{}", render_hits(&response.results));
        }

        Ok(())
    }
}

/// Retrieve reference passages for several queries
#[derive(Args, Debug)]
pub struct BatchSearchCommand {
    /// The search queries
    #[arg(required = true)]
    pub queries: Vec<String>,

    /// Number of passages per query (service default if unset)
    #[arg(short = 'k', long)]
    pub top_k: Option<u32>,

    /// Minimum similarity score (service default if unset)
    #[arg(long)]
    pub min_score: Option<f64>,

    /// Include stored passage metadata
    #[arg(long)]
    pub metadata: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl BatchSearchCommand {
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing batch-search command");
        tracing::debug!("Batch search options: {:?}", self);

        let mut query = BatchSearchQuery::new(self.queries.clone());
        if let Some(top_k) = self.top_k {
            query = query.with_top_k(top_k);
        }
        if let Some(min_score) = self.min_score {
            query = query.with_min_score(min_score);
        }
        if self.metadata {
            query = query.with_metadata();
        }

        let api = create_client(config)?;
        let response = api.batch_search(&query).await?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&response)?);
            return Ok(());
        }

        print!("{}", render_batch(&self.queries, &response.results));

        Ok(())
    }
}

/// Plain-text listing of batch results, one section per query.
///
/// A query the service returned no list for is shown with no hits.
fn render_batch(queries: &[String], results: &[Vec<SearchHit>]) -> String {
    if queries.len() != results.len() {
        tracing::warn!(
            "Service returned {} result lists for {} queries",
            results.len(),
            queries.len()
        );
    }

    queries
        .iter()
        .enumerate()
        .map(|(i, query)| {
            let hits = results.get(i).map(Vec::as_slice).unwrap_or(&[]);
            format!("== {}\n{}", query, render_hits(hits))
        })
        .collect()
}

/// Plain-text listing of search hits.
fn render_hits(hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return "未找到相关文档\n".to_string();
    }

    hits.iter()
        .map(|hit| {
            let mut block = format!("[{}] 相关度: {}\n{}\n", hit.rank, hit.score, hit.text);
            if let Some(metadata) = &hit.metadata {
                block.push_str(&format!("元数据: {}\n", metadata));
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n")
}
