use async_trait::async_trait;
use thiserror::Error;

/// Failure surfaced by the raw database handle. Store-level code maps
/// this into its own error vocabulary; only the readiness probe sees it
/// directly.
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database connection failed: {0}")]
    Connection(String),

    #[error("database query failed: {0}")]
    Query(String),
}

/// Minimal raw-query surface over the backing store, used for probe
/// queries. Typed access goes through the stores, never through this.
#[async_trait]
pub trait Database: Send + Sync {
    async fn execute(&self, query: &str) -> Result<u64, DatabaseError>;
}
