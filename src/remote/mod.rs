use crate::domain::BoardSnapshot;
use crate::error::Result;
use async_trait::async_trait;
use tracing::warn;

#[cfg(feature = "http-source")]
pub mod http;

#[cfg(feature = "http-source")]
pub use http::HttpBoardSource;

/// Source of board data: a single read delivering tickets and users
/// together, so the engine never observes a partially populated dataset
#[async_trait]
pub trait BoardSource: Send + Sync {
    /// Fetches the current board snapshot
    async fn fetch_board(&self) -> Result<BoardSnapshot>;
}

/// Fetches the board, degrading to the empty dataset on failure
///
/// Failures are logged, not surfaced; downstream code operates on zero
/// tickets and zero users without special-casing.
pub async fn fetch_board_or_empty(source: &dyn BoardSource) -> BoardSnapshot {
    match source.fetch_board().await {
        Ok(snapshot) => snapshot,
        Err(err) => {
            warn!("board fetch failed, rendering empty dataset: {err}");
            BoardSnapshot::default()
        }
    }
}
