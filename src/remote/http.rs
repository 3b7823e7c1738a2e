use crate::{domain::BoardSnapshot, error::Result, remote::BoardSource};
use async_trait::async_trait;

/// Endpoint the hosted board data lives at
pub const DEFAULT_ENDPOINT: &str = "https://api.quicksell.co/v1/internal/frontend-assignment";

/// HTTP implementation of [`BoardSource`]
///
/// One unauthenticated GET returning the full board document; no
/// pagination, no request parameters, no retry policy.
pub struct HttpBoardSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpBoardSource {
    /// Creates a source reading from the given endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// Creates a source with a caller-supplied client
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpBoardSource {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl BoardSource for HttpBoardSource {
    async fn fetch_board(&self) -> Result<BoardSnapshot> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?;

        let snapshot = response.json::<BoardSnapshot>().await?;
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_source_uses_fixed_endpoint() {
        let source = HttpBoardSource::default();
        assert_eq!(source.endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_custom_endpoint() {
        let source = HttpBoardSource::new("http://localhost:9999/board");
        assert_eq!(source.endpoint(), "http://localhost:9999/board");
    }
}
