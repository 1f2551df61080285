//! Quote fetching from ZenQuotes
//!
//! Quotes are best-effort decoration. [`fetch_quotes`] never fails: a bulk
//! request is tried first, then single random quotes until the first error,
//! then the remainder is padded with [`FALLBACK_QUOTE`].

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

const USER_AGENT: &str = concat!("mmr-rs/", env!("CARGO_PKG_VERSION"));

/// Timeout for the bulk `/quotes` request
pub const BATCH_TIMEOUT: Duration = Duration::from_secs(10);
/// Timeout for each single `/random` request
pub const RANDOM_TIMEOUT: Duration = Duration::from_secs(5);

/// Used whenever the provider cannot supply enough quotes
pub const FALLBACK_QUOTE: &str = "The only way to do great work is to love what you do.";

/// Quote provider errors
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Network communication error
    #[error("Network error: {0}")]
    Network(String),

    /// Request exceeded its timeout
    #[error("Request timed out")]
    Timeout,

    /// Provider returned a non-success status
    #[error("API error {0}: {1}")]
    Api(u16, String),

    /// Failed to parse response JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// Provider answered with an empty list
    #[error("Provider returned no quotes")]
    Empty,
}

impl From<reqwest::Error> for QuoteError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            QuoteError::Timeout
        } else if e.is_decode() {
            QuoteError::Parse(e.to_string())
        } else {
            QuoteError::Network(e.to_string())
        }
    }
}

/// One element of a ZenQuotes response array
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Quote {
    /// Quote text
    #[serde(default = "Quote::missing_text")]
    pub q: String,
    /// Author
    #[serde(default = "Quote::missing_author")]
    pub a: String,
}

impl Quote {
    fn missing_text() -> String {
        "No quote found.".to_string()
    }

    fn missing_author() -> String {
        "Unknown".to_string()
    }

    /// `"<text>" - <author>`
    pub fn formatted(&self) -> String {
        format!("\"{}\" - {}", self.q, self.a)
    }
}

/// Source of quotes
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Bulk list of quotes (provider caps this at 50)
    async fn fetch_batch(&self) -> Result<Vec<Quote>, QuoteError>;

    /// One random quote
    async fn fetch_random(&self) -> Result<Quote, QuoteError>;
}

/// ZenQuotes HTTP client
pub struct ZenQuotesClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl ZenQuotesClient {
    /// Create a client for `base_url` (e.g. `https://zenquotes.io/api`)
    pub fn new(base_url: impl Into<String>) -> Result<Self, QuoteError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| QuoteError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_quotes(&self, endpoint: &str, timeout: Duration) -> Result<Vec<Quote>, QuoteError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(url = %url, "Querying ZenQuotes API");

        let response = self.http_client.get(&url).timeout(timeout).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(QuoteError::Api(status.as_u16(), error_text));
        }

        let quotes: Vec<Quote> = response.json().await?;
        Ok(quotes)
    }
}

#[async_trait]
impl QuoteProvider for ZenQuotesClient {
    async fn fetch_batch(&self) -> Result<Vec<Quote>, QuoteError> {
        self.get_quotes("quotes", BATCH_TIMEOUT).await
    }

    async fn fetch_random(&self) -> Result<Quote, QuoteError> {
        self.get_quotes("random", RANDOM_TIMEOUT)
            .await?
            .into_iter()
            .next()
            .ok_or(QuoteError::Empty)
    }
}

/// Fetch exactly `count` formatted quotes
///
/// 1. One bulk request; a failure counts as an empty batch.
/// 2. Single random requests until `count` is reached or one fails. An empty
///    answer counts as a failure.
/// 3. Pad with [`FALLBACK_QUOTE`].
pub async fn fetch_quotes(provider: &dyn QuoteProvider, count: usize) -> Vec<String> {
    if count == 0 {
        return Vec::new();
    }

    let mut quotes: Vec<String> = match provider.fetch_batch().await {
        Ok(batch) => batch.iter().take(count).map(Quote::formatted).collect(),
        Err(e) => {
            warn!(error = %e, "Error fetching quote batch");
            Vec::new()
        }
    };
    let from_batch = quotes.len();

    while quotes.len() < count {
        match provider.fetch_random().await {
            Ok(quote) => quotes.push(quote.formatted()),
            Err(e) => {
                warn!(error = %e, "Error fetching individual random quote");
                break;
            }
        }
    }
    let from_random = quotes.len() - from_batch;

    let padded = count - quotes.len();
    quotes.resize(count, FALLBACK_QUOTE.to_string());

    info!(count, from_batch, from_random, padded, "Quotes assembled");
    quotes
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Scripted provider: one batch result, then a queue of random results
    pub(crate) struct ScriptedProvider {
        batch: Mutex<Option<Result<Vec<Quote>, QuoteError>>>,
        randoms: Mutex<VecDeque<Result<Quote, QuoteError>>>,
        pub random_calls: Mutex<usize>,
    }

    impl ScriptedProvider {
        pub(crate) fn new(
            batch: Result<Vec<Quote>, QuoteError>,
            randoms: Vec<Result<Quote, QuoteError>>,
        ) -> Self {
            Self {
                batch: Mutex::new(Some(batch)),
                randoms: Mutex::new(randoms.into()),
                random_calls: Mutex::new(0),
            }
        }

        pub(crate) fn failing() -> Self {
            Self::new(Err(QuoteError::Timeout), vec![])
        }
    }

    #[async_trait]
    impl QuoteProvider for ScriptedProvider {
        async fn fetch_batch(&self) -> Result<Vec<Quote>, QuoteError> {
            self.batch
                .lock()
                .unwrap()
                .take()
                .unwrap_or(Err(QuoteError::Empty))
        }

        async fn fetch_random(&self) -> Result<Quote, QuoteError> {
            *self.random_calls.lock().unwrap() += 1;
            self.randoms
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(QuoteError::Network("script exhausted".to_string())))
        }
    }

    pub(crate) fn quote(q: &str, a: &str) -> Quote {
        Quote {
            q: q.to_string(),
            a: a.to_string(),
        }
    }

    #[test]
    fn test_quote_format() {
        assert_eq!(quote("Be.", "Lao Tzu").formatted(), "\"Be.\" - Lao Tzu");
    }

    #[test]
    fn test_quote_missing_fields_use_placeholders() {
        let parsed: Vec<Quote> = serde_json::from_str(r#"[{"h": "<blockquote/>"}, {"q": "Hi"}]"#).unwrap();
        assert_eq!(parsed[0].formatted(), "\"No quote found.\" - Unknown");
        assert_eq!(parsed[1].formatted(), "\"Hi\" - Unknown");
    }

    #[tokio::test]
    async fn test_total_failure_returns_fallbacks() {
        let provider = ScriptedProvider::failing();
        let quotes = fetch_quotes(&provider, 12).await;

        assert_eq!(quotes.len(), 12);
        assert!(quotes.iter().all(|q| q == FALLBACK_QUOTE));
        assert_eq!(*provider.random_calls.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_large_batch_is_truncated() {
        let batch = (0..50).map(|i| quote(&format!("q{}", i), "a")).collect();
        let provider = ScriptedProvider::new(Ok(batch), vec![]);
        let quotes = fetch_quotes(&provider, 12).await;

        assert_eq!(quotes.len(), 12);
        assert_eq!(quotes[0], "\"q0\" - a");
        assert_eq!(quotes[11], "\"q11\" - a");
        assert_eq!(*provider.random_calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_short_batch_topped_up_with_randoms() {
        let provider = ScriptedProvider::new(
            Ok(vec![quote("b1", "x")]),
            vec![Ok(quote("r1", "y")), Ok(quote("r2", "z"))],
        );
        let quotes = fetch_quotes(&provider, 3).await;

        assert_eq!(quotes, vec!["\"b1\" - x", "\"r1\" - y", "\"r2\" - z"]);
    }

    #[tokio::test]
    async fn test_first_random_failure_stops_and_pads() {
        let provider = ScriptedProvider::new(
            Err(QuoteError::Api(429, "Too Many Requests".to_string())),
            vec![
                Ok(quote("r1", "y")),
                Err(QuoteError::Network("reset".to_string())),
                Ok(quote("never", "used")),
            ],
        );
        let quotes = fetch_quotes(&provider, 4).await;

        assert_eq!(quotes.len(), 4);
        assert_eq!(quotes[0], "\"r1\" - y");
        assert!(quotes[1..].iter().all(|q| q == FALLBACK_QUOTE));
        assert_eq!(*provider.random_calls.lock().unwrap(), 2);
    }

    #[tokio::test]
    async fn test_empty_random_answer_stops_loop() {
        let provider = ScriptedProvider::new(
            Ok(vec![]),
            vec![Err(QuoteError::Empty), Ok(quote("never", "used"))],
        );
        let quotes = fetch_quotes(&provider, 2).await;

        assert_eq!(quotes, vec![FALLBACK_QUOTE, FALLBACK_QUOTE]);
        assert_eq!(*provider.random_calls.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_zero_count_skips_provider() {
        let provider = ScriptedProvider::failing();
        assert!(fetch_quotes(&provider, 0).await.is_empty());
        assert_eq!(*provider.random_calls.lock().unwrap(), 0);
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = ZenQuotesClient::new("http://localhost:9/api/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:9/api");
    }
}
