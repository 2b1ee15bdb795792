use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::digest::HashRange;
use crate::error::LookupError;

pub const DEFAULT_API_URL: &str = "https://api.pwnedpasswords.com";

/// Remote k-anonymity range query.
///
/// Implementations only ever see the 5-character hash prefix; matching the
/// suffix happens locally in [`breach_count`].
#[async_trait]
pub trait BreachLookup: Send + Sync {
    /// Fetch the raw `SUFFIX:COUNT` listing for every hash starting with `prefix`.
    async fn fetch_range(&self, prefix: &str) -> Result<String, LookupError>;
}

/// Look up how often the hash behind `range` appears in the breach corpus.
pub async fn breach_count(
    lookup: &dyn BreachLookup,
    range: &HashRange,
) -> Result<u64, LookupError> {
    let body = lookup.fetch_range(&range.prefix).await?;
    find_suffix_count(&body, &range.suffix)
}

/// Scan a range response for `suffix` and return its count, or 0 if absent.
///
/// Lines without a `:` are skipped. Trailing `\r` and whitespace are ignored.
/// Padding entries carry a count of 0 and are therefore reported as not found.
pub fn find_suffix_count(body: &str, suffix: &str) -> Result<u64, LookupError> {
    for line in body.lines() {
        let Some((hash_suffix, count)) = line.trim().split_once(':') else {
            continue;
        };
        if hash_suffix != suffix {
            continue;
        }
        return count
            .trim()
            .parse::<u64>()
            .map_err(|_| LookupError::MalformedCount {
                line: line.trim().to_string(),
            });
    }
    Ok(0)
}

/// HTTP client for the Pwned Passwords range API.
#[derive(Debug, Clone)]
pub struct PwnedPasswordsClient {
    client: Client,
    base_url: String,
    add_padding: bool,
}

impl PwnedPasswordsClient {
    /// Build a client with a whole-request `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(LookupError::Request)?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            add_padding: false,
        })
    }

    /// Ask the API to pad responses with zero-count decoy suffixes.
    pub fn with_padding(mut self, add_padding: bool) -> Self {
        self.add_padding = add_padding;
        self
    }

    pub fn range_url(&self, prefix: &str) -> String {
        format!("{}/range/{}", self.base_url, prefix)
    }
}

#[async_trait]
impl BreachLookup for PwnedPasswordsClient {
    async fn fetch_range(&self, prefix: &str) -> Result<String, LookupError> {
        let mut request = self.client.get(self.range_url(prefix));
        if self.add_padding {
            request = request.header("Add-Padding", "true");
        }

        let response = request.send().await?.error_for_status()?;
        let body = response.text().await?;
        tracing::debug!(prefix, bytes = body.len(), "fetched breach range");
        Ok(body)
    }
}
