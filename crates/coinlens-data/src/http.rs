//! Shared HTTP plumbing for the REST clients.

use coinlens_core::error::DataError;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::sync::Mutex;
use std::time::Duration;
use tracing::{debug, warn};

use crate::cache::TtlCache;

/// Build `base/segment/segment?params`, percent-encoding each segment.
pub(crate) fn build_url(
    base_url: &str,
    segments: &[&str],
    params: &[(&str, String)],
) -> Result<Url, DataError> {
    let mut url =
        Url::parse(base_url).map_err(|e| DataError::Parse(format!("Invalid URL: {}", e)))?;
    url.path_segments_mut()
        .map_err(|_| DataError::Parse(format!("Invalid base URL: {}", base_url)))?
        .pop_if_empty()
        .extend(segments);
    if !params.is_empty() {
        url.query_pairs_mut().extend_pairs(params);
    }
    Ok(url)
}

/// GETs JSON documents, reusing response bodies for the cache lifetime.
pub(crate) struct JsonFetcher {
    client: Client,
    cache: Mutex<TtlCache<String, String>>,
}

impl JsonFetcher {
    pub(crate) fn new(timeout: Duration, cache_ttl: Duration) -> Result<Self, DataError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("coinlens/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DataError::Connection(e.to_string()))?;

        Ok(Self {
            client,
            cache: Mutex::new(TtlCache::new(cache_ttl)),
        })
    }

    fn cached(&self, key: &str) -> Option<String> {
        self.cache.lock().ok()?.get(&key.to_string())
    }

    pub(crate) fn store(&self, key: String, body: String) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.purge_expired();
            cache.insert(key, body);
        }
    }

    /// Fetch and decode `url`. Non-2xx responses become `DataError::Http`.
    ///
    /// `header` is sent with the request but is not part of the cache key.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        url: Url,
        header: Option<(&str, &str)>,
    ) -> Result<T, DataError> {
        let key = url.to_string();
        if let Some(body) = self.cached(&key) {
            debug!(url = %key, "Cache hit");
            return parse_body(&body);
        }

        debug!(url = %key, "GET");
        let mut request = self.client.get(url);
        if let Some((name, value)) = header {
            request = request.header(name, value);
        }
        let resp = request
            .send()
            .await
            .map_err(|e| DataError::Connection(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), url = %key, "Request failed");
            return Err(DataError::Http {
                status: status.as_u16(),
                message: text,
            });
        }

        let body = resp
            .text()
            .await
            .map_err(|e| DataError::Connection(e.to_string()))?;
        let value = parse_body(&body)?;
        self.store(key, body);
        Ok(value)
    }
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, DataError> {
    serde_json::from_str(body).map_err(|e| DataError::Parse(e.to_string()))
}
