//! NewsAPI client for coin headlines.

use coinlens_core::error::DataError;
use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::http::{build_url, JsonFetcher};

/// NewsAPI v2 root.
pub const DEFAULT_NEWS_URL: &str = "https://newsapi.org/v2";

/// A single article from the `everything` endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewsArticle {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub source: Option<NewsSource>,
    #[serde(default, rename = "publishedAt")]
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewsSource {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ArticlesResponse {
    #[serde(default)]
    articles: Vec<NewsArticle>,
}

/// Searches recent English-language articles about a coin.
///
/// The API key travels in the `X-Api-Key` header, so it never shows up in
/// request URLs, cache keys or logs.
pub struct NewsClient {
    fetcher: JsonFetcher,
    base_url: String,
    api_key: String,
}

impl NewsClient {
    pub fn new(
        base_url: &str,
        api_key: &str,
        timeout: Duration,
        cache_ttl: Duration,
    ) -> Result<Self, DataError> {
        Ok(Self {
            fetcher: JsonFetcher::new(timeout, cache_ttl)?,
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn url(&self, query: &str, max_articles: usize) -> Result<Url, DataError> {
        build_url(
            &self.base_url,
            &["everything"],
            &[
                ("q", query.to_string()),
                ("language", "en".to_string()),
                ("sortBy", "publishedAt".to_string()),
                ("pageSize", max_articles.to_string()),
            ],
        )
    }

    /// Newest articles matching `query`, at most `max_articles` of them.
    pub async fn articles(
        &self,
        query: &str,
        max_articles: usize,
    ) -> Result<Vec<NewsArticle>, DataError> {
        let url = self.url(query, max_articles)?;
        let response: ArticlesResponse = self
            .fetcher
            .get(url, Some(("X-Api-Key", self.api_key.as_str())))
            .await?;

        let mut articles = response.articles;
        articles.truncate(max_articles);
        debug!(query, count = articles.len(), "Fetched news");
        Ok(articles)
    }

    /// Titles of the newest articles, skipping untitled ones.
    pub async fn headlines(
        &self,
        query: &str,
        max_articles: usize,
    ) -> Result<Vec<String>, DataError> {
        let articles = self.articles(query, max_articles).await?;
        Ok(articles
            .into_iter()
            .filter_map(|a| a.title)
            .filter(|t| !t.trim().is_empty())
            .collect())
    }
}
