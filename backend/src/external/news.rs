//! News API client
//!
//! Proxies NewsData.io for agricultural news. Upstream responses are
//! normalized into `NewsArticle` with the same fallback chain the dashboard
//! relied on (missing title becomes "Untitled", and so on).

use reqwest::Client;
use serde::Deserialize;

use shared::models::{NewsArticle, NewsPage};

use crate::error::{AppError, AppResult};

/// News API client
#[derive(Clone)]
pub struct NewsClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// NewsData.io response
#[derive(Debug, Deserialize)]
struct NdResponse {
    status: Option<String>,
    message: Option<String>,
    #[serde(rename = "totalResults")]
    total_results: Option<u64>,
    #[serde(rename = "nextPage")]
    next_page: Option<String>,
    results: Option<Vec<NdArticle>>,
}

#[derive(Debug, Deserialize)]
struct NdArticle {
    title: Option<String>,
    description: Option<String>,
    content: Option<String>,
    source_id: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
    link: Option<String>,
    image_url: Option<String>,
}

impl NewsClient {
    /// Create a new NewsClient
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: "https://newsdata.io/api/1".to_string(),
        }
    }

    /// Create a new NewsClient with custom base URL (for testing)
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Fetch a page of news for a query
    pub async fn latest(&self, query: &str, page: Option<&str>) -> AppResult<NewsPage> {
        let mut params = vec![
            ("apikey", self.api_key.as_str()),
            ("q", query),
            ("country", "in"),
            ("language", "en"),
        ];
        if let Some(page) = page {
            params.push(("page", page));
        }

        let response = self
            .client
            .get(format!("{}/news", self.base_url))
            .query(&params)
            .send()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(format!("news: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalService(format!(
                "news API returned {}: {}",
                status, body
            )));
        }

        let data: NdResponse = response
            .json()
            .await
            .map_err(|e| AppError::ExternalService(format!("invalid news response: {}", e)))?;

        if data.status.as_deref() == Some("error") {
            let message = data.message.unwrap_or_else(|| "news API error".to_string());
            return Err(AppError::ExternalService(message));
        }

        let articles: Vec<NewsArticle> = data
            .results
            .unwrap_or_default()
            .into_iter()
            .map(normalize_article)
            .collect();

        Ok(NewsPage {
            total: data.total_results.unwrap_or(articles.len() as u64),
            next_page: data.next_page,
            page: 1,
            articles,
        })
    }
}

fn normalize_article(item: NdArticle) -> NewsArticle {
    NewsArticle {
        title: item.title.unwrap_or_else(|| "Untitled".to_string()),
        description: item.description.or(item.content).unwrap_or_default(),
        source: item
            .source_id
            .unwrap_or_else(|| "Unknown source".to_string()),
        published_at: item.pub_date,
        url: item.link.unwrap_or_else(|| "#".to_string()),
        image_url: item.image_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_applies_fallbacks() {
        let article = normalize_article(NdArticle {
            title: None,
            description: None,
            content: Some("body text".to_string()),
            source_id: None,
            pub_date: None,
            link: None,
            image_url: None,
        });

        assert_eq!(article.title, "Untitled");
        assert_eq!(article.description, "body text");
        assert_eq!(article.source, "Unknown source");
        assert_eq!(article.url, "#");
        assert!(article.published_at.is_none());
    }

    #[test]
    fn normalization_keeps_populated_fields() {
        let article = normalize_article(NdArticle {
            title: Some("Monsoon outlook".to_string()),
            description: Some("Early rains expected".to_string()),
            content: Some("ignored when description is present".to_string()),
            source_id: Some("agrinews".to_string()),
            pub_date: Some("2025-06-01 08:00:00".to_string()),
            link: Some("https://example.com/monsoon".to_string()),
            image_url: None,
        });

        assert_eq!(article.title, "Monsoon outlook");
        assert_eq!(article.description, "Early rains expected");
        assert_eq!(article.source, "agrinews");
        assert_eq!(article.url, "https://example.com/monsoon");
    }
}
