//! Agricultural news models

use serde::{Deserialize, Serialize};

/// A normalized news article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    pub description: String,
    pub source: String,
    pub published_at: Option<String>,
    pub url: String,
    pub image_url: Option<String>,
}

/// A page of news results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsPage {
    pub articles: Vec<NewsArticle>,
    pub total: u64,
    pub next_page: Option<String>,
    pub page: u32,
}
