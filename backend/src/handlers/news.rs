//! HTTP handlers for the agricultural news proxy

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::AppResult;
use crate::models::NewsPage;
use crate::AppState;

/// Default query when the caller does not supply one
const DEFAULT_QUERY: &str = "agriculture";

/// Query parameters for a news lookup
#[derive(Debug, Deserialize)]
pub struct NewsQuery {
    pub q: Option<String>,
    pub page: Option<String>,
}

/// Get a page of agricultural news
pub async fn get_news(
    State(state): State<AppState>,
    Query(query): Query<NewsQuery>,
) -> AppResult<Json<NewsPage>> {
    let q = query
        .q
        .as_deref()
        .filter(|q| !q.trim().is_empty())
        .unwrap_or(DEFAULT_QUERY);

    let page = state.news.latest(q, query.page.as_deref()).await?;
    Ok(Json(page))
}
