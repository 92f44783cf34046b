//! Bookmark search against the elasticbook search endpoint
//!
//! The service answers with the map its results page is built from:
//! `{"show": true, "results": [{"Index", "URL", "Title", "DateAdded", "Score"}]}`.
//! `results` is null when nothing matched.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;

use super::SuggestError;
use super::client::{build_http, post_term};

#[derive(Debug, Deserialize)]
struct SearchBody {
    #[serde(default)]
    results: Option<Vec<ResultEntry>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ResultEntry {
    #[serde(rename = "URL", default)]
    url: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    date_added: String,
    #[serde(default)]
    score: f64,
}

/// One bookmark matching a search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub date_added: String,
    pub score: f64,
}

impl SearchHit {
    /// Title, or the URL for untitled bookmarks
    pub fn label(&self) -> &str {
        if self.title.trim().is_empty() {
            &self.url
        } else {
            &self.title
        }
    }
}

/// Extract the hits in service order
///
/// Entries without a URL are bookmarks the service could not decode; they
/// are skipped.
pub fn parse_search_body(body: &str) -> Result<Vec<SearchHit>, SuggestError> {
    let parsed: SearchBody =
        serde_json::from_str(body).map_err(|e| SuggestError::Malformed(e.to_string()))?;

    Ok(parsed
        .results
        .unwrap_or_default()
        .into_iter()
        .filter(|entry| !entry.url.is_empty())
        .map(|entry| SearchHit {
            title: entry.title,
            url: entry.url,
            date_added: entry.date_added,
            score: entry.score,
        })
        .collect())
}

#[derive(Debug, Clone)]
pub struct SearchClient {
    http: Client,
    endpoint: Url,
}

impl SearchClient {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, SuggestError> {
        let (http, endpoint) = build_http(endpoint, timeout)?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// POST `term` as a form parameter and collect the matching bookmarks
    pub async fn search(&self, term: &str) -> Result<Vec<SearchHit>, SuggestError> {
        let body = post_term(&self.http, &self.endpoint, term).await?;
        parse_search_body(&body)
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
