//! HTTP client for the suggest endpoint

use std::net::IpAddr;
use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::{Client, Url};

use super::types::{Suggestion, parse_suggest_body};
use super::SuggestError;

#[derive(Debug, Clone)]
pub struct SuggestClient {
    http: Client,
    endpoint: Url,
}

impl SuggestClient {
    /// Create a client for the given endpoint
    ///
    /// Loopback endpoints bypass any system proxy.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, SuggestError> {
        let (http, endpoint) = build_http(endpoint, timeout)?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// POST `term` as a form parameter and extract the completion options
    pub async fn fetch(&self, term: &str) -> Result<Vec<Suggestion>, SuggestError> {
        let body = post_term(&self.http, &self.endpoint, term).await?;
        parse_suggest_body(&body)
    }
}

/// Validate an elasticbook endpoint and build an HTTP client for it
pub(crate) fn build_http(endpoint: &str, timeout: Duration) -> Result<(Client, Url), SuggestError> {
    if endpoint.trim().is_empty() {
        return Err(SuggestError::NotConfigured("empty endpoint".to_string()));
    }

    let url = Url::parse(endpoint)
        .map_err(|e| SuggestError::NotConfigured(format!("{}: {}", endpoint, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(SuggestError::NotConfigured(format!(
            "unsupported scheme {}",
            url.scheme()
        )));
    }

    let mut builder = Client::builder().timeout(timeout);
    if is_loopback(&url) {
        builder = builder.no_proxy();
    }
    let http = builder
        .build()
        .map_err(|e| SuggestError::NotConfigured(e.to_string()))?;

    Ok((http, url))
}

/// POST a form-encoded `term` and return the body of a 2xx answer
pub(crate) async fn post_term(http: &Client, url: &Url, term: &str) -> Result<String, SuggestError> {
    let response = http
        .post(url.clone())
        .header(ACCEPT, "application/json")
        .form(&[("term", term)])
        .send()
        .await
        .map_err(|e| SuggestError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| SuggestError::Network(e.to_string()))?;

    if !status.is_success() {
        return Err(SuggestError::Api {
            code: status.as_u16(),
            message: body,
        });
    }

    Ok(body)
}

fn is_loopback(url: &Url) -> bool {
    let Some(host) = url.host_str() else {
        return false;
    };
    if host.eq_ignore_ascii_case("localhost") {
        return true;
    }
    host.trim_start_matches('[')
        .trim_end_matches(']')
        .parse::<IpAddr>()
        .is_ok_and(|ip| ip.is_loopback())
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
