//! Suggest and search endpoint integration
//!
//! The UI thread talks to a background worker over channels; the worker owns
//! the HTTP clients and runs every fetch as a cancellable task.

pub mod client;
pub mod search;
pub mod suggest_state;
pub mod types;
pub mod worker;

use thiserror::Error;

pub use client::SuggestClient;
pub use search::{SearchClient, SearchHit, parse_search_body};
pub use suggest_state::{SuggestOutcome, SuggestState};
pub use types::{Suggestion, parse_suggest_body};
pub use worker::spawn_worker;

/// Errors that can occur while fetching suggestions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestError {
    /// Endpoint is missing or not a valid URL
    #[error("Suggest endpoint not configured: {0}")]
    NotConfigured(String),

    /// Transport failure (connection refused, timeout, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// Suggest service answered with a non-success status
    #[error("Suggest service error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Body is not `{ completion: [ { options: [ { text } ] } ] }`
    #[error("Malformed suggest response: {0}")]
    Malformed(String),

    #[error("Request cancelled")]
    Cancelled,
}

/// Request messages sent to the suggest worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestRequest {
    Query {
        term: String,
        /// Unique ID for this request, used to filter stale responses
        request_id: u64,
    },
    /// Fetch the results page for a submitted term
    Search {
        term: String,
        request_id: u64,
    },
    Cancel {
        request_id: u64,
    },
}

/// Response messages received from the suggest worker
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestResponse {
    Suggestions {
        request_id: u64,
        term: String,
        suggestions: Vec<Suggestion>,
    },
    Results {
        request_id: u64,
        term: String,
        hits: Vec<SearchHit>,
    },
    Failed {
        request_id: u64,
        error: String,
    },
    Cancelled {
        request_id: u64,
    },
}

impl SuggestResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            SuggestResponse::Suggestions { request_id, .. }
            | SuggestResponse::Results { request_id, .. }
            | SuggestResponse::Failed { request_id, .. }
            | SuggestResponse::Cancelled { request_id } => *request_id,
        }
    }
}
