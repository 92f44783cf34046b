//! Suggest response wire format
//!
//! The service answers `{"completion": [{"options": [{"text": ...}]}]}`
//! alongside `phrase` and `term` suggester blocks, which are ignored here.

use std::fmt;

use serde::Deserialize;

use super::SuggestError;

#[derive(Debug, Deserialize)]
struct SuggestBody {
    #[serde(default)]
    completion: Option<Vec<CompletionBlock>>,
}

#[derive(Debug, Deserialize)]
struct CompletionBlock {
    options: Vec<CompletionOption>,
}

#[derive(Debug, Deserialize)]
struct CompletionOption {
    text: String,
}

/// A display string shown in the dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub text: String,
}

impl Suggestion {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Extract the first completion block's option texts, in order
pub fn parse_suggest_body(body: &str) -> Result<Vec<Suggestion>, SuggestError> {
    let parsed: SuggestBody =
        serde_json::from_str(body).map_err(|e| SuggestError::Malformed(e.to_string()))?;

    let block = parsed
        .completion
        .and_then(|blocks| blocks.into_iter().next())
        .ok_or_else(|| SuggestError::Malformed("no completion block".to_string()))?;

    Ok(block
        .options
        .into_iter()
        .map(|option| Suggestion::new(option.text))
        .collect())
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
