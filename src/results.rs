//! Search results shown on the page

use std::ops::Range;

use crate::suggest::SearchHit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultsStatus {
    /// No search submitted yet
    #[default]
    Idle,
    Searching,
    Loaded,
    Failed,
}

#[derive(Debug, Default)]
pub struct ResultsState {
    term: Option<String>,
    hits: Vec<SearchHit>,
    selected_index: Option<usize>,
    status: ResultsStatus,
}

impl ResultsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous hits and wait for `term`
    pub fn start(&mut self, term: &str) {
        self.term = Some(term.to_string());
        self.hits.clear();
        self.selected_index = None;
        self.status = ResultsStatus::Searching;
    }

    /// The first hit is selected when there is one
    pub fn set_hits(&mut self, hits: Vec<SearchHit>) {
        self.selected_index = (!hits.is_empty()).then_some(0);
        self.hits = hits;
        self.status = ResultsStatus::Loaded;
    }

    pub fn fail(&mut self) {
        self.hits.clear();
        self.selected_index = None;
        self.status = ResultsStatus::Failed;
    }

    pub fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    pub fn hits(&self) -> &[SearchHit] {
        &self.hits
    }

    pub fn status(&self) -> ResultsStatus {
        self.status
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn selected_hit(&self) -> Option<&SearchHit> {
        self.selected_index.and_then(|i| self.hits.get(i))
    }

    pub fn select_next(&mut self) {
        if self.hits.is_empty() {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(i) if i + 1 < self.hits.len() => i + 1,
            _ => 0,
        });
    }

    pub fn select_previous(&mut self) {
        if self.hits.is_empty() {
            return;
        }
        let last = self.hits.len() - 1;
        self.selected_index = Some(match self.selected_index {
            Some(0) | None => last,
            Some(i) => i - 1,
        });
    }

    /// Hits that fit in `capacity` rows, scrolled so the selection stays visible
    pub fn visible_range(&self, capacity: usize) -> Range<usize> {
        let count = self.hits.len().min(capacity);
        let start = match self.selected_index {
            Some(i) if i >= count => i + 1 - count,
            _ => 0,
        };
        start..start + count
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
