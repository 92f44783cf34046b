//! Suggest request bookkeeping on the UI thread
//!
//! Tracks the request id counter and the in-flight requests so that only the
//! newest fetch of each kind can reach the autocomplete widget or the results
//! page. Suggest and search requests share the id counter.

use std::sync::mpsc::{Receiver, TryRecvError};

use tokio::sync::mpsc::UnboundedSender;

use super::{SearchHit, SuggestRequest, SuggestResponse};

/// Result of a current request, as seen by the UI
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestOutcome {
    /// Candidate texts in service order
    Suggestions(Vec<String>),
    /// Already logged; nothing to render
    Failed,
    Results(Vec<SearchHit>),
    SearchFailed,
}

#[derive(Debug, Default)]
pub struct SuggestState {
    /// Channel to send requests to the worker thread
    pub request_tx: Option<UnboundedSender<SuggestRequest>>,
    /// Channel to receive responses from the worker thread
    pub response_rx: Option<Receiver<SuggestResponse>>,
    /// Incremented for each new request
    pub request_id: u64,
    /// Only a response carrying this id is accepted
    pub in_flight_request_id: Option<u64>,
    /// Term of the most recent request
    pub last_term: Option<String>,
    /// Only a results response carrying this id is accepted
    pub in_flight_search_id: Option<u64>,
}

impl SuggestState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_channels(
        &mut self,
        request_tx: UnboundedSender<SuggestRequest>,
        response_rx: Receiver<SuggestResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn is_connected(&self) -> bool {
        self.request_tx.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight_request_id.is_some()
    }

    pub fn is_searching(&self) -> bool {
        self.in_flight_search_id.is_some()
    }

    pub fn current_request_id(&self) -> u64 {
        self.request_id
    }

    /// Send a fetch for `term`, cancelling whatever is still in flight
    ///
    /// Returns false when no worker is connected or the worker is gone.
    pub fn send_request(&mut self, term: String) -> bool {
        if self.request_tx.is_none() {
            return false;
        }

        self.cancel_in_flight_request();
        self.request_id = self.request_id.wrapping_add(1);
        let request_id = self.request_id;
        self.last_term = Some(term.clone());

        if let Some(ref tx) = self.request_tx
            && tx.send(SuggestRequest::Query { term, request_id }).is_ok()
        {
            self.in_flight_request_id = Some(request_id);
            log::debug!("Sent suggest request {}", request_id);
            return true;
        }

        log::warn!("Suggest worker unavailable, dropping request {}", request_id);
        false
    }

    /// Request the results page for `term`, cancelling any earlier search
    pub fn send_search(&mut self, term: String) -> bool {
        if self.request_tx.is_none() {
            return false;
        }

        self.cancel_in_flight_search();
        self.request_id = self.request_id.wrapping_add(1);
        let request_id = self.request_id;

        if let Some(ref tx) = self.request_tx
            && tx.send(SuggestRequest::Search { term, request_id }).is_ok()
        {
            self.in_flight_search_id = Some(request_id);
            log::debug!("Sent search request {}", request_id);
            return true;
        }

        log::warn!("Suggest worker unavailable, dropping search {}", request_id);
        false
    }

    /// Returns true if a cancel was sent
    pub fn cancel_in_flight_request(&mut self) -> bool {
        let request_id = self.in_flight_request_id.take();
        self.send_cancel(request_id)
    }

    pub fn cancel_in_flight_search(&mut self) -> bool {
        let request_id = self.in_flight_search_id.take();
        self.send_cancel(request_id)
    }

    fn send_cancel(&self, request_id: Option<u64>) -> bool {
        if let Some(request_id) = request_id
            && let Some(ref tx) = self.request_tx
            && tx.send(SuggestRequest::Cancel { request_id }).is_ok()
        {
            log::debug!("Sent cancel for request {}", request_id);
            return true;
        }
        false
    }

    /// Read pending responses without blocking
    ///
    /// Responses for anything but an in-flight request are stale and
    /// dropped. Returns the first in-flight outcome that arrived; call again
    /// until `None` to drain the channel.
    pub fn poll_response(&mut self) -> Option<SuggestOutcome> {
        loop {
            let Some(ref rx) = self.response_rx else {
                return None;
            };
            let response = match rx.try_recv() {
                Ok(response) => response,
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Disconnected) => {
                    log::warn!("Suggest worker disconnected");
                    self.response_rx = None;
                    self.request_tx = None;
                    self.in_flight_request_id = None;
                    self.in_flight_search_id = None;
                    return None;
                }
            };

            let request_id = response.request_id();
            let is_search = self.in_flight_search_id == Some(request_id);
            if is_search {
                self.in_flight_search_id = None;
            } else if self.in_flight_request_id == Some(request_id) {
                self.in_flight_request_id = None;
            } else {
                log::debug!(
                    "Discarding stale response for request {} (current: {})",
                    request_id,
                    self.request_id
                );
                continue;
            }

            match response {
                SuggestResponse::Suggestions { suggestions, .. } => {
                    return Some(SuggestOutcome::Suggestions(
                        suggestions.into_iter().map(|s| s.text).collect(),
                    ));
                }
                SuggestResponse::Results { hits, .. } => {
                    return Some(SuggestOutcome::Results(hits));
                }
                SuggestResponse::Failed { error, .. } if is_search => {
                    log::warn!("Search unavailable: {}", error);
                    return Some(SuggestOutcome::SearchFailed);
                }
                SuggestResponse::Failed { error, .. } => {
                    log::warn!("Suggestions unavailable: {}", error);
                    return Some(SuggestOutcome::Failed);
                }
                SuggestResponse::Cancelled { .. } => {}
            }
        }
    }
}

#[cfg(test)]
#[path = "suggest_state_tests.rs"]
mod suggest_state_tests;
