//! Suggest worker thread
//!
//! Receives requests over a tokio channel, runs each fetch as a task on a
//! current-thread runtime, and sends outcomes back over a std channel that
//! the UI thread polls without blocking.

use std::future::Future;
use std::sync::mpsc::Sender;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio_util::sync::CancellationToken;

use super::client::SuggestClient;
use super::search::SearchClient;
use super::{SuggestError, SuggestRequest, SuggestResponse};
use crate::config::Config;

type InFlight = Option<(u64, CancellationToken)>;

/// Spawn the suggest worker thread
///
/// The thread exits once every request sender has been dropped.
pub fn spawn_worker(
    config: &Config,
    request_rx: UnboundedReceiver<SuggestRequest>,
    response_tx: Sender<SuggestResponse>,
) -> std::thread::JoinHandle<()> {
    let suggest = if config.suggest.enabled {
        SuggestClient::new(
            &config.suggest.endpoint,
            Duration::from_millis(config.suggest.timeout_ms),
        )
    } else {
        Err(SuggestError::NotConfigured("suggest disabled".to_string()))
    };
    let search = if config.search.enabled {
        SearchClient::new(
            &config.search.endpoint,
            Duration::from_millis(config.search.timeout_ms),
        )
    } else {
        Err(SuggestError::NotConfigured("search disabled".to_string()))
    };

    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(e) => {
                log::error!("Failed to start suggest runtime: {}", e);
                return;
            }
        };
        runtime.block_on(worker_loop(suggest, search, request_rx, response_tx));
    })
}

/// Main worker loop - processes requests until the channel is closed
async fn worker_loop(
    suggest: Result<SuggestClient, SuggestError>,
    search: Result<SearchClient, SuggestError>,
    mut request_rx: UnboundedReceiver<SuggestRequest>,
    response_tx: Sender<SuggestResponse>,
) {
    // Wait for a request before reporting unusable clients
    let suggest = match suggest {
        Ok(client) => {
            log::info!("Suggest worker ready for {}", client.endpoint());
            Some(client)
        }
        Err(e) => {
            log::warn!("{}", e);
            None
        }
    };
    let search = match search {
        Ok(client) => {
            log::info!("Search ready for {}", client.endpoint());
            Some(client)
        }
        Err(e) => {
            log::warn!("{}", e);
            None
        }
    };

    // Only the latest fetch of each kind can be cancelled; older ones are
    // filtered by id on the UI side
    let mut in_flight_query: InFlight = None;
    let mut in_flight_search: InFlight = None;

    while let Some(request) = request_rx.recv().await {
        match request {
            SuggestRequest::Query { term, request_id } => {
                let Some(client) = suggest.clone() else {
                    log::debug!("suggest request {} completed without endpoint", request_id);
                    let _ = response_tx.send(SuggestResponse::Failed {
                        request_id,
                        error: "suggest endpoint not configured".to_string(),
                    });
                    continue;
                };

                let cancel_token = CancellationToken::new();
                in_flight_query = Some((request_id, cancel_token.clone()));
                let response_tx = response_tx.clone();
                tokio::spawn(async move {
                    handle_query(client, term, request_id, cancel_token, response_tx).await;
                });
            }
            SuggestRequest::Search { term, request_id } => {
                let Some(client) = search.clone() else {
                    log::debug!("search request {} completed without endpoint", request_id);
                    let _ = response_tx.send(SuggestResponse::Failed {
                        request_id,
                        error: "search endpoint not configured".to_string(),
                    });
                    continue;
                };

                let cancel_token = CancellationToken::new();
                in_flight_search = Some((request_id, cancel_token.clone()));
                let response_tx = response_tx.clone();
                tokio::spawn(async move {
                    handle_search(client, term, request_id, cancel_token, response_tx).await;
                });
            }
            SuggestRequest::Cancel { request_id } => {
                let token = take_matching(&mut in_flight_query, request_id)
                    .or_else(|| take_matching(&mut in_flight_search, request_id));
                match token {
                    // The task itself reports Cancelled
                    Some(token) => token.cancel(),
                    None => {
                        log::debug!("Cancel for request {} with nothing in flight", request_id);
                        let _ = response_tx.send(SuggestResponse::Cancelled { request_id });
                    }
                }
            }
        }
    }

    log::debug!("Suggest worker shutting down");
}

fn take_matching(slot: &mut InFlight, request_id: u64) -> Option<CancellationToken> {
    if slot.as_ref().is_some_and(|(id, _)| *id == request_id) {
        slot.take().map(|(_, token)| token)
    } else {
        None
    }
}

async fn cancellable<T>(
    cancel_token: &CancellationToken,
    fetch: impl Future<Output = Result<T, SuggestError>>,
) -> Result<T, SuggestError> {
    tokio::select! {
        biased;
        _ = cancel_token.cancelled() => Err(SuggestError::Cancelled),
        result = fetch => result,
    }
}

fn unsuccessful(kind: &str, request_id: u64, error: SuggestError) -> SuggestResponse {
    match error {
        SuggestError::Cancelled => {
            log::debug!("{} request {} cancelled", kind, request_id);
            SuggestResponse::Cancelled { request_id }
        }
        e => {
            log::warn!("{} request {} failed: {}", kind, request_id, e);
            SuggestResponse::Failed {
                request_id,
                error: e.to_string(),
            }
        }
    }
}

/// Fetch suggestions for one term, racing the cancellation token
async fn handle_query(
    client: SuggestClient,
    term: String,
    request_id: u64,
    cancel_token: CancellationToken,
    response_tx: Sender<SuggestResponse>,
) {
    let response = match cancellable(&cancel_token, client.fetch(&term)).await {
        Ok(suggestions) => {
            log::debug!(
                "suggest request {} for {:?} returned {} options",
                request_id,
                term,
                suggestions.len()
            );
            SuggestResponse::Suggestions {
                request_id,
                term,
                suggestions,
            }
        }
        Err(e) => unsuccessful("suggest", request_id, e),
    };

    log::info!("suggest request {} completed", request_id);
    // Main thread may be gone
    let _ = response_tx.send(response);
}

async fn handle_search(
    client: SearchClient,
    term: String,
    request_id: u64,
    cancel_token: CancellationToken,
    response_tx: Sender<SuggestResponse>,
) {
    let response = match cancellable(&cancel_token, client.search(&term)).await {
        Ok(hits) => {
            log::info!("Found a total of {} bookmarks for {:?}", hits.len(), term);
            SuggestResponse::Results {
                request_id,
                term,
                hits,
            }
        }
        Err(e) => unsuccessful("search", request_id, e),
    };

    log::info!("search request {} completed", request_id);
    let _ = response_tx.send(response);
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
