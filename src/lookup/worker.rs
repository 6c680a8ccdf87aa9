//! Lookup worker thread
//!
//! Runs lookups on a tokio current-thread runtime in a background thread so
//! the UI loop never blocks. Every request is spawned as its own task, so
//! lookups can overlap and finish out of order; each response carries the
//! id of the request it answers and the widget discards stale ones.

use std::sync::Arc;
use std::sync::mpsc::Sender;

use tokio::sync::mpsc::UnboundedReceiver;

use super::client::LookupClient;
use super::{LookupRequest, LookupResponse, SuggestionSource};

/// Spawn the lookup worker thread and return the client connected to it
///
/// The worker exits once the client (and with it the request sender) is
/// dropped.
pub fn spawn_worker(source: Arc<dyn SuggestionSource>) -> std::io::Result<LookupClient> {
    let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
    let (response_tx, response_rx) = std::sync::mpsc::channel();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    std::thread::Builder::new()
        .name("lookup-worker".to_string())
        .spawn(move || {
            runtime.block_on(worker_loop(source, request_rx, response_tx));
        })?;

    Ok(LookupClient::new(request_tx, response_rx))
}

/// Main worker loop - processes requests until the channel is closed
async fn worker_loop(
    source: Arc<dyn SuggestionSource>,
    mut request_rx: UnboundedReceiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
) {
    while let Some(request) = request_rx.recv().await {
        let LookupRequest { request_id, query } = request;
        log::debug!("Starting lookup {} for {:?}", request_id, query);

        let fetch = source.fetch(&query);
        let response_tx = response_tx.clone();
        tokio::spawn(async move {
            let response = match fetch.await {
                Ok(items) => LookupResponse::Suggestions { request_id, items },
                Err(error) => LookupResponse::Failed { request_id, error },
            };
            if response_tx.send(response).is_err() {
                log::debug!("Dropping lookup {} result: UI has gone away", request_id);
            }
        });
    }

    log::debug!("Lookup worker shutting down");
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
