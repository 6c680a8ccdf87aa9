use std::sync::mpsc::{Receiver, TryRecvError};

use tokio::sync::mpsc::UnboundedSender;

use super::{LookupError, LookupRequest, LookupResponse};

/// Widget-side handle on the lookup worker
///
/// Tags each request with a monotonic id and only hands back the response
/// to the most recent request that is still wanted.
pub struct LookupClient {
    request_tx: UnboundedSender<LookupRequest>,
    response_rx: Receiver<LookupResponse>,
    /// Id of the last request issued
    request_id: u64,
    /// Id of the request whose answer is still wanted, if any
    in_flight_request_id: Option<u64>,
}

impl LookupClient {
    pub fn new(
        request_tx: UnboundedSender<LookupRequest>,
        response_rx: Receiver<LookupResponse>,
    ) -> Self {
        Self {
            request_tx,
            response_rx,
            request_id: 0,
            in_flight_request_id: None,
        }
    }

    /// Send a lookup for `query`, superseding any request still in flight
    ///
    /// Returns the id of the new request.
    pub fn issue(&mut self, query: &str) -> Result<u64, LookupError> {
        self.request_id = self.request_id.wrapping_add(1);
        let request_id = self.request_id;

        let request = LookupRequest {
            request_id,
            query: query.to_string(),
        };
        if self.request_tx.send(request).is_err() {
            self.in_flight_request_id = None;
            return Err(LookupError::Unavailable);
        }

        log::debug!("Issued lookup {} for {:?}", request_id, query);
        self.in_flight_request_id = Some(request_id);
        Ok(request_id)
    }

    /// Stop waiting for the in-flight request; its answer will be discarded
    pub fn invalidate(&mut self) {
        if let Some(request_id) = self.in_flight_request_id.take() {
            log::debug!("Invalidated lookup {}", request_id);
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight_request_id.is_some()
    }

    /// Next raw response from the worker, stale or not
    pub fn try_recv(&mut self) -> Option<LookupResponse> {
        match self.response_rx.try_recv() {
            Ok(response) => Some(response),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Next response answering the in-flight request
    ///
    /// Stale responses queued ahead of it are drained and dropped.
    pub fn poll(&mut self) -> Option<LookupResponse> {
        while let Some(response) = self.try_recv() {
            let request_id = response.request_id();
            if self.in_flight_request_id == Some(request_id) {
                self.in_flight_request_id = None;
                return Some(response);
            }
            log::debug!(
                "Discarding stale lookup {} (current: {:?})",
                request_id,
                self.in_flight_request_id
            );
        }
        None
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
