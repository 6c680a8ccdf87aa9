//! Suggestion lookup
//!
//! A `SuggestionSource` produces suggestions for a query asynchronously. The
//! widget never awaits a source directly: requests go to a worker thread
//! through a channel and come back tagged with the request id they answer.

mod client;
mod fixture;
mod worker;

use futures::future::BoxFuture;
use thiserror::Error;

pub use client::LookupClient;
pub use fixture::{FixtureSource, filter_items};
pub use worker::spawn_worker;

/// Errors a lookup can finish with
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("lookup failed: {0}")]
    Failed(String),

    #[error("lookup source unavailable")]
    Unavailable,
}

/// Asynchronous provider of suggestions
pub trait SuggestionSource: Send + Sync + 'static {
    fn fetch(&self, query: &str) -> BoxFuture<'static, Result<Vec<String>, LookupError>>;
}

/// Request messages sent to the lookup worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    /// Monotonic id used to recognise stale responses
    pub request_id: u64,
    pub query: String,
}

/// Response messages received from the lookup worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResponse {
    Suggestions { request_id: u64, items: Vec<String> },
    Failed { request_id: u64, error: LookupError },
}

impl LookupResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            LookupResponse::Suggestions { request_id, .. }
            | LookupResponse::Failed { request_id, .. } => *request_id,
        }
    }
}
