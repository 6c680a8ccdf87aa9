//! In-memory fixture source
//!
//! Filters a fixed list by case-insensitive substring after an artificial
//! delay, standing in for a network-backed suggestion service.

use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;

use super::{LookupError, SuggestionSource};
use crate::config::FixtureConfig;

#[derive(Debug, Clone)]
pub struct FixtureSource {
    items: Arc<[String]>,
    delay: Duration,
}

impl FixtureSource {
    pub fn new<I, S>(items: I, delay: Duration) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            delay,
        }
    }

    pub fn from_config(config: &FixtureConfig) -> Self {
        Self::new(
            config.items.iter().cloned(),
            Duration::from_millis(config.delay_ms),
        )
    }
}

impl SuggestionSource for FixtureSource {
    fn fetch(&self, query: &str) -> BoxFuture<'static, Result<Vec<String>, LookupError>> {
        let items = Arc::clone(&self.items);
        let delay = self.delay;
        let query = query.to_string();

        Box::pin(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            Ok(filter_items(&items, &query))
        })
    }
}

/// Items containing `query`, ignoring case, in their original order
pub fn filter_items(items: &[String], query: &str) -> Vec<String> {
    let query_lower = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.to_lowercase().contains(&query_lower))
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "fixture_tests.rs"]
mod fixture_tests;
