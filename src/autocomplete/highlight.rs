//! Emphasis of the typed query inside suggestion text
//!
//! The query is escaped before it becomes a pattern, so it always matches
//! literally and arbitrary user text can never fail to compile.

use regex::{Regex, RegexBuilder};

/// A run of suggestion text, emphasized when it matches the query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub emphasized: bool,
}

impl<'a> Segment<'a> {
    fn plain(text: &'a str) -> Self {
        Self {
            text,
            emphasized: false,
        }
    }

    fn emphasized(text: &'a str) -> Self {
        Self {
            text,
            emphasized: true,
        }
    }
}

/// Case-insensitive literal matcher built once per render
pub struct QueryEmphasis {
    pattern: Option<Regex>,
}

impl QueryEmphasis {
    pub fn new(query: &str) -> Self {
        if query.is_empty() {
            return Self { pattern: None };
        }

        let pattern = RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build();
        match pattern {
            Ok(pattern) => Self {
                pattern: Some(pattern),
            },
            Err(e) => {
                // Only reachable when the query exceeds the regex size limit
                log::debug!("Query emphasis disabled: {}", e);
                Self { pattern: None }
            }
        }
    }

    /// Split `text` into alternating plain and emphasized segments
    pub fn split<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        let Some(pattern) = &self.pattern else {
            return vec![Segment::plain(text)];
        };

        let mut segments = Vec::new();
        let mut last_end = 0;
        for found in pattern.find_iter(text) {
            if found.start() > last_end {
                segments.push(Segment::plain(&text[last_end..found.start()]));
            }
            segments.push(Segment::emphasized(found.as_str()));
            last_end = found.end();
        }
        if last_end < text.len() || segments.is_empty() {
            segments.push(Segment::plain(&text[last_end..]));
        }
        segments
    }
}

#[cfg(test)]
#[path = "highlight_tests.rs"]
mod highlight_tests;
