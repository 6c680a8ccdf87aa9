//! Host view
//!
//! A page holding one suggestion widget and the last value it reported.

mod app_events;
mod app_render;
mod app_state;

pub use app_state::{App, Focus};
