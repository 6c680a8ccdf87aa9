pub mod app;
pub mod autocomplete;
pub mod config;
pub mod debounce;
pub mod error;
pub mod layout;
pub mod logging;
pub mod lookup;
pub mod widgets;
