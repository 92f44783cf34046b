//! Search-as-you-type bookmark lookup against an elasticbook service

pub mod app;
pub mod autocomplete;
pub mod config;
pub mod debouncer;
pub mod error;
pub mod focus;
pub mod input;
pub mod results;
pub mod suggest;
pub mod widgets;

mod test_utils;
