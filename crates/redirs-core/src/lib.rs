pub mod config;
pub mod logging;

pub mod check;
pub mod entry;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod location;
pub mod search;
pub mod view;
