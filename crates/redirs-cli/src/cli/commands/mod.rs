//! CLI command handlers. Each command is in its own file.

mod check;
mod search;

pub use check::run_check;
pub use search::run_search;
