//! fish CLI library
//!
//! Command-line front end of the fish reader: a bookshelf of plain text
//! files read one short paragraph at a time, plus a `paginate` command that
//! dumps the pagination with its source line mapping.

pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
