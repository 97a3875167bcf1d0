//! CLI layer: argument dispatch, help and terminal output

pub mod dispatcher;
pub mod error;
pub mod help;
pub mod output;

pub use dispatcher::Dispatcher;
pub use error::{CliError, CliResult};
