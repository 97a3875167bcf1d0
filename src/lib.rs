//! `calc`: a command-line calculator built on an explicit command tree.
//!
//! [`application::build_command_tree`] registers the commands once at start-up,
//! and [`cli::Dispatcher`] resolves each invocation against that tree.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
