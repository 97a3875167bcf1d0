//! Application layer: command registration and actions
//!
//! This layer wires domain types into the concrete calculator commands.

pub mod actions;
pub mod commands;

pub use actions::Operands;
pub use commands::{build_command_tree, ROOT_NAME};
