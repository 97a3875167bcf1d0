//! Domain layer: command tree and flag schema
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod flags;
pub mod tree;

pub use error::{DomainError, DomainResult};
pub use flags::{FlagSchema, FlagSpec, ResolvedFlags};
pub use tree::{Action, CommandNode, CommandSpec, CommandTree, Resolution};
