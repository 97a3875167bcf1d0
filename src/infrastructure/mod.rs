//! Infrastructure layer: configuration sources
//!
//! This layer implements the I/O boundary traits used by the dispatcher.

pub mod error;
pub mod traits;

pub use error::{InfraError, InfraResult};
pub use traits::{ConfigProvider, MapConfig};
