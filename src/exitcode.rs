//! Process exit codes

/// Successful termination, including help output
pub const OK: i32 = 0;

/// Any user-input or runtime error
pub const FAILURE: i32 = 1;
