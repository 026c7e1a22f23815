//! Exit code constants for the regiontoc CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable file, invalid config)
//! - 2: Region markers are unbalanced

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable input, or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Mismatched region markers were found by `check`.
pub const MISMATCH: i32 = 2;
