//! Stable exit codes for the habits binary.

/// Session ended normally (quit or end of input).
pub const OK: i32 = 0;
/// Unrecoverable error: unreadable habits file, bad configuration, broken console.
pub const FATAL: i32 = 1;
