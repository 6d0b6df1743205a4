//! Personal habit tracker.
//!
//! Habits are named counters kept in a single JSON file. An interactive menu
//! adds habits, bumps their streaks, lists them and removes them, saving the
//! whole collection after every change.
//!
//! - **[`core`]**: Pure logic (name validation, selection parsing, collection
//!   operations, menu parsing). No I/O.
//! - **[`io`]**: Store, configuration, clock and console.
//!
//! [`session`] ties the two together into the menu loop.

pub mod core;
pub mod exit_codes;
pub mod habit;
pub mod io;
pub mod logging;
pub mod session;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
