//! Deterministic, pure logic for the habit session.
//!
//! Core modules must be free of I/O side effects. They operate on the
//! in-memory collection and return values the session prints or persists.

pub mod menu;
pub mod name;
pub mod ops;
pub mod selection;
