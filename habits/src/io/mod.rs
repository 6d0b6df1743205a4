//! I/O helpers for the habit session.

pub mod clock;
pub mod config;
pub mod console;
pub mod store;
