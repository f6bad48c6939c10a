//! Common utilities for selcraft.
//!
//! This crate provides shared infrastructure used by the selector builder and
//! the command-line front end:
//! - **Warning System** - colored, deduplicated terminal output for suspicious input

pub mod warning;
