//! Triage Service Library Crate
//!
//! Configuration and the turn runner for the `triage` command-line tool. The
//! binary in `bin/triage.rs` is a thin wrapper around this library.

pub mod config;
pub mod runner;
