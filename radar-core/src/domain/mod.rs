//! Core domain types
//!
//! This module contains the structures shared between the HTTP client
//! (which produces them) and the CLI (which reports on them).

pub mod outcome;
pub mod run;
