//! Data Transfer Objects for the Radar API
//!
//! Response envelopes as they come off the wire. Each one unwraps into
//! the domain types from [`crate::domain`].

pub mod result;
pub mod trigger;
