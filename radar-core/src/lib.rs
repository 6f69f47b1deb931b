//! Radar Core
//!
//! Core types for the Radar CI bucket poller.
//!
//! This crate contains:
//! - Domain types: runs, their results and outcomes
//! - DTOs: the response envelopes returned by the Radar API

pub mod domain;
pub mod dto;
