//! Part-time vocational training duration engine.
//!
//! This crate computes the contract duration of a part-time vocational
//! training under German vocational training law (BBiG §§ 7a, 8): shortening
//! grounds are credited first, the part-time share then stretches the
//! remaining duration, the result is capped and rounded down, and small
//! overruns of the full-time duration are waived.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
