//! Core data models for the training duration engine.
//!
//! Every model is a transient value: built for one calculation, never
//! mutated afterwards and never persisted.

mod duration_request;
mod duration_result;
mod shortening_grounds;

pub use duration_request::{DurationRequest, InputKind, Operand};
pub use duration_result::{AuditStep, AuditTrace, AuditWarning, DurationResult};
pub use shortening_grounds::ShorteningGrounds;
