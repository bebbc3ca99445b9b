//! Shared types for the pairwise transfer evaluator
//!
//! Contains the record aggregate, the numeric parameters that gate and
//! weight transfers, and the error/logging plumbing used by the evaluator
//! crate and its binary.

pub mod config;
pub mod errors;
pub mod logging;
pub mod types;

pub use config::{MeshParams, TransferParams};
pub use errors::{SharedError, SharedResult};
pub use types::Record;
