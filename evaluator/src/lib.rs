//! Pairwise transfer evaluator
//!
//! Scores pairs of records with a fixed-weight bilinear combination of
//! their exchangeable quantities and, when the source record's threshold
//! exceeds the gate, redistributes a conserved amount between the pair.
//! [`Mesh`] holds a population of records and runs the same operation
//! between indexed endpoints.

pub mod error;
pub mod mesh;
pub mod pairwise;

pub use error::{EvaluatorError, EvaluatorResult};
pub use mesh::Mesh;
pub use pairwise::{evaluate, score};
