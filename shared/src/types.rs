//! Core record type exchanged between evaluator operations

use serde::{Deserialize, Serialize};

/// One interacting entity: a timestamp-like phase, two exchangeable
/// quantities, and the threshold that gates transfers out of it.
///
/// No field is range-constrained. Transfers may drive `capacity` or `flow`
/// negative; callers that need the unit-sum form call [`Record::normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Timestamp-like scalar; carried but never read by the evaluator.
    pub phase: f64,
    /// Stock quantity; transfers drain this on the source side.
    pub capacity: f64,
    /// Rate quantity; the complement that transfers feed on the source side.
    pub flow: f64,
    /// Gating value: transfers fire only while this exceeds the configured
    /// threshold gate.
    pub threshold: f64,
}

impl Record {
    pub fn new(phase: f64, capacity: f64, flow: f64, threshold: f64) -> Self {
        Self {
            phase,
            capacity,
            flow,
            threshold,
        }
    }

    /// Rescale `capacity` and `flow` so they sum to 1.0.
    ///
    /// Left unchanged when the sum is zero (there is no meaningful unit-sum
    /// form of the zero record, and dividing would poison both fields with
    /// NaN or infinity).
    pub fn normalize(&mut self) {
        let sum = self.capacity + self.flow;
        if sum != 0.0 {
            self.capacity /= sum;
            self.flow /= sum;
        }
    }

    /// Rescale `capacity` and `flow` by their euclidean norm.
    ///
    /// Used after a teleport copies noisy quantities into this record.
    /// Left unchanged when the norm is zero.
    pub fn magnitude_normalize(&mut self) {
        let norm = (self.capacity * self.capacity + self.flow * self.flow).sqrt();
        if norm != 0.0 {
            self.capacity /= norm;
            self.flow /= norm;
        }
    }
}
