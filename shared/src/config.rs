//! Numeric parameters for scoring, transfers, and mesh generation
//!
//! The defaults here are the system's named constants; nothing else in the
//! codebase re-derives them.

use crate::errors::{SharedError, SharedResult};
use serde::{Deserialize, Serialize};

/// Weight applied to the bilinear interaction score.
pub const SCORE_WEIGHT: f64 = 0.98;

/// A record's threshold must strictly exceed this for a transfer to fire.
pub const THRESHOLD_GATE: f64 = 0.15;

/// Fraction of the source threshold moved between quantities per transfer.
pub const TRANSFER_RATIO: f64 = 0.1;

/// Parameters of a single pairwise evaluation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TransferParams {
    pub score_weight: f64,
    pub threshold_gate: f64,
    pub transfer_ratio: f64,
}

impl Default for TransferParams {
    fn default() -> Self {
        Self {
            score_weight: SCORE_WEIGHT,
            threshold_gate: THRESHOLD_GATE,
            transfer_ratio: TRANSFER_RATIO,
        }
    }
}

impl TransferParams {
    /// Reject non-finite weights; any finite value is usable.
    pub fn validate(&self) -> SharedResult<()> {
        require_finite("score_weight", self.score_weight)?;
        require_finite("threshold_gate", self.threshold_gate)?;
        require_finite("transfer_ratio", self.transfer_ratio)?;
        Ok(())
    }
}

/// Parameters for generating a mesh of records.
///
/// The defaults reproduce the reference topology: 63 records with unit-sum
/// quantities, thresholds straddling the gate, phases evenly spaced over a
/// small span, positions wound around a torus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshParams {
    /// Number of records to generate.
    pub nodes: usize,
    /// Uniform sampling range for each record's capacity; flow is the
    /// unit-sum complement.
    pub capacity_range: (f64, f64),
    /// Uniform sampling range for each record's threshold.
    pub threshold_range: (f64, f64),
    /// Record `i` of `n` gets phase `i * phase_span / (n - 1)`.
    pub phase_span: f64,
    /// Torus radii for the positional embedding.
    pub major_radius: f64,
    pub minor_radius: f64,
    /// Renormalize both endpoints to unit sum after each mesh handover.
    pub renormalize: bool,
}

impl Default for MeshParams {
    fn default() -> Self {
        Self {
            nodes: 63,
            capacity_range: (0.80, 0.98),
            threshold_range: (0.10, 0.20),
            phase_span: 0.07,
            major_radius: 50.0,
            minor_radius: 10.0,
            renormalize: true,
        }
    }
}

impl MeshParams {
    pub fn validate(&self) -> SharedResult<()> {
        if self.nodes == 0 {
            return Err(SharedError::InvalidConfig {
                field: "nodes".to_string(),
                value: "0".to_string(),
            });
        }
        require_range("capacity_range", self.capacity_range)?;
        require_range("threshold_range", self.threshold_range)?;
        require_finite("phase_span", self.phase_span)?;
        require_finite("major_radius", self.major_radius)?;
        require_finite("minor_radius", self.minor_radius)?;
        Ok(())
    }
}

fn require_finite(field: &str, value: f64) -> SharedResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SharedError::InvalidConfig {
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}

fn require_range(field: &str, (lo, hi): (f64, f64)) -> SharedResult<()> {
    require_finite(field, lo)?;
    require_finite(field, hi)?;
    if lo <= hi {
        Ok(())
    } else {
        Err(SharedError::InvalidConfig {
            field: field.to_string(),
            value: format!("({lo}, {hi})"),
        })
    }
}
