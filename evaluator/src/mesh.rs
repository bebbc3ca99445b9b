//! A population of records with indexed pairwise operations
//!
//! The mesh owns its records, a running score ledger, and the RNG used for
//! generation and teleport noise, so a fixed seed reproduces a run exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

use shared::{MeshParams, Record, TransferParams};

use crate::error::{EvaluatorError, EvaluatorResult};
use crate::pairwise::{evaluate, score};

/// Fraction of a handover's score credited to the ledger when the transfer
/// fires.
pub const LEDGER_CREDIT_RATIO: f64 = 0.001;

/// Standard deviation of the gaussian noise added to teleported quantities.
pub const TELEPORT_NOISE_SIGMA: f64 = 2e-4;

/// Fraction of a teleport's fidelity credited to the ledger.
pub const TELEPORT_CREDIT_RATIO: f64 = 0.01;

/// Golden-ratio winding factor for the toroidal embedding.
const GOLDEN_WINDING: f64 = 0.618033988749895;

/// Position of a record on the torus. Display-only: no operation reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// An owned collection of records supporting handover and teleport between
/// indexed endpoints.
pub struct Mesh {
    records: Vec<Record>,
    positions: Vec<Position>,
    transfer: TransferParams,
    renormalize: bool,
    ledger: f64,
    rng: StdRng,
}

impl Mesh {
    /// Generate a mesh of `params.nodes` records from a seeded RNG.
    ///
    /// Each record gets a capacity uniform in `capacity_range`, the
    /// unit-sum complement as flow, a threshold uniform in
    /// `threshold_range`, and a phase evenly spaced over `phase_span`.
    /// Positions wind around the configured torus.
    pub fn generate(
        params: &MeshParams,
        transfer: TransferParams,
        seed: u64,
    ) -> EvaluatorResult<Self> {
        params.validate()?;
        transfer.validate()?;

        let mut rng = StdRng::seed_from_u64(seed);
        let n = params.nodes;
        let (cap_lo, cap_hi) = params.capacity_range;
        let (thr_lo, thr_hi) = params.threshold_range;

        let mut records = Vec::with_capacity(n);
        let mut positions = Vec::with_capacity(n);
        for i in 0..n {
            let phase = if n == 1 {
                0.0
            } else {
                i as f64 * params.phase_span / (n - 1) as f64
            };
            let capacity = rng.gen_range(cap_lo..=cap_hi);
            let flow = 1.0 - capacity;
            let threshold = rng.gen_range(thr_lo..=thr_hi);
            records.push(Record::new(phase, capacity, flow, threshold));

            let theta = 2.0 * std::f64::consts::PI * i as f64 / n as f64;
            let winding = 2.0 * std::f64::consts::PI * (i as f64 * GOLDEN_WINDING);
            positions.push(Position {
                x: (params.major_radius + params.minor_radius * winding.cos()) * theta.cos(),
                y: (params.major_radius + params.minor_radius * winding.cos()) * theta.sin(),
                z: params.minor_radius * winding.sin(),
            });
        }

        Ok(Self {
            records,
            positions,
            transfer,
            renormalize: params.renormalize,
            ledger: 0.0,
            rng,
        })
    }

    /// Wrap caller-supplied records. No renormalization is applied after
    /// handovers; the records mutate exactly as [`evaluate`] leaves them.
    pub fn from_records(records: Vec<Record>, transfer: TransferParams, seed: u64) -> Self {
        let positions = vec![Position::default(); records.len()];
        Self {
            records,
            positions,
            transfer,
            renormalize: false,
            ledger: 0.0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Run one evaluation between two distinct records and return its score.
    ///
    /// When the transfer fires, the ledger is credited with
    /// `score * LEDGER_CREDIT_RATIO`. With renormalization enabled both
    /// endpoints are rescaled back to unit sum afterwards.
    pub fn handover(&mut self, source: usize, dest: usize) -> EvaluatorResult<f64> {
        let transfer = self.transfer;
        let renormalize = self.renormalize;
        let (src, dst) = self.pair_mut(source, dest)?;
        let fired = src.threshold > transfer.threshold_gate;

        let score = evaluate(src, dst, &transfer);

        if renormalize {
            src.normalize();
            dst.normalize();
        }
        if fired {
            self.ledger += score * LEDGER_CREDIT_RATIO;
        }
        Ok(score)
    }

    /// Move the source record's quantities onto the destination and return
    /// the teleport fidelity.
    ///
    /// The source collapses to the balanced state `(0.5, 0.5)`; the
    /// destination receives the source's prior quantities perturbed by
    /// gaussian noise and rescaled to unit norm. Phases and thresholds are
    /// untouched. The fidelity is the dot product of the prior quantities
    /// with the destination's final quantities; the ledger is credited with
    /// `fidelity * TELEPORT_CREDIT_RATIO`.
    pub fn teleport(&mut self, source: usize, dest: usize) -> EvaluatorResult<f64> {
        self.check_index(source)?;
        self.check_index(dest)?;
        if source == dest {
            return Err(EvaluatorError::SameRecord { index: source });
        }

        let (orig_capacity, orig_flow) = {
            let src = &mut self.records[source];
            let orig = (src.capacity, src.flow);
            src.capacity = 0.5;
            src.flow = 0.5;
            orig
        };

        let noise_c: f64 = self.rng.sample(StandardNormal);
        let noise_f: f64 = self.rng.sample(StandardNormal);
        let dst = &mut self.records[dest];
        dst.capacity = orig_capacity + noise_c * TELEPORT_NOISE_SIGMA;
        dst.flow = orig_flow + noise_f * TELEPORT_NOISE_SIGMA;
        dst.magnitude_normalize();

        let fidelity = orig_capacity * dst.capacity + orig_flow * dst.flow;
        self.ledger += fidelity * TELEPORT_CREDIT_RATIO;
        Ok(fidelity)
    }

    /// Mean interaction score over all unordered record pairs, without
    /// mutating anything. Zero for meshes of fewer than two records.
    pub fn mean_pairwise_score(&self) -> f64 {
        let n = self.records.len();
        if n < 2 {
            return 0.0;
        }
        let mut total = 0.0;
        for i in 0..n {
            for j in (i + 1)..n {
                total += score(&self.records[i], &self.records[j], &self.transfer);
            }
        }
        total / (n * (n - 1) / 2) as f64
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn record(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Accumulated score credit from handovers whose transfer fired.
    pub fn ledger(&self) -> f64 {
        self.ledger
    }

    fn check_index(&self, index: usize) -> EvaluatorResult<()> {
        if index < self.records.len() {
            Ok(())
        } else {
            Err(EvaluatorError::IndexOutOfRange {
                index,
                len: self.records.len(),
            })
        }
    }

    /// Disjoint mutable borrows of two distinct records.
    fn pair_mut(
        &mut self,
        source: usize,
        dest: usize,
    ) -> EvaluatorResult<(&mut Record, &mut Record)> {
        self.check_index(source)?;
        self.check_index(dest)?;
        if source == dest {
            return Err(EvaluatorError::SameRecord { index: source });
        }
        if source < dest {
            let (head, tail) = self.records.split_at_mut(dest);
            Ok((&mut head[source], &mut tail[0]))
        } else {
            let (head, tail) = self.records.split_at_mut(source);
            Ok((&mut tail[0], &mut head[dest]))
        }
    }
}
