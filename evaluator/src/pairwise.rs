//! The pairwise evaluate operation: score, then conditional transfer

use shared::{Record, TransferParams};

/// The weighted bilinear interaction score of a pair, with no mutation.
///
/// Symmetric in its two arguments.
pub fn score(source: &Record, dest: &Record, params: &TransferParams) -> f64 {
    (source.capacity * dest.capacity + source.flow * dest.flow) * params.score_weight
}

/// Score two records and conditionally redistribute quantity between them.
///
/// The score is the weighted bilinear combination of the pair's quantities,
/// always computed from the values as passed in. If `source.threshold`
/// strictly exceeds the gate, `source.threshold * transfer_ratio` is then
/// moved: out of the source's capacity into its flow, and out of the
/// destination's flow into its capacity. The pair's total capacity and
/// total flow are each unchanged by the move.
///
/// All finite inputs are valid; nothing is clamped and either quantity may
/// go negative. Aliasing the two parameters is impossible here (two `&mut`
/// to one record do not borrow-check); the indexed path in
/// [`crate::Mesh::handover`] rejects equal indices instead.
pub fn evaluate(source: &mut Record, dest: &mut Record, params: &TransferParams) -> f64 {
    // Score first: the transfer below must not feed back into it.
    let score = score(source, dest, params);

    if source.threshold > params.threshold_gate {
        let delta = source.threshold * params.transfer_ratio;
        source.capacity -= delta;
        source.flow += delta;
        dest.capacity += delta;
        dest.flow -= delta;
    }

    score
}
