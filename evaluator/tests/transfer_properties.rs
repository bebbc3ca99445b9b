//! Integration tests for the pairwise transfer properties
//!
//! Exercises the evaluator through its public API: the no-transfer
//! identity, cross-sum conservation, the two reference scenarios, explicit
//! non-idempotence, and the mesh's endpoint validation.

use evaluator::{evaluate, score, EvaluatorError, Mesh};
use shared::{MeshParams, Record, TransferParams};

const EPS: f64 = 1e-9;

#[test]
fn below_gate_returns_score_and_leaves_records_untouched() {
    let params = TransferParams::default();
    let cases = [
        (0.86, 0.14, 0.86, 0.14),
        (1.5, -0.25, 0.0, 3.0),
        (-2.0, -4.0, 7.5, 0.125),
    ];
    for (a1, b1, a2, b2) in cases {
        let mut source = Record::new(0.0, a1, b1, 0.15);
        let mut dest = Record::new(0.0, a2, b2, 0.5);
        let before = (source, dest);

        let result = evaluate(&mut source, &mut dest, &params);

        assert!((result - (a1 * a2 + b1 * b2) * 0.98).abs() < EPS);
        assert_eq!((source, dest), before);
    }
}

#[test]
fn reference_scenario_boundary_threshold() {
    // threshold 0.15 is not strictly greater than the gate: no transfer.
    let params = TransferParams::default();
    let mut source = Record::new(0.0, 0.86, 0.14, 0.15);
    let mut dest = Record::new(0.07, 0.86, 0.14, 0.14);

    let result = evaluate(&mut source, &mut dest, &params);

    assert!((result - 0.744016).abs() < 1e-6);
    assert!((result - (0.86 * 0.86 + 0.14 * 0.14) * 0.98).abs() < EPS);
    assert_eq!(source, Record::new(0.0, 0.86, 0.14, 0.15));
    assert_eq!(dest, Record::new(0.07, 0.86, 0.14, 0.14));
}

#[test]
fn reference_scenario_with_transfer() {
    let params = TransferParams::default();
    let mut source = Record::new(0.0, 0.86, 0.14, 0.20);
    let mut dest = Record::new(0.07, 0.86, 0.14, 0.14);

    let result = evaluate(&mut source, &mut dest, &params);

    // delta = 0.20 * 0.1 = 0.02
    assert!((source.capacity - 0.84).abs() < EPS);
    assert!((source.flow - 0.16).abs() < EPS);
    assert!((dest.capacity - 0.88).abs() < EPS);
    assert!((dest.flow - 0.12).abs() < EPS);
    // Score is unaffected by the mutation.
    assert!((result - (0.86 * 0.86 + 0.14 * 0.14) * 0.98).abs() < EPS);
}

#[test]
fn cross_sums_are_conserved_for_arbitrary_inputs() {
    let params = TransferParams::default();
    let cases = [
        (0.86, 0.14, 0.86, 0.14, 0.2),
        (-1.0, 2.0, 3.0, -4.0, 0.151),
        (0.0, 0.0, 0.0, 0.0, 10.0),
        (1e9, -1e9, 1e-9, 5.0, 0.9),
    ];
    for (a1, b1, a2, b2, threshold) in cases {
        let mut source = Record::new(0.0, a1, b1, threshold);
        let mut dest = Record::new(0.0, a2, b2, 0.0);

        evaluate(&mut source, &mut dest, &params);

        let scale = a1.abs().max(a2.abs()).max(1.0);
        assert!((source.capacity + dest.capacity - (a1 + a2)).abs() < EPS * scale);
        assert!((source.flow + dest.flow - (b1 + b2)).abs() < EPS * scale);
    }
}

#[test]
fn evaluate_is_not_idempotent_above_the_gate() {
    let params = TransferParams::default();
    let mut source = Record::new(0.0, 0.86, 0.14, 0.20);
    let mut dest = Record::new(0.07, 0.86, 0.14, 0.14);

    let first = evaluate(&mut source, &mut dest, &params);
    let second = evaluate(&mut source, &mut dest, &params);

    assert_ne!(first, second);
}

#[test]
fn score_matches_evaluate_without_mutation() {
    let params = TransferParams::default();
    let source = Record::new(0.0, 0.3, 0.7, 0.99);
    let dest = Record::new(0.0, 0.6, 0.4, 0.0);

    let pure = score(&source, &dest, &params);

    let mut src = source;
    let mut dst = dest;
    assert_eq!(pure, evaluate(&mut src, &mut dst, &params));
}

#[test]
fn mesh_rejects_self_transfer_and_bad_indices() {
    let records = vec![
        Record::new(0.0, 0.86, 0.14, 0.20),
        Record::new(0.07, 0.86, 0.14, 0.14),
    ];
    let mut mesh = Mesh::from_records(records, TransferParams::default(), 1);

    assert!(matches!(
        mesh.handover(1, 1),
        Err(EvaluatorError::SameRecord { index: 1 })
    ));
    assert!(matches!(
        mesh.handover(2, 0),
        Err(EvaluatorError::IndexOutOfRange { index: 2, len: 2 })
    ));
    assert!(mesh.handover(0, 1).is_ok());
}

#[test]
fn generated_mesh_runs_a_deterministic_session() {
    let params = MeshParams {
        nodes: 5,
        ..MeshParams::default()
    };
    let run = |seed| {
        let mut mesh = Mesh::generate(&params, TransferParams::default(), seed).unwrap();
        for source in 0..mesh.len() {
            let dest = (source + 1) % mesh.len();
            mesh.handover(source, dest).unwrap();
        }
        (mesh.mean_pairwise_score(), mesh.ledger())
    };

    assert_eq!(run(42), run(42));
    assert_ne!(run(42), run(43));
}

#[test]
fn zero_node_mesh_is_a_config_error() {
    let params = MeshParams {
        nodes: 0,
        ..MeshParams::default()
    };
    assert!(matches!(
        Mesh::generate(&params, TransferParams::default(), 0),
        Err(EvaluatorError::Config(_))
    ));
}

#[test]
fn transfer_params_load_from_json() {
    let params: TransferParams =
        serde_json::from_str(r#"{"score_weight":0.5,"threshold_gate":0.2,"transfer_ratio":0.25}"#)
            .unwrap();
    assert!(params.validate().is_ok());

    let mut source = Record::new(0.0, 1.0, 0.0, 0.4);
    let mut dest = Record::new(0.0, 0.0, 1.0, 0.0);
    let result = evaluate(&mut source, &mut dest, &params);

    assert!((result - 0.0).abs() < EPS);
    assert!((source.capacity - 0.9).abs() < EPS);
    assert!((dest.flow - 0.9).abs() < EPS);
}
