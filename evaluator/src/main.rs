//! Evaluator binary entry point
//!
//! Default mode runs the fixed two-record demo and prints the score as a
//! single stdout line. Passing `--nodes` switches to mesh mode: generate a
//! seeded mesh, run random handovers, and print a summary.

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use evaluator::{evaluate, EvaluatorResult, Mesh};
use shared::{logging, MeshParams, Record, TransferParams};

/// Pairwise transfer evaluator demo
#[derive(Parser)]
#[command(name = "evaluator")]
#[command(about = "Scores record pairs and redistributes quantity between them")]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Mesh mode: number of records to generate (omit for the two-record demo)
    #[arg(long)]
    nodes: Option<usize>,

    /// Mesh mode: number of random handovers to run
    #[arg(long, default_value = "100")]
    steps: usize,

    /// Mesh mode: RNG seed for generation and endpoint selection
    #[arg(long, default_value = "42")]
    seed: u64,
}

fn main() -> EvaluatorResult<()> {
    let args = Args::parse();
    logging::init_tracing_with_level(Some(&args.log_level));

    match args.nodes {
        Some(nodes) => run_mesh(nodes, args.steps, args.seed),
        None => {
            run_pair_demo();
            Ok(())
        }
    }
}

/// The fixed two-record scenario: boundary threshold, so no transfer fires.
fn run_pair_demo() {
    let params = TransferParams::default();
    let mut source = Record::new(0.0, 0.86, 0.14, 0.15);
    let mut dest = Record::new(0.07, 0.86, 0.14, 0.14);

    let score = evaluate(&mut source, &mut dest, &params);

    debug!(?source, ?dest, "records after evaluation");
    println!("{score}");
}

fn run_mesh(nodes: usize, steps: usize, seed: u64) -> EvaluatorResult<()> {
    let params = MeshParams {
        nodes,
        ..MeshParams::default()
    };
    let mut mesh = Mesh::generate(&params, TransferParams::default(), seed)?;
    info!(nodes, steps, seed, "mesh generated");

    if mesh.len() < 2 {
        warn!("mesh has fewer than two records; skipping handovers");
    } else {
        let mut rng = StdRng::seed_from_u64(seed);
        for step in 0..steps {
            let source = rng.gen_range(0..mesh.len());
            let dest = loop {
                let candidate = rng.gen_range(0..mesh.len());
                if candidate != source {
                    break candidate;
                }
            };
            let score = mesh.handover(source, dest)?;
            debug!(step, source, dest, score, "handover");
        }
    }

    println!("mean_score={}", mesh.mean_pairwise_score());
    println!("ledger={}", mesh.ledger());
    Ok(())
}
