//! Tracing setup shared by the evaluator binary and tests
//!
//! Diagnostics go through `tracing`; the demo's score output stays on plain
//! stdout so the single-line contract of the CLI is never interleaved with
//! log records.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize a stdout tracing subscriber at the given level.
///
/// The filter enables this workspace's crates at `level` and leaves
/// everything else at the default. `None` means `info`.
pub fn init_tracing_with_level(level: Option<&str>) {
    let base_level = level.unwrap_or("info");
    let env_filter = format!("evaluator={base_level},shared={base_level}");

    fmt()
        .with_env_filter(EnvFilter::new(&env_filter))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

/// Initialize tracing at the default level.
pub fn init_tracing() {
    init_tracing_with_level(None);
}
