/// Everything the harness can fail with.
///
/// Solver failures pass through untouched; results recorded before the
/// failure stay in the session.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// Malformed algorithm config entry or unknown constructor key.
    #[error("invalid algorithm config: {0}")]
    Config(String),
    /// Zero iteration budget or zero checkpoint interval.
    #[error("invalid schedule: {0}")]
    Schedule(String),
    /// Raised by a solver constructor, `advance`, or `best_response`.
    #[error(transparent)]
    Solver(#[from] anyhow::Error),
    /// Rendering or writing a report failed.
    #[error("report failed: {0}")]
    Report(String),
}
