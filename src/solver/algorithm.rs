use crate::Utility;
use crate::bench::Options;
use std::sync::Arc;

/// An iterative equilibrium-approximation algorithm, seen from the outside.
///
/// The harness never inspects solver internals. It only asks an instance to
/// run more iterations and to hand over its current strategy profile.
pub trait Algorithm {
    /// Run exactly `iterations` more iterations. Calls accumulate.
    fn advance(&mut self, iterations: usize) -> anyhow::Result<()>;
    /// Strategy profile reflecting every iteration executed so far.
    fn profile(&self) -> Arc<dyn Profile>;
}

/// A learned strategy profile that can be evaluated against best responses.
pub trait Profile: std::fmt::Display + Send + Sync {
    /// Best-response value of each player against the others' fixed
    /// strategies, indexed by player position.
    fn best_response(&self) -> anyhow::Result<Vec<Utility>>;
    /// Aggregate exploitability: the sum of best-response values.
    /// Zero at a Nash equilibrium of a two-player zero-sum game.
    fn exploitability(&self) -> anyhow::Result<Utility> {
        Ok(self.best_response()?.iter().sum())
    }
}

/// Builds an algorithm from immutable game rules and named options.
/// Must not run any iterations.
pub type Constructor<G> = fn(&G, &Options) -> anyhow::Result<Box<dyn Algorithm>>;
