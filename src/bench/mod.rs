//! Convergence benchmarking core.
//!
//! Data flows one way: [`AlgorithmConfig`] → [`Benchmark`] (orchestrator and
//! checkpointed runner) → [`BenchmarkSession`] → [`Summary`] / [`Chart`].
//!
//! - `schedule` — Iteration budget split into checkpoint blocks
//! - `options` — Named constructor parameters forwarded verbatim
//! - `algorithm` — One requested benchmark unit
//! - `registry` — Constructor lookup for dynamically described configs
//! - `checkpoint` / `run` / `session` — Result store
//! - `benchmark` — Runner and orchestrator
//! - `summary` / `chart` — Reporting
//! - `error` — Failure taxonomy

mod algorithm;
mod benchmark;
mod chart;
mod checkpoint;
mod error;
mod options;
mod registry;
mod run;
mod schedule;
mod session;
mod summary;

pub use algorithm::*;
pub use benchmark::*;
pub use chart::*;
pub use checkpoint::*;
pub use error::*;
pub use options::*;
pub use registry::*;
pub use run::*;
pub use schedule::*;
pub use session::*;
pub use summary::*;
