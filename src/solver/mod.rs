//! Solvers under benchmark and the contract the harness consumes.
//!
//! - `algorithm` — [`Algorithm`] / [`Profile`] capability traits
//! - `regret` — Regret update schedules (vanilla, CFR+, linear, DCFR, Pluribus)
//! - `policy` — Average strategy weighting schedules
//! - `sampling` — Chance handling per iteration
//! - `settings` — Option parsing for the bundled solver family
//! - `minimizer` — Tabular CFR over Kuhn poker
//! - `strategy` — Averaged strategy snapshot with exact best response

mod algorithm;
mod minimizer;
mod policy;
mod regret;
mod sampling;
mod settings;
mod strategy;

pub use algorithm::*;
pub use minimizer::*;
pub use policy::*;
pub use regret::*;
pub use sampling::*;
pub use settings::*;
pub use strategy::*;
