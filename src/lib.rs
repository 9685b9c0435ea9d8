//! Convergence benchmarking for counterfactual regret minimization.
//!
//! The crate drives one or more regret-minimizing solvers against a fixed
//! extensive-form game, samples exploitability at regular checkpoints, and
//! reports the resulting curves side by side.
//!
//! # Module Structure
//!
//! - `bench` — Checkpointed runner, result store, orchestration, reporting
//! - `solver` — Adapter contract plus a tabular CFR reference family
//! - `kuhn` — N-card Kuhn poker rules used as the reference game
//! - `config` — JSON benchmark manifest consumed by the binary
pub mod bench;
pub mod config;
pub mod kuhn;
pub mod solver;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Expected values, regrets, payoffs and exploitability.
pub type Utility = f64;
/// Strategy weights, chance weights and reach probabilities.
pub type Probability = f64;

// ============================================================================
// REGRET MATCHING
// Convert cumulative regrets to current iteration strategy via normalization.
// ============================================================================
/// Minimum policy weight to prevent division by zero in normalization.
pub const POLICY_MIN: Probability = Probability::MIN_POSITIVE;
/// Floor for cumulative regret storage (prevents unbounded negative growth).
pub const REGRET_MIN: Utility = -4e6;

// ============================================================================
// BENCHMARK DEFAULTS
// Matches the budget of the reference comparison run.
// ============================================================================
/// Iterations per algorithm when no budget is given.
pub const DEFAULT_ITERATIONS: usize = 100_000;
/// Iterations between exploitability samples when no interval is given.
pub const DEFAULT_INTERVAL: usize = 5_000;
/// Output image width in pixels.
pub const PLOT_WIDTH: u32 = 1000;
/// Output image height in pixels.
pub const PLOT_HEIGHT: u32 = 600;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Route benchmark progress to the terminal at INFO and to
/// `logs/<unix-seconds>.log` at DEBUG. Call once, before the first run.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
