use super::*;
use crate::solver::Constructor;
use serde_json::Value;
use std::path::PathBuf;
use std::time::Instant;

/// Where a rendered convergence plot goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Render into memory only.
    Memory,
    /// Write to a file and keep nothing in memory.
    File(PathBuf),
    /// Write to a file and also return the in-memory image.
    Both(PathBuf),
}

/// Drives algorithms against one fixed game and collects their trajectories.
///
/// Runs are strictly sequential. Each algorithm instance is owned by the
/// run that built it and dropped once its final profile is recorded.
pub struct Benchmark<G> {
    rules: G,
    session: BenchmarkSession,
}

impl<G> Benchmark<G> {
    pub fn new(rules: G, label: impl Into<String>) -> Self {
        Self {
            rules,
            session: BenchmarkSession::new(label),
        }
    }
    pub fn rules(&self) -> &G {
        &self.rules
    }
    pub fn session(&self) -> &BenchmarkSession {
        &self.session
    }
    pub fn into_session(self) -> BenchmarkSession {
        self.session
    }

    /// Build one algorithm, advance it block by block, and sample
    /// exploitability after every block.
    ///
    /// The run is stored under `name`, replacing any earlier run of that
    /// name. A solver failure leaves the session untouched for `name`.
    pub fn run_algorithm(
        &mut self,
        constructor: Constructor<G>,
        name: &str,
        schedule: Schedule,
        options: &Options,
    ) -> Result<&AlgorithmRun, BenchError> {
        log::info!("{:<32}{:<32}", format!("running {}", name), self.session.label());
        log::debug!("{:<32}{:<32}", schedule.to_string(), options.to_string());
        let mut algorithm = constructor(&self.rules, options)?;
        let blocks = schedule.blocks();
        if blocks.is_empty() {
            log::warn!(
                "{} has no complete block: interval {} exceeds budget {}",
                name,
                schedule.interval(),
                schedule.iterations()
            );
        } else if schedule.leftover() > 0 && schedule.remainder() == Remainder::Truncate {
            log::warn!("{} drops {} trailing iterations", name, schedule.leftover());
        }
        let start = Instant::now();
        let mut checkpoints = Vec::with_capacity(blocks.len());
        for Block { size, total } in blocks {
            algorithm.advance(size)?;
            let exploitability = algorithm.profile().exploitability()?;
            checkpoints.push(Checkpoint::from((total, exploitability)));
            let secs = start.elapsed().as_secs_f64().max(f64::EPSILON);
            log::info!(
                "{:<20}{:<24}{:<20}{:<20}",
                format!("iters {}", total),
                format!("exploit {:.6}", exploitability),
                format!("elapsed {:.1}s", secs),
                format!("it/sec {:.1}", total as f64 / secs),
            );
        }
        let run = AlgorithmRun::new(name, checkpoints, algorithm.profile());
        Ok(self.session.insert(run))
    }

    /// Run every config in order against the shared rules.
    ///
    /// A config's own schedule overrides `schedule`. The first failure is
    /// returned immediately; runs completed before it stay in the session.
    pub fn compare<I>(&mut self, configs: I, schedule: Schedule) -> Result<(), BenchError>
    where
        I: IntoIterator<Item = AlgorithmConfig<G>>,
    {
        for ref config in configs {
            self.run_config(config, schedule)?;
        }
        Ok(())
    }

    /// Like [`Benchmark::compare`] for configs described as data.
    ///
    /// Each entry is parsed right before it would run, so a malformed entry
    /// fails without touching the results of the entries before it.
    pub fn compare_entries(
        &mut self,
        registry: &Registry<G>,
        entries: &[Value],
        schedule: Schedule,
    ) -> Result<(), BenchError> {
        for entry in entries {
            let ref config = AlgorithmConfig::parse(registry, entry)?;
            self.run_config(config, schedule)?;
        }
        Ok(())
    }

    fn run_config(&mut self, config: &AlgorithmConfig<G>, schedule: Schedule) -> Result<(), BenchError> {
        let schedule = config.schedule().unwrap_or(schedule);
        self.run_algorithm(config.constructor(), config.name(), schedule, config.options())
            .map(|_| ())
    }

    /// Final iteration and exploitability per algorithm, in insertion order.
    pub fn summary(&self) -> Summary {
        Summary::from(&self.session)
    }
    pub fn print_summary(&self) {
        println!("{}", self.summary());
    }

    /// Draw every run's convergence curve.
    ///
    /// Returns the in-memory image unless the target is file-only.
    pub fn plot_convergence(&self, chart: &Chart, target: Target) -> Result<Option<Image>, BenchError> {
        match target {
            Target::Memory => chart.render(&self.session).map(Some),
            Target::File(ref path) => {
                chart.save(&self.session, path)?;
                log::info!("{:<32}{:<32}", "plot saved", path.display());
                Ok(None)
            }
            Target::Both(ref path) => {
                chart.save(&self.session, path)?;
                log::info!("{:<32}{:<32}", "plot saved", path.display());
                chart.render(&self.session).map(Some)
            }
        }
    }
}
