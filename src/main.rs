//! Convergence Benchmark Binary
//!
//! Runs a lineup of CFR variants on N-card Kuhn poker, prints the final
//! exploitability table, and writes the convergence plot.
//!
//! Options: --config, --iterations, --interval, --complete, --cards, --plot, --linear, --title

use cfrbench::bench::Benchmark;
use cfrbench::bench::Chart;
use cfrbench::bench::Remainder;
use cfrbench::bench::Target;
use cfrbench::config::Config;
use cfrbench::kuhn::Rules;
use cfrbench::solver::Minimizer;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Compare CFR convergence on Kuhn poker", long_about = None)]
struct Args {
    /// JSON manifest with the schedule, lineup and curve styles.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Iterations per algorithm.
    #[arg(long)]
    iterations: Option<usize>,
    /// Iterations between exploitability checkpoints.
    #[arg(long)]
    interval: Option<usize>,
    /// Run a final partial block instead of dropping leftover iterations.
    #[arg(long)]
    complete: bool,
    /// Deck size.
    #[arg(long, default_value_t = 3)]
    cards: u8,
    /// Output path. `.svg` writes vector output, anything else a bitmap.
    #[arg(long, default_value = "results/kuhn_comparison.png")]
    plot: PathBuf,
    /// Linear axes instead of log-log.
    #[arg(long)]
    linear: bool,
    /// Plot caption. Defaults to the game name.
    #[arg(long)]
    title: Option<String>,
}

impl Args {
    fn config(&self) -> anyhow::Result<Config> {
        let mut config = match self.config {
            Some(ref path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(iterations) = self.iterations {
            config.iterations = iterations;
        }
        if let Some(interval) = self.interval {
            config.interval = interval;
        }
        if self.complete {
            config.remainder = Remainder::Complete;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    cfrbench::log()?;
    let ref args = Args::parse();
    let ref config = args.config()?;
    let rules = Rules::new(args.cards, 1., 1.)?;
    let schedule = config.schedule()?;
    log::info!("{:<32}{:<32}", "game", rules.label());
    log::info!("{:<32}{:<32}", "algorithms", config.algorithms.len());
    log::info!("{:<32}{:<32}", "schedule", schedule);

    let mut benchmark = Benchmark::new(rules, rules.label());
    benchmark.compare_entries(&Minimizer::registry(), &config.algorithms, schedule)?;
    benchmark.print_summary();

    if let Some(parent) = args.plot.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let chart = Chart::default()
        .with_log_scale(!args.linear)
        .with_styles(config.styles.clone());
    let chart = match args.title {
        Some(ref title) => chart.with_title(title),
        None => chart.with_title(format!("{} Convergence", rules.label())),
    };
    benchmark.plot_convergence(&chart, Target::File(args.plot.clone()))?;
    Ok(())
}
