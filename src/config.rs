//! Benchmark manifest.
//!
//! A JSON document describing one comparison batch:
//!
//! ```json
//! {
//!   "iterations": 100000,
//!   "interval": 5000,
//!   "remainder": "truncate",
//!   "algorithms": [
//!     ["cfr", "Vanilla CFR"],
//!     ["cfr", "CFR+", {"regret": "floored", "weight": "linear"}]
//!   ],
//!   "styles": { "CFR+": { "color": [200, 30, 30], "width": 3 } }
//! }
//! ```
//!
//! Algorithm entries stay raw JSON until the batch runs them, so a malformed
//! entry only fails once the entries before it have finished.
use crate::bench::BenchError;
use crate::bench::Remainder;
use crate::bench::Schedule;
use crate::bench::Style;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use serde_json::json;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub iterations: usize,
    pub interval: usize,
    pub remainder: Remainder,
    pub algorithms: Vec<Value>,
    pub styles: BTreeMap<String, Style>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            iterations: crate::DEFAULT_ITERATIONS,
            interval: crate::DEFAULT_INTERVAL,
            remainder: Remainder::default(),
            algorithms: Self::lineup(),
            styles: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Read a manifest from disk. Missing fields take their defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("reading {}: {}", path.display(), e))?;
        let config = serde_json::from_str::<Self>(&text)
            .map_err(|e| anyhow::anyhow!("parsing {}: {}", path.display(), e))?;
        log::debug!("{:<32}{:<32}", "loaded manifest", path.display());
        Ok(config)
    }

    /// Shared schedule for every entry.
    pub fn schedule(&self) -> Result<Schedule, BenchError> {
        Schedule::new(self.iterations, self.interval).map(|s| s.with_remainder(self.remainder))
    }

    /// Bundled comparison: one entry per regret schedule family,
    /// plus chance sampling.
    pub fn lineup() -> Vec<Value> {
        vec![
            json!(["cfr", "Vanilla CFR"]),
            json!(["cs-cfr", "Chance Sampling CFR", {"seed": 0}]),
            json!(["cfr", "CFR+", {"regret": "floored", "weight": "linear"}]),
            json!(["cfr", "Discounted CFR", {"regret": "discounted", "weight": "quadratic"}]),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bench::AlgorithmConfig;
    use crate::solver::Minimizer;

    #[test]
    fn missing_fields_default() {
        let config = serde_json::from_str::<Config>(r#"{"iterations": 300}"#).expect("parse");
        assert_eq!(config.iterations, 300);
        assert_eq!(config.interval, crate::DEFAULT_INTERVAL);
        assert_eq!(config.algorithms, Config::lineup());
        assert!(config.styles.is_empty());
    }

    #[test]
    fn full_manifest() {
        let config = serde_json::from_str::<Config>(
            r#"{
                "iterations": 1000,
                "interval": 300,
                "remainder": "complete",
                "algorithms": [["cfr", "Vanilla CFR"]],
                "styles": {"Vanilla CFR": {"color": [1, 2, 3]}}
            }"#,
        )
        .expect("parse");
        let schedule = config.schedule().expect("valid");
        assert_eq!(schedule.remainder(), Remainder::Complete);
        assert_eq!(schedule.blocks().len(), 4);
        assert_eq!(config.styles["Vanilla CFR"], Style { color: Some([1, 2, 3]), width: 2 });
    }

    #[test]
    fn unknown_fields_rejected() {
        assert!(serde_json::from_str::<Config>(r#"{"iters": 10}"#).is_err());
    }

    #[test]
    fn zero_interval_is_a_schedule_error() {
        let config = Config {
            interval: 0,
            ..Config::default()
        };
        assert!(matches!(config.schedule(), Err(BenchError::Schedule(_))));
    }

    #[test]
    fn lineup_resolves_against_bundled_registry() {
        let ref registry = Minimizer::registry();
        for entry in Config::lineup() {
            let config = AlgorithmConfig::parse(registry, &entry).expect("known entry");
            let build = config.constructor();
            assert!(build(&Default::default(), config.options()).is_ok(), "{}", config.name());
        }
    }

    #[test]
    fn load_reports_missing_file() {
        let path = std::env::temp_dir().join("cfrbench-no-such-manifest.json");
        let err = Config::load(&path).expect_err("missing");
        assert!(err.to_string().contains("cfrbench-no-such-manifest.json"));
    }

    #[test]
    fn load_round_trips_through_disk() {
        let path = std::env::temp_dir().join(format!("cfrbench-manifest-{}.json", std::process::id()));
        let config = Config {
            iterations: 42,
            ..Config::default()
        };
        std::fs::write(&path, serde_json::to_string(&config).expect("serialize")).expect("write");
        assert_eq!(Config::load(&path).expect("load"), config);
        let _ = std::fs::remove_file(path);
    }
}
