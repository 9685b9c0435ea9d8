use super::AlgorithmRun;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Result store: algorithm name → recorded run, in insertion order.
///
/// Reporting order is the order in which names were first inserted.
/// Re-inserting a name replaces the run but keeps its position.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkSession {
    label: String,
    order: Vec<String>,
    runs: HashMap<String, AlgorithmRun>,
}

impl BenchmarkSession {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }
    /// Name of the game under test. Cosmetic.
    pub fn label(&self) -> &str {
        &self.label
    }
    /// Store `run` under its name, replacing any earlier run of that name.
    pub fn insert(&mut self, run: AlgorithmRun) -> &AlgorithmRun {
        match self.runs.entry(run.name().to_string()) {
            Entry::Occupied(mut entry) => {
                log::debug!("{:<32}{:<32}", "replacing run", run.name());
                entry.insert(run);
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                self.order.push(entry.key().clone());
                entry.insert(run)
            }
        }
    }
    pub fn get(&self, name: &str) -> Option<&AlgorithmRun> {
        self.runs.get(name)
    }
    /// Runs in insertion order.
    pub fn runs(&self) -> impl Iterator<Item = &AlgorithmRun> {
        self.order.iter().filter_map(|name| self.runs.get(name))
    }
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
    pub fn len(&self) -> usize {
        self.order.len()
    }
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
