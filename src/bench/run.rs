use super::Checkpoint;
use crate::solver::Profile;
use std::sync::Arc;

/// One algorithm's recorded trajectory plus its final learned profile.
///
/// Checkpoint iterations are strictly increasing. The list is empty only
/// when the schedule had no complete block to run.
#[derive(Clone)]
pub struct AlgorithmRun {
    name: String,
    checkpoints: Vec<Checkpoint>,
    profile: Arc<dyn Profile>,
}

impl AlgorithmRun {
    pub fn new(name: impl Into<String>, checkpoints: Vec<Checkpoint>, profile: Arc<dyn Profile>) -> Self {
        Self {
            name: name.into(),
            checkpoints,
            profile,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn checkpoints(&self) -> &[Checkpoint] {
        &self.checkpoints
    }
    /// Strategy state at the end of the run, kept for later inspection.
    pub fn profile(&self) -> &Arc<dyn Profile> {
        &self.profile
    }
    /// Most recent checkpoint, if any block ran.
    pub fn last(&self) -> Option<&Checkpoint> {
        self.checkpoints.last()
    }
    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }
    pub fn iterations(&self) -> impl Iterator<Item = usize> + '_ {
        self.checkpoints.iter().map(Checkpoint::iteration)
    }
    pub fn exploitabilities(&self) -> impl Iterator<Item = crate::Utility> + '_ {
        self.checkpoints.iter().map(Checkpoint::exploitability)
    }
}

impl std::fmt::Debug for AlgorithmRun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlgorithmRun")
            .field("name", &self.name)
            .field("checkpoints", &self.checkpoints)
            .finish_non_exhaustive()
    }
}
