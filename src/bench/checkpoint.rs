use crate::Utility;

/// Exploitability sampled after a completed block of iterations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Checkpoint {
    iteration: usize,
    exploitability: Utility,
}

impl Checkpoint {
    /// Cumulative iterations executed when the sample was taken.
    pub fn iteration(&self) -> usize {
        self.iteration
    }
    pub fn exploitability(&self) -> Utility {
        self.exploitability
    }
}

impl From<(usize, Utility)> for Checkpoint {
    fn from((iteration, exploitability): (usize, Utility)) -> Self {
        Self {
            iteration,
            exploitability,
        }
    }
}
