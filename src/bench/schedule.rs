use super::BenchError;
use serde::Deserialize;
use serde::Serialize;

/// What happens to iterations left over after the last full block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Remainder {
    /// Never run a partial block. Trailing iterations are not executed.
    #[default]
    Truncate,
    /// Run one final partial block and checkpoint at the full budget.
    Complete,
}

/// One uniform-size unit of work between two checkpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    /// Iterations to advance in this block.
    pub size: usize,
    /// Cumulative iterations once this block completes.
    pub total: usize,
}

/// Iteration budget and checkpoint spacing for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    iterations: usize,
    interval: usize,
    #[serde(default)]
    remainder: Remainder,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            iterations: crate::DEFAULT_ITERATIONS,
            interval: crate::DEFAULT_INTERVAL,
            remainder: Remainder::Truncate,
        }
    }
}

impl Schedule {
    /// Both values must be positive. An interval larger than the budget is
    /// accepted as given and yields no blocks under [`Remainder::Truncate`].
    pub fn new(iterations: usize, interval: usize) -> Result<Self, BenchError> {
        if iterations == 0 {
            return Err(BenchError::Schedule(String::from("iteration budget must be positive")));
        }
        if interval == 0 {
            return Err(BenchError::Schedule(String::from("checkpoint interval must be positive")));
        }
        Ok(Self {
            iterations,
            interval,
            remainder: Remainder::default(),
        })
    }
    pub fn with_remainder(self, remainder: Remainder) -> Self {
        Self { remainder, ..self }
    }
    pub fn iterations(&self) -> usize {
        self.iterations
    }
    pub fn interval(&self) -> usize {
        self.interval
    }
    pub fn remainder(&self) -> Remainder {
        self.remainder
    }
    /// Iterations that do not fill a whole block.
    pub fn leftover(&self) -> usize {
        self.iterations % self.interval
    }
    /// Blocks to execute, in order.
    pub fn blocks(&self) -> Vec<Block> {
        let full = self.iterations / self.interval;
        let mut blocks = (1..=full)
            .map(|k| Block {
                size: self.interval,
                total: k * self.interval,
            })
            .collect::<Vec<_>>();
        if self.remainder == Remainder::Complete && self.leftover() > 0 {
            blocks.push(Block {
                size: self.leftover(),
                total: self.iterations,
            });
        }
        blocks
    }
}

impl std::fmt::Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} iterations every {}", self.iterations, self.interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(schedule: Schedule) -> Vec<usize> {
        schedule.blocks().iter().map(|b| b.total).collect()
    }

    #[test]
    fn even_budget() {
        let schedule = Schedule::new(30_000, 10_000).expect("valid");
        assert_eq!(totals(schedule), vec![10_000, 20_000, 30_000]);
    }

    #[test]
    fn truncates_remainder() {
        let schedule = Schedule::new(25_000, 10_000).expect("valid");
        assert_eq!(totals(schedule), vec![10_000, 20_000]);
        assert_eq!(schedule.leftover(), 5_000);
    }

    #[test]
    fn completes_remainder() {
        let schedule = Schedule::new(25_000, 10_000)
            .expect("valid")
            .with_remainder(Remainder::Complete);
        assert_eq!(totals(schedule), vec![10_000, 20_000, 25_000]);
        assert_eq!(schedule.blocks().last().map(|b| b.size), Some(5_000));
    }

    #[test]
    fn oversized_interval_has_no_blocks() {
        let schedule = Schedule::new(100, 500).expect("accepted");
        assert!(schedule.blocks().is_empty());
    }

    #[test]
    fn block_counts_follow_integer_division() {
        for iterations in [1, 7, 10, 99, 100, 101, 1000] {
            for interval in [1, 3, 10, 33, 100] {
                let schedule = Schedule::new(iterations, interval).expect("valid");
                let blocks = schedule.blocks();
                assert_eq!(blocks.len(), iterations / interval);
                for (i, block) in blocks.iter().enumerate() {
                    assert_eq!(block.size, interval);
                    assert_eq!(block.total, (i + 1) * interval);
                }
            }
        }
    }

    #[test]
    fn zero_values_rejected() {
        assert!(matches!(Schedule::new(0, 10), Err(BenchError::Schedule(_))));
        assert!(matches!(Schedule::new(10, 0), Err(BenchError::Schedule(_))));
    }
}
