use crate::REGRET_MIN;
use crate::Utility;
use serde::Deserialize;
use serde::Serialize;

/// Regret update schedule determining the CFR variant.
///
/// - `Summed` — vanilla CFR, regrets accumulate without discounting
/// - `Floored` — CFR+, regrets floored at zero after each update
/// - `Linear` — older regrets discounted by t/(t+1)
/// - `Discounted` — DCFR with asymmetric positive/negative discounting
/// - `Pluribus` — positive regrets kept, negative regrets decayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegretSchedule {
    #[default]
    Summed,
    Floored,
    Linear,
    Discounted,
    Pluribus,
}

impl RegretSchedule {
    const ALPHA: f64 = 1.5;
    const BETA: f64 = 0.5;

    /// Updates accumulated regret with this iteration's regret.
    /// `epoch` counts from 1.
    pub fn gain(&self, accumulated: Utility, immediate: Utility, epoch: usize) -> Utility {
        let t = epoch as f64;
        match self {
            Self::Summed => (accumulated + immediate).max(REGRET_MIN),
            Self::Floored => (accumulated + immediate).max(0.),
            Self::Linear => (accumulated * t / (t + 1.) + immediate).max(REGRET_MIN),
            Self::Discounted => {
                let x = match accumulated {
                    r if r > 0. => t.powf(Self::ALPHA),
                    r if r < 0. => t.powf(Self::BETA),
                    _ => t,
                };
                (accumulated * x / (x + 1.) + immediate).max(REGRET_MIN)
            }
            Self::Pluribus if accumulated > 0. => (accumulated + immediate).max(REGRET_MIN),
            Self::Pluribus => (accumulated * t / (t + 1.) + immediate).max(REGRET_MIN),
        }
    }
}
