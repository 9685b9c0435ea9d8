use crate::POLICY_MIN;
use crate::Probability;
use serde::Deserialize;
use serde::Serialize;

/// Strategy weighting scheme for the average strategy.
///
/// Controls how each iteration's strategy contributes to the profile
/// that is evaluated for exploitability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicySchedule {
    /// All iterations weighted equally.
    #[default]
    Constant,
    /// Iteration t weighted by t.
    Linear,
    /// Iteration t weighted by t².
    Quadratic,
    /// Older weight decays geometrically.
    Exponential,
}

impl PolicySchedule {
    const DECAY: f64 = 0.9999;

    /// Updates accumulated strategy weight. `epoch` counts from 1.
    pub fn learn(&self, accumulated: Probability, immediate: Probability, epoch: usize) -> Probability {
        let t = epoch as Probability;
        match self {
            Self::Constant => (accumulated + immediate).max(POLICY_MIN),
            Self::Linear => (accumulated + immediate * t).max(POLICY_MIN),
            Self::Quadratic => (accumulated + immediate * t * t).max(POLICY_MIN),
            Self::Exponential => (accumulated * Self::DECAY + immediate).max(POLICY_MIN),
        }
    }
}
