use super::*;
use crate::bench::Options;
use serde::Deserialize;
use serde::Serialize;

/// Algorithm variant selected through constructor options.
///
/// Recognised keys are `sampling`, `regret`, `weight` and `seed`.
/// Any other key is rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub sampling: Sampling,
    pub regret: RegretSchedule,
    pub weight: PolicySchedule,
    pub seed: u64,
}

impl Settings {
    /// Overlay `options` onto these settings.
    pub fn layered(self, options: &Options) -> anyhow::Result<Self> {
        let serde_json::Value::Object(mut fields) = serde_json::to_value(self)? else {
            anyhow::bail!("settings did not serialize to an object");
        };
        fields.extend(options.iter().map(|(k, v)| (k.clone(), v.clone())));
        serde_json::from_value(serde_json::Value::Object(fields))
            .map_err(|e| anyhow::anyhow!("invalid solver options {}: {}", options, e))
    }
}
