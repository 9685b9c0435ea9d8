use serde::Deserialize;
use serde::Serialize;

/// How chance outcomes are handled on each iteration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sampling {
    /// Enumerate every deal, weighted by its chance probability.
    #[default]
    Vanilla,
    /// Sample a single deal uniformly and traverse only its subtree.
    Chance,
}
