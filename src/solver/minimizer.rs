use super::*;
use crate::Probability;
use crate::Utility;
use crate::bench::Options;
use crate::bench::Registry;
use crate::kuhn::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Per-iteration accumulation of (strategy weight, regret) deltas.
type Deltas = BTreeMap<Info, BTreeMap<Edge, (Probability, Utility)>>;

/// Tabular counterfactual regret minimizer over Kuhn poker.
///
/// Variants are selected through [`Settings`]:
/// - `S` — [`Sampling`]: enumerate all deals or sample one per iteration
/// - `R` — [`RegretSchedule`]: vanilla, CFR+, linear, discounted, Pluribus
/// - `W` — [`PolicySchedule`]: constant, linear, quadratic, exponential
///
/// Both players are updated simultaneously. Regret and weight deltas are
/// collected over the whole iteration and folded into the accumulators once,
/// so every deal in an iteration sees the same current strategy.
pub struct Minimizer {
    rules: Rules,
    settings: Settings,
    epochs: usize,
    rng: SmallRng,
    encounters: BTreeMap<Info, BTreeMap<Edge, (Probability, Utility)>>,
}

impl Minimizer {
    pub fn new(rules: Rules, settings: Settings) -> Self {
        Self {
            rules,
            settings,
            epochs: 0,
            rng: SmallRng::seed_from_u64(settings.seed),
            encounters: BTreeMap::new(),
        }
    }
    /// Full-enumeration CFR. Options may override any [`Settings`] field.
    pub fn vanilla(rules: &Rules, options: &Options) -> anyhow::Result<Box<dyn Algorithm>> {
        let settings = Settings::default().layered(options)?;
        Ok(Box::new(Self::new(*rules, settings)))
    }
    /// Chance-sampled CFR. Options may override any [`Settings`] field.
    pub fn chance(rules: &Rules, options: &Options) -> anyhow::Result<Box<dyn Algorithm>> {
        let base = Settings {
            sampling: Sampling::Chance,
            ..Settings::default()
        };
        let settings = base.layered(options)?;
        Ok(Box::new(Self::new(*rules, settings)))
    }
    /// Constructors for the bundled solver family, keyed for configs.
    pub fn registry() -> Registry<Rules> {
        Registry::default()
            .register("cfr", Self::vanilla)
            .register("cs-cfr", Self::chance)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
    pub fn epochs(&self) -> usize {
        self.epochs
    }
    /// Snapshot of the average strategy.
    pub fn strategy(&self) -> Strategy {
        Strategy::new(
            self.rules,
            self.epochs,
            self.encounters
                .iter()
                .map(|(info, edges)| {
                    let policy = edges.iter().map(|(e, (w, _))| (*e, *w)).collect();
                    (info.clone(), policy)
                })
                .collect(),
        )
    }

    /// Run one iteration: traverse, then fold deltas into accumulators.
    fn step(&mut self) {
        let ref mut deltas = Deltas::new();
        match self.settings.sampling {
            Sampling::Vanilla => {
                let chance = self.rules.deal_probability();
                for deal in self.rules.deals() {
                    self.traverse(deal, History::root(), [1., 1.], chance, deltas);
                }
            }
            Sampling::Chance => {
                let deal = self.sample();
                self.traverse(deal, History::root(), [1., 1.], 1., deltas);
            }
        }
        self.epochs += 1;
        self.update(deltas);
    }
    fn sample(&mut self) -> [Card; 2] {
        let deals = self.rules.deals();
        deals[self.rng.random_range(0..deals.len())]
    }
    /// Recursive traversal returning the value to player 0.
    fn traverse(
        &self,
        deal: [Card; 2],
        history: History,
        reach: [Probability; 2],
        chance: Probability,
        deltas: &mut Deltas,
    ) -> Utility {
        if history.is_terminal() {
            return self.rules.payoff(&history, deal);
        }
        let player = history.player();
        let info = Info::new(deal[player], history.clone());
        let policy = self.current(&info);
        let values = policy
            .iter()
            .map(|(edge, p)| {
                let mut reach = reach;
                reach[player] *= p;
                self.traverse(deal, history.apply(*edge), reach, chance, deltas)
            })
            .collect::<Vec<Utility>>();
        let node = policy
            .iter()
            .zip(values.iter())
            .map(|((_, p), v)| p * v)
            .sum::<Utility>();
        let sign = if player == 0 { 1. } else { -1. };
        let counterfactual = reach[1 - player] * chance;
        let update = deltas.entry(info).or_default();
        for ((edge, p), value) in policy.iter().zip(values.iter()) {
            let delta = update.entry(*edge).or_insert((0., 0.));
            delta.0 += reach[player] * chance * p;
            delta.1 += sign * (value - node) * counterfactual;
        }
        node
    }
    /// Current strategy by regret matching on positive regrets.
    fn current(&self, info: &Info) -> Vec<(Edge, Probability)> {
        let choices = info.history().choices();
        let regrets = choices.map(|edge| self.regret(info, &edge).max(0.));
        let total = regrets.iter().sum::<Utility>();
        let uniform = 1. / choices.len() as Probability;
        choices
            .into_iter()
            .zip(regrets)
            .map(|(edge, r)| (edge, if total > 0. { r / total } else { uniform }))
            .collect()
    }
    fn regret(&self, info: &Info, edge: &Edge) -> Utility {
        self.encounters
            .get(info)
            .and_then(|edges| edges.get(edge))
            .map(|(_, r)| *r)
            .unwrap_or(0.)
    }
    fn update(&mut self, deltas: &Deltas) {
        let epoch = self.epochs;
        for (info, edges) in deltas {
            let slot = self.encounters.entry(info.clone()).or_default();
            for (edge, (weight, regret)) in edges {
                let (w, r) = slot.entry(*edge).or_insert((0., 0.));
                *w = self.settings.weight.learn(*w, *weight, epoch);
                *r = self.settings.regret.gain(*r, *regret, epoch);
            }
        }
    }
}

impl Algorithm for Minimizer {
    fn advance(&mut self, iterations: usize) -> anyhow::Result<()> {
        for _ in 0..iterations {
            self.step();
        }
        Ok(())
    }
    fn profile(&self) -> Arc<dyn Profile> {
        Arc::new(self.strategy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(options: Options, sampling: Sampling, iterations: usize) -> Strategy {
        let settings = Settings {
            sampling,
            ..Settings::default()
        }
        .layered(&options)
        .expect("valid options");
        let mut minimizer = Minimizer::new(Rules::default(), settings);
        minimizer.advance(iterations).expect("advance");
        assert_eq!(minimizer.epochs(), iterations);
        minimizer.strategy()
    }

    #[test]
    fn construction_runs_no_iterations() {
        let algorithm = Minimizer::vanilla(&Rules::default(), &Options::default()).expect("build");
        let fresh = Strategy::new(Rules::default(), 0, BTreeMap::new());
        let e = algorithm.profile().exploitability().expect("finite");
        assert!((e - fresh.exploitability().expect("finite")).abs() < 1e-12);
    }

    #[test]
    fn vanilla_converges_to_nash() {
        let ref strategy = solve(Options::default(), Sampling::Vanilla, 4096);
        let responses = strategy.responses();
        let e = responses.iter().sum::<Utility>();
        assert!(e < 0.01, "exploitability {:.5}", e);
        // game value of Kuhn poker is -1/18 for the first player
        assert!((responses[0] + 1. / 18.).abs() < 0.01, "{:?}", responses);
        assert!((responses[1] - 1. / 18.).abs() < 0.01, "{:?}", responses);
        assert!((strategy.value() + 1. / 18.).abs() < 0.01);
    }

    #[test]
    fn exploitability_decreases() {
        let early = solve(Options::default(), Sampling::Vanilla, 16).exploitability().expect("finite");
        let late = solve(Options::default(), Sampling::Vanilla, 1024).exploitability().expect("finite");
        assert!(late < early, "{:.5} !< {:.5}", late, early);
        assert!(late >= -1e-9);
    }

    #[test]
    fn cfr_plus_converges() {
        let options = Options::default().with("regret", "floored").with("weight", "linear");
        let e = solve(options, Sampling::Vanilla, 2048).exploitability().expect("finite");
        assert!(e < 0.01, "exploitability {:.5}", e);
    }

    #[test]
    fn chance_sampling_converges() {
        let options = Options::default().with("seed", 42);
        let e = solve(options, Sampling::Chance, 20_000).exploitability().expect("finite");
        assert!(e < 0.05, "exploitability {:.5}", e);
    }

    #[test]
    fn seeded_sampling_is_deterministic() {
        let a = solve(Options::default().with("seed", 9), Sampling::Chance, 500);
        let b = solve(Options::default().with("seed", 9), Sampling::Chance, 500);
        assert_eq!(a.responses(), b.responses());
    }

    #[test]
    fn advance_accumulates() {
        let mut once = Minimizer::new(Rules::default(), Settings::default());
        let mut twice = Minimizer::new(Rules::default(), Settings::default());
        once.advance(200).expect("advance");
        twice.advance(100).expect("advance");
        twice.advance(100).expect("advance");
        assert_eq!(once.strategy().responses(), twice.strategy().responses());
    }

    #[test]
    fn registry_builds_both_variants() {
        let registry = Minimizer::registry();
        assert_eq!(registry.keys().collect::<Vec<_>>(), vec!["cfr", "cs-cfr"]);
        let chance = registry.get("cs-cfr").expect("registered");
        assert!(chance(&Rules::default(), &Options::default()).is_ok());
        let bad = Options::default().with("lookback_depth", 2);
        assert!(chance(&Rules::default(), &bad).is_err());
    }

    #[test]
    fn larger_decks_converge() {
        let rules = Rules::new(5, 1., 1.).expect("valid rules");
        let mut minimizer = Minimizer::new(rules, Settings::default());
        minimizer.advance(2048).expect("advance");
        let e = minimizer.strategy().exploitability().expect("finite");
        assert!(e < 0.02, "exploitability {:.5}", e);
    }
}
