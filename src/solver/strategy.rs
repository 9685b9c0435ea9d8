use super::Profile;
use crate::Probability;
use crate::Utility;
use crate::kuhn::*;
use std::collections::BTreeMap;

/// Snapshot of an averaged strategy profile over Kuhn poker.
///
/// Holds the accumulated strategy weight of every visited information set.
/// Unvisited information sets, or ones with no accumulated weight, play
/// uniformly at random.
#[derive(Debug, Clone)]
pub struct Strategy {
    rules: Rules,
    epochs: usize,
    weights: BTreeMap<Info, Vec<(Edge, Probability)>>,
}

impl Strategy {
    pub fn new(rules: Rules, epochs: usize, weights: BTreeMap<Info, Vec<(Edge, Probability)>>) -> Self {
        Self {
            rules,
            epochs,
            weights,
        }
    }
    pub fn rules(&self) -> &Rules {
        &self.rules
    }
    /// Iterations that produced this snapshot.
    pub fn epochs(&self) -> usize {
        self.epochs
    }
    /// Average probability of taking `edge` at `info`.
    pub fn averaged(&self, info: &Info, edge: &Edge) -> Probability {
        let uniform = 1. / info.history().choices().len() as Probability;
        let Some(policy) = self.weights.get(info) else {
            return uniform;
        };
        let total = policy.iter().map(|(_, w)| w).sum::<Probability>();
        if total <= 0. {
            return uniform;
        }
        policy
            .iter()
            .find(|(e, _)| e == edge)
            .map(|(_, w)| w / total)
            .unwrap_or(0.)
    }

    /// Best-response value of each player against the other's average strategy.
    ///
    /// The hero cannot see the opponent's card, so for each hero card the
    /// recursion carries a weight per possible opponent card (chance times
    /// opponent reach) and picks one action per hero information set.
    pub fn responses(&self) -> Vec<Utility> {
        (0..2).map(|hero| self.response(hero)).collect()
    }
    /// Expected payoff to player 0 when both players follow this profile.
    pub fn value(&self) -> Utility {
        let p = self.rules.deal_probability();
        self.rules
            .deals()
            .into_iter()
            .map(|deal| p * self.evaluate(deal, &History::root()))
            .sum()
    }

    fn response(&self, hero: usize) -> Utility {
        let n = self.rules.cards() as Probability;
        self.rules
            .deck()
            .map(|card| {
                let range = self
                    .rules
                    .deck()
                    .filter(|other| *other != card)
                    .map(|other| (other, 1. / (n - 1.)))
                    .collect::<Vec<_>>();
                self.optimal(hero, card, &History::root(), &range) / n
            })
            .sum()
    }
    fn optimal(&self, hero: usize, card: Card, history: &History, range: &[(Card, Probability)]) -> Utility {
        if history.is_terminal() {
            return range
                .iter()
                .map(|(other, p)| p * self.rules.utility(history, Self::deal(hero, card, *other), hero))
                .sum();
        }
        if history.player() == hero {
            history
                .choices()
                .iter()
                .map(|edge| self.optimal(hero, card, &history.apply(*edge), range))
                .fold(Utility::NEG_INFINITY, Utility::max)
        } else {
            history
                .choices()
                .iter()
                .map(|edge| {
                    let ref reached = range
                        .iter()
                        .map(|(other, p)| (*other, p * self.averaged(&Info::new(*other, history.clone()), edge)))
                        .collect::<Vec<_>>();
                    self.optimal(hero, card, &history.apply(*edge), reached)
                })
                .sum()
        }
    }
    fn evaluate(&self, deal: [Card; 2], history: &History) -> Utility {
        if history.is_terminal() {
            return self.rules.payoff(history, deal);
        }
        let ref info = Info::new(deal[history.player()], history.clone());
        history
            .choices()
            .iter()
            .map(|edge| self.averaged(info, edge) * self.evaluate(deal, &history.apply(*edge)))
            .sum()
    }
    fn deal(hero: usize, card: Card, other: Card) -> [Card; 2] {
        match hero {
            0 => [card, other],
            _ => [other, card],
        }
    }
}

impl Profile for Strategy {
    fn best_response(&self) -> anyhow::Result<Vec<Utility>> {
        let responses = self.responses();
        anyhow::ensure!(
            responses.iter().all(|v| v.is_finite()),
            "non-finite best response {:?} after {} epochs",
            responses,
            self.epochs
        );
        Ok(responses)
    }
}

#[rustfmt::skip]
impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}  Epochs: {}", self.rules.label(), self.epochs)?;
        writeln!(f, "┌────────┬──────┬──────────┐")?;
        writeln!(f, "│ Info   │ Edge │  Average │")?;
        writeln!(f, "├────────┼──────┼──────────┤")?;
        for (info, policy) in &self.weights {
            for (edge, _) in policy {
                writeln!(f, "│ {:<6} │ {:>4} │ {:>8.4} │", info.to_string(), edge.to_string(), self.averaged(info, edge))?;
            }
        }
        writeln!(f, "└────────┴──────┴──────────┘")?;
        Ok(())
    }
}
