use super::*;
use crate::Probability;
use crate::Utility;

/// Immutable game definition handed to every solver constructor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rules {
    cards: u8,
    ante: Utility,
    bet: Utility,
}

impl Default for Rules {
    /// Classic three-card Kuhn poker with unit ante and unit bet.
    fn default() -> Self {
        Self {
            cards: 3,
            ante: 1.,
            bet: 1.,
        }
    }
}

impl Rules {
    pub fn new(cards: u8, ante: Utility, bet: Utility) -> anyhow::Result<Self> {
        anyhow::ensure!(cards >= 3, "kuhn poker needs at least 3 cards, got {}", cards);
        anyhow::ensure!(ante > 0., "ante must be positive, got {}", ante);
        anyhow::ensure!(bet > 0., "bet must be positive, got {}", bet);
        Ok(Self { cards, ante, bet })
    }
    pub fn cards(&self) -> u8 {
        self.cards
    }
    pub fn ante(&self) -> Utility {
        self.ante
    }
    pub fn bet(&self) -> Utility {
        self.bet
    }
    /// Human-readable name for reports.
    pub fn label(&self) -> String {
        match self.cards {
            3 => String::from("Kuhn Poker"),
            n => format!("{}-card Kuhn Poker", n),
        }
    }
    pub fn deck(&self) -> impl Iterator<Item = Card> + Clone {
        (0..self.cards).map(Card::from)
    }
    /// Every ordered (player 0, player 1) deal. All are equally likely.
    pub fn deals(&self) -> Vec<[Card; 2]> {
        self.deck()
            .flat_map(|a| self.deck().filter(move |b| *b != a).map(move |b| [a, b]))
            .collect()
    }
    /// Chance probability of any single deal.
    pub fn deal_probability(&self) -> Probability {
        let n = self.cards as Probability;
        1. / (n * (n - 1.))
    }
    /// Terminal payoff to player 0. Player 1 receives the negation.
    pub fn payoff(&self, history: &History, deal: [Card; 2]) -> Utility {
        debug_assert!(history.is_terminal());
        if history.is_folded() {
            match history.actor() {
                Some(0) => -self.ante,
                _ => self.ante,
            }
        } else {
            let stake = if history.is_called() {
                self.ante + self.bet
            } else {
                self.ante
            };
            if deal[0] > deal[1] { stake } else { -stake }
        }
    }
    /// Terminal payoff to `player`.
    pub fn utility(&self, history: &History, deal: [Card; 2], player: usize) -> Utility {
        match player {
            0 => self.payoff(history, deal),
            _ => -self.payoff(history, deal),
        }
    }
}
