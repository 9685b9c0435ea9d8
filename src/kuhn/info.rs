use super::Card;
use super::History;

/// Information set of the player to act: their own card plus the
/// public betting history. The opponent's card is hidden.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Info {
    card: Card,
    history: History,
}

impl Info {
    pub fn new(card: Card, history: History) -> Self {
        Self { card, history }
    }
    pub fn card(&self) -> Card {
        self.card
    }
    pub fn history(&self) -> &History {
        &self.history
    }
    pub fn player(&self) -> usize {
        self.history.player()
    }
}

impl std::fmt::Display for Info {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.card, self.history)
    }
}
