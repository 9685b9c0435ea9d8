use super::Edge;

/// Public action sequence from the root of the betting round.
///
/// The player to act alternates starting with player 0, so the
/// history alone determines whose turn it is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct History(Vec<Edge>);

impl History {
    pub fn root() -> Self {
        Self::default()
    }
    pub fn edges(&self) -> &[Edge] {
        &self.0
    }
    /// History after taking `edge` from here.
    pub fn apply(&self, edge: Edge) -> Self {
        let mut edges = self.0.clone();
        edges.push(edge);
        Self(edges)
    }
    /// Index of the player to act.
    pub fn player(&self) -> usize {
        self.0.len() % 2
    }
    /// Index of the player who took the last action.
    pub fn actor(&self) -> Option<usize> {
        self.0.len().checked_sub(1).map(|n| n % 2)
    }
    pub fn is_terminal(&self) -> bool {
        match self.0.as_slice() {
            [.., Edge::Fold] => true,
            [.., Edge::Call] => true,
            [Edge::Check, Edge::Check] => true,
            _ => false,
        }
    }
    pub fn is_showdown(&self) -> bool {
        self.is_terminal() && !self.is_folded()
    }
    pub fn is_folded(&self) -> bool {
        matches!(self.0.last(), Some(Edge::Fold))
    }
    pub fn is_called(&self) -> bool {
        matches!(self.0.last(), Some(Edge::Call))
    }
    /// Legal actions at a non-terminal history.
    pub fn choices(&self) -> [Edge; 2] {
        match self.0.last() {
            Some(Edge::Bet) => Edge::FACING,
            _ => Edge::OPEN,
        }
    }
}

impl std::fmt::Display for History {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return write!(f, "·");
        }
        self.0.iter().try_for_each(|e| write!(f, "{}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_histories() {
        let ref root = History::root();
        let xx = root.apply(Edge::Check).apply(Edge::Check);
        let bc = root.apply(Edge::Bet).apply(Edge::Call);
        let bf = root.apply(Edge::Bet).apply(Edge::Fold);
        let xbc = root.apply(Edge::Check).apply(Edge::Bet).apply(Edge::Call);
        let xbf = root.apply(Edge::Check).apply(Edge::Bet).apply(Edge::Fold);
        assert!(!root.is_terminal());
        assert!(!root.apply(Edge::Check).is_terminal());
        assert!(!root.apply(Edge::Check).apply(Edge::Bet).is_terminal());
        assert!([xx, bc, bf, xbc, xbf].iter().all(History::is_terminal));
    }

    #[test]
    fn alternating_turns() {
        let ref root = History::root();
        assert_eq!(root.player(), 0);
        assert_eq!(root.actor(), None);
        assert_eq!(root.apply(Edge::Check).player(), 1);
        assert_eq!(root.apply(Edge::Check).apply(Edge::Bet).player(), 0);
        assert_eq!(root.apply(Edge::Check).apply(Edge::Bet).actor(), Some(1));
    }

    #[test]
    fn choices_depend_on_facing_bet() {
        let ref root = History::root();
        assert_eq!(root.choices(), Edge::OPEN);
        assert_eq!(root.apply(Edge::Check).choices(), Edge::OPEN);
        assert_eq!(root.apply(Edge::Bet).choices(), Edge::FACING);
    }
}
