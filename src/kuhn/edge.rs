/// Betting actions. Which pair is legal depends only on whether
/// the previous action was a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Edge {
    Check,
    Bet,
    Call,
    Fold,
}

impl Edge {
    /// Choices available when not facing a bet.
    pub const OPEN: [Edge; 2] = [Edge::Check, Edge::Bet];
    /// Choices available when facing a bet.
    pub const FACING: [Edge; 2] = [Edge::Fold, Edge::Call];
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Edge::Check => write!(f, "x"),
            Edge::Bet => write!(f, "b"),
            Edge::Call => write!(f, "c"),
            Edge::Fold => write!(f, "f"),
        }
    }
}
