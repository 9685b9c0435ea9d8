/// A private card, ordered by rank. Higher rank wins at showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    pub fn rank(&self) -> u8 {
        self.0
    }
}

impl From<u8> for Card {
    fn from(rank: u8) -> Self {
        Self(rank)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const FACES: [char; 3] = ['J', 'Q', 'K'];
        match FACES.get(self.0 as usize) {
            Some(face) => write!(f, "{}", face),
            None => write!(f, "{}", self.0),
        }
    }
}
