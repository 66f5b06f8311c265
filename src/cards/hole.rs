use super::card::Card;

/// A player's two private hole cards, stored higher card first.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Hole(Card, Card);

impl Hole {
    pub fn high(&self) -> Card {
        self.0
    }
    pub fn low(&self) -> Card {
        self.1
    }
    pub fn cards(&self) -> [Card; 2] {
        [self.0, self.1]
    }
    pub fn suited(&self) -> bool {
        self.0.suit() == self.1.suit()
    }
    pub fn paired(&self) -> bool {
        self.0.rank() == self.1.rank()
    }
    pub fn pretty(&self) -> String {
        Card::pretty_all(&self.cards())
    }
}

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        debug_assert!(a != b);
        match a > b {
            true => Self(a, b),
            false => Self(b, a),
        }
    }
}

impl TryFrom<&str> for Hole {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match Card::parse(s)?.as_slice() {
            [a, b] if a != b => Ok(Self::from((*a, *b))),
            _ => Err("hole must contain exactly two distinct cards".into()),
        }
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}
