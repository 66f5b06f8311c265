use super::rank::Rank;
use super::suit::Suit;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank * 4 + suit`. The integer is opaque to everything except display
/// formatting and the conversion into the evaluator's card type.
///
/// Cards parse from two-character strings like `"As"` (ace of spades) or
/// `"Tc"` (ten of clubs). Use [`Card::parse`] for several at once.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
    /// Bracketed rank with a colored suit pip, e.g. `[ A♠ ]`.
    pub fn pretty(&self) -> String {
        format!("[ {}{} ]", self.rank(), self.suit().pretty())
    }
    /// Space-separated pretty rendering of several cards.
    pub fn pretty_all(cards: &[Card]) -> String {
        cards
            .iter()
            .map(Card::pretty)
            .collect::<Vec<_>>()
            .join(" ")
    }
    /// Parses concatenated card notations, ignoring whitespace.
    pub fn parse(s: &str) -> Result<Vec<Self>, String> {
        s.replace(char::is_whitespace, "")
            .chars()
            .collect::<Vec<_>>()
            .chunks(2)
            .map(|pair| pair.iter().collect::<String>())
            .map(|pair| Self::try_from(pair.as_str()))
            .collect::<Result<Vec<Self>, _>>()
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// Ts
/// 35
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}

/// one-way conversion into the evaluator's card
impl From<Card> for rs_poker::core::Card {
    fn from(c: Card) -> Self {
        rs_poker::core::Card {
            value: c.rank().into(),
            suit: c.suit().into(),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => {
                let rank = Rank::try_from(r)?;
                let suit = Suit::try_from(s)?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err("card must be 2 characters".into()),
        }
    }
}
