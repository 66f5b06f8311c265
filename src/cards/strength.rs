use super::card::Card;
use super::hole::Hole;
use rs_poker::core::Hand;
use rs_poker::core::Rank;
use rs_poker::core::Rankable;

/// An evaluated hand, as scored by the `rs_poker` evaluator.
///
/// Opaque apart from its ordering: a greater strength beats a lesser one and
/// equal strengths split the pot. No ranking logic lives in this crate.
#[derive(Debug, Clone, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength(Rank);

impl Strength {
    /// Best five-card hand out of the hole cards and the board.
    pub fn evaluate(hole: &Hole, board: &[Card]) -> Self {
        let mut hand = Hand::default();
        for card in board.iter().chain(hole.cards().iter()) {
            hand.insert(rs_poker::core::Card::from(*card));
        }
        Self(hand.rank())
    }
    /// Hand category, e.g. "Two Pair".
    pub fn category(&self) -> &'static str {
        match self.0 {
            Rank::HighCard(_) => "High Card",
            Rank::OnePair(_) => "Pair",
            Rank::TwoPair(_) => "Two Pair",
            Rank::ThreeOfAKind(_) => "Three of a Kind",
            Rank::Straight(_) => "Straight",
            Rank::Flush(_) => "Flush",
            Rank::FullHouse(_) => "Full House",
            Rank::FourOfAKind(_) => "Four of a Kind",
            Rank::StraightFlush(_) => "Straight Flush",
        }
    }
}

impl From<Strength> for Rank {
    fn from(s: Strength) -> Self {
        s.0
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.category())
    }
}
