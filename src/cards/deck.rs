use super::alphabet::Alphabet;
use super::card::Card;
use super::hole::Hole;
use crate::Error;
use crate::Result;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// A dealing capability: reset to a full shuffled deck, then draw from it.
///
/// Draws remove cards, so nothing repeats until the next [`Deck::shuffle`].
pub trait Deck {
    /// Restores every card of the full deck and permutes them.
    fn shuffle(&mut self);
    /// Removes and returns the top `n` cards.
    ///
    /// Fails with [`Error::InsufficientCards`] rather than returning fewer.
    fn draw(&mut self, n: usize) -> Result<Vec<Card>>;
    /// Cards still available to draw.
    fn remaining(&self) -> usize;

    /// Draws two cards as a player's hole cards.
    fn hole(&mut self) -> Result<Hole> {
        let cards = self.draw(2)?;
        Ok(Hole::from((cards[0], cards[1])))
    }
}

/// The complete card list for one alphabet, built once and owned by
/// whichever deck deals from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullDeck(Vec<Card>);

impl From<&Alphabet> for FullDeck {
    fn from(alphabet: &Alphabet) -> Self {
        Self(alphabet.cards())
    }
}

impl FullDeck {
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn size(&self) -> usize {
        self.0.len()
    }
}

/// A deck shuffled by its own seeded generator.
///
/// The generator is seeded once at construction and keeps advancing across
/// shuffles, so a sequence of rounds replays exactly for the same seed.
/// Every shuffle starts over from the [`FullDeck`], never from leftovers.
#[derive(Debug, Clone)]
pub struct SeededDeck<R = StdRng> {
    full: FullDeck,
    cards: Vec<Card>,
    rng: R,
}

impl SeededDeck<StdRng> {
    pub fn new(seed: u64, full: FullDeck) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), full)
    }
}

impl<R: Rng> SeededDeck<R> {
    pub fn with_rng(rng: R, full: FullDeck) -> Self {
        Self {
            cards: Vec::with_capacity(full.size()),
            full,
            rng,
        }
    }
    pub fn full(&self) -> &FullDeck {
        &self.full
    }
}

impl<R: Rng> Deck for SeededDeck<R> {
    fn shuffle(&mut self) {
        self.cards.clear();
        self.cards.extend_from_slice(self.full.cards());
        self.cards.shuffle(&mut self.rng);
    }
    fn draw(&mut self, n: usize) -> Result<Vec<Card>> {
        let remaining = self.cards.len();
        if n > remaining {
            return Err(Error::InsufficientCards {
                requested: n,
                remaining,
            });
        }
        // top of the deck is the back of the vec
        let mut drawn = self.cards.split_off(remaining - n);
        drawn.reverse();
        Ok(drawn)
    }
    fn remaining(&self) -> usize {
        self.cards.len()
    }
}
