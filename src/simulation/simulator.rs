use super::progress::Progress;
use super::round::Round;
use crate::BOARD_SIZE;
use crate::Error;
use crate::PLAYERS;
use crate::Result;
use crate::cards::Alphabet;
use crate::cards::Deck;
use crate::cards::FullDeck;
use crate::cards::SeededDeck;

/// Deals independent, reproducible rounds of Hold'em.
///
/// Each [`Simulator::step`] reshuffles the full deck, deals a five-card board
/// and then two hole cards per player, and scores every hand. The deck's
/// generator is seeded once, so the same seed and parameters always replay
/// the same sequence of rounds.
#[derive(Debug, Clone)]
pub struct Simulator<D = SeededDeck> {
    deck: D,
    players: usize,
}

impl Default for Simulator {
    fn default() -> Self {
        Self {
            deck: SeededDeck::new(crate::SEED, FullDeck::from(&Alphabet::default())),
            players: PLAYERS,
        }
    }
}

impl Simulator {
    /// Seeded simulator over the given suit and rank alphabets.
    ///
    /// Alphabets and player count are validated here. Whether the deck is
    /// large enough for every player is only known once cards are drawn.
    pub fn new(seed: u64, suits: &str, ranks: &str, players: usize) -> Result<Self> {
        Self::from_alphabet(seed, &Alphabet::new(suits, ranks)?, players)
    }
    /// Seeded simulator over an already validated alphabet.
    pub fn from_alphabet(seed: u64, alphabet: &Alphabet, players: usize) -> Result<Self> {
        Self::with_deck(SeededDeck::new(seed, FullDeck::from(alphabet)), players)
    }
}

impl<D: Deck> Simulator<D> {
    pub fn with_deck(deck: D, players: usize) -> Result<Self> {
        match players {
            0 => Err(Error::Players),
            _ => Ok(Self { deck, players }),
        }
    }

    pub fn players(&self) -> usize {
        self.players
    }

    /// Deals and scores one round.
    pub fn step(&mut self, verbose: bool) -> Result<Round> {
        self.deck.shuffle();
        let board = self.deck.draw(BOARD_SIZE)?;
        let hands = (0..self.players)
            .map(|_| self.deck.hole())
            .collect::<Result<Vec<_>>>()?;
        let round = Round::deal(board, hands);
        log::trace!("dealt {} cards, {} left", round.cards().len(), self.deck.remaining());
        if verbose {
            for line in round.summary() {
                log::info!("{}", line);
            }
        }
        Ok(round)
    }

    /// Deals `n` rounds in order, stopping at the first error.
    pub fn run(&mut self, n: usize, progress: bool) -> Result<Vec<Round>> {
        self.run_with(n, false, progress)
    }

    /// [`Simulator::run`], logging every round's summary when `verbose`.
    pub fn run_with(&mut self, n: usize, verbose: bool, progress: bool) -> Result<Vec<Round>> {
        log::info!("simulating {} rounds of {} players", n, self.players);
        let progress = Progress::new(n, progress);
        let mut rounds = Vec::with_capacity(n);
        for _ in 0..n {
            rounds.push(self.step(verbose)?);
            progress.tick();
        }
        progress.finish();
        log::info!("simulated {} rounds", rounds.len());
        Ok(rounds)
    }
}
