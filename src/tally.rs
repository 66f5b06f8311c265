use crate::Probability;
use crate::cards::Alphabet;
use crate::cards::Hole;
use crate::cards::Rank;
use crate::simulation::Round;

/// Per-starting-hand outcome counts over many rounds.
///
/// Each dealt hole lands in one cell of a ranks × ranks grid ordered
/// strongest first: pairs on the diagonal, offsuit combos above it at
/// (high, low), suited combos below it at (low, high). A hole wins when it
/// alone holds the best strength of its round and ties when it shares it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    ranks: Vec<Rank>,
    deals: Vec<Vec<u64>>,
    wins: Vec<Vec<u64>>,
    ties: Vec<Vec<u64>>,
}

impl Tally {
    pub fn new(alphabet: &Alphabet) -> Self {
        let ranks = alphabet.descending();
        let n = ranks.len();
        Self {
            ranks,
            deals: vec![vec![0; n]; n],
            wins: vec![vec![0; n]; n],
            ties: vec![vec![0; n]; n],
        }
    }

    pub fn from_rounds<'a>(alphabet: &Alphabet, rounds: impl IntoIterator<Item = &'a Round>) -> Self {
        let mut tally = Self::new(alphabet);
        for round in rounds {
            tally.add(round);
        }
        tally
    }

    /// Grid cell of a starting hand under the matrix convention.
    pub fn cell(&self, hole: &Hole) -> Option<(usize, usize)> {
        let hi = self.index(hole.high().rank())?;
        let lo = self.index(hole.low().rank())?;
        match hole.suited() {
            true => Some((lo, hi)),
            false => Some((hi, lo)),
        }
    }

    fn index(&self, rank: Rank) -> Option<usize> {
        self.ranks.iter().position(|r| *r == rank)
    }

    pub fn add(&mut self, round: &Round) {
        let winners = round.winners();
        for (seat, hole) in round.hands().iter().enumerate() {
            let Some((i, j)) = self.cell(hole) else {
                log::warn!("hole {} outside the tallied alphabet", hole);
                continue;
            };
            self.deals[i][j] += 1;
            if winners.contains(&seat) {
                match winners.len() {
                    1 => self.wins[i][j] += 1,
                    _ => self.ties[i][j] += 1,
                }
            }
        }
    }

    /// Axis labels, strongest rank first.
    pub fn labels(&self) -> Vec<String> {
        self.ranks.iter().map(|r| r.to_string()).collect()
    }
    pub fn deals(&self) -> &[Vec<u64>] {
        &self.deals
    }
    /// Fraction of deals won outright, 0 for hands never dealt.
    pub fn wins(&self) -> Vec<Vec<Probability>> {
        Self::rates(&self.wins, &self.deals)
    }
    /// Fraction of deals that split the pot, 0 for hands never dealt.
    pub fn ties(&self) -> Vec<Vec<Probability>> {
        Self::rates(&self.ties, &self.deals)
    }

    fn rates(counts: &[Vec<u64>], deals: &[Vec<u64>]) -> Vec<Vec<Probability>> {
        counts
            .iter()
            .zip(deals)
            .map(|(counts, deals)| {
                counts
                    .iter()
                    .zip(deals)
                    .map(|(&n, &d)| match d {
                        0 => 0.,
                        d => n as Probability / d as Probability,
                    })
                    .collect()
            })
            .collect()
    }
}
