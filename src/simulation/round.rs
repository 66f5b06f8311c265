use crate::cards::Card;
use crate::cards::Hole;
use crate::cards::Strength;

/// One dealt and scored round: the board, every player's hole cards, and
/// each hole's strength against the board, in seat order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    board: Vec<Card>,
    hands: Vec<Hole>,
    ranks: Vec<Strength>,
}

impl Round {
    /// Scores every hole against the board.
    pub fn deal(board: Vec<Card>, hands: Vec<Hole>) -> Self {
        let ranks = hands
            .iter()
            .map(|hole| Strength::evaluate(hole, &board))
            .collect();
        Self {
            board,
            hands,
            ranks,
        }
    }
    pub fn board(&self) -> &[Card] {
        &self.board
    }
    pub fn hands(&self) -> &[Hole] {
        &self.hands
    }
    pub fn ranks(&self) -> &[Strength] {
        &self.ranks
    }
    /// Seats holding the best strength. More than one means a split.
    pub fn winners(&self) -> Vec<usize> {
        match self.ranks.iter().max() {
            None => vec![],
            Some(best) => self
                .ranks
                .iter()
                .enumerate()
                .filter(|(_, rank)| *rank == best)
                .map(|(seat, _)| seat)
                .collect(),
        }
    }
    /// Every card dealt this round, board first.
    pub fn cards(&self) -> Vec<Card> {
        self.board
            .iter()
            .copied()
            .chain(self.hands.iter().flat_map(Hole::cards))
            .collect()
    }
    /// Human-readable board, hands, and outcome.
    pub fn summary(&self) -> Vec<String> {
        let mut lines = vec![format!("Board: {}", Card::pretty_all(&self.board))];
        for (seat, (hole, rank)) in self.hands.iter().zip(&self.ranks).enumerate() {
            lines.push(format!("Hand {}: {}  {}", seat, hole.pretty(), rank));
        }
        lines.push(match self.winners().as_slice() {
            [] => "No players".to_string(),
            [seat] => format!("Hand {} wins with {}", seat, self.ranks[*seat]),
            seats => format!(
                "Hands {} tie with {}",
                seats
                    .iter()
                    .map(|s| s.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
                self.ranks[seats[0]]
            ),
        });
        lines
    }
}
