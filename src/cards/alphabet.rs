use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;
use crate::Error;
use crate::Result;

/// The rank and suit characters a deck is built from.
///
/// Ranks keep the order they were given in, which is weakest first for the
/// default `"23456789TJQKA"`. Each character must name a real rank or suit
/// and appear at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    suits: Vec<Suit>,
    ranks: Vec<Rank>,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            suits: vec![Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club],
            ranks: (0..13).map(Rank::from).collect(),
        }
    }
}

impl Alphabet {
    pub fn new(suits: &str, ranks: &str) -> Result<Self> {
        Ok(Self {
            suits: Self::letters(suits, "suit")?,
            ranks: Self::letters(ranks, "rank")?,
        })
    }

    fn letters<T>(alphabet: &str, kind: &'static str) -> Result<Vec<T>>
    where
        T: TryFrom<char, Error = String> + PartialEq,
    {
        let invalid = |reason: String| Error::Alphabet {
            kind,
            alphabet: alphabet.to_string(),
            reason,
        };
        let mut letters = Vec::new();
        for c in alphabet.chars() {
            let letter = T::try_from(c).map_err(invalid)?;
            if letters.contains(&letter) {
                return Err(invalid(format!("duplicate {:?}", c)));
            }
            letters.push(letter);
        }
        match letters.is_empty() {
            true => Err(invalid("empty".into())),
            false => Ok(letters),
        }
    }

    pub fn suits(&self) -> &[Suit] {
        &self.suits
    }
    pub fn ranks(&self) -> &[Rank] {
        &self.ranks
    }
    /// Ranks ordered strongest first, the matrix axis order.
    pub fn descending(&self) -> Vec<Rank> {
        let mut ranks = self.ranks.clone();
        ranks.sort_by(|a, b| b.cmp(a));
        ranks
    }
    /// Number of distinct cards the alphabet spans.
    pub fn size(&self) -> usize {
        self.suits.len() * self.ranks.len()
    }
    /// Every card, rank-major in alphabet order.
    pub fn cards(&self) -> Vec<Card> {
        self.ranks
            .iter()
            .flat_map(|&r| self.suits.iter().map(move |&s| Card::from((r, s))))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_standard_strings() {
        assert_eq!(Alphabet::default(), Alphabet::new("shdc", "23456789TJQKA").unwrap());
    }

    #[test]
    fn standard_deck_has_52_distinct_cards() {
        let cards = Alphabet::default().cards();
        let mut dedup = cards.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(cards.len(), 52);
        assert_eq!(dedup.len(), 52);
    }

    #[test]
    fn short_alphabet() {
        let alphabet = Alphabet::new("sh", "TJQKA").unwrap();
        assert_eq!(alphabet.size(), 10);
        assert_eq!(alphabet.cards()[0].to_string(), "Ts");
        assert_eq!(alphabet.cards()[1].to_string(), "Th");
    }

    #[test]
    fn descending_is_strongest_first() {
        let alphabet = Alphabet::new("s", "2A7").unwrap();
        assert_eq!(alphabet.descending(), vec![Rank::Ace, Rank::Seven, Rank::Two]);
    }

    #[test]
    fn rejects_malformed_alphabets() {
        assert!(matches!(
            Alphabet::new("", "23"),
            Err(Error::Alphabet { kind: "suit", .. })
        ));
        assert!(matches!(
            Alphabet::new("sx", "23"),
            Err(Error::Alphabet { kind: "suit", .. })
        ));
        assert!(matches!(
            Alphabet::new("sh", "223"),
            Err(Error::Alphabet { kind: "rank", .. })
        ));
        assert!(matches!(
            Alphabet::new("sh", "231"),
            Err(Error::Alphabet { kind: "rank", .. })
        ));
    }
}
