use colored::Colorize;

#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
}

impl Suit {
    /// Unicode pip, red for hearts and diamonds.
    pub fn pretty(&self) -> String {
        match self {
            Suit::Club => "♣".to_string(),
            Suit::Diamond => "♦".red().to_string(),
            Suit::Heart => "♥".red().to_string(),
            Suit::Spade => "♠".to_string(),
        }
    }
}

impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::Club,
            1 => Suit::Diamond,
            2 => Suit::Heart,
            3 => Suit::Spade,
            _ => panic!("invalid suit u8: {}", n),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

impl TryFrom<char> for Suit {
    type Error = String;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'c' => Ok(Suit::Club),
            'd' => Ok(Suit::Diamond),
            'h' => Ok(Suit::Heart),
            's' => Ok(Suit::Spade),
            _ => Err(format!("invalid suit char: {:?}", c)),
        }
    }
}
impl From<Suit> for char {
    fn from(s: Suit) -> char {
        match s {
            Suit::Club => 'c',
            Suit::Diamond => 'd',
            Suit::Heart => 'h',
            Suit::Spade => 's',
        }
    }
}

/// evaluator isomorphism
impl From<Suit> for rs_poker::core::Suit {
    fn from(s: Suit) -> Self {
        match s {
            Suit::Club => rs_poker::core::Suit::Club,
            Suit::Diamond => rs_poker::core::Suit::Diamond,
            Suit::Heart => rs_poker::core::Suit::Heart,
            Suit::Spade => rs_poker::core::Suit::Spade,
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}
