use core::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    Hearts = 0,
    Diamonds = 1,
    Spades = 2,
    Clubs = 3,
}

impl Suit {
    /// Deck-construction order: each rank is laid down heart, diamond,
    /// spade, club.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Suit::Hearts),
            1 => Some(Suit::Diamonds),
            2 => Some(Suit::Spades),
            3 => Some(Suit::Clubs),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn noun(self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Spades => "Spades",
            Suit::Clubs => "Clubs",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Suit::Hearts => "H",
            Suit::Diamonds => "D",
            Suit::Spades => "S",
            Suit::Clubs => "C",
        };
        f.write_str(symbol)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSuitError(pub String);

impl fmt::Display for ParseSuitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown suit: {}", self.0)
    }
}

impl std::error::Error for ParseSuitError {}

impl FromStr for Suit {
    type Err = ParseSuitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h" | "heart" | "hearts" => Ok(Suit::Hearts),
            "d" | "diamond" | "diamonds" => Ok(Suit::Diamonds),
            "s" | "spade" | "spades" => Ok(Suit::Spades),
            "c" | "club" | "clubs" => Ok(Suit::Clubs),
            other => Err(ParseSuitError(other.to_string())),
        }
    }
}
