use crate::chance::HandChances;
use crate::model::rank::Rank;
use std::fmt;

/// Stake ledger for one hand: running total plus the minimum-call
/// watermark for the current betting round.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pot {
    total: u64,
    min_bet: u64,
}

impl Pot {
    pub const fn new() -> Self {
        Self {
            total: 0,
            min_bet: 0,
        }
    }

    /// Adds to the pot. The watermark only ever rises within a round.
    pub fn add_bet(&mut self, amount: u64) {
        self.total += amount;
        if amount > self.min_bet {
            self.min_bet = amount;
        }
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn min_bet(&self) -> u64 {
        self.min_bet
    }

    pub fn reset_min_bet(&mut self) {
        self.min_bet = 0;
    }

    pub fn clear(&mut self) {
        self.total = 0;
    }
}

/// One participant's showdown view: the probability vector and the highest
/// card held (Ace counts low).
#[derive(Debug, Clone)]
pub struct ShowdownEntry {
    pub chances: HandChances,
    pub high_card: Option<Rank>,
    pub folded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowdownError {
    NoActivePlayers,
}

impl fmt::Display for ShowdownError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShowdownError::NoActivePlayers => write!(f, "every participant has folded"),
        }
    }
}

impl std::error::Error for ShowdownError {}

/// Ranks the non-folded entries by highest guaranteed category (a vector
/// with no 1.0 entry ranks below every category), breaking category ties
/// on the highest held card. Full ties keep the first entry scanned.
pub fn resolve_winner(entries: &[ShowdownEntry]) -> Result<usize, ShowdownError> {
    let mut best: Option<(usize, i32, u8)> = None;

    for (index, entry) in entries.iter().enumerate() {
        if entry.folded {
            continue;
        }
        let category = entry
            .chances
            .guaranteed()
            .map(|cat| cat.index() as i32)
            .unwrap_or(-1);
        let high = entry.high_card.map(Rank::value).unwrap_or(0);

        match best {
            None => best = Some((index, category, high)),
            Some((_, best_category, best_high)) => {
                if category > best_category {
                    best = Some((index, category, high));
                } else if category == best_category && high > best_high {
                    best = Some((index, category, high));
                }
            }
        }
    }

    best.map(|(index, _, _)| index)
        .ok_or(ShowdownError::NoActivePlayers)
}

#[cfg(test)]
mod tests {
    use super::{Pot, ShowdownEntry, ShowdownError, resolve_winner};
    use crate::chance::HandChances;
    use crate::model::rank::Rank;

    fn entry(values: [f64; 6], high_card: Option<Rank>, folded: bool) -> ShowdownEntry {
        ShowdownEntry {
            chances: HandChances::from_array(values),
            high_card,
            folded,
        }
    }

    #[test]
    fn watermark_never_decreases_within_a_round() {
        let mut pot = Pot::new();
        pot.add_bet(50);
        pot.add_bet(20);
        assert_eq!(pot.min_bet(), 50);
        assert_eq!(pot.total(), 70);
        pot.reset_min_bet();
        assert_eq!(pot.min_bet(), 0);
        assert_eq!(pot.total(), 70);
    }

    #[test]
    fn clear_zeroes_total_only() {
        let mut pot = Pot::new();
        pot.add_bet(30);
        pot.clear();
        assert_eq!(pot.total(), 0);
        assert_eq!(pot.min_bet(), 30);
    }

    #[test]
    fn higher_guaranteed_category_wins() {
        let entries = vec![
            entry([1.0, 0.2, 0.0, 0.0, 0.0, 0.0], Some(Rank::King), false),
            entry([1.0, 1.0, 0.0, 0.0, 0.0, 0.0], Some(Rank::Two), false),
        ];
        assert_eq!(resolve_winner(&entries), Ok(1));
    }

    #[test]
    fn no_guaranteed_category_ranks_below_any_pair() {
        let entries = vec![
            entry([0.9, 0.4, 0.1, 0.0, 0.0, 0.2], Some(Rank::King), false),
            entry([1.0, 0.0, 0.0, 0.0, 0.0, 0.0], Some(Rank::Three), false),
        ];
        assert_eq!(resolve_winner(&entries), Ok(1));
    }

    #[test]
    fn category_tie_breaks_on_high_card_ace_low() {
        let entries = vec![
            entry([1.0, 0.0, 0.0, 0.0, 0.0, 0.0], Some(Rank::Ace), false),
            entry([1.0, 0.0, 0.0, 0.0, 0.0, 0.0], Some(Rank::Nine), false),
        ];
        assert_eq!(resolve_winner(&entries), Ok(1));
    }

    #[test]
    fn full_tie_keeps_first_scanned() {
        let entries = vec![
            entry([1.0, 0.0, 0.0, 0.0, 0.0, 0.0], Some(Rank::Nine), false),
            entry([1.0, 0.0, 0.0, 0.0, 0.0, 0.0], Some(Rank::Nine), false),
        ];
        assert_eq!(resolve_winner(&entries), Ok(0));
    }

    #[test]
    fn folded_entries_are_skipped() {
        let entries = vec![
            entry([0.0, 0.0, 0.0, 0.0, 0.0, 1.0], Some(Rank::King), true),
            entry([0.2, 0.0, 0.0, 0.0, 0.0, 0.0], Some(Rank::Four), false),
        ];
        assert_eq!(resolve_winner(&entries), Ok(1));
    }

    #[test]
    fn all_folded_is_an_explicit_error() {
        let entries = vec![entry([1.0, 0.0, 0.0, 0.0, 0.0, 0.0], Some(Rank::Ten), true)];
        assert_eq!(resolve_winner(&entries), Err(ShowdownError::NoActivePlayers));
    }
}
