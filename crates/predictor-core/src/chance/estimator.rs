use crate::chance::HandChances;
use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::suit::Suit;

/// A straight window's running product is floored to zero once it falls
/// below this; sub-noise windows would otherwise leak into the sum.
const WINDOW_FLOOR: f64 = 0.0001;

/// Reach-probability estimator over one evaluation viewpoint: the shared
/// unseen pool is the sample space, `known` is the viewpoint's visible
/// cards (a hand's own cards, or the table-only view for opponents).
///
/// Each category answers "will this hand reach the category" with an
/// approximation that treats every required draw independently, as a
/// per-card ratio against the unseen pool, rather than as a combinatorial
/// probability over the remaining draws. A category already present in
/// `known` is reported as exactly 1.0.
#[derive(Debug, Clone, Copy)]
pub struct ReachEstimator<'a> {
    unseen: &'a [Card],
    known: &'a [Card],
}

impl<'a> ReachEstimator<'a> {
    pub const fn new(unseen: &'a [Card], known: &'a [Card]) -> Self {
        Self { unseen, known }
    }

    pub fn estimate(&self) -> HandChances {
        HandChances {
            one_pair: self.one_pair(),
            two_pair: self.two_pair(),
            three_of_a_kind: self.three_of_a_kind(),
            four_of_a_kind: self.four_of_a_kind(),
            straight: self.straight(),
            flush: self.flush(),
        }
    }

    /// Probability of drawing the given rank next. Zero when the unseen
    /// pool is empty.
    fn rank_ratio(&self, rank: Rank) -> f64 {
        if self.unseen.is_empty() {
            return 0.0;
        }
        let matches = self.unseen.iter().filter(|card| card.rank == rank).count();
        matches as f64 / self.unseen.len() as f64
    }

    fn suit_ratio(&self, suit: Suit) -> f64 {
        if self.unseen.is_empty() {
            return 0.0;
        }
        let matches = self.unseen.iter().filter(|card| card.suit == suit).count();
        matches as f64 / self.unseen.len() as f64
    }

    /// True when another known card (any position) shares the rank.
    fn is_paired(&self, index: usize) -> bool {
        let rank = self.known[index].rank;
        self.known
            .iter()
            .enumerate()
            .any(|(other, card)| other != index && card.rank == rank)
    }

    /// Copies of `known[index]`'s rank from its position onward; a card
    /// whose rank already appeared earlier in the scan counts as a single
    /// copy so each rank's group is only tallied once.
    fn copies_from(&self, index: usize) -> usize {
        let rank = self.known[index].rank;
        if self.known[..index].iter().any(|card| card.rank == rank) {
            return 1;
        }
        1 + self.known[index + 1..]
            .iter()
            .filter(|card| card.rank == rank)
            .count()
    }

    fn one_pair(&self) -> f64 {
        for (index, card) in self.known.iter().enumerate() {
            if self.known[index + 1..]
                .iter()
                .any(|other| other.rank == card.rank)
            {
                return 1.0;
            }
        }
        self.known
            .iter()
            .map(|card| self.rank_ratio(card.rank))
            .sum()
    }

    fn two_pair(&self) -> f64 {
        let mut high1 = 0.0f64;
        let mut high2 = 0.0f64;
        for (index, card) in self.known.iter().enumerate() {
            let value = if self.is_paired(index) {
                1.0
            } else {
                self.rank_ratio(card.rank)
            };
            if value > high1 {
                high2 = high1;
                high1 = value;
            } else if value > high2 {
                high2 = value;
            }
        }
        high1 * high2
    }

    fn three_of_a_kind(&self) -> f64 {
        let mut chance = 0.0;
        for (index, card) in self.known.iter().enumerate() {
            let copies = self.copies_from(index);
            if copies >= 3 {
                return 1.0;
            }
            let ratio = self.rank_ratio(card.rank);
            if copies == 2 {
                chance += ratio;
            } else {
                chance += ratio * ratio;
            }
        }
        chance
    }

    fn four_of_a_kind(&self) -> f64 {
        let mut chance = 0.0;
        for (index, card) in self.known.iter().enumerate() {
            let copies = self.copies_from(index);
            if copies >= 4 {
                return 1.0;
            }
            let ratio = self.rank_ratio(card.rank);
            chance += match copies {
                3 => ratio,
                2 => ratio * ratio,
                _ => ratio * ratio * ratio,
            };
        }
        chance
    }

    fn straight(&self) -> f64 {
        let mut total = 0.0;
        for start in 1u8..=9 {
            let mut window = 1.0f64;
            for value in start..start + 5 {
                let rank = Rank::from_value(value).expect("window ranks stay within Ace..King");
                if self.known.iter().any(|card| card.rank == rank) {
                    continue;
                }
                window *= self.rank_ratio(rank);
                if window < WINDOW_FLOOR {
                    window = 0.0;
                }
            }
            total += window;
        }
        total.min(1.0)
    }

    fn flush(&self) -> f64 {
        let mut chance = 0.0;
        for suit in Suit::ALL.iter().copied() {
            let held = self.known.iter().filter(|card| card.suit == suit).count();
            let needed = 5usize.saturating_sub(held);
            chance += self.suit_ratio(suit).powi(needed as i32);
        }
        chance
    }
}

#[cfg(test)]
mod tests {
    use super::ReachEstimator;
    use crate::model::card::Card;
    use crate::model::population::CardPopulation;
    use crate::model::rank::Rank;
    use crate::model::suit::Suit;

    const TOLERANCE: f64 = 1e-9;

    /// Deals the listed cards out of a fresh single deck, returning the
    /// depleted unseen pool and the known hand.
    fn deal(known: &[(Rank, Suit)]) -> (Vec<Card>, Vec<Card>) {
        let mut population = CardPopulation::new(1);
        let mut hand = Vec::new();
        for (rank, suit) in known.iter().copied() {
            let index = population
                .find_index(suit, rank)
                .expect("card available in fresh deck");
            hand.push(population.deal_out(index));
        }
        (population.unseen().to_vec(), hand)
    }

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < TOLERANCE
    }

    #[test]
    fn held_pair_guarantees_one_pair() {
        let (unseen, known) = deal(&[(Rank::Five, Suit::Hearts), (Rank::Five, Suit::Diamonds)]);
        let chances = ReachEstimator::new(&unseen, &known).estimate();
        assert_eq!(chances.one_pair, 1.0);
    }

    #[test]
    fn pair_of_fives_matches_reference_values() {
        let (unseen, known) = deal(&[(Rank::Five, Suit::Hearts), (Rank::Five, Suit::Diamonds)]);
        assert_eq!(unseen.len(), 50);
        let chances = ReachEstimator::new(&unseen, &known).estimate();

        // Both cards pair each other, so both per-card values are 1.
        assert!(close(chances.two_pair, 1.0));

        // First five carries its pair (ratio 2/50); the second is a
        // skipped duplicate and needs two more copies (ratio squared).
        let ratio = 2.0 / 50.0;
        assert!(close(chances.three_of_a_kind, ratio + ratio * ratio));
        assert!(close(
            chances.four_of_a_kind,
            ratio * ratio + ratio * ratio * ratio
        ));
    }

    #[test]
    fn unpaired_hand_sums_single_match_ratios() {
        let (unseen, known) = deal(&[(Rank::Five, Suit::Hearts), (Rank::Seven, Suit::Diamonds)]);
        let chances = ReachEstimator::new(&unseen, &known).estimate();
        let ratio = 3.0 / 50.0;
        assert!(close(chances.one_pair, ratio + ratio));
        assert!(close(chances.two_pair, ratio * ratio));
        assert!(close(chances.three_of_a_kind, 2.0 * ratio * ratio));
        assert!(close(chances.four_of_a_kind, 2.0 * ratio * ratio * ratio));
    }

    #[test]
    fn four_equal_ranks_guarantee_four_of_a_kind() {
        let (unseen, known) = deal(&[
            (Rank::Nine, Suit::Hearts),
            (Rank::Nine, Suit::Diamonds),
            (Rank::Nine, Suit::Spades),
            (Rank::Nine, Suit::Clubs),
        ]);
        let chances = ReachEstimator::new(&unseen, &known).estimate();
        assert_eq!(chances.one_pair, 1.0);
        assert_eq!(chances.two_pair, 1.0);
        assert_eq!(chances.three_of_a_kind, 1.0);
        assert_eq!(chances.four_of_a_kind, 1.0);
    }

    #[test]
    fn completed_wheel_guarantees_straight() {
        let (unseen, known) = deal(&[
            (Rank::Ace, Suit::Hearts),
            (Rank::Two, Suit::Clubs),
            (Rank::Three, Suit::Diamonds),
            (Rank::Four, Suit::Spades),
            (Rank::Five, Suit::Hearts),
        ]);
        let chances = ReachEstimator::new(&unseen, &known).estimate();
        assert_eq!(chances.straight, 1.0);
    }

    #[test]
    fn empty_known_straight_windows_all_underflow() {
        let population = CardPopulation::new(1);
        let chances = ReachEstimator::new(population.unseen(), &[]).estimate();
        // Five independent 4/52 draws fall below the window floor.
        assert_eq!(chances.straight, 0.0);
        assert_eq!(chances.one_pair, 0.0);
    }

    #[test]
    fn all_probabilities_bounded_except_flush() {
        let (unseen, known) = deal(&[
            (Rank::Two, Suit::Hearts),
            (Rank::Six, Suit::Hearts),
            (Rank::Nine, Suit::Diamonds),
            (Rank::Jack, Suit::Spades),
            (Rank::King, Suit::Clubs),
        ]);
        let chances = ReachEstimator::new(&unseen, &known).estimate();
        for value in chances.as_array().iter().take(5) {
            assert!((0.0..=1.0).contains(value), "out of range: {value}");
        }
        assert!(chances.flush >= 0.0);
    }

    #[test]
    fn completed_flush_may_exceed_one() {
        // The four suit terms are not mutually exclusive: a made flush
        // contributes 1.0 and the other suits still add their fifth-power
        // tails. The sum passing 1 is intended behavior.
        let (unseen, known) = deal(&[
            (Rank::Two, Suit::Hearts),
            (Rank::Four, Suit::Hearts),
            (Rank::Seven, Suit::Hearts),
            (Rank::Nine, Suit::Hearts),
            (Rank::Jack, Suit::Hearts),
        ]);
        let chances = ReachEstimator::new(&unseen, &known).estimate();
        assert!(chances.flush > 1.0);
    }

    #[test]
    fn empty_unseen_pool_estimates_zero() {
        let known = vec![Card::new(Rank::Two, Suit::Hearts)];
        let chances = ReachEstimator::new(&[], &known).estimate();
        assert_eq!(chances.one_pair, 0.0);
        assert_eq!(chances.two_pair, 0.0);
        assert_eq!(chances.three_of_a_kind, 0.0);
        assert_eq!(chances.four_of_a_kind, 0.0);
        assert_eq!(chances.straight, 0.0);
        assert_eq!(chances.flush, 0.0);
    }

    #[test]
    fn empty_known_and_empty_unseen_are_defined() {
        let chances = ReachEstimator::new(&[], &[]).estimate();
        assert_eq!(chances.one_pair, 0.0);
        // Every suit needs five draws from nothing.
        assert_eq!(chances.flush, 0.0);
    }
}
