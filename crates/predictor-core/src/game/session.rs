use crate::chance::{HandChances, ReachEstimator};
use crate::game::phase::GamePhase;
use crate::model::card::Card;
use crate::model::participant::Participant;
use crate::model::population::CardPopulation;
use crate::model::pot::{Pot, ShowdownEntry, ShowdownError, resolve_winner};
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;

/// One table session: the shared card population, the seats, the pot, the
/// phase cycle and the shared active-player count every betting decision
/// reads. Randomness is seeded and owned here so deals are reproducible.
#[derive(Debug)]
pub struct GameSession {
    population: CardPopulation,
    participants: Vec<Participant>,
    pot: Pot,
    phase: GamePhase,
    active_players: usize,
    rng: StdRng,
    seed: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    NoParticipants,
    NoDecks,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NoParticipants => write!(f, "a table needs at least one participant"),
            SessionError::NoDecks => write!(f, "a table needs at least one deck"),
        }
    }
}

impl std::error::Error for SessionError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DealError {
    DeckExhausted { needed: usize, available: usize },
    Showdown(ShowdownError),
}

impl fmt::Display for DealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DealError::DeckExhausted { needed, available } => write!(
                f,
                "not enough cards left to deal: need {needed}, have {available} (try shuffle)"
            ),
            DealError::Showdown(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for DealError {}

impl From<ShowdownError> for DealError {
    fn from(value: ShowdownError) -> Self {
        DealError::Showdown(value)
    }
}

/// Result of a single `deal` transition.
#[derive(Debug, Clone, PartialEq)]
pub enum DealOutcome {
    HoleCardsDealt,
    FlopDealt([Card; 3]),
    TurnDealt(Card),
    RiverDealt(Card),
    HandResolved(ShowdownOutcome),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShowdownOutcome {
    pub winner: usize,
    pub winnings: u64,
    pub winning_cards: Vec<Card>,
    pub balances: Vec<i64>,
}

impl GameSession {
    pub fn new(
        player_count: usize,
        deck_count: usize,
        start_money: i64,
    ) -> Result<Self, SessionError> {
        let seed: u64 = rand::random();
        Self::with_seed(player_count, deck_count, start_money, seed)
    }

    pub fn with_seed(
        player_count: usize,
        deck_count: usize,
        start_money: i64,
        seed: u64,
    ) -> Result<Self, SessionError> {
        if player_count == 0 {
            return Err(SessionError::NoParticipants);
        }
        if deck_count == 0 {
            return Err(SessionError::NoDecks);
        }

        Ok(Self {
            population: CardPopulation::new(deck_count),
            participants: (0..player_count)
                .map(|_| Participant::new(start_money))
                .collect(),
            pot: Pot::new(),
            phase: GamePhase::HoleCards,
            active_players: player_count,
            rng: StdRng::seed_from_u64(seed),
            seed,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn pot(&self) -> &Pot {
        &self.pot
    }

    pub fn population(&self) -> &CardPopulation {
        &self.population
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn participant(&self, index: usize) -> &Participant {
        &self.participants[index]
    }

    /// The shared count of not-yet-folded seats; every heuristic call
    /// reads this one value instead of per-participant counters.
    pub fn active_players(&self) -> usize {
        self.active_players
    }

    /// Performs exactly one phase transition.
    pub fn deal(&mut self) -> Result<DealOutcome, DealError> {
        match self.phase {
            GamePhase::HoleCards => self.deal_hole_cards(),
            GamePhase::Flop => self.deal_flop(),
            GamePhase::Turn => self.deal_single(GamePhase::Turn),
            GamePhase::River => self.deal_single(GamePhase::River),
            GamePhase::Showdown => self.showdown(),
        }
    }

    fn deal_hole_cards(&mut self) -> Result<DealOutcome, DealError> {
        let needed = self.participants.len() * 2;
        if self.population.unseen_len() < needed {
            return Err(DealError::DeckExhausted {
                needed,
                available: self.population.unseen_len(),
            });
        }

        for participant in &mut self.participants {
            for _ in 0..2 {
                let index = self.rng.gen_range(0..self.population.unseen_len());
                let card = self.population.deal_out(index);
                participant.hand_mut().add(card);
            }
        }

        self.phase = self.phase.next();
        Ok(DealOutcome::HoleCardsDealt)
    }

    fn deal_flop(&mut self) -> Result<DealOutcome, DealError> {
        let available = self.population.unseen_len();
        if available < 3 {
            return Err(DealError::DeckExhausted {
                needed: 3,
                available,
            });
        }

        // All three cards are revealed before any of them leaves the
        // unseen pool; the deferred removals below rebase the later
        // indices against the earlier removals.
        let first = self.rng.gen_range(0..available);
        let second = self.rng.gen_range(0..available - 1);
        let third = self.rng.gen_range(0..available - 2);

        let cards = [
            self.population.reveal_to_table(first),
            self.population.reveal_to_table(second),
            self.population.reveal_to_table(third),
        ];
        for participant in &mut self.participants {
            for card in cards {
                participant.hand_mut().add(card);
            }
        }

        remove_revealed_flop(&mut self.population, first, second, third);

        self.phase = self.phase.next();
        Ok(DealOutcome::FlopDealt(cards))
    }

    fn deal_single(&mut self, phase: GamePhase) -> Result<DealOutcome, DealError> {
        let available = self.population.unseen_len();
        if available == 0 {
            return Err(DealError::DeckExhausted {
                needed: 1,
                available,
            });
        }

        let index = self.rng.gen_range(0..available);
        let card = self.population.reveal_to_table(index);
        for participant in &mut self.participants {
            participant.hand_mut().add(card);
        }
        self.population.remove_from_unseen(index);

        self.phase = self.phase.next();
        Ok(match phase {
            GamePhase::Turn => DealOutcome::TurnDealt(card),
            _ => DealOutcome::RiverDealt(card),
        })
    }

    fn showdown(&mut self) -> Result<DealOutcome, DealError> {
        let entries: Vec<ShowdownEntry> = self
            .participants
            .iter()
            .map(|participant| ShowdownEntry {
                chances: ReachEstimator::new(
                    self.population.unseen(),
                    participant.hand().cards(),
                )
                .estimate(),
                high_card: participant.hand().highest_rank(),
                folded: participant.is_folded(),
            })
            .collect();

        let winner = resolve_winner(&entries)?;
        let winnings = self.pot.total();
        self.participants[winner].award(winnings);
        let winning_cards = self.participants[winner].hand().cards().to_vec();
        self.pot.clear();

        for participant in &mut self.participants {
            participant.reset_for_next_hand();
        }
        self.population.clear_table();
        self.active_players = self.participants.len();
        self.phase = self.phase.next();

        Ok(DealOutcome::HandResolved(ShowdownOutcome {
            winner,
            winnings,
            winning_cards,
            balances: self.participants.iter().map(Participant::money).collect(),
        }))
    }

    /// Marks the seat folded and shrinks the shared active count once.
    /// The phase does not move; the console fold command follows up with
    /// `jump_to_showdown` for the human seat.
    pub fn fold(&mut self, index: usize) {
        if !self.participants[index].is_folded() {
            self.participants[index].set_folded(true);
            self.active_players = self.active_players.saturating_sub(1);
        }
    }

    /// Out-of-band transition straight to the showdown phase.
    pub fn jump_to_showdown(&mut self) {
        self.phase = GamePhase::Showdown;
    }

    pub fn place_bet(&mut self, index: usize, amount: u64) {
        self.participants[index].place_bet(amount, &mut self.pot);
    }

    pub fn reset_min_bet(&mut self) {
        self.pot.reset_min_bet();
    }

    pub fn min_bet(&self) -> u64 {
        self.pot.min_bet()
    }

    /// Reach probabilities from a seat's own viewpoint.
    pub fn chances_for(&self, index: usize) -> HandChances {
        ReachEstimator::new(
            self.population.unseen(),
            self.participants[index].hand().cards(),
        )
        .estimate()
    }

    /// Reach probabilities from the table-only viewpoint, the stand-in for
    /// an unknown opponent's hand.
    pub fn table_chances(&self) -> HandChances {
        ReachEstimator::new(self.population.unseen(), self.population.table_cards()).estimate()
    }

    /// Hands a specific card to a seat if it is still unseen (manual
    /// "give" mode).
    pub fn give_card(&mut self, index: usize, suit: Suit, rank: Rank) -> Option<Card> {
        let found = self.population.find_index(suit, rank)?;
        let card = self.population.deal_out(found);
        self.participants[index].hand_mut().add(card);
        Some(card)
    }

    pub fn clear_hand(&mut self, index: usize) {
        self.participants[index].hand_mut().clear();
    }

    /// Adds a full configured set of cards back to the unseen pool.
    pub fn replenish(&mut self) {
        self.population.replenish();
    }
}

/// Deferred removal for the three flop reveals. Earlier removals shift the
/// later indices down; the adjustment order (second rebased against first,
/// third against the rebased second and then the original first) is part
/// of the observable contract. When the second index is below the first
/// and the third is above both, the third removal lands one slot high.
pub fn remove_revealed_flop(
    population: &mut CardPopulation,
    first: usize,
    mut second: usize,
    mut third: usize,
) {
    population.remove_from_unseen(first);
    if first < second {
        second -= 1;
    }
    population.remove_from_unseen(second);
    if second < third {
        third -= 1;
    }
    if first < third {
        third -= 1;
    }
    population.remove_from_unseen(third);
}
