use crate::render::CardRenderer;
use predictor_bot::{BetAction, HeuristicPolicy, Policy, PolicyContext, TableAction, respond};
use predictor_core::chance::HandChances;
use predictor_core::game::phase::GamePhase;
use predictor_core::game::session::{DealError, DealOutcome, GameSession};
use predictor_core::model::card::Card;
use predictor_core::model::rank::Rank;
use predictor_core::model::suit::Suit;
use serde::Serialize;

/// Drives one table session: executes console commands against the core
/// state, consults the heuristic for the non-human seats and notifies the
/// renderer. Seat 0 is the human.
pub struct Controller {
    session: GameSession,
    policy: HeuristicPolicy,
    renderer: Box<dyn CardRenderer>,
}

#[derive(Debug, Clone)]
pub struct ShowReport {
    pub cards: Vec<String>,
    pub pot: u64,
    pub money: i64,
}

#[derive(Debug, Clone)]
pub struct CalculateReport {
    pub phase: u8,
    pub chances: HandChances,
    pub action: BetAction,
}

#[derive(Serialize)]
struct CalculateReportDto<'a> {
    phase: u8,
    chances: &'a HandChances,
    recommended_bet: Option<u64>,
}

impl CalculateReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        let recommended_bet = match self.action {
            BetAction::Fold => None,
            BetAction::Bet(amount) => Some(amount),
        };
        serde_json::to_string_pretty(&CalculateReportDto {
            phase: self.phase,
            chances: &self.chances,
            recommended_bet,
        })
    }
}

/// What happened to one human bet submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BetSubmission {
    /// Below the watermark; ask again.
    Rejected,
    /// Negative amount: the human folded out of the hand.
    FoldedOut,
    /// Bet placed; the non-human seats have answered.
    Accepted { moves: Vec<OpponentMove> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpponentMove {
    pub seat: usize,
    pub action: TableAction,
}

impl Controller {
    pub fn new(session: GameSession, renderer: Box<dyn CardRenderer>) -> Self {
        Self {
            session,
            policy: HeuristicPolicy::new(),
            renderer,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// One phase transition, with render notifications for whatever was
    /// revealed. Entering the showdown turns every hole card face up
    /// first.
    pub fn deal(&mut self) -> Result<DealOutcome, DealError> {
        if self.session.phase() == GamePhase::Showdown {
            self.reveal_all_hole_cards();
        }

        let outcome = self.session.deal()?;
        match &outcome {
            DealOutcome::HoleCardsDealt => {
                self.renderer.clear();
                for (seat, participant) in self.session.participants().iter().enumerate() {
                    let cards = participant.hand().cards();
                    self.renderer
                        .hole_cards(seat, seat == 0, [cards[0], cards[1]]);
                }
            }
            DealOutcome::FlopDealt(cards) => {
                for card in cards {
                    self.renderer.table_card(*card);
                }
            }
            DealOutcome::TurnDealt(card) | DealOutcome::RiverDealt(card) => {
                self.renderer.table_card(*card);
            }
            DealOutcome::HandResolved(_) => {}
        }
        Ok(outcome)
    }

    fn reveal_all_hole_cards(&mut self) {
        for (seat, participant) in self.session.participants().iter().enumerate() {
            let cards = participant.hand().cards();
            if cards.len() >= 2 {
                self.renderer.hole_cards(seat, true, [cards[0], cards[1]]);
            }
        }
    }

    pub fn show(&self) -> ShowReport {
        ShowReport {
            cards: self
                .session
                .participant(0)
                .hand()
                .iter()
                .map(|card| card.name())
                .collect(),
            pot: self.session.pot().total(),
            money: self.session.participant(0).money(),
        }
    }

    pub fn calculate(&mut self) -> CalculateReport {
        let own = self.session.chances_for(0);
        let table = self.session.table_chances();
        let ctx = PolicyContext {
            own: &own,
            table: &table,
            active_players: self.session.active_players(),
            start_money: self.session.participant(0).start_money(),
            min_bet: self.session.min_bet(),
        };
        let action = self.policy.choose_bet(&ctx);
        CalculateReport {
            phase: self.session.phase().number(),
            chances: own,
            action,
        }
    }

    pub fn shuffle(&mut self) {
        self.session.replenish();
    }

    pub fn give(&mut self, rank: Rank, suit: Suit) -> Option<Card> {
        self.session.give_card(0, suit, rank)
    }

    pub fn clear_hand(&mut self) {
        self.session.clear_hand(0);
    }

    pub fn fold_human(&mut self) {
        self.session.fold(0);
        self.session.jump_to_showdown();
    }

    pub fn begin_betting(&mut self) {
        self.session.reset_min_bet();
    }

    /// Validates the human amount against the watermark, places it, then
    /// lets every non-folded bot answer the standing minimum.
    pub fn submit_human_bet(&mut self, amount: i64) -> BetSubmission {
        if amount < 0 {
            self.fold_human();
            return BetSubmission::FoldedOut;
        }
        let amount = amount as u64;
        if amount < self.session.min_bet() {
            return BetSubmission::Rejected;
        }

        self.session.place_bet(0, amount);
        let moves = self.opponents_respond();
        BetSubmission::Accepted { moves }
    }

    fn opponents_respond(&mut self) -> Vec<OpponentMove> {
        let table = self.session.table_chances();
        let mut moves = Vec::new();

        for seat in 1..self.session.participants().len() {
            if self.session.participant(seat).is_folded() {
                continue;
            }
            let own = self.session.chances_for(seat);
            let ctx = PolicyContext {
                own: &own,
                table: &table,
                active_players: self.session.active_players(),
                start_money: self.session.participant(seat).start_money(),
                min_bet: self.session.min_bet(),
            };
            let action = respond(self.policy.choose_bet(&ctx), self.session.min_bet());
            match action {
                TableAction::Fold => self.session.fold(seat),
                TableAction::Call(amount) | TableAction::Bet(amount) => {
                    self.session.place_bet(seat, amount);
                }
            }
            moves.push(OpponentMove { seat, action });
        }

        moves
    }

    pub fn leave(&self) -> (i64, i64) {
        let participant = self.session.participant(0);
        (
            participant.money(),
            participant.money() - participant.start_money(),
        )
    }
}
