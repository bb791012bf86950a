mod heuristic;

pub use heuristic::HeuristicPolicy;

use predictor_core::chance::HandChances;

/// Long-run showdown win rate per hand category, calibrated empirically.
/// Indexed in category order (one pair through flush).
pub const WIN_WEIGHTS: [f64; 6] = [0.57734, 0.95246, 0.97887, 0.99975, 0.996075, 0.99803];

/// Everything a betting decision reads: the seat's own probability vector,
/// the table-only vector standing in for unknown opponents, the shared
/// active-player count, and the seat's stakes.
#[derive(Debug, Clone, Copy)]
pub struct PolicyContext<'a> {
    pub own: &'a HandChances,
    pub table: &'a HandChances,
    pub active_players: usize,
    pub start_money: i64,
    pub min_bet: u64,
}

/// A recommendation for the seat's own wager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetAction {
    Fold,
    Bet(u64),
}

/// How a seat answers a standing minimum bet once its own recommendation
/// is in hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAction {
    Fold,
    Call(u64),
    Bet(u64),
}

/// Interface for betting decision-makers.
pub trait Policy {
    fn choose_bet(&mut self, ctx: &PolicyContext) -> BetAction;
}

/// Confronts a recommendation with the table's minimum call: a seat whose
/// recommended wager falls under a third of the watermark gives up, one
/// merely under the watermark calls it, and anything else stands.
pub fn respond(action: BetAction, min_bet: u64) -> TableAction {
    match action {
        BetAction::Fold => TableAction::Fold,
        BetAction::Bet(amount) if amount >= min_bet => TableAction::Bet(amount),
        BetAction::Bet(amount) if amount < min_bet / 3 => TableAction::Fold,
        BetAction::Bet(_) => TableAction::Call(min_bet),
    }
}
