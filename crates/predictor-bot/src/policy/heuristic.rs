use super::{BetAction, Policy, PolicyContext, WIN_WEIGHTS};
use predictor_core::chance::HandChances;
use tracing::{Level, event};

/// An edge below this signals a fold instead of a wager.
const FOLD_THRESHOLD: f64 = 0.3;

/// Deterministic wager sizing from the reach-probability vectors: no
/// randomness, no hidden state, the same inputs always produce the same
/// recommendation.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicPolicy;

impl HeuristicPolicy {
    pub const fn new() -> Self {
        Self
    }
}

impl Policy for HeuristicPolicy {
    fn choose_bet(&mut self, ctx: &PolicyContext) -> BetAction {
        let self_score = weighted_score(ctx.own);
        let opp_score = weighted_score(ctx.table);
        let edge = edge(self_score, opp_score, ctx.active_players);
        let action = recommend(edge, ctx.start_money);
        log_bet_decision(ctx, self_score, opp_score, edge, action);
        action
    }
}

/// Best weighted category: each reach probability scaled by its long-run
/// win rate, maximum taken.
pub fn weighted_score(chances: &HandChances) -> f64 {
    chances
        .as_array()
        .iter()
        .zip(WIN_WEIGHTS.iter())
        .map(|(chance, weight)| chance * weight)
        .fold(0.0, f64::max)
}

/// Squared margin of the seat's score over the combined threat that at
/// least one of the active seats beats it.
pub fn edge(self_score: f64, opp_score: f64, active_players: usize) -> f64 {
    let opponents_lose_all = (1.0 - opp_score).powi(active_players as i32);
    let threat = 1.0 - opponents_lose_all;
    (1.0 + self_score - threat).powi(2)
}

/// Turns an edge into a wager: one hundredth of the starting bankroll
/// (integer division) scaled by the edge, floored, plus one.
pub fn recommend(edge: f64, start_money: i64) -> BetAction {
    if edge < FOLD_THRESHOLD {
        return BetAction::Fold;
    }
    let standard_bet = start_money / 100;
    BetAction::Bet((standard_bet as f64 * edge + 1.0) as u64)
}

fn log_bet_decision(
    ctx: &PolicyContext,
    self_score: f64,
    opp_score: f64,
    edge: f64,
    action: BetAction,
) {
    if !tracing::enabled!(Level::DEBUG) {
        return;
    }

    event!(
        target: "predictor_bot::bet",
        Level::DEBUG,
        self_score,
        opp_score,
        edge,
        active_players = ctx.active_players,
        min_bet = ctx.min_bet,
        action = ?action,
    );
}
