use clap::{Parser, ValueEnum};

/// Table setup for one console session.
#[derive(Debug, Parser)]
#[command(name = "pokerpredict", version, about = "Hold'em reach-probability predictor")]
pub struct Args {
    /// Seats at the table, including the human seat 0.
    #[arg(long, default_value_t = 4)]
    pub players: usize,

    /// Standard decks merged into the card population.
    #[arg(long, default_value_t = 1)]
    pub decks: usize,

    /// `play` runs full hands; `give` hand-builds a hand to inspect.
    #[arg(long, value_enum, default_value_t = Mode::Play)]
    pub mode: Mode,

    /// Deal order seed; random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Starting bankroll per seat.
    #[arg(long = "start-money", default_value_t = 1000)]
    pub start_money: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Play,
    Give,
}
