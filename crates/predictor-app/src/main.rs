#![deny(warnings)]

mod cli;
mod console;
mod controller;
mod render;

use anyhow::Context;
use clap::Parser;
use console::{Command, parse_command};
use controller::{BetSubmission, CalculateReport, Controller};
use once_cell::sync::Lazy;
use predictor_bot::{BetAction, TableAction};
use predictor_core::game::session::{DealOutcome, GameSession};
use render::TextRenderer;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

/// When set, `calculate` also emits the report as JSON.
static JSON_REPORTS: Lazy<bool> = Lazy::new(|| {
    std::env::var("POKERPREDICT_JSON")
        .map(|raw| matches!(raw.trim(), "1" | "true" | "TRUE" | "on" | "ON"))
        .unwrap_or(false)
});

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = cli::Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    let session = GameSession::with_seed(args.players, args.decks, args.start_money, seed)
        .context("invalid table setup")?;
    tracing::info!(
        seed,
        players = args.players,
        decks = args.decks,
        mode = ?args.mode,
        "session ready"
    );

    let controller = Controller::new(session, Box::new(TextRenderer));
    match args.mode {
        cli::Mode::Play => run_play(controller),
        cli::Mode::Give => run_give(controller),
    }
}

fn run_play(mut controller: Controller) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("Choices: deal, show, calculate, shuffle, clear, bet, fold, leave");
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("reading command")?;

        match parse_command(&line) {
            Ok(Command::Deal) => {
                println!("Phase: {}", controller.session().phase());
                match controller.deal() {
                    Ok(outcome) => print_deal_outcome(&outcome),
                    Err(err) => println!("{err}"),
                }
            }
            Ok(Command::Show) => {
                let report = controller.show();
                for card in &report.cards {
                    println!("{card}");
                }
                println!("Pot: {}", report.pot);
                println!("Money: {}", report.money);
            }
            Ok(Command::Calculate) => print_calculate(&controller.calculate()),
            // `clear` replenishes just like `shuffle` in play mode.
            Ok(Command::Shuffle) | Ok(Command::Clear) => controller.shuffle(),
            Ok(Command::Bet) => run_betting(&mut controller, &mut lines)?,
            Ok(Command::Fold) => {
                controller.fold_human();
                println!("fold");
            }
            Ok(Command::Leave) => {
                print_leave(&controller);
                break;
            }
            Ok(Command::Give { .. }) => println!("give is only available in give mode"),
            Err(err) => println!("{err}"),
        }
    }

    Ok(())
}

fn run_give(mut controller: Controller) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("Choices: give, calculate, clear, show, leave");
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("reading command")?;

        match parse_command(&line) {
            Ok(Command::Give { rank, suit }) => match controller.give(rank, suit) {
                Some(card) => println!("{}", card.name()),
                None => println!("that card is no longer available"),
            },
            Ok(Command::Calculate) => print_calculate(&controller.calculate()),
            Ok(Command::Clear) => controller.clear_hand(),
            Ok(Command::Show) => {
                for card in &controller.show().cards {
                    println!("{card}");
                }
            }
            Ok(Command::Leave) => {
                print_leave(&controller);
                break;
            }
            Ok(_) => println!("that command is only available in play mode"),
            Err(err) => println!("{err}"),
        }
    }

    Ok(())
}

fn run_betting(
    controller: &mut Controller,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> anyhow::Result<()> {
    controller.begin_betting();

    loop {
        print!("Betting Amount: ");
        io::stdout().flush().context("flushing prompt")?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line.context("reading bet")?;

        let Ok(amount) = line.trim().parse::<i64>() else {
            println!("That Is Not A Valid Bet");
            continue;
        };

        match controller.submit_human_bet(amount) {
            BetSubmission::Rejected => println!("That Is Not A Valid Bet"),
            BetSubmission::FoldedOut => {
                println!("fold");
                return Ok(());
            }
            BetSubmission::Accepted { moves } => {
                for entry in moves {
                    match entry.action {
                        TableAction::Fold => println!("Player {} folds", entry.seat),
                        TableAction::Call(amount) => {
                            println!("Player {} calls {amount}", entry.seat)
                        }
                        TableAction::Bet(amount) => println!("Player {} bets {amount}", entry.seat),
                    }
                }
                return Ok(());
            }
        }
    }
}

fn print_deal_outcome(outcome: &DealOutcome) {
    match outcome {
        DealOutcome::HoleCardsDealt => {}
        DealOutcome::FlopDealt(_) | DealOutcome::TurnDealt(_) => {}
        DealOutcome::RiverDealt(_) => println!("All Cards Dealt, Next Deal Ends Round"),
        DealOutcome::HandResolved(showdown) => {
            println!("The Winner is Player {}", showdown.winner);
            for card in &showdown.winning_cards {
                println!("{}", card.name());
            }
            for (seat, balance) in showdown.balances.iter().enumerate() {
                println!("Player {seat}: {balance}");
            }
        }
    }
}

fn print_calculate(report: &CalculateReport) {
    for (category, value) in predictor_core::chance::HandCategory::ALL
        .iter()
        .zip(report.chances.as_array())
    {
        println!("{category}: {value}");
    }
    match report.action {
        BetAction::Fold => println!("Recommendation: fold"),
        BetAction::Bet(amount) => println!("Recommended Bet: {amount}"),
    }

    if *JSON_REPORTS {
        match report.to_json() {
            Ok(json) => println!("{json}"),
            Err(err) => tracing::warn!(%err, "failed to render JSON report"),
        }
    }
}

fn print_leave(controller: &Controller) {
    let (take_away, net) = controller.leave();
    println!("Final Take Away: {take_away}");
    println!("Net: {net}");
}
