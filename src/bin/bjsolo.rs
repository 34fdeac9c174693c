//! Terminal blackjack front end.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, bail};
use bjsolo::{
    BetError, Command, CommandError, Game, GameOptions, Hand, Outcome, Phase, Response,
    Settlement, Table,
};
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the shuffle. Taken from the clock when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Starting chip balance.
    #[arg(short, long, default_value_t = bjsolo::DEFAULT_STARTING_CHIPS)]
    chips: u32,

    /// Log every draw and transition.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64
    });
    info!(seed, chips = args.chips, "opening table");

    let options = GameOptions::default().with_starting_chips(args.chips);
    let mut table = Table::new(options, seed);

    println!("Welcome to Blackjack! (type 'q' to quit)");

    while !table.is_over() {
        println!("\nYour chips: {}", table.chip_balance());

        let Some(input) = prompt_line("Enter your bet amount: ") else {
            break;
        };
        if input == "q" || input == "quit" {
            break;
        }

        match table.execute(Command::PlaceBet(input)) {
            Ok(_) => {}
            Err(CommandError::Bet(BetError::NotANumber)) => {
                println!("Invalid Input: Please enter a valid number.");
                continue;
            }
            Err(CommandError::Bet(BetError::NonPositive | BetError::ExceedsBalance)) => {
                println!("Invalid Bet: Bet amount must be within your chip count.");
                continue;
            }
            Err(CommandError::Bet(BetError::OverTableLimit)) => {
                println!("Invalid Bet: A win on that bet would exceed the table limit.");
                continue;
            }
            Err(err) => return Err(err).context("bet rejected"),
        }

        table
            .execute(Command::StartRound)
            .context("failed to deal round")?;

        if !play_round(&mut table)? {
            println!("Goodbye.");
            return Ok(());
        }
    }

    if table.is_over() {
        println!("\nGame Over: You have no more chips.");
    }

    Ok(())
}

/// Runs the player's turn until the round is settled.
///
/// Returns `false` if the player quit mid-round.
fn play_round(table: &mut Table) -> anyhow::Result<bool> {
    print_table(table.game());

    while table.game().phase() == Phase::InPlay {
        let Some(action) = prompt_line("[h]it or [s]tand: ") else {
            return Ok(false);
        };

        match action.as_str() {
            "h" | "hit" => {
                let Response::Hit(report) = table.execute(Command::Hit)? else {
                    bail!("unexpected response to hit");
                };
                match report.card {
                    Some(card) => println!("You draw the {card}."),
                    None => println!("The deck is empty."),
                }
                print_table(table.game());
                if let Some(settlement) = report.settlement {
                    print_settlement(&settlement);
                }
            }
            "s" | "stay" | "stand" => {
                let Response::Stood(report) = table.execute(Command::Stand)? else {
                    bail!("unexpected response to stand");
                };
                for card in &report.drawn {
                    println!("Dealer draws the {card}.");
                }
                print_table(table.game());
                print_settlement(&report.settlement);
            }
            "q" | "quit" => return Ok(false),
            _ => println!("Unknown action."),
        }
    }

    Ok(true)
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

fn print_table(game: &Game) {
    let final_view = game.phase() != Phase::InPlay;
    let player = game.player_hand();
    let dealer = game.dealer_hand();

    println!(
        "\nYour hand: {} (Total: {})",
        format_hand(player),
        player.value()
    );
    if final_view {
        println!(
            "Dealer's hand: {} (Total: {})",
            format_hand(dealer),
            dealer.value()
        );
    } else {
        let up = dealer
            .up_card()
            .map_or_else(|| "(no cards)".to_string(), ToString::to_string);
        println!("Dealer's hand: {up}, ?? (Total: ...)");
    }
}

fn print_settlement(settlement: &Settlement) {
    let message = match settlement.outcome {
        Outcome::Loss if settlement.player_bust => colorize("You bust! Dealer wins.", "31"),
        Outcome::Win if settlement.natural => colorize(
            &format!("Blackjack! You won {} chips.", settlement.payout),
            "32",
        ),
        Outcome::Win => colorize(
            &format!("You win! You won {} chips.", settlement.payout),
            "32",
        ),
        Outcome::Push => colorize("It's a tie! You get your bet back.", "33"),
        Outcome::Loss => colorize(
            &format!("You lost your bet of {} chips.", settlement.bet),
            "31",
        ),
    };
    println!("{message}");
    println!("Your chips: {}", settlement.chips);
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.to_string()
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
