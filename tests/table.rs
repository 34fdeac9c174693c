//! Command interface tests.

use bjsolo::{
    ActionError, BetError, Card, Command, CommandError, Deck, Game, GameOptions, Outcome, Phase,
    Response, RoundError, Suit, Table,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

#[test]
fn rejected_bet_keeps_state() {
    let mut table = Table::new(GameOptions::default(), 3);

    let err = table
        .execute(Command::PlaceBet("lots".to_string()))
        .unwrap_err();
    assert_eq!(err, CommandError::Bet(BetError::NotANumber));
    assert_eq!(err.to_string(), "invalid bet: not a number");

    assert_eq!(
        table.execute(Command::PlaceBet("-1".to_string())),
        Err(CommandError::Bet(BetError::NonPositive))
    );
    assert_eq!(
        table.execute(Command::PlaceBet("500".to_string())),
        Err(CommandError::Bet(BetError::ExceedsBalance))
    );

    assert_eq!(table.game().bet(), None);
    assert_eq!(table.game().phase(), Phase::AwaitingBet);
    assert_eq!(table.chip_balance(), 100);
}

#[test]
fn commands_out_of_order_are_rejected() {
    let mut table = Table::new(GameOptions::default(), 3);

    assert_eq!(
        table.execute(Command::StartRound),
        Err(CommandError::Round(RoundError::NoBet))
    );
    assert_eq!(
        table.execute(Command::Hit),
        Err(CommandError::Action(ActionError::InvalidState))
    );
    assert_eq!(
        table.execute(Command::Stand),
        Err(CommandError::Action(ActionError::InvalidState))
    );
}

#[test]
fn full_round_through_commands() {
    let mut table = Table::new(GameOptions::default(), 11);

    let response = table.execute(Command::PlaceBet(" 10 ".to_string())).unwrap();
    assert_eq!(response, Response::BetPlaced { bet: 10, chips: 100 });

    let Response::RoundStarted(deal) = table.execute(Command::StartRound).unwrap() else {
        panic!("expected a deal");
    };
    assert_eq!(deal.player.len(), 2);
    assert_eq!(deal.dealer.len(), 2);
    assert_eq!(table.game().phase(), Phase::InPlay);

    let Response::Stood(report) = table.execute(Command::Stand).unwrap() else {
        panic!("expected a stand report");
    };
    assert!(report.dealer_value >= 17);
    assert_eq!(
        i128::from(table.chip_balance()),
        100 + i128::from(report.settlement.net)
    );
    assert_eq!(table.game().phase(), Phase::AwaitingBet);
}

#[test]
fn stacked_round_through_commands() {
    let game = Game::new(GameOptions::default(), 1).place_bet(20).unwrap();
    let (game, _) = game
        .start_round_with(Deck::from_draws(&[
            card(Suit::Hearts, 1),
            card(Suit::Clubs, 10),
            card(Suit::Spades, 13),
            card(Suit::Diamonds, 8),
        ]))
        .unwrap();
    let mut table = Table::from_game(game);

    let Response::Stood(report) = table.execute(Command::Stand).unwrap() else {
        panic!("expected a stand report");
    };
    assert_eq!(report.outcome(), Outcome::Win);
    assert_eq!(table.chip_balance(), 140);
}

#[test]
fn balance_follows_settlements_until_game_over() {
    for seed in 0..20 {
        let mut table = Table::new(GameOptions::default().with_starting_chips(30), seed);
        let mut chips = i128::from(table.chip_balance());

        for _ in 0..200 {
            if table.is_over() {
                break;
            }
            let _ = table.execute(Command::PlaceBet("10".to_string()));
            if table.game().bet().is_none() {
                // Fewer than 10 chips left.
                let all_in = table.chip_balance().to_string();
                table.execute(Command::PlaceBet(all_in)).unwrap();
            }
            table.execute(Command::StartRound).unwrap();

            let settlement = loop {
                let hand_value = table.game().player_hand().value();
                let command = if hand_value < 15 {
                    Command::Hit
                } else {
                    Command::Stand
                };
                match table.execute(command).unwrap() {
                    Response::Hit(report) => {
                        if let Some(settlement) = report.settlement {
                            break settlement;
                        }
                    }
                    Response::Stood(report) => break report.settlement,
                    other => panic!("unexpected response {other:?}"),
                }
            };

            chips += i128::from(settlement.net);
            assert_eq!(i128::from(settlement.chips), chips);
            assert_eq!(i128::from(table.chip_balance()), chips);
        }

        if table.is_over() {
            assert_eq!(table.chip_balance(), 0);
            let err = table
                .execute(Command::PlaceBet("1".to_string()))
                .unwrap_err();
            assert!(err.is_game_over());
            assert_eq!(
                table.execute(Command::StartRound),
                Err(CommandError::Round(RoundError::GameOver))
            );
        }
    }
}
