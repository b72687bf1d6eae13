use liars_dice::bet::Bet;
use liars_dice::dice::ScriptedDice;
use liars_dice::engine::{Action, ActionOutcome, GameEngine};
use liars_dice::game::{Game, RuleViolation, Verdict};

fn engine(hands: &[u8]) -> Box<dyn GameEngine> {
    let dice = Box::new(ScriptedDice::new(hands.to_vec()));
    let mut g = Game::with_source(&["Ann", "Ben"], 2, 6, dice).unwrap();
    GameEngine::setup(&mut g);
    Box::new(g)
}

#[test]
fn drives_a_round_through_the_trait() {
    // Ann [2, 2], Ben [2, 5]
    let mut e = engine(&[2, 2, 2, 5]);
    let first = e.current_player();
    assert!(first.is_some());
    assert_eq!(e.dice_in_play(), 4);
    assert_eq!(e.dice_size(), 6);

    let out = e.apply(Action::Bet(Bet::new(2, 2))).unwrap();
    assert_eq!(out, ActionOutcome::BetPlaced(Bet::new(2, 2)));
    assert_eq!(e.current_bet(), Some(Bet::new(2, 2)));

    let second = e.next_player();
    assert_ne!(second, first);
    let out = e.apply(Action::Bet(Bet::new(3, 2))).unwrap();
    assert_eq!(out, ActionOutcome::BetPlaced(Bet::new(3, 2)));

    e.next_player();
    match e.apply(Action::CallSpotOn).unwrap() {
        ActionOutcome::Resolved(res) => {
            assert_eq!(res.verdict, Verdict::Exact);
            assert_eq!(res.challenger, first.unwrap());
            assert_eq!(res.losers, vec![second.unwrap()]);
        }
        other => panic!("expected a resolution, got {other:?}"),
    }
    assert_eq!(e.current_bet(), None);
    assert_eq!(e.dice_in_play(), 3);
    assert!(e.remove_lost_players().is_empty());
    assert!(!e.game_over());
}

#[test]
fn rejected_actions_change_nothing() {
    let mut e = engine(&[1, 2, 3, 4]);
    assert_eq!(e.apply(Action::CallBluff), Err(RuleViolation::NoActiveBet));
    assert_eq!(
        e.apply(Action::Bet(Bet::new(5, 1))),
        Err(RuleViolation::TooManyDice { amount: 5, dice_in_play: 4 })
    );
    assert_eq!(e.current_bet(), None);
    assert_eq!(e.place_bet(Bet::new(1, 1)), Err(RuleViolation::NoActiveBet));
}
