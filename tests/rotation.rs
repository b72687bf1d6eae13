use liars_dice::bet::Bet;
use liars_dice::dice::ScriptedDice;
use liars_dice::game::Game;

fn mk_game(names: &[&str], hands: &[u8]) -> Game {
    let dice = Box::new(ScriptedDice::new(hands.to_vec()));
    let mut game = Game::with_source(names, 1, 6, dice).unwrap();
    game.setup();
    game
}

fn current(game: &Game) -> Option<&str> {
    game.current_player().map(|p| p.name())
}

#[test]
fn turns_follow_seating_order() {
    let mut g = mk_game(&["Ann", "Ben", "Cat"], &[1, 2, 3]);
    assert_eq!(current(&g), Some("Ann"));
    assert_eq!(g.turn(), 1);

    let mut seen = Vec::new();
    for _ in 0..6 {
        g.next_player();
        seen.push(current(&g).unwrap_or("-").to_string());
    }
    assert_eq!(seen, ["Ben", "Cat", "Ann", "Ben", "Cat", "Ann"]);
    assert_eq!(g.turn(), 7);
}

#[test]
fn previous_player_trails_current() {
    let mut g = mk_game(&["Ann", "Ben"], &[1, 2]);
    assert_eq!(g.previous_player_id(), None);
    g.next_player();
    assert_eq!(g.previous_player().map(|p| p.name()), Some("Ann"));
    assert_eq!(current(&g), Some("Ben"));
    g.next_player();
    assert_eq!(g.previous_player().map(|p| p.name()), Some("Ben"));
}

#[test]
fn new_round_keeps_turn_order() {
    let mut g = mk_game(&["Ann", "Ben", "Cat"], &[1, 2, 3]);
    g.first_bet(Bet::new(1, 5)).unwrap();
    g.next_player();
    g.call_bluff().unwrap();
    g.remove_lost_players();

    // Ann bet on a 5 nobody held, so she lost her only die.
    assert!(g.players().iter().all(|p| p.name() != "Ann"));
    g.next_player();
    assert_eq!(current(&g), Some("Cat"));
    g.next_player();
    assert_eq!(current(&g), Some("Ben"));
}

#[test]
fn setup_again_restarts_match() {
    let mut g = mk_game(&["Ann", "Ben"], &[4, 4]);
    g.first_bet(Bet::new(1, 4)).unwrap();
    g.next_player();
    g.next_player();
    g.setup();
    assert_eq!(g.turn(), 1);
    assert_eq!(g.current_bet(), None);
    assert_eq!(g.history_len(), 0);
    assert_eq!(g.previous_player_id(), None);
    // Rotation picks up where the last match left it.
    assert_eq!(current(&g), Some("Ben"));
}
