use crate::bet::Bet;
use crate::config::{ConfigError, GameConfig};
use crate::dice::{DiceSource, RandomDice};
use crate::odds;
use crate::player::{Player, PlayerId, PlayerIds};
use std::fmt;

/// A match needs someone to lose to.
pub const MIN_PLAYERS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Challenge {
    Bluff,
    SpotOn,
}

/// How a challenge came out, from the challenger's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Verdict {
    /// Bluff called and the bet was false.
    ChallengerCorrect,
    /// Bluff called but the bet held.
    ChallengerIncorrect,
    /// Spot-on called and the count matched exactly.
    Exact,
    /// Spot-on called and the count was off.
    NotExact,
}

impl Verdict {
    pub fn challenger_correct(self) -> bool {
        matches!(self, Verdict::ChallengerCorrect | Verdict::Exact)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum HistoryVerb {
    Bet,
    CallBluff,
    CallSpotOn,
    LoseDie,
    Out,
    Win,
}

impl HistoryVerb {
    pub fn label(self) -> &'static str {
        match self {
            HistoryVerb::Bet => "Bet",
            HistoryVerb::CallBluff => "Call bluff",
            HistoryVerb::CallSpotOn => "Call spot-on",
            HistoryVerb::LoseDie => "Lose die",
            HistoryVerb::Out => "Out",
            HistoryVerb::Win => "Win",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct HistoryEntry {
    pub turn: usize,
    pub player: PlayerId,
    pub verb: HistoryVerb,
    pub bet: Option<Bet>,
}

/// A move the rules do not allow. The game state is untouched when one is
/// returned.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RuleViolation {
    #[error("bet is for more dice than are on the table: {amount} > {dice_in_play}")]
    TooManyDice { amount: usize, dice_in_play: usize },
    #[error("bet must be for at least one die")]
    NoDice,
    #[error("bet is for an invalid die face: {face} (1-{dice_size})")]
    InvalidFace { face: u8, dice_size: u8 },
    #[error("bet {bet} isn't better than the current bet {current}")]
    NotHigher { bet: Bet, current: Bet },
    #[error("there is no active bet")]
    NoActiveBet,
    #[error("no player has the turn")]
    NoCurrentPlayer,
    #[error("there is no previous player to challenge")]
    NoPreviousPlayer,
}

/// Everything the table needs to show after a challenge.
///
/// The round is rerolled as part of resolving, so the hands that decided the
/// challenge only survive here.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct Resolution {
    pub challenge: Challenge,
    pub verdict: Verdict,
    pub bet: Bet,
    pub challenger: PlayerId,
    pub bettor: PlayerId,
    /// Hands in rotation order as they were when the challenge was made.
    pub revealed: Vec<(PlayerId, Vec<u8>)>,
    /// Players that lost a die, in rotation order.
    pub losers: Vec<PlayerId>,
    /// Challenger's estimate before the reveal: odds the bet was true for a
    /// bluff call, odds it was exact for a spot-on call.
    pub odds: f64,
}

impl Resolution {
    pub fn challenger_correct(&self) -> bool {
        self.verdict.challenger_correct()
    }

    /// How many revealed dice showed the bet's face.
    pub fn matching(&self) -> usize {
        self.revealed
            .iter()
            .flat_map(|(_, dice)| dice.iter())
            .filter(|&&d| d == self.bet.face())
            .count()
    }
}

#[derive(Debug)]
#[non_exhaustive]
pub struct Game {
    pub(crate) dice_count: usize,
    pub(crate) dice_size: u8,

    /// Rotation order; the front is next to play.
    pub(crate) players: Vec<Player>,
    pub(crate) current_bet: Option<Bet>,
    pub(crate) current_player: Option<PlayerId>,
    pub(crate) previous_player: Option<PlayerId>,
    pub(crate) turn: usize,

    dice: Box<dyn DiceSource>,
    history: Vec<HistoryEntry>,
}

impl Game {
    /// New match with fair dice seeded from the process RNG.
    ///
    /// ```
    /// use liars_dice::game::Game;
    ///
    /// let mut game = Game::new(&["Ann", "Ben"], 5, 6).unwrap();
    /// game.setup();
    /// assert_eq!(game.dice_in_play(), 10);
    /// assert_eq!(game.current_player().map(|p| p.name()), Some("Ann"));
    /// ```
    pub fn new<S: AsRef<str>>(
        names: &[S],
        dice_count: usize,
        dice_size: u8,
    ) -> Result<Self, ConfigError> {
        Self::with_source(names, dice_count, dice_size, Box::new(RandomDice::from_entropy()))
    }

    /// New match rolling from `source`.
    pub fn with_source<S: AsRef<str>>(
        names: &[S],
        dice_count: usize,
        dice_size: u8,
        mut source: Box<dyn DiceSource>,
    ) -> Result<Self, ConfigError> {
        if dice_count == 0 {
            return Err(ConfigError::NoDice);
        }
        if dice_size == 0 {
            return Err(ConfigError::NoFaces);
        }
        if names.len() < MIN_PLAYERS {
            return Err(ConfigError::TooFewPlayers { min: MIN_PLAYERS, got: names.len() });
        }
        let mut ids = PlayerIds::new();
        let mut players = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                return Err(ConfigError::EmptyName);
            }
            let dice = source.roll_n(dice_count, dice_size);
            players.push(Player::new(ids.next_id(), name, dice));
        }
        Ok(Self {
            dice_count,
            dice_size,
            players,
            current_bet: None,
            current_player: None,
            previous_player: None,
            turn: 0,
            dice: source,
            history: Vec::new(),
        })
    }

    /// New match from validated settings. A configured seed makes the dice
    /// reproducible.
    pub fn from_config<S: AsRef<str>>(config: &GameConfig, names: &[S]) -> Result<Self, ConfigError> {
        config.validate()?;
        Self::with_source(names, config.dice_count, config.dice_size, config.dice_source())
    }

    /// Returns the starting hand size
    pub fn dice_count(&self) -> usize {
        self.dice_count
    }

    /// Returns the number of faces per die
    pub fn dice_size(&self) -> u8 {
        self.dice_size
    }

    /// Returns the players still in, in rotation order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Returns the bet to beat this round, if one has been made
    pub fn current_bet(&self) -> Option<Bet> {
        self.current_bet
    }

    pub fn current_player_id(&self) -> Option<PlayerId> {
        self.current_player
    }

    pub fn previous_player_id(&self) -> Option<PlayerId> {
        self.previous_player
    }

    /// The player whose turn it is. `None` before setup or once they are out.
    pub fn current_player(&self) -> Option<&Player> {
        self.current_player.and_then(|id| self.player(id))
    }

    /// The player who acted last turn, usually the one who made the bet.
    pub fn previous_player(&self) -> Option<&Player> {
        self.previous_player.and_then(|id| self.player(id))
    }

    /// Number of turns taken since setup
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Total dice across all hands still in play.
    pub fn dice_in_play(&self) -> usize {
        self.players.iter().map(|p| p.dice.len()).sum()
    }

    /// Every die in play, in rotation order. Reveals hidden information, so
    /// only meant for resolution and debug rendering.
    pub fn all_dice(&self) -> Vec<u8> {
        self.players.iter().flat_map(|p| p.dice.iter().copied()).collect()
    }

    pub fn count_face(&self, face: u8) -> usize {
        self.players.iter().map(|p| p.count_face(face)).sum()
    }

    pub fn game_over(&self) -> bool {
        self.players.len() == 1
    }

    pub fn winner(&self) -> Option<&Player> {
        if self.game_over() {
            self.players.first()
        } else {
            None
        }
    }

    /// True if the pool holds at least as many dice of the face as claimed.
    pub fn check_bet(&self, bet: &Bet) -> bool {
        self.count_face(bet.face()) >= bet.amount()
    }

    /// True if the pool holds exactly as many dice of the face as claimed.
    pub fn check_spot_on(&self, bet: &Bet) -> bool {
        self.count_face(bet.face()) == bet.amount()
    }

    /// Odds that `bet` is true for someone holding `known`.
    pub fn bet_odds(&self, bet: &Bet, known: &[u8]) -> f64 {
        odds::at_least(bet.face(), bet.amount(), self.dice_in_play(), known, self.dice_size)
    }

    /// Odds that `bet` is exactly right for someone holding `known`.
    pub fn spot_on_odds(&self, bet: &Bet, known: &[u8]) -> f64 {
        odds::spot_on(bet.face(), bet.amount(), self.dice_in_play(), known, self.dice_size)
    }

    /// The lowest bet that would beat the current one while staying on the
    /// table. `None` if no bet is active or nothing higher fits.
    pub fn min_raise(&self) -> Option<Bet> {
        let current = self.current_bet?;
        let next = if current.face() < self.dice_size {
            Bet::new(current.amount(), current.face() + 1)
        } else {
            Bet::new(current.amount() + 1, 1)
        };
        self.validate_bet(&next).ok().map(|_| next)
    }

    pub fn history_recent(&self, n: usize) -> Vec<HistoryEntry> {
        if n == 0 {
            return Vec::new();
        }
        let len = self.history.len();
        let start = len.saturating_sub(n);
        self.history[start..].to_vec()
    }

    pub fn history_recent_offset(&self, n: usize, offset: usize) -> Vec<HistoryEntry> {
        if n == 0 {
            return Vec::new();
        }
        let len = self.history.len();
        if len == 0 {
            return Vec::new();
        }
        let max_offset = len.saturating_sub(n);
        let offset = offset.min(max_offset);
        let end = len.saturating_sub(offset);
        let start = end.saturating_sub(n);
        self.history[start..end].to_vec()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Hand the turn to the player at the front of the rotation and move them
    /// to the back.
    pub fn next_player(&mut self) -> Option<&Player> {
        if self.players.is_empty() {
            return None;
        }
        self.players.rotate_left(1);
        let next = self.players.last()?;
        self.previous_player = self.current_player;
        self.current_player = Some(next.id);
        self.turn += 1;
        log::debug!("turn {}: {}", self.turn, next.name);
        Some(next)
    }

    /// Start a match: fresh dice, no bet, and the first player's turn.
    pub fn setup(&mut self) {
        self.roll_all();
        self.current_bet = None;
        self.current_player = None;
        self.previous_player = None;
        self.turn = 0;
        self.history.clear();
        log::info!(
            "new match: {} players, {} dice of {} faces",
            self.players.len(),
            self.dice_count,
            self.dice_size
        );
        self.next_player();
    }

    /// Start a new round: reroll every hand and clear the bet. Turn order is
    /// left alone.
    pub fn reset(&mut self) {
        self.roll_all();
        self.current_bet = None;
        log::debug!("new round, {} dice in play", self.dice_in_play());
    }

    /// Open the round. Only the range checks apply.
    pub fn first_bet(&mut self, bet: Bet) -> Result<(), RuleViolation> {
        self.validate_bet(&bet)?;
        let bettor = self.current_player.ok_or(RuleViolation::NoCurrentPlayer)?;
        self.accept_bet(bettor, bet);
        Ok(())
    }

    /// Raise the current bet.
    pub fn place_bet(&mut self, bet: Bet) -> Result<(), RuleViolation> {
        self.validate_raise(&bet)?;
        let bettor = self.current_player.ok_or(RuleViolation::NoCurrentPlayer)?;
        self.accept_bet(bettor, bet);
        Ok(())
    }

    /// Whether `bet` would be accepted by [`Game::place_bet`].
    pub fn is_valid_raise(&self, bet: &Bet) -> bool {
        self.validate_raise(bet).is_ok()
    }

    /// The current player says the last bet is false.
    ///
    /// If the bet holds the challenger loses a die, otherwise the bettor does.
    /// Either way the round is reset.
    pub fn call_bluff(&mut self) -> Result<Resolution, RuleViolation> {
        let (bet, challenger, bettor) = self.challenge_parties()?;
        let odds = self.challenger_odds(challenger, |g, known| g.bet_odds(&bet, known));
        let revealed = self.reveal();
        self.record_history(challenger, HistoryVerb::CallBluff, Some(bet));

        let (verdict, loser) = if self.check_bet(&bet) {
            (Verdict::ChallengerIncorrect, challenger)
        } else {
            (Verdict::ChallengerCorrect, bettor)
        };
        log::info!(
            "{} calls bluff on {}: {} showing, {:?}",
            self.name_of(challenger),
            bet,
            self.count_face(bet.face()),
            verdict
        );
        let losers = self.take_dice(&[loser]);
        self.reset();
        Ok(Resolution {
            challenge: Challenge::Bluff,
            verdict,
            bet,
            challenger,
            bettor,
            revealed,
            losers,
            odds,
        })
    }

    /// The current player says the last bet is exactly right.
    ///
    /// On an exact count every other player loses a die, otherwise the
    /// challenger does. Either way the round is reset.
    pub fn call_spot_on(&mut self) -> Result<Resolution, RuleViolation> {
        let (bet, challenger, bettor) = self.challenge_parties()?;
        let odds = self.challenger_odds(challenger, |g, known| g.spot_on_odds(&bet, known));
        let revealed = self.reveal();
        self.record_history(challenger, HistoryVerb::CallSpotOn, Some(bet));

        let (verdict, losing): (Verdict, Vec<PlayerId>) = if self.check_spot_on(&bet) {
            let others = self.players.iter().map(|p| p.id).filter(|&id| id != challenger).collect();
            (Verdict::Exact, others)
        } else {
            (Verdict::NotExact, vec![challenger])
        };
        log::info!(
            "{} calls spot-on on {}: {} showing, {:?}",
            self.name_of(challenger),
            bet,
            self.count_face(bet.face()),
            verdict
        );
        let losers = self.take_dice(&losing);
        self.reset();
        Ok(Resolution {
            challenge: Challenge::SpotOn,
            verdict,
            bet,
            challenger,
            bettor,
            revealed,
            losers,
            odds,
        })
    }

    /// Drop every player without dice from the rotation and return them.
    pub fn remove_lost_players(&mut self) -> Vec<Player> {
        let (lost, remaining): (Vec<Player>, Vec<Player>) =
            std::mem::take(&mut self.players).into_iter().partition(|p| p.lost());
        self.players = remaining;
        for p in &lost {
            log::info!("{} is out", p.name);
            self.record_history(p.id, HistoryVerb::Out, None);
        }
        if !lost.is_empty() {
            if let Some(id) = self.winner().map(|w| w.id) {
                log::info!("{} wins after {} turns", self.name_of(id), self.turn);
                self.record_history(id, HistoryVerb::Win, None);
            }
        }
        lost
    }

    fn validate_bet(&self, bet: &Bet) -> Result<(), RuleViolation> {
        let dice_in_play = self.dice_in_play();
        if bet.amount() > dice_in_play {
            return Err(RuleViolation::TooManyDice { amount: bet.amount(), dice_in_play });
        }
        if bet.amount() == 0 {
            return Err(RuleViolation::NoDice);
        }
        if bet.face() == 0 || bet.face() > self.dice_size {
            return Err(RuleViolation::InvalidFace { face: bet.face(), dice_size: self.dice_size });
        }
        Ok(())
    }

    fn validate_raise(&self, bet: &Bet) -> Result<(), RuleViolation> {
        self.validate_bet(bet)?;
        let current = self.current_bet.ok_or(RuleViolation::NoActiveBet)?;
        if *bet <= current {
            return Err(RuleViolation::NotHigher { bet: *bet, current });
        }
        Ok(())
    }

    fn accept_bet(&mut self, bettor: PlayerId, bet: Bet) {
        log::info!("{} bets {}", self.name_of(bettor), bet);
        self.current_bet = Some(bet);
        self.record_history(bettor, HistoryVerb::Bet, Some(bet));
    }

    fn challenge_parties(&self) -> Result<(Bet, PlayerId, PlayerId), RuleViolation> {
        let bet = self.current_bet.ok_or(RuleViolation::NoActiveBet)?;
        let challenger = self.current_player.ok_or(RuleViolation::NoCurrentPlayer)?;
        // The bettor must still be seated and be someone else.
        let bettor = self
            .previous_player
            .filter(|&id| id != challenger && self.player(id).is_some())
            .ok_or(RuleViolation::NoPreviousPlayer)?;
        Ok((bet, challenger, bettor))
    }

    fn challenger_odds<F>(&self, challenger: PlayerId, odds: F) -> f64
    where
        F: Fn(&Self, &[u8]) -> f64,
    {
        let known = self.player(challenger).map(|p| p.dice.clone()).unwrap_or_default();
        odds(self, &known)
    }

    fn reveal(&self) -> Vec<(PlayerId, Vec<u8>)> {
        self.players.iter().map(|p| (p.id, p.dice.clone())).collect()
    }

    /// Remove one die from each listed player still holding one.
    fn take_dice(&mut self, ids: &[PlayerId]) -> Vec<PlayerId> {
        let mut losers = Vec::with_capacity(ids.len());
        for p in &mut self.players {
            if ids.contains(&p.id) && p.remove_die() {
                losers.push(p.id);
            }
        }
        for &id in &losers {
            log::info!("{} loses a die", self.name_of(id));
            self.record_history(id, HistoryVerb::LoseDie, None);
        }
        losers
    }

    fn roll_all(&mut self) {
        let sides = self.dice_size;
        for p in &mut self.players {
            p.roll(sides, self.dice.as_mut());
        }
    }

    fn name_of(&self, id: PlayerId) -> &str {
        self.player(id).map(|p| p.name()).unwrap_or("?")
    }

    fn record_history(&mut self, player: PlayerId, verb: HistoryVerb, bet: Option<Bet>) {
        let entry = HistoryEntry { turn: self.turn, player, verb, bet };
        self.history.push(entry);
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let current = self.current_player().map(|p| p.name()).unwrap_or("-");
        let bet = self.current_bet.map(|b| b.to_string()).unwrap_or_else(|| "-".to_string());
        writeln!(f, "Current Player: {current}")?;
        write!(f, "Current Bet: {bet}")?;
        for p in &self.players {
            write!(f, "\n{p}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;

    fn mk_game(names: &[&str], dice_count: usize) -> Game {
        Game::with_source(names, dice_count, 6, Box::new(ScriptedDice::new(vec![1, 2, 3, 4, 5, 6])))
            .expect("valid game")
    }

    fn set_hands(game: &mut Game, hands: &[&[u8]]) {
        for (p, hand) in game.players.iter_mut().zip(hands) {
            p.dice = hand.to_vec();
        }
    }

    #[test]
    fn rejects_single_player() {
        let err = Game::new(&["Solo"], 5, 6).unwrap_err();
        assert_eq!(err, ConfigError::TooFewPlayers { min: 2, got: 1 });
    }

    #[test]
    fn rejects_blank_name_and_zero_dice() {
        assert_eq!(Game::new(&["A", "  "], 5, 6).unwrap_err(), ConfigError::EmptyName);
        assert_eq!(Game::new(&["A", "B"], 0, 6).unwrap_err(), ConfigError::NoDice);
        assert_eq!(Game::new(&["A", "B"], 5, 0).unwrap_err(), ConfigError::NoFaces);
    }

    #[test]
    fn setup_gives_first_player_the_turn() {
        let mut g = mk_game(&["A", "B", "C"], 2);
        g.setup();
        assert_eq!(g.current_player().map(|p| p.name()), Some("A"));
        assert_eq!(g.previous_player_id(), None);
        assert_eq!(g.turn(), 1);
        let order: Vec<&str> = g.players().iter().map(|p| p.name()).collect();
        assert_eq!(order, ["B", "C", "A"]);
    }

    #[test]
    fn first_bet_rejects_out_of_range() {
        let mut g = mk_game(&["A", "B"], 2);
        g.setup();
        assert_eq!(
            g.first_bet(Bet::new(5, 2)),
            Err(RuleViolation::TooManyDice { amount: 5, dice_in_play: 4 })
        );
        assert_eq!(g.first_bet(Bet::new(0, 2)), Err(RuleViolation::NoDice));
        assert_eq!(
            g.first_bet(Bet::new(1, 7)),
            Err(RuleViolation::InvalidFace { face: 7, dice_size: 6 })
        );
        assert_eq!(g.current_bet(), None);
    }

    #[test]
    fn place_bet_without_active_bet_fails() {
        let mut g = mk_game(&["A", "B"], 2);
        g.setup();
        assert_eq!(g.place_bet(Bet::new(1, 2)), Err(RuleViolation::NoActiveBet));
    }

    #[test]
    fn not_higher_message_names_both_bets() {
        let mut g = mk_game(&["A", "B"], 3);
        g.setup();
        g.first_bet(Bet::new(2, 4)).unwrap();
        g.next_player();
        let err = g.place_bet(Bet::new(2, 3)).unwrap_err();
        assert_eq!(err.to_string(), "bet 2x [3] isn't better than the current bet 2x [4]");
        assert_eq!(g.current_bet(), Some(Bet::new(2, 4)));
    }

    #[test]
    fn min_raise_steps_face_then_amount() {
        let mut g = mk_game(&["A", "B"], 2);
        g.setup();
        assert_eq!(g.min_raise(), None);
        g.first_bet(Bet::new(1, 5)).unwrap();
        assert_eq!(g.min_raise(), Some(Bet::new(1, 6)));
        g.current_bet = Some(Bet::new(1, 6));
        assert_eq!(g.min_raise(), Some(Bet::new(2, 1)));
        g.current_bet = Some(Bet::new(4, 6));
        assert_eq!(g.min_raise(), None);
    }

    #[test]
    fn bluff_against_true_bet_costs_challenger() {
        let mut g = mk_game(&["A", "B"], 2);
        g.setup();
        set_hands(&mut g, &[&[5, 5], &[5, 1]]);
        g.first_bet(Bet::new(3, 5)).unwrap();
        g.next_player();
        let challenger = g.current_player_id().unwrap();

        let res = g.call_bluff().unwrap();

        assert_eq!(res.verdict, Verdict::ChallengerIncorrect);
        assert_eq!(res.losers, vec![challenger]);
        assert_eq!(res.matching(), 3);
        assert_eq!(g.player(challenger).unwrap().dice().len(), 1);
        assert_eq!(g.dice_in_play(), 3);
        assert_eq!(g.current_bet(), None);
    }

    #[test]
    fn spot_on_miss_costs_challenger_only() {
        let mut g = mk_game(&["A", "B", "C"], 2);
        g.setup();
        set_hands(&mut g, &[&[2, 2], &[2, 1], &[6, 6]]);
        g.first_bet(Bet::new(2, 2)).unwrap();
        g.next_player();
        let challenger = g.current_player_id().unwrap();

        let res = g.call_spot_on().unwrap();

        assert_eq!(res.verdict, Verdict::NotExact);
        assert_eq!(res.losers, vec![challenger]);
        assert_eq!(g.dice_in_play(), 5);
    }

    #[test]
    fn challenge_without_bet_is_rejected() {
        let mut g = mk_game(&["A", "B"], 2);
        g.setup();
        assert_eq!(g.call_bluff().unwrap_err(), RuleViolation::NoActiveBet);
        assert_eq!(g.call_spot_on().unwrap_err(), RuleViolation::NoActiveBet);
        assert_eq!(g.dice_in_play(), 4);
    }

    #[test]
    fn challenge_needs_a_seated_bettor() {
        let mut g = mk_game(&["A", "B", "C"], 1);
        g.setup();
        set_hands(&mut g, &[&[1], &[1], &[6]]);
        // A bets on three 1s with only two out there; B calls and A is out.
        g.first_bet(Bet::new(3, 1)).unwrap();
        g.next_player();
        assert_eq!(g.call_bluff().unwrap().verdict, Verdict::ChallengerCorrect);
        assert_eq!(g.remove_lost_players().len(), 1);

        // Without advancing, B's last opponent is no longer seated.
        g.first_bet(Bet::new(1, 1)).unwrap();
        let dice = g.dice_in_play();
        assert_eq!(g.call_bluff().unwrap_err(), RuleViolation::NoPreviousPlayer);
        assert_eq!(g.call_spot_on().unwrap_err(), RuleViolation::NoPreviousPlayer);
        assert_eq!(g.dice_in_play(), dice);
        assert_eq!(g.current_bet(), Some(Bet::new(1, 1)));
    }

    #[test]
    fn challenger_cannot_challenge_themselves() {
        let mut g = mk_game(&["A", "B"], 2);
        g.setup();
        g.first_bet(Bet::new(1, 2)).unwrap();
        g.previous_player = g.current_player;
        assert_eq!(g.call_bluff().unwrap_err(), RuleViolation::NoPreviousPlayer);
        assert_eq!(g.dice_in_play(), 4);
    }

    #[test]
    fn odds_use_challenger_hand_before_reroll() {
        let mut g = mk_game(&["A", "B"], 1);
        g.setup();
        set_hands(&mut g, &[&[4], &[4]]);
        g.first_bet(Bet::new(1, 4)).unwrap();
        g.next_player();
        // The challenger holds a 4, so one 4 is certain.
        let res = g.call_bluff().unwrap();
        assert_eq!(res.odds, 1.0);
    }

    #[test]
    fn history_tracks_bets_and_losses() {
        let mut g = mk_game(&["A", "B"], 1);
        g.setup();
        set_hands(&mut g, &[&[3], &[4]]);
        g.first_bet(Bet::new(2, 3)).unwrap();
        g.next_player();
        g.call_bluff().unwrap();
        g.remove_lost_players();

        let verbs: Vec<HistoryVerb> = g.history_recent(10).iter().map(|e| e.verb).collect();
        assert_eq!(
            verbs,
            [
                HistoryVerb::Bet,
                HistoryVerb::CallBluff,
                HistoryVerb::LoseDie,
                HistoryVerb::Out,
                HistoryVerb::Win
            ]
        );
        assert_eq!(g.history_recent_offset(2, 1).len(), 2);
    }

    #[test]
    fn display_lists_players() {
        let mut g = mk_game(&["Ann", "Ben"], 1);
        g.setup();
        set_hands(&mut g, &[&[2], &[6]]);
        let text = g.to_string();
        assert!(text.starts_with("Current Player: Ann\nCurrent Bet: -"));
        assert!(text.contains("Ben: [2]"));
        assert!(text.contains("Ann: [6]"));
    }
}
