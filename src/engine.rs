// Game engine API boundary. Frontends drive a match through this trait and the
// closed `Action` set instead of reaching into `Game` internals.

use crate::bet::Bet;
use crate::game::{Resolution, RuleViolation};
use crate::player::{Player, PlayerId};

/// What a player can do on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Action {
    /// Open the round, or raise the current bet.
    Bet(Bet),
    CallBluff,
    CallSpotOn,
}

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ActionOutcome {
    BetPlaced(Bet),
    Resolved(Resolution),
}

pub trait GameEngine {
    // Match lifecycle
    fn setup(&mut self);
    fn next_player(&mut self) -> Option<PlayerId>;
    fn remove_lost_players(&mut self) -> Vec<Player>;

    // Rules
    fn first_bet(&mut self, bet: Bet) -> Result<(), RuleViolation>;
    fn place_bet(&mut self, bet: Bet) -> Result<(), RuleViolation>;
    fn call_bluff(&mut self) -> Result<Resolution, RuleViolation>;
    fn call_spot_on(&mut self) -> Result<Resolution, RuleViolation>;

    // Queries
    fn current_bet(&self) -> Option<Bet>;
    fn current_player(&self) -> Option<PlayerId>;
    fn dice_in_play(&self) -> usize;
    fn dice_size(&self) -> u8;
    fn game_over(&self) -> bool;

    /// Carry out `action` for the current player. A bet opens the round when
    /// none is active and must beat the current one otherwise.
    fn apply(&mut self, action: Action) -> Result<ActionOutcome, RuleViolation> {
        match action {
            Action::Bet(bet) => {
                if self.current_bet().is_none() {
                    self.first_bet(bet)?;
                } else {
                    self.place_bet(bet)?;
                }
                Ok(ActionOutcome::BetPlaced(bet))
            }
            Action::CallBluff => self.call_bluff().map(ActionOutcome::Resolved),
            Action::CallSpotOn => self.call_spot_on().map(ActionOutcome::Resolved),
        }
    }
}

impl GameEngine for crate::game::Game {
    fn setup(&mut self) {
        self.setup();
    }
    fn next_player(&mut self) -> Option<PlayerId> {
        self.next_player().map(|p| p.id())
    }
    fn remove_lost_players(&mut self) -> Vec<Player> {
        self.remove_lost_players()
    }

    fn first_bet(&mut self, bet: Bet) -> Result<(), RuleViolation> {
        self.first_bet(bet)
    }
    fn place_bet(&mut self, bet: Bet) -> Result<(), RuleViolation> {
        self.place_bet(bet)
    }
    fn call_bluff(&mut self) -> Result<Resolution, RuleViolation> {
        self.call_bluff()
    }
    fn call_spot_on(&mut self) -> Result<Resolution, RuleViolation> {
        self.call_spot_on()
    }

    fn current_bet(&self) -> Option<Bet> {
        self.current_bet
    }
    fn current_player(&self) -> Option<PlayerId> {
        self.current_player
    }
    fn dice_in_play(&self) -> usize {
        self.dice_in_play()
    }
    fn dice_size(&self) -> u8 {
        self.dice_size
    }
    fn game_over(&self) -> bool {
        self.game_over()
    }
}
