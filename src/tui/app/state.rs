use crate::bet::Bet;
use crate::config::GameConfig;
use crate::engine::{Action, ActionOutcome, GameEngine};
use crate::game::{Game, Resolution};
use crate::player::{Player, PlayerId};
use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Setup,
    /// Between turns: the device is being passed on.
    Handoff,
    Turn,
    Reveal,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetField {
    Face,
    Amount,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    NameChar(char),
    NameBackspace,
    StartMatch,
    Continue,
    NewMatch,
    OpenBet,
    CallBluff,
    CallSpotOn,
    BetDigit(u8),
    BetBackspace,
    BetSwitchField,
    BetSubmit,
    BetCancel,
    ToggleHelp,
    ToggleHistory,
    HistoryUp,
    HistoryDown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct BetEntry {
    face: String,
    amount: String,
    field: BetField,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub config: GameConfig,
    // None until the first match starts
    pub game: Option<Game>,
    pub menu_index: usize,
    pub names_input: String,
    // Everyone seated this match, including players already out
    seated: HashMap<PlayerId, String>,
    last_resolution: Option<Resolution>,
    last_out: Vec<Player>,
    help_open: bool,
    history_open: bool,
    history_offset: usize,
    bet_entry: Option<BetEntry>,
    bet_entry_error: Option<String>,
    setup_error: Option<String>,
    action_error: Option<String>,
    action_error_at: Option<Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(GameConfig::default(), Vec::new())
    }
}

impl AppState {
    pub const HISTORY_PAGE_SIZE: usize = 20;
    const ACTION_ERROR_TTL: Duration = Duration::from_secs(3);
    const MAX_ENTRY_DIGITS: usize = 3;
    const MAX_NAMES_LEN: usize = 80;

    pub fn new(config: GameConfig, names: Vec<String>) -> Self {
        Self {
            scene: Scene::Setup,
            config,
            game: None,
            menu_index: 0,
            names_input: names.join(" "),
            seated: HashMap::new(),
            last_resolution: None,
            last_out: Vec::new(),
            help_open: false,
            history_open: false,
            history_offset: 0,
            bet_entry: None,
            bet_entry_error: None,
            setup_error: None,
            action_error: None,
            action_error_at: None,
        }
    }

    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    pub fn last_resolution(&self) -> Option<&Resolution> {
        self.last_resolution.as_ref()
    }

    /// Players knocked out by the last challenge.
    pub fn last_out(&self) -> &[Player] {
        &self.last_out
    }

    /// Name for any player of this match, including ones already out.
    pub fn player_name(&self, id: PlayerId) -> String {
        self.seated.get(&id).cloned().unwrap_or_else(|| id.to_string())
    }

    pub fn bet_entry_active(&self) -> bool {
        self.bet_entry.is_some()
    }

    pub fn bet_entry_face(&self) -> Option<&str> {
        self.bet_entry.as_ref().map(|e| e.face.as_str())
    }

    pub fn bet_entry_amount(&self) -> Option<&str> {
        self.bet_entry.as_ref().map(|e| e.amount.as_str())
    }

    pub fn bet_entry_field(&self) -> Option<BetField> {
        self.bet_entry.as_ref().map(|e| e.field)
    }

    pub fn bet_entry_error(&self) -> Option<&str> {
        self.bet_entry_error.as_deref()
    }

    pub fn setup_error(&self) -> Option<&str> {
        self.setup_error.as_deref()
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    fn set_action_error(&mut self, message: String) {
        self.action_error = Some(message);
        self.action_error_at = Some(Instant::now());
    }

    fn clear_action_error(&mut self) {
        self.action_error = None;
        self.action_error_at = None;
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn history_open(&self) -> bool {
        self.history_open
    }

    pub fn history_offset(&self) -> usize {
        self.history_offset
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub(crate) fn close_history(&mut self) {
        self.history_open = false;
    }

    pub(crate) fn push_name_char(&mut self, c: char) {
        if self.names_input.chars().count() < Self::MAX_NAMES_LEN && !c.is_control() {
            self.names_input.push(c);
        }
        self.setup_error = None;
    }

    pub(crate) fn pop_name_char(&mut self) {
        self.names_input.pop();
        self.setup_error = None;
    }

    /// Build a match from the typed names and current settings.
    pub fn start_match(&mut self) -> bool {
        let names: Vec<&str> = self.names_input.split_whitespace().collect();
        match Game::from_config(&self.config, &names) {
            Ok(mut game) => {
                game.setup();
                log::info!("match started with {}", names.join(", "));
                self.seated =
                    game.players().iter().map(|p| (p.id(), p.name().to_string())).collect();
                self.game = Some(game);
                self.last_resolution = None;
                self.last_out.clear();
                self.bet_entry = None;
                self.bet_entry_error = None;
                self.setup_error = None;
                self.history_offset = 0;
                self.clear_action_error();
                self.scene = Scene::Handoff;
                true
            }
            Err(err) => {
                self.setup_error = Some(err.to_string());
                false
            }
        }
    }

    fn continue_scene(&mut self) {
        match self.scene {
            Scene::Handoff => {
                self.scene = Scene::Turn;
                let opening = self.game.as_ref().is_some_and(|g| g.current_bet().is_none());
                if opening {
                    self.open_bet_entry();
                }
            }
            Scene::Reveal => {
                let Some(game) = self.game.as_mut() else {
                    return;
                };
                if game.game_over() {
                    self.scene = Scene::GameOver;
                } else {
                    game.next_player();
                    self.scene = Scene::Handoff;
                }
            }
            _ => {}
        }
    }

    fn can_act(&self) -> bool {
        self.scene == Scene::Turn && self.game.is_some()
    }

    fn open_bet_entry(&mut self) -> bool {
        if !self.can_act() || self.bet_entry.is_some() {
            return false;
        }
        let Some(game) = self.game.as_ref() else {
            return false;
        };
        let entry = match (game.current_bet(), game.min_raise()) {
            (None, _) => BetEntry { face: String::new(), amount: String::new(), field: BetField::Face },
            (Some(_), Some(min)) => BetEntry {
                face: min.face().to_string(),
                amount: min.amount().to_string(),
                field: BetField::Face,
            },
            (Some(_), None) => {
                self.set_action_error("No higher bet fits on the table".to_string());
                return false;
            }
        };
        self.bet_entry = Some(entry);
        self.bet_entry_error = None;
        true
    }

    fn bet_entry_push_digit(&mut self, digit: u8) {
        if let Some(entry) = self.bet_entry.as_mut() {
            let buf = match entry.field {
                BetField::Face => &mut entry.face,
                BetField::Amount => &mut entry.amount,
            };
            if buf.len() < Self::MAX_ENTRY_DIGITS {
                buf.push(char::from(b'0' + digit));
            }
        }
        self.bet_entry_error = None;
    }

    fn bet_entry_backspace(&mut self) {
        if let Some(entry) = self.bet_entry.as_mut() {
            match entry.field {
                BetField::Face => entry.face.pop(),
                BetField::Amount => entry.amount.pop(),
            };
        }
        self.bet_entry_error = None;
    }

    fn bet_entry_switch_field(&mut self) {
        if let Some(entry) = self.bet_entry.as_mut() {
            entry.field = match entry.field {
                BetField::Face => BetField::Amount,
                BetField::Amount => BetField::Face,
            };
        }
    }

    fn bet_entry_submit(&mut self) -> bool {
        let Some(entry) = self.bet_entry.as_ref() else {
            return false;
        };
        let Ok(face) = entry.face.parse::<u8>() else {
            self.bet_entry_error = Some("Invalid die face.".to_string());
            return false;
        };
        let Ok(amount) = entry.amount.parse::<usize>() else {
            self.bet_entry_error = Some("Invalid die amount.".to_string());
            return false;
        };
        let Some(game) = self.game.as_mut() else {
            return false;
        };
        match game.apply(Action::Bet(Bet::new(amount, face))) {
            Ok(_) => {
                game.next_player();
                self.bet_entry = None;
                self.bet_entry_error = None;
                self.clear_action_error();
                self.scene = Scene::Handoff;
                true
            }
            Err(err) => {
                self.bet_entry_error = Some(err.to_string());
                false
            }
        }
    }

    fn bet_entry_cancel(&mut self) {
        // The opening bet is mandatory.
        let raising = self.game.as_ref().is_some_and(|g| g.current_bet().is_some());
        if raising {
            self.bet_entry = None;
            self.bet_entry_error = None;
        }
    }

    fn challenge(&mut self, action: Action) -> bool {
        if !self.can_act() || self.bet_entry.is_some() {
            return false;
        }
        let Some(game) = self.game.as_mut() else {
            return false;
        };
        match game.apply(action) {
            Ok(ActionOutcome::Resolved(resolution)) => {
                self.last_out = game.remove_lost_players();
                self.last_resolution = Some(resolution);
                self.clear_action_error();
                self.scene = Scene::Reveal;
                true
            }
            Ok(ActionOutcome::BetPlaced(_)) => {
                game.next_player();
                self.scene = Scene::Handoff;
                true
            }
            Err(err) => {
                self.set_action_error(err.to_string());
                false
            }
        }
    }

    pub fn new_match(&mut self) {
        if self.scene != Scene::GameOver {
            return;
        }
        self.game = None;
        self.seated.clear();
        self.last_resolution = None;
        self.last_out.clear();
        self.open_menu();
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::MenuNext => {
                if self.scene == Scene::Setup {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Setup {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Setup {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Setup {
                    self.menu_dec();
                }
                false
            }
            InputAction::NameChar(c) => {
                if self.scene == Scene::Setup && self.menu_on_names() {
                    self.push_name_char(c);
                }
                false
            }
            InputAction::NameBackspace => {
                if self.scene == Scene::Setup && self.menu_on_names() {
                    self.pop_name_char();
                }
                false
            }
            InputAction::StartMatch => self.scene == Scene::Setup && self.start_match(),
            InputAction::Continue => {
                self.continue_scene();
                false
            }
            InputAction::NewMatch => {
                self.new_match();
                false
            }
            InputAction::OpenBet => self.open_bet_entry(),
            InputAction::CallBluff => self.challenge(Action::CallBluff),
            InputAction::CallSpotOn => self.challenge(Action::CallSpotOn),
            InputAction::BetDigit(d) => {
                self.bet_entry_push_digit(d);
                false
            }
            InputAction::BetBackspace => {
                self.bet_entry_backspace();
                false
            }
            InputAction::BetSwitchField => {
                self.bet_entry_switch_field();
                false
            }
            InputAction::BetSubmit => self.bet_entry_submit(),
            InputAction::BetCancel => {
                self.bet_entry_cancel();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene != Scene::Setup {
                    self.history_open = false;
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::ToggleHistory => {
                if self.scene != Scene::Setup {
                    self.help_open = false;
                    if !self.history_open {
                        self.history_offset = 0;
                    }
                    self.history_open = !self.history_open;
                }
                false
            }
            InputAction::HistoryUp => {
                if self.history_open {
                    let len = self.game.as_ref().map(|g| g.history_len()).unwrap_or(0);
                    let max_offset = len.saturating_sub(Self::HISTORY_PAGE_SIZE);
                    self.history_offset = (self.history_offset + 1).min(max_offset);
                }
                false
            }
            InputAction::HistoryDown => {
                if self.history_open && self.history_offset > 0 {
                    self.history_offset -= 1;
                }
                false
            }
        }
    }

    /// Expire stale action errors.
    pub fn on_tick(&mut self) {
        if let Some(at) = self.action_error_at {
            if at.elapsed() >= Self::ACTION_ERROR_TTL {
                self.clear_action_error();
            }
        }
    }
}
