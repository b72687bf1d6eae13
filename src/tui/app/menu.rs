use super::{AppState, Scene};
use crate::config::MAX_DICE_COUNT;

const MIN_MENU_DICE_SIZE: u8 = 2;
const MAX_DICE_SIZE: u8 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Players,
    DiceCount,
    DiceSize,
    UnicodeDice,
    ShowOdds,
    Debug,
}

const MENU_ITEMS: [MenuItem; 6] = [
    MenuItem::Players,
    MenuItem::DiceCount,
    MenuItem::DiceSize,
    MenuItem::UnicodeDice,
    MenuItem::ShowOdds,
    MenuItem::Debug,
];

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::Players => format!("Players: {}_", app.names_input),
            MenuItem::DiceCount => format!("Dice per player: {}", app.config.dice_count),
            MenuItem::DiceSize => format!("Faces per die: {}", app.config.dice_size),
            MenuItem::UnicodeDice => {
                let note = if app.config.dice_size == 6 { "" } else { " (d6 only)" };
                format!("Unicode dice: {}{note}", on_off(app.config.unicode_dice))
            }
            MenuItem::ShowOdds => format!("Show odds: {}", on_off(app.config.show_odds)),
            MenuItem::Debug => format!("Debug (show all hands): {}", on_off(app.config.debug)),
        }
    }

    fn inc(self, app: &mut AppState) {
        let cfg = &mut app.config;
        match self {
            MenuItem::Players => {}
            MenuItem::DiceCount => {
                if cfg.dice_count < MAX_DICE_COUNT {
                    cfg.dice_count += 1;
                }
            }
            MenuItem::DiceSize => {
                if cfg.dice_size < MAX_DICE_SIZE {
                    cfg.dice_size += 1;
                }
            }
            MenuItem::UnicodeDice => cfg.unicode_dice = !cfg.unicode_dice,
            MenuItem::ShowOdds => cfg.show_odds = !cfg.show_odds,
            MenuItem::Debug => cfg.debug = !cfg.debug,
        }
    }

    fn dec(self, app: &mut AppState) {
        let cfg = &mut app.config;
        match self {
            MenuItem::Players => {}
            MenuItem::DiceCount => {
                if cfg.dice_count > 1 {
                    cfg.dice_count -= 1;
                }
            }
            MenuItem::DiceSize => {
                if cfg.dice_size > MIN_MENU_DICE_SIZE {
                    cfg.dice_size -= 1;
                }
            }
            // toggles are symmetric
            _ => self.inc(app),
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    /// True while the names field has focus, so typed keys go to it.
    pub fn menu_on_names(&self) -> bool {
        MENU_ITEMS[self.menu_index % MENU_ITEMS.len()] == MenuItem::Players
    }

    pub fn open_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.menu_index = 0;
        self.scene = Scene::Setup;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dice_size_floor_is_two() {
        let mut app = AppState::default();
        app.menu_index = 2;
        for _ in 0..10 {
            app.menu_dec();
        }
        assert_eq!(app.config.dice_size, 2);
        app.menu_inc();
        assert_eq!(app.config.dice_size, 3);
    }

    #[test]
    fn toggles_flip_both_ways() {
        let mut app = AppState::default();
        app.menu_index = 4;
        assert!(app.config.show_odds);
        app.menu_inc();
        assert!(!app.config.show_odds);
        app.menu_dec();
        assert!(app.config.show_odds);
    }

    #[test]
    fn navigation_wraps() {
        let mut app = AppState::default();
        assert!(app.menu_on_names());
        app.menu_prev();
        assert_eq!(app.menu_index, MENU_ITEMS.len() - 1);
        app.menu_next();
        assert!(app.menu_on_names());
    }
}
