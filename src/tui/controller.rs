use crate::tui::app::{AppState, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key) {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
    Ok(())
}

/// Map a key press onto the app. Returns true when the user asked to quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    let code = key.code;
    if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(code, KeyCode::Char('c')) {
        return true;
    }
    if app.scene == Scene::Setup {
        return handle_setup_key(app, code);
    }

    let help_toggle = matches!(code, KeyCode::Char('?'));
    let history_toggle = matches!(code, KeyCode::Char('h') | KeyCode::Char('H'));
    if help_toggle {
        let _ = app.handle_input(InputAction::ToggleHelp);
        return false;
    }
    if history_toggle {
        let _ = app.handle_input(InputAction::ToggleHistory);
        return false;
    }
    if app.help_open() {
        if matches!(code, KeyCode::Esc) {
            let _ = app.handle_input(InputAction::ToggleHelp);
        }
        return false;
    }
    if app.history_open() {
        match code {
            KeyCode::Up => {
                let _ = app.handle_input(InputAction::HistoryUp);
            }
            KeyCode::Down => {
                let _ = app.handle_input(InputAction::HistoryDown);
            }
            KeyCode::Esc => {
                let _ = app.handle_input(InputAction::ToggleHistory);
            }
            _ => {}
        }
        return false;
    }
    if app.bet_entry_active() {
        match code {
            KeyCode::Esc => {
                let _ = app.handle_input(InputAction::BetCancel);
            }
            KeyCode::Enter => {
                let _ = app.handle_input(InputAction::BetSubmit);
            }
            KeyCode::Backspace => {
                let _ = app.handle_input(InputAction::BetBackspace);
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                let _ = app.handle_input(InputAction::BetSwitchField);
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let _ = app.handle_input(InputAction::BetDigit(c as u8 - b'0'));
            }
            _ => {}
        }
        return false;
    }

    match app.scene {
        Scene::Handoff | Scene::Reveal => {
            if matches!(code, KeyCode::Enter | KeyCode::Char(' ')) {
                let _ = app.handle_input(InputAction::Continue);
            }
        }
        Scene::Turn => match code {
            KeyCode::Char('1') | KeyCode::Char('b') | KeyCode::Char('B') | KeyCode::Char('r') => {
                let _ = app.handle_input(InputAction::OpenBet);
            }
            KeyCode::Char('2') | KeyCode::Char('l') | KeyCode::Char('L') => {
                let _ = app.handle_input(InputAction::CallBluff);
            }
            KeyCode::Char('3') | KeyCode::Char('s') | KeyCode::Char('S') => {
                let _ = app.handle_input(InputAction::CallSpotOn);
            }
            _ => {}
        },
        Scene::GameOver => match code {
            KeyCode::Enter => {
                let _ = app.handle_input(InputAction::NewMatch);
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
            _ => {}
        },
        Scene::Setup => {}
    }
    false
}

fn handle_setup_key(app: &mut AppState, code: KeyCode) -> bool {
    match code {
        KeyCode::Esc => return true,
        KeyCode::Up => {
            let _ = app.handle_input(InputAction::MenuPrev);
        }
        KeyCode::Down | KeyCode::Tab => {
            let _ = app.handle_input(InputAction::MenuNext);
        }
        KeyCode::Enter => {
            let _ = app.handle_input(InputAction::StartMatch);
        }
        KeyCode::Backspace if app.menu_on_names() => {
            let _ = app.handle_input(InputAction::NameBackspace);
        }
        KeyCode::Char(c) if app.menu_on_names() => {
            let _ = app.handle_input(InputAction::NameChar(c));
        }
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char(' ') => {
            let _ = app.handle_input(InputAction::MenuInc);
        }
        KeyCode::Left | KeyCode::Char('-') | KeyCode::Char('_') => {
            let _ = app.handle_input(InputAction::MenuDec);
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        _ => {}
    }
    false
}
