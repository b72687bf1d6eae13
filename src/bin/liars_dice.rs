use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use liars_dice::cli::Cli;
use liars_dice::tui::{app::AppState, controller};
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};
use std::process::ExitCode;
use std::time::Duration;

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run(cli: Cli) -> io::Result<()> {
    if let Some(path) = &cli.log {
        liars_dice::init_logging(path)?;
    }
    let config = cli.config();
    log::info!("starting liars-dice {} with {config:?}", liars_dice::VERSION);

    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = AppState::new(config, cli.names);

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = cli.config().validate() {
        eprintln!("liars-dice: {err}");
        return ExitCode::from(2);
    }
    if !io::stdout().is_terminal() {
        println!(
            "liars-dice requires a real terminal (TTY).\nRun it in a terminal; Esc quits. Version: {}",
            liars_dice::VERSION
        );
        return ExitCode::SUCCESS;
    }
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("liars-dice: {err}");
            ExitCode::FAILURE
        }
    }
}
