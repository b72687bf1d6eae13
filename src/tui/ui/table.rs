use crate::bet::Bet;
use crate::game::{Challenge, Game, Verdict};
use crate::player::PlayerId;
use crate::tui::app::{AppState, BetField, Scene};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner, player_color};

const DIE_GLYPHS: [&str; 6] = ["⚀", "⚁", "⚂", "⚃", "⚄", "⚅"];

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let Some(game) = app.game() else {
        return;
    };
    let size = f.area();
    let header_height: u16 = 2 + 2;
    let status_height: u16 = 2 + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Min(5),
            Constraint::Length(status_height),
        ])
        .split(size);

    let unicode = app.config.unicode_faces();
    let mut header_lines: Vec<Line> = Vec::new();
    header_lines.push(Line::from(format!(
        "Turn {}   Players: {}   Dice in play: {} (d{})",
        game.turn(),
        game.players().len(),
        game.dice_in_play(),
        game.dice_size()
    )));
    let bet = game.current_bet().map(|b| bet_text(b, unicode)).unwrap_or_else(|| "none".into());
    let min = game.min_raise().map(|b| bet_text(b, unicode)).unwrap_or_else(|| "--".into());
    header_lines.push(Line::from(format!("Bet: {bet}   Min raise: {min}")));
    let header = Paragraph::new(header_lines)
        .block(Block::default().title("liars-dice").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[1]);

    let (title, lines) = match app.scene {
        Scene::Handoff => ("Pass the device", handoff_lines(app, game)),
        Scene::Turn => ("Your turn", turn_lines(app, game)),
        Scene::Reveal => ("Reveal", reveal_lines(app)),
        Scene::GameOver => ("Game over", game_over_lines(app, game)),
        Scene::Setup => ("", Vec::new()),
    };
    let main = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(main, body[0]);
    draw_players(f, body[1], app, game);

    // Status bar: hints on the left, global keys on the right
    let status_area = chunks[2];
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner(status_area));

    let mut left_info = vec![Line::from(scene_hint(app, game))];
    if let Some(err) = app.action_error() {
        left_info.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }
    let right_keys = vec![Line::from("? help • H history"), Line::from("Ctrl-C quit")];
    let left_para = Paragraph::new(left_info).wrap(Wrap { trim: true });
    let right_para =
        Paragraph::new(right_keys).wrap(Wrap { trim: true }).alignment(Alignment::Right);
    f.render_widget(left_para, cols[0]);
    f.render_widget(right_para, cols[1]);

    if app.help_open() {
        draw_help(f);
    } else if app.history_open() {
        draw_history(f, app, game);
    } else if app.bet_entry_active() {
        draw_bet_entry(f, app, game);
    }
}

fn scene_hint(app: &AppState, game: &Game) -> &'static str {
    match app.scene {
        Scene::Handoff => "Enter: show your dice",
        Scene::Turn if app.bet_entry_active() => "Entering a bet",
        Scene::Turn if game.current_bet().is_some() => "1 raise • 2 call bluff • 3 call spot-on",
        Scene::Turn => "B: open the bidding",
        Scene::Reveal => "Enter: continue",
        Scene::GameOver => "Enter: new match • Q: quit",
        Scene::Setup => "",
    }
}

fn die_label(face: u8, unicode: bool) -> String {
    match face {
        1..=6 if unicode => DIE_GLYPHS[usize::from(face) - 1].to_string(),
        _ => format!("[{face}]"),
    }
}

fn bet_text(bet: Bet, unicode: bool) -> String {
    format!("{} x {}", bet.amount(), die_label(bet.face(), unicode))
}

fn dice_spans(dice: &[u8], unicode: bool, highlight: Option<u8>) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(dice.len() * 2);
    for (i, &d) in dice.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if highlight == Some(d) {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        spans.push(Span::styled(die_label(d, unicode), style));
    }
    spans
}

fn name_span(app: &AppState, id: PlayerId) -> Span<'static> {
    Span::styled(
        app.player_name(id),
        Style::default().fg(player_color(id)).add_modifier(Modifier::BOLD),
    )
}

fn handoff_lines(app: &AppState, game: &Game) -> Vec<Line<'static>> {
    let Some(next) = game.current_player_id() else {
        return Vec::new();
    };
    vec![
        Line::from(""),
        Line::from(vec![Span::raw("Give the device to "), name_span(app, next), Span::raw(".")]),
        Line::from(""),
        Line::from("Everyone else, look away."),
        Line::from(""),
        Line::from(Span::styled("Press Enter when ready.", Style::default().add_modifier(Modifier::DIM))),
    ]
}

fn turn_lines(app: &AppState, game: &Game) -> Vec<Line<'static>> {
    let unicode = app.config.unicode_faces();
    let Some(current) = game.current_player() else {
        return Vec::new();
    };
    let mut lines = vec![
        Line::from(vec![name_span(app, current.id()), Span::raw("'s turn")]),
        Line::from(""),
    ];
    let mut hand = vec![Span::raw("Your dice: ")];
    hand.extend(dice_spans(current.dice(), unicode, None));
    lines.push(Line::from(hand));
    lines.push(Line::from(""));

    match game.current_bet() {
        None => lines.push(Line::from("No bet yet. Open the round.")),
        Some(bet) => {
            let mut bet_line = vec![Span::raw("Current bet: "), Span::raw(bet_text(bet, unicode))];
            if let Some(bettor) = game.previous_player_id() {
                bet_line.push(Span::raw(" from "));
                bet_line.push(name_span(app, bettor));
            }
            lines.push(Line::from(bet_line));
            lines.push(Line::from(""));
            lines.push(Line::from("(1) Raise the bet"));
            lines.push(Line::from("(2) Call bluff"));
            lines.push(Line::from("(3) Call spot-on"));
        }
    }

    if app.config.debug {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("All hands:", Style::default().fg(Color::DarkGray))));
        for p in game.players() {
            let mut row = vec![name_span(app, p.id()), Span::raw(": ")];
            row.extend(dice_spans(p.dice(), unicode, None));
            lines.push(Line::from(row));
        }
    }
    lines
}

fn reveal_lines(app: &AppState) -> Vec<Line<'static>> {
    let Some(res) = app.last_resolution() else {
        return Vec::new();
    };
    let unicode = app.config.unicode_faces();
    let call = match res.challenge {
        Challenge::Bluff => " calls bluff on ",
        Challenge::SpotOn => " calls spot-on on ",
    };
    let mut lines = vec![Line::from(vec![
        name_span(app, res.challenger),
        Span::raw(call),
        name_span(app, res.bettor),
        Span::raw(format!("'s bet of {}", bet_text(res.bet, unicode))),
    ])];
    lines.push(Line::from(""));
    for (id, dice) in &res.revealed {
        let mut row = vec![name_span(app, *id), Span::raw(": ")];
        row.extend(dice_spans(dice, unicode, Some(res.bet.face())));
        lines.push(Line::from(row));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "There are {} x {} on the table.",
        res.matching(),
        die_label(res.bet.face(), unicode)
    )));

    let challenger = name_span(app, res.challenger);
    let verdict = match res.verdict {
        Verdict::ChallengerCorrect => {
            vec![challenger, Span::raw(" was right, the bet was a bluff!")]
        }
        Verdict::ChallengerIncorrect => {
            vec![Span::raw("The bet held. "), challenger, Span::raw(" was wrong.")]
        }
        Verdict::Exact => vec![Span::raw("Spot on! "), challenger, Span::raw(" called it exactly.")],
        Verdict::NotExact => {
            vec![Span::raw("Not spot-on. "), challenger, Span::raw(" was wrong.")]
        }
    };
    let verdict_style = if res.challenger_correct() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Red)
    };
    lines.push(Line::from(verdict).style(verdict_style));

    for &id in &res.losers {
        lines.push(Line::from(vec![name_span(app, id), Span::raw(" loses a die.")]));
    }
    for p in app.last_out() {
        lines.push(Line::from(vec![
            name_span(app, p.id()),
            Span::styled(" has no dice left and is out!", Style::default().fg(Color::Red)),
        ]));
    }
    if app.config.show_odds {
        let what = match res.challenge {
            Challenge::Bluff => "true",
            Challenge::SpotOn => "spot-on",
        };
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("The odds of that bet being {what} were {:.2}%.", res.odds * 100.0),
            Style::default().add_modifier(Modifier::DIM),
        )));
    }
    lines
}

fn game_over_lines(app: &AppState, game: &Game) -> Vec<Line<'static>> {
    let Some(winner) = game.winner() else {
        return Vec::new();
    };
    vec![
        Line::from(""),
        Line::from(vec![
            name_span(app, winner.id()),
            Span::raw(format!(" has won the game in {} turns!", game.turn())),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: new match • Q: quit",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ]
}

fn draw_players(f: &mut Frame, area: Rect, app: &AppState, game: &Game) {
    let current = game.current_player_id();
    let mut lines: Vec<Line> = Vec::with_capacity(game.players().len() * 2);
    // The current player sits at the back of the rotation; list from them onward.
    let players = game.players();
    let order = players.iter().rev().take(1).chain(players.iter().take(players.len().saturating_sub(1)));
    for p in order {
        let marker = if Some(p.id()) == current { "▶ " } else { "  " };
        let count = p.dice().len();
        let plural = if count == 1 { "die" } else { "dice" };
        lines.push(Line::from(vec![
            Span::raw(marker),
            name_span(app, p.id()),
            Span::styled(format!("  {count} {plural}"), Style::default().add_modifier(Modifier::DIM)),
        ]));
    }
    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().title("Players").borders(Borders::ALL));
    f.render_widget(para, area);
}

fn draw_history(f: &mut Frame, app: &AppState, game: &Game) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("History").borders(Borders::ALL);
    let unicode = app.config.unicode_faces();
    let mut lines: Vec<Line> = Vec::new();
    let entries = game.history_recent_offset(AppState::HISTORY_PAGE_SIZE, app.history_offset());
    if entries.is_empty() {
        lines.push(Line::from("No history yet."));
    } else {
        for entry in entries {
            let bet = entry.bet.map(|b| format!(" {}", bet_text(b, unicode))).unwrap_or_default();
            lines.push(Line::from(vec![
                Span::raw(format!("T{:<4}", entry.turn)),
                name_span(app, entry.player),
                Span::raw(format!(" {}{bet}", entry.verb.label())),
            ]));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down scroll • Close: H or Esc",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Rules:", bold)),
        Line::from("- Bets claim at least N dice of a face across every hand."),
        Line::from("- A raise needs more dice, or the same dice and a higher face."),
        Line::from("- Bluff: if the bet held you lose a die, otherwise the bettor does."),
        Line::from("- Spot-on: if exact everyone else loses a die, otherwise you do."),
        Line::from(""),
        Line::from(Span::styled("Turn:", bold)),
        Line::from("- 1 / B: raise (or open) the bet"),
        Line::from("- 2 / L: call bluff"),
        Line::from("- 3 / S: call spot-on"),
        Line::from("- H: history"),
        Line::from(""),
        Line::from(Span::styled("Bet Entry:", bold)),
        Line::from("- 0-9: edit the focused field"),
        Line::from("- Tab / Left / Right: switch between face and amount"),
        Line::from("- Backspace: delete digit"),
        Line::from("- Enter: submit"),
        Line::from("- Esc: cancel a raise"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn draw_bet_entry(f: &mut Frame, app: &AppState, game: &Game) {
    let area = centered_rect(50, 40, f.area());
    let raising = game.current_bet().is_some();
    let title = if raising { "Raise" } else { "Opening Bet" };
    let focused = app.bet_entry_field();
    let field = |label: &str, value: &str, which: BetField, range: String| -> Line<'static> {
        let style = if focused == Some(which) {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::styled(format!("{label}: [{value:>3}]"), style),
            Span::styled(format!("  ({range})"), Style::default().add_modifier(Modifier::DIM)),
        ])
    };
    let mut lines = vec![
        field("Face", app.bet_entry_face().unwrap_or(""), BetField::Face, format!("1-{}", game.dice_size())),
        field(
            "Amount",
            app.bet_entry_amount().unwrap_or(""),
            BetField::Amount,
            format!("1-{}", game.dice_in_play()),
        ),
        Line::from(""),
    ];
    if let Some(min) = game.min_raise() {
        lines.push(Line::from(format!("Lowest raise: {}", bet_text(min, app.config.unicode_faces()))));
    }
    let cancel = if raising { ", Esc cancel" } else { "" };
    lines.push(Line::from(format!("Tab switch field, Enter submit{cancel}")));

    let block = Block::default().title(title).borders(Borders::ALL);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner(area));
    let para = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, chunks[0]);
    let error = app.bet_entry_error().unwrap_or("").to_string();
    let error_line = Line::from(Span::styled(error, Style::default().fg(Color::Red)));
    let error_para = Paragraph::new(error_line).alignment(Alignment::Center);
    f.render_widget(error_para, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unicode_glyphs_only_for_six_faces() {
        assert_eq!(die_label(1, true), "⚀");
        assert_eq!(die_label(6, true), "⚅");
        assert_eq!(die_label(7, true), "[7]");
        assert_eq!(die_label(3, false), "[3]");
    }

    #[test]
    fn bet_text_formats_amount_and_face() {
        assert_eq!(bet_text(Bet::new(3, 4), false), "3 x [4]");
    }
}
