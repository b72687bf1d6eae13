use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

pub(super) fn draw_setup(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let area = centered_rect(80, 80, size);
    let block = Block::default().title("liars-dice").borders(Borders::ALL);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    let inner_all = inner(area);

    // Left-aligned source, centered as a block
    let logo = r#"
 _     _              _       ____  _
| |   (_) __ _ _ __  ( )___  |  _ \(_) ___ ___
| |   | |/ _` | '__| |// __| | | | | |/ __/ _ \
| |___| | (_| | |      \__ \ | |_| | | (_|  __/
|_____|_|\__,_|_|      |___/ |____/|_|\___\___|
"#;

    let logo_lines: Vec<Line> = logo
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Cyan))))
        .collect();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(logo_lines.len() as u16 + 1), Constraint::Min(3)])
        .split(inner_all);

    let logo_para =
        Paragraph::new(logo_lines).wrap(Wrap { trim: false }).alignment(Alignment::Center);
    f.render_widget(logo_para, rows[0]);

    let config_items = app.menu_items_display();
    let hints = [
        String::from("Type names separated by spaces (at least two players)"),
        String::from("[Enter] Start  [Esc] Quit  [↑/↓] Move  [←/→ or +/-] Adjust"),
    ];
    let mut cfg_lines: Vec<Line> = Vec::new();
    cfg_lines.push(Line::from(Span::styled(
        "New match:",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for (i, it) in config_items.iter().enumerate() {
        let style = if i == app.menu_index {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        cfg_lines.push(Line::from(Span::styled(it.clone(), style)));
    }
    cfg_lines.push(Line::from(""));
    if let Some(err) = app.setup_error() {
        cfg_lines.push(Line::from(Span::styled(err.to_string(), Style::default().fg(Color::Red))));
    }
    for hint in hints {
        cfg_lines
            .push(Line::from(Span::styled(hint, Style::default().add_modifier(Modifier::DIM))));
    }
    let cfg_para = Paragraph::new(cfg_lines).wrap(Wrap { trim: true }).alignment(Alignment::Center);
    f.render_widget(cfg_para, rows[1]);
}
