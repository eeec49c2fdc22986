//! TUI rendering with ratatui
//!
//! Board, legend and message panels for the interactive game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Code, Color as PegColor};
use crate::output::formatters::feedback_pegs;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Legend and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Terminal color used to draw a peg
fn peg_style(color: PegColor) -> Style {
    let fg = match color {
        PegColor::Pink => Color::Rgb(255, 105, 180),
        PegColor::Orange => Color::Rgb(255, 165, 0),
        PegColor::Yellow => Color::Yellow,
        PegColor::Green => Color::Green,
        PegColor::Blue => Color::Blue,
        PegColor::Purple => Color::Magenta,
        PegColor::White => Color::White,
        PegColor::Black => Color::DarkGray,
    };
    Style::new().fg(fg)
}

fn code_spans(code: &Code) -> Vec<Span<'static>> {
    code.colors()
        .iter()
        .map(|&c| Span::styled(format!("{:<7}", c.name()), peg_style(c)))
        .collect()
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("🎯 MASTERMIND - {}", app.settings))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let pegs = app.settings.peg_count();

    let mut items: Vec<ListItem> = app
        .session
        .history()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let mut spans = vec![Span::styled(
                format!("{:>2}. ", i + 1),
                Style::default().fg(Color::DarkGray),
            )];
            spans.extend(code_spans(&entry.guess));
            spans.push(Span::styled(
                feedback_pegs(entry.feedback, pegs),
                Style::default().add_modifier(Modifier::BOLD),
            ));
            ListItem::new(Line::from(spans))
        })
        .collect();

    if app.is_over() {
        let mut spans = vec![Span::styled(
            "Code: ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )];
        spans.extend(code_spans(app.session.code()));
        items.push(ListItem::new(Line::from(spans)));
    }

    let board = List::new(items).block(
        Block::default()
            .title(format!(" Board ({} guesses) ", app.session.attempts()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Legend
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    render_legend(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_legend(f: &mut Frame, app: &App, area: Rect) {
    let size = app.settings.palette_size().min(app.palette.len());

    let mut lines: Vec<Line> = app.palette.colors()[..size]
        .iter()
        .map(|&c| {
            Line::from(vec![
                Span::styled(format!("  {:<7}", c.name()), peg_style(c)),
                Span::styled(
                    format!("({})", c.abbreviation()),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();
    lines.push(Line::from("  ● right place  ○ wrong place"));

    let legend = Paragraph::new(lines).block(
        Block::default()
            .title(" Colors ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(legend, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Enter Guess | ESC to give up ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let average = app
        .stats
        .average_attempts()
        .map_or_else(|| "-".to_string(), |avg| format!("{avg:.1}"));

    let status = Paragraph::new(format!(
        "Games: {} | Won: {} | Avg attempts: {average} | Ctrl-C: Quit",
        app.stats.total_games, app.stats.games_won
    ))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));

    f.render_widget(status, area);
}
