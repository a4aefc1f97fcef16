//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unbeatable_tictactoe::{Cell, Move};

use super::app::App;

/// Renders the board, status line and key help.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(7),    // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Unbeatable Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let session = app.session();
    let board = Paragraph::new(board_lines(app))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" You: {}  Computer: {} ", session.human(), session.computer())),
        );
    frame.render_widget(board, chunks[1]);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("arrows + Enter or 1-9: move   r: restart   q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn board_lines(app: &App) -> Vec<Line<'static>> {
    let winning = app.winning_cells();
    let separator = Style::default().fg(Color::DarkGray);

    let mut lines = vec![Line::from("")];
    for row in Move::ALL.chunks(3) {
        let mut spans = Vec::with_capacity(5);
        for (col, mv) in row.iter().enumerate() {
            spans.push(cell_span(app, *mv, &winning));
            if col < 2 {
                spans.push(Span::styled("│", separator));
            }
        }
        lines.push(Line::from(spans));
        if row[0].row() < 2 {
            lines.push(Line::styled("───┼───┼───", separator));
        }
    }
    lines
}

fn cell_span(app: &App, mv: Move, winning: &[Move]) -> Span<'static> {
    let (symbol, base_style) = match app.session().board().get(mv) {
        Cell::Empty => (format!(" {} ", mv.index() + 1), Style::default().fg(Color::DarkGray)),
        Cell::X => (
            " X ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::O => (
            " O ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if winning.contains(&mv) {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if mv == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    Span::styled(symbol, style)
}
