//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use strictly_tictactoe::{Board, FallbackPicker, Player, Position, Square};

use super::app::App;

/// Renders the whole screen.
pub fn draw<F: FallbackPicker>(frame: &mut Frame, app: &App<F>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Length(4),  // Strategy
            Constraint::Min(17),    // Board + candidates
            Constraint::Length(3),  // Status
            Constraint::Length(1),  // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Strictly Search - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let strategy = app.strategy();
    let info = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("Chosen Search Technique: {} ({})", strategy, strategy.title()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(strategy.description()),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(info, chunks[1]);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    let cursor = app.session().accepts_human_input().then_some(app.cursor());
    draw_board(frame, main[0], app.session().board(), cursor);
    draw_candidates(frame, main[1], app.session().board(), app.candidates());

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new(
        "1-9/arrows+Enter: move  b/d/u/i/Tab: strategy  s: swap sides  r: reset  q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn mark_style(player: Player) -> Style {
    let color = match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Option<Position>) {
    let board_area = center_rect(area, 41, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, area, board, cursor, row * 3);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(frame: &mut Frame, area: Rect, board: &Board, cursor: Option<Position>, start: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
        ])
        .split(area);

    for (offset, area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        if let Some(pos) = Position::from_index(start + offset) {
            draw_cell(frame, area, board, cursor, pos);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, board: &Board, cursor: Option<Position>, pos: Position) {
    let (symbol, base_style) = match board.get(pos) {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(player) => (player.symbol().to_string(), mark_style(player)),
    };

    let style = if cursor == Some(pos) {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Vertically center within the three-line cell.
    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {} ", symbol), style)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); 3]).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

/// Lays the opponent's candidate boards out three to a row.
fn draw_candidates(frame: &mut Frame, area: Rect, board: &Board, candidates: &[Board]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Opponent's next candidates ({}) ", candidates.len()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if candidates.is_empty() {
        let empty = Paragraph::new("Shown after the opponent moves.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5); 3])
        .split(inner);

    for (row_index, chunk) in candidates.chunks(3).enumerate().take(3) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(11); 3])
            .split(rows[row_index]);
        for (col_index, candidate) in chunk.iter().enumerate() {
            frame.render_widget(mini_board(board, candidate), cols[col_index]);
        }
    }
}

/// A candidate board with the newly filled square highlighted.
fn mini_board<'a>(current: &Board, candidate: &Board) -> Paragraph<'a> {
    let lines: Vec<Line> = (0..3)
        .map(|row| {
            let spans: Vec<Span> = (0..3)
                .filter_map(|col| Position::from_index(row * 3 + col))
                .map(|pos| match candidate.get(pos) {
                    Square::Empty => Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                    Square::Occupied(player) => {
                        let style = if current.get(pos) == Square::Empty {
                            mark_style(player).bg(Color::Yellow)
                        } else {
                            mark_style(player)
                        };
                        Span::styled(format!(" {} ", player.symbol()), style)
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    Paragraph::new(lines).block(Block::default().borders(Borders::ALL))
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
