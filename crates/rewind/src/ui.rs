//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use rewind_tictactoe::{BOARD_WIDTH, BoardView, CellView, Mark, MoveKind, toggle_label};

use crate::app::{App, Focus};

const CELL_WIDTH: u16 = 7;

/// Renders the whole screen.
///
/// `view` must come from [`App::board_view`] for the same frame.
pub fn draw(frame: &mut Frame, app: &App, view: &BoardView) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Board + moves
            Constraint::Length(3), // Sort toggle
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    draw_game(frame, panes[0], app, view);
    draw_moves(frame, panes[1], app);
    draw_toggle(frame, chunks[2], app);

    let help = Paragraph::new(
        "Tab: switch pane | arrows/1-9: move | Enter: select | s: sort | r: restart | q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused { Color::Yellow } else { Color::DarkGray };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(title)
}

fn draw_game(frame: &mut Frame, area: Rect, app: &App, view: &BoardView) {
    let focused = *app.focus() == Focus::Board;
    let block = pane_block("Board", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(5)])
        .split(inner);

    let status = Paragraph::new(view.status().to_string())
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(status, chunks[0]);

    let cursor = focused.then_some(*app.cursor());
    let lines: Vec<Line> = view
        .rows()
        .iter()
        .enumerate()
        .flat_map(|(row, cells)| {
            let mut lines = Vec::with_capacity(2);
            if row > 0 {
                lines.push(separator());
            }
            lines.push(board_row(cells, cursor));
            lines
        })
        .collect();

    let board_height = lines.len() as u16;
    let board = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board, center_rect(chunks[1], row_width(), board_height));
}

fn row_width() -> u16 {
    let width = BOARD_WIDTH as u16;
    CELL_WIDTH * width + (width - 1)
}

fn separator() -> Line<'static> {
    Line::from(Span::styled(
        "─".repeat(row_width() as usize),
        Style::default().fg(Color::DarkGray),
    ))
}

fn board_row(cells: &[CellView], cursor: Option<usize>) -> Line<'static> {
    let mut spans = Vec::with_capacity(cells.len() * 2);
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
        }
        spans.push(cell_span(cell, cursor == Some(*cell.index())));
    }
    Line::from(spans)
}

fn cell_span(cell: &CellView, under_cursor: bool) -> Span<'static> {
    let (symbol, mut style) = match cell.cell().mark() {
        None => (
            format!("{:^w$}", cell.index() + 1, w = CELL_WIDTH as usize),
            Style::default().fg(Color::DarkGray),
        ),
        Some(Mark::X) => (
            format!("{:^w$}", "X", w = CELL_WIDTH as usize),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Mark::O) => (
            format!("{:^w$}", "O", w = CELL_WIDTH as usize),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if *cell.highlighted() {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if under_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    Span::styled(symbol, style)
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App) {
    let focused = *app.focus() == Focus::MoveList;

    let items: Vec<ListItem> = app
        .entries()
        .iter()
        .enumerate()
        .map(|(position, entry)| {
            let style = match entry.kind() {
                MoveKind::Current => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::ITALIC),
                MoveKind::Jump => Style::default().fg(Color::White),
            };
            let text = match entry.kind() {
                MoveKind::Current => entry.label(),
                MoveKind::Jump => format!("[{}]", entry.label()),
            };
            ListItem::new(format!("{}. {}", position + 1, text)).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(pane_block("Moves", focused))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(*app.selected()));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_toggle(frame: &mut Frame, area: Rect, app: &App) {
    let checked = app.sort_order().is_ascending();
    let knob = if checked { "[x]" } else { "[ ]" };
    let line = Line::from(vec![
        Span::styled(
            knob,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::raw(toggle_label(*app.sort_order())),
    ]);

    let toggle = Paragraph::new(line).block(Block::default().borders(Borders::ALL).title("Sort"));
    frame.render_widget(toggle, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
