#![allow(clippy::cast_possible_truncation)]

use crate::components::TetrominoType;
use crate::disguise::{HEADER, SUSPENDED_LINES};
use crate::game::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::snapshot::{GameSnapshot, View};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

const CELL: &str = "[]";
const EMPTY: &str = "  ";

fn accent() -> Style {
    Style::default().fg(Color::Green)
}

pub fn render(f: &mut Frame, view: &View) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Body
        ])
        .split(f.area());

    let header = Paragraph::new(Line::styled(HEADER, accent()));
    f.render_widget(header, layout[0]);

    match view {
        View::Game(snapshot) => render_game(f, snapshot, layout[1]),
        View::Disguise => render_disguise(f, layout[1]),
    }
}

fn render_disguise(f: &mut Frame, area: Rect) {
    // One blank line between entries, like a sparse log tail
    let mut lines = Vec::with_capacity(SUSPENDED_LINES.len() * 2);
    for entry in SUSPENDED_LINES {
        lines.push(Line::raw(entry));
        lines.push(Line::raw(""));
    }
    f.render_widget(Paragraph::new(lines), area);
}

fn render_game(f: &mut Frame, snapshot: &GameSnapshot, area: Rect) {
    let board_width = BOARD_WIDTH as u16 * 2 + 2; // +2 for borders
    let board_height = BOARD_HEIGHT as u16 + 2;

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(2), // Left margin
            Constraint::Length(board_width),
            Constraint::Length(4),
            Constraint::Min(0), // Stats
        ])
        .split(area);

    let board_area = Rect {
        height: board_height.min(layout[1].height),
        ..layout[1]
    };
    render_board(f, snapshot, board_area);
    render_stats(f, snapshot, layout[3]);
}

fn render_board(f: &mut Frame, snapshot: &GameSnapshot, area: Rect) {
    let rows: Vec<Line> = (0..BOARD_HEIGHT)
        .map(|y| {
            let spans: Vec<Span> = (0..BOARD_WIDTH)
                .map(|x| {
                    if snapshot.is_filled(x, y) {
                        Span::styled(CELL, accent())
                    } else {
                        Span::raw(EMPTY)
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let board = Paragraph::new(rows).block(Block::default().borders(Borders::ALL));
    f.render_widget(board, area);
}

fn render_stats(f: &mut Frame, snapshot: &GameSnapshot, area: Rect) {
    let mut lines = vec![
        Line::raw(format!("Score: {}", snapshot.score)),
        Line::raw(format!("Lines: {}", snapshot.lines)),
        Line::raw(format!("Level: {}", snapshot.level)),
        Line::raw(""),
        Line::raw("Next:"),
        Line::raw(""),
    ];
    if let Some(kind) = snapshot.next {
        lines.extend(preview_lines(kind));
    }
    f.render_widget(Paragraph::new(lines), area);
}

/// Rotation-0 shape of `kind`, trimmed to the rows it occupies.
#[must_use]
pub fn preview_lines(kind: TetrominoType) -> Vec<Line<'static>> {
    let blocks = kind.get_blocks();
    let (min_y, max_y) = blocks
        .iter()
        .fold((i32::MAX, i32::MIN), |(lo, hi), &(_, y)| (lo.min(y), hi.max(y)));

    (min_y..=max_y)
        .map(|y| {
            let spans: Vec<Span> = (0..4)
                .map(|x| {
                    if blocks.contains(&(x, y)) {
                        Span::styled(CELL, accent())
                    } else {
                        Span::raw(EMPTY)
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}
