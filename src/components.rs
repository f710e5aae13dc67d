#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Allow truncation when casting from usize to i32 since board dimensions are always small enough to fit in i32
    clippy::cast_possible_truncation,
    // Allow sign loss when going from signed to unsigned types since we validate values are non-negative before casting
    clippy::cast_sign_loss,
    // Allow potential wrapping when casting between types of same size as we validate values are in range
    clippy::cast_possible_wrap
)]

use bevy_ecs::prelude::*;
use std::time::Duration;

use crate::game::{
    BASE_DROP_INTERVAL, DROP_INTERVAL_STEP, LINE_CLEAR_POINTS, LINES_PER_LEVEL, MIN_DROP_INTERVAL,
    SOFT_DROP_DIVISOR, STARTING_LEVEL,
};
use crate::shapes::{self, Offsets};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TetrominoType {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl TetrominoType {
    pub const ALL: [TetrominoType; 7] = [
        TetrominoType::I,
        TetrominoType::O,
        TetrominoType::T,
        TetrominoType::L,
        TetrominoType::J,
        TetrominoType::S,
        TetrominoType::Z,
    ];

    #[must_use]
    pub fn random(rng: &mut fastrand::Rng) -> Self {
        Self::ALL[rng.usize(..Self::ALL.len())]
    }

    /// Rotation-0 offsets, used for the next-piece preview.
    #[must_use]
    pub fn get_blocks(self) -> Offsets {
        shapes::rotation_state(self, 0)
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tetromino {
    pub tetromino_type: TetrominoType,
    pub rotation: usize,
}

impl Tetromino {
    #[must_use]
    pub fn new(tetromino_type: TetrominoType) -> Self {
        Self {
            tetromino_type,
            rotation: 0,
        }
    }

    #[must_use]
    pub fn state_count(self) -> usize {
        shapes::state_count(self.tetromino_type)
    }

    #[must_use]
    pub fn get_blocks(self) -> Offsets {
        shapes::rotation_state(self.tetromino_type, self.rotation)
    }

    /// Copy of this piece advanced to its next rotation state.
    #[must_use]
    pub fn rotated(self) -> Self {
        Self {
            rotation: (self.rotation + 1) % self.state_count(),
            ..self
        }
    }

    pub fn rotate(&mut self) {
        *self = self.rotated();
    }

    /// Absolute board cells when anchored at `position`.
    #[must_use]
    pub fn cells_at(self, position: Position) -> [Position; 4] {
        self.get_blocks()
            .map(|(dx, dy)| position.offset(dx, dy))
    }
}

/// Occupancy grid, stored row-major with row 0 at the top.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Vec<bool>>,
}

impl Board {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![false; width]; height],
        }
    }

    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(false);
        }
    }

    fn in_bounds(&self, position: Position) -> bool {
        position.x >= 0
            && position.x < self.width as i32
            && position.y >= 0
            && position.y < self.height as i32
    }

    #[must_use]
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.cells
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(false)
    }

    /// True when every cell is inside the board and currently empty.
    #[must_use]
    pub fn is_valid(&self, cells: &[Position]) -> bool {
        cells.iter().all(|&cell| {
            self.in_bounds(cell) && !self.cells[cell.y as usize][cell.x as usize]
        })
    }

    #[must_use]
    pub fn is_valid_position(&self, position: Position, tetromino: &Tetromino) -> bool {
        self.is_valid(&tetromino.cells_at(position))
    }

    /// Marks `cells` as occupied. Callers check validity first; cells outside
    /// the grid are skipped.
    pub fn merge(&mut self, cells: &[Position]) {
        for &cell in cells {
            if self.in_bounds(cell) {
                self.cells[cell.y as usize][cell.x as usize] = true;
            }
        }
    }

    #[must_use]
    pub fn is_row_full(&self, y: usize) -> bool {
        self.cells
            .get(y)
            .is_some_and(|row| row.iter().all(|&cell| cell))
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&cell| cell).count()
    }

    /// Removes full rows and refills from the top with empty rows, keeping the
    /// surviving rows in order. Returns the number of rows removed.
    pub fn clear_lines(&mut self) -> usize {
        let width = self.width;
        let before = self.cells.len();
        self.cells.retain(|row| row.iter().any(|&cell| !cell));
        let cleared = before - self.cells.len();

        let mut refilled = vec![vec![false; width]; cleared];
        refilled.append(&mut self.cells);
        self.cells = refilled;

        cleared
    }
}

#[derive(Debug, Resource, Clone)]
pub struct GameState {
    pub score: u32,
    pub level: u32,
    pub lines_cleared: u32,
    pub drop_interval: Duration,
    pub soft_drop: bool,
    /// Time of the last gravity drop, measured from the session clock origin.
    pub last_drop: Duration,
    pub next_tetromino: Option<TetrominoType>,
    /// Number of spawn collisions so far; survives resets.
    pub game_over_count: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            score: 0,
            level: STARTING_LEVEL,
            lines_cleared: 0,
            drop_interval: BASE_DROP_INTERVAL,
            soft_drop: false,
            last_drop: Duration::ZERO,
            next_tetromino: None,
            game_over_count: 0,
        }
    }
}

impl GameState {
    /// Back to an empty session. The gravity clock and the game-over count
    /// carry over.
    pub fn reset(&mut self) {
        let last_drop = self.last_drop;
        let game_over_count = self.game_over_count;
        *self = Self::default();
        self.last_drop = last_drop;
        self.game_over_count = game_over_count;
    }

    #[must_use]
    pub fn points_for_lines(lines_cleared: usize) -> u32 {
        LINE_CLEAR_POINTS.get(lines_cleared).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn level_for_lines(lines_cleared: u32) -> u32 {
        STARTING_LEVEL + lines_cleared / LINES_PER_LEVEL
    }

    #[must_use]
    pub fn drop_interval_for_level(level: u32) -> Duration {
        let speedup = DROP_INTERVAL_STEP.saturating_mul(level.saturating_sub(STARTING_LEVEL));
        BASE_DROP_INTERVAL
            .saturating_sub(speedup)
            .max(MIN_DROP_INTERVAL)
    }

    pub fn update_score(&mut self, lines_cleared: usize) {
        self.score = self
            .score
            .saturating_add(Self::points_for_lines(lines_cleared));
        self.lines_cleared = self
            .lines_cleared
            .saturating_add(u32::try_from(lines_cleared).unwrap_or(u32::MAX));
        self.level = Self::level_for_lines(self.lines_cleared);
        self.drop_interval = Self::drop_interval_for_level(self.level);
    }

    #[must_use]
    pub fn effective_drop_interval(&self) -> Duration {
        if self.soft_drop {
            self.drop_interval / SOFT_DROP_DIVISOR
        } else {
            self.drop_interval
        }
    }
}

/// Source of piece kinds. Seed it to make a session reproducible.
#[derive(Resource, Debug, Clone)]
pub struct PieceRng(pub fastrand::Rng);

impl PieceRng {
    #[must_use]
    pub fn new() -> Self {
        Self(fastrand::Rng::new())
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self(fastrand::Rng::with_seed(seed))
    }

    pub fn next_kind(&mut self) -> TetrominoType {
        TetrominoType::random(&mut self.0)
    }
}

impl Default for PieceRng {
    fn default() -> Self {
        Self::new()
    }
}

// Game actions seen during the current poll
#[derive(Resource, Debug, Clone, Default)]
pub struct Input {
    pub left: bool,
    pub right: bool,
    pub rotate: bool,
    pub soft_drop: bool,
    pub hard_drop: bool,
}
