use bevy_ecs::prelude::*;

use crate::components::{Board, GameState, Position, Tetromino, TetrominoType};

/// Read-only copy of everything the renderer draws for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Vec<Vec<bool>>,
    pub active: Option<[Position; 4]>,
    pub next: Option<TetrominoType>,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
}

impl GameSnapshot {
    #[must_use]
    pub fn capture(world: &mut World) -> Self {
        let active = world
            .query::<(&Tetromino, &Position)>()
            .iter(world)
            .next()
            .map(|(tetromino, position)| tetromino.cells_at(*position));

        let board = world.resource::<Board>().cells.clone();
        let game_state = world.resource::<GameState>();

        Self {
            board,
            active,
            next: game_state.next_tetromino,
            score: game_state.score,
            lines: game_state.lines_cleared,
            level: game_state.level,
        }
    }

    /// Locked cell or part of the falling piece.
    #[must_use]
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        let locked = self
            .board
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(false);
        locked
            || self.active.is_some_and(|cells| {
                cells.iter().any(|cell| {
                    usize::try_from(cell.x) == Ok(x) && usize::try_from(cell.y) == Ok(y)
                })
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Game(GameSnapshot),
    Disguise,
}
