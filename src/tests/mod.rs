#![warn(clippy::all, clippy::pedantic)]

pub mod stealth_tests;
pub mod ui_tests;

// Import test utilities
#[cfg(test)]
pub mod test_utils {
    use crate::components::{Board, GameState, Input, PieceRng, Position, Tetromino, TetrominoType};
    use crate::game::{BOARD_HEIGHT, BOARD_WIDTH};
    use bevy_ecs::prelude::*;

    // Helper function to create a test world with no active piece
    #[must_use]
    pub fn create_test_world() -> World {
        let mut world = World::new();
        world.insert_resource(Board::new(BOARD_WIDTH, BOARD_HEIGHT));
        world.insert_resource(GameState::default());
        world.insert_resource(Input::default());
        world.insert_resource(PieceRng::with_seed(42));
        world
    }

    // Replace whatever piece is active with `kind` anchored at `position`
    pub fn place_active(world: &mut World, kind: TetrominoType, position: Position) -> Entity {
        let existing: Vec<Entity> = world
            .query_filtered::<Entity, With<Tetromino>>()
            .iter(world)
            .collect();
        for entity in existing {
            world.despawn(entity);
        }
        world.spawn((Tetromino::new(kind), position)).id()
    }

    // Current active piece, panics when there is none
    #[must_use]
    pub fn active(world: &mut World) -> (Tetromino, Position) {
        let mut query = world.query::<(&Tetromino, &Position)>();
        let (tetromino, position) = query.iter(world).next().expect("no active tetromino");
        (*tetromino, *position)
    }

    #[must_use]
    pub fn active_count(world: &mut World) -> usize {
        world.query::<&Tetromino>().iter(world).count()
    }

    // Fill row `y` except for the listed columns
    pub fn fill_row_except(board: &mut Board, y: usize, gaps: &[usize]) {
        for x in 0..board.width {
            board.cells[y][x] = !gaps.contains(&x);
        }
    }
}
