use bevy_ecs::prelude::*;
use log::{debug, info, trace};
use std::time::Duration;

use crate::components::{Board, GameState, Input, PieceRng, Position, Tetromino};
use crate::game::{BOARD_HEIGHT, BOARD_WIDTH, SPAWN_X, SPAWN_Y};

fn active_tetromino(world: &mut World) -> Option<(Entity, Tetromino, Position)> {
    let mut query = world.query::<(Entity, &Tetromino, &Position)>();
    query
        .iter(world)
        .next()
        .map(|(entity, tetromino, position)| (entity, *tetromino, *position))
}

/// Promotes the queued piece to the active one at the spawn anchor and queues
/// a fresh random piece. A blocked spawn ends the game and starts over.
pub fn spawn_tetromino(world: &mut World) {
    let (kind, next) = {
        let queued = world.resource::<GameState>().next_tetromino;
        let mut rng = world.resource_mut::<PieceRng>();
        let kind = queued.unwrap_or_else(|| rng.next_kind());
        (kind, rng.next_kind())
    };
    world.resource_mut::<GameState>().next_tetromino = Some(next);

    let tetromino = Tetromino::new(kind);
    let position = Position {
        x: SPAWN_X,
        y: SPAWN_Y,
    };

    if !world
        .resource::<Board>()
        .is_valid_position(position, &tetromino)
    {
        game_over(world);
        return;
    }

    debug!("Spawned {kind:?}, next is {next:?}");
    world.spawn((tetromino, position));
}

/// Wipes the board and stats, queues a fresh piece and spawns it.
pub fn game_over(world: &mut World) {
    let active: Vec<Entity> = world
        .query_filtered::<Entity, With<Tetromino>>()
        .iter(world)
        .collect();
    for entity in active {
        world.despawn(entity);
    }

    let next = world.resource_mut::<PieceRng>().next_kind();
    {
        let mut game_state = world.resource_mut::<GameState>();
        game_state.game_over_count += 1;
        info!(
            "Game over #{} with score {} after {} lines",
            game_state.game_over_count, game_state.score, game_state.lines_cleared
        );
        game_state.reset();
        game_state.next_tetromino = Some(next);
    }
    world.resource_mut::<Board>().clear();

    spawn_tetromino(world);
}

/// Shifts the active piece horizontally; blocked moves are ignored.
pub fn move_tetromino(world: &mut World, dx: i32) -> bool {
    let Some((entity, tetromino, position)) = active_tetromino(world) else {
        return false;
    };
    let candidate = position.offset(dx, 0);
    if !world
        .resource::<Board>()
        .is_valid_position(candidate, &tetromino)
    {
        trace!("Move by {dx} rejected at ({}, {})", position.x, position.y);
        return false;
    }
    world.entity_mut(entity).insert(candidate);
    true
}

/// Steps the active piece to its next rotation state in place. No kicks: a
/// rotation that does not fit at the current anchor is ignored.
pub fn rotate_tetromino(world: &mut World) -> bool {
    let Some((entity, tetromino, position)) = active_tetromino(world) else {
        return false;
    };
    let rotated = tetromino.rotated();
    if !world
        .resource::<Board>()
        .is_valid_position(position, &rotated)
    {
        trace!("Rotation of {:?} rejected", tetromino.tetromino_type);
        return false;
    }
    world.entity_mut(entity).insert(rotated);
    true
}

pub fn set_soft_drop(world: &mut World, enabled: bool) {
    world.resource_mut::<GameState>().soft_drop = enabled;
}

/// Drops the active piece as far as it goes and locks it there.
pub fn hard_drop(world: &mut World) {
    let Some((entity, tetromino, mut position)) = active_tetromino(world) else {
        return;
    };

    {
        let board = world.resource::<Board>();
        while board.is_valid_position(position.offset(0, 1), &tetromino) {
            position.y += 1;
        }
    }

    world.entity_mut(entity).insert(position);
    lock_tetromino(world);
}

/// Merges the active piece into the board, clears full rows, scores them and
/// spawns the next piece.
pub fn lock_tetromino(world: &mut World) {
    let Some((entity, tetromino, position)) = active_tetromino(world) else {
        return;
    };

    let lines_cleared = {
        let mut board = world.resource_mut::<Board>();
        board.merge(&tetromino.cells_at(position));
        board.clear_lines()
    };

    {
        let mut game_state = world.resource_mut::<GameState>();
        game_state.update_score(lines_cleared);
        if lines_cleared > 0 {
            info!(
                "Cleared {lines_cleared} lines, score {} level {}",
                game_state.score, game_state.level
            );
        }
    }

    debug!(
        "Locked {:?} at ({}, {})",
        tetromino.tetromino_type, position.x, position.y
    );
    world.despawn(entity);
    spawn_tetromino(world);
}

/// Applies the game actions recorded for this poll. Soft drop is level
/// triggered: it stays on only while the down key keeps showing up.
pub fn input_system(world: &mut World) {
    let input = std::mem::take(&mut *world.resource_mut::<Input>());

    if input.left {
        move_tetromino(world, -1);
    }
    if input.right {
        move_tetromino(world, 1);
    }
    if input.rotate {
        rotate_tetromino(world);
    }
    if input.hard_drop {
        hard_drop(world);
    }

    set_soft_drop(world, input.soft_drop);
    world.resource_mut::<Input>().soft_drop = input.soft_drop;
}

/// Gravity step. Once the effective interval has passed since the last drop,
/// the piece falls one row or locks if it cannot. The drop clock is then set
/// to `now`, dropping any overshoot.
pub fn gravity_system(world: &mut World, now: Duration) {
    let (due, interval) = {
        let game_state = world.resource::<GameState>();
        let interval = game_state.effective_drop_interval();
        (
            now.saturating_sub(game_state.last_drop) >= interval,
            interval,
        )
    };
    if !due {
        return;
    }

    trace!("Gravity step at {now:?} (interval {interval:?})");
    if let Some((entity, tetromino, position)) = active_tetromino(world) {
        let below = position.offset(0, 1);
        if world
            .resource::<Board>()
            .is_valid_position(below, &tetromino)
        {
            world.entity_mut(entity).insert(below);
        } else {
            lock_tetromino(world);
        }
    } else {
        spawn_tetromino(world);
    }

    world.resource_mut::<GameState>().last_drop = now;
}

/// Builds a world holding a fresh session: empty board, zeroed stats and the
/// first piece already spawned.
#[must_use]
pub fn new_game_world(rng: PieceRng) -> World {
    let mut world = World::new();
    world.insert_resource(Board::new(BOARD_WIDTH, BOARD_HEIGHT));
    world.insert_resource(GameState::default());
    world.insert_resource(Input::default());
    world.insert_resource(rng);
    spawn_tetromino(&mut world);
    world
}
