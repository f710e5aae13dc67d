#![warn(clippy::all, clippy::pedantic)]

use std::time::Duration;

// Game board dimensions
pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

// Spawn anchor, top center of the board
pub const SPAWN_X: i32 = (BOARD_WIDTH / 2) as i32 - 2;
pub const SPAWN_Y: i32 = 0;

// Line clear scoring, indexed by the number of rows removed at once
pub const LINE_CLEAR_POINTS: [u32; 5] = [0, 100, 300, 500, 800];

// Level progression
pub const LINES_PER_LEVEL: u32 = 10;
pub const STARTING_LEVEL: u32 = 1;

// Gravity curve: 700ms at level 1, 50ms faster per level, never below 120ms
pub const BASE_DROP_INTERVAL: Duration = Duration::from_millis(700);
pub const DROP_INTERVAL_STEP: Duration = Duration::from_millis(50);
pub const MIN_DROP_INTERVAL: Duration = Duration::from_millis(120);

// Soft drop runs gravity at 1/5 of the normal interval
pub const SOFT_DROP_DIVISOR: u32 = 5;

// Second Enter within this window after hiding means panic exit
pub const DOUBLE_WINDOW: Duration = Duration::from_millis(400);

// Frame limiter default (~33 FPS)
pub const DEFAULT_FRAME_DELAY_MS: u64 = 30;
