pub mod app;
pub mod components;
pub mod config;
pub mod disguise;
pub mod game;
pub mod input;
pub mod shapes;
pub mod snapshot;
pub mod stealth;
pub mod systems;
pub mod terminal;
pub mod ui;

#[cfg(test)]
mod tests;

use bevy_ecs::prelude::Resource;
use std::time::{Duration, Instant};

/// Monotonic session clock. Everything downstream works with the elapsed
/// `Duration` since the clock was created.
#[derive(Resource, Debug, Clone)]
pub struct Time {
    origin: Instant,
    elapsed: Duration,
    delta: Duration,
}

impl Time {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Duration::ZERO,
            delta: Duration::ZERO,
        }
    }

    /// Samples the clock and returns the new elapsed time.
    pub fn update(&mut self) -> Duration {
        let elapsed = self.origin.elapsed();
        self.delta = elapsed.saturating_sub(self.elapsed);
        self.elapsed = elapsed;
        elapsed
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[must_use]
    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}
