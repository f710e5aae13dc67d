#![warn(clippy::all, clippy::pedantic)]

use bevy_ecs::prelude::*;
use log::{debug, info};
use std::time::Duration;

use crate::Time;
use crate::components::{GameState, Input, PieceRng};
use crate::input::GameAction;
use crate::snapshot::{GameSnapshot, View};
use crate::stealth::{StealthAction, StealthMachine};
use crate::systems::{gravity_system, input_system, new_game_world};

pub type AppResult<T> = anyhow::Result<T>;

pub struct App {
    pub world: World,
    pub stealth: StealthMachine,
    pub should_quit: bool,
    pub panicked: bool,
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(PieceRng::new())
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(PieceRng::with_seed(seed))
    }

    #[must_use]
    pub fn with_rng(rng: PieceRng) -> Self {
        let mut world = new_game_world(rng);
        world.insert_resource(Time::new());

        Self {
            world,
            stealth: StealthMachine::new(),
            should_quit: false,
            panicked: false,
        }
    }

    /// Samples the session clock.
    pub fn update_clock(&mut self) -> Duration {
        self.world.resource_mut::<Time>().update()
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.stealth.is_hidden()
    }

    /// Routes one logical action. Game actions are dropped while the disguise
    /// is up; Enter always reaches the stealth machine.
    pub fn handle_action(&mut self, action: GameAction, now: Duration) -> Option<StealthAction> {
        match action {
            GameAction::Quit => {
                info!("Quit requested");
                self.should_quit = true;
                None
            }
            GameAction::Confirm => {
                let stealth_action = self.stealth.on_trigger(now);
                match stealth_action {
                    Some(StealthAction::Hide) => info!("Suspending trace view"),
                    Some(StealthAction::Restore) => info!("Resuming trace view"),
                    Some(StealthAction::Panic) => {
                        info!("Panic exit requested");
                        self.panicked = true;
                        self.should_quit = true;
                    }
                    None => {}
                }
                stealth_action
            }
            _ if self.is_hidden() => {
                debug!("Ignoring {action:?} while hidden");
                None
            }
            game_action => {
                {
                    let mut input = self.world.resource_mut::<Input>();
                    match game_action {
                        GameAction::MoveLeft => input.left = true,
                        GameAction::MoveRight => input.right = true,
                        GameAction::Rotate => input.rotate = true,
                        GameAction::SoftDrop => input.soft_drop = true,
                        GameAction::HardDrop => input.hard_drop = true,
                        GameAction::Confirm | GameAction::Quit => {}
                    }
                }
                input_system(&mut self.world);
                None
            }
        }
    }

    /// One loop iteration after input was drained: settles soft drop for this
    /// poll, expires the double-trigger window and runs gravity unless hidden.
    pub fn on_tick(&mut self, now: Duration) {
        input_system(&mut self.world);
        *self.world.resource_mut::<Input>() = Input::default();

        self.stealth.tick(now);

        if !self.is_hidden() {
            gravity_system(&mut self.world, now);
        }
    }

    #[must_use]
    pub fn snapshot(&mut self) -> GameSnapshot {
        GameSnapshot::capture(&mut self.world)
    }

    #[must_use]
    pub fn view(&mut self) -> View {
        if self.is_hidden() {
            View::Disguise
        } else {
            View::Game(self.snapshot())
        }
    }

    #[must_use]
    pub fn game_state(&self) -> &GameState {
        self.world.resource::<GameState>()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
