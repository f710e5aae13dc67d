//! Boss-key handling.
//!
//! The first Enter hides the game behind the disguise screen and opens a short
//! window. A second Enter inside that window is a panic exit; a later Enter
//! simply brings the game back. All times are offsets from the session clock
//! origin, so the machine never reads a clock itself.

use log::debug;
use std::time::Duration;

use crate::game::DOUBLE_WINDOW;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StealthState {
    #[default]
    Visible,
    /// Hidden, and a second trigger before `since + DOUBLE_WINDOW` panics.
    HiddenWindowOpen { since: Duration },
    /// Hidden, waiting for a single trigger to restore.
    HiddenWindowClosed,
}

impl StealthState {
    #[must_use]
    pub fn is_hidden(self) -> bool {
        !matches!(self, StealthState::Visible)
    }

    #[must_use]
    pub fn is_awaiting_second_trigger(self) -> bool {
        matches!(self, StealthState::HiddenWindowOpen { .. })
    }

    #[must_use]
    pub fn last_trigger(self) -> Option<Duration> {
        match self {
            StealthState::HiddenWindowOpen { since } => Some(since),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StealthEvent {
    Trigger,
    Tick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StealthAction {
    Hide,
    Panic,
    Restore,
}

fn window_open(since: Duration, now: Duration) -> bool {
    now.saturating_sub(since) <= DOUBLE_WINDOW
}

#[must_use]
pub fn transition(
    state: StealthState,
    event: StealthEvent,
    now: Duration,
) -> (StealthState, Option<StealthAction>) {
    match (state, event) {
        (StealthState::Visible, StealthEvent::Trigger) => (
            StealthState::HiddenWindowOpen { since: now },
            Some(StealthAction::Hide),
        ),
        (StealthState::HiddenWindowOpen { since }, StealthEvent::Trigger)
            if window_open(since, now) =>
        {
            (StealthState::Visible, Some(StealthAction::Panic))
        }
        (
            StealthState::HiddenWindowOpen { .. } | StealthState::HiddenWindowClosed,
            StealthEvent::Trigger,
        ) => (StealthState::Visible, Some(StealthAction::Restore)),
        (StealthState::HiddenWindowOpen { since }, StealthEvent::Tick)
            if !window_open(since, now) =>
        {
            (StealthState::HiddenWindowClosed, None)
        }
        (state, StealthEvent::Tick) => (state, None),
    }
}

#[derive(Debug, Clone, Default)]
pub struct StealthMachine {
    state: StealthState,
}

impl StealthMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> StealthState {
        self.state
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.state.is_hidden()
    }

    pub fn on_trigger(&mut self, now: Duration) -> Option<StealthAction> {
        let (state, action) = transition(self.state, StealthEvent::Trigger, now);
        debug!("Stealth trigger at {now:?}: {:?} -> {state:?} ({action:?})", self.state);
        self.state = state;
        action
    }

    /// Closes an expired double-trigger window. Never emits an action.
    pub fn tick(&mut self, now: Duration) {
        let (state, _) = transition(self.state, StealthEvent::Tick, now);
        self.state = state;
    }
}
