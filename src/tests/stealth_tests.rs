#[cfg(test)]
mod tests {
    use crate::stealth::{StealthAction, StealthEvent, StealthMachine, StealthState, transition};
    use std::time::Duration;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_starts_visible() {
        let machine = StealthMachine::new();
        assert_eq!(machine.state(), StealthState::Visible);
        assert!(!machine.is_hidden());
    }

    #[test]
    fn test_double_trigger_panics() {
        let mut machine = StealthMachine::new();

        assert_eq!(machine.on_trigger(ms(0)), Some(StealthAction::Hide));
        assert!(machine.is_hidden());
        assert!(machine.state().is_awaiting_second_trigger());
        assert_eq!(machine.state().last_trigger(), Some(ms(0)));

        assert_eq!(machine.on_trigger(ms(100)), Some(StealthAction::Panic));
        assert!(!machine.is_hidden());
    }

    #[test]
    fn test_late_second_trigger_restores() {
        let mut machine = StealthMachine::new();

        assert_eq!(machine.on_trigger(ms(0)), Some(StealthAction::Hide));
        assert_eq!(machine.on_trigger(ms(600)), Some(StealthAction::Restore));
        assert_eq!(machine.state(), StealthState::Visible);
    }

    #[test]
    fn test_window_edge_is_inclusive() {
        let mut machine = StealthMachine::new();
        machine.on_trigger(ms(1000));
        assert_eq!(machine.on_trigger(ms(1400)), Some(StealthAction::Panic));

        let mut machine = StealthMachine::new();
        machine.on_trigger(ms(1000));
        assert_eq!(machine.on_trigger(ms(1401)), Some(StealthAction::Restore));
    }

    #[test]
    fn test_tick_closes_expired_window() {
        let mut machine = StealthMachine::new();
        machine.on_trigger(ms(0));

        // Still inside the window
        machine.tick(ms(400));
        assert!(machine.state().is_awaiting_second_trigger());

        machine.tick(ms(401));
        assert_eq!(machine.state(), StealthState::HiddenWindowClosed);
        assert!(machine.is_hidden());
        assert_eq!(machine.state().last_trigger(), None);

        assert_eq!(machine.on_trigger(ms(5000)), Some(StealthAction::Restore));
        assert!(!machine.is_hidden());
    }

    #[test]
    fn test_hide_again_after_restore() {
        let mut machine = StealthMachine::new();
        machine.on_trigger(ms(0));
        machine.tick(ms(500));
        machine.on_trigger(ms(2000));

        assert_eq!(machine.on_trigger(ms(2100)), Some(StealthAction::Hide));
        assert_eq!(machine.state().last_trigger(), Some(ms(2100)));
    }

    #[test]
    fn test_transition_tick_never_emits() {
        let states = [
            StealthState::Visible,
            StealthState::HiddenWindowOpen { since: ms(0) },
            StealthState::HiddenWindowClosed,
        ];
        for state in states {
            for now in [ms(0), ms(399), ms(401), ms(10_000)] {
                let (_, action) = transition(state, StealthEvent::Tick, now);
                assert_eq!(action, None);
            }
        }

        assert_eq!(
            transition(StealthState::Visible, StealthEvent::Tick, ms(900)),
            (StealthState::Visible, None)
        );
        assert_eq!(
            transition(StealthState::HiddenWindowClosed, StealthEvent::Tick, ms(900)),
            (StealthState::HiddenWindowClosed, None)
        );
    }

    #[test]
    fn test_transition_is_pure() {
        let open = StealthState::HiddenWindowOpen { since: ms(50) };
        let first = transition(open, StealthEvent::Trigger, ms(200));
        let second = transition(open, StealthEvent::Trigger, ms(200));
        assert_eq!(first, second);
        assert_eq!(first, (StealthState::Visible, Some(StealthAction::Panic)));
    }
}
