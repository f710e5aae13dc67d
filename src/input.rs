use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
    HardDrop,
    Confirm,
    Quit,
}

/// Fixed key bindings. Release events carry no action.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('a') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') => Some(GameAction::MoveRight),
        KeyCode::Up | KeyCode::Char('w') => Some(GameAction::Rotate),
        KeyCode::Down | KeyCode::Char('s') => Some(GameAction::SoftDrop),
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Enter => Some(GameAction::Confirm),
        KeyCode::Char('q') | KeyCode::Esc => Some(GameAction::Quit),
        _ => None,
    }
}
