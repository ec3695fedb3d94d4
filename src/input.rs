//! Key mapping from terminal events to game actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::GameAction;

/// Map a key to a game action. Unbound keys return `None`.
pub fn map_key(code: KeyCode) -> Option<GameAction> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::SoftDrop),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(GameAction::Rotate),
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_wasd_map_to_the_same_actions() {
        assert_eq!(map_key(KeyCode::Left), Some(GameAction::MoveLeft));
        assert_eq!(map_key(KeyCode::Char('a')), Some(GameAction::MoveLeft));
        assert_eq!(map_key(KeyCode::Right), Some(GameAction::MoveRight));
        assert_eq!(map_key(KeyCode::Char('D')), Some(GameAction::MoveRight));
        assert_eq!(map_key(KeyCode::Down), Some(GameAction::SoftDrop));
        assert_eq!(map_key(KeyCode::Char('s')), Some(GameAction::SoftDrop));
        assert_eq!(map_key(KeyCode::Up), Some(GameAction::Rotate));
        assert_eq!(map_key(KeyCode::Char('w')), Some(GameAction::Rotate));
    }

    #[test]
    fn space_is_hard_drop_and_r_restarts() {
        assert_eq!(map_key(KeyCode::Char(' ')), Some(GameAction::HardDrop));
        assert_eq!(map_key(KeyCode::Char('r')), Some(GameAction::Restart));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        assert_eq!(map_key(KeyCode::Char('x')), None);
        assert_eq!(map_key(KeyCode::Enter), None);
        assert_eq!(map_key(KeyCode::F(1)), None);
    }

    #[test]
    fn quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
