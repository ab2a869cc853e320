//! Key mapping from terminal events to session input.

use crate::types::{InputEvent, Key};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to an abstract key.
pub fn map_key(key: KeyEvent) -> Option<Key> {
    match key.code {
        // Directions
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Key::Up)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Key::Down)
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Key::Left)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Key::Right)
        }

        // Menu
        KeyCode::Enter | KeyCode::Char(' ') => Some(Key::Confirm),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('p') | KeyCode::Char('P') => Some(Key::Escape),

        _ => None,
    }
}

/// Check if key should close the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Full mapping: quit keys win over everything else.
pub fn map_event(key: KeyEvent) -> Option<InputEvent> {
    if should_quit(key) {
        return Some(InputEvent::Close);
    }
    map_key(key).map(InputEvent::Key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_direction_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Up)), Some(Key::Up));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Down)), Some(Key::Down));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Left)), Some(Key::Left));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Right)), Some(Key::Right));

        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('W'))), Some(Key::Up));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('s'))), Some(Key::Down));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('h'))), Some(Key::Left));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('L'))), Some(Key::Right));
    }

    #[test]
    fn test_menu_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Enter)), Some(Key::Confirm));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char(' '))), Some(Key::Confirm));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Esc)), Some(Key::Escape));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('p'))), Some(Key::Escape));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert_eq!(
            map_event(KeyEvent::from(KeyCode::Char('Q'))),
            Some(InputEvent::Close)
        );
        assert_eq!(
            map_event(KeyEvent::from(KeyCode::Enter)),
            Some(InputEvent::Key(Key::Confirm))
        );
    }
}
