//! Key mapping from terminal events to intents.

use crate::types::Intent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key event to an intent.
///
/// Release events are ignored. Auto-repeat is passed through for movement and
/// soft drop but dropped for rotation, hard drop, hold, pause and reset.
pub fn handle_key_event(key: KeyEvent) -> Option<Intent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    // Ctrl-C quits; never map it to hold.
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    let intent = match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Intent::MoveLeft
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Intent::MoveRight
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Intent::SoftDrop
        }

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('x')
        | KeyCode::Char('X') => Intent::RotateCw,

        // Actions
        KeyCode::Char(' ') => Intent::HardDrop,
        KeyCode::Char('c') | KeyCode::Char('C') => Intent::Hold,
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Esc => Intent::Pause,
        KeyCode::Char('r') | KeyCode::Char('R') => Intent::Reset,

        _ => return None,
    };

    let repeatable = matches!(
        intent,
        Intent::MoveLeft | Intent::MoveRight | Intent::SoftDrop
    );
    if key.kind == KeyEventKind::Repeat && !repeatable {
        return None;
    }
    Some(intent)
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn with_kind(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(Intent::MoveLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(Intent::MoveRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(Intent::SoftDrop)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('H'))),
            Some(Intent::MoveLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('d'))),
            Some(Intent::MoveRight)
        );
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(Intent::HardDrop)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('c'))),
            Some(Intent::Hold)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Esc)),
            Some(Intent::Pause)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(Intent::Reset)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('z'))), None);
    }

    #[test]
    fn held_rotation_is_deduplicated() {
        assert_eq!(
            handle_key_event(with_kind(KeyCode::Up, KeyEventKind::Press)),
            Some(Intent::RotateCw)
        );
        assert_eq!(
            handle_key_event(with_kind(KeyCode::Up, KeyEventKind::Repeat)),
            None
        );
        assert_eq!(
            handle_key_event(with_kind(KeyCode::Char(' '), KeyEventKind::Repeat)),
            None
        );
        assert_eq!(
            handle_key_event(with_kind(KeyCode::Left, KeyEventKind::Repeat)),
            Some(Intent::MoveLeft)
        );
    }

    #[test]
    fn releases_are_ignored() {
        assert_eq!(
            handle_key_event(with_kind(KeyCode::Left, KeyEventKind::Release)),
            None
        );
        assert!(!should_quit(with_kind(KeyCode::Char('q'), KeyEventKind::Release)));
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            None
        );
    }
}
