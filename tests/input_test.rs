//! Key events through the input adapter into a live engine.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

use stackfall::core::{GameConfig, GameState};
use stackfall::input::{handle_key_event, should_quit};
use stackfall::types::{Intent, PieceKind};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::from(code)
}

fn repeat(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Repeat,
        state: KeyEventState::NONE,
    }
}

fn feed(state: &mut GameState, keys: &[KeyEvent]) {
    for key in keys {
        if let Some(intent) = handle_key_event(*key) {
            state.apply_intent(intent);
        }
    }
}

#[test]
fn every_intent_has_a_key() {
    let keys = [
        (KeyCode::Left, Intent::MoveLeft),
        (KeyCode::Right, Intent::MoveRight),
        (KeyCode::Down, Intent::SoftDrop),
        (KeyCode::Up, Intent::RotateCw),
        (KeyCode::Char(' '), Intent::HardDrop),
        (KeyCode::Char('c'), Intent::Hold),
        (KeyCode::Char('p'), Intent::Pause),
        (KeyCode::Char('r'), Intent::Reset),
    ];
    for (code, intent) in keys {
        assert_eq!(handle_key_event(press(code)), Some(intent), "{code:?}");
    }
}

#[test]
fn held_up_arrow_rotates_once() {
    let mut state = GameState::new(GameConfig::with_seed(1));
    state.spawn(PieceKind::T);
    feed(
        &mut state,
        &[press(KeyCode::Up), repeat(KeyCode::Up), repeat(KeyCode::Up)],
    );
    let once = stackfall::core::base_shape(PieceKind::T).rotate_cw();
    assert_eq!(state.active().unwrap().shape, once);
}

#[test]
fn held_arrow_keeps_moving() {
    let mut state = GameState::new(GameConfig::with_seed(1));
    state.spawn(PieceKind::T);
    feed(
        &mut state,
        &[press(KeyCode::Left), repeat(KeyCode::Left), repeat(KeyCode::Left)],
    );
    assert_eq!(state.active().unwrap().col, 0);
}

#[test]
fn quit_is_not_an_intent() {
    assert!(should_quit(press(KeyCode::Char('q'))));
    assert_eq!(handle_key_event(press(KeyCode::Char('q'))), None);
}
