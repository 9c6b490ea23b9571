use std::collections::HashMap;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::Command;
use crate::geometry::Direction;

/// Fixed table from keys to commands. Letters are stored lowercase.
#[derive(Clone, Debug)]
pub struct KeyMap {
    bindings: HashMap<KeyCode, Command>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let bindings = [
            (KeyCode::Char('w'), Command::Turn(Direction::Up)),
            (KeyCode::Char('a'), Command::Turn(Direction::Left)),
            (KeyCode::Char('s'), Command::Turn(Direction::Down)),
            (KeyCode::Char('d'), Command::Turn(Direction::Right)),
            (KeyCode::Up, Command::Turn(Direction::Up)),
            (KeyCode::Left, Command::Turn(Direction::Left)),
            (KeyCode::Down, Command::Turn(Direction::Down)),
            (KeyCode::Right, Command::Turn(Direction::Right)),
            (KeyCode::Char('p'), Command::Pause),
            (KeyCode::Char(' '), Command::Pause),
            (KeyCode::Char('r'), Command::Restart),
            (KeyCode::Char('q'), Command::Quit),
            (KeyCode::Esc, Command::Quit),
        ];

        KeyMap::new(bindings)
    }
}

impl KeyMap {
    pub fn new(bindings: impl IntoIterator<Item = (KeyCode, Command)>) -> Self {
        KeyMap {
            bindings: bindings
                .into_iter()
                .map(|(code, command)| (normalize(code), command))
                .collect(),
        }
    }

    /// Unbound keys and anything but a key press give `None`.
    pub fn command_for(&self, key: &KeyEvent) -> Option<Command> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::Quit),
                _ => None,
            };
        }

        self.bindings.get(&normalize(key.code)).copied()
    }
}

fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

/// Takes at most one pending terminal event without waiting.
pub fn poll_command(keymap: &KeyMap) -> io::Result<Option<Command>> {
    if !event::poll(Duration::ZERO)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) => Ok(keymap.command_for(&key)),
        _ => Ok(None),
    }
}
