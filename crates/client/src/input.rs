//! Keyboard input for the CLI client.
//!
//! Only the raw character reaches the runtime; the key table lives in
//! `game-core` so every front end shares it.
use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use runtime::CommandSource;

/// Blocking keyboard reader.
#[derive(Debug, Default)]
pub struct KeyboardInput;

impl KeyboardInput {
    pub fn new() -> Self {
        Self
    }

    fn next_key(&mut self) -> io::Result<KeyEvent> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(key),
                _ => {}
            }
        }
    }
}

/// Character handed to the runtime for a key press.
///
/// Keys without a character still spend the turn, as `'\0'`, which no
/// command uses.
pub fn key_char(code: KeyCode) -> char {
    match code {
        KeyCode::Char(ch) => ch,
        KeyCode::Enter => '\n',
        KeyCode::Tab => '\t',
        KeyCode::Esc => '\u{1b}',
        _ => '\0',
    }
}

impl CommandSource for KeyboardInput {
    fn next_command(&mut self) -> io::Result<char> {
        Ok(key_char(self.next_key()?.code))
    }

    fn acknowledge(&mut self) -> io::Result<()> {
        self.next_key().map(|_| ())
    }
}
