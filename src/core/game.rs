/// Core game seams for hangterm: keyboard input and injected randomness
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;
use rand_core::RngCore;

/// A keyboard identifier as seen by the game core.
///
/// Only the keys the game reacts to get their own variant; everything else
/// collapses into `Other` and is ignored by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Letter(char),
    Digit(char),
    Escape,
    Other,
}

impl Key {
    /// Parse a key identifier string ("Escape", " ", "a", "0", ...).
    ///
    /// `"space"` is accepted as an alias for `" "` so scripts stay readable.
    pub fn from_identifier(id: &str) -> Self {
        match id {
            " " | "space" | "Space" => return Key::Space,
            "Escape" | "Esc" => return Key::Escape,
            _ => {}
        }

        let mut chars = id.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_lowercase() => Key::Letter(c),
            (Some(c), None) if c.is_ascii_digit() => Key::Digit(c),
            _ => Key::Other,
        }
    }

    /// Translate a crossterm key event. Uppercase letters are NOT folded:
    /// only lowercase a-z count as guesses.
    pub fn from_event(event: KeyEvent) -> Self {
        if event.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return Key::Other;
        }
        match event.code {
            KeyCode::Esc => Key::Escape,
            KeyCode::Char(' ') => Key::Space,
            KeyCode::Char(c) if c.is_ascii_lowercase() => Key::Letter(c),
            KeyCode::Char(c) if c.is_ascii_digit() => Key::Digit(c),
            _ => Key::Other,
        }
    }
}

/// Source of randomness for word selection.
///
/// Implementations must return an index in `0..len`; `len` is never zero.
pub trait RandomSource {
    fn index(&mut self, len: usize) -> usize;
}

/// Adapter turning any `rand` generator into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: RngCore> RandomSource for RngSource<R> {
    fn index(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}
