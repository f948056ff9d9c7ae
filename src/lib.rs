pub mod cli;
pub mod core;
pub mod games;

// Re-export for convenience
pub use crate::core::config::{GameConfig, WordBank};
pub use crate::core::game::{Key, RandomSource, RngSource};
pub use crate::games::hangman::{GameEvent, HangmanSession};
