/// Hangman game module
pub mod figure;
pub mod game;
pub mod renderer;
pub mod script;
pub mod session;

pub use figure::{BodyPart, HangmanFigure};
pub use game::{EndReason, GameError, GameEvent, GuessOutcome, Score, WordGame};
pub use renderer::{HangmanRenderer, HangmanView};
pub use session::HangmanSession;
