/// Top-level session: owns all game state and routes keys into it
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::core::config::GameConfig;
use crate::core::game::{Key, RandomSource, RngSource};
use crate::games::hangman::figure::HangmanFigure;
use crate::games::hangman::game::{EndReason, GameError, GameEvent, WordGame};

/// One per program run. Nothing in the game lives outside this value.
pub struct HangmanSession {
    game: WordGame,
    figure: HangmanFigure,
    rng: Box<dyn RandomSource>,
}

impl HangmanSession {
    pub fn new(config: GameConfig) -> Self {
        let rng: Box<dyn RandomSource> = match config.seed {
            Some(seed) => Box::new(RngSource(StdRng::seed_from_u64(seed))),
            None => Box::new(RngSource(rand::rng())),
        };
        Self::with_source(config, rng)
    }

    pub fn with_source(config: GameConfig, rng: Box<dyn RandomSource>) -> Self {
        Self {
            game: WordGame::new(config.word_bank),
            figure: HangmanFigure::new(),
            rng,
        }
    }

    pub fn game(&self) -> &WordGame {
        &self.game
    }

    pub fn figure(&self) -> &HangmanFigure {
        &self.figure
    }

    /// Keyboard dispatch entry point. Unrecognized keys produce no events.
    pub fn handle_key(&mut self, key: Key) -> Vec<GameEvent> {
        let active = self.game.is_active();
        let result = match key {
            Key::Space if !active => self.game.start(&mut self.figure, self.rng.as_mut()),
            Key::Letter(c) if active => self
                .game
                .guess(c, &mut self.figure)
                .map(|guessed| guessed.events),
            Key::Digit('0') if active => self.game.restart(&mut self.figure, self.rng.as_mut()),
            Key::Escape if active => self.game.end(EndReason::Abandoned, &mut self.figure),
            _ => return Vec::new(),
        };
        self.settle(key, result)
    }

    /// Parse a key identifier and dispatch it.
    pub fn handle_identifier(&mut self, id: &str) -> Vec<GameEvent> {
        self.handle_key(Key::from_identifier(id))
    }

    fn settle(&self, key: Key, result: Result<Vec<GameEvent>, GameError>) -> Vec<GameEvent> {
        result.unwrap_or_else(|err| {
            debug!(?key, %err, "key ignored");
            Vec::new()
        })
    }
}
