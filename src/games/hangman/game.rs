use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, trace};

use crate::core::config::WordBank;
use crate::core::game::RandomSource;
use crate::games::hangman::figure::{BodyPart, HangmanFigure};

/// Lives at the start of every round.
pub const STARTING_LIVES: u8 = 6;

/// Immutable record of one state change, consumed by renderers.
///
/// The secret word only leaves the core through `LetterRevealed` and through
/// `RoundEnded` on a loss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    RoundStarted {
        word_len: usize,
    },
    LetterRevealed {
        letter: char,
        positions: Vec<usize>,
    },
    GuessRecorded {
        letter: char,
        correct: bool,
    },
    DuplicateGuess {
        letter: char,
    },
    FigureAdvanced {
        revealed_count: usize,
        parts: Vec<BodyPart>,
    },
    FigureReset,
    FigureRevealedAll,
    RoundEnded {
        won: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        word: Option<String>,
    },
    ScoreUpdated {
        wins: u32,
        losses: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no round is in progress")]
    NotActive,
    #[error("a round is already in progress")]
    AlreadyActive,
    #[error("{0:?} is not a lowercase letter a-z")]
    InvalidLetter(char),
}

/// Why a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndReason {
    Won,
    Lost,
    /// Escape or restart. Scored as a loss.
    #[default]
    Abandoned,
}

impl EndReason {
    pub fn is_win(self) -> bool {
        matches!(self, EndReason::Won)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    Incorrect,
    Duplicate,
    Won,
    Lost,
}

/// Result of a successful `guess` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guessed {
    pub outcome: GuessOutcome,
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guess {
    pub letter: char,
    pub correct: bool,
}

/// Wins and losses for the lifetime of the process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub wins: u32,
    pub losses: u32,
}

impl Score {
    fn record(&mut self, won: bool) {
        if won {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
    }

    pub fn rounds(&self) -> u32 {
        self.wins + self.losses
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Round {
    word: String,
    revealed: Vec<bool>,
}

impl Round {
    fn positions_of(&self, letter: char) -> Vec<usize> {
        self.word
            .char_indices()
            .filter(|(_, c)| *c == letter)
            .map(|(i, _)| i)
            .collect()
    }

    fn is_solved(&self) -> bool {
        self.revealed.iter().all(|r| *r)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Inactive,
    Active(Round),
}

/// Round state machine: word choice, guesses, lives and score.
#[derive(Debug, Clone)]
pub struct WordGame {
    bank: WordBank,
    phase: Phase,
    guesses: Vec<Guess>,
    lives: u8,
    score: Score,
}

impl WordGame {
    pub fn new(bank: WordBank) -> Self {
        Self {
            bank,
            phase: Phase::Inactive,
            guesses: Vec::new(),
            lives: STARTING_LIVES,
            score: Score::default(),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Active(_))
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn bank(&self) -> &WordBank {
        &self.bank
    }

    /// Guesses recorded this round, in the order they were made.
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    pub fn incorrect_guesses(&self) -> usize {
        self.guesses.iter().filter(|g| !g.correct).count()
    }

    pub fn word_len(&self) -> Option<usize> {
        match &self.phase {
            Phase::Active(round) => Some(round.revealed.len()),
            Phase::Inactive => None,
        }
    }

    /// Board as the player sees it: `Some(letter)` for revealed positions.
    pub fn masked_word(&self) -> Vec<Option<char>> {
        match &self.phase {
            Phase::Active(round) => round
                .word
                .chars()
                .zip(&round.revealed)
                .map(|(c, shown)| shown.then_some(c))
                .collect(),
            Phase::Inactive => Vec::new(),
        }
    }

    pub fn start(
        &mut self,
        figure: &mut HangmanFigure,
        rng: &mut dyn RandomSource,
    ) -> Result<Vec<GameEvent>, GameError> {
        if self.is_active() {
            return Err(GameError::AlreadyActive);
        }
        let mut events = Vec::new();
        self.start_into(figure, rng, &mut events);
        Ok(events)
    }

    pub fn guess(
        &mut self,
        letter: char,
        figure: &mut HangmanFigure,
    ) -> Result<Guessed, GameError> {
        let Phase::Active(round) = &mut self.phase else {
            return Err(GameError::NotActive);
        };
        if !letter.is_ascii_lowercase() {
            return Err(GameError::InvalidLetter(letter));
        }

        let mut events = Vec::new();

        if self.guesses.iter().any(|g| g.letter == letter) {
            debug!(%letter, "duplicate guess");
            events.push(GameEvent::DuplicateGuess { letter });
            return Ok(Guessed {
                outcome: GuessOutcome::Duplicate,
                events,
            });
        }

        let positions = round.positions_of(letter);
        let outcome = if !positions.is_empty() {
            for &i in &positions {
                round.revealed[i] = true;
            }
            let solved = round.is_solved();
            debug!(%letter, hits = positions.len(), "correct guess");
            events.push(GameEvent::LetterRevealed { letter, positions });

            if solved {
                self.end_into(EndReason::Won, figure, &mut events);
                GuessOutcome::Won
            } else {
                self.record(letter, true, &mut events);
                GuessOutcome::Correct
            }
        } else if self.lives <= 1 {
            debug!(%letter, "final wrong guess");
            self.end_into(EndReason::Lost, figure, &mut events);
            GuessOutcome::Lost
        } else {
            self.lives -= 1;
            let parts = figure.advance();
            debug!(%letter, lives = self.lives, "wrong guess");
            events.push(GameEvent::FigureAdvanced {
                revealed_count: figure.revealed_count(),
                parts,
            });
            self.record(letter, false, &mut events);
            GuessOutcome::Incorrect
        };

        Ok(Guessed { outcome, events })
    }

    pub fn end(
        &mut self,
        reason: EndReason,
        figure: &mut HangmanFigure,
    ) -> Result<Vec<GameEvent>, GameError> {
        if !self.is_active() {
            return Err(GameError::NotActive);
        }
        let mut events = Vec::new();
        self.end_into(reason, figure, &mut events);
        Ok(events)
    }

    /// Abandon the current round (scored as a loss) and start a new one.
    pub fn restart(
        &mut self,
        figure: &mut HangmanFigure,
        rng: &mut dyn RandomSource,
    ) -> Result<Vec<GameEvent>, GameError> {
        if !self.is_active() {
            return Err(GameError::NotActive);
        }
        let mut events = Vec::new();
        self.end_into(EndReason::Abandoned, figure, &mut events);
        self.start_into(figure, rng, &mut events);
        Ok(events)
    }

    fn start_into(
        &mut self,
        figure: &mut HangmanFigure,
        rng: &mut dyn RandomSource,
        events: &mut Vec<GameEvent>,
    ) {
        self.guesses.clear();
        self.lives = STARTING_LIVES;
        figure.reset();
        events.push(GameEvent::FigureReset);

        let index = rng.index(self.bank.len());
        // WordBank is never empty, so the fallback only guards a misbehaving source.
        let word = self
            .bank
            .get(index)
            .or_else(|| self.bank.get(0))
            .unwrap_or_default()
            .to_string();
        trace!(%word, "word chosen");
        info!(word_len = word.len(), "round started");

        events.push(GameEvent::RoundStarted {
            word_len: word.len(),
        });
        self.phase = Phase::Active(Round {
            revealed: vec![false; word.len()],
            word,
        });
    }

    fn end_into(
        &mut self,
        reason: EndReason,
        figure: &mut HangmanFigure,
        events: &mut Vec<GameEvent>,
    ) {
        let Phase::Active(round) = std::mem::replace(&mut self.phase, Phase::Inactive) else {
            return;
        };
        let won = reason.is_win();

        let word = if won {
            None
        } else {
            let mut seen: Vec<char> = Vec::new();
            for (i, c) in round.word.chars().enumerate() {
                if round.revealed[i] || seen.contains(&c) {
                    continue;
                }
                seen.push(c);
                let positions = round
                    .positions_of(c)
                    .into_iter()
                    .filter(|p| !round.revealed[*p])
                    .collect();
                events.push(GameEvent::LetterRevealed {
                    letter: c,
                    positions,
                });
            }
            Some(round.word)
        };

        self.score.record(won);
        info!(?reason, wins = self.score.wins, losses = self.score.losses, "round ended");

        events.push(GameEvent::RoundEnded { won, word });
        events.push(GameEvent::ScoreUpdated {
            wins: self.score.wins,
            losses: self.score.losses,
        });
        figure.reveal_all();
        events.push(GameEvent::FigureRevealedAll);
    }

    fn record(&mut self, letter: char, correct: bool, events: &mut Vec<GameEvent>) {
        self.guesses.push(Guess { letter, correct });
        events.push(GameEvent::GuessRecorded { letter, correct });
    }
}
