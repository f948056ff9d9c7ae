//! End-to-end rounds driven through the keyboard dispatch entry point.

use hangterm::games::hangman::figure::PART_COUNT;
use hangterm::games::hangman::game::STARTING_LIVES;
use hangterm::games::hangman::HangmanRenderer;
use hangterm::core::renderer::GameRenderer;
use hangterm::{GameConfig, GameEvent, HangmanSession, RandomSource, WordBank};

/// Picks the bank entry at a fixed index.
struct Pick(usize);

impl RandomSource for Pick {
    fn index(&mut self, _len: usize) -> usize {
        self.0
    }
}

fn session_with(word: &str) -> HangmanSession {
    let config = GameConfig {
        word_bank: WordBank::new([word]).unwrap(),
        seed: None,
    };
    HangmanSession::with_source(config, Box::new(Pick(0)))
}

#[test]
fn array_round_is_won_after_three_letters() {
    let mut session = session_with("array");
    assert_eq!(
        session.handle_identifier(" "),
        vec![GameEvent::FigureReset, GameEvent::RoundStarted { word_len: 5 }]
    );

    let events = session.handle_identifier("a");
    assert_eq!(
        events[0],
        GameEvent::LetterRevealed {
            letter: 'a',
            positions: vec![0, 3]
        }
    );
    assert_eq!(session.game().guesses().len(), 1);

    let events = session.handle_identifier("r");
    assert_eq!(
        events[0],
        GameEvent::LetterRevealed {
            letter: 'r',
            positions: vec![1, 2]
        }
    );

    let events = session.handle_identifier("y");
    assert_eq!(
        events,
        vec![
            GameEvent::LetterRevealed {
                letter: 'y',
                positions: vec![4]
            },
            GameEvent::RoundEnded {
                won: true,
                word: None
            },
            GameEvent::ScoreUpdated { wins: 1, losses: 0 },
            GameEvent::FigureRevealedAll,
        ]
    );
    assert!(!session.game().is_active());
    assert_eq!(session.game().score().wins, 1);
}

#[test]
fn index_round_is_lost_on_sixth_wrong_letter() {
    let mut session = session_with("index");
    session.handle_identifier("space");

    for (i, letter) in ["z", "q", "w", "v", "b"].into_iter().enumerate() {
        session.handle_identifier(letter);
        let game = session.game();
        assert_eq!(game.lives() as usize + game.incorrect_guesses(), STARTING_LIVES as usize);
        assert_eq!(session.figure().revealed_count(), i + 1);
    }
    assert_eq!(session.game().lives(), 1);
    assert_eq!(session.figure().revealed_count(), 5);
    assert!(session.game().is_active());

    let events = session.handle_identifier("p");
    assert!(events.contains(&GameEvent::RoundEnded {
        won: false,
        word: Some("index".to_string())
    }));
    assert!(events.contains(&GameEvent::ScoreUpdated { wins: 0, losses: 1 }));
    assert_eq!(events.last(), Some(&GameEvent::FigureRevealedAll));
    assert!(session.figure().is_complete());
    assert!(!session.game().is_active());
}

#[test]
fn repeated_letters_never_cost_lives() {
    let mut session = session_with("boolean");
    session.handle_identifier(" ");

    for _ in 0..4 {
        session.handle_identifier("o");
        session.handle_identifier("k");
    }
    assert_eq!(session.game().guesses().len(), 2);
    assert_eq!(session.game().lives(), STARTING_LIVES - 1);
}

#[test]
fn each_round_adds_exactly_one_result() {
    let mut session = session_with("null");
    let keys = [
        " ", "n", "u", "l", // win
        " ", "Escape", // abandon
        " ", "0", "Escape", // restart then abandon
        "Escape", "a", // inactive, ignored
    ];
    for key in keys {
        session.handle_identifier(key);
    }
    let score = session.game().score();
    assert_eq!(score.wins, 1);
    assert_eq!(score.losses, 3);
    assert_eq!(score.rounds(), 4);
}

#[test]
fn renderer_never_sees_more_than_revealed() {
    let mut session = session_with("callback");
    let mut renderer = HangmanRenderer::new();

    for key in [" ", "c", "z"] {
        let events = session.handle_identifier(key);
        renderer.apply_all(&events);
    }
    let view = renderer.view();
    assert_eq!(view.masked_word(), "c _ _ _ _ _ c _");
    assert_eq!(view.lives, session.game().lives());
    assert_eq!(view.visible.iter().filter(|v| **v).count(), 1);

    renderer.apply_all(&session.handle_identifier("Escape"));
    let view = renderer.view();
    assert_eq!(view.masked_word(), "c a l l b a c k");
    assert_eq!(view.visible, [true; PART_COUNT]);
    assert_eq!(view.result, Some(false));
    assert_eq!((view.wins, view.losses), (0, 1));
}
