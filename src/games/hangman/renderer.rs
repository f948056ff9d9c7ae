/// Hangman renderer - builds its view purely from game events
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::renderer::GameRenderer;
use crate::games::hangman::figure::{BodyPart, PART_COUNT};
use crate::games::hangman::game::{GameEvent, STARTING_LIVES};

const MESSAGE_INACTIVE: &str = "press spacebar to continue";
const MESSAGE_ACTIVE: &str = "press any key to guess a letter";
const DUPLICATE_NOTICE: &str = "you've already guessed this!";

/// What the player can see. Never holds more of the word than was revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HangmanView {
    pub tiles: Vec<Option<char>>,
    pub guesses: Vec<(char, bool)>,
    pub lives: u8,
    pub visible: [bool; PART_COUNT],
    pub wins: u32,
    pub losses: u32,
    pub active: bool,
    /// Outcome of the last finished round.
    pub result: Option<bool>,
    pub notice: Option<&'static str>,
}

impl Default for HangmanView {
    fn default() -> Self {
        Self {
            tiles: Vec::new(),
            guesses: Vec::new(),
            lives: STARTING_LIVES,
            visible: [false; PART_COUNT],
            wins: 0,
            losses: 0,
            active: false,
            result: None,
            notice: None,
        }
    }
}

impl HangmanView {
    pub fn masked_word(&self) -> String {
        self.tiles
            .iter()
            .map(|t| t.unwrap_or('_').to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn shown(&self, part: BodyPart) -> bool {
        self.visible[part.index()]
    }

    /// ASCII gallows with the visible parts drawn in.
    pub fn figure_lines(&self) -> Vec<String> {
        let pick = |part, glyph| if self.shown(part) { glyph } else { ' ' };

        let head = if self.shown(BodyPart::Head) {
            format!(
                "({}{}{})",
                pick(BodyPart::LeftEye, 'o'),
                pick(BodyPart::Frown, '~'),
                pick(BodyPart::RightEye, 'o'),
            )
        } else {
            "     ".to_string()
        };

        vec![
            "  +----+".to_string(),
            "  |    |".to_string(),
            format!("  |  {head}"),
            format!(
                "  |   {}{}{}",
                pick(BodyPart::LeftArm, '/'),
                pick(BodyPart::Torso, '|'),
                pick(BodyPart::RightArm, '\\'),
            ),
            format!("  |    {}", pick(BodyPart::Torso, '|')),
            format!(
                "  |   {} {}",
                pick(BodyPart::LeftLeg, '/'),
                pick(BodyPart::RightLeg, '\\'),
            ),
            "__|________".to_string(),
        ]
    }
}

#[derive(Debug, Default)]
pub struct HangmanRenderer {
    view: HangmanView,
}

impl HangmanRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &HangmanView {
        &self.view
    }
}

impl GameRenderer<GameEvent> for HangmanRenderer {
    fn apply(&mut self, event: &GameEvent) {
        let view = &mut self.view;
        match event {
            GameEvent::RoundStarted { word_len } => {
                view.tiles = vec![None; *word_len];
                view.guesses.clear();
                view.lives = STARTING_LIVES;
                view.active = true;
                view.result = None;
                view.notice = None;
            }
            GameEvent::LetterRevealed { letter, positions } => {
                for &p in positions {
                    if let Some(tile) = view.tiles.get_mut(p) {
                        *tile = Some(*letter);
                    }
                }
            }
            GameEvent::GuessRecorded { letter, correct } => {
                view.guesses.push((*letter, *correct));
                if !correct {
                    view.lives = view.lives.saturating_sub(1);
                }
                view.notice = None;
            }
            GameEvent::DuplicateGuess { .. } => view.notice = Some(DUPLICATE_NOTICE),
            GameEvent::FigureAdvanced { parts, .. } => {
                for part in parts {
                    view.visible[part.index()] = true;
                }
            }
            GameEvent::FigureReset => view.visible = [false; PART_COUNT],
            GameEvent::FigureRevealedAll => view.visible = [true; PART_COUNT],
            GameEvent::RoundEnded { won, .. } => {
                view.active = false;
                view.result = Some(*won);
                view.notice = None;
            }
            GameEvent::ScoreUpdated { wins, losses } => {
                view.wins = *wins;
                view.losses = *losses;
            }
        }
    }

    fn render(&self, frame: &mut Frame) {
        let view = &self.view;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(9),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let message = if view.active { MESSAGE_ACTIVE } else { MESSAGE_INACTIVE };
        frame.render_widget(
            Paragraph::new(message)
                .block(Block::default().title(" HANGMAN ").borders(Borders::ALL))
                .alignment(Alignment::Center),
            chunks[0],
        );

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(16), Constraint::Min(0)])
            .split(chunks[1]);

        let drawing: Vec<Line> = view.figure_lines().into_iter().map(Line::from).collect();
        frame.render_widget(
            Paragraph::new(drawing).block(Block::default().borders(Borders::ALL)),
            body[0],
        );

        let guess_spans: Vec<Span> = view
            .guesses
            .iter()
            .map(|(letter, correct)| {
                let color = if *correct { Color::Green } else { Color::Red };
                Span::styled(format!("{letter} "), Style::default().fg(color))
            })
            .collect();

        let mut info = vec![
            Line::from(Span::styled(
                view.masked_word(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![Span::raw("Guesses: ")].into_iter().chain(guess_spans).collect::<Vec<_>>()),
            Line::from(format!("Lives: {}", view.lives)),
            Line::from(""),
            Line::from(format!("Wins: {}   Losses: {}", view.wins, view.losses)),
        ];
        if let Some(notice) = view.notice {
            info.push(Line::from(""));
            info.push(Line::from(Span::styled(notice, Style::default().fg(Color::Yellow))));
        }
        frame.render_widget(
            Paragraph::new(info).block(Block::default().borders(Borders::ALL)),
            body[1],
        );

        let footer = match view.result {
            Some(true) if !view.active => Line::from(Span::styled(
                "You won!",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Some(false) if !view.active => Line::from(Span::styled(
                "You lost!",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            _ if view.active => Line::from("[a-z] Guess  [0] Restart  [Esc] Give up"),
            _ => Line::from("[Space] New round  [Esc] Quit"),
        };
        frame.render_widget(Paragraph::new(footer).alignment(Alignment::Center), chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(renderer: &HangmanRenderer) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 18)).unwrap();
        terminal.draw(|f| renderer.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn view_follows_events() {
        let mut renderer = HangmanRenderer::new();
        renderer.apply_all(&[
            GameEvent::FigureReset,
            GameEvent::RoundStarted { word_len: 5 },
            GameEvent::LetterRevealed {
                letter: 'a',
                positions: vec![0, 3],
            },
            GameEvent::GuessRecorded {
                letter: 'a',
                correct: true,
            },
            GameEvent::FigureAdvanced {
                revealed_count: 1,
                parts: vec![BodyPart::Head],
            },
            GameEvent::GuessRecorded {
                letter: 'z',
                correct: false,
            },
        ]);

        let view = renderer.view();
        assert_eq!(view.masked_word(), "a _ _ a _");
        assert_eq!(view.guesses, vec![('a', true), ('z', false)]);
        assert_eq!(view.lives, 5);
        assert!(view.active);
        assert_eq!(view.figure_lines()[2], "  |  (   )");
    }

    #[test]
    fn duplicate_notice_clears_on_next_guess() {
        let mut renderer = HangmanRenderer::new();
        renderer.apply(&GameEvent::RoundStarted { word_len: 3 });
        renderer.apply(&GameEvent::DuplicateGuess { letter: 'a' });
        assert_eq!(renderer.view().notice, Some(DUPLICATE_NOTICE));

        renderer.apply(&GameEvent::GuessRecorded {
            letter: 'b',
            correct: false,
        });
        assert_eq!(renderer.view().notice, None);
    }

    #[test]
    fn full_figure_drawing() {
        let mut renderer = HangmanRenderer::new();
        renderer.apply(&GameEvent::FigureRevealedAll);
        let lines = renderer.view().figure_lines();
        assert_eq!(lines[2], "  |  (o~o)");
        assert_eq!(lines[3], "  |   /|\\");
        assert_eq!(lines[5], "  |   / \\");
    }

    #[test]
    fn draws_result_banner_and_score() {
        let mut renderer = HangmanRenderer::new();
        renderer.apply_all(&[
            GameEvent::RoundStarted { word_len: 4 },
            GameEvent::LetterRevealed {
                letter: 'n',
                positions: vec![0],
            },
            GameEvent::RoundEnded {
                won: false,
                word: Some("null".into()),
            },
            GameEvent::ScoreUpdated { wins: 2, losses: 1 },
            GameEvent::FigureRevealedAll,
        ]);

        let text = screen(&renderer);
        assert!(text.contains("You lost!"));
        assert!(text.contains("Wins: 2   Losses: 1"));
        assert!(text.contains(MESSAGE_INACTIVE));
    }

    #[test]
    fn draws_prompt_while_active() {
        let mut renderer = HangmanRenderer::new();
        renderer.apply(&GameEvent::RoundStarted { word_len: 4 });
        let text = screen(&renderer);
        assert!(text.contains(MESSAGE_ACTIVE));
        assert!(text.contains("_ _ _ _"));
    }
}
