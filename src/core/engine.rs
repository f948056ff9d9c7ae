use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use std::time::Duration;
use tracing::info;

use crate::core::game::Key;
use crate::core::renderer::GameRenderer;
use crate::games::hangman::{GameEvent, HangmanSession};

/// Terminal loop: draw, wait for a key, run it through the session to
/// completion, fold the resulting events into the renderer.
pub struct Engine<R: GameRenderer<GameEvent>> {
    session: HangmanSession,
    renderer: R,
}

impl<R: GameRenderer<GameEvent>> Engine<R> {
    pub fn new(session: HangmanSession, renderer: R) -> Self {
        Self { session, renderer }
    }

    pub fn run(mut self, terminal: &mut DefaultTerminal) -> Result<HangmanSession> {
        loop {
            terminal.draw(|f| self.renderer.render(f))?;

            if !event::poll(Duration::from_millis(250))? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let ctrl_c = key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
            let quit = !self.session.game().is_active() && key.code == KeyCode::Esc;
            if ctrl_c || quit {
                info!("quitting");
                break;
            }

            let events = self.session.handle_key(Key::from_event(key));
            self.renderer.apply_all(&events);
        }
        Ok(self.session)
    }
}
