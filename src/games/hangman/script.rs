/// Headless play: key identifiers in, JSON event lines out
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use crate::games::hangman::session::HangmanSession;

/// Feed one key identifier per input line into the session and write every
/// emitted event as a JSON object on its own line.
///
/// Blank lines and lines starting with `#` are skipped. A line holding a
/// single space is the space key; `space` works too.
pub fn run_script<R: BufRead, W: Write>(
    session: &mut HangmanSession,
    input: R,
    mut output: W,
) -> Result<usize> {
    let mut emitted = 0;
    for (lineno, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read input line {}", lineno + 1))?;
        let id = if line == " " { line.as_str() } else { line.trim() };
        if id.is_empty() || id.starts_with('#') {
            continue;
        }

        let events = session.handle_identifier(id);
        debug!(key = id, events = events.len(), "script key");
        for event in &events {
            serde_json::to_writer(&mut output, event)?;
            writeln!(output)?;
        }
        emitted += events.len();
    }
    output.flush()?;
    Ok(emitted)
}
