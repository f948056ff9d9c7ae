/// Renderer trait for event-driven presentation
use ratatui::Frame;

/// Presentation side of a game. The core never draws; it hands out event
/// records and the renderer folds them into whatever it displays.
pub trait GameRenderer<E> {
    /// Fold one event into the renderer's view state.
    fn apply(&mut self, event: &E);

    /// Draw the current view state into the Ratatui frame.
    fn render(&self, frame: &mut Frame);

    fn apply_all(&mut self, events: &[E]) {
        for event in events {
            self.apply(event);
        }
    }
}
