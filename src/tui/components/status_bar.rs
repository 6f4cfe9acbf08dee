//! Bottom line: transient status text while something is happening, key
//! hints otherwise.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::tui::component::Component;

const KEY_HINTS: &str = "n next · o open page · r reload · ↑/↓ scroll · q quit";

pub struct StatusBar {
    /// Transient status (e.g. "Fetching problems…"). Empty shows hints.
    pub status_message: String,
}

impl StatusBar {
    pub fn new(status_message: String) -> Self {
        Self { status_message }
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let text = if self.status_message.is_empty() {
            KEY_HINTS
        } else {
            self.status_message.as_str()
        };
        let span = Span::styled(text, Style::default().add_modifier(Modifier::DIM));
        frame.render_widget(span, area);
    }
}
