//! # TitleBar Component
//!
//! Top line of the panel: the current problem's heading plus the
//! position within the catalog when it is known.
//!
//! Stateless — it receives everything as props and renders a single
//! `Span`, so there is no border overhead and tests can just check the
//! buffer text.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::tui::component::Component;

/// Top bar component showing the problem heading and catalog position.
pub struct TitleBar {
    /// Heading text (e.g. "Problem 12: Highly divisible triangular number").
    pub heading: String,
    /// Position within the catalog (e.g. "12 of 927"), when known.
    pub position: Option<String>,
}

impl TitleBar {
    pub fn new(heading: String, position: Option<String>) -> Self {
        Self { heading, position }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = match &self.position {
            Some(position) => format!("Eulerpad | {} | {}", self.heading, position),
            None => format!("Eulerpad | {}", self.heading),
        };
        frame.render_widget(Span::raw(title_text), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| title_bar.render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_bar_with_position() {
        let mut title_bar = TitleBar::new(
            "Problem 12: Highly divisible triangular number".to_string(),
            Some("12 of 927".to_string()),
        );
        let text = render_to_text(&mut title_bar);
        assert!(text.contains("Eulerpad"));
        assert!(text.contains("Problem 12"));
        assert!(text.contains("12 of 927"));
    }

    #[test]
    fn test_title_bar_without_position() {
        let mut title_bar = TitleBar::new("Congratulations!".to_string(), None);
        let text = render_to_text(&mut title_bar);
        assert!(text.contains("Congratulations!"));
        assert!(!text.contains(" of "));
    }
}
