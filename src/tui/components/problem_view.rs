//! # ProblemView Component
//!
//! Scrollable body region. Problem descriptions routinely run past the
//! panel height, so the body paragraph renders into a `ScrollView` sized
//! to the wrapped line count, with the scroll offset kept across frames
//! in [`ProblemViewState`].

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::widgets::{Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Persistent scroll state for the body region.
#[derive(Default)]
pub struct ProblemViewState {
    pub scroll_state: ScrollViewState,
}

impl ProblemViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jump back to the top; called when the displayed problem changes.
    pub fn scroll_to_top(&mut self) {
        self.scroll_state.scroll_to_top();
    }
}

impl EventHandler for ProblemViewState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            TuiEvent::ScrollToTop => self.scroll_state.scroll_to_top(),
            _ => return None,
        }
        Some(())
    }
}

/// The body text inside a scroll view.
pub struct ProblemView<'a> {
    pub body: &'a str,
    pub state: &'a mut ProblemViewState,
}

impl Component for ProblemView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Leave one column for the scrollbar.
        let content_width = area.width.saturating_sub(1);
        if content_width == 0 || area.height == 0 {
            return;
        }

        // Wrap without trimming so the blank lines between paragraphs
        // survive.
        let paragraph = Paragraph::new(self.body).wrap(Wrap { trim: false });
        let content_height = paragraph.line_count(content_width) as u16;

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, content_height));

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_renders_body_text() {
        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = ProblemViewState::new();

        terminal
            .draw(|f| {
                let mut view = ProblemView {
                    body: "If we list all the natural numbers below 10",
                    state: &mut state,
                };
                view.render(f, f.area());
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("natural numbers"));
    }

    #[test]
    fn test_scroll_events_move_offset() {
        let backend = TestBackend::new(20, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = ProblemViewState::new();
        let body = "line\n".repeat(40);

        // Render once so the scroll view knows its content size.
        terminal
            .draw(|f| {
                let mut view = ProblemView {
                    body: &body,
                    state: &mut state,
                };
                view.render(f, f.area());
            })
            .unwrap();

        state.handle_event(&TuiEvent::ScrollDown);
        assert_eq!(state.scroll_state.offset().y, 1);
        state.handle_event(&TuiEvent::ScrollToTop);
        assert_eq!(state.scroll_state.offset().y, 0);
    }

    #[test]
    fn test_unrelated_events_are_ignored() {
        let mut state = ProblemViewState::new();
        assert!(state.handle_event(&TuiEvent::Advance).is_none());
        assert_eq!(state.scroll_state.offset().y, 0);
    }
}
