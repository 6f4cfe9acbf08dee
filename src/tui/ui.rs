use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ProblemView, StatusBar, TitleBar};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, status_area] = layout.areas(frame.area());

    // Title bar
    let mut title_bar = TitleBar::new(heading(app), position(app));
    title_bar.render(frame, title_area);

    // Main area - error, completion, problem body, or nothing yet
    if let Some(error_msg) = &app.error {
        draw_error_view(frame, main_area, error_msg);
    } else if app.finished {
        draw_finished_view(frame, main_area);
    } else if let Some(problem) = &app.problem {
        let mut view = ProblemView {
            body: &problem.body,
            state: &mut tui.problem_view,
        };
        view.render(frame, main_area);
    }

    // Status bar
    let mut status_bar = StatusBar::new(app.status_message.clone());
    status_bar.render(frame, status_area);
}

/// The title-bar heading for the current display state.
fn heading(app: &App) -> String {
    if app.error.is_some() {
        return String::from("Error");
    }
    if app.finished {
        return String::from("Congratulations!");
    }
    match &app.problem {
        Some(problem) => format!("Problem {}: {}", problem.id, problem.title),
        None => String::from("Project Euler"),
    }
}

/// "N of M" once the catalog is known (batch mode only).
fn position(app: &App) -> Option<String> {
    let catalog = app.catalog.as_ref()?;
    if catalog.is_empty() || app.error.is_some() {
        return None;
    }
    Some(format!("{} of {}", app.current_id(), catalog.len()))
}

fn draw_error_view(frame: &mut Frame, area: Rect, error_msg: &str) {
    let text = format!(
        "Could not load problems.\n\n{}\n\nPress r to reload or n to move on.",
        error_msg
    );
    let error_paragraph = Paragraph::new(text)
        .block(Block::bordered().title("ERROR"))
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);

    frame.render_widget(error_paragraph, area);
}

fn draw_finished_view(frame: &mut Frame, area: Rect) {
    let finished_paragraph = Paragraph::new("You have completed all available problems.")
        .block(Block::bordered().title("Congratulations!"))
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);

    frame.render_widget(finished_paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::problems::Problem;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut tui = TuiState::new();
        terminal.draw(|f| draw_ui(f, app, &mut tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_ui_empty_app() {
        let app = test_app();
        let text = render_to_text(&app);
        assert!(text.contains("Eulerpad"));
        assert!(text.contains("Project Euler"));
    }

    #[test]
    fn test_draw_ui_with_problem() {
        let mut app = test_app();
        app.problem = Some(Problem {
            id: 1,
            title: "Multiples of 3 and 5".to_string(),
            body: "Find the sum of all the multiples of 3 or 5 below 1000.".to_string(),
        });
        app.catalog = Some(crate::problems::ProblemCatalog::from_listing(
            "\"1\",\"Multiples of 3 and 5\",\"x\"",
        ));
        let text = render_to_text(&app);
        assert!(text.contains("Problem 1: Multiples of 3 and 5"));
        assert!(text.contains("1 of 1"));
        assert!(text.contains("multiples of 3 or 5"));
    }

    #[test]
    fn test_draw_ui_error_state() {
        let mut app = test_app();
        update(
            &mut app,
            Action::FetchFailed(crate::problems::FetchError::Network("timed out".to_string())),
        );
        let text = render_to_text(&app);
        assert!(text.contains("ERROR"));
        assert!(text.contains("timed out"));
        assert!(text.contains("Press r to reload"));
    }

    #[test]
    fn test_draw_ui_finished_state() {
        let mut app = test_app();
        app.finished = true;
        let text = render_to_text(&app);
        assert!(text.contains("Congratulations!"));
        assert!(text.contains("completed all available problems"));
    }

    #[test]
    fn test_heading_while_loading() {
        let mut app = test_app();
        update(&mut app, Action::Reload);
        assert_eq!(heading(&app), "Project Euler");
        let text = render_to_text(&app);
        assert!(text.contains("Fetching problems"));
    }
}
