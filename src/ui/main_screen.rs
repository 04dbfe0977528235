//! Main screen: sidebar, active view and command line

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use super::{chapter, command_line, dashboard, homework_view, layout, module_view, sidebar};
use crate::app::intent::Course;
use crate::app::navigation::View;
use crate::app::state::{AppState, Focus};
use crate::progress::UserProgress;
use crate::theme::Theme;

/// Minimum width for the sidebar
const SIDEBAR_MIN_WIDTH: u16 = 28;

/// Draw the main screen
pub fn draw(
    frame: &mut Frame,
    state: &AppState,
    course: &Course,
    user: &UserProgress,
    theme: &Theme,
) {
    let area = frame.area();

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let chunks = create_layout(vertical_chunks[0], state.sidebar.visible);
    let main_area = chunks[chunks.len() - 1];

    if state.sidebar.visible {
        sidebar::draw(
            frame,
            chunks[0],
            state,
            course.chapters(),
            course.view(),
            theme,
            state.focus == Focus::Sidebar,
        );
    }

    draw_view(frame, main_area, state, course, user, theme);

    let status = format!("{} · {}% complete", course.view().label(), course.store().overall_progress());
    command_line::draw(frame, vertical_chunks[1], &state.command_line, &status, theme);
}

/// Sidebar (optional) and main panel
fn create_layout(area: Rect, sidebar: bool) -> Vec<Rect> {
    let mut constraints = Vec::new();
    if sidebar {
        constraints.push(Constraint::Length((area.width / 4).max(SIDEBAR_MIN_WIDTH)));
    }
    constraints.push(Constraint::Min(30));

    Layout::default().direction(Direction::Horizontal).constraints(constraints).split(area).to_vec()
}

fn draw_view(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    course: &Course,
    user: &UserProgress,
    theme: &Theme,
) {
    let focused = state.focus == Focus::Main || !state.sidebar.visible;

    let result = match course.view() {
        View::Dashboard => {
            dashboard::draw(frame, area, state, course, user, theme, focused);
            Ok(())
        }
        View::Chapter { chapter_id } => course.current_chapter().map(|ch| {
            let position =
                course.chapters().iter().position(|c| &c.id == chapter_id).unwrap_or_default();
            chapter::draw(frame, area, state, ch, position, theme, focused);
        }),
        View::Module { .. } => course.current_chapter().and_then(|ch| {
            let module = course.current_module()?;
            module_view::draw(
                frame,
                area,
                ch,
                module,
                &state.playback,
                course.has_next_module(),
                state.scroll,
                theme,
            );
            Ok(())
        }),
        View::Homework { .. } => course.current_chapter().and_then(|ch| {
            let homework = course.current_homework()?;
            homework_view::draw(frame, area, ch, homework, &state.draft, state.scroll, theme);
            Ok(())
        }),
    };

    if let Err(error) = result {
        layout::draw_not_found(frame, area, &error, theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_with_sidebar() {
        let chunks = create_layout(Rect::new(0, 0, 120, 40), true);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].width, 30);
    }

    #[test]
    fn narrow_terminal_keeps_sidebar_minimum() {
        let chunks = create_layout(Rect::new(0, 0, 80, 40), true);
        assert_eq!(chunks[0].width, SIDEBAR_MIN_WIDTH);
    }

    #[test]
    fn layout_without_sidebar() {
        let chunks = create_layout(Rect::new(0, 0, 80, 40), false);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].width, 80);
    }
}
