//! UI rendering components

pub mod chapter;
pub mod command_line;
pub mod dashboard;
pub mod help;
pub mod homework_view;
pub mod layout;
pub mod main_screen;
pub mod module_view;
pub mod sidebar;

use ratatui::{Frame, style::Style, widgets::Block};

use crate::app::intent::Course;
use crate::app::state::{AppState, Screen};
use crate::progress::UserProgress;
use crate::theme::Theme;

/// Main draw function
pub fn draw(
    frame: &mut Frame,
    state: &AppState,
    course: &Course,
    user: &UserProgress,
    theme: &Theme,
) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(theme.bg_primary)), area);

    main_screen::draw(frame, state, course, user, theme);
    if state.screen == Screen::Help {
        help::draw(frame, area, theme);
    }
}
