//! Layout utilities and common components

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::error::CourseError;
use crate::theme::Theme;

const BAR_FILLED: char = '█';
const BAR_EMPTY: char = '░';

/// Bordered panel, highlighted when focused
pub fn panel<'a>(title: &'a str, focused: bool, theme: &Theme) -> Block<'a> {
    let border_color = if focused { theme.border_focused } else { theme.border };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(theme.bg_primary))
}

/// Style for the selected row of a list
pub fn selected_style(focused: bool, theme: &Theme) -> Style {
    if focused {
        Style::default().fg(theme.bg_primary).bg(theme.accent_primary).add_modifier(Modifier::BOLD)
    } else {
        Style::default().bg(theme.selection)
    }
}

/// Text progress bar of `width` cells for a 0-100 percentage
pub fn progress_bar(percent: u8, width: usize) -> String {
    let filled = (usize::from(percent.min(100)) * width + 50) / 100;
    let mut bar = String::with_capacity(width * 3);
    bar.extend(std::iter::repeat_n(BAR_FILLED, filled));
    bar.extend(std::iter::repeat_n(BAR_EMPTY, width - filled));
    bar
}

/// Bar plus percentage, colored by the theme
pub fn progress_line(percent: u8, width: usize, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(progress_bar(percent, width), Style::default().fg(theme.accent_primary)),
        Span::styled(format!(" {:>3}%", percent), Style::default().fg(theme.fg_muted)),
    ])
}

/// Section heading inside a panel
pub fn heading(text: impl Into<String>, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        text.into(),
        Style::default().fg(theme.fg_secondary).add_modifier(Modifier::BOLD),
    ))
}

/// Muted hint text
pub fn muted(text: impl Into<String>, theme: &Theme) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(theme.fg_muted))
}

/// Area centered in `area` taking the given percentages
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Stand-in for a view whose ids no longer resolve
pub fn draw_not_found(frame: &mut Frame, area: Rect, error: &CourseError, theme: &Theme) {
    let block = panel(" Not found ", true, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            error.placeholder(),
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(muted(error.to_string(), theme)),
        Line::from(muted("Press H for the dashboard", theme)),
    ];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}
