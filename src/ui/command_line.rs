//! Command line UI component

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::state::{CommandLineState, CommandMode};
use crate::theme::Theme;

const IDLE_HINT: &str = "? help · : commands · q quit";

/// Draw the command line at the bottom of the screen, with `status` right-aligned
pub fn draw(frame: &mut Frame, area: Rect, state: &CommandLineState, status: &str, theme: &Theme) {
    let status_width = u16::try_from(status.chars().count() + 1).unwrap_or(0).min(area.width / 2);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(status_width)])
        .split(area);

    let (text, style) = match state.mode {
        CommandMode::Normal => {
            if let Some(msg) = &state.message {
                let style = if state.is_error {
                    Style::default().fg(theme.error)
                } else {
                    Style::default().fg(theme.fg_muted)
                };
                (msg.clone(), style)
            } else {
                (String::from(IDLE_HINT), Style::default().fg(theme.fg_muted))
            }
        }
        CommandMode::Command => {
            let text = format!(":{}", state.input);
            (text, Style::default().fg(theme.accent_primary))
        }
    };

    // Build the line with cursor if in input mode
    let line = if state.is_input_mode() {
        build_line_with_cursor(&text, state.cursor + 1, style, theme) // after the ':'
    } else {
        Line::from(Span::styled(text, style))
    };

    frame.render_widget(Paragraph::new(line), columns[0]);
    frame.render_widget(
        Paragraph::new(Span::styled(status, Style::default().fg(theme.fg_muted)))
            .alignment(Alignment::Right),
        columns[1],
    );
}

/// Line with a block cursor over the character at `cursor_pos` (a space past the end)
fn build_line_with_cursor(
    text: &str,
    cursor_pos: usize,
    base_style: Style,
    theme: &Theme,
) -> Line<'static> {
    let before: String = text.chars().take(cursor_pos).collect();
    let under = text.chars().nth(cursor_pos).unwrap_or(' ');
    let after: String = text.chars().skip(cursor_pos + 1).collect();

    let cursor_style =
        Style::default().fg(theme.bg_primary).bg(theme.fg_primary).add_modifier(Modifier::BOLD);

    let mut spans = Vec::with_capacity(3);
    if !before.is_empty() {
        spans.push(Span::styled(before, base_style));
    }
    spans.push(Span::styled(under.to_string(), cursor_style));
    if !after.is_empty() {
        spans.push(Span::styled(after, base_style));
    }
    Line::from(spans)
}
