//! Chapter overview: header, progress, modules and homework

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::layout::{self, muted, progress_line};
use crate::app::state::AppState;
use crate::course::{Chapter, HomeworkAssignment, Module};
use crate::progress::aggregates::chapter_percent;
use crate::theme::Theme;

/// Action label for a row, as offered to the learner
pub fn action_label(completed: bool, homework: bool) -> &'static str {
    match (completed, homework) {
        (true, _) => "Review",
        (false, false) => "Start",
        (false, true) => "Start Assignment",
    }
}

pub fn draw(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    chapter: &Chapter,
    position: usize,
    theme: &Theme,
    focused: bool,
) {
    let number = chapter.number().unwrap_or(position + 1);
    let title = format!(" Chapter {} ", number);
    let block = layout::panel(&title, focused, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(4), Constraint::Length(5)])
        .split(inner);

    let bar_width = usize::from(rows[0].width.saturating_sub(8)).clamp(4, 40);
    let header = vec![
        Line::from(Span::styled(
            chapter.title.clone(),
            Style::default().fg(theme.fg_secondary).add_modifier(Modifier::BOLD),
        )),
        Line::from(muted(chapter.description.clone(), theme)),
        Line::from(muted(
            format!(
                "{} · {} modules · {} assignment(s)",
                chapter.duration,
                chapter.modules.len(),
                chapter.homework.len()
            ),
            theme,
        )),
        progress_line(chapter_percent(chapter), bar_width, theme),
    ];
    frame.render_widget(Paragraph::new(header).wrap(Wrap { trim: true }), rows[0]);

    let selected = state.main_cursor.selected;
    let mut lines = vec![layout::heading("Learning Modules", theme)];
    for (i, module) in chapter.modules.iter().enumerate() {
        lines.push(module_row(module, i == selected, focused, theme));
    }
    lines.push(Line::from(""));
    lines.push(layout::heading("Homework Assignments", theme));
    for (i, homework) in chapter.homework.iter().enumerate() {
        let row = chapter.modules.len() + i;
        lines.push(homework_row(homework, row == selected, focused, theme));
    }

    // Keep the selection on screen; headings add one line before modules and two before homework
    let selected_line = if selected < chapter.modules.len() { selected + 1 } else { selected + 3 };
    let height = usize::from(rows[1].height);
    let scroll = u16::try_from(selected_line.saturating_sub(height.saturating_sub(1))).unwrap_or(0);
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), rows[1]);

    draw_selection_detail(frame, rows[2], chapter, selected, theme);
}

fn module_row(module: &Module, selected: bool, focused: bool, theme: &Theme) -> Line<'static> {
    let check = if module.completed { "✓" } else { " " };
    let title_style = if selected {
        layout::selected_style(focused, theme)
    } else {
        Style::default().fg(theme.fg_primary)
    };

    let mut spans = vec![
        Span::styled(format!(" {} ", check), Style::default().fg(theme.success)),
        Span::styled(
            format!("{} ", module.kind.icon()),
            Style::default().fg(theme.kind_color(module.kind)),
        ),
        Span::styled(module.title.clone(), title_style),
        muted(format!("  {} · {}", module.duration, module.kind.label()), theme),
    ];
    if !module.resources.is_empty() {
        spans.push(muted(format!(" · {} resources", module.resources.len()), theme));
    }
    spans.push(Span::styled(
        format!("  [{}]", action_label(module.completed, false)),
        Style::default().fg(theme.accent_secondary),
    ));
    Line::from(spans)
}

fn homework_row(
    homework: &HomeworkAssignment,
    selected: bool,
    focused: bool,
    theme: &Theme,
) -> Line<'static> {
    let check = if homework.completed { "✓" } else { " " };
    let title_style = if selected {
        layout::selected_style(focused, theme)
    } else {
        Style::default().fg(theme.fg_primary)
    };

    let mut spans = vec![
        Span::styled(format!(" {} ", check), Style::default().fg(theme.success)),
        Span::styled("✎ ", Style::default().fg(theme.warning)),
        Span::styled(homework.title.clone(), title_style),
        muted(format!("  Due {} · {}", homework.due_label(), homework.kind.label()), theme),
    ];
    if let Some(grade) = homework.grade {
        spans.push(Span::styled(
            format!("  Grade: {}%", grade),
            Style::default().fg(theme.grade_color(grade)).add_modifier(Modifier::BOLD),
        ));
    }
    spans.push(Span::styled(
        format!("  [{}]", action_label(homework.completed, true)),
        Style::default().fg(theme.accent_secondary),
    ));
    Line::from(spans)
}

/// Description, resources or feedback of the selected row
fn draw_selection_detail(
    frame: &mut Frame,
    area: Rect,
    chapter: &Chapter,
    selected: usize,
    theme: &Theme,
) {
    let mut lines = Vec::new();
    if let Some(module) = chapter.modules.get(selected) {
        lines.push(Line::from(Span::styled(
            module.content.clone(),
            Style::default().fg(theme.fg_primary),
        )));
        if !module.resources.is_empty() {
            lines.push(Line::from(muted("Related Resources:", theme)));
            for resource in &module.resources {
                lines.push(Line::from(vec![
                    Span::styled(format!(" ↗ {}", resource.title), Style::default().fg(theme.info)),
                    muted(format!("  {}", resource.url), theme),
                ]));
            }
        }
    } else if let Some(homework) = chapter.homework.get(selected - chapter.modules.len()) {
        lines.push(Line::from(Span::styled(
            homework.description.clone(),
            Style::default().fg(theme.fg_primary),
        )));
        if let Some(feedback) = &homework.feedback {
            lines.push(Line::from(muted("Instructor Feedback:", theme)));
            lines.push(Line::from(muted(feedback.clone(), theme)));
        }
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_labels() {
        assert_eq!(action_label(false, false), "Start");
        assert_eq!(action_label(true, false), "Review");
        assert_eq!(action_label(false, true), "Start Assignment");
        assert_eq!(action_label(true, true), "Review");
    }
}
