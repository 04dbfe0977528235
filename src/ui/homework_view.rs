//! Homework viewer: brief, submission draft and grade

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::layout::{self, muted};
use crate::app::state::SubmissionDraft;
use crate::course::content::homework_brief;
use crate::course::{Chapter, HomeworkAssignment};
use crate::theme::Theme;

/// Wrap the draft to `width` columns, keeping the learner's line breaks
pub fn wrap_draft(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    text.split('\n')
        .flat_map(|paragraph| {
            if paragraph.is_empty() {
                vec![String::new()]
            } else {
                textwrap::wrap(paragraph, width).into_iter().map(|l| l.into_owned()).collect()
            }
        })
        .collect()
}

/// Status line for an assignment
pub fn submission_status(homework: &HomeworkAssignment) -> String {
    match (homework.completed, homework.submitted_at, homework.grade) {
        (true, Some(at), Some(grade)) => {
            format!("Submitted {} · Grade: {}%", at.format("%b %-d, %Y %H:%M UTC"), grade)
        }
        (true, Some(at), None) => format!("Submitted {}", at.format("%b %-d, %Y %H:%M UTC")),
        (true, None, _) => "Submitted".to_string(),
        (false, ..) => format!("Due {}", homework.due_label()),
    }
}

pub fn draw(
    frame: &mut Frame,
    area: Rect,
    chapter: &Chapter,
    homework: &HomeworkAssignment,
    draft: &SubmissionDraft,
    scroll: u16,
    theme: &Theme,
) {
    let title = format!(" {} ", chapter.title);
    let block = layout::panel(&title, true, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(5),
            Constraint::Length(8),
            Constraint::Length(1),
        ])
        .split(inner);

    let status_color = match homework.grade {
        Some(grade) if homework.completed => theme.grade_color(grade),
        _ => theme.fg_muted,
    };
    let header = vec![
        Line::from(Span::styled(
            homework.title.clone(),
            Style::default().fg(theme.fg_secondary).add_modifier(Modifier::BOLD),
        )),
        Line::from(muted(homework.description.clone(), theme)),
        Line::from(vec![
            Span::styled(
                format!(" {} ", homework.kind.label()),
                Style::default().fg(theme.bg_primary).bg(theme.warning),
            ),
            Span::styled(format!("  {}", submission_status(homework)), Style::default().fg(status_color)),
        ]),
    ];
    frame.render_widget(Paragraph::new(header).wrap(Wrap { trim: true }), rows[0]);

    let brief = homework_brief(homework.kind);
    let mut body = vec![layout::heading(brief.heading, theme)];
    for line in brief.scenario {
        body.push(Line::from(vec![
            Span::styled("  • ", Style::default().fg(theme.warning)),
            Span::styled(line.to_string(), Style::default().fg(theme.fg_primary)),
        ]));
    }
    body.push(Line::from(""));
    body.push(Line::from(Span::styled(brief.prompt, Style::default().fg(theme.info))));
    if let Some(feedback) = &homework.feedback {
        body.push(Line::from(""));
        body.push(layout::heading("Instructor Feedback", theme));
        body.push(Line::from(muted(feedback.clone(), theme)));
    }
    frame.render_widget(Paragraph::new(body).wrap(Wrap { trim: false }).scroll((scroll, 0)), rows[1]);

    draw_draft(frame, rows[2], draft, brief.accepts_files, theme);

    let hint = if draft.editing {
        "typing · esc to stop editing"
    } else if homework.completed {
        "i edit answer · s resubmit · :attach <path> · esc back to chapter"
    } else {
        "i edit answer · s submit · :attach <path> · esc back to chapter"
    };
    frame.render_widget(Paragraph::new(Line::from(muted(hint, theme))), rows[3]);
}

fn draw_draft(
    frame: &mut Frame,
    area: Rect,
    draft: &SubmissionDraft,
    accepts_files: bool,
    theme: &Theme,
) {
    let border = if draft.editing { theme.border_focused } else { theme.border };
    let block = Block::default()
        .title(" Your Answer ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(28)])
        .split(inner);

    let mut text: Vec<Line> = if draft.text.is_empty() && !draft.editing {
        vec![Line::from(muted("Press i to start writing", theme))]
    } else {
        wrap_draft(&draft.text, usize::from(columns[0].width))
            .into_iter()
            .map(|l| Line::from(Span::styled(l, Style::default().fg(theme.fg_primary))))
            .collect()
    };
    if draft.editing {
        match text.last_mut() {
            Some(last) => last.push_span(Span::styled("▏", Style::default().fg(theme.accent_primary))),
            None => text.push(Line::from("▏")),
        }
    }
    // Show the tail of long answers
    let overflow = text.len().saturating_sub(usize::from(columns[0].height));
    let scroll = u16::try_from(overflow).unwrap_or(0);
    frame.render_widget(Paragraph::new(text).scroll((scroll, 0)), columns[0]);

    let mut files = vec![Line::from(muted(
        if accepts_files { "Files" } else { "Files (optional)" },
        theme,
    ))];
    if draft.attachments.is_empty() {
        files.push(Line::from(muted(" none", theme)));
    }
    for (i, attachment) in draft.attachments.iter().enumerate() {
        files.push(Line::from(vec![
            muted(format!(" {}. ", i + 1), theme),
            Span::styled(attachment.name(), Style::default().fg(theme.info)),
        ]));
    }
    frame.render_widget(Paragraph::new(files), columns[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::HomeworkKind;
    use chrono::{TimeZone, Utc};

    #[test]
    fn wrap_keeps_paragraph_breaks() {
        let lines = wrap_draft("filing status is single\n\ntotal", 10);
        assert_eq!(lines, vec!["filing", "status is", "single", "", "total"]);
    }

    #[test]
    fn wrap_handles_zero_width() {
        assert!(!wrap_draft("abc", 0).is_empty());
    }

    #[test]
    fn status_reflects_submission() {
        let mut hw = HomeworkAssignment::new(
            "hw-1-1",
            "Form 1040 Practice",
            "",
            HomeworkKind::FormPractice,
            "2024-02-15",
        );
        assert_eq!(submission_status(&hw), "Due Feb 15, 2024");

        hw.completed = true;
        hw.submitted_at = Some(Utc.with_ymd_and_hms(2024, 2, 10, 9, 30, 0).unwrap());
        hw.grade = Some(91);
        assert_eq!(submission_status(&hw), "Submitted Feb 10, 2024 09:30 UTC · Grade: 91%");
    }
}
