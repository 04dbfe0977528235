//! Progress dashboard

use chrono::Utc;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::layout::{self, muted, progress_line};
use crate::app::intent::Course;
use crate::app::state::AppState;
use crate::progress::{DashboardMetrics, UserProgress};
use crate::progress::activity::{ActivityKind, time_ago};
use crate::progress::aggregates::chapter_percent;
use crate::theme::Theme;

const RECENT_ACTIVITY: usize = 5;

/// Percentage of `done` over `total`, 0 when there is nothing to do
fn ratio(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (100.0 * done as f64 / total as f64).round() as u8
}

/// Title, value and bar percentage of each summary card
pub fn cards(metrics: &DashboardMetrics, user: &UserProgress) -> [(&'static str, String, u8); 4] {
    [
        ("Overall Progress", format!("{}%", user.overall_progress), user.overall_progress),
        (
            "Modules",
            format!("{}/{}", metrics.completed_modules, metrics.total_modules),
            ratio(metrics.completed_modules, metrics.total_modules),
        ),
        (
            "Homework",
            format!("{}/{}", metrics.completed_homework, metrics.total_homework),
            ratio(metrics.completed_homework, metrics.total_homework),
        ),
        ("Average Grade", format!("{}%", metrics.average_grade), metrics.average_grade),
    ]
}

/// Closing line of the certificate panel, if any
pub fn certificate_banner(metrics: &DashboardMetrics, user: &UserProgress) -> Option<&'static str> {
    if user.certificate_earned {
        Some("Certificate earned")
    } else if metrics.certificate_eligible() {
        Some("All requirements met, certificate pending review")
    } else {
        None
    }
}

pub fn draw(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    course: &Course,
    user: &UserProgress,
    theme: &Theme,
    focused: bool,
) {
    let title = format!(" Progress Dashboard · {} ", user.user_id);
    let block = layout::panel(&title, focused, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let metrics = course.metrics();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(6), Constraint::Length(8)])
        .split(inner);

    draw_cards(frame, rows[0], &metrics, user, theme);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);
    draw_chapter_progress(frame, middle[0], state, course, theme, focused);
    draw_achievements(frame, middle[1], &metrics, theme);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[2]);
    draw_activity(frame, bottom[0], course, theme);
    draw_certificate(frame, bottom[1], &metrics, user, theme);
}

fn draw_cards(
    frame: &mut Frame,
    area: Rect,
    metrics: &DashboardMetrics,
    user: &UserProgress,
    theme: &Theme,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for ((title, value, percent), column) in cards(metrics, user).into_iter().zip(columns.iter()) {
        let block = Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border));
        let inner = block.inner(*column);
        frame.render_widget(block, *column);

        let bar_width = usize::from(inner.width.saturating_sub(5)).max(3);
        let text = vec![
            Line::from(Span::styled(
                value,
                Style::default().fg(theme.fg_secondary).add_modifier(Modifier::BOLD),
            )),
            progress_line(percent, bar_width, theme),
        ];
        frame.render_widget(Paragraph::new(text), inner);
    }
}

fn draw_chapter_progress(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    course: &Course,
    theme: &Theme,
    focused: bool,
) {
    let block = Block::default()
        .title(" Chapter Progress ")
        .borders(Borders::TOP)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let bar_width = 12;
    let title_width = usize::from(inner.width).saturating_sub(bar_width + 10).max(8);

    let lines: Vec<Line> = course
        .chapters()
        .iter()
        .enumerate()
        .map(|(i, chapter)| {
            let title: String = chapter.title.chars().take(title_width).collect();
            let title_style = if i == state.main_cursor.selected {
                layout::selected_style(focused, theme)
            } else if chapter.completed {
                Style::default().fg(theme.success)
            } else {
                Style::default().fg(theme.fg_primary)
            };
            let mut spans = vec![Span::styled(format!("{:<width$} ", title, width = title_width), title_style)];
            spans.extend(progress_line(chapter_percent(chapter), bar_width, theme).spans);
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_achievements(frame: &mut Frame, area: Rect, metrics: &DashboardMetrics, theme: &Theme) {
    let block = Block::default()
        .title(" Achievements ")
        .borders(Borders::TOP)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    for achievement in metrics.achievements() {
        let (icon, style) = if achievement.earned {
            ("★", Style::default().fg(theme.warning).add_modifier(Modifier::BOLD))
        } else {
            ("☆", Style::default().fg(theme.fg_muted))
        };
        lines.push(Line::from(Span::styled(format!("{} {}", icon, achievement.title), style)));
        lines.push(Line::from(muted(format!("  {}", achievement.description), theme)));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_activity(frame: &mut Frame, area: Rect, course: &Course, theme: &Theme) {
    let block = Block::default()
        .title(" Recent Activity ")
        .borders(Borders::TOP)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let activity = course.activity();
    if activity.is_empty() {
        let hint = Paragraph::new(Line::from(muted(
            "Nothing yet. Open a module and press c when you finish it.",
            theme,
        )));
        frame.render_widget(hint, inner);
        return;
    }

    let now = Utc::now();
    let lines: Vec<Line> = activity
        .recent(RECENT_ACTIVITY)
        .map(|entry| {
            let color = match entry.kind {
                ActivityKind::ModuleCompleted => theme.kind_reading,
                ActivityKind::ChapterCompleted => theme.success,
                ActivityKind::HomeworkSubmitted => theme.warning,
            };
            Line::from(vec![
                Span::styled("● ", Style::default().fg(color)),
                Span::styled(entry.summary(), Style::default().fg(theme.fg_primary)),
                muted(format!("  {}", time_ago(entry.at, now)), theme),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_certificate(
    frame: &mut Frame,
    area: Rect,
    metrics: &DashboardMetrics,
    user: &UserProgress,
    theme: &Theme,
) {
    let block = Block::default()
        .title(" Certificate Progress ")
        .borders(Borders::TOP)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = metrics
        .certificate_requirements()
        .iter()
        .map(|req| {
            let (icon, color) = if req.met { ("✓", theme.success) } else { ("○", theme.fg_muted) };
            Line::from(vec![
                Span::styled(format!("{} ", icon), Style::default().fg(color)),
                Span::styled(req.label.clone(), Style::default().fg(theme.fg_primary)),
                muted(format!("  {}", req.status), theme),
            ])
        })
        .collect();

    if let Some(banner) = certificate_banner(metrics, user) {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            banner,
            Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
        )));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}
