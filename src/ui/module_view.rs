//! Module viewer: playback gauge, lesson material and resources

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Wrap},
};

use super::layout::{self, muted};
use crate::app::state::PlaybackView;
use crate::course::content::{ModuleContent, module_content};
use crate::course::{Chapter, Module};
use crate::theme::Theme;

const OPTION_LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Playback percentage to show for a module
pub fn displayed_progress(module: &Module, playback: &PlaybackView) -> u8 {
    if module.completed {
        return 100;
    }
    match playback.module_id.as_deref() {
        Some(id) if id == module.id => playback.progress,
        _ => 0,
    }
}

/// Lesson material rendered as lines
pub fn content_lines(content: &ModuleContent, theme: &Theme) -> Vec<Line<'static>> {
    let bullet = |text: &str, color: Color| {
        Line::from(vec![
            Span::styled("  • ", Style::default().fg(color)),
            Span::styled(text.to_string(), Style::default().fg(theme.fg_primary)),
        ])
    };

    let mut lines = Vec::new();
    match content {
        ModuleContent::Video { objectives, highlights } => {
            lines.push(layout::heading("Learning Objectives", theme));
            lines.extend(objectives.iter().map(|o| bullet(*o, theme.success)));
            lines.push(Line::from(""));
            lines.push(layout::heading("What You'll Learn", theme));
            lines.extend(highlights.iter().map(|h| bullet(*h, theme.kind_video)));
        }
        ModuleContent::Reading { sections, callout } => {
            lines.push(layout::heading("Reading Material", theme));
            for section in *sections {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    section.heading.to_string(),
                    Style::default().fg(theme.kind_reading).add_modifier(Modifier::BOLD),
                )));
                if !section.body.is_empty() {
                    lines.push(Line::from(Span::styled(
                        section.body.to_string(),
                        Style::default().fg(theme.fg_primary),
                    )));
                }
                lines.extend(section.bullets.iter().map(|b| bullet(*b, theme.kind_reading)));
            }
            if let Some((title, text)) = callout {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    format!("▌ {}", title),
                    Style::default().fg(theme.info).add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(Span::styled(
                    format!("▌ {}", text),
                    Style::default().fg(theme.fg_primary),
                )));
            }
        }
        ModuleContent::Interactive { scenario, tasks } => {
            lines.push(layout::heading("Interactive Exercise", theme));
            lines.push(Line::from(muted("Scenario:", theme)));
            lines.push(Line::from(Span::styled(
                scenario.to_string(),
                Style::default().fg(theme.fg_primary),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(muted("Your Task:", theme)));
            lines.extend(tasks.iter().map(|t| bullet(*t, theme.kind_interactive)));
        }
        ModuleContent::Quiz(question) => {
            lines.push(layout::heading("Knowledge Check", theme));
            lines.push(Line::from(Span::styled(
                question.question.to_string(),
                Style::default().fg(theme.fg_secondary),
            )));
            for (letter, option) in OPTION_LETTERS.iter().zip(question.options) {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {}) ", letter), Style::default().fg(theme.kind_quiz)),
                    Span::styled(option.to_string(), Style::default().fg(theme.fg_primary)),
                ]));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("Study Tip: {}", question.tip),
                Style::default().fg(theme.info),
            )));
        }
    }
    lines
}

#[allow(clippy::too_many_arguments)]
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    chapter: &Chapter,
    module: &Module,
    playback: &PlaybackView,
    has_next: bool,
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
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(inner);

    let kind = module.kind;
    let mut status = vec![
        Span::styled(
            format!(" {} {} ", kind.icon(), kind.label()),
            Style::default().fg(theme.bg_primary).bg(theme.kind_color(kind)),
        ),
        muted(format!("  {}", module.duration), theme),
    ];
    if module.completed {
        status.push(Span::styled("  ✓ Completed", Style::default().fg(theme.success)));
    }
    let header = vec![
        Line::from(Span::styled(
            module.title.clone(),
            Style::default().fg(theme.fg_secondary).add_modifier(Modifier::BOLD),
        )),
        Line::from(muted(module.content.clone(), theme)),
        Line::from(status),
    ];
    frame.render_widget(Paragraph::new(header).wrap(Wrap { trim: true }), rows[0]);

    let percent = displayed_progress(module, playback);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme.accent_primary).bg(theme.gauge_track))
        .percent(u16::from(percent))
        .label(format!("{}%", percent));
    frame.render_widget(gauge, rows[1]);

    let mut body = content_lines(module_content(module), theme);
    if !module.resources.is_empty() {
        body.push(Line::from(""));
        body.push(layout::heading("Resources", theme));
        for resource in &module.resources {
            body.push(Line::from(vec![
                Span::styled(format!("  ↗ {}", resource.title), Style::default().fg(theme.info)),
                muted(format!("  [{}]", resource.kind.label()), theme),
            ]));
            body.push(Line::from(muted(format!("    {}", resource.description), theme)));
            body.push(Line::from(muted(format!("    {}", resource.url), theme)));
        }
    }
    frame.render_widget(
        Paragraph::new(body).wrap(Wrap { trim: false }).scroll((scroll, 0)),
        rows[2],
    );

    let mut hints = Vec::new();
    if !module.completed {
        hints.push("c mark complete");
    }
    if has_next {
        hints.push("n next module");
    }
    hints.push("esc back to chapter");
    frame.render_widget(Paragraph::new(Line::from(muted(hints.join("  ·  "), theme))), rows[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::ModuleKind;
    use crate::course::content::default_content;

    fn module(completed: bool) -> Module {
        let mut module = Module::new("mod-1-1", "Overview", ModuleKind::Video, "", "15 min");
        module.completed = completed;
        module
    }

    #[test]
    fn completed_modules_show_full_progress() {
        assert_eq!(displayed_progress(&module(true), &PlaybackView::default()), 100);
    }

    #[test]
    fn progress_only_for_matching_playback() {
        let mut playback = PlaybackView::default();
        playback.begin("mod-1-1", 40);
        assert_eq!(displayed_progress(&module(false), &playback), 40);

        playback.begin("mod-9-9", 70);
        assert_eq!(displayed_progress(&module(false), &playback), 0);
    }

    #[test]
    fn quiz_lists_lettered_options() {
        let theme = Theme::default();
        let lines = content_lines(default_content(ModuleKind::Quiz), &theme);
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        for letter in ["A)", "B)", "C)", "D)"] {
            assert!(text.iter().any(|l| l.contains(letter)), "missing option {}", letter);
        }
        assert!(text.iter().any(|l| l.starts_with("Study Tip")));
    }

    #[test]
    fn every_kind_renders_something() {
        let theme = Theme::default();
        for kind in [ModuleKind::Video, ModuleKind::Reading, ModuleKind::Interactive, ModuleKind::Quiz]
        {
            assert!(content_lines(default_content(kind), &theme).len() > 2);
        }
    }
}
