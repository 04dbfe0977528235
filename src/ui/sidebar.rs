//! Chapter sidebar with overall progress and reference links

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::layout::{self, muted, progress_line};
use crate::app::navigation::View;
use crate::app::state::AppState;
use crate::course::Chapter;
use crate::course::catalog::{COURSE_TITLE, REFERENCE_LINKS};
use crate::progress::aggregates::{chapter_percent, overall_progress};
use crate::theme::Theme;

const STATUS_COMPLETED: &str = "✓";

/// Status column for a chapter row: a check mark or the chapter number
pub fn chapter_marker(chapter: &Chapter, position: usize) -> String {
    if chapter.completed {
        STATUS_COMPLETED.to_string()
    } else {
        chapter.number().unwrap_or(position + 1).to_string()
    }
}

/// Draw the sidebar
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    chapters: &[Chapter],
    view: &View,
    theme: &Theme,
    focused: bool,
) {
    let block = layout::panel(" Course ", focused, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let bar_width = usize::from(inner.width.saturating_sub(6)).max(4);
    let done = chapters.iter().filter(|c| c.completed).count();

    let mut lines = vec![
        Line::from(Span::styled(
            COURSE_TITLE,
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(muted(format!("{}/{} chapters", done, chapters.len()), theme)),
        progress_line(overall_progress(chapters), bar_width, theme),
        Line::from(""),
        layout::heading("CHAPTERS", theme),
    ];

    let current = view.chapter_id();
    for (i, chapter) in chapters.iter().enumerate() {
        let marker = chapter_marker(chapter, i);
        let marker_style = if chapter.completed {
            Style::default().fg(theme.success)
        } else {
            Style::default().fg(theme.fg_muted)
        };

        let title_style = if i == state.sidebar.cursor.selected && focused {
            layout::selected_style(true, theme)
        } else if current == Some(chapter.id.as_str()) {
            Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_primary)
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{:>2} ", marker), marker_style),
            Span::styled(chapter.title.clone(), title_style),
        ]));

        let percent = chapter_percent(chapter);
        let detail = if percent > 0 && !chapter.completed {
            format!("   {} · {} modules · {}%", chapter.duration, chapter.modules.len(), percent)
        } else {
            format!("   {} · {} modules", chapter.duration, chapter.modules.len())
        };
        lines.push(Line::from(muted(detail, theme)));
    }

    lines.push(Line::from(""));
    lines.push(layout::heading("QUICK LINKS", theme));
    for link in REFERENCE_LINKS {
        lines.push(Line::from(Span::styled(
            format!(" ↗ {}", link.title),
            Style::default().fg(theme.info),
        )));
        lines.push(Line::from(muted(format!("   {}", link.url), theme)));
    }

    // Keep the selected chapter on screen
    let selected_line = 5 + state.sidebar.cursor.selected * 2;
    let height = usize::from(inner.height);
    let scroll = selected_line.saturating_sub(height.saturating_sub(2));
    let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);

    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::catalog::course_chapters;

    #[test]
    fn marker_is_number_until_complete() {
        let mut chapters = course_chapters();
        assert_eq!(chapter_marker(&chapters[2], 2), "3");

        for module in &mut chapters[2].modules {
            module.completed = true;
        }
        chapters[2].recompute_progress();
        assert_eq!(chapter_marker(&chapters[2], 2), STATUS_COMPLETED);
    }

    #[test]
    fn marker_falls_back_to_position() {
        let chapter = Chapter::new("intro", "Intro", "", "");
        assert_eq!(chapter_marker(&chapter, 0), "1");
    }
}
