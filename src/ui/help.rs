//! Key and command reference overlay

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use super::layout::{self, centered_rect};
use crate::theme::Theme;

const KEYS: &[(&str, &str)] = &[
    ("j/k ↑/↓", "move selection"),
    ("enter / l", "open selected chapter, module or assignment"),
    ("esc / h", "back to chapter"),
    ("H", "dashboard"),
    ("tab", "switch between sidebar and main panel"),
    ("[", "toggle sidebar"),
    ("c", "mark module complete"),
    ("n", "next module"),
    ("i", "edit homework answer"),
    ("s", "submit homework"),
    ("ctrl-d / ctrl-u", "scroll lesson"),
    ("R", "reset all progress"),
    ("q", "quit"),
];

const COMMANDS: &[(&str, &str)] = &[
    (":goto <id>", "open a chapter, module or homework by id"),
    (":attach <path>", "attach a file to the answer"),
    (":detach <n>", "remove attachment n"),
    (":submit", "submit the answer"),
    (":complete", "mark module complete"),
    (":dashboard", "dashboard"),
    (":reset", "reset all progress"),
    (":q", "quit"),
];

fn rows(entries: &[(&'static str, &'static str)], theme: &Theme) -> Vec<Line<'static>> {
    entries
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("  {:<18}", key), Style::default().fg(theme.accent_primary)),
                Span::styled(*desc, Style::default().fg(theme.fg_primary)),
            ])
        })
        .collect()
}

pub fn draw(frame: &mut Frame, area: Rect, theme: &Theme) {
    let overlay = centered_rect(70, 80, area);
    frame.render_widget(Clear, overlay);

    let block = layout::panel(" Help ", true, theme).style(Style::default().bg(theme.bg_secondary));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let mut lines = vec![layout::heading("Keys", theme)];
    lines.extend(rows(KEYS, theme));
    lines.push(Line::from(""));
    lines.push(layout::heading("Commands", theme));
    lines.extend(rows(COMMANDS, theme));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(theme.fg_muted).add_modifier(Modifier::ITALIC),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
