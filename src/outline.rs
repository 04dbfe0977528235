//! Plain-text curriculum outline for the `chapters` command

use std::fmt::Write;

use textwrap::Options;

use crate::course::Chapter;

/// Render chapters, modules and homework as an indented outline wrapped to `width`
pub fn render(chapters: &[Chapter], width: usize) -> String {
    let width = width.max(20);
    let mut out = String::new();

    for (i, chapter) in chapters.iter().enumerate() {
        let number = chapter.number().unwrap_or(i + 1);
        let header = format!("{}. {} ({})", number, chapter.title, chapter.duration);
        let _ = writeln!(out, "{}", textwrap::fill(&header, Options::new(width).subsequent_indent("   ")));

        let description = Options::new(width).initial_indent("   ").subsequent_indent("   ");
        let _ = writeln!(out, "{}", textwrap::fill(&chapter.description, description));

        for module in &chapter.modules {
            let line = format!(
                "{} {} [{}, {}] {}",
                module.kind.icon(),
                module.title,
                module.kind.label(),
                module.duration,
                module.id
            );
            let opts = Options::new(width).initial_indent("     ").subsequent_indent("       ");
            let _ = writeln!(out, "{}", textwrap::fill(&line, opts));
        }
        for homework in &chapter.homework {
            let line = format!("✎ {} (due {}) {}", homework.title, homework.due_label(), homework.id);
            let opts = Options::new(width).initial_indent("     ").subsequent_indent("       ");
            let _ = writeln!(out, "{}", textwrap::fill(&line, opts));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::catalog::course_chapters;

    #[test]
    fn outline_lists_every_id() {
        let chapters = course_chapters();
        let text = render(&chapters, 100);
        for chapter in &chapters {
            for module in &chapter.modules {
                assert!(text.contains(&module.id), "missing {}", module.id);
            }
            for homework in &chapter.homework {
                assert!(text.contains(&homework.id), "missing {}", homework.id);
            }
        }
        assert!(text.starts_with("1. "));
    }

    #[test]
    fn outline_respects_width() {
        let text = render(&course_chapters(), 40);
        for line in text.lines() {
            assert!(textwrap::core::display_width(line) <= 40, "too wide: {:?}", line);
        }
    }
}
