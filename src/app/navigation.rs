//! Navigation state machine
//!
//! Tracks which view is active and which ids it focuses on. Transitions that
//! need to resolve an owning chapter read the live chapter list; an id that
//! does not resolve leaves the current view in place.

use crate::course::Chapter;
use crate::course::model::{chapter_of_homework, chapter_of_module};
use crate::error::CourseError;

/// The active view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Dashboard,
    Chapter { chapter_id: String },
    Module { chapter_id: String, module_id: String },
    Homework { chapter_id: String, homework_id: String },
}

impl View {
    /// Chapter in focus, if any
    pub fn chapter_id(&self) -> Option<&str> {
        match self {
            View::Dashboard => None,
            View::Chapter { chapter_id }
            | View::Module { chapter_id, .. }
            | View::Homework { chapter_id, .. } => Some(chapter_id.as_str()),
        }
    }

    /// Module in focus, if this is a module view
    pub fn module_id(&self) -> Option<&str> {
        match self {
            View::Module { module_id, .. } => Some(module_id.as_str()),
            _ => None,
        }
    }

    /// Homework in focus, if this is a homework view
    pub fn homework_id(&self) -> Option<&str> {
        match self {
            View::Homework { homework_id, .. } => Some(homework_id.as_str()),
            _ => None,
        }
    }

    /// Short label for the status line
    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Chapter { .. } => "chapter",
            View::Module { .. } => "module",
            View::Homework { .. } => "homework",
        }
    }
}

/// Owns the current [`View`] and applies transitions
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    view: View,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    fn set(&mut self, view: View) {
        tracing::debug!(from = self.view.label(), to = view.label(), "Navigate");
        self.view = view;
    }

    /// Open a chapter overview. The id is not checked; a stale id renders a placeholder.
    pub fn select_chapter(&mut self, chapter_id: &str) {
        self.set(View::Chapter { chapter_id: chapter_id.to_string() });
    }

    /// Open a module, resolving its chapter. Returns false if no chapter owns it.
    pub fn start_module(&mut self, chapters: &[Chapter], module_id: &str) -> bool {
        let Some(chapter) = chapter_of_module(chapters, module_id) else {
            tracing::warn!(module = module_id, "No chapter contains module");
            return false;
        };
        self.set(View::Module { chapter_id: chapter.id.clone(), module_id: module_id.to_string() });
        true
    }

    /// Open a homework assignment, resolving its chapter
    pub fn start_homework(&mut self, chapters: &[Chapter], homework_id: &str) -> bool {
        let Some(chapter) = chapter_of_homework(chapters, homework_id) else {
            tracing::warn!(homework = homework_id, "No chapter contains homework");
            return false;
        };
        self.set(View::Homework {
            chapter_id: chapter.id.clone(),
            homework_id: homework_id.to_string(),
        });
        true
    }

    /// Module/homework view back to its chapter. No-op elsewhere.
    pub fn back_to_chapter(&mut self) -> bool {
        match &self.view {
            View::Module { chapter_id, .. } | View::Homework { chapter_id, .. } => {
                let chapter_id = chapter_id.clone();
                self.set(View::Chapter { chapter_id });
                true
            }
            _ => false,
        }
    }

    pub fn back_to_dashboard(&mut self) {
        self.set(View::Dashboard);
    }

    /// The module after the current one in the same chapter
    pub fn next_module<'a>(&self, chapters: &'a [Chapter]) -> Option<&'a crate::course::Module> {
        let View::Module { chapter_id, module_id } = &self.view else {
            return None;
        };
        let chapter = chapters.iter().find(|c| &c.id == chapter_id)?;
        let index = chapter.modules.iter().position(|m| &m.id == module_id)?;
        chapter.modules.get(index + 1)
    }

    pub fn has_next_module(&self, chapters: &[Chapter]) -> bool {
        self.next_module(chapters).is_some()
    }

    /// Advance to the next module. No-op on the last module or outside a module view.
    pub fn advance_module(&mut self, chapters: &[Chapter]) -> bool {
        let Some(next) = self.next_module(chapters) else {
            return false;
        };
        let next_id = next.id.clone();
        if let View::Module { chapter_id, .. } = &self.view {
            let chapter_id = chapter_id.clone();
            self.set(View::Module { chapter_id, module_id: next_id });
        }
        true
    }

    /// Jump to whatever an id names: a chapter, module or homework
    pub fn goto(&mut self, chapters: &[Chapter], id: &str) -> Result<(), CourseError> {
        if chapters.iter().any(|c| c.id == id) {
            self.select_chapter(id);
        } else if chapter_of_module(chapters, id).is_some() {
            self.start_module(chapters, id);
        } else if chapter_of_homework(chapters, id).is_some() {
            self.start_homework(chapters, id);
        } else {
            return Err(CourseError::UnknownId(id.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::catalog::course_chapters;
    use pretty_assertions::assert_eq;

    fn module_view(chapter: &str, module: &str) -> View {
        View::Module { chapter_id: chapter.into(), module_id: module.into() }
    }

    #[test]
    fn starts_on_dashboard() {
        assert_eq!(Navigator::new().view(), &View::Dashboard);
    }

    #[test]
    fn start_module_resolves_chapter() {
        let chapters = course_chapters();
        let mut nav = Navigator::new();
        assert!(nav.start_module(&chapters, "mod-3-2"));
        assert_eq!(nav.view(), &module_view("chapter-3", "mod-3-2"));
    }

    #[test]
    fn start_unknown_module_keeps_view() {
        let chapters = course_chapters();
        let mut nav = Navigator::new();
        nav.select_chapter("chapter-2");
        let before = nav.view().clone();

        assert!(!nav.start_module(&chapters, "nonexistent-id"));
        assert_eq!(nav.view(), &before);
    }

    #[test]
    fn start_homework_resolves_chapter() {
        let chapters = course_chapters();
        let mut nav = Navigator::new();
        assert!(nav.start_homework(&chapters, "hw-5-1"));
        assert_eq!(
            nav.view(),
            &View::Homework { chapter_id: "chapter-5".into(), homework_id: "hw-5-1".into() }
        );
        assert!(!nav.start_homework(&chapters, "hw-0-0"));
    }

    #[test]
    fn back_to_chapter_from_module_and_homework() {
        let chapters = course_chapters();
        let mut nav = Navigator::new();
        nav.start_module(&chapters, "mod-1-2");
        assert!(nav.back_to_chapter());
        assert_eq!(nav.view(), &View::Chapter { chapter_id: "chapter-1".into() });

        nav.start_homework(&chapters, "hw-2-1");
        assert!(nav.back_to_chapter());
        assert_eq!(nav.view(), &View::Chapter { chapter_id: "chapter-2".into() });
    }

    #[test]
    fn back_to_chapter_is_noop_on_dashboard() {
        let mut nav = Navigator::new();
        assert!(!nav.back_to_chapter());
        assert_eq!(nav.view(), &View::Dashboard);
    }

    #[test]
    fn next_module_advances_within_chapter() {
        let chapters = course_chapters();
        let mut nav = Navigator::new();
        nav.start_module(&chapters, "mod-1-3");
        assert!(nav.has_next_module(&chapters));
        assert!(nav.advance_module(&chapters));
        assert_eq!(nav.view(), &module_view("chapter-1", "mod-1-4"));
    }

    #[test]
    fn next_module_from_last_is_noop() {
        let chapters = course_chapters();
        let mut nav = Navigator::new();
        nav.start_module(&chapters, "mod-7-5");
        assert!(!nav.has_next_module(&chapters));
        assert!(!nav.advance_module(&chapters));
        assert_eq!(nav.view(), &module_view("chapter-7", "mod-7-5"));
    }

    #[test]
    fn next_module_outside_module_view_is_noop() {
        let chapters = course_chapters();
        let mut nav = Navigator::new();
        nav.select_chapter("chapter-1");
        assert!(!nav.advance_module(&chapters));
        assert_eq!(nav.view(), &View::Chapter { chapter_id: "chapter-1".into() });
    }

    #[test]
    fn goto_resolves_each_kind_of_id() {
        let chapters = course_chapters();
        let mut nav = Navigator::new();

        nav.goto(&chapters, "chapter-4").unwrap();
        assert_eq!(nav.view(), &View::Chapter { chapter_id: "chapter-4".into() });

        nav.goto(&chapters, "mod-6-2").unwrap();
        assert_eq!(nav.view(), &module_view("chapter-6", "mod-6-2"));

        nav.goto(&chapters, "hw-8-1").unwrap();
        assert_eq!(nav.view().homework_id(), Some("hw-8-1"));

        let err = nav.goto(&chapters, "bogus").unwrap_err();
        assert_eq!(err, CourseError::UnknownId("bogus".into()));
        assert_eq!(nav.view().homework_id(), Some("hw-8-1"));
    }

    #[test]
    fn select_chapter_does_not_validate() {
        let mut nav = Navigator::new();
        nav.select_chapter("chapter-404");
        assert_eq!(nav.view().chapter_id(), Some("chapter-404"));
    }
}
