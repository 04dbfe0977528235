//! Application state definitions
//!
//! Everything the renderer needs besides the course itself: focus, list
//! selections, the homework draft, playback progress and the command line.

use std::collections::VecDeque;
use std::path::PathBuf;

use crate::course::Chapter;
use crate::progress::{Attachment, Submission};

/// Which screen is currently displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Main,
    Help,
}

/// Which panel receives list navigation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    #[default]
    Main,
}

/// A selectable row in the chapter overview
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChapterEntry {
    Module(String),
    Homework(String),
}

/// Rows of the chapter overview: modules first, then homework
pub fn chapter_entries(chapter: &Chapter) -> Vec<ChapterEntry> {
    chapter
        .modules
        .iter()
        .map(|m| ChapterEntry::Module(m.id.clone()))
        .chain(chapter.homework.iter().map(|h| ChapterEntry::Homework(h.id.clone())))
        .collect()
}

/// Cursor over a list whose length is only known at render time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    pub selected: usize,
}

impl ListCursor {
    pub fn down(&mut self, len: usize) {
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn top(&mut self) {
        self.selected = 0;
    }

    pub fn bottom(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// Keep the selection inside a list that may have shrunk
    pub fn clamp(&mut self, len: usize) {
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}

/// Sidebar visibility and selection
#[derive(Debug, Clone)]
pub struct SidebarState {
    pub visible: bool,
    pub cursor: ListCursor,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self { visible: true, cursor: ListCursor::default() }
    }
}

/// Homework answer being composed
#[derive(Debug, Clone, Default)]
pub struct SubmissionDraft {
    pub text: String,
    pub attachments: Vec<Attachment>,
    /// Keys go into the text while true
    pub editing: bool,
}

impl SubmissionDraft {
    pub fn insert_char(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn newline(&mut self) {
        self.text.push('\n');
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn attach(&mut self, path: impl Into<PathBuf>) -> &Attachment {
        self.attachments.push(Attachment::new(path));
        &self.attachments[self.attachments.len() - 1]
    }

    /// Remove an attachment by its 1-based position in the list
    pub fn detach(&mut self, position: usize) -> Option<Attachment> {
        if position == 0 || position > self.attachments.len() {
            return None;
        }
        Some(self.attachments.remove(position - 1))
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.attachments.is_empty()
    }

    pub fn to_submission(&self) -> Submission {
        self.attachments
            .iter()
            .cloned()
            .fold(Submission::new(self.text.trim_end()), Submission::with_attachment)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Simulated progress of the open module
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackView {
    /// Module the progress belongs to
    pub module_id: Option<String>,
    pub progress: u8,
}

impl PlaybackView {
    pub fn begin(&mut self, module_id: &str, progress: u8) {
        self.module_id = Some(module_id.to_string());
        self.progress = progress;
    }

    /// Apply a tick if it belongs to the tracked module. Returns false for stale ticks.
    pub fn apply(&mut self, module_id: &str, progress: u8) -> bool {
        if self.module_id.as_deref() != Some(module_id) {
            return false;
        }
        self.progress = progress.min(100);
        true
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Command line mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommandMode {
    /// Status line
    #[default]
    Normal,
    /// Accepting a `:` command
    Command,
}

/// State for the command line input
#[derive(Debug, Clone, Default)]
pub struct CommandLineState {
    pub mode: CommandMode,
    pub input: String,
    /// Cursor position in characters
    pub cursor: usize,
    /// Status or error message shown in normal mode
    pub message: Option<String>,
    pub is_error: bool,
    pub history: VecDeque<String>,
    history_index: Option<usize>,
}

impl CommandLineState {
    const MAX_HISTORY: usize = 100;

    pub fn enter_command_mode(&mut self) {
        self.mode = CommandMode::Command;
        self.input.clear();
        self.cursor = 0;
        self.message = None;
        self.history_index = None;
    }

    pub fn exit_input_mode(&mut self) {
        self.mode = CommandMode::Normal;
        self.input.clear();
        self.cursor = 0;
    }

    pub fn is_input_mode(&self) -> bool {
        self.mode == CommandMode::Command
    }

    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = false;
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = true;
    }

    pub fn clear_message(&mut self) {
        self.message = None;
        self.is_error = false;
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.input.char_indices().nth(char_idx).map(|(i, _)| i).unwrap_or(self.input.len())
    }

    fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.input.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.input.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn add_to_history(&mut self, cmd: String) {
        if cmd.is_empty() || self.history.back() == Some(&cmd) {
            return;
        }
        if self.history.len() >= Self::MAX_HISTORY {
            self.history.pop_front();
        }
        self.history.push_back(cmd);
    }

    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let index = match self.history_index {
            None => self.history.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.history_index = Some(index);
        self.input = self.history[index].clone();
        self.cursor = self.char_count();
    }

    pub fn history_down(&mut self) {
        let Some(i) = self.history_index else {
            return;
        };
        if i + 1 < self.history.len() {
            self.history_index = Some(i + 1);
            self.input = self.history[i + 1].clone();
            self.cursor = self.char_count();
        } else {
            self.history_index = None;
            self.input.clear();
            self.cursor = 0;
        }
    }
}

/// Full application state
#[derive(Debug, Default)]
pub struct AppState {
    pub screen: Screen,
    pub focus: Focus,
    pub sidebar: SidebarState,
    /// Selection in the main panel's list (dashboard chapters or chapter entries)
    pub main_cursor: ListCursor,
    /// Scroll offset of the module and homework panes
    pub scroll: u16,
    pub draft: SubmissionDraft,
    pub playback: PlaybackView,
    pub command_line: CommandLineState,
    /// Waiting for `y` to confirm a course reset
    pub confirm_reset: bool,
}

impl AppState {
    /// Per-view state that must not carry over when the view changes
    pub fn on_view_changed(&mut self) {
        self.main_cursor.top();
        self.scroll = 0;
        self.draft.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::catalog::course_chapters;
    use pretty_assertions::assert_eq;

    #[test]
    fn chapter_entries_list_modules_then_homework() {
        let chapters = course_chapters();
        let entries = chapter_entries(&chapters[0]);
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0], ChapterEntry::Module("mod-1-1".into()));
        assert_eq!(entries[4], ChapterEntry::Homework("hw-1-1".into()));
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut cursor = ListCursor::default();
        cursor.up();
        assert_eq!(cursor.selected, 0);
        cursor.down(2);
        cursor.down(2);
        assert_eq!(cursor.selected, 1);
        cursor.down(0);
        assert_eq!(cursor.selected, 1);
        cursor.clamp(1);
        assert_eq!(cursor.selected, 0);
        cursor.bottom(8);
        assert_eq!(cursor.selected, 7);
    }

    #[test]
    fn draft_builds_submission() {
        let mut draft = SubmissionDraft::default();
        assert!(draft.is_empty());
        for c in "Net income is $42k".chars() {
            draft.insert_char(c);
        }
        draft.newline();
        draft.attach("/tmp/w2.pdf");
        draft.attach("/tmp/1099.pdf");

        let submission = draft.to_submission();
        assert_eq!(submission.text, "Net income is $42k");
        assert_eq!(submission.attachments.len(), 2);
        assert_eq!(submission.attachments[1].name(), "1099.pdf");
    }

    #[test]
    fn detach_uses_one_based_positions() {
        let mut draft = SubmissionDraft::default();
        draft.attach("a.pdf");
        draft.attach("b.pdf");
        assert!(draft.detach(0).is_none());
        assert!(draft.detach(3).is_none());
        assert_eq!(draft.detach(1).map(|a| a.name()), Some("a.pdf".to_string()));
        assert_eq!(draft.attachments.len(), 1);
    }

    #[test]
    fn playback_ignores_ticks_for_other_modules() {
        let mut playback = PlaybackView::default();
        playback.begin("mod-1-1", 0);
        assert!(!playback.apply("mod-1-2", 50));
        assert_eq!(playback.progress, 0);
        assert!(playback.apply("mod-1-1", 30));
        assert_eq!(playback.progress, 30);
        playback.clear();
        assert!(!playback.apply("mod-1-1", 40));
    }

    #[test]
    fn history_navigation() {
        let mut cl = CommandLineState::default();
        cl.add_to_history("goto chapter-1".into());
        cl.add_to_history("goto chapter-1".into());
        cl.add_to_history("help".into());
        assert_eq!(cl.history.len(), 2);

        cl.history_up();
        assert_eq!(cl.input, "help");
        cl.history_up();
        assert_eq!(cl.input, "goto chapter-1");
        cl.history_up();
        assert_eq!(cl.input, "goto chapter-1");
        cl.history_down();
        assert_eq!(cl.input, "help");
        cl.history_down();
        assert_eq!(cl.input, "");
    }

    #[test]
    fn editing_handles_multibyte_input() {
        let mut cl = CommandLineState::default();
        cl.enter_command_mode();
        for c in "gö".chars() {
            cl.insert_char(c);
        }
        cl.move_left();
        cl.insert_char('x');
        assert_eq!(cl.input, "gxö");
        assert_eq!(cl.cursor, 2);
        cl.move_end();
        cl.delete_char();
        assert_eq!(cl.input, "gx");
    }
}
