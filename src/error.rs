//! Error types for course lookups and progress updates

use thiserror::Error;

/// Errors raised when an id carried in navigation state or a command does
/// not resolve against the live course
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CourseError {
    /// No chapter with this id
    #[error("Chapter not found: {0}")]
    ChapterNotFound(String),

    /// The chapter exists but has no module with this id
    #[error("Module not found: {module_id} (in {chapter_id})")]
    ModuleNotFound {
        /// Chapter that was searched
        chapter_id: String,
        /// Module id that did not resolve
        module_id: String,
    },

    /// The chapter exists but has no homework with this id
    #[error("Homework not found: {homework_id} (in {chapter_id})")]
    HomeworkNotFound {
        /// Chapter that was searched
        chapter_id: String,
        /// Homework id that did not resolve
        homework_id: String,
    },

    /// Id does not name any chapter, module or homework
    #[error("Unknown id: {0}")]
    UnknownId(String),

    /// The current view has no entity of this kind in focus
    #[error("No {0} is open")]
    NotOpen(&'static str),
}

impl CourseError {
    /// Short placeholder title shown in place of a missing view
    pub fn placeholder(&self) -> &'static str {
        match self {
            CourseError::ChapterNotFound(_) => "Chapter not found",
            CourseError::ModuleNotFound { .. } => "Module not found",
            CourseError::HomeworkNotFound { .. } => "Homework not found",
            CourseError::UnknownId(_) => "Nothing found",
            CourseError::NotOpen(_) => "Nothing open",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_not_found_message_names_both_ids() {
        let err = CourseError::ModuleNotFound {
            chapter_id: "chapter-1".into(),
            module_id: "mod-9-9".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("mod-9-9"));
        assert!(msg.contains("chapter-1"));
    }

    #[test]
    fn placeholder_matches_variant() {
        assert_eq!(CourseError::ChapterNotFound("x".into()).placeholder(), "Chapter not found");
        assert_eq!(CourseError::UnknownId("x".into()).placeholder(), "Nothing found");
        assert_eq!(CourseError::NotOpen("module").placeholder(), "Nothing open");
    }

    #[test]
    fn not_open_names_the_kind() {
        assert_eq!(CourseError::NotOpen("homework").to_string(), "No homework is open");
    }
}
