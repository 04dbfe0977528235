//! Homework submissions and the grading seam
//!
//! Grading is mocked: [`RandomGrader`] hands out a passing grade without
//! looking at the submission. A rubric-based grader can replace it through
//! the [`Grader`] trait.

use std::path::PathBuf;

use rand::Rng;

/// Lowest grade the mock grader will assign
pub const MIN_MOCK_GRADE: u8 = 80;
/// Highest grade the mock grader will assign
pub const MAX_MOCK_GRADE: u8 = 100;

/// An opaque file handle attached to a submission. The bytes are never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub path: PathBuf,
}

impl Attachment {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File name for display, or the whole path if it has none
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// What the learner hands in for an assignment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    /// Free-text answer
    pub text: String,
    /// Attached files
    pub attachments: Vec<Attachment>,
}

impl Submission {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), attachments: Vec::new() }
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Word count of the text answer
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Assigns a grade (0-100) to a submission
pub trait Grader: Send {
    fn grade(&mut self, submission: &Submission) -> u8;
}

/// Mock grader: uniform random grade in [80, 100]
#[derive(Debug, Default)]
pub struct RandomGrader;

impl Grader for RandomGrader {
    fn grade(&mut self, _submission: &Submission) -> u8 {
        rand::thread_rng().gen_range(MIN_MOCK_GRADE..=MAX_MOCK_GRADE)
    }
}

/// Always returns the same grade
#[derive(Debug, Clone, Copy)]
pub struct FixedGrader(pub u8);

impl Grader for FixedGrader {
    fn grade(&mut self, _submission: &Submission) -> u8 {
        self.0.min(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_grades_stay_in_range() {
        let mut grader = RandomGrader;
        let submission = Submission::new("answer");
        for _ in 0..500 {
            let grade = grader.grade(&submission);
            assert!((MIN_MOCK_GRADE..=MAX_MOCK_GRADE).contains(&grade));
        }
    }

    #[test]
    fn fixed_grader_clamps_to_100() {
        assert_eq!(FixedGrader(120).grade(&Submission::default()), 100);
        assert_eq!(FixedGrader(87).grade(&Submission::default()), 87);
    }

    #[test]
    fn attachment_name_is_file_name() {
        let attachment = Attachment::new("/tmp/returns/form-1040.pdf");
        assert_eq!(attachment.name(), "form-1040.pdf");
    }

    #[test]
    fn submission_word_count() {
        let submission = Submission::new("  filed as single,  took the standard deduction ");
        assert_eq!(submission.word_count(), 7);
    }
}
