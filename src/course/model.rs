//! Content model for courses
//!
//! A course is an ordered list of chapters. Each chapter holds learning
//! modules and homework assignments; modules link out to reference resources.
//! The tree is built once from a content source and only the completion
//! fields are ever mutated afterwards.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A chapter of the course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    /// Unique identifier (e.g., "chapter-1")
    pub id: String,
    /// Display title
    pub title: String,
    /// Short summary
    pub description: String,
    /// Estimated duration, display only (e.g., "2 hours")
    pub duration: String,
    /// Learning modules in order
    pub modules: Vec<Module>,
    /// Homework assignments in order
    pub homework: Vec<HomeworkAssignment>,
    /// True once every module is completed
    #[serde(default)]
    pub completed: bool,
    /// Percentage of completed modules (0.0 to 100.0)
    #[serde(default)]
    pub progress: f64,
}

impl Chapter {
    /// Create an empty chapter
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            duration: duration.into(),
            modules: Vec::new(),
            homework: Vec::new(),
            completed: false,
            progress: 0.0,
        }
    }

    /// Add a module (builder style)
    pub fn with_module(mut self, module: Module) -> Self {
        self.modules.push(module);
        self
    }

    /// Add a homework assignment (builder style)
    pub fn with_homework(mut self, homework: HomeworkAssignment) -> Self {
        self.homework.push(homework);
        self
    }

    /// Chapter number parsed from the id suffix ("chapter-3" -> 3)
    pub fn number(&self) -> Option<usize> {
        self.id.rsplit('-').next().and_then(|n| n.parse().ok())
    }

    /// Find a module by id
    pub fn module(&self, module_id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == module_id)
    }

    /// Find a homework assignment by id
    pub fn homework_item(&self, homework_id: &str) -> Option<&HomeworkAssignment> {
        self.homework.iter().find(|h| h.id == homework_id)
    }

    /// Number of completed modules
    pub fn completed_modules(&self) -> usize {
        self.modules.iter().filter(|m| m.completed).count()
    }

    /// Number of submitted homework assignments
    pub fn completed_homework(&self) -> usize {
        self.homework.iter().filter(|h| h.completed).count()
    }

    /// Recompute `progress` and `completed` from module state.
    ///
    /// A chapter without modules stays at 0% and is never complete.
    pub fn recompute_progress(&mut self) {
        let total = self.modules.len();
        if total == 0 {
            self.progress = 0.0;
            self.completed = false;
            return;
        }
        let done = self.completed_modules();
        self.progress = 100.0 * done as f64 / total as f64;
        self.completed = done == total;
    }

    /// Clear all learner state back to the pristine values
    pub fn reset(&mut self) {
        self.completed = false;
        self.progress = 0.0;
        for module in &mut self.modules {
            module.completed = false;
        }
        for homework in &mut self.homework {
            homework.completed = false;
            homework.submitted_at = None;
            homework.grade = None;
        }
    }
}

/// Kind of learning module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleKind {
    Video,
    Reading,
    Interactive,
    Quiz,
}

impl ModuleKind {
    /// Lowercase display label
    pub fn label(self) -> &'static str {
        match self {
            ModuleKind::Video => "video",
            ModuleKind::Reading => "reading",
            ModuleKind::Interactive => "interactive",
            ModuleKind::Quiz => "quiz",
        }
    }

    /// Single-glyph icon for list views
    pub fn icon(self) -> &'static str {
        match self {
            ModuleKind::Video => "▶",
            ModuleKind::Reading => "≡",
            ModuleKind::Interactive => "◆",
            ModuleKind::Quiz => "?",
        }
    }
}

/// A single learning unit within a chapter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    /// Unique identifier (e.g., "mod-1-2")
    pub id: String,
    /// Display title
    pub title: String,
    /// Module kind
    #[serde(rename = "type")]
    pub kind: ModuleKind,
    /// One-line summary of what the module covers
    pub content: String,
    /// Estimated duration, display only (e.g., "30 min")
    pub duration: String,
    /// Has the learner marked this complete?
    #[serde(default)]
    pub completed: bool,
    /// Reference material linked from this module
    #[serde(default)]
    pub resources: Vec<Resource>,
}

impl Module {
    /// Create a new incomplete module without resources
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        kind: ModuleKind,
        content: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
            content: content.into(),
            duration: duration.into(),
            completed: false,
            resources: Vec::new(),
        }
    }

    /// Attach resources
    pub fn with_resources(mut self, resources: impl IntoIterator<Item = Resource>) -> Self {
        self.resources.extend(resources);
        self
    }
}

/// Kind of homework assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HomeworkKind {
    FormPractice,
    CaseStudy,
    Calculation,
    Research,
}

impl HomeworkKind {
    /// Display label ("form practice", "case study", ...)
    pub fn label(self) -> &'static str {
        match self {
            HomeworkKind::FormPractice => "form practice",
            HomeworkKind::CaseStudy => "case study",
            HomeworkKind::Calculation => "calculation",
            HomeworkKind::Research => "research",
        }
    }
}

/// A gradable assignment tied to a chapter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeworkAssignment {
    /// Unique identifier (e.g., "hw-1-1")
    pub id: String,
    /// Display title
    pub title: String,
    /// What the learner has to do
    pub description: String,
    /// Assignment kind
    #[serde(rename = "type")]
    pub kind: HomeworkKind,
    /// Due date as an ISO date string (e.g., "2024-02-15")
    pub due_date: String,
    /// Has this been submitted?
    #[serde(default)]
    pub completed: bool,
    /// When the last submission happened
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
    /// Grade (0-100) from the last submission
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<u8>,
    /// Instructor feedback, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

impl HomeworkAssignment {
    /// Create a new unsubmitted assignment
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        kind: HomeworkKind,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            kind,
            due_date: due_date.into(),
            completed: false,
            submitted_at: None,
            grade: None,
            feedback: None,
        }
    }

    /// Parse the due date, if it is a valid ISO date
    pub fn due(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.due_date, "%Y-%m-%d").ok()
    }

    /// Due date formatted for display; falls back to the raw string
    pub fn due_label(&self) -> String {
        match self.due() {
            Some(date) => date.format("%b %-d, %Y").to_string(),
            None => self.due_date.clone(),
        }
    }
}

/// Kind of external reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    Irs,
    Aicpa,
    Publication,
    Form,
    Guide,
}

impl ResourceKind {
    /// Short badge label
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Irs => "IRS",
            ResourceKind::Aicpa => "AICPA",
            ResourceKind::Publication => "PUB",
            ResourceKind::Form => "FORM",
            ResourceKind::Guide => "GUIDE",
        }
    }
}

/// An external reference link attached to a module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub description: String,
}

impl Resource {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
        kind: ResourceKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: url.into(),
            kind,
            description: description.into(),
        }
    }
}

/// Find the chapter owning a module
pub fn chapter_of_module<'a>(chapters: &'a [Chapter], module_id: &str) -> Option<&'a Chapter> {
    chapters.iter().find(|c| c.modules.iter().any(|m| m.id == module_id))
}

/// Find the chapter owning a homework assignment
pub fn chapter_of_homework<'a>(chapters: &'a [Chapter], homework_id: &str) -> Option<&'a Chapter> {
    chapters.iter().find(|c| c.homework.iter().any(|h| h.id == homework_id))
}
