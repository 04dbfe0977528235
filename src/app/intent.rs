//! User intents and the course controller that applies them
//!
//! [`Course`] pairs the progress store with the navigator. Keyboard handling
//! and `:` commands both reduce to an [`Intent`]; dispatching one mutates the
//! store and/or moves the view, then reports a status line for the footer.

use crate::course::{Chapter, HomeworkAssignment, Module};
use crate::error::CourseError;
use crate::progress::activity::ActivityLog;
use crate::progress::{DashboardMetrics, ProgressStore, Submission, UserProgress};

use super::navigation::{Navigator, View};

/// Something the learner asked for
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    SelectChapter(String),
    StartModule(String),
    StartHomework(String),
    /// Mark the module in view complete
    CompleteModule,
    /// Submit the homework in view
    SubmitHomework(Submission),
    NextModule,
    BackToChapter,
    BackToDashboard,
    ResetCourse,
    /// Open whatever the id names
    Goto(String),
}

/// Store plus navigation state
#[derive(Debug)]
pub struct Course {
    store: ProgressStore,
    nav: Navigator,
}

impl Course {
    pub fn new(store: ProgressStore) -> Self {
        Self { store, nav: Navigator::new() }
    }

    pub fn store(&self) -> &ProgressStore {
        &self.store
    }

    pub fn chapters(&self) -> &[Chapter] {
        self.store.chapters()
    }

    pub fn view(&self) -> &View {
        self.nav.view()
    }

    pub fn activity(&self) -> &ActivityLog {
        self.store.activity()
    }

    pub fn metrics(&self) -> DashboardMetrics {
        DashboardMetrics::compute(self.chapters())
    }

    pub fn user_progress(&self, user_id: &str) -> UserProgress {
        UserProgress::derive(user_id, self.chapters())
    }

    /// Chapter the current view focuses on
    pub fn current_chapter(&self) -> Result<&Chapter, CourseError> {
        match self.view().chapter_id() {
            Some(id) => self.store.chapter(id),
            None => Err(CourseError::NotOpen("chapter")),
        }
    }

    /// Module the current view focuses on
    pub fn current_module(&self) -> Result<&Module, CourseError> {
        match self.view() {
            View::Module { chapter_id, module_id } => self.store.module(chapter_id, module_id),
            _ => Err(CourseError::NotOpen("module")),
        }
    }

    /// Homework the current view focuses on
    pub fn current_homework(&self) -> Result<&HomeworkAssignment, CourseError> {
        match self.view() {
            View::Homework { chapter_id, homework_id } => {
                self.store.homework(chapter_id, homework_id)
            }
            _ => Err(CourseError::NotOpen("homework")),
        }
    }

    pub fn has_next_module(&self) -> bool {
        self.nav.has_next_module(self.store.chapters())
    }

    /// Apply an intent.
    ///
    /// Returns a status message for the footer, if the intent produced one.
    /// On error nothing has changed.
    pub fn dispatch(&mut self, intent: Intent) -> Result<Option<String>, CourseError> {
        tracing::debug!(?intent, "Dispatch");
        match intent {
            Intent::SelectChapter(id) => {
                self.nav.select_chapter(&id);
                Ok(None)
            }
            Intent::StartModule(id) => {
                if self.nav.start_module(self.store.chapters(), &id) {
                    Ok(None)
                } else {
                    Err(CourseError::UnknownId(id))
                }
            }
            Intent::StartHomework(id) => {
                if self.nav.start_homework(self.store.chapters(), &id) {
                    Ok(None)
                } else {
                    Err(CourseError::UnknownId(id))
                }
            }
            Intent::CompleteModule => self.complete_current_module(),
            Intent::SubmitHomework(submission) => self.submit_current_homework(&submission),
            Intent::NextModule => {
                if self.nav.advance_module(self.store.chapters()) {
                    Ok(None)
                } else {
                    Ok(Some("Last module in this chapter".into()))
                }
            }
            Intent::BackToChapter => {
                self.nav.back_to_chapter();
                Ok(None)
            }
            Intent::BackToDashboard => {
                self.nav.back_to_dashboard();
                Ok(None)
            }
            Intent::ResetCourse => {
                self.store.reset();
                self.nav.back_to_dashboard();
                Ok(Some("Course progress reset".into()))
            }
            Intent::Goto(id) => {
                self.nav.goto(self.store.chapters(), &id)?;
                Ok(None)
            }
        }
    }

    fn complete_current_module(&mut self) -> Result<Option<String>, CourseError> {
        let View::Module { chapter_id, module_id } = self.nav.view().clone() else {
            return Ok(None);
        };
        let outcome = self.store.complete_module(&chapter_id, &module_id)?;

        let message = if !outcome.newly_completed {
            "Module already completed".to_string()
        } else if outcome.chapter_finished {
            format!("Chapter complete! ({} done)", chapter_id)
        } else {
            format!("Module completed, chapter at {:.0}%", outcome.chapter_progress)
        };
        Ok(Some(message))
    }

    fn submit_current_homework(
        &mut self,
        submission: &Submission,
    ) -> Result<Option<String>, CourseError> {
        let View::Homework { chapter_id, homework_id } = self.nav.view().clone() else {
            return Ok(None);
        };
        let grade = self.store.submit_homework(&chapter_id, &homework_id, submission)?;
        Ok(Some(format!("Submitted. Grade: {}%", grade)))
    }
}
