//! Dashboard metrics derived from the chapter tree
//!
//! Everything here is a pure function of `&[Chapter]` and is recomputed on
//! every render.

use chrono::{DateTime, Utc};

use crate::course::Chapter;

/// Minimum average grade for the certificate
pub const CERTIFICATE_MIN_AVERAGE: u8 = 80;

/// Percentage of all modules completed, rounded to the nearest whole number
pub fn overall_progress(chapters: &[Chapter]) -> u8 {
    let total: usize = chapters.iter().map(|c| c.modules.len()).sum();
    if total == 0 {
        return 0;
    }
    let done: usize = chapters.iter().map(Chapter::completed_modules).sum();
    (100.0 * done as f64 / total as f64).round() as u8
}

/// Chapter progress rounded for display
pub fn chapter_percent(chapter: &Chapter) -> u8 {
    chapter.progress.round().clamp(0.0, 100.0) as u8
}

/// Mean grade over submitted, graded homework, rounded; 0 if nothing is graded
pub fn average_grade(chapters: &[Chapter]) -> u8 {
    let grades: Vec<u32> = chapters
        .iter()
        .flat_map(|c| &c.homework)
        .filter(|h| h.completed)
        .filter_map(|h| h.grade.map(u32::from))
        .collect();

    if grades.is_empty() {
        return 0;
    }
    let sum: u32 = grades.iter().sum();
    (sum as f64 / grades.len() as f64).round() as u8
}

/// A milestone shown on the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Achievement {
    pub title: &'static str,
    pub description: String,
    pub earned: bool,
}

/// One line of the certificate checklist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub label: String,
    /// Current value, e.g. "3/8" or "92%"
    pub status: String,
    pub met: bool,
}

/// Counts behind the dashboard cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardMetrics {
    pub total_chapters: usize,
    pub completed_chapters: usize,
    pub total_modules: usize,
    pub completed_modules: usize,
    pub total_homework: usize,
    pub completed_homework: usize,
    pub average_grade: u8,
    pub overall_progress: u8,
}

impl DashboardMetrics {
    /// Compute all counts from the current chapters
    pub fn compute(chapters: &[Chapter]) -> Self {
        Self {
            total_chapters: chapters.len(),
            completed_chapters: chapters.iter().filter(|c| c.completed).count(),
            total_modules: chapters.iter().map(|c| c.modules.len()).sum(),
            completed_modules: chapters.iter().map(Chapter::completed_modules).sum(),
            total_homework: chapters.iter().map(|c| c.homework.len()).sum(),
            completed_homework: chapters.iter().map(Chapter::completed_homework).sum(),
            average_grade: average_grade(chapters),
            overall_progress: overall_progress(chapters),
        }
    }

    /// Milestones in display order
    pub fn achievements(&self) -> Vec<Achievement> {
        vec![
            Achievement {
                title: "First Steps",
                description: "Completed your first module".into(),
                earned: self.completed_modules >= 1,
            },
            Achievement {
                title: "Dedicated Learner",
                description: "Completed 3 chapters".into(),
                earned: self.completed_chapters >= 3,
            },
            Achievement {
                title: "Assignment Master",
                description: "Submitted 5 homework assignments".into(),
                earned: self.completed_homework >= 5,
            },
            Achievement {
                title: "Tax Professional",
                description: format!("Completed all {} chapters", self.total_chapters),
                earned: self.total_chapters > 0 && self.completed_chapters == self.total_chapters,
            },
        ]
    }

    /// Certificate checklist. Informational only; nothing is gated on it.
    pub fn certificate_requirements(&self) -> [Requirement; 3] {
        [
            Requirement {
                label: format!("Complete all {} chapters", self.total_chapters),
                status: format!("{}/{}", self.completed_chapters, self.total_chapters),
                met: self.completed_chapters == self.total_chapters,
            },
            Requirement {
                label: "Submit all homework assignments".into(),
                status: format!("{}/{}", self.completed_homework, self.total_homework),
                met: self.completed_homework == self.total_homework,
            },
            Requirement {
                label: format!("Maintain {}% average grade", CERTIFICATE_MIN_AVERAGE),
                status: format!("{}%", self.average_grade),
                met: self.average_grade >= CERTIFICATE_MIN_AVERAGE,
            },
        ]
    }

    /// Whether every checklist item is met
    pub fn certificate_eligible(&self) -> bool {
        self.certificate_requirements().iter().all(|r| r.met)
    }
}

/// Learner progress summary derived from the chapter tree
#[derive(Debug, Clone, PartialEq)]
pub struct UserProgress {
    pub user_id: String,
    pub chapters_completed: Vec<String>,
    pub modules_completed: Vec<String>,
    pub homework_completed: Vec<String>,
    pub overall_progress: u8,
    /// Always false; certificates are not issued
    pub certificate_earned: bool,
    pub last_accessed: DateTime<Utc>,
}

impl UserProgress {
    pub fn derive(user_id: &str, chapters: &[Chapter]) -> Self {
        Self {
            user_id: user_id.to_string(),
            chapters_completed: chapters
                .iter()
                .filter(|c| c.completed)
                .map(|c| c.id.clone())
                .collect(),
            modules_completed: chapters
                .iter()
                .flat_map(|c| &c.modules)
                .filter(|m| m.completed)
                .map(|m| m.id.clone())
                .collect(),
            homework_completed: chapters
                .iter()
                .flat_map(|c| &c.homework)
                .filter(|h| h.completed)
                .map(|h| h.id.clone())
                .collect(),
            overall_progress: overall_progress(chapters),
            certificate_earned: false,
            last_accessed: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::catalog::course_chapters;
    use crate::course::{Chapter, Module, ModuleKind};

    fn finish_chapter(chapter: &mut Chapter) {
        for module in &mut chapter.modules {
            module.completed = true;
        }
        chapter.recompute_progress();
    }

    #[test]
    fn overall_progress_of_empty_course_is_zero() {
        assert_eq!(overall_progress(&[]), 0);
        assert_eq!(overall_progress(&[Chapter::new("c", "c", "", "")]), 0);
    }

    #[test]
    fn overall_progress_rounds() {
        // 33 modules in the catalog; 1 done -> 3.03% -> 3
        let mut chapters = course_chapters();
        chapters[0].modules[0].completed = true;
        assert_eq!(overall_progress(&chapters), 3);
    }

    #[test]
    fn average_grade_is_zero_without_submissions() {
        assert_eq!(average_grade(&course_chapters()), 0);
    }

    #[test]
    fn average_grade_ignores_ungraded_and_unsubmitted() {
        let mut chapters = course_chapters();
        chapters[0].homework[0].completed = true;
        chapters[0].homework[0].grade = Some(85);
        chapters[1].homework[0].completed = true;
        chapters[1].homework[0].grade = Some(90);
        // Graded but not submitted: ignored
        chapters[2].homework[0].grade = Some(10);
        // Submitted without grade: ignored
        chapters[3].homework[0].completed = true;

        assert_eq!(average_grade(&chapters), 88); // 87.5 rounds up
    }

    #[test]
    fn achievements_track_counts() {
        let mut chapters = course_chapters();
        let metrics = DashboardMetrics::compute(&chapters);
        assert!(metrics.achievements().iter().all(|a| !a.earned));

        for chapter in chapters.iter_mut().take(3) {
            finish_chapter(chapter);
        }
        let metrics = DashboardMetrics::compute(&chapters);
        let earned: Vec<_> =
            metrics.achievements().into_iter().filter(|a| a.earned).map(|a| a.title).collect();
        assert_eq!(earned, vec!["First Steps", "Dedicated Learner"]);
    }

    #[test]
    fn all_chapters_earns_final_achievement() {
        let mut chapters = course_chapters();
        chapters.iter_mut().for_each(finish_chapter);
        let metrics = DashboardMetrics::compute(&chapters);
        assert_eq!(metrics.completed_chapters, 8);
        assert!(metrics.achievements()[3].earned);
        assert_eq!(metrics.overall_progress, 100);
    }

    #[test]
    fn certificate_needs_all_three_requirements() {
        let mut chapters = course_chapters();
        chapters.iter_mut().for_each(finish_chapter);
        let metrics = DashboardMetrics::compute(&chapters);
        assert!(!metrics.certificate_eligible());
        assert!(metrics.certificate_requirements()[0].met);

        for chapter in &mut chapters {
            for hw in &mut chapter.homework {
                hw.completed = true;
                hw.grade = Some(80);
            }
        }
        let metrics = DashboardMetrics::compute(&chapters);
        assert!(metrics.certificate_eligible());
        assert_eq!(metrics.certificate_requirements()[2].status, "80%");
    }

    #[test]
    fn user_progress_lists_ids_and_never_issues_certificate() {
        let mut chapters = course_chapters();
        finish_chapter(&mut chapters[0]);
        chapters[0].homework[0].completed = true;

        let progress = UserProgress::derive("user-1", &chapters);
        assert_eq!(progress.chapters_completed, vec!["chapter-1"]);
        assert_eq!(progress.modules_completed.len(), 4);
        assert_eq!(progress.homework_completed, vec!["hw-1-1"]);
        assert!(!progress.certificate_earned);
    }

    #[test]
    fn chapter_percent_rounds_thirds() {
        let mut chapter = Chapter::new("c", "c", "", "")
            .with_module(Module::new("a", "a", ModuleKind::Video, "", ""))
            .with_module(Module::new("b", "b", ModuleKind::Video, "", ""))
            .with_module(Module::new("c", "c", ModuleKind::Video, "", ""));
        chapter.modules[0].completed = true;
        chapter.recompute_progress();
        assert_eq!(chapter_percent(&chapter), 33);
    }
}
