//! Recent learner activity

use std::collections::VecDeque;

use chrono::{DateTime, Utc};

/// What happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    ModuleCompleted,
    ChapterCompleted,
    HomeworkSubmitted,
}

/// A single entry in the activity feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub kind: ActivityKind,
    /// Title of the module, chapter or assignment
    pub title: String,
    pub at: DateTime<Utc>,
}

impl Activity {
    /// Feed line, e.g. `Completed "Tax System Overview"`
    pub fn summary(&self) -> String {
        match self.kind {
            ActivityKind::ModuleCompleted => format!("Completed \"{}\"", self.title),
            ActivityKind::ChapterCompleted => format!("Finished chapter \"{}\"", self.title),
            ActivityKind::HomeworkSubmitted => format!("Submitted \"{}\"", self.title),
        }
    }
}

/// Bounded newest-first activity feed
#[derive(Debug, Clone, Default)]
pub struct ActivityLog {
    entries: VecDeque<Activity>,
}

impl ActivityLog {
    /// Maximum number of entries to keep
    const MAX_ENTRIES: usize = 50;

    pub fn record(&mut self, kind: ActivityKind, title: impl Into<String>) {
        self.record_at(kind, title, Utc::now());
    }

    fn record_at(&mut self, kind: ActivityKind, title: impl Into<String>, at: DateTime<Utc>) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.pop_back();
        }
        self.entries.push_front(Activity { kind, title: title.into(), at });
    }

    /// Most recent entries first
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &Activity> {
        self.entries.iter().take(limit)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Human-readable age of a timestamp ("just now", "5 minutes ago", "2 days ago")
pub fn time_ago(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(at);
    let plural = |n: i64, unit: &str| {
        if n == 1 { format!("1 {} ago", unit) } else { format!("{} {}s ago", n, unit) }
    };

    if elapsed.num_seconds() < 60 {
        "just now".to_string()
    } else if elapsed.num_minutes() < 60 {
        plural(elapsed.num_minutes(), "minute")
    } else if elapsed.num_hours() < 24 {
        plural(elapsed.num_hours(), "hour")
    } else {
        plural(elapsed.num_days(), "day")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn newest_entry_comes_first() {
        let mut log = ActivityLog::default();
        log.record(ActivityKind::ModuleCompleted, "First");
        log.record(ActivityKind::HomeworkSubmitted, "Second");

        let titles: Vec<_> = log.recent(10).map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Second", "First"]);
    }

    #[test]
    fn log_is_bounded() {
        let mut log = ActivityLog::default();
        for i in 0..(ActivityLog::MAX_ENTRIES + 10) {
            log.record(ActivityKind::ModuleCompleted, format!("m{}", i));
        }
        assert_eq!(log.len(), ActivityLog::MAX_ENTRIES);
        assert_eq!(log.recent(1).next().unwrap().title, format!("m{}", ActivityLog::MAX_ENTRIES + 9));
    }

    #[test]
    fn summary_wording() {
        let activity = Activity {
            kind: ActivityKind::HomeworkSubmitted,
            title: "Form 1040 Practice".into(),
            at: Utc::now(),
        };
        assert_eq!(activity.summary(), "Submitted \"Form 1040 Practice\"");
    }

    #[test]
    fn time_ago_buckets() {
        let now = Utc::now();
        assert_eq!(time_ago(now - Duration::seconds(5), now), "just now");
        assert_eq!(time_ago(now - Duration::minutes(1), now), "1 minute ago");
        assert_eq!(time_ago(now - Duration::hours(2), now), "2 hours ago");
        assert_eq!(time_ago(now - Duration::days(3), now), "3 days ago");
    }
}
