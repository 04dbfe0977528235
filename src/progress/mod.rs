//! Learner progress: the mutable store, grading, activity feed and derived metrics

pub mod activity;
pub mod aggregates;
pub mod grading;
pub mod store;

pub use aggregates::{DashboardMetrics, UserProgress};
pub use grading::{Attachment, Grader, RandomGrader, Submission};
pub use store::{ProgressStore, Snapshot};
