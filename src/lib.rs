//! Syllabus - a terminal course viewer
//!
//! Syllabus presents a fixed curriculum of chapters, learning modules and
//! homework assignments, tracks what the learner has completed, and renders
//! a progress dashboard.

pub mod app;
pub mod config;
pub mod course;
pub mod error;
pub mod outline;
pub mod progress;
pub mod theme;
pub mod ui;

pub use app::App;
pub use app::intent::{Course, Intent};
pub use config::Config;
pub use error::CourseError;
pub use progress::ProgressStore;
pub use theme::Theme;
