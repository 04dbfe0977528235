//! Course content: model, built-in catalog, lesson tables and content sources

pub mod catalog;
pub mod content;
pub mod model;
pub mod source;

pub use model::{
    Chapter, HomeworkAssignment, HomeworkKind, Module, ModuleKind, Resource, ResourceKind,
};
pub use source::{BuiltinCatalog, ContentSource, JsonCatalog};
