//! Where course content comes from

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::catalog;
use super::model::Chapter;

/// Supplies the initial course tree
pub trait ContentSource {
    /// Short description for logs
    fn describe(&self) -> String;

    /// Load the chapters with all learner state cleared
    fn chapters(&self) -> Result<Vec<Chapter>>;
}

/// The catalog compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl ContentSource for BuiltinCatalog {
    fn describe(&self) -> String {
        format!("built-in catalog ({})", catalog::COURSE_TITLE)
    }

    fn chapters(&self) -> Result<Vec<Chapter>> {
        Ok(catalog::course_chapters())
    }
}

/// A JSON file holding an array of chapters
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ContentSource for JsonCatalog {
    fn describe(&self) -> String {
        format!("catalog file {:?}", self.path)
    }

    fn chapters(&self) -> Result<Vec<Chapter>> {
        let contents = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read catalog from {:?}", self.path))?;
        let mut chapters: Vec<Chapter> = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse catalog {:?}", self.path))?;

        if chapters.is_empty() {
            bail!("Catalog {:?} contains no chapters", self.path);
        }

        // Files may carry learner state; the course always starts fresh
        for chapter in &mut chapters {
            chapter.reset();
        }
        Ok(chapters)
    }
}

/// Pick the content source for an optional catalog path
pub fn source_for(path: Option<&Path>) -> Box<dyn ContentSource> {
    match path {
        Some(path) => Box::new(JsonCatalog::new(path)),
        None => Box::new(BuiltinCatalog),
    }
}

/// Write the built-in catalog as pretty JSON
pub fn export_builtin(path: &Path) -> Result<()> {
    let chapters = catalog::course_chapters();
    let contents =
        serde_json::to_string_pretty(&chapters).with_context(|| "Failed to serialize catalog")?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }

    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write catalog to {:?}", path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn builtin_source_yields_catalog() {
        let chapters = BuiltinCatalog.chapters().unwrap();
        assert_eq!(chapters.len(), 8);
    }

    #[test]
    fn exported_catalog_loads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("course.json");
        export_builtin(&path).unwrap();

        let loaded = JsonCatalog::new(&path).chapters().unwrap();
        assert_eq!(loaded, catalog::course_chapters());
    }

    #[test]
    fn json_catalog_clears_learner_state() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("course.json");
        let json = r#"[{
            "id": "chapter-1",
            "title": "One",
            "description": "d",
            "duration": "1 hour",
            "completed": true,
            "progress": 100,
            "modules": [{
                "id": "m1", "title": "M", "type": "video",
                "content": "c", "duration": "5 min", "completed": true
            }],
            "homework": []
        }]"#;
        std::fs::write(&path, json).unwrap();

        let chapters = JsonCatalog::new(&path).chapters().unwrap();
        assert!(!chapters[0].completed);
        assert!(!chapters[0].modules[0].completed);
        assert_eq!(chapters[0].progress, 0.0);
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.json");
        std::fs::write(&path, "[]").unwrap();
        assert!(JsonCatalog::new(&path).chapters().is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let source = JsonCatalog::new("/definitely/not/here.json");
        assert!(source.chapters().is_err());
    }
}
