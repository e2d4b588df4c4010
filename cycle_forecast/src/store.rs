//! Range persistence
//!
//! The store is a full-read, full-overwrite text resource without locking.
//! Callers sharing one store must run merge cycles one at a time.

use crate::codec::{parse_ranges, parse_strict, render_ranges};
use crate::error::Result;
use crate::range::{today, DateRange};
use chrono::NaiveDate;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Load/save contract the merge pipeline depends on
pub trait RangeStore {
    /// All stored ranges, in stored order
    fn load(&self) -> Result<Vec<DateRange>>;

    /// Overwrite the store with `ranges`
    fn save(&mut self, ranges: &[DateRange]) -> Result<()>;

    /// Stored ranges starting on or before `today`
    fn load_history_as_of(&self, today: NaiveDate) -> Result<Vec<DateRange>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|range| range.start <= today)
            .collect())
    }

    /// Stored ranges starting on or before the current local date
    fn load_history_only(&self) -> Result<Vec<DateRange>> {
        self.load_history_as_of(today())
    }
}

/// Plain file-backed store
#[derive(Debug, Clone)]
pub struct FileRangeStore {
    path: PathBuf,
}

impl FileRangeStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Replace the file contents in one rename
    fn write_atomic(&self, contents: &str) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(contents.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl RangeStore for FileRangeStore {
    fn load(&self) -> Result<Vec<DateRange>> {
        let text = std::fs::read_to_string(&self.path)?;
        let ranges = parse_ranges(&text)?;
        tracing::debug!(path = %self.path.display(), count = ranges.len(), "loaded ranges");
        Ok(ranges)
    }

    fn save(&mut self, ranges: &[DateRange]) -> Result<()> {
        self.write_atomic(&render_ranges(ranges)?)?;
        tracing::debug!(path = %self.path.display(), count = ranges.len(), "saved ranges");
        Ok(())
    }
}

/// File store seeded from a template on first load
#[derive(Debug, Clone)]
pub struct TemplateSeededStore {
    file: FileRangeStore,
    template: String,
}

impl TemplateSeededStore {
    pub fn new<P: Into<PathBuf>, T: Into<String>>(path: P, template: T) -> Self {
        Self {
            file: FileRangeStore::new(path),
            template: template.into(),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Write the template if no file exists yet
    pub fn ensure_seeded(&self) -> Result<()> {
        if !self.file.exists() {
            tracing::info!(path = %self.file.path().display(), "seeding range store from template");
            self.file.write_atomic(&self.template)?;
        }
        Ok(())
    }
}

impl RangeStore for TemplateSeededStore {
    fn load(&self) -> Result<Vec<DateRange>> {
        self.ensure_seeded()?;
        self.file.load()
    }

    fn save(&mut self, ranges: &[DateRange]) -> Result<()> {
        self.file.save(ranges)
    }
}

/// In-memory store holding the same text a file store would
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryRangeStore {
    text: String,
}

impl MemoryRangeStore {
    pub fn new<T: Into<String>>(text: T) -> Self {
        Self { text: text.into() }
    }

    /// Current stored text
    pub fn contents(&self) -> &str {
        &self.text
    }
}

impl RangeStore for MemoryRangeStore {
    fn load(&self) -> Result<Vec<DateRange>> {
        parse_ranges(&self.text)
    }

    fn save(&mut self, ranges: &[DateRange]) -> Result<()> {
        self.text = render_ranges(ranges)?;
        Ok(())
    }
}

/// Strictly validate hand-edited text and overwrite the store with it
///
/// Nothing is written when any line fails validation.
pub fn import_text<S: RangeStore + ?Sized>(store: &mut S, text: &str) -> Result<Vec<DateRange>> {
    let ranges = parse_strict(text)?;
    store.save(&ranges)?;
    tracing::info!(count = ranges.len(), "imported ranges");
    Ok(ranges)
}
