//! Knowledge Store - the subject collection and its JSON file.

use guess_rules::Subject;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::seed_subjects;
use crate::{Error, Result};

/// The durable subject collection.
///
/// Loaded once at start-up and rewritten in full after every mutation.
/// Subjects are never removed, so a position stays valid for the whole run.
#[derive(Debug, Clone)]
pub struct KnowledgeStore {
    path: PathBuf,
    subjects: Vec<Subject>,
}

impl KnowledgeStore {
    /// Open the store at `path`, seeding it if the file does not exist.
    ///
    /// The seed collection is written immediately. A file that exists but
    /// cannot be parsed is an error and is left untouched.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => Self::from_json(path, &content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No knowledge store at {}, writing seed subjects", path.display());
                let store = Self::with_subjects(path, seed_subjects());
                store.persist()?;
                Ok(store)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Load an existing store. A missing file is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        Self::from_json(path, &content)
    }

    /// Wrap a collection without touching the disk.
    pub fn with_subjects(path: impl Into<PathBuf>, subjects: Vec<Subject>) -> Self {
        Self {
            path: path.into(),
            subjects,
        }
    }

    fn from_json(path: &Path, content: &str) -> Result<Self> {
        let subjects: Vec<Subject> =
            serde_json::from_str(content).map_err(|source| Error::Corrupt {
                path: path.to_path_buf(),
                source,
            })?;
        info!(
            "Loaded {} subjects from {}",
            subjects.len(),
            path.display()
        );
        Ok(Self::with_subjects(path, subjects))
    }

    /// Write the whole collection to disk.
    pub fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut content = serde_json::to_string_pretty(&self.subjects)?;
        content.push('\n');
        fs::write(&self.path, content)?;
        debug!(
            "Persisted {} subjects to {}",
            self.subjects.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Bump the popularity of the subject at `index` and persist.
    ///
    /// Returns the new popularity.
    pub fn confirm(&mut self, index: usize) -> Result<u32> {
        let subject = self
            .subjects
            .get_mut(index)
            .ok_or(Error::UnknownSubject(index))?;
        subject.record_confirmation();
        let popularity = subject.popularity;
        info!("Confirmed '{}' (popularity {})", subject.name, popularity);

        self.persist()?;
        Ok(popularity)
    }

    /// Append a subject and persist. Returns its position.
    pub fn append(&mut self, subject: Subject) -> Result<usize> {
        info!(
            "Learned subject '{}' with {} attributes",
            subject.name,
            subject.attributes.len()
        );
        self.subjects.push(subject);
        self.persist()?;
        Ok(self.subjects.len() - 1)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All subjects in collection order.
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn subject(&self, index: usize) -> Option<&Subject> {
        self.subjects.get(index)
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}
