use serde::{Deserialize, Serialize};

/// A single tracked record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Entry {
    /// The directory on the storage location
    pub directory: String,

    /// The project the directory belongs to
    pub project: String,

    /// Free-form notes, empty if none were given
    #[serde(default)]
    pub notes: String,
}

impl Entry {
    /// Create a new entry. Missing notes become an empty string.
    pub fn new(
        directory: impl Into<String>,
        project: impl Into<String>,
        notes: Option<impl Into<String>>,
    ) -> Self {
        Self {
            directory: directory.into(),
            project: project.into(),
            notes: notes.map(Into::into).unwrap_or_default(),
        }
    }

    /// Returns `true` if this entry has exactly the given directory and
    /// project (case-sensitive)
    pub fn is_keyed(&self, directory: &str, project: &str) -> bool {
        self.directory == directory && self.project == project
    }

    /// The values of all columns in column order
    pub fn fields(&self) -> [&str; 3] {
        [&self.directory, &self.project, &self.notes]
    }
}

/// An entry together with its zero-based position in its table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub index: usize,
    pub entry: Entry,
}
