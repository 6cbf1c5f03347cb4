use std::path::PathBuf;

use thiserror::Error;

use crate::location::StorageLocation;

/// Errors reported by the entry store
#[derive(Error, Debug)]
pub enum Error {
    /// The given name is not one of the known storage locations
    #[error("Unknown storage '{name}'. Choose from: {}", StorageLocation::choices())]
    UnknownStorage { name: String },

    /// A file required by the operation does not exist
    #[error("{} does not exist", .0.display())]
    MissingFile(PathBuf),

    /// No row matched the given directory and project exactly
    #[error("No entry found for {directory}/{project}")]
    NoMatch { directory: String, project: String },

    /// The CSV header is not `Directory,Project,Notes`
    #[error("Unexpected columns in {}: {}", .path.display(), .found.join(","))]
    UnexpectedColumns { path: PathBuf, found: Vec<String> },

    /// None of the storage files exists
    #[error("Nothing to export")]
    NothingToExport,

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
