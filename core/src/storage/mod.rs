pub mod csv;

use std::path::PathBuf;

use crate::{error::Result, location::StorageLocation, table::EntryTable};

/// A store for entry tables, one per storage location
pub trait TableStore {
    /// The path of the file backing the given location
    fn path(&self, location: StorageLocation) -> PathBuf;

    /// Load the table of the given location, or [`None`] if there is none
    fn load(&self, location: StorageLocation) -> Result<Option<EntryTable>>;

    /// Replace the table of the given location with `table`
    fn save(&mut self, location: StorageLocation, table: &EntryTable) -> Result<()>;
}
