use std::{io, path::PathBuf};

use log::debug;

use crate::{
    entry::{Entry, Row},
    error::{Error, Result},
    location::StorageLocation,
    output::Workbook,
    storage::TableStore,
};

/// Decides whether an entry should be added even though an entry with the
/// same directory and project exists
pub trait Confirm {
    /// Called with the existing entry. Return `true` to add anyway.
    fn confirm(&mut self, existing: &Entry) -> io::Result<bool>;
}

/// Rows of one storage location selected by an operation
#[derive(Debug, PartialEq, Eq)]
pub struct Listing {
    pub location: StorageLocation,
    pub path: PathBuf,
    pub rows: Vec<Row>,
}

/// The result of [`EntryStore::add`]
#[derive(Debug, PartialEq, Eq)]
pub enum AddOutcome {
    /// The entry was appended to the file at the given path
    Added(PathBuf),

    /// A duplicate was found and the addition was not confirmed
    Declined,
}

/// The result of [`EntryStore::update_notes`]
#[derive(Debug, PartialEq, Eq)]
pub struct Updated {
    pub path: PathBuf,
    pub rows: usize,
}

/// A table that was written to a workbook by [`EntryStore::export_all`]
#[derive(Debug, PartialEq, Eq)]
pub struct ExportedSheet {
    pub location: StorageLocation,
    pub source: PathBuf,
}

/// Reads, filters, mutates and persists entry tables
pub struct EntryStore<S> {
    tables: S,
}

impl<S: TableStore> EntryStore<S> {
    pub fn new(tables: S) -> Self {
        Self { tables }
    }

    /// Lists the entries of all locations, or only of the location named
    /// `storage`. If `project` is given, only entries whose project
    /// contains it (ignoring case) are returned. Locations without a file
    /// or without matching entries are skipped.
    pub fn list(&self, storage: Option<&str>, project: Option<&str>) -> Result<Vec<Listing>> {
        let storage = storage.filter(|s| !s.is_empty());
        let mut result = Vec::new();
        for location in StorageLocation::ALL {
            if storage.is_some_and(|s| s != location.name()) {
                continue;
            }

            let Some(table) = self.tables.load(location)? else {
                continue;
            };

            let rows = match project {
                Some(p) => table.select_project(p),
                None => table.rows(),
            };
            if !rows.is_empty() {
                result.push(self.listing(location, rows));
            }
        }
        Ok(result)
    }

    /// Appends a new entry to the table of the location named `storage`,
    /// creating the file if necessary. If an entry with the same directory
    /// and project exists, `confirm` decides whether to add it anyway.
    pub fn add(
        &mut self,
        storage: &str,
        directory: &str,
        project: &str,
        notes: Option<&str>,
        confirm: &mut impl Confirm,
    ) -> Result<AddOutcome> {
        let location = storage.parse::<StorageLocation>()?;
        let mut table = self.tables.load(location)?.unwrap_or_default();

        if let Some(existing) = table.find(directory, project) {
            if !confirm.confirm(existing)? {
                debug!("Not adding duplicate entry {directory}/{project}");
                return Ok(AddOutcome::Declined);
            }
        }

        table.push(Entry::new(directory, project, notes));
        self.tables.save(location, &table)?;

        Ok(AddOutcome::Added(self.tables.path(location)))
    }

    /// Sets the notes of all entries in the location named `storage` whose
    /// directory and project match exactly
    pub fn update_notes(
        &mut self,
        storage: &str,
        directory: &str,
        project: &str,
        notes: &str,
    ) -> Result<Updated> {
        let location = storage.parse::<StorageLocation>()?;
        let path = self.tables.path(location);
        let mut table = self
            .tables
            .load(location)?
            .ok_or_else(|| Error::MissingFile(path.clone()))?;

        let rows = table.update_notes(directory, project, notes);
        if rows == 0 {
            return Err(Error::NoMatch {
                directory: directory.to_string(),
                project: project.to_string(),
            });
        }

        self.tables.save(location, &table)?;
        debug!("Updated notes of {rows} entries in {}", path.display());

        Ok(Updated { path, rows })
    }

    /// Searches all locations for entries where any column contains `term`
    /// (ignoring case)
    pub fn search_all(&self, term: &str) -> Result<Vec<Listing>> {
        let mut result = Vec::new();
        for location in StorageLocation::ALL {
            if let Some(table) = self.tables.load(location)? {
                let rows = table.search(term);
                if !rows.is_empty() {
                    result.push(self.listing(location, rows));
                }
            }
        }
        Ok(result)
    }

    /// Writes the table of every location with a file to `workbook`, one
    /// sheet per location, and finishes the workbook. Nothing is written
    /// if no location has a file.
    pub fn export_all(&self, workbook: &mut impl Workbook) -> Result<Vec<ExportedSheet>> {
        let mut tables = Vec::new();
        for location in StorageLocation::ALL {
            if let Some(table) = self.tables.load(location)? {
                tables.push((location, table));
            }
        }
        if tables.is_empty() {
            return Err(Error::NothingToExport);
        }

        let mut sheets = Vec::new();
        for (location, table) in tables {
            workbook.add_sheet(location.name(), &table)?;
            sheets.push(ExportedSheet {
                location,
                source: self.tables.path(location),
            });
        }
        workbook.finish()?;

        Ok(sheets)
    }

    fn listing(&self, location: StorageLocation, rows: Vec<Row>) -> Listing {
        Listing {
            location,
            path: self.tables.path(location),
            rows,
        }
    }
}
