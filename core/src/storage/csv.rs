use std::{fs::File, io::ErrorKind, path::PathBuf};

use csv::{ReaderBuilder, WriterBuilder};
use log::debug;

use super::TableStore;
use crate::{
    entry::Entry,
    error::{Error, Result},
    location::StorageLocation,
    table::{EntryTable, COLUMNS},
};

/// An implementation of the [`TableStore`] trait keeping one CSV file per
/// storage location in a directory
pub struct CsvStore {
    dir: PathBuf,
}

impl CsvStore {
    /// Creates a store for the CSV files in the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl TableStore for CsvStore {
    fn path(&self, location: StorageLocation) -> PathBuf {
        self.dir.join(location.file_name())
    }

    fn load(&self, location: StorageLocation) -> Result<Option<EntryTable>> {
        let path = self.path(location);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let mut reader = ReaderBuilder::new()
            // a row may omit the trailing notes field
            .flexible(true)
            .from_reader(file);
        let headers = reader.headers()?;
        if headers.iter().ne(COLUMNS) {
            return Err(Error::UnexpectedColumns {
                path,
                found: headers.iter().map(String::from).collect(),
            });
        }

        let entries = reader
            .deserialize::<Entry>()
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Read {} entries from {}", entries.len(), path.display());

        Ok(Some(EntryTable::new(entries)))
    }

    fn save(&mut self, location: StorageLocation, table: &EntryTable) -> Result<()> {
        let path = self.path(location);

        // the header is written explicitly so that empty tables keep it
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(&path)?;
        writer.write_record(COLUMNS)?;
        for e in table.entries() {
            writer.serialize(e)?;
        }
        writer.flush()?;
        debug!("Wrote {} entries to {}", table.len(), path.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use assertor::{assert_that, OptionAssertion};
    use pretty_assertions::assert_eq;
    use tempdir::TempDir;

    use super::CsvStore;
    use crate::{
        entry::Entry, error::Error, location::StorageLocation, storage::TableStore,
        table::EntryTable,
    };

    #[test]
    fn load_missing() {
        let dir = TempDir::new("lts_csv").unwrap();
        let store = CsvStore::new(dir.path());
        assert_that!(store.load(StorageLocation::Data1).unwrap()).is_none();
    }

    #[test]
    fn save_and_load() {
        let dir = TempDir::new("lts_csv").unwrap();
        let mut store = CsvStore::new(dir.path());
        let table = EntryTable::from(vec![
            Entry::new("/mnt/a", "proj1", None::<String>),
            Entry::new("/mnt/b, c", "proj2", Some("says \"hi\"")),
        ]);

        store.save(StorageLocation::Data3, &table).unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("lts_data3.csv")).unwrap(),
            "Directory,Project,Notes\n/mnt/a,proj1,\n\"/mnt/b, c\",proj2,\"says \"\"hi\"\"\"\n"
        );
        assert_eq!(store.load(StorageLocation::Data3).unwrap(), Some(table));
    }

    #[test]
    fn save_empty_keeps_header() {
        let dir = TempDir::new("lts_csv").unwrap();
        let mut store = CsvStore::new(dir.path());

        store
            .save(StorageLocation::Rc2, &EntryTable::default())
            .unwrap();

        assert_eq!(
            fs::read_to_string(dir.path().join("lts_rc2.csv")).unwrap(),
            "Directory,Project,Notes\n"
        );
        assert_eq!(
            store.load(StorageLocation::Rc2).unwrap(),
            Some(EntryTable::default())
        );
    }

    #[test]
    fn load_row_without_notes() {
        let dir = TempDir::new("lts_csv").unwrap();
        fs::write(
            dir.path().join("lts_data1.csv"),
            "Directory,Project,Notes\n/mnt/a,proj1\n/mnt/b,proj2,n\n",
        )
        .unwrap();
        let store = CsvStore::new(dir.path());

        assert_eq!(
            store.load(StorageLocation::Data1).unwrap(),
            Some(EntryTable::from(vec![
                Entry::new("/mnt/a", "proj1", None::<String>),
                Entry::new("/mnt/b", "proj2", Some("n")),
            ]))
        );
    }

    #[test]
    fn load_rejects_unexpected_columns() {
        let dir = TempDir::new("lts_csv").unwrap();
        fs::write(
            dir.path().join("lts_data4.csv"),
            "Project,Directory,Notes\nproj1,/mnt/a,\n",
        )
        .unwrap();
        let store = CsvStore::new(dir.path());

        let err = store.load(StorageLocation::Data4).unwrap_err();
        assert!(matches!(err, Error::UnexpectedColumns { .. }));
    }
}
