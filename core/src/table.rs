use std::fmt;

use crate::{
    entry::{Entry, Row},
    util::contains_ignore_case::ContainsIgnoreCase,
};

/// The column names of every entry table, in order
pub const COLUMNS: [&str; 3] = ["Directory", "Project", "Notes"];

/// The ordered entries of one storage location
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryTable {
    entries: Vec<Entry>,
}

impl EntryTable {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry to the end of the table
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Find the first entry with exactly the given directory and project
    pub fn find(&self, directory: &str, project: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.is_keyed(directory, project))
    }

    /// Set the notes of all entries with exactly the given directory and
    /// project. Returns the number of entries changed.
    pub fn update_notes(&mut self, directory: &str, project: &str, notes: &str) -> usize {
        let mut updated = 0;
        for e in self
            .entries
            .iter_mut()
            .filter(|e| e.is_keyed(directory, project))
        {
            e.notes = notes.to_string();
            updated += 1;
        }
        updated
    }

    /// All rows matching the given predicate, keeping their positions
    pub fn select<P>(&self, predicate: P) -> Vec<Row>
    where
        P: Fn(&Entry) -> bool,
    {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| predicate(e))
            .map(|(index, e)| Row {
                index,
                entry: e.clone(),
            })
            .collect()
    }

    /// Rows whose project contains `project` ignoring case
    pub fn select_project(&self, project: &str) -> Vec<Row> {
        self.select(|e| e.project.contains_ignore_case(project))
    }

    /// Rows where any column contains `term` ignoring case
    pub fn search(&self, term: &str) -> Vec<Row> {
        self.select(|e| e.fields().iter().any(|f| f.contains_ignore_case(term)))
    }

    /// All rows of the table
    pub fn rows(&self) -> Vec<Row> {
        self.select(|_| true)
    }
}

impl From<Vec<Entry>> for EntryTable {
    fn from(entries: Vec<Entry>) -> Self {
        Self::new(entries)
    }
}

/// Renders rows as an aligned text table with a leading index column
pub struct RowsDisplay<'a>(pub &'a [Row]);

impl fmt::Display for RowsDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = |s: &str| s.chars().count();

        let index_width = self
            .0
            .iter()
            .map(|r| r.index.to_string().len())
            .max()
            .unwrap_or(0);
        let mut widths = COLUMNS.map(width);
        for r in self.0 {
            for (w, v) in widths.iter_mut().zip(r.entry.fields()) {
                *w = (*w).max(width(v));
            }
        }

        let mut line = format!("{:index_width$}", "");
        for (c, w) in COLUMNS.iter().zip(widths) {
            line.push_str(&format!("  {c:w$}"));
        }
        f.write_str(line.trim_end())?;

        for r in self.0 {
            let mut line = format!("{:>index_width$}", r.index);
            for (v, w) in r.entry.fields().iter().zip(widths) {
                line.push_str(&format!("  {v:w$}"));
            }
            writeln!(f)?;
            f.write_str(line.trim_end())?;
        }
        Ok(())
    }
}
