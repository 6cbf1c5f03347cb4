use crate::{error::Result, table::EntryTable};

pub mod xlsx;

/// Collects entry tables as named sheets of a workbook
pub trait Workbook {
    /// Add `table` as a new sheet called `name`
    fn add_sheet(&mut self, name: &str, table: &EntryTable) -> Result<()>;

    /// Finish the workbook after all sheets have been added
    fn finish(&mut self) -> Result<()>;
}
