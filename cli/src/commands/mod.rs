use std::{fmt::Display, path::Path};

use lts_core::{
    storage::csv::CsvStore,
    store::{EntryStore, Listing},
    table::RowsDisplay,
};
use yansi::{Condition, Paint};

pub mod add;
pub mod export;
pub mod list;
pub mod search;
pub mod update;

/// Open the entry store backed by the CSV files in `dir`
fn open_store(dir: &Path) -> EntryStore<CsvStore> {
    EntryStore::new(CsvStore::new(dir))
}

/// Colour only if stdout is a terminal and colours are not disabled
fn stdout_colors() -> Condition {
    Condition::from(|| Condition::stdout_is_tty() && Condition::clicolor() && Condition::no_color())
}

/// Print a banner followed by the selected rows
fn print_listing(label: impl Display, listing: &Listing) {
    let banner = format!("=== {} ({}) ===", label, listing.path.display());
    println!();
    println!("{}", banner.bold().whenever(stdout_colors()));
    println!("{}", RowsDisplay(&listing.rows));
}

/// Print an error that ended a command
pub fn print_error(err: &anyhow::Error) {
    println!("{} {err:#}", "Error:".red().bold().whenever(stdout_colors()));
}
