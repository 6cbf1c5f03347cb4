use std::{
    path::Path,
    time::{Duration, Instant},
};

use anyhow::Result;
use chrono::Local;
use clap::Args;
use humantime::format_duration;
use lts_core::output::xlsx::{export_file_name, XlsxWorkbook};

use super::open_store;

/// Export all CSV files to Excel
#[derive(Args, Debug)]
pub struct ExportArgs {}

/// Run the `export` command
pub fn run_export(_args: ExportArgs, dir: &Path) -> Result<()> {
    let store = open_store(dir);

    let export_start = Instant::now();

    let date = Local::now().format("%Y%m%d").to_string();
    let mut workbook = XlsxWorkbook::new(dir.join(export_file_name(&date)));
    let sheets = store.export_all(&mut workbook)?;

    for sheet in &sheets {
        println!(
            "Exported {} to sheet '{}'",
            sheet.source.display(),
            sheet.location
        );
    }
    println!("\nCreated Excel file: {}", workbook.path().display());

    eprintln!(
        "Exported {} sheets in {}",
        sheets.len(),
        format_duration(Duration::from_millis(
            export_start.elapsed().as_millis() as u64
        ))
    );

    Ok(())
}
