use std::path::Path;

use anyhow::Result;
use clap::{builder::PossibleValuesParser, Args};
use lts_core::{location::StorageLocation, store::AddOutcome};

use super::open_store;
use crate::prompt::PromptConfirm;

/// Add new entry
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Storage location
    #[arg(value_parser = PossibleValuesParser::new(StorageLocation::names()))]
    pub storage: String,

    /// Directory name
    pub directory: String,

    /// Project name
    pub project: String,

    /// Optional notes
    #[arg(long, short)]
    pub notes: Option<String>,
}

/// Run the `add` command
pub fn run_add(args: AddArgs, dir: &Path) -> Result<()> {
    let mut store = open_store(dir);

    let outcome = store.add(
        &args.storage,
        &args.directory,
        &args.project,
        args.notes.as_deref(),
        &mut PromptConfirm::stdio(),
    )?;

    if let AddOutcome::Added(path) = outcome {
        println!("Added entry to {}", path.display());
    }

    Ok(())
}
