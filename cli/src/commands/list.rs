use std::path::Path;

use anyhow::Result;
use clap::Args;

use super::{open_store, print_listing};

/// List entries
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Filter by storage (data1, data3, data4, rc2)
    #[arg(long, short)]
    pub storage: Option<String>,

    /// Filter by project name (partial match)
    #[arg(long, short)]
    pub project: Option<String>,
}

/// Run the `list` command
pub fn run_list(args: ListArgs, dir: &Path) -> Result<()> {
    let store = open_store(dir);

    for listing in store.list(args.storage.as_deref(), args.project.as_deref())? {
        print_listing(listing.location.name().to_uppercase(), &listing);
    }

    Ok(())
}
