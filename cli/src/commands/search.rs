use std::path::Path;

use anyhow::Result;
use clap::Args;

use super::{open_store, print_listing};

/// Search all files
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search term
    pub term: String,
}

/// Run the `search` command
pub fn run_search(args: SearchArgs, dir: &Path) -> Result<()> {
    let store = open_store(dir);

    println!("Searching for '{}' across all files...", args.term);
    let listings = store.search_all(&args.term)?;

    for listing in &listings {
        print_listing(
            format!("Found in {}", listing.location.name().to_uppercase()),
            listing,
        );
    }

    if listings.is_empty() {
        println!("No matches found.");
    }

    Ok(())
}
