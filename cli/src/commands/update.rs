use std::path::Path;

use anyhow::Result;
use clap::{builder::PossibleValuesParser, Args};
use log::debug;
use lts_core::location::StorageLocation;

use super::open_store;

/// Update notes for existing entry
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Storage location
    #[arg(value_parser = PossibleValuesParser::new(StorageLocation::names()))]
    pub storage: String,

    /// Directory name
    pub directory: String,

    /// Project name
    pub project: String,

    /// New notes
    pub notes: String,
}

/// Run the `update` command
pub fn run_update(args: UpdateArgs, dir: &Path) -> Result<()> {
    let mut store = open_store(dir);

    let updated = store.update_notes(&args.storage, &args.directory, &args.project, &args.notes)?;
    debug!("{} rows matched", updated.rows);
    println!("Updated notes in {}", updated.path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use assertor::{assert_that, ResultAssertion};
    use tempdir::TempDir;

    use super::{run_update, UpdateArgs};

    fn args(project: &str, notes: &str) -> UpdateArgs {
        UpdateArgs {
            storage: "data4".to_string(),
            directory: "/mnt/a".to_string(),
            project: project.to_string(),
            notes: notes.to_string(),
        }
    }

    #[test]
    fn update_existing() {
        let dir = TempDir::new("lts_cli").unwrap();
        let path = dir.path().join("lts_data4.csv");
        fs::write(&path, "Directory,Project,Notes\n/mnt/a,proj1,\n").unwrap();

        assert_that!(run_update(args("proj1", "done"), dir.path())).is_ok();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Directory,Project,Notes\n/mnt/a,proj1,done\n"
        );
    }

    #[test]
    fn update_missing_file() {
        let dir = TempDir::new("lts_cli").unwrap();
        let err = run_update(args("proj1", "done"), dir.path()).unwrap_err();
        assert!(err.to_string().ends_with("lts_data4.csv does not exist"));
    }

    #[test]
    fn update_unknown_entry() {
        let dir = TempDir::new("lts_cli").unwrap();
        let path = dir.path().join("lts_data4.csv");
        fs::write(&path, "Directory,Project,Notes\n/mnt/a,proj1,\n").unwrap();

        let err = run_update(args("proj2", "done"), dir.path()).unwrap_err();
        assert_eq!(err.to_string(), "No entry found for /mnt/a/proj2");
    }
}
