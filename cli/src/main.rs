use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use commands::{
    add::{run_add, AddArgs},
    export::{run_export, ExportArgs},
    list::{run_list, ListArgs},
    print_error,
    search::{run_search, SearchArgs},
    update::{run_update, UpdateArgs},
};
use env_logger::Env;

mod commands;
mod prompt;

/// Manage LTS data tracking
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Directory containing the storage CSV files (defaults to the current
    /// working directory)
    #[arg(long, short = 'C', global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    List(ListArgs),
    Add(AddArgs),
    Update(UpdateArgs),
    Search(SearchArgs),
    Export(ExportArgs),
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let dir = cli.dir.unwrap_or_default();

    let result = match cli.command {
        Some(Commands::List(args)) => run_list(args, &dir),
        Some(Commands::Add(args)) => run_add(args, &dir),
        Some(Commands::Update(args)) => run_update(args, &dir),
        Some(Commands::Search(args)) => run_search(args, &dir),
        Some(Commands::Export(args)) => run_export(args, &dir),
        None => {
            Cli::command().print_help()?;
            return Ok(());
        }
    };

    // failures are reported but do not change the exit status
    if let Err(err) = result {
        print_error(&err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use assertor::{assert_that, BooleanAssertion, OptionAssertion, ResultAssertion};
    use clap::Parser;

    use super::{Cli, Commands};

    #[test]
    fn no_command() {
        let cli = Cli::try_parse_from(["lts"]).unwrap();
        assert!(cli.command.is_none());
        assert_that!(cli.dir).is_none();
    }

    #[test]
    fn list_filters() {
        let cli = Cli::try_parse_from(["lts", "list", "-s", "rc2", "-p", "ocean"]).unwrap();
        let Some(Commands::List(args)) = cli.command else {
            panic!("expected list command");
        };
        assert_eq!(args.storage.as_deref(), Some("rc2"));
        assert_eq!(args.project.as_deref(), Some("ocean"));
    }

    #[test]
    fn add_with_notes() {
        let cli = Cli::try_parse_from([
            "lts", "-C", "/tmp/lts", "add", "data1", "/mnt/a", "proj1", "-n", "raw",
        ])
        .unwrap();
        assert_eq!(cli.dir.as_deref(), Some(std::path::Path::new("/tmp/lts")));
        let Some(Commands::Add(args)) = cli.command else {
            panic!("expected add command");
        };
        assert_eq!(args.storage, "data1");
        assert_eq!(args.directory, "/mnt/a");
        assert_eq!(args.project, "proj1");
        assert_eq!(args.notes.as_deref(), Some("raw"));
    }

    #[test]
    fn add_rejects_unknown_storage() {
        assert_that!(Cli::try_parse_from(["lts", "add", "data2", "/mnt/a", "proj1"])).is_err();
    }

    #[test]
    fn update_requires_notes() {
        assert_that!(Cli::try_parse_from(["lts", "update", "data1", "/mnt/a", "proj1"])).is_err();
        assert_that!(Cli::try_parse_from([
            "lts", "update", "data1", "/mnt/a", "proj1", "archived"
        ]))
        .is_ok();
    }

    #[test]
    fn export_takes_no_arguments() {
        assert_that!(Cli::try_parse_from(["lts", "export", "extra"])).is_err();
        let cli = Cli::try_parse_from(["lts", "export"]).unwrap();
        assert_that!(matches!(cli.command, Some(Commands::Export(_)))).is_true();
    }
}
