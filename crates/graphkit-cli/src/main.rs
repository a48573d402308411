//! The `graphkit` binary: parse arguments, read input, dispatch to the
//! command modules, and map failures to stable exit codes (1 = logical
//! failure, 2 = input failure).
use clap::Parser;

mod cli;
mod cmd;
mod error;
mod io;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin, TraversalOrder};

use crate::error::CliError;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}

/// Dispatches the parsed command line to the matching command module.
fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Traverse { file, start, order } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::traverse::run(&content, start, *order, &cli.format)
        }
        Command::Distances { file, start, to } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::distances::run(&content, start, to.as_deref(), &cli.format)
        }
        Command::Mst { file } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::mst::run(&content, &cli.format)
        }
        Command::Toposort { file } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::toposort::run(&content, &cli.format)
        }
        Command::Inspect { file } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::inspect::run(&content, &cli.format)
        }
        Command::Version => {
            println!("{}", graphkit_core::version());
            Ok(())
        }
    }
}
