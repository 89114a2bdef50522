/// Main entry point for the lingo CLI.
///
/// Dispatches to the appropriate command handler based on the parsed arguments.
///
/// # Returns
/// - `Ok(ExitStatus)` when the command ran to completion
/// - `Err` if the command fails (e.g., config invalid, master file malformed)
use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{build::build, init::init},
    exit_status::ExitStatus,
};

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Build(cmd)) => build(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
