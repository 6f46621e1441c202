use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{fields::fields, init::init, render::render, resolve::resolve},
    exit_status::ExitStatus,
};

/// Dispatches to the command handler for the parsed arguments.
///
/// # Returns
/// - `Ok(ExitStatus)` once the command ran, `Failure` when the field could not be resolved
/// - `Err` if the command could not run (config, catalog or record files unreadable)
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Fields(cmd)) => fields(cmd),
        Some(Command::Resolve(cmd)) => resolve(cmd),
        Some(Command::Render(cmd)) => render(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
