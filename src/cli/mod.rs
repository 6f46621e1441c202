//! Command-line interface layer.
//!
//! - `args`: clap argument definitions
//! - `commands`: one handler per subcommand
//! - `report`: colored terminal output

pub mod args;
mod commands;
pub mod exit_status;
mod report;
mod run;

use anyhow::Result;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    run::run(args)
}
