//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `fields`: List the composite fields a partial addresses
//! - `resolve`: Resolve a field's label, hint, placeholder, value and prefill state
//! - `render`: Render a partial to HTML
//! - `init`: Initialize formfill configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::render::PartialKind;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Resolve(cmd)) => cmd.common.verbose,
            Some(Command::Render(cmd)) => cmd.common.verbose,
            Some(Command::Fields(_)) | Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by commands that read a catalog.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Locale (overrides config file)
    #[arg(long)]
    pub locale: Option<String>,

    /// Messages directory path (overrides config file)
    #[arg(long)]
    pub messages_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// The records and options a field is resolved against.
#[derive(Debug, Clone, Default, Args)]
pub struct FormArgs {
    /// JSON file with the record being edited
    #[arg(long)]
    pub record: Option<PathBuf>,

    /// JSON file with the previous record used for prefill
    #[arg(long)]
    pub previous: Option<PathBuf>,

    /// i18n namespace of the form (overrides config file)
    #[arg(long)]
    pub i18n_base: Option<String>,

    /// Per-field options as a JSON object
    #[arg(long)]
    pub options: Option<String>,

    /// Field never prefilled, in addition to the config file
    /// Can be specified multiple times: --exclude passed --exclude notes
    #[arg(long)]
    pub exclude: Vec<String>,
}

#[derive(Debug, Args)]
pub struct FieldsCommand {
    /// Field name, bare or suffixed
    pub field: String,
    /// Partial kind descriptor, e.g. pass_fail_comment
    pub partial: String,
}

#[derive(Debug, Args)]
pub struct ResolveCommand {
    /// Field to resolve
    pub field: String,

    #[command(flatten)]
    pub form: FormArgs,

    #[command(flatten)]
    pub common: CommonArgs,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct RenderCommand {
    #[arg(value_enum)]
    pub partial: PartialKind,

    /// Field to render (input name for search_field)
    pub field: Option<String>,

    #[command(flatten)]
    pub form: FormArgs,

    #[command(flatten)]
    pub common: CommonArgs,

    /// Search form action (search_field only)
    #[arg(long)]
    pub url: Option<String>,

    /// Current search query (search_field only)
    #[arg(long)]
    pub query: Option<String>,

    /// Leading blank option text (select only)
    #[arg(long)]
    pub prompt: Option<String>,

    /// Free-text input with suggestions (select only)
    #[arg(long)]
    pub combobox: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the sibling fields a partial addresses
    Fields(FieldsCommand),
    /// Resolve label, hint, placeholder, value and prefill state of a field
    Resolve(ResolveCommand),
    /// Render a partial as HTML
    Render(RenderCommand),
    /// Initialize a new .formfillrc.json configuration file
    Init,
}
