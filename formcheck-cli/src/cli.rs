//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use formcheck::{FieldName, FormKind};

#[derive(Parser)]
#[command(
    name = "formcheck",
    version,
    about = "Validate account signup and login payloads"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Read validation settings from this JSON file.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of the cache directory.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate every field of a payload, as on submit.
    Validate(ValidateArgs),

    /// Validate one field, as on blur.
    Field(FieldArgs),

    /// Print the effective validation settings.
    Config,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Which form the payload belongs to (signup or login).
    #[arg(long, value_name = "FORM")]
    pub form: FormKind,

    /// Print the error map as JSON.
    #[arg(long)]
    pub json: bool,

    /// JSON object of field values; `-` reads stdin.
    #[arg(value_name = "PAYLOAD")]
    pub payload: PathBuf,
}

#[derive(Parser)]
pub struct FieldArgs {
    /// Which form the payload belongs to (signup or login).
    #[arg(long, value_name = "FORM")]
    pub form: FormKind,

    /// Field to validate, by wire name (e.g. confirmPassword).
    #[arg(long, value_name = "FIELD")]
    pub field: FieldName,

    /// Fields the user has already left, comma separated.
    #[arg(long, value_name = "FIELDS", value_delimiter = ',')]
    pub touched: Vec<FieldName>,

    /// Print the error map as JSON.
    #[arg(long)]
    pub json: bool,

    /// JSON object of field values; `-` reads stdin.
    #[arg(value_name = "PAYLOAD")]
    pub payload: PathBuf,
}
