use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "msgsig", version, about = "Verify personal_sign messages")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verify a signed message payload
    Verify {
        #[command(flatten)]
        input: InputArgs,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Pretty-print a pasted payload, keeping key order
    Normalize(InputArgs),
    /// Print the placeholder payload
    Example,
    /// Sign a message with `MSGSIG_PRIVATE_KEY` or a key file
    Sign {
        #[arg(short, long)]
        message: String,

        #[arg(long)]
        key_file: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct InputArgs {
    /// Read the payload from a file, `-` for stdin
    #[arg(short, long, conflicts_with = "json")]
    pub input: Option<PathBuf>,

    /// Pass the payload inline
    #[arg(long)]
    pub json: Option<String>,
}

#[derive(ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `<address> signed <msg>`
    #[default]
    Text,
    /// The verified identity as JSON
    Json,
}
