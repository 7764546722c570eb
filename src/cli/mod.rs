pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// Encrypt Kubernetes secret manifests with sops.
#[derive(Parser, Debug)]
#[command(name = "sopskit", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the sops binary
    #[arg(
        long,
        global = true,
        default_value = "sops",
        env = "SOPSKIT_SOPS_PATH"
    )]
    pub engine: String,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode: only show errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encrypt a secret manifest for a set of recipients
    Encrypt {
        /// File to encrypt (default: standard input)
        file: Option<String>,

        /// Recipient as SCHEME:IDENTIFIER, e.g. age:age1... or
        /// pgp:85D77543B3D624B6. Repeat to add more; order is kept.
        #[arg(short, long = "recipient", value_name = "SCHEME:ID")]
        recipients: Vec<String>,

        /// Write ciphertext to this file instead of standard output
        #[arg(short, long)]
        output: Option<String>,
    },
}
