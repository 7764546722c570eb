mod adapters;
mod cli;
mod core;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let args = Cli::parse();

    let result = match &args.command {
        Commands::Encrypt {
            file,
            recipients,
            output,
        } => cli::commands::encrypt::execute(
            file.as_deref(),
            recipients,
            output.as_deref(),
            &args.engine,
            args.verbose,
            args.quiet,
        ),
    };

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
