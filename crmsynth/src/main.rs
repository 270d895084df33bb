// crmsynth/src/main.rs

use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            generation,
            format,
            out_dir,
        } => commands::generate::execute(generation, format, out_dir),
        Commands::Dashboard { generation, json } => commands::dashboard::execute(generation, json),
        Commands::Recommend { generation, json } => commands::recommend::execute(generation, json),
        Commands::Report { generation, out } => commands::report::execute(generation, out),
    }
}
