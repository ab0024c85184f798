//! gcflags command-line tool
//!
//! Validates `-XX:` collector options the way the runtime does at startup:
//! flags file, environment, command line, ergonomics, then every flag
//! constraint.

mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gcflags")]
#[command(about = "Region collector flag validation", long_about = None)]
#[command(version)]
struct Cli {
    /// When to use colors: auto, always, never
    #[arg(long, global = true, value_parser = ["auto", "always", "never"])]
    color: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a set of collector options
    Check {
        /// TOML flags file applied before the command line
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Target address width in bits (32 or 64)
        #[arg(long)]
        address_width: Option<u32>,
        /// Don't print individual diagnostics
        #[arg(short, long)]
        quiet: bool,
        /// Options such as -XX:MaxGCPauseMillis=50 or -XX:-UseG1GC
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// List known flags with their defaults
    List,

    /// Print the maximum heap alignment in bytes
    Alignment,
}

fn main() {
    let cli = Cli::parse();
    let choice = output::resolve_color_choice(cli.color.as_deref());

    let result = match cli.command {
        Commands::Check {
            config,
            address_width,
            quiet,
            args,
        } => {
            let options = commands::check::CheckOptions {
                config,
                address_width,
                quiet,
                args,
            };
            commands::check::execute(&options, choice)
        }
        Commands::List => commands::list::execute(choice).map(|()| true),
        Commands::Alignment => commands::alignment::execute(choice).map(|()| true),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
