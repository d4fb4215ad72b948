mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{generate, serve, GenerateArgs, ServeArgs};
use tracing_subscriber::EnvFilter;

/// Storefront - multi-brand theme tooling
#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate theme CSS from a variable export
    Generate(GenerateArgs),

    /// Run the storefront HTTP server
    Serve(ServeArgs),
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cwd = std::env::current_dir().expect("Cannot get current directory");

    let result = match cli.command {
        Command::Generate(args) => generate(args, &cwd),
        Command::Serve(args) => serve(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
