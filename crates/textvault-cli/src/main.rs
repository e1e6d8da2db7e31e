//! TextVault CLI
//!
//! Command-line interface for the document vault. This is the
//! presentation boundary: the only place storage errors are rendered
//! for a user.

use clap::{Parser, Subcommand};
use textvault_core::logging::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "textvault")]
#[command(about = "TextVault - store text documents as compressed blobs", long_about = None)]
struct Cli {
    /// Emit JSON logs instead of human-readable output
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Create the store file if it does not exist yet
    Init(commands::init::InitArgs),
    /// Save a document under a name (from a file or stdin)
    Save(commands::save::SaveArgs),
    /// Open a stored document and print it
    Open(commands::open::OpenArgs),
    /// List all stored document names
    List(commands::list::ListArgs),
}

fn main() {
    let cli = Cli::parse();

    init(if cli.log_json {
        Profile::Production
    } else {
        Profile::Development
    });

    let result = match cli.command {
        Commands::Init(args) => commands::init::execute(args),
        Commands::Save(args) => commands::save::execute(args),
        Commands::Open(args) => commands::open::execute(args),
        Commands::List(args) => commands::list::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
