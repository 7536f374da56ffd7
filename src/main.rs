mod changelog;
mod cli;
mod display;
mod error;
mod git;
mod models;
mod parser;
mod renderer;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "changelogger")]
#[command(
    about = "Append a formatted entry to a changelog from a commit message",
    long_about = None
)]
struct Cli {
    /// Full commit message text (subject line plus optional body)
    #[arg(required_unless_present = "from_head")]
    message: Option<String>,

    /// Path to the changelog file
    #[arg(default_value = "CHANGELOG.md")]
    path: PathBuf,

    /// Read the commit message from HEAD instead of the command line
    #[arg(long, conflicts_with = "message")]
    from_head: bool,

    /// Repository searched for HEAD (defaults to the current directory)
    #[arg(long, default_value = ".")]
    repo: PathBuf,

    /// Print the updated changelog to stdout instead of writing the file
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    let cli = Cli::parse();

    let result = cli::add::run(cli.message, cli.path, cli.from_head, cli.repo, cli.dry_run);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
