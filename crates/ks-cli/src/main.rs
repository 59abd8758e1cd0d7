//! Terminal frontend for the Kammerspiel text-adventure engine.

mod repl;

use std::process;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "ks",
    about = "Kammerspiel — a birthday-morning text adventure",
    version
)]
struct Cli {
    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = repl::run() {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
