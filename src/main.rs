mod cli;
mod commands;
mod dex;
mod error;
mod highlight;
mod pokemon;
mod search;
mod source;
mod tui;

use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    if let Err(err) = commands::dispatch(cli).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
