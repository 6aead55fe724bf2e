use crate::cli::{Cli, Command};

pub mod query;
pub mod search;

pub async fn dispatch(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Search(args) => search::run(args).await,
        Command::Query(args) => query::run(args).await,
    }
}
