use clap::{Parser, Subcommand};

use crate::commands::{query, search};

#[derive(Debug, Parser)]
#[command(name = "pokesearch")]
#[command(about = "Pokemon search CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

// ヘルプ文言は各コマンドの Args 側 #[command(about/long_about)] に寄せる。
// ここにドキュメントコメントを書くとそちらを上書きしてしまう。
#[derive(Debug, Subcommand)]
pub enum Command {
    Search(search::Args),
    Query(query::Args),
}
