//! pokesearch search コマンド
//!
//! インタラクティブな検索 TUI を起動する。

use crate::source::{self, DexSource, SourceShape};
use crate::tui;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    about = "Interactive Pokemon search",
    long_about = "Launch the interactive search widget. Type to filter by name or type, \
toggle sorting by max CP, and (for the national source shape) delete entries."
)]
pub struct Args {
    /// Payload shape of the remote source
    #[arg(long, value_enum, default_value = "classic")]
    pub source: SourceShape,

    /// Fetch URL (required for --source national)
    #[arg(long)]
    pub url: Option<String>,
}

pub async fn run(args: Args) -> Result<(), String> {
    let url = source::resolve_url(args.url, args.source)
        .ok_or_else(|| "--url is required with --source national".to_string())?;
    let dex_source = DexSource::new(url, args.source);

    tui::run(dex_source, args.source.allows_delete())
        .await
        .map_err(|e| e.to_string())
}
