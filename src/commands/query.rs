//! pokesearch query コマンド
//!
//! 1回だけ取得して検索し、結果をテーブルまたはJSONで出力する。
//! TUI と同じエンジン・同じ上限4件で計算する。

use crate::pokemon::Pokemon;
use crate::search::{self, Query};
use crate::source::{self, DexSource, SourceShape};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(
    about = "One-shot search against the remote source",
    long_about = "Fetch the source once, run the search pipeline for TERM, and print the \
capped result list (at most 4 entries) as a table or as JSON."
)]
pub struct Args {
    /// Search term (matched against name and type)
    pub term: String,

    /// Sort results by max CP (descending)
    #[arg(long)]
    pub max_cp: bool,

    /// Payload shape of the remote source
    #[arg(long, value_enum, default_value = "classic")]
    pub source: SourceShape,

    /// Fetch URL (required for --source national)
    #[arg(long)]
    pub url: Option<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: Args) -> Result<(), String> {
    let url = source::resolve_url(args.url.clone(), args.source)
        .ok_or_else(|| "--url is required with --source national".to_string())?;
    let dex_source = DexSource::new(url, args.source);

    // 1. 取得（スピナー付き。TUI と違いエラーはそのまま返す）
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} Fetching...")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(80));
    let dex = dex_source.fetch().await.map_err(|e| e.to_string())?;
    pb.finish_and_clear();

    // 2. 検索
    let query = Query {
        term: Some(args.term.clone()),
        sort_by_max_cp: args.max_cp,
    };
    let results = search::compute(&dex, &query);

    // 3. 出力
    if args.json {
        print_json(&results)
    } else {
        print_table(&results, &args.term);
        Ok(())
    }
}

fn print_json(results: &[Pokemon]) -> Result<(), String> {
    // 空の場合も [] を出力
    serde_json::to_string_pretty(results)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize results: {}", e))
}

fn print_table(results: &[Pokemon], term: &str) {
    if results.is_empty() {
        println!("{} No results", "•".yellow());
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "Name", "Types", "Max CP", "Image"]);

    for pokemon in results {
        let max_cp = pokemon
            .max_cp
            .map(|cp| cp.to_string())
            .unwrap_or_else(|| "-".to_string());

        table.add_row(vec![
            pokemon.id.to_string(),
            highlighted_name(&pokemon.name, term),
            format_types(&pokemon.types),
            max_cp,
            pokemon.image_url.clone(),
        ]);
    }

    println!("{table}");
    println!("{} result(s), capped at {}", results.len(), search::RESULT_CAP);
}

/// 一致セグメントだけ色付けした名前を作る
fn highlighted_name(name: &str, term: &str) -> String {
    crate::highlight::highlight(name, term)
        .into_iter()
        .map(|segment| {
            if segment.is_match {
                segment.text.black().on_yellow().to_string()
            } else {
                segment.text
            }
        })
        .collect()
}

/// タイプ一覧を表示用に連結する
fn format_types(types: &[String]) -> String {
    if types.is_empty() {
        return "-".to_string();
    }
    types.join(", ")
}

#[cfg(test)]
#[path = "query_test.rs"]
mod tests;
