//! 検索 TUI の view（描画）
//!
//! ソートトグル・検索入力・結果リスト・ヘルプの4段構成。

use super::app::Model;
use crate::highlight::highlight;
use crate::pokemon::Pokemon;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

/// 結果なし時に表示するプレースホルダ画像
const MISSINGNO_URL: &str = "https://cyndiquil721.files.wordpress.com/2014/02/missingno.png";

/// ローディングスピナーのフレーム
const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// 一致部分のハイライトスタイル（元実装の #845d0d 背景に合わせる）
fn match_style() -> Style {
    Style::default().bg(Color::Rgb(0x84, 0x5d, 0x0d))
}

/// 画面を描画
pub fn view(f: &mut Frame, model: &mut Model) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // ソートトグル
            Constraint::Length(3), // 検索入力
            Constraint::Min(1),    // 結果リスト
            Constraint::Length(1), // ヘルプ
        ])
        .split(f.area());

    view_sort_toggle(f, model, chunks[0]);
    view_search_input(f, model, chunks[1]);
    view_results(f, model, chunks[2]);
    view_help(f, model, chunks[3]);
}

/// ソートトグル（チェックボックス風）を描画
fn view_sort_toggle(f: &mut Frame, model: &Model, area: Rect) {
    let mark = if model.query.sort_by_max_cp { "x" } else { " " };
    let toggle = Paragraph::new(format!(" [{mark}] Maximum Combat Points"))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(toggle, area);
}

/// 検索入力欄を描画
fn view_search_input(f: &mut Frame, model: &Model, area: Rect) {
    let term = model.query.term.as_deref().unwrap_or("");
    let input = Paragraph::new(term)
        .block(Block::default().title(" Pokemon or type ").borders(Borders::ALL));
    f.render_widget(input, area);
}

/// 結果リスト（またはローディング/結果なし表示）を描画
fn view_results(f: &mut Frame, model: &mut Model, area: Rect) {
    if model.is_loading {
        let frame = SPINNER_FRAMES[(model.tick as usize) % SPINNER_FRAMES.len()];
        let loading = Paragraph::new(format!(" {frame} Loading..."))
            .style(Style::default().fg(Color::Yellow));
        f.render_widget(loading, area);
        return;
    }

    let term = model.query.active_term().unwrap_or("");

    let items: Vec<ListItem> = if model.results.is_empty() {
        if term.is_empty() {
            // 検索未入力時は何も表示しない
            Vec::new()
        } else {
            vec![no_results_item()]
        }
    } else {
        model
            .results
            .iter()
            .map(|p| result_item(p, term))
            .collect()
    };

    let title = format!(" Suggestions ({}) ", model.results.len());
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, &mut model.list_state);
}

/// 結果1件分のリストアイテムを作る
fn result_item(pokemon: &Pokemon, term: &str) -> ListItem<'static> {
    // 名前行: 一致セグメントだけ背景色を付ける
    let mut name_spans: Vec<Span> = vec![Span::raw("  ")];
    for segment in highlight(&pokemon.name, term) {
        if segment.text.is_empty() {
            continue;
        }
        let span = if segment.is_match {
            Span::styled(segment.text, match_style())
        } else {
            Span::raw(segment.text)
        };
        name_spans.push(span);
    }
    if let Some(cp) = pokemon.max_cp {
        name_spans.push(Span::styled(
            format!("  CP {cp}"),
            Style::default().fg(Color::Cyan),
        ));
    }

    // 情報行: タイプバッジと画像URL
    let badges = pokemon
        .types
        .iter()
        .map(|t| format!("[{t}]"))
        .collect::<Vec<_>>()
        .join(" ");
    let info_line = Line::from(vec![
        Span::raw("    "),
        Span::styled(badges, Style::default().fg(Color::Green)),
        Span::raw(" "),
        Span::styled(
            pokemon.image_url.clone(),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    ListItem::new(vec![Line::from(name_spans), info_line])
}

/// 「No results」のリストアイテムを作る
fn no_results_item() -> ListItem<'static> {
    ListItem::new(vec![
        Line::from(Span::styled(
            "  No results",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("    {MISSINGNO_URL}"),
            Style::default().fg(Color::DarkGray),
        )),
    ])
}

/// ヘルプ行を描画
fn view_help(f: &mut Frame, model: &Model, area: Rect) {
    let delete_hint = if model.allow_delete {
        " | Ctrl-D: delete"
    } else {
        ""
    };
    let help = Paragraph::new(format!(
        " type: search | Ctrl-S: sort by max CP | Up/Down: move{delete_hint} | Esc: clear/quit"
    ))
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
