//! 検索 TUI
//!
//! ポケモン検索ウィジェット本体。
//!
//! ## モジュール構成
//!
//! - `app`: Model/Msg/update（Elm Architecture）
//! - `view`: 画面描画

mod app;
mod view;

pub use app::{update, Model, Msg};

use crate::pokemon::Pokemon;
use crate::source::DexSource;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use std::io::{self, stdout};
use std::time::Duration;
use tokio::sync::mpsc;

/// TUI を実行
///
/// 取得は別タスクで1回だけ走り、完了時に `Msg::Loaded` が届く。
/// 取得失敗時は何も届かず、ローディング表示が出続ける（元実装と
/// 同じ挙動で、意図的にハンドリングしない）。
pub async fn run(source: DexSource, allow_delete: bool) -> io::Result<()> {
    let (tx, mut rx) = mpsc::channel::<Vec<Pokemon>>(1);
    tokio::spawn(async move {
        if let Ok(dex) = source.fetch().await {
            // UI 側が先に終了していても送信エラーは無視してよい
            let _ = tx.send(dex).await;
        }
    });

    // ターミナル設定
    terminal::enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut model = Model::new(allow_delete);

    // メインループ
    while !model.should_quit {
        terminal.draw(|f| view::view(f, &mut model))?;

        if let Ok(dex) = rx.try_recv() {
            update(&mut model, Msg::Loaded(dex));
        }

        // ポーリング待ちでスピナーも進める
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(msg) = model.key_to_msg(key) {
                        update(&mut model, msg);
                    }
                }
            }
        } else {
            update(&mut model, Msg::Tick);
        }
    }

    // ターミナルを復元
    terminal::disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    Ok(())
}
