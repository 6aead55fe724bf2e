//! 検索 TUI の Elm Architecture ベースのアプリケーション構造
//!
//! - `Model`: アプリケーション全体の状態（コレクション + 検索条件 + 画面）
//! - `Msg`: アプリケーションへのメッセージ
//! - `update`: 状態更新。コレクションか検索条件が変わるメッセージは
//!   必ず戻る前に結果列を再計算する

use crate::dex::remove_first;
use crate::pokemon::Pokemon;
use crate::search::{self, Query};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;

// ============================================================================
// Model（アプリケーション全体の状態）
// ============================================================================

/// アプリケーション全体の状態
pub struct Model {
    /// 取得済みコレクション
    pub dex: Vec<Pokemon>,
    /// 現在の結果列（常に `RESULT_CAP` 件以下）
    pub results: Vec<Pokemon>,
    /// 検索条件
    pub query: Query,
    /// 取得が未完了か
    pub is_loading: bool,
    /// 削除操作を許可するか（National ソースのみ）
    pub allow_delete: bool,
    /// 結果リストの選択状態
    pub list_state: ListState,
    /// スピナーのフレームカウンタ
    pub tick: u64,
    /// 終了フラグ
    pub should_quit: bool,
}

impl Model {
    /// 新しいモデルを作成（取得完了までローディング状態）
    pub fn new(allow_delete: bool) -> Self {
        Self {
            dex: Vec::new(),
            results: Vec::new(),
            query: Query::default(),
            is_loading: true,
            allow_delete,
            list_state: ListState::default(),
            tick: 0,
            should_quit: false,
        }
    }

    /// キー入力をメッセージに変換
    pub fn key_to_msg(&self, key: KeyEvent) -> Option<Msg> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => Some(Msg::Quit),
            KeyCode::Char('s') if ctrl => Some(Msg::ToggleSort),
            KeyCode::Char('d') if ctrl => {
                if self.allow_delete {
                    Some(Msg::Delete)
                } else {
                    None
                }
            }
            KeyCode::Esc => {
                if self.query.active_term().is_some() {
                    Some(Msg::ClearTerm)
                } else {
                    Some(Msg::Quit)
                }
            }
            KeyCode::Up => Some(Msg::Up),
            KeyCode::Down => Some(Msg::Down),
            KeyCode::Backspace => Some(Msg::Backspace),
            KeyCode::Char(c) if !ctrl => Some(Msg::Input(c)),
            _ => None,
        }
    }

    /// 現在選択中の結果を取得
    fn selected_result(&self) -> Option<&Pokemon> {
        self.list_state.selected().and_then(|i| self.results.get(i))
    }
}

// ============================================================================
// Msg（メッセージ）
// ============================================================================

/// アプリケーションへのメッセージ
pub enum Msg {
    /// 終了
    Quit,
    /// 検索語に1文字追加
    Input(char),
    /// 検索語から1文字削除
    Backspace,
    /// 検索語をクリア
    ClearTerm,
    /// 最大CPソートの切り替え
    ToggleSort,
    /// 選択を上へ
    Up,
    /// 選択を下へ
    Down,
    /// 選択中の結果をコレクションから削除
    Delete,
    /// 取得完了（コレクション全置換）
    Loaded(Vec<Pokemon>),
    /// スピナー用の定期tick
    Tick,
}

// ============================================================================
// update（状態更新）
// ============================================================================

/// メッセージに応じて状態を更新
pub fn update(model: &mut Model, msg: Msg) {
    match msg {
        Msg::Quit => {
            model.should_quit = true;
        }
        Msg::Input(c) => {
            model.query.term.get_or_insert_with(String::new).push(c);
            recompute(model);
        }
        Msg::Backspace => {
            if let Some(term) = model.query.term.as_mut() {
                term.pop();
            }
            recompute(model);
        }
        Msg::ClearTerm => {
            model.query.term = None;
            recompute(model);
        }
        Msg::ToggleSort => {
            model.query.sort_by_max_cp = !model.query.sort_by_max_cp;
            recompute(model);
        }
        Msg::Up => {
            let current = model.list_state.selected().unwrap_or(0);
            if !model.results.is_empty() {
                model.list_state.select(Some(current.saturating_sub(1)));
            }
        }
        Msg::Down => {
            let len = model.results.len();
            if len > 0 {
                let current = model.list_state.selected().unwrap_or(0);
                model.list_state.select(Some((current + 1).min(len - 1)));
            }
        }
        Msg::Delete => {
            if let Some(id) = model.selected_result().map(|p| p.id.clone()) {
                model.dex = remove_first(&model.dex, &id);
                // 検索語・ソート設定はそのまま、縮んだコレクションで再計算
                recompute(model);
            }
        }
        Msg::Loaded(dex) => {
            model.dex = dex;
            model.is_loading = false;
            recompute(model);
        }
        Msg::Tick => {
            model.tick = model.tick.wrapping_add(1);
        }
    }
}

/// 結果列を全再計算し、選択状態を新しい結果に整合させる
fn recompute(model: &mut Model) {
    model.results = search::compute(&model.dex, &model.query);

    if model.results.is_empty() {
        model.list_state.select(None);
    } else {
        let idx = model
            .list_state
            .selected()
            .unwrap_or(0)
            .min(model.results.len() - 1);
        model.list_state.select(Some(idx));
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
