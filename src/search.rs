//! フィルタ/ソートエンジン
//!
//! コレクションと検索条件から、上限4件の結果列を計算する。
//! 結果列は状態変化のたびに全再計算され、差分更新はしない。

use crate::pokemon::Pokemon;

/// 結果列の上限件数（ページングではなく表示上の打ち切り）
pub const RESULT_CAP: usize = 4;

/// 検索条件
#[derive(Debug, Clone, Default)]
pub struct Query {
    /// 検索語。`None` は「検索未入力」を意味し、結果は常に空
    pub term: Option<String>,
    /// 最大CP降順でソートするか
    pub sort_by_max_cp: bool,
}

impl Query {
    /// 有効な検索語を返す
    ///
    /// `None` と空文字列はどちらも「未入力」扱い。
    pub fn active_term(&self) -> Option<&str> {
        self.term.as_deref().filter(|t| !t.is_empty())
    }
}

/// 検索条件に応じた結果列を計算する
///
/// 2系列の候補をこの順で連結する。
///
/// 1. 名前一致: 名前が検索語を含む（大文字小文字を区別しない部分一致）
/// 2. タイプ一致: タイプ一覧に検索語と完全一致する要素がある
///    （こちらは原文ママの比較で、大文字小文字を区別する）
///
/// 両方に一致した個体は2回現れる（重複除去しない）。`sort_by_max_cp`
/// 時は最大CP降順の安定ソートで、同値は連結順を保つ。最後に
/// `RESULT_CAP` 件で打ち切る。
pub fn compute(dex: &[Pokemon], query: &Query) -> Vec<Pokemon> {
    let Some(term) = query.active_term() else {
        return Vec::new();
    };

    let lowered = term.to_lowercase();
    let name_matches = dex
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&lowered));
    let type_matches = dex.iter().filter(|p| p.types.iter().any(|t| t == term));

    let mut results: Vec<Pokemon> = name_matches.chain(type_matches).cloned().collect();

    if query.sort_by_max_cp {
        // sort_by は安定ソート。最大CPを持たないソースでは全件同値になり
        // 並びは連結順のまま変わらない
        results.sort_by(|a, b| b.max_cp.cmp(&a.max_cp));
    }

    results.truncate(RESULT_CAP);
    results
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;

#[cfg(test)]
#[path = "search_proptests.rs"]
mod proptests;
