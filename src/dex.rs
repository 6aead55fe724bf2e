//! コレクション操作
//!
//! 取得済みコレクションは読み込み時の全置換と1件削除でのみ変化する。
//! 削除はエイリアスを書き換えず、新しい `Vec` を返す。

use crate::pokemon::{Pokemon, PokemonId};

/// ID が一致する最初の1件を取り除いた新しいコレクションを返す
///
/// - 比較は `PokemonId` の緩い等価（数値と数値文字列を同一視）
/// - 一致がなければ入力と等しいコレクションを返す（エラーにしない）
/// - 残りの要素の順序は維持する
pub fn remove_first(dex: &[Pokemon], id: &PokemonId) -> Vec<Pokemon> {
    let mut next = dex.to_vec();
    if let Some(idx) = next.iter().position(|p| &p.id == id) {
        next.remove(idx);
    }
    next
}

#[cfg(test)]
#[path = "dex_test.rs"]
mod tests;
