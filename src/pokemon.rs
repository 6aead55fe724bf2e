//! 正規化済みポケモンレコード
//!
//! ソース形状ごとの生レコードを `source` モジュールで正規化した後の型。
//! エンジン・ハイライタ・TUI はすべてこの型だけを扱う。

use serde::{Deserialize, Serialize};
use std::fmt;

/// ポケモンの識別子
///
/// ソースによって数値（Classic の `Number`）にも文字列（National の
/// `national_number`）にもなるため、両方を受け付ける。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PokemonId {
    Num(u64),
    Text(String),
}

impl PokemonId {
    /// 数値として解釈できる場合はその値を返す
    fn as_u64(&self) -> Option<u64> {
        match self {
            PokemonId::Num(n) => Some(*n),
            PokemonId::Text(s) => s.parse().ok(),
        }
    }
}

/// 数値と文字列を同一視する緩い等価比較
///
/// `4` と `"4"`（および `"04"`）は同じIDとみなす。両辺とも数値に
/// 解釈できる場合は数値で、そうでなければ文字列同士でのみ比較する。
impl PartialEq for PokemonId {
    fn eq(&self, other: &Self) -> bool {
        match (self.as_u64(), other.as_u64()) {
            (Some(a), Some(b)) => a == b,
            _ => match (self, other) {
                (PokemonId::Text(a), PokemonId::Text(b)) => a == b,
                _ => false,
            },
        }
    }
}

impl Eq for PokemonId {}

impl fmt::Display for PokemonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PokemonId::Num(n) => write!(f, "{n}"),
            PokemonId::Text(s) => write!(f, "{s}"),
        }
    }
}

/// 正規化済みのポケモン1件
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pokemon {
    pub id: PokemonId,
    /// 表示名。名前検索とハイライトの対象
    pub name: String,
    /// タイプ一覧。タイプ検索の対象
    pub types: Vec<String>,
    pub image_url: String,
    /// 最大CP。National ソースには存在しない
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_cp: Option<u32>,
}

#[cfg(test)]
#[path = "pokemon_test.rs"]
mod tests;
