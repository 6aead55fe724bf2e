//! データソースアダプタ
//!
//! リモートJSONを起動時に1回だけ取得し、正規化済みコレクションへ
//! 変換する。ペイロード形状は自動判別せず、構築時に指定する。
//! リトライもタイムアウトもしない。

use crate::error::{DexError, Result};
use crate::pokemon::{Pokemon, PokemonId};
use clap::ValueEnum;
use reqwest::Client;
use serde::Deserialize;

/// Classic 形状のデフォルト取得先
pub const DEFAULT_CLASSIC_URL: &str = "https://gist.githubusercontent.com/bar0191/fae6084225b608f25e98b733864a102b/raw/dea83ea9cf4a8a6022bfc89a8ae8df5ab05b6dcc/pokemon.json";

/// ペイロード形状
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceShape {
    /// 素の配列。`Name` / `Types` / `MaxCP` / `Number` / `img`
    Classic,
    /// `{ "results": [...] }`。`name` / `type` / `national_number` /
    /// `sprites.normal`。最大CPを持たない
    National,
}

impl SourceShape {
    /// この形状で削除操作を提供するか
    pub fn allows_delete(&self) -> bool {
        matches!(self, SourceShape::National)
    }
}

/// URL 未指定時に形状ごとのデフォルトを解決する
///
/// National にはデフォルトがないため `None` が返り、呼び出し側で
/// `--url` 必須のエラーにする。
pub fn resolve_url(url: Option<String>, shape: SourceShape) -> Option<String> {
    url.or_else(|| match shape {
        SourceShape::Classic => Some(DEFAULT_CLASSIC_URL.to_string()),
        SourceShape::National => None,
    })
}

/// Classic 形状の生レコード
#[derive(Debug, Deserialize)]
struct ClassicRecord {
    #[serde(rename = "Number")]
    number: PokemonId,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Types")]
    types: Vec<String>,
    #[serde(rename = "MaxCP")]
    max_cp: u32,
    img: String,
}

impl From<ClassicRecord> for Pokemon {
    fn from(raw: ClassicRecord) -> Self {
        Pokemon {
            id: raw.number,
            name: raw.name,
            types: raw.types,
            image_url: raw.img,
            max_cp: Some(raw.max_cp),
        }
    }
}

/// National 形状のエンベロープ
#[derive(Debug, Deserialize)]
struct NationalEnvelope {
    results: Vec<NationalRecord>,
}

/// National 形状の生レコード
#[derive(Debug, Deserialize)]
struct NationalRecord {
    national_number: PokemonId,
    name: String,
    #[serde(rename = "type")]
    types: Vec<String>,
    sprites: Sprites,
}

#[derive(Debug, Deserialize)]
struct Sprites {
    normal: String,
}

impl From<NationalRecord> for Pokemon {
    fn from(raw: NationalRecord) -> Self {
        Pokemon {
            id: raw.national_number,
            name: raw.name,
            types: raw.types,
            image_url: raw.sprites.normal,
            max_cp: None,
        }
    }
}

/// ポケモンデータ取得クライアント
pub struct DexSource {
    client: Client,
    url: String,
    shape: SourceShape,
}

impl DexSource {
    /// 新しいソースを作成
    pub fn new(url: impl Into<String>, shape: SourceShape) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
            shape,
        }
    }

    /// 1回だけGETして正規化済みコレクションを返す
    ///
    /// 必須フィールドを欠くレコードが1件でもあれば、そのレコードを
    /// 読み飛ばすのではなく取得全体を失敗させる。
    pub async fn fetch(&self) -> Result<Vec<Pokemon>> {
        let response = self
            .client
            .get(&self.url)
            .header("User-Agent", "pokesearch-cli")
            .send()
            .await?;
        let status = response.status().as_u16();

        if !response.status().is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(DexError::SourceApi { status, message });
        }

        let body = response.text().await?;
        parse_payload(&body, self.shape)
    }
}

/// 生ペイロードを形状に応じて正規化する
fn parse_payload(body: &str, shape: SourceShape) -> Result<Vec<Pokemon>> {
    match shape {
        SourceShape::Classic => {
            let records: Vec<ClassicRecord> = serde_json::from_str(body)?;
            Ok(records.into_iter().map(Pokemon::from).collect())
        }
        SourceShape::National => {
            let envelope: NationalEnvelope = serde_json::from_str(body)?;
            Ok(envelope.results.into_iter().map(Pokemon::from).collect())
        }
    }
}

#[cfg(test)]
#[path = "source_test.rs"]
mod tests;
