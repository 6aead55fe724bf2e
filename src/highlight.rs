//! ハイライタ
//!
//! 表示名を検索語の出現箇所で分割し、一致/不一致のセグメント列を作る。
//! 描画層（TUI のスパン、CLI の色付け）はこの列をそのまま並べるだけ。

use regex::RegexBuilder;

/// ハイライト済みセグメント
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub is_match: bool,
}

/// 表示名を検索語の出現（大文字小文字を区別しない）で分割する
///
/// 一致部分もセグメントとして残す捕捉分割。先頭で一致した場合は空の
/// 不一致セグメントが先頭に、末尾で一致した場合は末尾に入る。出現が
/// なければ全体が1つの不一致セグメントになる。元の大文字小文字は
/// そのまま保持される。
///
/// `is_match` は小文字化した比較で検索語と等しいセグメントにのみ立つ。
///
/// 空の検索語はエンジン側の短絡で実際には到達しない。到達した場合は
/// 全体を1つの不一致セグメントとして返す縮退動作とする。
pub fn highlight(name: &str, term: &str) -> Vec<Segment> {
    if term.is_empty() {
        return vec![Segment {
            text: name.to_string(),
            is_match: false,
        }];
    }

    // 検索語はリテラルとしてエスケープする（元実装は生のまま正規表現に
    // 渡していたが、メタ文字入力で壊れるためここで直した）
    let pattern = RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
        .expect("escaped literal is always a valid pattern");

    let term_lower = term.to_lowercase();
    let mut segments = Vec::new();
    let mut cursor = 0;
    for m in pattern.find_iter(name) {
        segments.push(tagged(&name[cursor..m.start()], &term_lower));
        segments.push(tagged(m.as_str(), &term_lower));
        cursor = m.end();
    }

    if segments.is_empty() {
        return vec![tagged(name, &term_lower)];
    }

    segments.push(tagged(&name[cursor..], &term_lower));
    segments
}

fn tagged(text: &str, term_lower: &str) -> Segment {
    Segment {
        text: text.to_string(),
        is_match: text.to_lowercase() == term_lower,
    }
}

#[cfg(test)]
#[path = "highlight_test.rs"]
mod tests;
