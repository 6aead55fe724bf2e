use crate::pokemon::{Pokemon, PokemonId};
use crate::search::{compute, Query, RESULT_CAP};

fn make_pokemon(id: u64, name: &str, types: &[&str], max_cp: Option<u32>) -> Pokemon {
    Pokemon {
        id: PokemonId::Num(id),
        name: name.to_string(),
        types: types.iter().map(|t| t.to_string()).collect(),
        image_url: String::new(),
        max_cp,
    }
}

fn query(term: &str) -> Query {
    Query {
        term: Some(term.to_string()),
        sort_by_max_cp: false,
    }
}

#[test]
fn none_term_returns_empty_regardless_of_collection() {
    let dex = vec![make_pokemon(25, "Pikachu", &["Electric"], Some(938))];
    let result = compute(&dex, &Query::default());
    assert!(result.is_empty());
}

#[test]
fn empty_term_behaves_like_none() {
    let dex = vec![make_pokemon(25, "Pikachu", &["Electric"], Some(938))];
    let result = compute(&dex, &query(""));
    assert!(result.is_empty());
}

#[test]
fn name_match_is_case_insensitive_substring() {
    let dex = vec![
        make_pokemon(25, "Pikachu", &["Electric"], Some(938)),
        make_pokemon(26, "Raichu", &["Electric"], Some(2182)),
    ];
    let result = compute(&dex, &query("PIKA"));
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "Pikachu");
}

#[test]
fn type_match_is_case_sensitive_exact_element() {
    // 名前一致が case-insensitive なのに対し、タイプ一致は原文ママの
    // 完全一致。元実装から引き継いだ非対称で、意図的に固定している。
    let dex = vec![
        make_pokemon(4, "Charmander", &["Fire"], Some(980)),
        make_pokemon(7, "Squirtle", &["Water"], Some(946)),
    ];

    let lower = compute(&dex, &query("fire"));
    assert!(lower.is_empty());

    let exact = compute(&dex, &query("Fire"));
    assert_eq!(exact.len(), 1);
    assert_eq!(exact[0].name, "Charmander");
}

#[test]
fn type_match_requires_whole_element() {
    let dex = vec![make_pokemon(4, "Charmander", &["Fire"], Some(980))];
    let result = compute(&dex, &query("Fir"));
    assert!(result.is_empty());
}

#[test]
fn entry_matching_name_and_type_appears_twice() {
    // "Psychic" は名前にもタイプにも一致しうる。重複は除去しない
    let dex = vec![make_pokemon(0, "Psychic Mew", &["Psychic"], Some(3299))];
    let result = compute(&dex, &query("Psychic"));
    assert_eq!(result.len(), 2);
    assert_eq!(result[0], result[1]);
}

#[test]
fn name_matches_come_before_type_matches() {
    let dex = vec![
        make_pokemon(6, "Charizard", &["Fire", "Flying"], Some(2889)),
        make_pokemon(146, "Moltres", &["Fire", "Flying"], Some(3240)),
    ];
    // "Moltres" は名前一致せず、タイプ "Fire" では両方一致する…が、
    // 検索語 "Char" では名前一致のみ
    let result = compute(&dex, &query("Char"));
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "Charizard");

    // タイプ検索では連結順（名前一致なし → 入力順のタイプ一致）
    let result = compute(&dex, &query("Fire"));
    assert_eq!(result.len(), 2);
    assert_eq!(result[0].name, "Charizard");
    assert_eq!(result[1].name, "Moltres");
}

#[test]
fn result_is_capped_at_four() {
    let dex: Vec<Pokemon> = (0..10)
        .map(|i| make_pokemon(i, &format!("Pidgey-{i}"), &["Normal"], Some(100)))
        .collect();
    let result = compute(&dex, &query("Pidgey"));
    assert_eq!(result.len(), RESULT_CAP);
    assert_eq!(result[0].name, "Pidgey-0");
    assert_eq!(result[3].name, "Pidgey-3");
}

#[test]
fn sort_by_max_cp_is_descending() {
    let dex = vec![
        make_pokemon(1, "Weak-a", &["Normal"], Some(50)),
        make_pokemon(2, "Strong-a", &["Normal"], Some(100)),
    ];
    let result = compute(
        &dex,
        &Query {
            term: Some("a".to_string()),
            sort_by_max_cp: true,
        },
    );
    assert_eq!(result[0].name, "Strong-a");
    assert_eq!(result[1].name, "Weak-a");
}

#[test]
fn sort_is_stable_for_equal_max_cp() {
    // 同CPの2体は連結順（＝入力順）を保つ
    let dex = vec![
        make_pokemon(1, "First-x", &["Normal"], Some(700)),
        make_pokemon(2, "Second-x", &["Normal"], Some(700)),
        make_pokemon(3, "Top-x", &["Normal"], Some(900)),
    ];
    let result = compute(
        &dex,
        &Query {
            term: Some("x".to_string()),
            sort_by_max_cp: true,
        },
    );
    assert_eq!(result[0].name, "Top-x");
    assert_eq!(result[1].name, "First-x");
    assert_eq!(result[2].name, "Second-x");
}

#[test]
fn sort_without_ranking_values_preserves_order() {
    // National 形状は max_cp を持たないため、ソートは順序を変えない
    let dex = vec![
        make_pokemon(4, "Charmander", &["Fire"], None),
        make_pokemon(5, "Charmeleon", &["Fire"], None),
    ];
    let result = compute(
        &dex,
        &Query {
            term: Some("Char".to_string()),
            sort_by_max_cp: true,
        },
    );
    assert_eq!(result[0].name, "Charmander");
    assert_eq!(result[1].name, "Charmeleon");
}

#[test]
fn zero_matches_is_empty_not_error() {
    let dex = vec![make_pokemon(7, "Squirtle", &["Water"], Some(946))];
    let result = compute(&dex, &query("missingno"));
    assert!(result.is_empty());
}

#[test]
fn empty_collection_is_fine() {
    let result = compute(&[], &query("anything"));
    assert!(result.is_empty());
}
