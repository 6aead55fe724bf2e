use crate::dex::remove_first;
use crate::pokemon::{Pokemon, PokemonId};
use crate::search::{compute, Query, RESULT_CAP};
use proptest::prelude::*;

/// 任意のポケモンを生成する（IDは 0..1000 に収める）
fn pokemon_strategy() -> impl Strategy<Value = Pokemon> {
    (
        0u64..1000,
        "[A-Za-z]{1,12}",
        proptest::collection::vec("[A-Za-z]{1,8}", 0..3),
        proptest::option::of(0u32..5000),
    )
        .prop_map(|(id, name, types, max_cp)| Pokemon {
            id: PokemonId::Num(id),
            name,
            types,
            image_url: String::new(),
            max_cp,
        })
}

proptest! {
    /// どんなコレクション・検索語でも結果は4件以下
    #[test]
    fn prop_results_never_exceed_cap(
        dex in proptest::collection::vec(pokemon_strategy(), 0..32),
        term in "[A-Za-z]{0,6}",
        sort in any::<bool>()
    ) {
        let query = Query { term: Some(term), sort_by_max_cp: sort };
        prop_assert!(compute(&dex, &query).len() <= RESULT_CAP);
    }

    /// 検索語が None ならコレクションに関わらず結果は空
    #[test]
    fn prop_none_term_is_always_empty(
        dex in proptest::collection::vec(pokemon_strategy(), 0..32),
        sort in any::<bool>()
    ) {
        let query = Query { term: None, sort_by_max_cp: sort };
        prop_assert!(compute(&dex, &query).is_empty());
    }

    /// 結果はすべて名前一致かタイプ一致のいずれかを満たす
    #[test]
    fn prop_every_result_actually_matches(
        dex in proptest::collection::vec(pokemon_strategy(), 0..32),
        term in "[A-Za-z]{1,6}"
    ) {
        let query = Query { term: Some(term.clone()), sort_by_max_cp: false };
        let lowered = term.to_lowercase();
        for p in compute(&dex, &query) {
            let by_name = p.name.to_lowercase().contains(&lowered);
            let by_type = p.types.iter().any(|t| t == &term);
            prop_assert!(by_name || by_type);
        }
    }

    /// 存在しないIDの削除は入力と等しいコレクションを返す
    #[test]
    fn prop_remove_absent_id_is_noop(
        dex in proptest::collection::vec(pokemon_strategy(), 0..32)
    ) {
        // pokemon_strategy のIDは 0..1000 なので 10_000 は必ず不在
        let next = remove_first(&dex, &PokemonId::Num(10_000));
        prop_assert_eq!(next, dex);
    }

    /// 削除は高々1件しか取り除かない
    #[test]
    fn prop_remove_drops_at_most_one(
        dex in proptest::collection::vec(pokemon_strategy(), 0..32),
        id in 0u64..1000
    ) {
        let next = remove_first(&dex, &PokemonId::Num(id));
        prop_assert!(dex.len() - next.len() <= 1);
    }
}
