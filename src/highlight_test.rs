use crate::highlight::{highlight, Segment};

fn seg(text: &str, is_match: bool) -> Segment {
    Segment {
        text: text.to_string(),
        is_match,
    }
}

#[test]
fn match_at_start_yields_leading_empty_segment() {
    let segments = highlight("Pikachu", "pika");
    assert_eq!(
        segments,
        vec![seg("", false), seg("Pika", true), seg("chu", false)]
    );
}

#[test]
fn original_casing_is_preserved() {
    let segments = highlight("PIKACHU", "pika");
    assert_eq!(segments[1], seg("PIKA", true));
}

#[test]
fn match_at_end_yields_trailing_empty_segment() {
    let segments = highlight("Pikachu", "chu");
    assert_eq!(
        segments,
        vec![seg("Pika", false), seg("chu", true), seg("", false)]
    );
}

#[test]
fn whole_name_match_is_wrapped_in_empty_segments() {
    let segments = highlight("Mew", "mew");
    assert_eq!(
        segments,
        vec![seg("", false), seg("Mew", true), seg("", false)]
    );
}

#[test]
fn no_occurrence_yields_single_unmatched_segment() {
    let segments = highlight("Squirtle", "fire");
    assert_eq!(segments, vec![seg("Squirtle", false)]);
}

#[test]
fn repeated_occurrences_interleave() {
    let segments = highlight("Wobbuffet", "b");
    assert_eq!(
        segments,
        vec![
            seg("Wo", false),
            seg("b", true),
            seg("", false),
            seg("b", true),
            seg("uffet", false),
        ]
    );
}

#[test]
fn regex_metacharacters_are_literal() {
    // "." が任意の1文字として解釈されないこと
    let segments = highlight("Mr. Mime", ".");
    assert_eq!(
        segments,
        vec![seg("Mr", false), seg(".", true), seg(" Mime", false)]
    );
}

#[test]
fn empty_term_degenerates_to_single_segment() {
    let segments = highlight("Pikachu", "");
    assert_eq!(segments, vec![seg("Pikachu", false)]);
}

#[test]
fn inputs_are_not_mutated() {
    let name = "Eevee";
    let term = "eve";
    let _ = highlight(name, term);
    assert_eq!(name, "Eevee");
    assert_eq!(term, "eve");
}
