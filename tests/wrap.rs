mod common;

use common::{FixedAdvance, MixedAdvance};
use og_card::layout::{build_lines, clamp_lines, split_tokens, TextMeasure};
use og_card::Px;

#[test]
fn packed_lines_stay_within_the_budget() {
    let measure = FixedAdvance::half();
    let size = Px(44.0);
    let budget = measure.width_of("0123456789", size);

    let stream = split_tokens("the quick brown fox jumps over the lazy dog");
    let lines = build_lines(&measure, size, &stream, budget);

    assert!(lines.len() > 1);
    for line in &lines {
        assert!(
            measure.width_of(line, size) <= budget,
            "line {:?} exceeds the budget",
            line
        );
    }
}

#[test]
fn packing_preserves_token_order_and_joiners() {
    let measure = FixedAdvance::half();
    let size = Px(44.0);
    let budget = measure.width_of("0123456789ab", size);

    let stream = split_tokens("pack my box with five dozen jugs");
    let lines = build_lines(&measure, size, &stream, budget);

    // no token in this title needs breaking, so joining the lines back up
    // must reproduce the normalized title
    assert_eq!(
        lines.join(" "),
        "pack my box with five dozen jugs",
        "tokens were reordered or joiners lost"
    );
}

#[test]
fn character_joined_lines_rejoin_without_spaces() {
    let measure = FixedAdvance::half();
    let size = Px(44.0);
    let budget = measure.width_of("12345", size);

    let stream = split_tokens("あいうえおかきくけこ");
    let lines = build_lines(&measure, size, &stream, budget);

    assert_eq!(lines.len(), 2);
    assert_eq!(lines.concat(), "あいうえおかきくけこ");
}

#[test]
fn an_overwide_token_is_broken_across_lines() {
    let measure = FixedAdvance::half();
    let size = Px(44.0);
    // ten characters per line
    let budget = measure.width_of("0123456789", size);

    let stream = split_tokens(&format!("hi {}", "a".repeat(25)));
    let lines = build_lines(&measure, size, &stream, budget);

    assert_eq!(
        lines,
        vec![
            "hi".to_string(),
            "a".repeat(10),
            "a".repeat(10),
            "a".repeat(5),
        ]
    );
}

#[test]
fn a_trailing_fragment_keeps_accepting_tokens() {
    let measure = FixedAdvance::half();
    let size = Px(44.0);
    let budget = measure.width_of("0123456789", size);

    // the last fragment of the broken token is 2 characters, leaving room
    // for "ok" on the same line
    let stream = split_tokens(&format!("{} ok", "b".repeat(12)));
    let lines = build_lines(&measure, size, &stream, budget);

    assert_eq!(lines, vec!["b".repeat(10), "bb ok".to_string()]);
}

#[test]
fn empty_stream_packs_to_no_lines() {
    let measure = FixedAdvance::half();
    let stream = split_tokens("   ");
    assert!(build_lines(&measure, Px(72.0), &stream, Px(500.0)).is_empty());
}

#[test]
fn uneven_advances_still_respect_the_budget() {
    let measure = MixedAdvance;
    let size = Px(50.0);
    let budget = Px(400.0);

    let stream = split_tokens("WIDE words MIXED with NARROW ones in here");
    let lines = build_lines(&measure, size, &stream, budget);

    for line in &lines {
        assert!(measure.width_of(line, size) <= budget);
    }
    assert_eq!(lines.join(" "), "WIDE words MIXED with NARROW ones in here");
}

#[test]
fn clamping_truncates_and_appends_the_ellipsis() {
    let measure = FixedAdvance::half();
    let size = Px(44.0);
    let budget = measure.width_of("0123456789", size);

    let lines: Vec<String> = (0..5).map(|i| format!("line-{i}-xx")).collect();
    let clamped = clamp_lines(&measure, size, lines, budget, 3, "...");

    assert_eq!(clamped.len(), 3);
    let last = clamped.last().unwrap();
    assert!(last.ends_with("..."), "last line {:?} lacks the ellipsis", last);
    assert!(measure.width_of(last, size) <= budget);
}

#[test]
fn clamping_leaves_short_output_untouched() {
    let measure = FixedAdvance::half();
    let lines = vec!["one".to_string(), "two".to_string()];
    let clamped = clamp_lines(&measure, Px(44.0), lines.clone(), Px(500.0), 3, "...");
    assert_eq!(clamped, lines);
}

#[test]
fn a_budget_too_narrow_for_any_text_leaves_the_bare_ellipsis() {
    let measure = FixedAdvance::half();
    let size = Px(44.0);
    // fits "..." and nothing else
    let budget = measure.width_of("...", size);

    let lines: Vec<String> = (0..4).map(|_| "aaaaaaaaaa".to_string()).collect();
    let clamped = clamp_lines(&measure, size, lines, budget, 3, "...");

    assert_eq!(clamped.len(), 3);
    assert_eq!(clamped.last().unwrap(), "...");
}
