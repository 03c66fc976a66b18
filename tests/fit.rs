mod common;

use common::FixedAdvance;
use og_card::layout::{layout_title, TextMeasure, TitleOptions};
use og_card::Px;

// the standard card budget: 1200px wide, 96px padding either side
const BUDGET: Px = Px(1008.0);

#[test]
fn a_short_title_gets_one_line_at_the_largest_size() {
    let measure = FixedAdvance::half();
    let layout = layout_title(&measure, "A normal short title", BUDGET, &TitleOptions::default());

    assert_eq!(layout.size, Px(72.0));
    assert_eq!(layout.lines, vec!["A normal short title".to_string()]);
    assert!(!layout.lines[0].ends_with("..."));
}

#[test]
fn an_empty_title_lays_out_as_nothing() {
    let measure = FixedAdvance::half();
    for title in ["", "  \t \n "] {
        let layout = layout_title(&measure, title, BUDGET, &TitleOptions::default());
        assert!(layout.lines.is_empty());
        assert_eq!(layout.size, Px(72.0));
    }
}

#[test]
fn the_largest_fitting_size_wins() {
    let measure = FixedAdvance::half();
    // 86 characters, no spaces: 28 fit per line at 72px (4 lines), 29 fit
    // per line at 68px (3 lines)
    let title = "あ".repeat(86);
    let layout = layout_title(&measure, &title, BUDGET, &TitleOptions::default());

    assert_eq!(layout.size, Px(68.0));
    assert_eq!(layout.lines.len(), 3);
    assert!(!layout.lines[2].ends_with("..."));
    assert_eq!(layout.lines.concat(), title);
}

#[test]
fn chosen_sizes_stay_on_the_configured_grid() {
    let measure = FixedAdvance::half();
    let options = TitleOptions::default();

    for length in [1, 10, 40, 80, 120, 200, 400] {
        let title = "t".repeat(length);
        let layout = layout_title(&measure, &title, BUDGET, &options);
        let size = layout.size.0;

        assert!(
            (44.0..=72.0).contains(&size),
            "size {} out of range for length {}",
            size,
            length
        );
        assert_eq!(
            (72.0 - size) % 4.0,
            0.0,
            "size {} is not a descent step from 72",
            size
        );
    }
}

#[test]
fn a_long_ideographic_title_clamps_to_three_lines() {
    let measure = FixedAdvance::half();
    let title = "語".repeat(200);
    let layout = layout_title(&measure, &title, BUDGET, &TitleOptions::default());

    assert_eq!(layout.size, Px(44.0));
    assert_eq!(layout.lines.len(), 3);
    let last = layout.lines.last().unwrap();
    assert!(last.ends_with("..."), "clamped line {:?} lacks ellipsis", last);
    for line in &layout.lines {
        assert!(measure.width_of(line, layout.size) <= BUDGET);
    }
}

#[test]
fn an_unbreakable_token_falls_back_to_fragments_and_clamps() {
    let measure = FixedAdvance::half();
    // a word-joined stream whose second token overflows every candidate size
    let title = format!("see {}", "x".repeat(400));
    let layout = layout_title(&measure, &title, BUDGET, &TitleOptions::default());

    assert_eq!(layout.size, Px(44.0));
    assert_eq!(layout.lines.len(), 3);
    assert!(layout.lines.last().unwrap().ends_with("..."));
    // the middle line is a raw fragment of the long token
    assert!(layout.lines[1].chars().all(|ch| ch == 'x'));
}

#[test]
fn layout_is_deterministic() {
    let measure = FixedAdvance::half();
    let title = "an unreasonably long title that will certainly need wrapping onto \
                 several lines and then some more text on top of that for good measure";
    let a = layout_title(&measure, title, BUDGET, &TitleOptions::default());
    let b = layout_title(&measure, title, BUDGET, &TitleOptions::default());
    assert_eq!(a, b);
}

#[test]
fn custom_options_are_honoured() {
    let measure = FixedAdvance::half();
    let options = TitleOptions {
        max_size: Px(32.0),
        min_size: Px(16.0),
        step: Px(8.0),
        max_lines: 2,
        ellipsis: "…".to_string(),
    };

    let title = "字".repeat(300);
    let layout = layout_title(&measure, &title, BUDGET, &options);

    assert_eq!(layout.size, Px(16.0));
    assert_eq!(layout.lines.len(), 2);
    assert!(layout.lines.last().unwrap().ends_with('…'));
}
