use proptest::prelude::*;
use quickynote_core::{
    tag_adjustment, PriorityClassifier, PriorityLevel, CONFIDENCE_VALUES,
};

fn tag_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("urgent".to_string()),
        Just("Important".to_string()),
        Just("optional".to_string()),
        Just("LOW".to_string()),
        Just("urgent-optional".to_string()),
        "[a-zA-Z-]{0,12}",
    ]
}

proptest! {
    #[test]
    fn tag_adjustment_ignores_order(
        tags in proptest::collection::vec(tag_strategy(), 0..12),
        seed in any::<u64>(),
    ) {
        let mut shuffled = tags.clone();
        let len = shuffled.len();
        if len > 1 {
            shuffled.rotate_left((seed as usize) % len);
            shuffled.reverse();
        }
        prop_assert_eq!(tag_adjustment(&tags), tag_adjustment(&shuffled));
    }

    #[test]
    fn each_tag_contributes_minus_two_zero_or_plus_two(tag in tag_strategy()) {
        let delta = tag_adjustment(&[tag]);
        prop_assert!(delta == -2 || delta == 0 || delta == 2);
    }

    #[test]
    fn level_tracks_sign_and_confidence_stays_in_table(
        sentiment in -1000i32..1000,
        tags in proptest::collection::vec(tag_strategy(), 0..6),
    ) {
        let classifier = PriorityClassifier::new(move |_: &str| sentiment);
        let verdict = classifier.classify("body", &tags);

        prop_assert_eq!(verdict.score, sentiment + tag_adjustment(&tags));
        let expected = if verdict.score < 0 {
            PriorityLevel::High
        } else if verdict.score > 0 {
            PriorityLevel::Low
        } else {
            PriorityLevel::Medium
        };
        prop_assert_eq!(verdict.level, expected);
        prop_assert_eq!(verdict.color, expected.color());
        prop_assert!(CONFIDENCE_VALUES.contains(&verdict.confidence_percent));
        prop_assert_eq!(verdict, classifier.classify("body", &tags));
    }
}
