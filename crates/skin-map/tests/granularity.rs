//! Property tests for granularity resolution.

use proptest::prelude::*;

use skin_map::resolve_granularity;

fn hierarchy_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Z0-9.]{0,6}", 0..8)
}

proptest! {
    #[test]
    fn valid_level_joins_prefix(
        (hierarchy, level) in prop::collection::vec("[A-Z0-9.]{0,6}", 1..8)
            .prop_flat_map(|h| {
                let len = h.len();
                (Just(h), 1..=len)
            })
    ) {
        let expected = hierarchy[..level].join("-");
        prop_assert_eq!(resolve_granularity(&hierarchy, Some(level as i64)), expected);
    }

    #[test]
    fn out_of_range_matches_full_path(hierarchy in hierarchy_strategy(), extra in 1i64..1000) {
        let full = resolve_granularity(&hierarchy, None);
        let len = hierarchy.len() as i64;
        prop_assert_eq!(&resolve_granularity(&hierarchy, Some(len)), &full);
        prop_assert_eq!(&resolve_granularity(&hierarchy, Some(len + extra)), &full);
        prop_assert_eq!(&full, &hierarchy.join("-"));
    }

    #[test]
    fn non_positive_level_matches_full_path(hierarchy in hierarchy_strategy(), level in i64::MIN..=0) {
        prop_assert_eq!(
            resolve_granularity(&hierarchy, Some(level)),
            resolve_granularity(&hierarchy, None)
        );
    }
}
