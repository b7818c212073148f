//! Truncation of hierarchy code paths to a requested depth.

use skin_model::CODE_SEPARATOR;

/// Joins the first `level` codes of `hierarchy` with [`CODE_SEPARATOR`].
///
/// Without a level, or with a level that is zero, negative, or deeper than
/// the hierarchy, the whole hierarchy is joined. Callers relying on an
/// out-of-range level being rejected will instead get the most specific
/// code path. Empty codes are kept, so they show up as adjacent separators.
///
/// ```
/// use skin_map::resolve_granularity;
///
/// let path = vec!["L00-L08".to_string(), "L01".to_string()];
/// assert_eq!(resolve_granularity(&path, Some(1)), "L00-L08");
/// assert_eq!(resolve_granularity(&path, None), "L00-L08-L01");
/// assert_eq!(resolve_granularity(&path, Some(7)), "L00-L08-L01");
/// ```
pub fn resolve_granularity(hierarchy: &[String], level: Option<i64>) -> String {
    let depth = level
        .and_then(|level| usize::try_from(level).ok())
        .filter(|depth| (1..=hierarchy.len()).contains(depth))
        .unwrap_or(hierarchy.len());
    hierarchy[..depth].join(CODE_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hierarchy(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|code| (*code).to_string()).collect()
    }

    #[test]
    fn truncates_to_level() {
        let path = hierarchy(&["L00-L99", "L00-L08", "L01", "L01.0"]);
        assert_eq!(resolve_granularity(&path, Some(1)), "L00-L99");
        assert_eq!(resolve_granularity(&path, Some(3)), "L00-L99-L00-L08-L01");
    }

    #[test]
    fn out_of_range_levels_use_full_path() {
        let path = hierarchy(&["L00-L08", "L01"]);
        for level in [None, Some(0), Some(-1), Some(i64::MIN), Some(3), Some(i64::MAX)] {
            assert_eq!(resolve_granularity(&path, level), "L00-L08-L01", "level {level:?}");
        }
    }

    #[test]
    fn empty_segments_are_kept() {
        let path = hierarchy(&["XII", "", "L20"]);
        assert_eq!(resolve_granularity(&path, None), "XII--L20");
        assert_eq!(resolve_granularity(&path, Some(2)), "XII-");
    }

    #[test]
    fn empty_hierarchy() {
        assert_eq!(resolve_granularity(&[], None), "");
        assert_eq!(resolve_granularity(&[], Some(1)), "");
    }
}
