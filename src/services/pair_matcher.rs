use crate::models::{base_name, Pair};
use std::path::PathBuf;

/// Pair each primary file with the first secondary file sharing its base name.
/// Primary order is preserved; unmatched primaries produce nothing.
pub fn match_pairs(primary: &[PathBuf], secondary: &[PathBuf]) -> Vec<Pair> {
    primary
        .iter()
        .filter_map(|primary_path| {
            let key = base_name(primary_path);
            secondary
                .iter()
                .find(|secondary_path| base_name(secondary_path) == key)
                .map(|secondary_path| Pair::new(primary_path.clone(), secondary_path.clone()))
        })
        .collect()
}

/// Primary files that `match_pairs` dropped
pub fn unmatched_primaries(primary: &[PathBuf], pairs: &[Pair]) -> Vec<PathBuf> {
    primary
        .iter()
        .filter(|path| !pairs.iter().any(|pair| &pair.primary == *path))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_matches_by_base_name() {
        let primary = paths(&["jpg/x.jpg", "jpg/y.jpg"]);
        let secondary = paths(&["raw/y.cr2", "raw/x.cr2"]);

        let pairs = match_pairs(&primary, &secondary);
        assert_eq!(
            pairs,
            vec![
                Pair::new("jpg/x.jpg".into(), "raw/x.cr2".into()),
                Pair::new("jpg/y.jpg".into(), "raw/y.cr2".into()),
            ]
        );
    }

    #[test]
    fn test_unmatched_primary_is_dropped() {
        let primary = paths(&["jpg/a.jpg", "jpg/lonely.jpg"]);
        let secondary = paths(&["raw/a.nef", "raw/other.nef"]);

        let pairs = match_pairs(&primary, &secondary);
        assert_eq!(pairs.len(), 1);
        assert_eq!(unmatched_primaries(&primary, &pairs), paths(&["jpg/lonely.jpg"]));
    }

    #[test]
    fn test_first_secondary_in_scan_order_wins() {
        let primary = paths(&["jpg/a.jpg"]);

        let pairs = match_pairs(&primary, &paths(&["raw/a.nef", "raw/a.cr2"]));
        assert_eq!(pairs, vec![Pair::new("jpg/a.jpg".into(), "raw/a.nef".into())]);

        let pairs = match_pairs(&primary, &paths(&["raw/a.cr2", "raw/a.nef"]));
        assert_eq!(pairs, vec![Pair::new("jpg/a.jpg".into(), "raw/a.cr2".into())]);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let pairs = match_pairs(&paths(&["jpg/IMG_1.jpg"]), &paths(&["raw/img_1.cr2"]));
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_only_final_extension_is_ignored() {
        let pairs = match_pairs(&paths(&["jpg/a.b.jpg"]), &paths(&["raw/a.cr2", "raw/a.b.cr2"]));
        assert_eq!(pairs, vec![Pair::new("jpg/a.b.jpg".into(), "raw/a.b.cr2".into())]);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(match_pairs(&[], &paths(&["raw/a.cr2"])).is_empty());
        assert!(match_pairs(&paths(&["jpg/a.jpg"]), &[]).is_empty());
    }
}
