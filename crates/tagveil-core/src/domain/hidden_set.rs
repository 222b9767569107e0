//! The hidden set: which tag paths are excluded from the sidebar.
//!
//! Membership is exact, but [`HiddenSet::covers`] extends the test to
//! descendants, so hiding `Work::Urgent` also covers `Work::Urgent::Today`.
//! Entries are not validated against the host's current tags; a stale entry
//! simply never matches anything and is harmless.
//!
//! The set normalizes its contents: surrounding whitespace is trimmed, empty
//! entries are dropped and duplicates collapse. When serialized (for the
//! config file or the management dialog) entries come out in
//! case-insensitive lexicographic order, so the persisted form is stable
//! across sessions.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::tag_path::TagPath;

/// Set of tag paths hidden from the sidebar. Unique, unordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct HiddenSet {
    paths: BTreeSet<TagPath>,
}

impl HiddenSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of hidden paths.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns `true` when nothing is hidden.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Exact membership test, without descendant matching.
    pub fn contains(&self, path: &TagPath) -> bool {
        self.paths.contains(path)
    }

    /// Returns `true` if `path` is hidden, either as a member or as a
    /// descendant of a member.
    pub fn covers(&self, path: &TagPath) -> bool {
        self.paths.contains(path) || self.paths.iter().any(|hidden| hidden.is_ancestor_of(path))
    }

    /// Adds a path. Returns `true` if the set changed; empty paths are
    /// rejected and already-present paths leave the set untouched.
    pub fn insert(&mut self, path: TagPath) -> bool {
        if path.is_empty() {
            return false;
        }
        self.paths.insert(path)
    }

    /// Removes an exact member. Returns `true` if the set changed.
    ///
    /// A path that is only covered through an ancestor is not a member, so
    /// removing it changes nothing; visibility returns when the ancestor
    /// itself is removed.
    pub fn remove(&mut self, path: &TagPath) -> bool {
        self.paths.remove(path)
    }

    /// Removes every listed member in one pass. Returns `true` if any was
    /// actually present.
    pub fn remove_all<I>(&mut self, paths: I) -> bool
    where
        I: IntoIterator<Item = TagPath>,
    {
        let mut changed = false;
        for path in paths {
            changed |= self.paths.remove(&path);
        }
        changed
    }

    /// Empties the set. Returns `true` if it held anything.
    pub fn clear(&mut self) -> bool {
        if self.paths.is_empty() {
            return false;
        }
        self.paths.clear();
        true
    }

    /// Iterates over members in byte order.
    pub fn iter(&self) -> impl Iterator<Item = &TagPath> {
        self.paths.iter()
    }

    /// Members in case-insensitive lexicographic order, the order shown in
    /// the management dialog and written to the config file.
    pub fn sorted(&self) -> Vec<TagPath> {
        let mut paths: Vec<TagPath> = self.paths.iter().cloned().collect();
        paths.sort_by(|a, b| a.fold_key().cmp(&b.fold_key()).then_with(|| a.cmp(b)));
        paths
    }
}

impl From<Vec<String>> for HiddenSet {
    fn from(raw: Vec<String>) -> Self {
        let mut set = Self::new();
        for value in raw {
            set.insert(TagPath::new(value));
        }
        set
    }
}

impl From<HiddenSet> for Vec<String> {
    fn from(set: HiddenSet) -> Self {
        set.sorted().into_iter().map(|p| p.as_str().to_string()).collect()
    }
}

impl FromIterator<TagPath> for HiddenSet {
    fn from_iter<I: IntoIterator<Item = TagPath>>(iter: I) -> Self {
        let mut set = Self::new();
        for path in iter {
            set.insert(path);
        }
        set
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn path(s: &str) -> TagPath {
        TagPath::new(s)
    }

    #[test]
    fn test_empty_set_covers_nothing() {
        let set = HiddenSet::new();
        assert!(!set.covers(&path("Work::Urgent")));
    }

    #[test]
    fn test_insert_then_covers() {
        let mut set = HiddenSet::new();
        assert!(set.insert(path("Work::Urgent")));
        assert!(set.covers(&path("Work::Urgent")));
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut set = HiddenSet::new();
        assert!(set.insert(path("A")));
        let snapshot = set.clone();

        // Second insert reports no change and leaves the set identical
        assert!(!set.insert(path("A")));
        assert_eq!(set, snapshot);
    }

    #[test]
    fn test_insert_rejects_empty_path() {
        let mut set = HiddenSet::new();
        assert!(!set.insert(path("   ")));
        assert!(set.is_empty());
    }

    #[test]
    fn test_covers_descendants_of_member() {
        let mut set = HiddenSet::new();
        set.insert(path("A::B"));
        assert!(set.covers(&path("A::B::C")));
        assert!(set.covers(&path("A::B::C::D")));
    }

    #[test]
    fn test_covers_respects_segment_boundary() {
        let mut set = HiddenSet::new();
        set.insert(path("A::B"));
        assert!(!set.covers(&path("A::BC")));
        assert!(!set.covers(&path("A")));
    }

    #[test]
    fn test_remove_restores_visibility() {
        let mut set = HiddenSet::new();
        set.insert(path("Work::Urgent"));
        assert!(set.remove(&path("Work::Urgent")));
        assert!(!set.covers(&path("Work::Urgent")));
    }

    #[test]
    fn test_remove_of_covered_non_member_is_noop() {
        let mut set = HiddenSet::new();
        set.insert(path("A"));

        // "A::B" is covered via its ancestor but is not itself a member
        assert!(!set.remove(&path("A::B")));
        assert!(set.covers(&path("A::B")));
    }

    #[test]
    fn test_remove_all_reports_whether_any_member_was_removed() {
        let mut set = HiddenSet::new();
        set.insert(path("A"));
        set.insert(path("B"));

        assert!(set.remove_all(vec![path("B"), path("missing")]));
        assert!(!set.remove_all(vec![path("missing")]));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_clear_empties_the_set() {
        let mut set = HiddenSet::new();
        set.insert(path("A"));
        set.insert(path("B"));

        assert!(set.clear());
        assert!(set.is_empty());
        assert!(!set.covers(&path("A")));

        // Clearing an already empty set reports no change
        assert!(!set.clear());
    }

    #[test]
    fn test_from_vec_normalizes_entries() {
        let set = HiddenSet::from(vec![
            "  B::inner ".to_string(),
            "a".to_string(),
            "".to_string(),
            "a".to_string(),
            "   ".to_string(),
        ]);

        assert_eq!(set.len(), 2);
        assert!(set.contains(&path("a")));
        assert!(set.contains(&path("B::inner")));
    }

    #[test]
    fn test_sorted_orders_case_insensitively() {
        let set = HiddenSet::from(vec![
            "beta".to_string(),
            "Alpha".to_string(),
            "alpha::child".to_string(),
        ]);

        let order: Vec<String> = set.sorted().iter().map(|p| p.to_string()).collect();
        assert_eq!(order, vec!["Alpha", "alpha::child", "beta"]);
    }

    #[test]
    fn test_serde_round_trip_preserves_members() {
        let set = HiddenSet::from(vec!["Work::Urgent".to_string(), "Archive".to_string()]);

        let json = serde_json::to_string(&set).expect("serialize");
        let restored: HiddenSet = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(restored, set);
    }

    #[test]
    fn test_serializes_as_sorted_string_list() {
        let set = HiddenSet::from(vec!["zeta".to_string(), "Alpha".to_string()]);
        let json = serde_json::to_string(&set).expect("serialize");
        assert_eq!(json, r#"["Alpha","zeta"]"#);
    }
}
