//! Breadcrumb navigation state.

use crate::types::FolderEntry;

/// A lightweight folder reference held in the breadcrumb path.
///
/// Transient: reconstructed from server responses while navigating,
/// never persisted client-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderRef {
    pub id: i64,
    pub name: String,
}

impl FolderRef {
    /// Create a new folder reference.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl From<&FolderEntry> for FolderRef {
    fn from(folder: &FolderEntry) -> Self {
        Self {
            id: folder.id,
            name: folder.name.clone(),
        }
    }
}

/// Ordered ancestor chain from root to the currently viewed folder.
///
/// Invariant: the path is always a strict ancestor chain ending at the
/// current folder. Entering a folder already on the path truncates the
/// path back to that entry, so it never contains duplicates or a
/// folder visited out of order. Entering root clears it.
#[derive(Debug, Clone, Default)]
pub struct Breadcrumb {
    path: Vec<FolderRef>,
}

impl Breadcrumb {
    /// Create an empty breadcrumb (at root).
    pub fn new() -> Self {
        Self::default()
    }

    /// The ancestor chain, root-most first.
    pub fn entries(&self) -> &[FolderRef] {
        &self.path
    }

    /// True when positioned at root.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The currently viewed folder; `None` at root.
    pub fn current(&self) -> Option<&FolderRef> {
        self.path.last()
    }

    /// Identifier of the currently viewed folder; `None` at root.
    pub fn current_id(&self) -> Option<i64> {
        self.path.last().map(|f| f.id)
    }

    /// Return to root.
    pub fn clear(&mut self) {
        self.path.clear();
    }

    /// Apply the truncate-or-append rule for entering a folder.
    pub fn enter(&mut self, folder: FolderRef) {
        if let Some(pos) = self.path.iter().position(|f| f.id == folder.id) {
            self.path.truncate(pos + 1);
        } else {
            self.path.push(folder);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(crumb: &Breadcrumb) -> Vec<&str> {
        crumb.entries().iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_drill_down_appends() {
        let mut crumb = Breadcrumb::new();
        crumb.enter(FolderRef::new(1, "a"));
        crumb.enter(FolderRef::new(2, "b"));
        crumb.enter(FolderRef::new(3, "c"));

        assert_eq!(names(&crumb), vec!["a", "b", "c"]);
        assert_eq!(crumb.current_id(), Some(3));
    }

    #[test]
    fn test_revisiting_ancestor_truncates() {
        let mut crumb = Breadcrumb::new();
        crumb.enter(FolderRef::new(1, "a"));
        crumb.enter(FolderRef::new(2, "b"));
        crumb.enter(FolderRef::new(3, "c"));

        crumb.enter(FolderRef::new(1, "a"));
        assert_eq!(names(&crumb), vec!["a"]);
        assert_eq!(crumb.current_id(), Some(1));
    }

    #[test]
    fn test_revisiting_current_is_stable() {
        let mut crumb = Breadcrumb::new();
        crumb.enter(FolderRef::new(1, "a"));
        crumb.enter(FolderRef::new(2, "b"));

        crumb.enter(FolderRef::new(2, "b"));
        assert_eq!(names(&crumb), vec!["a", "b"]);
    }

    #[test]
    fn test_clear_returns_to_root() {
        let mut crumb = Breadcrumb::new();
        crumb.enter(FolderRef::new(1, "a"));
        crumb.enter(FolderRef::new(2, "b"));

        crumb.clear();
        assert!(crumb.is_empty());
        assert_eq!(crumb.current_id(), None);
    }

    #[test]
    fn test_branching_after_truncation() {
        let mut crumb = Breadcrumb::new();
        crumb.enter(FolderRef::new(1, "a"));
        crumb.enter(FolderRef::new(2, "b"));
        crumb.enter(FolderRef::new(1, "a"));
        crumb.enter(FolderRef::new(4, "d"));

        assert_eq!(names(&crumb), vec!["a", "d"]);
    }

    #[test]
    fn test_path_stays_prefix_of_deepest_chain() {
        // Drill five levels deep, then take breadcrumb links back to
        // ancestors. After every jump the path must hold no duplicate
        // ids and must be a prefix of the deepest chain visited.
        let deepest = [1_i64, 2, 3, 4, 5];
        let mut crumb = Breadcrumb::new();
        for id in deepest {
            crumb.enter(FolderRef::new(id, format!("f{}", id)));
        }

        for jump in [4_i64, 4, 2, 1] {
            // Breadcrumb links only ever point at entries on the path.
            assert!(crumb.entries().iter().any(|f| f.id == jump));
            crumb.enter(FolderRef::new(jump, format!("f{}", jump)));

            let ids: Vec<i64> = crumb.entries().iter().map(|f| f.id).collect();
            let mut deduped = ids.clone();
            deduped.dedup();
            assert_eq!(ids, deduped, "path contains duplicates: {:?}", ids);
            assert!(
                deepest.starts_with(&ids),
                "path is not a prefix of the deepest chain: {:?}",
                ids
            );
            assert_eq!(crumb.current_id(), Some(jump));
        }
    }
}
