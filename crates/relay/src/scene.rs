use std::sync::Arc;

use dashmap::DashMap;
use serde_json::Value;

/// Last-known object-tree snapshots pushed by each user's plugin.
///
/// The web UI reads these to give the prompt flow context about what
/// already exists in the user's place. Last write wins: every sync
/// replaces the stored tree wholesale, with no merge, versioning, or
/// conflict detection. Snapshot shape is not validated here — that is
/// part of the plugin/UI contract, not the store's.
#[derive(Clone, Default)]
pub struct SceneMirror {
    scenes: Arc<DashMap<String, Value>>,
}

impl SceneMirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unconditionally overwrite `user`'s stored snapshot.
    pub fn replace(&self, user: &str, tree: Value) {
        self.scenes.insert(user.to_string(), tree);
    }

    /// The last stored snapshot, or `None` if the plugin has never
    /// synced. Absence is distinct from an empty tree.
    pub fn fetch(&self, user: &str) -> Option<Value> {
        self.scenes.get(user).map(|entry| entry.value().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_until_first_sync() {
        let mirror = SceneMirror::new();
        assert_eq!(mirror.fetch("user42"), None);
    }

    #[test]
    fn last_write_wins() {
        let mirror = SceneMirror::new();
        mirror.replace("user42", json!({"name": "Workspace", "children": [{"name": "Wall"}]}));
        mirror.replace("user42", json!({"name": "Workspace", "children": []}));

        // The second snapshot fully replaces the first — never a merge.
        assert_eq!(
            mirror.fetch("user42"),
            Some(json!({"name": "Workspace", "children": []}))
        );
    }

    #[test]
    fn empty_tree_is_not_absence() {
        let mirror = SceneMirror::new();
        mirror.replace("user42", json!({}));
        assert_eq!(mirror.fetch("user42"), Some(json!({})));
    }

    #[test]
    fn snapshots_are_isolated_per_user() {
        let mirror = SceneMirror::new();
        mirror.replace("alice", json!({"name": "AlicePlace"}));
        assert_eq!(mirror.fetch("bob"), None);
    }
}
