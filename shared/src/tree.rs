//! Lazy materialization model for the referral network.
//!
//! The server-side tree is unbounded; the client materializes it one level at
//! a time, only for nodes the user has explicitly expanded. Nodes live in an
//! arena keyed by referral code, so attaching a fetched level is an index
//! lookup plus an insert rather than a recursive walk, and the "fetched at
//! most once" invariant is a plain `Option` check.
//!
//! The model is deliberately free of I/O: [`ReferralTree::toggle`] tells the
//! caller *whether* a fetch is required, and the caller feeds the result back
//! through [`ReferralTree::insert_children`]. Collapsing never discards
//! children, so re-expanding a node is always fetch-free.

use std::collections::{HashMap, HashSet};

use crate::dto::network::ReferralUser;

/// Result of toggling a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The node was open and is now hidden. Children are kept.
    Collapsed,
    /// The node is now open and its children are already materialized
    /// (possibly as an empty, previously fetched level).
    Expanded,
    /// The node is now open but its children have never been fetched.
    /// The caller must fetch exactly one level for this code.
    NeedsFetch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct NodeEntry {
    user: ReferralUser,
    /// `None` until the node's level has been fetched; `Some(vec![])` after a
    /// fetch that returned no referrals. The distinction is what makes
    /// re-expansion fetch-free.
    children: Option<Vec<String>>,
}

/// Client-side arena of the portion of the referral network seen so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferralTree {
    nodes: HashMap<String, NodeEntry>,
    roots: Vec<String>,
    expanded: HashSet<String>,
}

impl ReferralTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the top level (the logged-in user's direct referrals),
    /// replacing any previous state.
    pub fn set_roots(&mut self, users: Vec<ReferralUser>) {
        self.nodes.clear();
        self.expanded.clear();
        self.roots = users.iter().map(|u| u.referral_code.clone()).collect();
        for user in users {
            self.nodes.insert(
                user.referral_code.clone(),
                NodeEntry { user, children: None },
            );
        }
    }

    /// Expands or collapses a node. See [`ToggleOutcome`] for the contract.
    pub fn toggle(&mut self, code: &str) -> ToggleOutcome {
        if self.expanded.remove(code) {
            return ToggleOutcome::Collapsed;
        }
        self.expanded.insert(code.to_string());
        match self.nodes.get(code) {
            Some(entry) if entry.children.is_some() => ToggleOutcome::Expanded,
            _ => ToggleOutcome::NeedsFetch,
        }
    }

    /// Attaches a fetched level under `parent`. First insert wins; a second
    /// call for the same parent is ignored so a node can never be re-fetched
    /// into a different shape.
    pub fn insert_children(&mut self, parent: &str, children: Vec<ReferralUser>) {
        let Some(entry) = self.nodes.get(parent) else {
            return;
        };
        if entry.children.is_some() {
            return;
        }
        let codes: Vec<String> = children.iter().map(|u| u.referral_code.clone()).collect();
        for child in children {
            self.nodes
                .entry(child.referral_code.clone())
                .or_insert(NodeEntry { user: child, children: None });
        }
        if let Some(entry) = self.nodes.get_mut(parent) {
            entry.children = Some(codes);
        }
    }

    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    pub fn node(&self, code: &str) -> Option<&ReferralUser> {
        self.nodes.get(code).map(|e| &e.user)
    }

    /// Children of a node, or `None` while the level has never been fetched.
    pub fn children_of(&self, code: &str) -> Option<&[String]> {
        self.nodes.get(code).and_then(|e| e.children.as_deref())
    }

    pub fn is_expanded(&self, code: &str) -> bool {
        self.expanded.contains(code)
    }

    /// Whether the node's level has been fetched (even if it came back empty).
    pub fn is_loaded(&self, code: &str) -> bool {
        self.nodes
            .get(code)
            .map(|e| e.children.is_some())
            .unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, code: &str) -> ReferralUser {
        ReferralUser {
            name: name.to_string(),
            referral_code: code.to_string(),
        }
    }

    fn tree_with_roots() -> ReferralTree {
        let mut tree = ReferralTree::new();
        tree.set_roots(vec![user("Asha", "A1"), user("Bela", "B2")]);
        tree
    }

    #[test]
    fn first_expand_requests_exactly_one_fetch() {
        let mut tree = tree_with_roots();
        assert_eq!(tree.toggle("A1"), ToggleOutcome::NeedsFetch);
        tree.insert_children("A1", vec![user("Chitra", "C3")]);

        // Collapse and re-expand: no further fetch is ever requested.
        assert_eq!(tree.toggle("A1"), ToggleOutcome::Collapsed);
        assert_eq!(tree.toggle("A1"), ToggleOutcome::Expanded);
    }

    #[test]
    fn collapse_hides_but_keeps_fetched_children() {
        let mut tree = tree_with_roots();
        tree.toggle("A1");
        tree.insert_children("A1", vec![user("Chitra", "C3"), user("Dev", "D4")]);

        assert_eq!(tree.toggle("A1"), ToggleOutcome::Collapsed);
        assert!(!tree.is_expanded("A1"));
        assert_eq!(tree.children_of("A1"), Some(&["C3".to_string(), "D4".to_string()][..]));
        assert_eq!(tree.node("C3").unwrap().name, "Chitra");
    }

    #[test]
    fn empty_fetched_level_counts_as_loaded() {
        let mut tree = tree_with_roots();
        assert_eq!(tree.toggle("B2"), ToggleOutcome::NeedsFetch);
        tree.insert_children("B2", vec![]);

        assert!(tree.is_loaded("B2"));
        assert_eq!(tree.children_of("B2"), Some(&[][..]));
        tree.toggle("B2");
        assert_eq!(tree.toggle("B2"), ToggleOutcome::Expanded);
    }

    #[test]
    fn second_insert_for_same_parent_is_ignored() {
        let mut tree = tree_with_roots();
        tree.toggle("A1");
        tree.insert_children("A1", vec![user("Chitra", "C3")]);
        tree.insert_children("A1", vec![user("Eesha", "E5")]);

        assert_eq!(tree.children_of("A1"), Some(&["C3".to_string()][..]));
        assert!(tree.node("E5").is_none());
    }

    #[test]
    fn deep_expansion_is_an_index_lookup() {
        let mut tree = tree_with_roots();
        tree.toggle("A1");
        tree.insert_children("A1", vec![user("Chitra", "C3")]);
        assert_eq!(tree.toggle("C3"), ToggleOutcome::NeedsFetch);
        tree.insert_children("C3", vec![user("Farid", "F6")]);

        assert!(tree.is_expanded("A1"));
        assert!(tree.is_expanded("C3"));
        assert_eq!(tree.children_of("C3"), Some(&["F6".to_string()][..]));
    }

    #[test]
    fn set_roots_resets_previous_expansion_state() {
        let mut tree = tree_with_roots();
        tree.toggle("A1");
        tree.insert_children("A1", vec![user("Chitra", "C3")]);

        tree.set_roots(vec![user("Gita", "G7")]);
        assert!(!tree.is_expanded("A1"));
        assert!(tree.node("C3").is_none());
        assert_eq!(tree.roots(), &["G7".to_string()]);
    }
}
